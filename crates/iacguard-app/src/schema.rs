use anyhow::Context;
use iacguard_settings::IacguardConfigV1;
use iacguard_types::IacguardReport;

/// Which document a JSON schema is generated for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaKind {
    Report,
    Config,
}

pub fn schema_json(kind: SchemaKind) -> anyhow::Result<String> {
    let schema = match kind {
        SchemaKind::Report => schemars::schema_for!(IacguardReport),
        SchemaKind::Config => schemars::schema_for!(IacguardConfigV1),
    };
    serde_json::to_string_pretty(&schema).context("serialize schema")
}
