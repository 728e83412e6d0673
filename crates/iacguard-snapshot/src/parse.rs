use anyhow::Context;
use iacguard_domain::{Properties, PropertyValue, Resource};
use serde::Deserialize;
use serde_json::Value;

const PROVIDER_KIND_PREFIX: &str = "pulumi:providers:";
const STACK_KIND: &str = "pulumi:pulumi:Stack";

/// One entry of a flat snapshot (`{"resources": [...]}` or a bare array).
///
/// `type` names the kind and `props` / `inputs` the properties when the canonical key is absent.
/// An entry may carry several of them; the first present one in declaration order wins.
#[derive(Debug, Deserialize)]
struct SnapshotEntry {
    #[serde(default)]
    kind: Option<String>,
    #[serde(default, rename = "type")]
    type_: Option<String>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    properties: Option<PropertyValue>,
    #[serde(default)]
    props: Option<PropertyValue>,
    #[serde(default)]
    inputs: Option<PropertyValue>,
}

impl SnapshotEntry {
    fn kind(&mut self) -> String {
        self.kind.take().or_else(|| self.type_.take()).unwrap_or_default()
    }

    fn properties(&mut self) -> Option<PropertyValue> {
        self.properties
            .take()
            .or_else(|| self.props.take())
            .or_else(|| self.inputs.take())
    }
}

/// One entry of `pulumi stack export` output.
#[derive(Debug, Deserialize)]
struct ExportedResource {
    #[serde(default)]
    urn: String,
    #[serde(default, rename = "type")]
    kind: String,
    #[serde(default)]
    inputs: Option<PropertyValue>,
    #[serde(default)]
    outputs: Option<PropertyValue>,
}

/// Parse snapshot text into resources, preserving entry order.
///
/// `source` only labels errors.
pub fn parse_snapshot(source: &str, text: &str) -> anyhow::Result<Vec<Resource>> {
    let doc: Value = serde_json::from_str(text).with_context(|| format!("parse {source}"))?;

    match doc {
        Value::Array(entries) => parse_entries(source, entries),
        Value::Object(mut obj) => {
            if let Some(resources) = obj.remove("resources") {
                let Value::Array(entries) = resources else {
                    anyhow::bail!("{source}: `resources` must be an array");
                };
                return parse_entries(source, entries);
            }
            if let Some(Value::Object(mut deployment)) = obj.remove("deployment") {
                let entries = match deployment.remove("resources") {
                    Some(Value::Array(entries)) => entries,
                    None | Some(Value::Null) => Vec::new(),
                    Some(_) => anyhow::bail!("{source}: `deployment.resources` must be an array"),
                };
                return parse_export(source, entries);
            }
            anyhow::bail!(
                "{source}: unrecognized snapshot shape (expected `resources`, an array, or a stack export)"
            )
        }
        _ => anyhow::bail!("{source}: snapshot must be a JSON object or array"),
    }
}

fn parse_entries(source: &str, entries: Vec<Value>) -> anyhow::Result<Vec<Resource>> {
    let mut out = Vec::with_capacity(entries.len());
    for (index, raw) in entries.into_iter().enumerate() {
        let mut entry: SnapshotEntry = serde_json::from_value(raw)
            .with_context(|| format!("{source}: resource entry {index}"))?;
        let properties = into_properties(entry.properties())
            .with_context(|| format!("{source}: resource entry {index}"))?;
        let resource = Resource::new(entry.kind(), entry.name, properties)
            .with_context(|| format!("{source}: resource entry {index}"))?;
        out.push(resource);
    }
    Ok(out)
}

fn parse_export(source: &str, entries: Vec<Value>) -> anyhow::Result<Vec<Resource>> {
    let mut out = Vec::with_capacity(entries.len());
    for (index, raw) in entries.into_iter().enumerate() {
        let entry: ExportedResource = serde_json::from_value(raw)
            .with_context(|| format!("{source}: deployment resource {index}"))?;

        if entry.kind.starts_with(PROVIDER_KIND_PREFIX) || entry.kind == STACK_KIND {
            tracing::debug!(source, index, kind = %entry.kind, "skipping non-infrastructure resource");
            continue;
        }

        let name = urn_name(&entry.urn).to_string();
        let declared = match entry.inputs {
            Some(inputs) if inputs.is_truthy() => Some(inputs),
            _ => entry.outputs,
        };
        let properties = into_properties(declared)
            .with_context(|| format!("{source}: deployment resource {index}"))?;
        let resource = Resource::new(entry.kind, name, properties)
            .with_context(|| format!("{source}: deployment resource {index}"))?
            .with_urn(entry.urn);
        out.push(resource);
    }
    Ok(out)
}

/// The logical name is the last `::`-separated URN segment.
fn urn_name(urn: &str) -> &str {
    urn.rsplit("::").next().unwrap_or_default()
}

fn into_properties(value: Option<PropertyValue>) -> anyhow::Result<Properties> {
    match value {
        None | Some(PropertyValue::Null) => Ok(Properties::new()),
        Some(PropertyValue::Mapping(map)) => Ok(map),
        Some(_) => anyhow::bail!("properties must be a JSON object"),
    }
}
