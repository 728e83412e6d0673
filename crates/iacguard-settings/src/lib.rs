//! Config parsing and profile/preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{IacguardConfigV1, RuleConfig};
pub use presets::PROFILES;
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `iacguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<IacguardConfigV1> {
    let cfg: IacguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the engine (preset + file + overrides + per-rule config).
pub fn resolve_config(
    cfg: IacguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
