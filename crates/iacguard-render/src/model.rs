#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableEnforcement {
    Advisory,
    Mandatory,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdictStatus {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableViolation {
    pub resource_name: String,
    pub resource_kind: String,
    pub message: String,
    pub control_id: String,
    pub rule_id: String,
    pub enforcement: RenderableEnforcement,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableData {
    pub pack: String,
    pub violations_emitted: u32,
    pub violations_total: u32,
    pub truncated_reason: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdictStatus,
    pub violations: Vec<RenderableViolation>,
    pub data: RenderableData,
}
