use iacguard_types::{EnforcementLevel, IacguardData, Verdict, VerdictCounts, VerdictStatus, Violation};

pub fn counts_for(violations: &[Violation]) -> VerdictCounts {
    let mut counts = VerdictCounts::default();
    for v in violations {
        match v.enforcement {
            EnforcementLevel::Advisory => counts.advisory += 1,
            EnforcementLevel::Mandatory => counts.mandatory += 1,
        }
    }
    counts
}

/// `fail` on any mandatory violation, `warn` on advisory ones only, `pass` otherwise.
pub fn verdict_status(counts: &VerdictCounts) -> VerdictStatus {
    if counts.mandatory > 0 {
        VerdictStatus::Fail
    } else if counts.advisory > 0 {
        VerdictStatus::Warn
    } else {
        VerdictStatus::Pass
    }
}

#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    pub violations: Vec<Violation>,
    pub data: IacguardData,
}
