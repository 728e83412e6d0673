//! Pure policy evaluation (no IO).
//!
//! Input: resource descriptions constructed elsewhere.
//! Output: violations + verdict + summary data.

#![forbid(unsafe_code)]

pub mod checks;
pub mod model;
pub mod policy;
pub mod report;
pub mod value;

mod engine;
mod fingerprint;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{evaluate, evaluate_config, evaluate_pack, evaluate_parallel};
pub use model::{Properties, Resource, ResourceError};
pub use policy::{EffectiveConfig, FailOn, PolicyPack, Predicate, Rule, RuleError};
pub use value::{PropertyPath, PropertyValue};
