//! # revfix-core
//!
//! Foundation crate for review-fix pairing.
//! Defines the value objects, errors, config, frozen constants, and tracing
//! setup shared by the pairing, verification, and reward crates.

pub mod config;
pub mod config_files;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::RevfixConfig;
pub use config_files::ConfigFileMatcher;
pub use errors::{RevfixError, RevfixResult};
pub use models::{
    CandidateFix, Confidence, FindingFixPair, LineRange, PairingType, ReviewFindingObserved,
    ReviewFixApplied, RuleId, Severity,
};
