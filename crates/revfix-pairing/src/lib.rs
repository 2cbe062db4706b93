//! # revfix-pairing
//!
//! Joins a review finding with the commit that most likely fixed it.
//!
//! ## Pipeline
//! 1. **Temporal filter**: fix strictly after the finding, inside the window
//! 2. **Ambiguity**: several candidates overlapping the finding's region
//! 3. **Scoring**: weighted signals read from the unified-diff hunks
//! 4. **Selection**: highest score, first-seen on ties
//! 5. **Classification**: autofix > same commit > same PR > temporal > inferred
//! 6. **Promotion**: confident, non-formatter-batch pairs

pub mod classify;
pub mod diff;
pub mod engine;
pub mod scorer;

pub use classify::classify_pairing_type;
pub use engine::{PairingEngine, PairingResult, SkipReason};
pub use scorer::{ConfidenceScorer, ScoreBreakdown, ScoringContext, Signal, SignalContribution};
