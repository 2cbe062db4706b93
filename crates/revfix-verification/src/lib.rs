//! # revfix-verification
//!
//! Confirms or corrects a finding-fix pair once CI has re-run on the fix.
//!
//! Checks run in strict priority order, first match wins:
//! 1. **still_present**: the finding is reported again
//! 2. **config_only**: the PR edited a lint/format config file
//! 3. **disappears_without_mod**: the fix never touched the finding's file
//! 4. **confirmed**: the fix resolved the finding

pub mod matching;
pub mod verifier;

pub use matching::finding_still_reported;
pub use verifier::{delta_for, FindingDisappearanceVerifier};
