//! Value objects passed between the rule-runner, the pairing core, and the
//! persistence layer.

pub mod candidate;
pub mod confidence;
pub mod finding;
pub mod fix;
pub mod line_range;
pub mod pair;
pub mod paths;
pub mod reward;
pub mod rule_id;
pub mod verification;

pub use candidate::CandidateFix;
pub use confidence::Confidence;
pub use finding::{NewFinding, ReviewFindingObserved, Severity};
pub use fix::{NewFix, ReviewFixApplied};
pub use line_range::LineRange;
pub use pair::{FindingFixPair, PairingType};
pub use reward::{RewardOutcome, RewardSignal};
pub use rule_id::RuleId;
pub use verification::{
    FindingResolvedEvent, PostFixCiFindings, PostFixFinding, VerificationOutcome,
    VerificationResult,
};
