//! Configuration system for revfix.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod observability_config;
pub mod pairing_config;
pub mod revfix_config;
pub mod scoring_weights;
pub mod verification_config;

pub use observability_config::ObservabilityConfig;
pub use pairing_config::PairingConfig;
pub use revfix_config::RevfixConfig;
pub use scoring_weights::ScoringWeights;
pub use verification_config::VerificationConfig;
