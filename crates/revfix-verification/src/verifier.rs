//! FindingDisappearanceVerifier: corrects a pair's confidence from the CI
//! run that followed the fix.

use revfix_core::constants::deltas;
use revfix_core::errors::ConfigError;
use revfix_core::models::{
    paths, FindingFixPair, FindingResolvedEvent, PostFixCiFindings, ReviewFindingObserved,
    VerificationOutcome, VerificationResult,
};
use revfix_core::{ConfigFileMatcher, RevfixConfig};
use tracing::{debug, info};

use crate::matching::finding_still_reported;

/// Stateless verifier; share one instance across workers.
#[derive(Debug, Clone)]
pub struct FindingDisappearanceVerifier {
    config_files: ConfigFileMatcher,
}

impl FindingDisappearanceVerifier {
    pub fn new(config_files: ConfigFileMatcher) -> Self {
        Self { config_files }
    }

    /// Build from the `[verification]` section, built-in globs plus extras.
    pub fn from_config(config: &RevfixConfig) -> Result<Self, ConfigError> {
        let matcher = ConfigFileMatcher::new(&config.verification.config_file_patterns())?;
        Ok(Self::new(matcher))
    }

    pub fn with_defaults() -> Result<Self, ConfigError> {
        Ok(Self::new(ConfigFileMatcher::with_defaults()?))
    }

    /// Verify one pair against the post-fix CI results.
    pub fn verify(
        &self,
        finding: &ReviewFindingObserved,
        pair: &FindingFixPair,
        post_fix: &PostFixCiFindings,
    ) -> VerificationResult {
        let span = revfix_core::verification_span!(finding.finding_id(), post_fix.ci_run_id);
        let _guard = span.enter();

        let outcome = self.classify(finding, post_fix);
        let confirmed = outcome == VerificationOutcome::Confirmed;
        let resolved_event = confirmed.then(|| FindingResolvedEvent {
            finding_id: finding.finding_id().to_string(),
            fix_commit_sha: pair.fix_commit_sha.clone(),
            ci_run_id: post_fix.ci_run_id.clone(),
            verification_commit_sha: post_fix.commit_sha.clone(),
        });

        info!(
            pair_id = %pair.pair_id,
            outcome = %outcome,
            confidence_delta = delta_for(outcome),
            source = %post_fix.verification_source,
            "pair verified"
        );

        VerificationResult {
            finding_id: finding.finding_id().to_string(),
            pair_id: pair.pair_id.clone(),
            outcome,
            disappearance_confirmed: confirmed,
            confidence_delta: delta_for(outcome),
            resolved_event,
        }
    }

    /// Verify many pairs against one CI run. Output order follows input order.
    pub fn verify_batch(
        &self,
        pairs: &[(ReviewFindingObserved, FindingFixPair)],
        post_fix: &PostFixCiFindings,
    ) -> Vec<VerificationResult> {
        pairs
            .iter()
            .map(|(finding, pair)| self.verify(finding, pair, post_fix))
            .collect()
    }

    fn classify(
        &self,
        finding: &ReviewFindingObserved,
        post_fix: &PostFixCiFindings,
    ) -> VerificationOutcome {
        if finding_still_reported(finding, &post_fix.findings) {
            return VerificationOutcome::StillPresent;
        }
        if self.config_files.any_config_file(&post_fix.pr_files) {
            debug!(pr_files = post_fix.pr_files.len(), "config file changed in PR");
            return VerificationOutcome::ConfigOnly;
        }
        let fix_files = &post_fix.fix_modified_files;
        if !fix_files.is_empty()
            && !fix_files
                .iter()
                .any(|f| paths::same_file(f, finding.file_path()))
        {
            return VerificationOutcome::DisappearsWithoutMod;
        }
        VerificationOutcome::Confirmed
    }
}

/// Frozen confidence correction per outcome.
pub fn delta_for(outcome: VerificationOutcome) -> f64 {
    match outcome {
        VerificationOutcome::StillPresent => deltas::STILL_PRESENT,
        VerificationOutcome::ConfigOnly => deltas::CONFIG_ONLY,
        VerificationOutcome::DisappearsWithoutMod => deltas::DISAPPEARS_WITHOUT_MOD,
        VerificationOutcome::Confirmed => deltas::CONFIRMED,
    }
}
