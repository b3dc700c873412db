// src/lib.rs
pub mod types;
pub mod error;
pub mod dataset;
pub mod classifier;

pub use classifier::FraudClassifier;
pub use dataset::{VotingDataset, TOTAL_PROJECT};
pub use error::{AuditError, AuditResult};
pub use types::{
    Account, AuditReport, AuditStats, FunderEntry, FunderLedger, Thresholds, TierTally, TopFunder,
    DEFAULT_EQUALIZER_ADDRESS, SNAPSHOT_EPOCH, TOP_FUNDER_COUNT,
};

/// Main fraud auditor - wraps the classifier with dataset plumbing
pub struct FraudAuditor {
    classifier: FraudClassifier,
}

impl FraudAuditor {
    /// Create an auditor with the published default thresholds
    pub fn new() -> AuditResult<Self> {
        Self::with_thresholds(Thresholds::default())
    }

    /// Create an auditor with custom thresholds
    pub fn with_thresholds(thresholds: Thresholds) -> AuditResult<Self> {
        Ok(Self {
            classifier: FraudClassifier::new(thresholds)?,
        })
    }

    /// Classify an already-loaded dataset
    pub fn classify(&self, dataset: &VotingDataset) -> AuditResult<AuditReport> {
        self.classifier.classify(dataset)
    }

    /// Parse the loader's JSON document, derive the `total` list if the
    /// variant omits it, and classify
    pub fn classify_json(&self, raw: &str) -> AuditResult<AuditReport> {
        let mut dataset = VotingDataset::from_json_str(raw)?;
        dataset.ensure_total();
        self.classify(&dataset)
    }

    pub fn thresholds(&self) -> &Thresholds {
        self.classifier.thresholds()
    }

    /// Swap in new thresholds (e.g. after a knob change); the next
    /// classification run picks them up
    pub fn set_thresholds(&mut self, thresholds: Thresholds) -> AuditResult<()> {
        self.classifier = FraudClassifier::new(thresholds)?;
        Ok(())
    }
}
