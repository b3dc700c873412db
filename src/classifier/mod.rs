// src/classifier/mod.rs
pub mod funder_graph;
pub mod predicates;


use crate::dataset::{VotingDataset, TOTAL_PROJECT};
use crate::error::{AuditError, AuditResult};
use crate::types::{AuditReport, Thresholds, TierTally};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Classifies a voting dataset into fraud tiers and surfaces the funder
/// addresses most likely behind manufactured votes.
///
/// One classification run is a pure transform of the dataset and the
/// thresholds; nothing survives between runs, so hosts may re-invoke it
/// whenever a fresh dataset arrives or a knob changes.
pub struct FraudClassifier {
    thresholds: Thresholds,
}

impl FraudClassifier {
    /// Create a classifier; rejects out-of-domain thresholds up front
    pub fn new(thresholds: Thresholds) -> AuditResult<Self> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Run the full classification: funder graph, per-vote tier
    /// assignment, funder ranking.
    ///
    /// Malformed input rejects the whole run with the offending address;
    /// no partial aggregates are ever returned.
    pub fn classify(&self, dataset: &VotingDataset) -> AuditResult<AuditReport> {
        dataset.validate()?;

        // Step 1: count, per funder, the accounts it originated. Must be
        // complete before any vote is scored.
        let mut ledger = funder_graph::build_ledger(dataset);

        let cutoff = predicates::cutoff_timestamp(&self.thresholds);
        let mut histograms: BTreeMap<String, TierTally> = BTreeMap::new();

        // Step 2: score every vote, total first so the pseudo-project
        // never observes per-project accumulation.
        for project in dataset.project_names() {
            let Some(voters) = dataset.votes.get(project) else {
                continue;
            };
            let mut tally = TierTally::default();

            for address in voters {
                let Some(account) = dataset.account(address) else {
                    return Err(AuditError::UnknownVoter {
                        project: project.to_string(),
                        address: address.clone(),
                    });
                };
                let funder = &account.first_transaction_from;

                // Votes from accounts funded by the equalizer address are
                // disqualified outright, not scored.
                if self.thresholds.equalizer.as_deref() == Some(funder.as_str()) {
                    tally.equalized += 1;
                    if project != TOTAL_PROJECT {
                        ledger.entry(funder.clone()).or_default().equalized_votes += 1;
                    }
                    continue;
                }

                if project != TOTAL_PROJECT {
                    let entry = ledger.entry(funder.clone()).or_default();
                    *entry.votes_by_project.entry(project.to_string()).or_insert(0) += 1;
                }

                let funded_count = ledger.get(funder).map(|e| e.funded_count).unwrap_or(0);
                let tier = predicates::fraud_tier(account, funded_count, cutoff, &self.thresholds);
                tally.bump(tier);
            }

            histograms.insert(project.to_string(), tally);
        }

        // Step 3: rank funders for the presenter table
        let top_funders = funder_graph::rank_funders(&ledger);

        let report = AuditReport {
            id: Uuid::new_v4(),
            generated_at: chrono::Utc::now(),
            histograms,
            funder_ledger: ledger,
            top_funders,
        };

        let stats = report.stats();
        log::info!(
            "Classified {} votes: {} valid, {} flagged, {} equalized ({} distinct funders)",
            stats.total_votes,
            stats.valid_votes,
            stats.flagged_votes,
            stats.equalized_votes,
            stats.distinct_funders
        );

        Ok(report)
    }
}
