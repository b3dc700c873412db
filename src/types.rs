// src/types.rs
use crate::error::{AuditError, AuditResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

/// Reference instant the account-age predicate is measured against.
/// Matches the vote snapshot taken for the production dataset.
pub const SNAPSHOT_EPOCH: i64 = 1_702_422_000;

/// Exactly 86400 seconds per day, no calendar adjustment.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// How many funders the ranked table keeps.
pub const TOP_FUNDER_COUNT: usize = 15;

/// Funder address used in the production dataset to equalize votes for
/// non-cheating projects and disqualify the cheaters.
pub const DEFAULT_EQUALIZER_ADDRESS: &str =
    "FRAUDD77SWCXYGJZS7G5GTNISGWQMM3JEIJIUNGOT64CTG25DJNA45EB7Y";

/// On-chain facts about a voter account at the time it cast its vote.
/// Immutable input; the classifier never mutates account records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub created_at_timestamp: i64,
    pub first_transaction_from: String,
    pub received_transactions_before_vote: u64,
}

/// Tunable fraud criteria. Each knob is independent; defaults reproduce
/// the published numbers for the production dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Accounts younger than this many days before `snapshot_epoch` are flagged.
    pub min_active_days: u32,
    /// Accounts that received fewer transactions than this before voting are flagged.
    pub min_transactions: u64,
    /// Accounts funded by an address that funded more than this many other
    /// accounts are flagged.
    pub funded_by_limit: u64,
    /// Overridable for testing; not a user-facing knob.
    pub snapshot_epoch: i64,
    /// When set, votes from accounts funded by this address are routed to a
    /// separate disqualification bucket instead of being scored.
    pub equalizer: Option<String>,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_active_days: 1,
            min_transactions: 5,
            funded_by_limit: 5,
            snapshot_epoch: SNAPSHOT_EPOCH,
            equalizer: None,
        }
    }
}

impl Thresholds {
    /// Reject out-of-domain knobs before any aggregation starts
    pub fn validate(&self) -> AuditResult<()> {
        if self.min_active_days < 1 {
            return Err(AuditError::InvalidThresholds(
                "min_active_days must be at least 1".to_string(),
            ));
        }
        if let Some(equalizer) = &self.equalizer {
            if equalizer.is_empty() {
                return Err(AuditError::InvalidThresholds(
                    "equalizer address must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Enable the equalizer bucket for the address observed in the
    /// production dataset
    pub fn with_default_equalizer(mut self) -> Self {
        self.equalizer = Some(DEFAULT_EQUALIZER_ADDRESS.to_string());
        self
    }
}

/// Per-project vote tally, bucketed by how many fraud conditions held.
/// `equalized` counts votes routed to the disqualification bucket; those
/// are never scored against the three conditions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierTally {
    pub valid: u64,
    pub one_flag: u64,
    pub two_flags: u64,
    pub three_flags: u64,
    pub equalized: u64,
}

impl TierTally {
    /// Record one vote at the given tier (0..=3)
    pub fn bump(&mut self, tier: u8) {
        match tier {
            0 => self.valid += 1,
            1 => self.one_flag += 1,
            2 => self.two_flags += 1,
            _ => self.three_flags += 1,
        }
    }

    pub fn get(&self, tier: u8) -> u64 {
        match tier {
            0 => self.valid,
            1 => self.one_flag,
            2 => self.two_flags,
            _ => self.three_flags,
        }
    }

    /// Votes with at least one fraud condition
    pub fn flagged(&self) -> u64 {
        self.one_flag + self.two_flags + self.three_flags
    }

    /// All votes counted in this tally, equalized bucket included
    pub fn total(&self) -> u64 {
        self.valid + self.flagged() + self.equalized
    }
}

/// Aggregate view of one funder address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunderEntry {
    /// Number of accounts whose first transaction came from this address
    pub funded_count: u64,
    /// How many of its funded accounts voted for each project
    pub votes_by_project: BTreeMap<String, u64>,
    /// Votes routed to the disqualification bucket instead of a project column
    pub equalized_votes: u64,
}

/// Funder address -> aggregate counters. Built fresh on every
/// classification run; never persisted.
pub type FunderLedger = HashMap<String, FunderEntry>;

/// One row of the ranked funder table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopFunder {
    pub address: String,
    pub funded_count: u64,
    pub votes_by_project: BTreeMap<String, u64>,
    pub equalized_votes: u64,
}

/// Everything one classification run produces
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    pub id: Uuid,
    pub generated_at: chrono::DateTime<chrono::Utc>,
    /// Project name -> tier tally, stable (lexical) project order
    pub histograms: BTreeMap<String, TierTally>,
    pub funder_ledger: FunderLedger,
    pub top_funders: Vec<TopFunder>,
}

impl AuditReport {
    /// Summarize a report for logging or a dashboard header line
    pub fn stats(&self) -> AuditStats {
        let tally = match self.histograms.get(crate::dataset::TOTAL_PROJECT) {
            Some(total) => total.clone(),
            // Dataset variant without a total list: fold the real projects
            None => self.histograms.values().fold(TierTally::default(), |mut acc, t| {
                acc.valid += t.valid;
                acc.one_flag += t.one_flag;
                acc.two_flags += t.two_flags;
                acc.three_flags += t.three_flags;
                acc.equalized += t.equalized;
                acc
            }),
        };

        AuditStats {
            total_votes: tally.total(),
            valid_votes: tally.valid,
            flagged_votes: tally.flagged(),
            equalized_votes: tally.equalized,
            distinct_funders: self.funder_ledger.len(),
        }
    }
}

/// Audit summary statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStats {
    pub total_votes: u64,
    pub valid_votes: u64,
    pub flagged_votes: u64,
    pub equalized_votes: u64,
    pub distinct_funders: usize,
}
