// src/dataset/mod.rs
use crate::error::{AuditError, AuditResult};
use crate::types::Account;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Pseudo-project aggregating every vote across all real projects
pub const TOTAL_PROJECT: &str = "total";

/// A snapshot of voter accounts plus per-project vote lists, in the shape
/// the external loader hands over:
///
/// ```json
/// {
///   "accounts": { "<address>": { "created_at_timestamp": 1700000000,
///                                "first_transaction_from": "<address>",
///                                "received_transactions_before_vote": 12 } },
///   "votes": { "total": ["<address>"], "<project>": ["<address>"] }
/// }
/// ```
///
/// Addresses are opaque identifiers; the classifier does not validate
/// their format. Fetching and caching the document is the loader's job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VotingDataset {
    pub accounts: HashMap<String, Account>,
    pub votes: BTreeMap<String, Vec<String>>,
}

impl VotingDataset {
    pub fn from_json_str(raw: &str) -> AuditResult<Self> {
        let dataset: Self = serde_json::from_str(raw)?;
        log::debug!(
            "Parsed dataset: {} accounts, {} vote lists",
            dataset.accounts.len(),
            dataset.votes.len()
        );
        Ok(dataset)
    }

    pub fn from_reader<R: Read>(reader: R) -> AuditResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> AuditResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Check that every address in every vote list resolves to an account
    /// record. A miss rejects the whole dataset; aggregates are never
    /// built from partially resolvable input.
    pub fn validate(&self) -> AuditResult<()> {
        for (project, voters) in &self.votes {
            for address in voters {
                if !self.accounts.contains_key(address) {
                    return Err(AuditError::UnknownVoter {
                        project: project.clone(),
                        address: address.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Some dataset variants carry the `total` list explicitly, others
    /// leave it to be derived. Synthesize it as the concatenation of the
    /// real projects' lists (projects in lexical order, addresses in list
    /// order). A dataset that already has `total` is left untouched.
    pub fn ensure_total(&mut self) {
        if self.votes.contains_key(TOTAL_PROJECT) {
            return;
        }
        let all: Vec<String> = self.votes.values().flatten().cloned().collect();
        log::info!("Synthesized '{}' vote list with {} entries", TOTAL_PROJECT, all.len());
        self.votes.insert(TOTAL_PROJECT.to_string(), all);
    }

    /// Project names in classification order: `total` first, then the
    /// real projects in lexical order
    pub fn project_names(&self) -> Vec<&str> {
        let mut names = Vec::with_capacity(self.votes.len());
        if self.votes.contains_key(TOTAL_PROJECT) {
            names.push(TOTAL_PROJECT);
        }
        names.extend(
            self.votes
                .keys()
                .map(String::as_str)
                .filter(|name| *name != TOTAL_PROJECT),
        );
        names
    }

    pub fn account(&self, address: &str) -> Option<&Account> {
        self.accounts.get(address)
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// Number of votes cast in one project's list
    pub fn vote_count(&self, project: &str) -> usize {
        self.votes.get(project).map(Vec::len).unwrap_or(0)
    }
}
