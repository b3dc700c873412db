// src/classifier/funder_graph.rs
use crate::dataset::VotingDataset;
use crate::types::{FunderLedger, TopFunder, TOP_FUNDER_COUNT};

/// Count, for every distinct funder address, the accounts it originated.
/// A funder does not have to be a registered account itself (exchange
/// hot wallets show up here); accounts nobody funded simply never appear.
pub(crate) fn build_ledger(dataset: &VotingDataset) -> FunderLedger {
    let mut ledger = FunderLedger::new();
    for account in dataset.accounts.values() {
        ledger
            .entry(account.first_transaction_from.clone())
            .or_default()
            .funded_count += 1;
    }
    ledger
}

/// Rank funders descending by funded account count and keep the top
/// `TOP_FUNDER_COUNT`. Ties break on ascending address so repeated runs
/// produce identical tables.
pub(crate) fn rank_funders(ledger: &FunderLedger) -> Vec<TopFunder> {
    let mut funders: Vec<(&String, &crate::types::FunderEntry)> = ledger.iter().collect();
    funders.sort_by(|a, b| {
        b.1.funded_count
            .cmp(&a.1.funded_count)
            .then_with(|| a.0.cmp(b.0))
    });
    funders.truncate(TOP_FUNDER_COUNT);

    funders
        .into_iter()
        .map(|(address, entry)| TopFunder {
            address: address.clone(),
            funded_count: entry.funded_count,
            votes_by_project: entry.votes_by_project.clone(),
            equalized_votes: entry.equalized_votes,
        })
        .collect()
}
