// src/classifier/predicates.rs
use crate::types::{Account, Thresholds, SECONDS_PER_DAY};

/// Accounts created after this instant count as "too young". With
/// `min_active_days = 1` the cutoff is the snapshot instant itself.
pub(crate) fn cutoff_timestamp(thresholds: &Thresholds) -> i64 {
    thresholds.snapshot_epoch - (i64::from(thresholds.min_active_days) - 1) * SECONDS_PER_DAY
}

/// Count how many of the three fraud conditions hold for one vote.
///
/// `funded_count` is the voter's funder's total; the voter itself is
/// excluded from it before comparing, so an account does not trip the
/// farm condition just by existing.
pub(crate) fn fraud_tier(
    account: &Account,
    funded_count: u64,
    cutoff: i64,
    thresholds: &Thresholds,
) -> u8 {
    let mut tier = 0u8;
    if funded_count.saturating_sub(1) > thresholds.funded_by_limit {
        tier += 1;
    }
    if account.created_at_timestamp > cutoff {
        tier += 1;
    }
    if account.received_transactions_before_vote < thresholds.min_transactions {
        tier += 1;
    }
    tier
}
