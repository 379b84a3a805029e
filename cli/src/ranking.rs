//! Leaderboard ordering for resolved Seeker IDs

use std::cmp::Ordering;

use crate::history::Activation;
use crate::resolver::DomainInfo;

/// Assign 1-based ranks by activation order.
///
/// Names with a confirmed activation come first, oldest block time first
/// (then slot, creation time, name). Names without one follow, ordered by
/// creation time then name. The slice is left sorted by rank.
pub fn assign_ranks(records: &mut [DomainInfo]) {
    records.sort_by(compare_activation_order);

    for (index, record) in records.iter_mut().enumerate() {
        record.rank = Some(index as u32 + 1);
    }
}

fn compare_activation_order(a: &DomainInfo, b: &DomainInfo) -> Ordering {
    match (activation_key(&a.activation), activation_key(&b.activation)) {
        (Some(ka), Some(kb)) => ka.cmp(&kb),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| a.created_at_unix.cmp(&b.created_at_unix))
    .then_with(|| a.subdomain.cmp(&b.subdomain))
}

/// Sort key for confirmed activations; a missing block time sorts last
fn activation_key(activation: &Activation) -> Option<(i64, u64)> {
    match activation {
        Activation::Confirmed {
            slot, block_time, ..
        } => Some((block_time.unwrap_or(i64::MAX), *slot)),
        _ => None,
    }
}
