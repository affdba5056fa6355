use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;

use crate::error::Error;
use crate::model::{GroupKey, LedgerRecord, ReconciledRow, Status, TierLookup};

/// Reconcile the ledger against the tier lookup: enrich each record with its
/// counter-party tier, sum ARAP and ACCR values per group, and outer-merge
/// the two aggregates into one row per group.
///
/// The max rating is taken over every record in a group regardless of
/// status, so rows whose status is neither ARAP nor ACCR can raise a group's
/// rating while contributing to neither sum. A group seen only with such
/// rows never reaches the output.
pub fn reconcile(ledger: &[LedgerRecord], tiers: &TierLookup) -> Result<Vec<ReconciledRow>, Error> {
    let mut arap_sums: BTreeMap<GroupKey, Decimal> = BTreeMap::new();
    let mut accr_sums: BTreeMap<GroupKey, Decimal> = BTreeMap::new();
    let mut max_ratings: BTreeMap<GroupKey, Decimal> = BTreeMap::new();

    for record in ledger {
        let key = GroupKey {
            legal_entity: record.legal_entity.clone(),
            counter_party: record.counter_party.clone(),
            tier: tiers.lookup(&record.counter_party).map(str::to_owned),
        };

        max_ratings
            .entry(key.clone())
            .and_modify(|rating| *rating = (*rating).max(record.rating))
            .or_insert(record.rating);

        match record.status {
            Status::Arap => *arap_sums.entry(key).or_insert(Decimal::ZERO) += record.value,
            Status::Accr => *accr_sums.entry(key).or_insert(Decimal::ZERO) += record.value,
            Status::Other => {}
        }
    }

    // Outer merge: a group present on one side only keeps the other side
    // null, never zero.
    let keys: BTreeSet<&GroupKey> = arap_sums.keys().chain(accr_sums.keys()).collect();

    let mut rows = Vec::with_capacity(keys.len());
    for key in keys {
        let max_rating =
            max_ratings
                .get(key)
                .copied()
                .ok_or_else(|| Error::MissingGroupRating {
                    legal_entity: key.legal_entity.clone(),
                    counter_party: key.counter_party.clone(),
                })?;
        rows.push(ReconciledRow {
            key: key.clone(),
            max_rating,
            sum_value_arap: arap_sums.get(key).copied(),
            sum_value_accr: accr_sums.get(key).copied(),
        });
    }

    Ok(rows)
}
