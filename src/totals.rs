use std::cmp::Ordering;
use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::model::{GroupKey, ReportRow};

/// Append one total row per group and sort the combined report.
///
/// Totals accumulate the sum columns per group key with nulls counted as
/// zero; accumulating into a single slot per key also collapses any upstream
/// duplication down to one total row per group. Total rows carry blank
/// rating and sum columns, which places them after their group's detail rows
/// under the descending-rating sort.
pub fn append_totals(report: Vec<ReportRow>) -> Vec<ReportRow> {
    let mut totals: BTreeMap<GroupKey, (Decimal, Decimal)> = BTreeMap::new();
    for row in &report {
        let entry = totals
            .entry(row.group_key())
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        entry.0 += row.sum_value_arap.unwrap_or(Decimal::ZERO);
        entry.1 += row.sum_value_accr.unwrap_or(Decimal::ZERO);
    }

    let mut combined = report;
    combined.extend(totals.into_iter().map(|(key, (arap, accr))| ReportRow {
        legal_entity: key.legal_entity,
        counter_party: key.counter_party,
        tier: key.tier,
        max_rating: None,
        sum_value_arap: None,
        sum_value_accr: None,
        total_arap: Some(arap),
        total_accr: Some(accr),
    }));
    combined.sort_by(report_order);
    combined
}

/// Report order: legal_entity asc, counter_party asc, tier asc with missing
/// tiers last, max_rating desc with blanks last.
fn report_order(a: &ReportRow, b: &ReportRow) -> Ordering {
    a.legal_entity
        .cmp(&b.legal_entity)
        .then_with(|| a.counter_party.cmp(&b.counter_party))
        .then_with(|| cmp_none_last(&a.tier, &b.tier))
        .then_with(|| cmp_rating_desc(&a.max_rating, &b.max_rating))
}

fn cmp_none_last<T: Ord>(a: &Option<T>, b: &Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn cmp_rating_desc(a: &Option<Decimal>, b: &Option<Decimal>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
