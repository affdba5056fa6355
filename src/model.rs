use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Status tag on a ledger record. Anything other than ARAP or ACCR is kept
/// as `Other`: such rows are excluded from both sums but still count toward
/// the group's max rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Arap,
    Accr,
    Other,
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // exact match only; any other tag falls through to Other
        let tag = String::deserialize(deserializer)?;
        Ok(match tag.as_str() {
            "ARAP" => Status::Arap,
            "ACCR" => Status::Accr,
            _ => Status::Other,
        })
    }
}

/// One row of the ledger dataset. The on-disk `invoice_id` column is not
/// modeled; records have no identity beyond row position.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerRecord {
    pub legal_entity: String,
    pub counter_party: String,
    pub rating: Decimal,
    pub status: Status,
    pub value: Decimal,
}

/// One row of the tier dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct TierRecord {
    pub counter_party: String,
    pub tier: String,
}

/// Counter-party to tier mapping. Duplicate counter-parties resolve to the
/// last row seen.
#[derive(Debug, Clone, Default)]
pub struct TierLookup {
    tiers: HashMap<String, String>,
}

impl TierLookup {
    pub fn from_records(records: Vec<TierRecord>) -> Self {
        let mut tiers = HashMap::new();
        for record in records {
            tiers.insert(record.counter_party, record.tier);
        }
        TierLookup { tiers }
    }

    pub fn lookup(&self, counter_party: &str) -> Option<&str> {
        self.tiers.get(counter_party).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

/// The aggregation unit: a `None` tier means the counter-party had no entry
/// in the lookup, which is an allowed state rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct GroupKey {
    pub legal_entity: String,
    pub counter_party: String,
    pub tier: Option<String>,
}

/// One row per group key present in either the ARAP or the ACCR aggregate.
/// A `None` sum means the group had no rows of that status, never zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconciledRow {
    pub key: GroupKey,
    pub max_rating: Decimal,
    pub sum_value_arap: Option<Decimal>,
    pub sum_value_accr: Option<Decimal>,
}

/// The on-disk report row. Detail rows fill `max_rating` and the sum
/// columns; total rows blank those and fill `total_arap`/`total_accr`.
/// Deserializable as well, so a written report can be read back: empty
/// fields come back as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub legal_entity: String,
    pub counter_party: String,
    pub tier: Option<String>,
    pub max_rating: Option<Decimal>,
    pub sum_value_arap: Option<Decimal>,
    pub sum_value_accr: Option<Decimal>,
    pub total_arap: Option<Decimal>,
    pub total_accr: Option<Decimal>,
}

impl ReportRow {
    pub fn group_key(&self) -> GroupKey {
        GroupKey {
            legal_entity: self.legal_entity.clone(),
            counter_party: self.counter_party.clone(),
            tier: self.tier.clone(),
        }
    }
}

impl From<ReconciledRow> for ReportRow {
    fn from(row: ReconciledRow) -> Self {
        ReportRow {
            legal_entity: row.key.legal_entity,
            counter_party: row.key.counter_party,
            tier: row.key.tier,
            max_rating: Some(row.max_rating),
            sum_value_arap: row.sum_value_arap,
            sum_value_accr: row.sum_value_accr,
            total_arap: None,
            total_accr: None,
        }
    }
}
