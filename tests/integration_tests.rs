use std::collections::BTreeMap;
use std::path::PathBuf;

use rust_decimal::Decimal;

use reckoner::load::load_rows;
use reckoner::model::{GroupKey, LedgerRecord, ReportRow, TierLookup, TierRecord};
use reckoner::{reconcile, run, write_report_file, Error, WriteMode};

fn fixture(dir: &std::path::Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

const LEDGER: &str = "invoice_id,legal_entity,counter_party,rating,status,value\n\
                      1,E1,CP1,5,ARAP,100\n\
                      2,E1,CP1,7,ACCR,50\n\
                      3,E2,CP2,3,ARAP,25\n";

const TIERS: &str = "counter_party,tier\nCP1,Gold\n";

#[test]
fn end_to_end_report() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = fixture(dir.path(), "dataset1.csv", LEDGER);
    let tiers = fixture(dir.path(), "dataset2.csv", TIERS);
    let output = dir.path().join("result.csv");

    run(&ledger, &tiers, &output).unwrap();

    let content = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        content,
        "legal_entity,counter_party,tier,max_rating,sum_value_arap,sum_value_accr,total_arap,total_accr\n\
         E1,CP1,Gold,7,100,50,,\n\
         E1,CP1,Gold,,,,100,50\n\
         E2,CP2,,3,25,,,\n\
         E2,CP2,,,,,25,0\n"
    );
}

#[test]
fn rerun_overwrites_with_identical_report() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = fixture(dir.path(), "dataset1.csv", LEDGER);
    let tiers = fixture(dir.path(), "dataset2.csv", TIERS);
    let output = dir.path().join("result.csv");

    run(&ledger, &tiers, &output).unwrap();
    let first = std::fs::read_to_string(&output).unwrap();
    run(&ledger, &tiers, &output).unwrap();
    let second = std::fs::read_to_string(&output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn empty_ledger_produces_header_only_report() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = fixture(
        dir.path(),
        "dataset1.csv",
        "invoice_id,legal_entity,counter_party,rating,status,value\n",
    );
    let tiers = fixture(dir.path(), "dataset2.csv", TIERS);
    let output = dir.path().join("result.csv");

    run(&ledger, &tiers, &output).unwrap();

    let content = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        content,
        "legal_entity,counter_party,tier,max_rating,sum_value_arap,sum_value_accr,total_arap,total_accr\n"
    );
}

#[test]
fn written_details_reload_to_the_same_sums() {
    let dir = tempfile::tempdir().unwrap();
    let ledger_path = fixture(dir.path(), "dataset1.csv", LEDGER);
    let detail_path = dir.path().join("details.csv");

    let ledger: Vec<LedgerRecord> = load_rows(&ledger_path).unwrap();
    let tiers = TierLookup::from_records(vec![TierRecord {
        counter_party: "CP1".into(),
        tier: "Gold".into(),
    }]);

    let details: Vec<ReportRow> = reconcile(&ledger, &tiers)
        .unwrap()
        .into_iter()
        .map(ReportRow::from)
        .collect();

    write_report_file(&details, &detail_path, WriteMode::Overwrite).unwrap();
    let reloaded: Vec<ReportRow> = load_rows(&detail_path).unwrap();

    assert_eq!(reloaded, details);
    assert_eq!(sums_per_group(&reloaded), sums_per_group(&details));
}

fn sums_per_group(rows: &[ReportRow]) -> BTreeMap<GroupKey, (Decimal, Decimal)> {
    let mut sums = BTreeMap::new();
    for row in rows {
        let entry = sums
            .entry(row.group_key())
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        entry.0 += row.sum_value_arap.unwrap_or(Decimal::ZERO);
        entry.1 += row.sum_value_accr.unwrap_or(Decimal::ZERO);
    }
    sums
}

#[test]
fn duplicate_paths_abort_before_any_write() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = fixture(dir.path(), "dataset1.csv", LEDGER);
    let output = dir.path().join("result.csv");

    let result = run(&ledger, &ledger, &output);

    assert!(matches!(result, Err(Error::DuplicatePaths)));
    assert!(!output.exists());
}
