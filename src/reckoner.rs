pub mod error;
pub mod load;
pub mod model;
pub mod reconcile;
pub mod totals;
pub mod validate;
pub mod write;

pub use error::Error;
pub use model::{
    GroupKey, LedgerRecord, ReconciledRow, ReportRow, Status, TierLookup, TierRecord,
};
pub use reconcile::reconcile;
pub use totals::append_totals;
pub use write::{write_report, write_report_file, WriteMode};

use std::path::Path;

use log::info;

/// Run the whole pipeline: validate paths, load both datasets, reconcile,
/// append totals, and write the assembled report in one pass.
pub fn run(ledger_path: &Path, tier_path: &Path, output_path: &Path) -> Result<(), Error> {
    validate::validate_paths(ledger_path, tier_path, output_path)?;

    info!("Loading financial data from {}...", ledger_path.display());
    let ledger: Vec<LedgerRecord> = load::load_rows(ledger_path)?;
    info!("Loading tier data from {}...", tier_path.display());
    let tiers = TierLookup::from_records(load::load_rows(tier_path)?);
    info!(
        "Loaded {} ledger records and {} tier entries",
        ledger.len(),
        tiers.len()
    );

    info!("Reconciling financial data against the tier lookup...");
    let reconciled = reconcile(&ledger, &tiers)?;
    let report: Vec<ReportRow> = reconciled.into_iter().map(ReportRow::from).collect();

    info!("Appending per-group totals...");
    let report = append_totals(report);

    info!("Writing output to {}...", output_path.display());
    write_report_file(&report, output_path, WriteMode::Overwrite)
}
