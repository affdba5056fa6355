use std::path::Path;

use log::info;

use crate::error::Error;

/// Check that the two inputs exist, that all three paths are distinct once
/// absolutized, and that every path carries a `.csv` extension. Runs before
/// any load; failures abort the run.
pub fn validate_paths(ledger: &Path, tiers: &Path, output: &Path) -> Result<(), Error> {
    let ledger = std::path::absolute(ledger)?;
    let tiers = std::path::absolute(tiers)?;
    let output = std::path::absolute(output)?;

    info!("Checking that the input files exist");
    for input in [&ledger, &tiers] {
        if !input.exists() {
            return Err(Error::MissingInput(input.clone()));
        }
    }

    info!("Checking that the file paths are distinct");
    if ledger == tiers || ledger == output || tiers == output {
        return Err(Error::DuplicatePaths);
    }

    info!("Checking that every path is a csv file");
    for path in [&ledger, &tiers, &output] {
        if path.extension().and_then(|ext| ext.to_str()) != Some("csv") {
            return Err(Error::UnsupportedFileType(path.clone()));
        }
    }

    Ok(())
}
