use std::path::Path;

use log::error;
use serde::de::DeserializeOwned;

use crate::error::Error;

/// Load every row of a headered CSV file into typed records.
///
/// A missing file degrades to an empty set rather than failing: path
/// existence is already checked up front, so this only fires if the file
/// disappears between validation and load. Malformed content is fatal; there
/// is no partial-row recovery. Columns not present on the record type (such
/// as the ledger's `invoice_id`) are ignored.
pub fn load_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, Error> {
    if !path.exists() {
        error!("{} not found.", path.display());
        return Ok(Vec::new());
    }

    let mut reader = csv::Reader::from_path(path)?;
    let rows = reader.deserialize().collect::<Result<Vec<T>, _>>()?;
    Ok(rows)
}
