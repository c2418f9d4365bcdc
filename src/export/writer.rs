use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use tracing::info;

use crate::error::{EmissionsError, Result};
use crate::ledger::CalculationLedger;

/// File name for an export made at `timestamp`.
pub fn export_filename(timestamp: NaiveDateTime) -> String {
    format!("CO2_Emissions_{}.csv", timestamp.format("%Y%m%d_%H%M%S"))
}

/// Write the ledger as CSV into `dir`, named after the current local time.
pub fn export_csv(ledger: &CalculationLedger, dir: &Path) -> Result<PathBuf> {
    export_csv_at(ledger, dir, Local::now().naive_local())
}

/// Write the ledger as CSV into `dir`, named after `timestamp`.
///
/// Creates `dir` if missing. Refuses an empty ledger. The ledger is only read.
pub fn export_csv_at(
    ledger: &CalculationLedger,
    dir: &Path,
    timestamp: NaiveDateTime,
) -> Result<PathBuf> {
    if ledger.is_empty() {
        return Err(EmissionsError::NothingToExport);
    }

    let content = ledger.to_csv()?;

    fs::create_dir_all(dir)?;
    let path = dir.join(export_filename(timestamp));

    {
        let mut file = File::create(&path)?;
        file.write_all(content.as_bytes())?;
        file.flush()?;
    }

    info!(path = %path.display(), records = ledger.len(), "CSV exported");
    Ok(path)
}
