mod calculation_ledger;
mod change;
mod csv_export;

pub use calculation_ledger::CalculationLedger;
pub use change::{IgnoreReason, NormalizeOutcome, RecordChange, UpdateOutcome};
pub use csv_export::{format_real, CSV_HEADER, TOTAL_LABEL};
