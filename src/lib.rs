pub mod catalog;
pub mod cli;
pub mod error;
pub mod export;
pub mod input;
pub mod interface;
pub mod ledger;
pub mod logger;
pub mod models;

pub use catalog::SourceCatalog;
pub use error::{EmissionsError, Result};
pub use ledger::CalculationLedger;
pub use models::{CalculationRecord, EnergySource, Totals};
