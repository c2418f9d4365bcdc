mod record;
mod source;

pub use record::{CalculationRecord, Totals};
pub use source::EnergySource;
