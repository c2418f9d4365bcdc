use crate::models::Totals;

/// New state of one record after a mutation, for the rendering layer.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordChange {
    /// Row position in the ledger.
    pub position: usize,
    pub quantity: f64,
    pub energy: f64,
    pub emissions: f64,
    /// Totals after the mutation, rounded to 2 decimals.
    pub totals: Totals,
}

/// Why an edit was dropped without touching the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    Negative,
    NotANumber,
}

/// Result of a quantity edit.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// Quantity changed; record and totals were recomputed.
    Updated(RecordChange),
    /// New quantity equals the current one; nothing recomputed.
    Unchanged,
    /// Input rejected; prior value kept.
    Ignored(IgnoreReason),
}

impl UpdateOutcome {
    pub fn is_update(&self) -> bool {
        matches!(self, UpdateOutcome::Updated(_))
    }
}

/// Result of normalizing blank edit cells to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizeOutcome {
    /// Positions forced to zero.
    pub zeroed: Vec<usize>,
    /// Totals after normalization, rounded to 2 decimals.
    pub totals: Totals,
}
