use tracing::{debug, warn};

use crate::catalog::SourceCatalog;
use crate::error::{EmissionsError, Result};
use crate::ledger::change::{IgnoreReason, NormalizeOutcome, RecordChange, UpdateOutcome};
use crate::ledger::csv_export;
use crate::models::{CalculationRecord, Totals};

/// Ordered calculation records with totals kept in step.
///
/// Totals are re-summed from all records after every mutation, never
/// adjusted incrementally.
#[derive(Debug, Clone)]
pub struct CalculationLedger {
    catalog: SourceCatalog,
    records: Vec<CalculationRecord>,
    totals: Totals,
    /// Advances once per recomputation of totals.
    revision: u64,
}

impl CalculationLedger {
    /// Create an empty ledger over a catalog.
    pub fn new(catalog: SourceCatalog) -> Self {
        Self {
            catalog,
            records: Vec::new(),
            totals: Totals::default(),
            revision: 0,
        }
    }

    pub fn catalog(&self) -> &SourceCatalog {
        &self.catalog
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[CalculationRecord] {
        &self.records
    }

    /// Record at `position`.
    pub fn get(&self, position: usize) -> Result<&CalculationRecord> {
        self.records.get(position).ok_or_else(|| {
            warn!(position, len = self.records.len(), "ledger position out of range");
            EmissionsError::OutOfRange {
                index: position,
                len: self.records.len(),
            }
        })
    }

    /// Append a record for `quantity` units of the source at `source_index`.
    ///
    /// Rejects zero, negative and non-finite quantities.
    pub fn add_record(&mut self, source_index: usize, quantity: f64) -> Result<RecordChange> {
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(EmissionsError::InvalidQuantity(quantity));
        }

        let source = *self.catalog.get(source_index)?;
        self.records
            .push(CalculationRecord::new(source_index, source, quantity));
        self.recalculate_totals();

        let position = self.records.len() - 1;
        debug!(position, source = source.name, quantity, "record added");
        Ok(self.change_for(position))
    }

    /// Apply edited quantity text to the record at `position`.
    ///
    /// Blank text counts as zero. Negative or non-numeric text is ignored and
    /// the prior value kept. Only an out-of-range position is an error.
    pub fn update_quantity(&mut self, position: usize, input: &str) -> Result<UpdateOutcome> {
        self.get(position)?;

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return self.set_quantity(position, 0.0);
        }

        match trimmed.parse::<f64>() {
            Ok(quantity) => self.set_quantity(position, quantity),
            Err(_) => Ok(UpdateOutcome::Ignored(IgnoreReason::NotANumber)),
        }
    }

    /// Set the quantity of the record at `position`.
    ///
    /// Setting the current value again is a no-op.
    pub fn set_quantity(&mut self, position: usize, quantity: f64) -> Result<UpdateOutcome> {
        let current = self.get(position)?.quantity();

        if !quantity.is_finite() {
            return Ok(UpdateOutcome::Ignored(IgnoreReason::NotANumber));
        }
        if quantity < 0.0 {
            return Ok(UpdateOutcome::Ignored(IgnoreReason::Negative));
        }
        if quantity == current {
            return Ok(UpdateOutcome::Unchanged);
        }

        self.records[position].set_quantity(quantity);
        self.recalculate_totals();

        debug!(position, quantity, "record quantity updated");
        Ok(UpdateOutcome::Updated(self.change_for(position)))
    }

    /// Force every record whose edit text is blank to zero.
    ///
    /// `inputs[i]` is the current edit text of row `i`; extra entries are
    /// ignored. Totals are recomputed even when nothing was blank.
    pub fn bulk_normalize_blanks<S: AsRef<str>>(&mut self, inputs: &[S]) -> NormalizeOutcome {
        let mut zeroed = Vec::new();

        for (position, (record, input)) in self.records.iter_mut().zip(inputs).enumerate() {
            if input.as_ref().trim().is_empty() {
                record.set_quantity(0.0);
                zeroed.push(position);
            }
        }

        self.recalculate_totals();
        debug!(count = zeroed.len(), "blank edits normalized to zero");

        NormalizeOutcome {
            zeroed,
            totals: self.totals(),
        }
    }

    /// Remove all records and zero both totals.
    pub fn reset(&mut self) {
        self.records.clear();
        self.totals = Totals::default();
        self.revision += 1;
        debug!("ledger reset");
    }

    /// Totals rounded half-up to 2 decimals.
    pub fn totals(&self) -> Totals {
        self.totals.rounded()
    }

    /// Unrounded totals, as stored.
    pub fn raw_totals(&self) -> Totals {
        self.totals
    }

    /// Number of recomputations so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// CSV text: header, one row per record, then the unrounded totals row.
    pub fn to_csv(&self) -> Result<String> {
        csv_export::write_csv(&self.records, &self.totals)
    }

    /// Count of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the ledger has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn recalculate_totals(&mut self) {
        self.totals = Totals::sum(&self.records);
        self.revision += 1;
    }

    fn change_for(&self, position: usize) -> RecordChange {
        let record = &self.records[position];
        RecordChange {
            position,
            quantity: record.quantity(),
            energy: record.energy(),
            emissions: record.emissions(),
            totals: self.totals(),
        }
    }
}

impl Default for CalculationLedger {
    fn default() -> Self {
        Self::new(SourceCatalog::builtin())
    }
}
