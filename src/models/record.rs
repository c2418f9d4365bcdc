use serde::Serialize;

use crate::models::EnergySource;

/// One entered quantity of one energy source, with its derived values.
///
/// `energy` and `emissions` are only ever written together with `quantity`,
/// so they never reflect a stale quantity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationRecord {
    source_index: usize,
    source: EnergySource,
    quantity: f64,
    energy: f64,
    emissions: f64,
}

impl CalculationRecord {
    pub fn new(source_index: usize, source: EnergySource, quantity: f64) -> Self {
        Self {
            source_index,
            source,
            quantity,
            energy: source.energy_for(quantity),
            emissions: source.emissions_for(quantity),
        }
    }

    /// Position of the source in the catalog.
    pub fn source_index(&self) -> usize {
        self.source_index
    }

    pub fn source(&self) -> &EnergySource {
        &self.source
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Energy in kWh.
    pub fn energy(&self) -> f64 {
        self.energy
    }

    /// CO₂ in kg.
    pub fn emissions(&self) -> f64 {
        self.emissions
    }

    pub(crate) fn set_quantity(&mut self, quantity: f64) {
        self.quantity = quantity;
        self.energy = self.source.energy_for(quantity);
        self.emissions = self.source.emissions_for(quantity);
    }
}

/// Energy and emission sums over a ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Totals {
    pub energy: f64,
    pub emissions: f64,
}

impl Totals {
    /// Sum the derived values of all records.
    pub fn sum<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a CalculationRecord>,
    {
        records.into_iter().fold(Self::default(), |acc, r| Self {
            energy: acc.energy + r.energy,
            emissions: acc.emissions + r.emissions,
        })
    }

    /// Both sums rounded half-up to 2 decimal places.
    pub fn rounded(&self) -> Self {
        Self {
            energy: round_half_up(self.energy, 2),
            emissions: round_half_up(self.emissions, 2),
        }
    }
}

/// Round to `decimals` places, ties going up. Values here are never negative.
pub(crate) fn round_half_up(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}
