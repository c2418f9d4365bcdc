use serde::Serialize;

/// An energy source with its fixed conversion factors.
///
/// `energy_factor` is kWh per unit of quantity, `emission_factor` is kg CO₂
/// per unit of quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergySource {
    pub name: &'static str,
    pub unit: &'static str,
    pub energy_factor: f64,
    pub emission_factor: f64,
}

impl EnergySource {
    pub const fn new(
        name: &'static str,
        unit: &'static str,
        energy_factor: f64,
        emission_factor: f64,
    ) -> Self {
        Self {
            name,
            unit,
            energy_factor,
            emission_factor,
        }
    }

    /// Energy in kWh for a quantity of this source.
    #[inline]
    pub fn energy_for(&self, quantity: f64) -> f64 {
        quantity * self.energy_factor
    }

    /// CO₂ in kg for a quantity of this source.
    #[inline]
    pub fn emissions_for(&self, quantity: f64) -> f64 {
        quantity * self.emission_factor
    }

    /// Selector label, e.g. `Електричество (kWh)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.unit)
    }
}
