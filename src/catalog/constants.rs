use crate::models::EnergySource;

/// Number of built-in energy sources.
pub const SOURCE_COUNT: usize = 13;

// ─────────────────────────────────────────────────────────────────────────────
// Positions of the built-in sources
// ─────────────────────────────────────────────────────────────────────────────

pub const NATURAL_GAS: usize = 0;
pub const FUEL_OIL: usize = 1;
pub const PROPANE_BUTANE: usize = 2;
pub const BLACK_COAL: usize = 3;
pub const ANTHRACITE: usize = 4;
pub const BROWN_COAL_BRIQUETTES: usize = 5;
pub const BROWN_COAL: usize = 6;
pub const LIGNITE: usize = 7;
pub const WOOD_PELLETS: usize = 8;
pub const CONIFEROUS_WOOD: usize = 9;
pub const BROADLEAF_WOOD: usize = 10;
pub const ELECTRICITY: usize = 11;
pub const DISTRICT_HEAT: usize = 12;

/// Energy (kWh/unit) and CO₂ (kg/unit) factors. Order is the selector order.
pub static BUILTIN_SOURCES: [EnergySource; SOURCE_COUNT] = [
    EnergySource::new("Природен газ", "м³", 9.3, 1.9),
    EnergySource::new("Нафта", "л", 10.00, 2.70),
    EnergySource::new("Пропан-бутан", "л", 7.30, 1.7),
    EnergySource::new("Черни каменни въглища", "kg", 5.80, 2.0),
    EnergySource::new("Антрацитни въглища", "kg", 8.6, 3.0),
    EnergySource::new("Брикети от кафяви въглища", "kg", 5.60, 2.0),
    EnergySource::new("Кафяви въглища", "kg", 2.9, 1.1),
    EnergySource::new("Литнитни/кафяви каменни въглища", "kg", 3.7, 1.4),
    EnergySource::new("Дървени пелети, брикети", "kg", 4.70, 0.20),
    EnergySource::new("Иглолистна дървесина", "m³", 1358.0, 58.4),
    EnergySource::new("Широколистна дървесина", "m³", 1940.0, 83.4),
    EnergySource::new("Електричество", "kWh", 1.00, 0.8),
    EnergySource::new("Топлина от централизирано топлоснабдяване", "kWh", 1.0, 0.3),
];

/// Minimum Jaro-Winkler similarity for a fuzzy name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.8;
