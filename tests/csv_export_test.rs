use std::fs;

use chrono::NaiveDate;
use tempfile::TempDir;

use emissions_calc_rs::catalog::{
    SourceCatalog, CONIFEROUS_WOOD, ELECTRICITY, NATURAL_GAS, WOOD_PELLETS,
};
use emissions_calc_rs::export::{export_csv_at, export_dir, ExportTarget};
use emissions_calc_rs::ledger::{CalculationLedger, CSV_HEADER, TOTAL_LABEL};
use emissions_calc_rs::EnergySource;

fn parse_rows(text: &str) -> Vec<Vec<String>> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(text.as_bytes())
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect()
}

#[test]
fn test_csv_layout() {
    let mut ledger = CalculationLedger::default();
    ledger.add_record(ELECTRICITY, 100.0).unwrap();
    ledger.add_record(NATURAL_GAS, 10.0).unwrap();

    let text = ledger.to_csv().unwrap();
    assert_eq!(
        text,
        "Източник,Количество,Ед.,Енергия (kWh),CO₂ (kg)\n\
         Електричество,100.0,kWh,100.0,80.0\n\
         Природен газ,10.0,м³,93.0,19.0\n\
         ОБЩО,,,193.0,99.0\n"
    );
}

#[test]
fn test_csv_round_trip_with_quoting() {
    let mut ledger = CalculationLedger::default();
    ledger.add_record(WOOD_PELLETS, 120.0).unwrap();
    ledger.add_record(ELECTRICITY, 2.0).unwrap();
    ledger.add_record(WOOD_PELLETS, 1.5).unwrap();

    let text = ledger.to_csv().unwrap();
    assert!(text.contains("\"Дървени пелети, брикети\""));

    let rows = parse_rows(&text);
    assert_eq!(rows.len(), ledger.len() + 2);
    assert_eq!(rows[0], CSV_HEADER);
    assert_eq!(rows[1][0], "Дървени пелети, брикети");
    assert_eq!(rows[1].len(), 5);

    let totals = rows.last().unwrap();
    assert_eq!(totals[0], TOTAL_LABEL);
    assert_eq!(totals[1], "");
    assert_eq!(totals[2], "");
    assert_eq!(totals[3].parse::<f64>().unwrap(), ledger.raw_totals().energy);
    assert_eq!(totals[4].parse::<f64>().unwrap(), ledger.raw_totals().emissions);
}

#[test]
fn test_csv_escapes_quotes_and_newlines() {
    let catalog = SourceCatalog::new(vec![
        EnergySource::new("Gas \"A\", grid", "m3", 1.0, 1.0),
        EnergySource::new("Two\nlines", "kg", 2.0, 0.5),
    ]);
    let mut ledger = CalculationLedger::new(catalog);
    ledger.add_record(0, 1.0).unwrap();
    ledger.add_record(1, 1.0).unwrap();

    let text = ledger.to_csv().unwrap();
    assert!(text.contains("\"Gas \"\"A\"\", grid\""));
    assert!(text.contains("\"Two\nlines\""));

    let rows = parse_rows(&text);
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[1][0], "Gas \"A\", grid");
    assert_eq!(rows[2][0], "Two\nlines");
}

#[test]
fn test_csv_extreme_magnitudes_use_exponent_form() {
    let mut ledger = CalculationLedger::default();
    ledger.add_record(CONIFEROUS_WOOD, 10000.0).unwrap();
    ledger.add_record(ELECTRICITY, 0.0001).unwrap();

    let rows = parse_rows(&ledger.to_csv().unwrap());

    assert_eq!(rows[1], ["Иглолистна дървесина", "10000.0", "m³", "1.358E7", "584000.0"]);
    assert_eq!(rows[2], ["Електричество", "1.0E-4", "kWh", "1.0E-4", "8.0E-5"]);

    // Exponent form still parses back to the stored value
    assert_eq!(rows[1][3].parse::<f64>().unwrap(), ledger.get(0).unwrap().energy());
    assert_eq!(rows[2][4].parse::<f64>().unwrap(), ledger.get(1).unwrap().emissions());
}

#[test]
fn test_csv_totals_unrounded() {
    let mut ledger = CalculationLedger::default();
    ledger.add_record(ELECTRICITY, 0.123).unwrap();

    let rows = parse_rows(&ledger.to_csv().unwrap());
    assert_eq!(rows[1][1], "0.123");
    assert_eq!(rows[2][3], "0.123");
    assert_eq!(ledger.totals().energy, 0.12);
}

#[test]
fn test_export_writes_file_and_leaves_ledger_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let dir = export_dir(ExportTarget::Internal, Some(temp_dir.path())).unwrap();
    let timestamp = NaiveDate::from_ymd_opt(2025, 12, 31)
        .unwrap()
        .and_hms_opt(23, 59, 1)
        .unwrap();

    let mut ledger = CalculationLedger::default();
    ledger.add_record(NATURAL_GAS, 10.0).unwrap();
    let revision = ledger.revision();

    let path = export_csv_at(&ledger, &dir, timestamp).unwrap();

    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "CO2_Emissions_20251231_235901.csv"
    );
    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(parse_rows(&written).len(), 3);
    assert_eq!(ledger.revision(), revision);
    assert_eq!(ledger.len(), 1);
}

#[test]
fn test_export_failure_is_an_error_not_a_panic() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("not_a_dir");
    fs::write(&blocker, "x").unwrap();

    let mut ledger = CalculationLedger::default();
    ledger.add_record(ELECTRICITY, 1.0).unwrap();

    let timestamp = NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    assert!(export_csv_at(&ledger, &blocker.join("Emissions"), timestamp).is_err());
    assert_eq!(ledger.len(), 1);
}
