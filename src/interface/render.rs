use crate::catalog::SourceCatalog;
use crate::ledger::{CalculationLedger, RecordChange, CSV_HEADER};
use crate::models::{CalculationRecord, Totals};

/// One table row: name, quantity, unit, energy, emissions. Numbers fixed at 2 decimals.
pub fn format_row(record: &CalculationRecord, name_width: usize) -> String {
    format!(
        "{:<width$} | {:>12.2} | {:<4} | {:>14.2} | {:>12.2}",
        record.source().name,
        record.quantity(),
        record.source().unit,
        record.energy(),
        record.emissions(),
        width = name_width
    )
}

/// Row entry in the edit menu, showing the current quantity.
pub fn format_edit_option(position: usize, record: &CalculationRecord) -> String {
    format!(
        "{:>3}. {} - {:.2} {}",
        position + 1,
        record.source().name,
        record.quantity(),
        record.source().unit
    )
}

/// Display the calculation table with totals.
pub fn display_table(ledger: &CalculationLedger) {
    if ledger.is_empty() {
        println!("No calculations yet.");
        return;
    }

    // Find max source name length for alignment
    let name_width = ledger
        .records()
        .iter()
        .map(|r| r.source().name.chars().count())
        .max()
        .unwrap_or(10)
        .max(CSV_HEADER[0].chars().count());

    // Header row
    println!();
    println!(
        "    {:<width$} | {:>12} | {:<4} | {:>14} | {:>12}",
        CSV_HEADER[0],
        CSV_HEADER[1],
        CSV_HEADER[2],
        CSV_HEADER[3],
        CSV_HEADER[4],
        width = name_width
    );

    for (i, record) in ledger.records().iter().enumerate() {
        println!("{:>3} {}", i + 1, format_row(record, name_width));
    }

    // Totals are rounded for display only

    display_totals(&ledger.totals());
}

/// Display rounded totals.
pub fn display_totals(totals: &Totals) {
    println!();
    println!("--- Totals ---");
    println!("Energy: {:.2} kWh", totals.energy);
    println!("CO₂:    {:.2} kg", totals.emissions);
    println!();
}

/// Display the new values of a changed row.
pub fn display_change(change: &RecordChange) {
    println!(
        "Row {}: {:.2} -> {:.2} kWh, {:.2} kg CO₂",
        change.position + 1,
        change.quantity,
        change.energy,
        change.emissions
    );
}

/// Display the catalog with factors.
pub fn display_sources(catalog: &SourceCatalog) {
    println!();
    println!("=== Energy sources ({} items) ===", catalog.len());
    println!();

    for (i, source) in catalog.list().iter().enumerate() {
        println!(
            "{:>3}. {} - {} kWh/{unit}, {} kg CO₂/{unit}",
            i + 1,
            source.label(),
            source.energy_factor,
            source.emission_factor,
            unit = source.unit
        );
    }

    println!();
}
