use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use tracing::{debug, error};

use emissions_calc_rs::catalog::SourceCatalog;
use emissions_calc_rs::cli::{resolve_entry, Cli, Command};
use emissions_calc_rs::error::{EmissionsError, Result};
use emissions_calc_rs::export::{export_csv, export_dir, ExportTarget};
use emissions_calc_rs::input::{apply_edits, parse_quantity, Debouncer};
use emissions_calc_rs::interface::{
    display_change, display_sources, display_table, display_totals, prompt_action,
    prompt_cell_text, prompt_edit_row, prompt_export_target, prompt_quantity_text, prompt_source,
    prompt_yes_no, SessionAction,
};
use emissions_calc_rs::ledger::{CalculationLedger, UpdateOutcome};
use emissions_calc_rs::logger::init_cli_logger;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    let command = cli.command.unwrap_or_default();

    match command {
        Command::Session { target, output_dir } => cmd_session(target, output_dir),
        Command::Sources { json } => cmd_sources(json),
        Command::Calc {
            entries,
            export,
            target,
            output_dir,
        } => cmd_calc(&entries, export, target, output_dir.as_deref()),
    }
}

/// Print the energy source catalog.
fn cmd_sources(json: bool) -> Result<()> {
    let catalog = SourceCatalog::builtin();

    if json {
        println!("{}", serde_json::to_string_pretty(catalog.list())?);
    } else {
        display_sources(&catalog);
    }

    Ok(())
}

/// Calculate a batch of entries, print the table, optionally export.
fn cmd_calc(
    entries: &[String],
    export: bool,
    target: ExportTarget,
    output_dir: Option<&Path>,
) -> Result<()> {
    let mut ledger = CalculationLedger::default();

    // Build the ledger from the entries
    for entry in entries {
        let (index, quantity) = resolve_entry(ledger.catalog(), entry)?;
        ledger.add_record(index, quantity)?;
    }

    display_table(&ledger);

    if export {
        let dir = export_dir(target, output_dir)?;
        let path = export_csv(&ledger, &dir)?;
        println!("File saved to: {}", path.display());
    }

    Ok(())
}

/// Run the interactive calculator until the user quits.
fn cmd_session(default_target: ExportTarget, output_dir: Option<PathBuf>) -> Result<()> {
    let mut ledger = CalculationLedger::default();
    // Selector starts on the previously chosen source
    let mut last_source = 0;

    println!("Loaded {} energy sources", ledger.catalog().len());

    loop {
        match prompt_action()? {
            SessionAction::Add => {
                last_source = prompt_source(ledger.catalog(), last_source)?;
                add_calculation(&mut ledger, last_source)?;
            }
            SessionAction::Edit => edit_table(&mut ledger)?,
            SessionAction::Show => display_table(&ledger),
            SessionAction::Export => {
                export_ledger(&ledger, default_target, output_dir.as_deref())?
            }
            SessionAction::Reset => {
                // Ask before clearing
                if prompt_yes_no("Clear all calculations?", false)? {
                    ledger.reset();
                    println!("Calculator reset.");
                    display_totals(&ledger.totals());
                }
            }
            SessionAction::Quit => break,
        }
    }

    Ok(())
}

/// Ask for a quantity and append a record; bad input is reported inline.
fn add_calculation(ledger: &mut CalculationLedger, source_index: usize) -> Result<()> {
    let unit = ledger.catalog().get(source_index)?.unit;
    let text = prompt_quantity_text(unit)?;

    let added = parse_quantity(&text).and_then(|quantity| ledger.add_record(source_index, quantity));

    match added {
        Ok(change) => {
            println!("Calculation added!");
            display_change(&change);
            display_totals(&change.totals);
        }
        Err(
            e @ (EmissionsError::EmptyQuantity
            | EmissionsError::NotANumber(_)
            | EmissionsError::InvalidQuantity(_)),
        ) => {
            println!("{}", e);
        }
        Err(e) => return Err(e),
    }

    Ok(())
}

/// Edit mode: rows are edited as text, edits settle through the debouncer,
/// and blank cells become zero on save.
fn edit_table(ledger: &mut CalculationLedger) -> Result<()> {
    if ledger.is_empty() {
        println!("No calculations to edit.");
        return Ok(());
    }

    // Cell text as shown in the table
    let mut cells: Vec<String> = ledger
        .records()
        .iter()
        .map(|r| format!("{:.2}", r.quantity()))
        .collect();
    let mut pending: Debouncer<usize, String> = Debouncer::default();

    println!("Table editing enabled.");

    loop {
        // Apply settled edits before the row list is drawn
        show_outcomes(&apply_edits(ledger, pending.settled(Instant::now()))?);

        let Some(position) = prompt_edit_row(ledger)? else {
            break;
        };

        let text = prompt_cell_text(&cells[position])?;
        cells[position] = text.clone();
        pending.push(position, text, Instant::now());
    }

    // Leaving edit mode: apply what is still pending, then zero blank cells
    show_outcomes(&apply_edits(ledger, pending.flush())?);

    let outcome = ledger.bulk_normalize_blanks(&cells);
    debug!(zeroed = ?outcome.zeroed, "edit mode closed");

    println!("Changes saved!");
    display_totals(&outcome.totals);
    Ok(())
}

fn show_outcomes(outcomes: &[UpdateOutcome]) {
    for outcome in outcomes {
        if let UpdateOutcome::Updated(change) = outcome {
            display_change(change);
        }
    }
}

/// Export to the chosen location. Failures are reported, never fatal.
fn export_ledger(
    ledger: &CalculationLedger,
    default_target: ExportTarget,
    output_dir: Option<&Path>,
) -> Result<()> {
    if ledger.is_empty() {
        println!("No data to export.");
        return Ok(());
    }

    let Some(target) = prompt_export_target(default_target)? else {
        return Ok(());
    };

    match export_dir(target, output_dir).and_then(|dir| export_csv(ledger, &dir)) {
        Ok(path) => println!("File saved to: {}", path.display()),
        Err(e) => {
            error!(error = %e, ?target, "export failed");
            println!("Export failed: {}", e);
        }
    }

    Ok(())
}
