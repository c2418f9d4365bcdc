use dialoguer::{Confirm, Input, Select};

use crate::catalog::SourceCatalog;
use crate::error::Result;
use crate::export::ExportTarget;
use crate::interface::render::format_edit_option;
use crate::ledger::CalculationLedger;

/// Top-level choices in the interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    Add,
    Edit,
    Show,
    Export,
    Reset,
    Quit,
}

impl SessionAction {
    const ALL: [SessionAction; 6] = [
        SessionAction::Add,
        SessionAction::Edit,
        SessionAction::Show,
        SessionAction::Export,
        SessionAction::Reset,
        SessionAction::Quit,
    ];

    fn label(&self) -> &'static str {
        match self {
            SessionAction::Add => "Calculate",
            SessionAction::Edit => "Edit table",
            SessionAction::Show => "Show table",
            SessionAction::Export => "Export CSV",
            SessionAction::Reset => "Reset",
            SessionAction::Quit => "Quit",
        }
    }
}

/// Prompt for the next session action.
pub fn prompt_action() -> Result<SessionAction> {
    let labels: Vec<&str> = SessionAction::ALL.iter().map(|a| a.label()).collect();

    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(SessionAction::ALL[selection])
}

/// Prompt for an energy source; returns its catalog position.
pub fn prompt_source(catalog: &SourceCatalog, default: usize) -> Result<usize> {
    Ok(Select::new()
        .with_prompt("Energy source")
        .items(&catalog.labels())
        .default(default)
        .interact()?)
}

/// Prompt for raw quantity text.
pub fn prompt_quantity_text(unit: &str) -> Result<String> {
    Ok(Input::new()
        .with_prompt(format!("Quantity ({})", unit))
        .allow_empty(true)
        .interact_text()?)
}

/// Prompt for a row to edit; `None` leaves edit mode.
pub fn prompt_edit_row(ledger: &CalculationLedger) -> Result<Option<usize>> {
    let mut options: Vec<String> = ledger
        .records()
        .iter()
        .enumerate()
        .map(|(i, r)| format_edit_option(i, r))
        .collect();
    options.push("Save changes".to_string());

    let selection = Select::new()
        .with_prompt("Row to edit")
        .items(&options)
        .default(0)
        .interact()?;

    Ok((selection < ledger.len()).then_some(selection))
}

/// Prompt for new cell text, starting from the current text. Blank is allowed.
pub fn prompt_cell_text(current: &str) -> Result<String> {
    Ok(Input::new()
        .with_prompt("New quantity")
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?)
}

/// Prompt for where to save an export; `None` cancels.
pub fn prompt_export_target(default: ExportTarget) -> Result<Option<ExportTarget>> {
    let targets = [ExportTarget::External, ExportTarget::Internal];
    let mut options: Vec<&str> = targets.iter().map(|t| t.description()).collect();
    options.push("Cancel");

    let selection = Select::new()
        .with_prompt("Where should the CSV file be saved?")
        .items(&options)
        .default(if default == ExportTarget::Internal { 1 } else { 0 })
        .interact()?;

    Ok(targets.get(selection).copied())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
