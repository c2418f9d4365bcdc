use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::catalog::SourceCatalog;
use crate::error::{EmissionsError, Result};
use crate::export::ExportTarget;
use crate::input::parse_quantity;

/// Emissions calculator — energy (kWh) and CO₂ (kg) from fuel and power consumption.
#[derive(Parser, Debug)]
#[command(name = "emissions_calc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive calculator: add, edit, export and reset calculations.
    Session {
        /// Default export location.
        #[arg(long, value_enum, default_value_t = ExportTarget::External)]
        target: ExportTarget,

        /// Write exports to this directory instead.
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },

    /// List the available energy sources and their factors.
    Sources {
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Calculate a batch of entries and print the table.
    Calc {
        /// Entry as <SOURCE>=<QUANTITY>; SOURCE is a 1-based position or a name.
        #[arg(short, long = "entry", required = true)]
        entries: Vec<String>,

        /// Export the result as CSV.
        #[arg(long)]
        export: bool,

        /// Export location.
        #[arg(long, value_enum, default_value_t = ExportTarget::External)]
        target: ExportTarget,

        /// Write the export to this directory instead.
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Session {
            target: ExportTarget::default(),
            output_dir: None,
        }
    }
}

/// Resolve a `<SOURCE>=<QUANTITY>` entry to a catalog position and quantity.
pub fn resolve_entry(catalog: &SourceCatalog, entry: &str) -> Result<(usize, f64)> {
    let (source, quantity) = entry
        .rsplit_once('=')
        .ok_or_else(|| EmissionsError::InvalidEntry(entry.to_string()))?;

    let index = match source.trim().parse::<usize>() {
        Ok(0) => {
            return Err(EmissionsError::OutOfRange {
                index: 0,
                len: catalog.len(),
            })
        }
        Ok(position) => {
            catalog.get(position - 1)?;
            position - 1
        }
        Err(_) => catalog.find(source)?,
    };

    Ok((index, parse_quantity(quantity)?))
}
