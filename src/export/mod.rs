mod paths;
mod writer;

pub use paths::{export_dir, ExportTarget, EXPORT_SUBDIR};
pub use writer::{export_csv, export_csv_at, export_filename};
