//! Export directory resolution.
//!
//! - External: `<Downloads>/Emissions`, visible to the user.
//! - Internal: `<app data>/Emissions`, private to the application.
//!
//! An explicit directory passed by the caller wins over both.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use directories::{ProjectDirs, UserDirs};

use crate::error::{EmissionsError, Result};

/// Folder created under the chosen base directory.
pub const EXPORT_SUBDIR: &str = "Emissions";

/// Where an export is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportTarget {
    /// The user's Downloads folder.
    #[default]
    External,
    /// The application's own data folder.
    Internal,
}

impl ExportTarget {
    pub fn description(&self) -> &'static str {
        match self {
            ExportTarget::External => "External storage (Downloads/Emissions)",
            ExportTarget::Internal => "Application storage",
        }
    }
}

/// Resolve the directory an export goes to.
///
/// # Errors
///
/// Returns `ExportDirUnavailable` if the platform directory for `target`
/// cannot be determined.
pub fn export_dir(target: ExportTarget, override_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir.to_path_buf());
    }

    let base = match target {
        ExportTarget::External => UserDirs::new()
            .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
            .ok_or_else(|| {
                EmissionsError::ExportDirUnavailable("no Downloads directory".to_string())
            })?,
        ExportTarget::Internal => ProjectDirs::from("com", "example", "EmissionsCalculator")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| {
                EmissionsError::ExportDirUnavailable("no application data directory".to_string())
            })?,
    };

    Ok(base.join(EXPORT_SUBDIR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_override_wins() {
        let temp_dir = TempDir::new().unwrap();
        let dir = export_dir(ExportTarget::External, Some(temp_dir.path())).unwrap();
        assert_eq!(dir, temp_dir.path());

        let dir = export_dir(ExportTarget::Internal, Some(temp_dir.path())).unwrap();
        assert_eq!(dir, temp_dir.path());
    }

    #[test]
    fn test_platform_dirs_end_in_subdir() {
        // Either resolvable with the subfolder, or reported as unavailable.
        for target in [ExportTarget::External, ExportTarget::Internal] {
            match export_dir(target, None) {
                Ok(dir) => assert!(dir.ends_with(EXPORT_SUBDIR)),
                Err(e) => assert!(matches!(e, EmissionsError::ExportDirUnavailable(_))),
            }
        }
    }
}
