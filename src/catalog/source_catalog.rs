use strsim::jaro_winkler;
use tracing::warn;

use crate::catalog::constants::{BUILTIN_SOURCES, FUZZY_MATCH_THRESHOLD};
use crate::error::{EmissionsError, Result};
use crate::models::EnergySource;

/// Immutable, ordered list of energy sources. Sources are referenced by position.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceCatalog {
    sources: Vec<EnergySource>,
}

impl SourceCatalog {
    /// Create a catalog from an explicit list of sources.
    pub fn new(sources: Vec<EnergySource>) -> Self {
        Self { sources }
    }

    /// The 13 built-in sources.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_SOURCES.to_vec())
    }

    /// All sources in selector order.
    pub fn list(&self) -> &[EnergySource] {
        &self.sources
    }

    /// Source at `index`.
    pub fn get(&self, index: usize) -> Result<&EnergySource> {
        self.sources.get(index).ok_or_else(|| {
            warn!(index, len = self.sources.len(), "catalog index out of range");
            EmissionsError::OutOfRange {
                index,
                len: self.sources.len(),
            }
        })
    }

    /// Selector labels, `"<name> (<unit>)"`.
    pub fn labels(&self) -> Vec<String> {
        self.sources.iter().map(EnergySource::label).collect()
    }

    /// Find a source position by name.
    ///
    /// Tries a case-insensitive exact match first, then the closest fuzzy
    /// match above [`FUZZY_MATCH_THRESHOLD`].
    pub fn find(&self, name: &str) -> Result<usize> {
        let needle = name.trim().to_lowercase();

        if let Some(pos) = self
            .sources
            .iter()
            .position(|s| s.name.to_lowercase() == needle)
        {
            return Ok(pos);
        }

        self.sources
            .iter()
            .enumerate()
            .map(|(i, s)| (i, jaro_winkler(&s.name.to_lowercase(), &needle)))
            .filter(|(_, score)| *score >= FUZZY_MATCH_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(i, _)| i)
            .ok_or_else(|| EmissionsError::UnknownSource(name.to_string()))
    }

    /// Count of sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Check if the catalog has no sources.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl Default for SourceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
