pub mod constants;
mod source_catalog;

pub use constants::*;
pub use source_catalog::SourceCatalog;
