mod debounce;
mod edits;
mod quantity;

pub use debounce::{Debouncer, EDIT_QUIET_WINDOW};
pub use edits::apply_edits;
pub use quantity::parse_quantity;
