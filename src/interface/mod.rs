pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_action, prompt_cell_text, prompt_edit_row, prompt_export_target, prompt_quantity_text,
    prompt_source, prompt_yes_no, SessionAction,
};
pub use render::{
    display_change, display_sources, display_table, display_totals, format_edit_option, format_row,
};
