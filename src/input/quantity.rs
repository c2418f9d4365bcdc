use crate::error::{EmissionsError, Result};

/// Parse quantity text typed into the calculator.
///
/// Blank text and unparseable text are distinct errors so the caller can show
/// the matching message. Range checks are left to the ledger.
pub fn parse_quantity(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(EmissionsError::EmptyQuantity);
    }

    trimmed
        .parse()
        .map_err(|_| EmissionsError::NotANumber(trimmed.to_string()))
}
