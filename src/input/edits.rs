use tracing::debug;

use crate::error::Result;
use crate::ledger::{CalculationLedger, UpdateOutcome};

/// Apply edited cell texts to the ledger in order.
///
/// Ignored edits are logged and keep the prior value. Only an out-of-range
/// position is an error.
pub fn apply_edits<I>(ledger: &mut CalculationLedger, edits: I) -> Result<Vec<UpdateOutcome>>
where
    I: IntoIterator<Item = (usize, String)>,
{
    let mut outcomes = Vec::new();

    for (position, text) in edits {
        let outcome = ledger.update_quantity(position, &text)?;
        if let UpdateOutcome::Ignored(reason) = &outcome {
            debug!(position, ?reason, "edit ignored");
        }
        outcomes.push(outcome);
    }

    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::catalog::{ELECTRICITY, NATURAL_GAS};
    use crate::input::Debouncer;
    use crate::interface::format_edit_option;

    fn sample_ledger() -> CalculationLedger {
        let mut ledger = CalculationLedger::default();
        ledger.add_record(ELECTRICITY, 100.0).unwrap();
        ledger.add_record(NATURAL_GAS, 10.0).unwrap();
        ledger
    }

    #[test]
    fn test_settled_edit_visible_in_next_row_list() {
        let start = Instant::now();
        let mut ledger = sample_ledger();
        let mut pending = Debouncer::default();

        pending.push(0usize, "50".to_string(), start);

        // Next menu draw happens after the quiet window
        let now = start + Duration::from_millis(350);
        apply_edits(&mut ledger, pending.settled(now)).unwrap();

        let label = format_edit_option(0, ledger.get(0).unwrap());
        assert!(label.contains("50.00"), "stale row label: {}", label);
        assert!(pending.is_empty());
    }

    #[test]
    fn test_apply_edits_mixed_outcomes() {
        let mut ledger = sample_ledger();
        let edits = vec![
            (0, "25".to_string()),
            (1, "-3".to_string()),
            (1, "10".to_string()),
        ];

        let outcomes = apply_edits(&mut ledger, edits).unwrap();

        assert!(outcomes[0].is_update());
        assert!(matches!(outcomes[1], UpdateOutcome::Ignored(_)));
        assert_eq!(outcomes[2], UpdateOutcome::Unchanged);
        assert_eq!(ledger.get(0).unwrap().quantity(), 25.0);
        assert_eq!(ledger.get(1).unwrap().quantity(), 10.0);
    }

    #[test]
    fn test_apply_edits_out_of_range() {
        let mut ledger = sample_ledger();
        assert!(apply_edits(&mut ledger, vec![(5, "1".to_string())]).is_err());
    }
}
