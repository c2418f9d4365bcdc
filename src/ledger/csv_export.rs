use std::io;

use crate::error::Result;
use crate::models::{CalculationRecord, Totals};

/// Header row of the exported CSV.
pub const CSV_HEADER: [&str; 5] = ["Източник", "Количество", "Ед.", "Енергия (kWh)", "CO₂ (kg)"];

/// First field of the totals row.
pub const TOTAL_LABEL: &str = "ОБЩО";

/// Default real-number text: shortest round-trip digits, always with a
/// fractional part.
///
/// Magnitudes in `[1e-3, 1e7)` are plain decimals (`100.0`,
/// `3.3000000000000003`); anything else uses `d.dddE±n` (`1.358E7`, `8.0E-5`).
pub fn format_real(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}Infinity", sign);
    }

    let magnitude = value.abs();
    if value == 0.0 || (1e-3..1e7).contains(&magnitude) {
        return format!("{:?}", value);
    }

    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));

    if mantissa.contains('.') {
        format!("{}E{}", mantissa, exponent)
    } else {
        format!("{}.0E{}", mantissa, exponent)
    }
}

/// Serialize records and unrounded totals to CSV text.
pub(crate) fn write_csv(records: &[CalculationRecord], totals: &Totals) -> Result<String> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(CSV_HEADER)?;

    for record in records {
        wtr.write_record([
            record.source().name.to_string(),
            format_real(record.quantity()),
            record.source().unit.to_string(),
            format_real(record.energy()),
            format_real(record.emissions()),
        ])?;
    }

    wtr.write_record([
        TOTAL_LABEL.to_string(),
        String::new(),
        String::new(),
        format_real(totals.energy),
        format_real(totals.emissions),
    ])?;

    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_real() {
        assert_eq!(format_real(100.0), "100.0");
        assert_eq!(format_real(0.0), "0.0");
        assert_eq!(format_real(80.5), "80.5");
        assert_eq!(format_real(3.0 * 1.1), "3.3000000000000003");
    }

    #[test]
    fn test_format_real_decimal_range_edges() {
        assert_eq!(format_real(0.001), "0.001");
        assert_eq!(format_real(9999999.0), "9999999.0");
        assert_eq!(format_real(584000.0), "584000.0");
        assert_eq!(format_real(-2.5), "-2.5");
    }

    #[test]
    fn test_format_real_large_uses_exponent() {
        assert_eq!(format_real(13580000.0), "1.358E7");
        assert_eq!(format_real(1e7), "1.0E7");
        assert_eq!(format_real(19400000.5), "1.94000005E7");
    }

    #[test]
    fn test_format_real_small_uses_exponent() {
        assert_eq!(format_real(8e-5), "8.0E-5");
        assert_eq!(format_real(0.0001), "1.0E-4");
        assert_eq!(format_real(0.00012), "1.2E-4");
        assert_eq!(format_real(-8e-5), "-8.0E-5");
    }

    #[test]
    fn test_format_real_non_finite() {
        assert_eq!(format_real(f64::NAN), "NaN");
        assert_eq!(format_real(f64::INFINITY), "Infinity");
        assert_eq!(format_real(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_empty_ledger_csv() {
        let csv = write_csv(&[], &Totals::default()).unwrap();
        assert_eq!(
            csv,
            "Източник,Количество,Ед.,Енергия (kWh),CO₂ (kg)\nОБЩО,,,0.0,0.0\n"
        );
    }
}
