//! Fixed-precision rendering of an [`OutputSequence`].

use std::io::{self, Write};

use crate::constraint::OutputSequence;

/// Format `value` with exactly `decimal_places` fractional digits.
pub fn format_value(value: f64, decimal_places: usize) -> String {
    format!("{value:.decimal_places$}")
}

/// Write each element on its own line, outputs first and total last.
///
/// The writer is flushed once at the end.
pub fn write_sequence<W: Write>(
    sequence: &OutputSequence,
    decimal_places: usize,
    mut writer: W,
) -> io::Result<()> {
    for value in sequence.iter() {
        writeln!(writer, "{}", format_value(value, decimal_places))?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::ConstraintApplier;
    use proptest::prelude::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(5.0, 1), "5.0");
        assert_eq!(format_value(0.0, 1), "0.0");
        assert_eq!(format_value(1_000_000_000.0, 1), "1000000000.0");
        assert_eq!(format_value(0.1 + 0.2, 1), "0.3");
        assert_eq!(format_value(2.4, 0), "2");
        assert_eq!(format_value(1.25, 2), "1.25");
    }

    #[test]
    fn test_write_sequence() {
        let sequence = ConstraintApplier::new(15.0, 100.0).apply(&[10.0, 20.0, 5.0]);
        let mut buffer = Vec::new();
        write_sequence(&sequence, 1, &mut buffer).unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "0.0\n5.0\n0.0\n5.0\n");
    }

    #[test]
    fn test_write_empty_sequence() {
        let sequence = ConstraintApplier::new(0.0, 1000.0).apply(&[]);
        let mut buffer = Vec::new();
        write_sequence(&sequence, 1, &mut buffer).unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "0.0\n");
    }

    proptest! {
        #[test]
        fn prop_formatting_is_idempotent(value in 0.0..=1_000_000_000.0_f64) {
            let printed = format_value(value, 1);
            let reparsed: f64 = printed.parse().unwrap();
            prop_assert_eq!(format_value(reparsed, 1), printed);
        }
    }
}
