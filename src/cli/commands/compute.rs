//! The compute command: resolve, read, apply, print.

use std::io::{BufRead, Write};

use crate::cli::Cli;
use crate::config::Bounds;
use crate::constraint::OutputSequence;
use crate::error::ComputeResult;
use crate::input::InputReader;
use crate::io::ExitCode;
use crate::{debug_event, log_event, output};

/// Run the pipeline over injected streams and report an exit code.
///
/// On failure the error goes to stderr and nothing is written to `writer`.
pub fn run<R: BufRead, W: Write>(cli: &Cli, bounds: &Bounds, input: R, writer: W) -> ExitCode {
    match execute(cli, bounds, input, writer) {
        Ok(sequence) => {
            log_event!("driver", "complete", "{} values printed", sequence.len());
            ExitCode::Success
        }
        Err(e) => {
            debug_event!("driver", "failed", "{}", e.kind());
            eprintln!("Error: {e}");
            e.exit_code()
        }
    }
}

/// Resolve parameters, read every value, then transform and print.
///
/// Nothing reaches `writer` until the whole input has been validated.
pub fn execute<R: BufRead, W: Write>(
    cli: &Cli,
    bounds: &Bounds,
    input: R,
    writer: W,
) -> ComputeResult<OutputSequence> {
    let applier = cli.resolve(bounds)?;
    debug_event!(
        "driver",
        "parameters",
        "threshold={} limit={}",
        applier.threshold(),
        applier.limit()
    );

    let values = InputReader::new(*bounds).read_values(input)?;
    let sequence = applier.apply(&values);
    output::write_sequence(&sequence, bounds.decimal_places, writer)?;
    Ok(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ComputeError;
    use std::io::Cursor;

    fn cli(threshold: f64, limit: f64) -> Cli {
        Cli {
            threshold,
            limit,
            config: None,
            verbose: 0,
        }
    }

    fn run_with(cli: &Cli, bounds: &Bounds, input: &str) -> (ExitCode, String) {
        let mut stdout = Vec::new();
        let code = run(cli, bounds, Cursor::new(input), &mut stdout);
        (code, String::from_utf8(stdout).unwrap())
    }

    #[test]
    fn test_scenarios() {
        let bounds = Bounds::default();
        let cases = [
            ("10.0\n20.0\n5.0\n", 15.0, 100.0, "0.0\n5.0\n0.0\n5.0\n"),
            ("100.0\n200.0\n300.0\n", 0.0, 400.0, "100.0\n200.0\n100.0\n400.0\n"),
            ("1000.0\n2000.0\n3000.0\n", 500.0, 1000.0, "500.0\n500.0\n0.0\n1000.0\n"),
            ("", 0.0, 1000.0, "0.0\n"),
        ];

        for (input, threshold, limit, expected) in cases {
            let (code, stdout) = run_with(&cli(threshold, limit), &bounds, input);
            assert_eq!(code, ExitCode::Success);
            assert_eq!(stdout, expected, "input {input:?}");
        }
    }

    #[test]
    fn test_invalid_input_writes_nothing() {
        let bounds = Bounds::default();
        let too_many = "100.0\n".repeat(101);
        for input in ["10.12345\n", "1.0\nabc\n", "5.0\n-1.0\n", too_many.as_str()] {
            let (code, stdout) = run_with(&cli(0.0, 1000.0), &bounds, input);
            assert_eq!(code, ExitCode::GeneralError);
            assert!(stdout.is_empty());
        }
    }

    #[test]
    fn test_argument_range_checked_before_reading() {
        let err = execute(
            &cli(0.0, 2_000_000_000.0),
            &Bounds::default(),
            Cursor::new("abc\n"),
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, ComputeError::ArgumentRange { name: "limit", .. }));
    }

    #[test]
    fn test_injected_bounds_drive_precision_and_format() {
        let bounds = Bounds {
            decimal_places: 2,
            ..Bounds::default()
        };
        let (code, stdout) = run_with(&cli(1.0, 10.0), &bounds, "1.25\n3.5\n");
        assert_eq!(code, ExitCode::Success);
        assert_eq!(stdout, "0.25\n2.50\n2.75\n");
    }
}
