//! Unified logging for diagnostic output.
//!
//! Provides compact timestamped logging with per-module level configuration.
//! Supports `RUST_LOG` environment variable for runtime overrides. All log
//! output goes to stderr; stdout carries only computed values.
//!
//! # Configuration
//!
//! ```toml
//! [logging]
//! default = "warn"  # quiet by default
//!
//! [logging.modules]
//! input = "debug"   # trace accepted values
//! ```
//!
//! # Environment Variable
//!
//! `RUST_LOG` takes precedence over config and `-v` flags:
//! ```bash
//! RUST_LOG=debug compute 15.0 100.0 < values.txt
//! RUST_LOG=compute::constraint=trace compute 0.0 400.0 < values.txt
//! ```

use std::sync::Once;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::LoggingConfig;

static INIT: Once = Once::new();

/// Compact time format: HH:MM:SS.mmm
struct CompactTime;

impl FormatTime for CompactTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

/// Build the filter directive string from config and `-v` count.
///
/// Verbosity raises the default level (`-v` info, `-vv` debug, `-vvv`
/// trace) but never lowers it. Module overrides are appended unchanged.
pub fn filter_directives(config: &LoggingConfig, verbosity: u8) -> String {
    let default = match verbosity {
        0 => config.default.as_str(),
        1 if is_quieter_than(&config.default, "info") => "info",
        2 if is_quieter_than(&config.default, "debug") => "debug",
        3.. => "trace",
        _ => config.default.as_str(),
    };

    let mut directives = default.to_string();
    let mut modules: Vec<_> = config.modules.iter().collect();
    modules.sort();
    for (module, level) in modules {
        let target = if module.contains("::") {
            module.clone()
        } else {
            format!("compute::{module}")
        };
        directives.push_str(&format!(",{target}={level}"));
    }
    directives
}

fn level_rank(level: &str) -> u8 {
    match level.to_ascii_lowercase().as_str() {
        "off" => 0,
        "error" => 1,
        "warn" => 2,
        "info" => 3,
        "debug" => 4,
        "trace" => 5,
        _ => 2,
    }
}

fn is_quieter_than(level: &str, other: &str) -> bool {
    level_rank(level) < level_rank(other)
}

/// Initialize logging with configuration.
///
/// Call once at startup. Safe to call multiple times (only first call takes effect).
///
/// Log levels control visibility:
/// - `error` - errors only (quietest)
/// - `warn` - errors + warnings (default, quiet operation)
/// - `info` - stage summaries
/// - `debug` - per-value decisions
/// - `trace` - everything
///
/// The `RUST_LOG` environment variable takes precedence over config settings.
pub fn init_with_config(config: &LoggingConfig, verbosity: u8) {
    INIT.call_once(|| {
        // RUST_LOG env var takes precedence over config
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(filter_directives(config, verbosity))
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_timer(CompactTime)
            .with_level(true)
            .with_filter(filter);

        tracing_subscriber::registry().with(fmt_layer).init();
    });
}

/// Log an event with stage context.
///
/// # Examples
/// ```ignore
/// log_event!("input", "accepted", "{} values", values.len());
/// log_event!("driver", "complete");
/// ```
#[macro_export]
macro_rules! log_event {
    ($stage:expr, $event:expr) => {
        tracing::info!("[{}] {}", $stage, $event)
    };
    ($stage:expr, $event:expr, $($arg:tt)*) => {
        tracing::info!("[{}] {}: {}", $stage, $event, format!($($arg)*))
    };
}

/// Debug-only event logging.
///
/// # Examples
/// ```ignore
/// debug_event!("constraint", "clamped", "{excess} -> {remaining}");
/// ```
#[macro_export]
macro_rules! debug_event {
    ($stage:expr, $event:expr) => {
        tracing::debug!("[{}] {}", $stage, $event)
    };
    ($stage:expr, $event:expr, $($arg:tt)*) => {
        tracing::debug!("[{}] {}: {}", $stage, $event, format!($($arg)*))
    };
}
