use anyhow::Context;
use std::io::{self, BufWriter};

use compute::cli::Cli;
use compute::cli::commands;
use compute::io::ExitCode;
use compute::{Bounds, Settings, logging};

fn main() -> std::process::ExitCode {
    let cli = match Cli::try_parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            let code = if e.use_stderr() {
                ExitCode::UsageError
            } else {
                ExitCode::Success
            };
            return code.into();
        }
    };

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::GeneralError.into();
        }
    };

    logging::init_with_config(&settings.logging, cli.verbose);
    if tracing::enabled!(tracing::Level::TRACE) {
        if let Ok(rendered) = settings.to_toml() {
            tracing::trace!("effective settings:\n{rendered}");
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    commands::compute::run(
        &cli,
        &Bounds::default(),
        stdin.lock(),
        BufWriter::new(stdout.lock()),
    )
    .into()
}

fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    Settings::load(cli.config.as_deref()).with_context(|| match &cli.config {
        Some(path) => format!("failed to load settings from {}", path.display()),
        None => "failed to load settings".to_string(),
    })
}
