//! rocm-smoke CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use rocm_smoke::cli::{Cli, CommandDispatcher, Commands};
use rocm_smoke::config::HarnessConfig;
use rocm_smoke::ui::{create_ui, is_interactive, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so stdout stays the report.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("rocm_smoke=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rocm_smoke=info"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("rocm-smoke starting with args: {:?}", cli);

    let output_mode = OutputMode::from_flags(cli.verbose, cli.quiet);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // JSON output must not be interleaved with spinner frames
    let interactive = match &cli.command {
        Some(Commands::Run(args)) => !args.json && is_interactive(),
        _ => is_interactive(),
    };

    let mut ui = create_ui(interactive, output_mode);

    let dispatcher = CommandDispatcher::new(HarnessConfig::from_cli(&cli));

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code.clamp(0, 255) as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
