//! CLI entry point - the composition root.
//!
//! Settings are loaded once in bootstrap; command dispatch routes to
//! handlers which use the shared `CliContext`.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use mountwise_cli::handlers::recommend::RecommendOptions;
use mountwise_cli::{Cli, CliError, Commands, bootstrap, handlers};

/// Log to stderr so stdout stays machine-readable. `RUST_LOG` wins over
/// `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let ctx = bootstrap(cli.settings.as_deref())?;

    match command {
        Commands::Filter { inputs } => handlers::filter::execute(&ctx, &inputs),
        Commands::Variations {
            inputs,
            base,
            component,
        } => handlers::variations::execute(&ctx, &inputs, &base, &component),
        Commands::Recommend {
            inputs,
            group,
            properties,
            config,
            merged,
        } => {
            let specs = handlers::recommend::parse_specs(&properties)?;
            handlers::recommend::execute(
                &ctx,
                &inputs,
                RecommendOptions {
                    group: &group,
                    specs: &specs,
                    config: config.as_deref(),
                    merged,
                },
            )
        }
    }
}

fn main() -> ExitCode {
    // Load environment variables before parsing so MOUNTWISE_SETTINGS can come from .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            eprintln!("Error: {err:#}");
            ExitCode::from(code)
        }
    }
}
