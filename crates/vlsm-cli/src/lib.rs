//! vlsm CLI library

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::Cli;
pub use commands::Commands;
pub use config::CliConfig;
pub use error::{CliError, Result};

/// Initialize logging to stderr
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects debug and the
/// default is warnings only.
pub fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Run a parsed command line
pub fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    if !color_enabled(&cli, &config) {
        colored::control::set_override(false);
    }

    match cli.command {
        Some(cmd) => cmd.execute(&config, cli.config.as_deref()),
        // No command specified, prompt for input
        None => commands::interactive::execute(Default::default(), &config),
    }
}

fn load_config(cli: &Cli) -> Result<CliConfig> {
    // `config init` may target a file that does not exist yet
    match &cli.command {
        Some(Commands::Config(_)) => CliConfig::load_or_default(cli.config.as_deref()),
        _ => CliConfig::load(cli.config.as_deref()),
    }
}

fn color_enabled(cli: &Cli, config: &CliConfig) -> bool {
    !cli.no_color && config.color
}
