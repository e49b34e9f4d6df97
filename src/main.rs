use wither_extractor::cli::commands::{CliArgs, Commands};
use wither_extractor::cli::handlers::{handle_config, handle_extract, handle_list};
use wither_extractor::util::logging::{self, LoggingConfig};
use wither_extractor::{ConfigError, ExtractorConfig, VERSION};

use clap::Parser;
use tracing::debug;

fn main() {
    let args = CliArgs::parse();
    if let Err(e) = init_logging_from_args(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    debug!("wither-extractor v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Extract(extract_args) => handle_extract(extract_args, args.quiet),
        Commands::List(list_args) => handle_list(list_args),
        Commands::Config(config_args) => handle_config(config_args),
    };

    std::process::exit(exit_code);
}

/// `--log-level` wins, then `-v`/`-q`, then `WITHER_LOG_LEVEL`
fn init_logging_from_args(args: &CliArgs) -> Result<(), ConfigError> {
    let mut config = ExtractorConfig::default();

    if let Some(level_str) = &args.log_level {
        config.log_level = level_str.to_lowercase();
    } else if args.verbose {
        config.log_level = "debug".to_string();
    } else if args.quiet {
        config.log_level = "error".to_string();
    }

    logging::init_logging(LoggingConfig::from_config(&config)?);
    Ok(())
}
