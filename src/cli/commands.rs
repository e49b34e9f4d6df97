use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Dumps world-generation registries of a game server into JSON documents
#[derive(Parser, Debug)]
#[command(
    name = "wither-extractor",
    about = "Dumps world-generation registries of a game server into JSON documents",
    version,
    author,
    long_about = "wither-extractor reads the chunk status, noise and multi-noise biome \
                  source registries from a server snapshot and writes one JSON document \
                  per registry. Fixed-point climate parameters are decoded to floats."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        long,
        global = true,
        value_name = "LEVEL",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        ignore_case = true,
        help = "Set logging level"
    )]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Extract registries from a server snapshot",
        long_about = "Loads a server snapshot (JSON, or YAML for .yaml/.yml files), runs the \
                      selected extractors and writes one document per extractor. Nothing is \
                      written unless every selected extractor succeeds.\n\n\
                      Examples:\n  \
                      wither-extractor extract server.json\n  \
                      wither-extractor extract server.yaml -o generated\n  \
                      wither-extractor extract server.json --only multi_noise.json --compact"
    )]
    Extract(ExtractArgs),

    #[command(about = "List the documents the extractors produce")]
    List(ListArgs),

    #[command(about = "Show the effective configuration")]
    Config(ConfigArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct ExtractArgs {
    #[arg(value_name = "SNAPSHOT", help = "Path to the server snapshot")]
    pub snapshot: PathBuf,

    #[arg(
        short = 'o',
        long,
        value_name = "DIR",
        help = "Output directory (overrides WITHER_OUTPUT_DIR)"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        long = "only",
        value_name = "FILE",
        help = "Only write this document (repeatable)"
    )]
    pub only: Vec<String>,

    #[arg(long, help = "Write compact JSON instead of pretty-printed")]
    pub compact: bool,

    #[arg(long, help = "Fail when two entries map to the same key")]
    pub strict_keys: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ListArgs {
    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct ConfigArgs {
    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}
