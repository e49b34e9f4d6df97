pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{CliArgs, Commands, ConfigArgs, ExtractArgs, ListArgs, OutputFormatArg};
pub use handlers::{effective_config, handle_config, handle_extract, handle_list};
pub use output::{OutputFormat, OutputFormatter};
