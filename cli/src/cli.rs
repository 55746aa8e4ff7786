use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

#[derive(Parser)]
#[command(name = "xlens")]
#[command(
    author,
    version,
    about = "Categorize captured HTTP exchanges and show them in their display colors"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify every exchange in a capture file
    Classify {
        /// Capture file: a JSON array of exchanges, or one exchange per line
        file: String,

        /// Output format (defaults to the configured format)
        #[clap(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Comma-separated list of categories to show (defaults to all)
        #[clap(long)]
        only: Option<String>,

        /// Disable colored output
        #[clap(long, default_value_t = false)]
        no_color: bool,

        /// Configuration file path (defaults to xlens.toml)
        #[clap(short, long)]
        config: Option<String>,

        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },

    /// Show the color class of one or more HTTP status codes
    Status {
        /// Status codes to look up
        #[clap(required = true)]
        codes: Vec<u16>,

        /// Disable colored output
        #[clap(long, default_value_t = false)]
        no_color: bool,
    },

    /// Print the category color palette
    Palette {
        /// Disable colored output
        #[clap(long, default_value_t = false)]
        no_color: bool,
    },

    /// Write a default configuration file
    Init {
        /// Configuration file path (defaults to xlens.toml)
        #[clap(short, long, default_value = crate::config::DEFAULT_CONFIG_FILE)]
        config: String,

        /// Overwrite an existing configuration file
        #[clap(long, default_value_t = false)]
        force: bool,
    },
}
