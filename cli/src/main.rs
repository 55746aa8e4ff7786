use clap::Parser;
use colored::Colorize;
use lens_cli::classify::{self, ClassifyArgs};
use lens_cli::cli::{Cli, Commands};
use lens_cli::{init, palette, status};
use std::process;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Classify {
            file,
            format,
            only,
            no_color,
            config,
            verbose,
        } => classify::execute(ClassifyArgs {
            file,
            format,
            only,
            no_color,
            config,
            verbose,
        }),
        Commands::Status { codes, no_color } => status::execute(codes, no_color),
        Commands::Palette { no_color } => palette::execute(no_color),
        Commands::Init { config, force } => init::execute(config, force),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
