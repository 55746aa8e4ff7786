use crate::capture::{load_exchanges, parse_category_filter};
use crate::config::{LensConfig, OutputConfig, OutputFormat};
use crate::error::Result;
use crate::render::{render_json, render_summary, render_table};
use crate::{logging, ui};
use exchange_lens::{classify_all, CategoryBreakdown};

#[derive(Debug, Clone)]
pub struct ClassifyArgs {
    pub file: String,
    pub format: Option<OutputFormat>,
    pub only: Option<String>,
    pub no_color: bool,
    pub config: Option<String>,
    pub verbose: bool,
}

/// Merge command-line flags over the configured output settings
pub fn effective_output(config: &LensConfig, args: &ClassifyArgs) -> OutputConfig {
    let mut output = config.output.clone();
    if let Some(format) = args.format {
        output.format = format;
    }
    if args.no_color {
        output.color = false;
    }
    output
}

/// Classify the capture file and render it, without printing
pub fn run(args: &ClassifyArgs, config: &LensConfig) -> Result<String> {
    let output = effective_output(config, args);
    let filter = match &args.only {
        Some(only) => parse_category_filter(only)?,
        None => Vec::new(),
    };

    let mut exchanges = classify_all(load_exchanges(&args.file)?);
    if !filter.is_empty() {
        exchanges.retain(|exchange| filter.contains(&exchange.category));
    }

    tracing::info!(
        file = %args.file,
        shown = exchanges.len(),
        format = ?output.format,
        "classified capture"
    );

    match output.format {
        OutputFormat::Table => Ok(render_table(&exchanges, &output)),
        OutputFormat::Json => render_json(&exchanges),
        OutputFormat::Summary => Ok(render_summary(
            &CategoryBreakdown::from_exchanges(&exchanges),
            output.color,
        )),
    }
}

pub fn execute(args: ClassifyArgs) -> Result<()> {
    let config = LensConfig::load(args.config.as_deref())?;
    logging::init_logging(&config.logging.level, args.verbose);

    let output = effective_output(&config, &args);
    ui::set_color(output.color);

    if args.verbose && output.format != OutputFormat::Json {
        ui::section_header(&format!("Exchanges in {}", args.file));
    }

    let rendered = run(&args, &config)?;
    println!("{rendered}");
    Ok(())
}
