//! Turning classified exchanges into terminal output

use crate::config::OutputConfig;
use crate::error::Result;
use crate::table::{cells, TableBuilder, TableStyle};
use colored::Colorize;
use exchange_lens::{
    parse_hex_color, status_color, summary_color, Category, CategoryBreakdown, HttpExchange,
    StatusClass,
};

const PENDING_STATUS: &str = "...";

fn new_table(color: bool) -> TableBuilder {
    let mut builder = TableBuilder::with_style(TableStyle::Listing);
    if !color {
        builder.plain();
    }
    builder
}

/// Paint text in a CSS hex color; falls back to plain text when colors are off
pub fn paint(text: &str, hex: &str, color: bool) -> String {
    match parse_hex_color(hex) {
        Some((r, g, b)) if color => text.truecolor(r, g, b).to_string(),
        _ => text.to_string(),
    }
}

/// One row per exchange with its category and summary color
pub fn render_table(exchanges: &[HttpExchange], output: &OutputConfig) -> String {
    let mut builder = new_table(output.color);

    let mut headers = vec!["#", "Method"];
    if output.show_url {
        headers.push("URL");
    }
    if output.show_status {
        headers.push("Status");
    }
    headers.extend(["Category", "Color"]);
    builder.headers(headers);

    for (index, exchange) in exchanges.iter().enumerate() {
        let color = summary_color(exchange);
        let mut row = vec![
            cells::numeric((index + 1).to_string()),
            cells::normal(exchange.request().method.clone()),
        ];

        if output.show_url {
            let url = exchange.request().url.clone().unwrap_or_default();
            row.push(cells::muted(url));
        }

        if output.show_status {
            let status = exchange.status();
            let text = match (exchange.exchange.is_completed(), status) {
                (false, _) => PENDING_STATUS.to_string(),
                (true, Some(code)) => code.to_string(),
                (true, None) => "-".to_string(),
            };
            row.push(cells::painted(text, status_color(status)));
        }

        row.push(cells::painted_bold(exchange.category.label(), color));
        row.push(cells::painted(color, color));
        builder.styled_row(row);
    }

    builder.build()
}

/// Categorized exchanges as pretty-printed JSON
pub fn render_json(exchanges: &[HttpExchange]) -> Result<String> {
    Ok(serde_json::to_string_pretty(exchanges)?)
}

/// Per-category counts, every category listed
pub fn render_summary(breakdown: &CategoryBreakdown, color: bool) -> String {
    let mut builder = new_table(color);
    builder.headers(vec!["Category", "Count", "Share", "Color"]);

    for row in breakdown.rows() {
        builder.styled_row(vec![
            cells::painted_bold(row.category.label(), row.color),
            cells::numeric(row.count.to_string()),
            cells::numeric(format!("{:.1}%", row.percentage)),
            cells::painted(row.color, row.color),
        ]);
    }

    let mut rendered = builder.build();
    rendered.push('\n');
    rendered.push_str(&format!("Total exchanges: {}", breakdown.total()));
    if let Some(dominant) = breakdown.dominant() {
        rendered.push_str(&format!(
            " (mostly {})",
            paint(dominant.label(), dominant.color(), color)
        ));
    }
    rendered
}

/// The category color palette
pub fn render_palette(color: bool) -> String {
    let mut builder = new_table(color);
    builder.headers(vec!["Category", "Color"]);

    for category in Category::ALL {
        builder.styled_row(vec![
            cells::painted_bold(category.label(), category.color()),
            cells::painted(category.color(), category.color()),
        ]);
    }

    builder.build()
}

/// One line per status code with its class and color
pub fn render_status_codes(codes: &[u16], color: bool) -> String {
    codes
        .iter()
        .map(|code| {
            let class = StatusClass::from_status(Some(*code));
            format!(
                "{} {} {}",
                paint(&code.to_string(), class.color(), color),
                class.label(),
                class.color()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
