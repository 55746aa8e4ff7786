use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Attribute, Cell, CellAlignment, Color,
    ContentArrangement, Table, TableComponent,
};

/// Builder for creating consistently styled tables across the application
#[derive(Clone)]
pub struct TableBuilder {
    table: Table,
}

/// Table styling presets for different use cases
#[derive(Debug, Clone, PartialEq)]
pub enum TableStyle {
    /// One row per exchange, no separators between rows
    Listing,
}

impl TableBuilder {
    /// Create a new table builder with default styling
    fn new() -> Self {
        let mut table = Table::new();

        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic);

        Self { table }
    }

    /// Create a table with a specific style preset
    pub fn with_style(style: TableStyle) -> Self {
        let mut builder = Self::new();
        builder.apply_style(style);
        builder
    }

    /// Apply a style preset to the table
    pub fn apply_style(&mut self, style: TableStyle) -> &mut Self {
        match style {
            TableStyle::Listing => {
                self.table
                    .remove_style(TableComponent::HorizontalLines)
                    .remove_style(TableComponent::LeftBorderIntersections)
                    .remove_style(TableComponent::RightBorderIntersections)
                    .remove_style(TableComponent::MiddleIntersections);
            }
        }
        self
    }

    /// Strip all cell colors and attributes from the output
    pub fn plain(&mut self) -> &mut Self {
        self.table.force_no_tty();
        self
    }

    /// Set table headers in bold
    pub fn headers<I, S>(&mut self, headers: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let header_cells: Vec<Cell> = headers
            .into_iter()
            .map(|h| Cell::new(h.into()).add_attribute(Attribute::Bold))
            .collect();

        self.table.set_header(header_cells);
        self
    }

    /// Add a row with custom styled cells
    pub fn styled_row(&mut self, cells: Vec<Cell>) -> &mut Self {
        self.table.add_row(cells);
        self
    }

    /// Build and return the formatted table as a string
    pub fn build(self) -> String {
        self.table.to_string()
    }
}

/// Helper functions for creating styled cells
pub mod cells {
    use super::*;
    use exchange_lens::parse_hex_color;

    /// Create a cell painted in a CSS hex color; unparseable colors stay unstyled
    pub fn painted<S: Into<String>>(text: S, hex: &str) -> Cell {
        let cell = Cell::new(text.into());
        match parse_hex_color(hex) {
            Some((r, g, b)) => cell.fg(Color::Rgb { r, g, b }),
            None => cell,
        }
    }

    /// Create a bold cell painted in a CSS hex color
    pub fn painted_bold<S: Into<String>>(text: S, hex: &str) -> Cell {
        painted(text, hex).add_attribute(Attribute::Bold)
    }

    /// Create a right-aligned cell for counts and percentages
    pub fn numeric<S: Into<String>>(text: S) -> Cell {
        Cell::new(text.into()).set_alignment(CellAlignment::Right)
    }

    /// Create a muted/dimmed cell (gray text)
    pub fn muted<S: Into<String>>(text: S) -> Cell {
        Cell::new(text.into()).fg(Color::DarkGrey)
    }

    /// Create a cell for normal text (default color, no styling)
    pub fn normal<S: Into<String>>(text: S) -> Cell {
        Cell::new(text.into())
    }
}
