//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render with display-width-aware padding. `separator` fills the rule
    /// line between header and body.
    pub fn render(&self, separator: &str) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        // Rule line
        let total: usize = self.columns.iter().map(|c| c.width + 1).sum();
        out.push_str(&separator.repeat(total));
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                out.push_str(&pad(&row[i], col.width));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

/// Pad to `width` terminal cells. `format!` width counts chars, which
/// misaligns wide glyphs in names, so measure with unicode-width instead.
fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}
