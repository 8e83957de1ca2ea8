//! Table rendering utilities for CLI outputs.
//! Widths are measured on the plain text so colored cells stay aligned.

use ansi_term::Style;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub min_width: usize,
}

impl Column {
    pub fn new(header: &str, min_width: usize) -> Self {
        Self {
            header: header.to_string(),
            min_width,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Cell {
    pub text: String,
    pub style: Option<Style>,
}

impl Cell {
    pub fn plain<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            style: None,
        }
    }

    pub fn styled<S: Into<String>>(text: S, style: Style) -> Self {
        Self {
            text: text.into(),
            style: Some(style),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| UnicodeWidthStr::width(c.text.as_str()))
                    .chain([UnicodeWidthStr::width(col.header.as_str()), col.min_width])
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self, color: bool) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        for (col, w) in self.columns.iter().zip(&widths) {
            out.push_str(&pad(&col.header, *w));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, w) in widths.iter().enumerate() {
                let cell = row.get(i).cloned().unwrap_or_else(|| Cell::plain(""));
                let padded = pad(&cell.text, *w);
                match cell.style {
                    Some(style) if color => out.push_str(&style.paint(padded).to_string()),
                    _ => out.push_str(&padded),
                }
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{}", s, " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ansi_term::Colour;

    #[test]
    fn columns_grow_to_fit_content() {
        let mut t = Table::new(vec![Column::new("Date", 4), Column::new("State", 0)]);
        t.add_row(vec![Cell::plain("10/03/2025"), Cell::plain("Presente")]);
        let out = t.render(false);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Date       State    ");
        assert_eq!(lines[1], "10/03/2025 Presente ");
    }

    #[test]
    fn color_is_optional() {
        let mut t = Table::new(vec![Column::new("S", 1)]);
        t.add_row(vec![Cell::styled("ok", Colour::Green.normal())]);
        assert!(!t.render(false).contains('\x1b'));
        assert!(t.render(true).contains('\x1b'));
    }
}
