//
//  wikitude-cli
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Table Output Formatting
//!
//! Builds terminal tables with `comfy_table` and colors the values that carry
//! meaning (job statuses, target ratings).
//!
//! ## Example
//!
//! ```rust,ignore
//! use wikitude_cli::output::TableBuilder;
//!
//! TableBuilder::new()
//!     .headers(["ID", "Name", "Targets"])
//!     .row(["tc-1", "posters", "12"])
//!     .print();
//! ```

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use console::style;

pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Builder over a [`comfy_table::Table`] with cyan headers when color is on.
pub struct TableBuilder {
    table: Table,
    color: bool,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            table: create_table(),
            color: console::colors_enabled(),
        }
    }

    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        if self.color {
            let cells: Vec<Cell> = headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)).collect();
            self.table.set_header(cells);
        } else {
            self.table.set_header(headers);
        }
        self
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(Into::into).collect();
        self.table.add_row(row);
        self
    }

    pub fn rows<I, R, S>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for row in rows {
            let row: Vec<String> = row.into_iter().map(Into::into).collect();
            self.table.add_row(row);
        }
        self
    }

    pub fn print(self) {
        println!("{}", self.table);
    }

    pub fn build(self) -> Table {
        self.table
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Colors a job status: completed green, running yellow, failed red.
pub fn format_status(status: &str, color: bool) -> String {
    if !color {
        return status.to_string();
    }

    match status.to_uppercase().as_str() {
        "COMPLETED" | "SUCCESS" => style(status).green().to_string(),
        "PENDING" | "PROCESSING" | "RUNNING" | "QUEUED" => style(status).yellow().to_string(),
        "FAILED" | "ERROR" | "CANCELLED" => style(status).red().to_string(),
        _ => status.to_string(),
    }
}

/// Formats a target's recognition rating.
///
/// The server rates images from 0 (not trackable) to 3 (excellent); -1 means
/// the rating is still being computed.
pub fn format_rating(rating: Option<i32>, color: bool) -> String {
    let Some(rating) = rating else {
        return "-".to_string();
    };

    let text = match rating {
        r if r < 0 => "pending".to_string(),
        r => format!("{}/3", r),
    };

    if !color {
        return text;
    }

    match rating {
        3 => style(text).green().to_string(),
        2 => style(text).cyan().to_string(),
        1 => style(text).yellow().to_string(),
        0 => style(text).red().to_string(),
        _ => style(text).dim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_status_without_color() {
        assert_eq!(format_status("COMPLETED", false), "COMPLETED");
        assert_eq!(format_status("PENDING", false), "PENDING");
    }

    #[test]
    fn test_format_rating_without_color() {
        assert_eq!(format_rating(None, false), "-");
        assert_eq!(format_rating(Some(-1), false), "pending");
        assert_eq!(format_rating(Some(2), false), "2/3");
    }

    #[test]
    fn test_table_renders_rows() {
        let table = TableBuilder::new()
            .color(false)
            .headers(["ID", "Name"])
            .row(["tc-1", "posters"])
            .build();
        let rendered = table.to_string();
        assert!(rendered.contains("tc-1"));
        assert!(rendered.contains("posters"));
    }
}
