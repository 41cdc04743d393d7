//! Table and JSON rendering for series records.

use crate::series::SeriesRecord;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde_json::json;

/// Placeholder shown when a query legitimately matched nothing.
pub const NO_DATA_MESSAGE: &str = "No hay datos disponibles";

/// Marker for records whose value is absent or not numeric.
pub const MISSING_VALUE: &str = "N/A";

/// Visible text of the loading state.
pub fn loading_message() -> String {
    "Cargando valores UF...".cyan().to_string()
}

/// Render records as a two-column table. An empty slice renders a single
/// placeholder row instead; no per-record layout is attempted for it.
pub fn render_table(rows: &[SeriesRecord]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Fecha", "Valor UF"]);

    if rows.is_empty() {
        table.add_row(vec![Cell::new(NO_DATA_MESSAGE)]);
        return table.to_string();
    }

    for row in rows {
        let value = match row.value {
            Some(value) => format_value(value),
            None => MISSING_VALUE.to_string(),
        };
        table.add_row(vec![Cell::new(&row.date), Cell::new(value)]);
    }

    table.to_string()
}

/// Render records as pretty JSON.
pub fn render_json(rows: &[SeriesRecord]) -> String {
    serde_json::to_string_pretty(&json!({
        "records": rows
    }))
    .unwrap_or_else(|_| "{}".to_string())
}

/// Format a value with the Chilean numeric convention: `.` as thousands
/// separator, `,` as decimal separator, exactly two fraction digits.
pub fn format_value(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if negative && cents > 0 { "-" } else { "" };
    format!("{sign}{grouped},{frac:02}")
}
