//! Query construction for the UF series backend.
//!
//! A user-level [`QueryMode`] resolves into a [`QueryTarget`], and each
//! target maps deterministically to exactly one resource path relative to
//! the API base (`/{date}`, `/{start}/{end}`, `/cached`). Resolution is the
//! only place that touches the clock; nothing here touches the network.

use chrono::NaiveDate;
use thiserror::Error;

/// Date layout used by the backend, both in paths and in payloads.
///
/// Lexicographic order on this format is chronological order, which the
/// presenter relies on when sorting.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryMode {
    /// One specific date.
    Single { date: String },
    /// An inclusive date range, forwarded verbatim (no reordering and no
    /// `start <= end` check; the backend diagnoses inverted ranges).
    Range { start: String, end: String },
    /// Today's value, resolved against the local clock.
    Today,
    /// The last seven calendar days, today included.
    LastWeek,
    /// Everything the backend currently has cached.
    CachedAll,
}

/// A fully resolved request target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryTarget {
    Single(String),
    Range(String, String),
    CachedAll,
}

/// Errors raised while building a query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A required field was empty; no request is issued for it.
    #[error("Required field '{0}' is empty")]
    EmptyField(&'static str),
}

impl QueryMode {
    /// Resolve this mode into a concrete target.
    ///
    /// `today` is injected so the relative modes (`Today`, `LastWeek`) are
    /// deterministic under test; the CLI passes the local calendar date.
    pub fn resolve(self, today: NaiveDate) -> Result<QueryTarget, QueryError> {
        match self {
            QueryMode::Single { date } => Ok(QueryTarget::Single(required(date, "date")?)),
            QueryMode::Range { start, end } => Ok(QueryTarget::Range(
                required(start, "start")?,
                required(end, "end")?,
            )),
            QueryMode::Today => Ok(QueryTarget::Single(format_date(today))),
            QueryMode::LastWeek => {
                let start = today - chrono::Days::new(6);
                Ok(QueryTarget::Range(format_date(start), format_date(today)))
            }
            QueryMode::CachedAll => Ok(QueryTarget::CachedAll),
        }
    }
}

impl QueryTarget {
    /// Resource path for this target, relative to the API base.
    pub fn resource_path(&self) -> String {
        match self {
            QueryTarget::Single(date) => format!("/{date}"),
            QueryTarget::Range(start, end) => format!("/{start}/{end}"),
            QueryTarget::CachedAll => "/cached".to_string(),
        }
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn required(field: String, name: &'static str) -> Result<String, QueryError> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return Err(QueryError::EmptyField(name));
    }
    Ok(trimmed.to_string())
}
