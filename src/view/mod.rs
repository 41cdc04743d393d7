//! Presentation state for query results.
//!
//! A [`Screen`] owns the one visible state of the UI: loading, content, or
//! error, never more than one at a time. Every invocation of the pipeline
//! calls [`Screen::begin`] and later completes with [`Screen::succeed`] or
//! [`Screen::fail`] carrying the [`RenderToken`] it was issued; completions
//! whose token is no longer the latest are discarded, so the freshest query
//! wins regardless of completion order.

pub mod table;

use crate::series::{Normalized, SeriesRecord};
use std::fmt;
use std::mem;

/// Prefix composed in front of every failure message.
pub const ERROR_PREFIX: &str = "Error al obtener los datos";

/// Proof that a pipeline invocation was started; completions must present
/// it back to the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderToken(u64);

/// The single visible state.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// A query is in flight.
    Loading,
    /// Sorted rows ready to render; an empty vector renders the no-data
    /// placeholder row.
    Content(Vec<SeriesRecord>),
    /// A terminal failure, already phrased for the user.
    Error(String),
}

/// Owner of the view state and the invocation token counter.
#[derive(Debug)]
pub struct Screen {
    issued: u64,
    state: ViewState,
    /// Rows of the last successful render, kept while an error is shown but
    /// never rendered alongside it.
    retained: Option<Vec<SeriesRecord>>,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    pub fn new() -> Self {
        Self {
            issued: 0,
            state: ViewState::Loading,
            retained: None,
        }
    }

    /// Start a new invocation: the screen shows loading and any previous
    /// table moves out of sight (but is retained, not cleared).
    pub fn begin(&mut self) -> RenderToken {
        self.issued += 1;
        if let ViewState::Content(rows) = mem::replace(&mut self.state, ViewState::Loading) {
            self.retained = Some(rows);
        }
        RenderToken(self.issued)
    }

    /// Complete an invocation with normalized data. Rows are sorted by date
    /// descending; the sort is stable, so records sharing a date keep their
    /// input order. Returns `false` (and changes nothing) for a stale token.
    pub fn succeed(&mut self, token: RenderToken, data: Normalized) -> bool {
        if token.0 != self.issued {
            return false;
        }
        let rows = match data {
            Normalized::Rows(mut rows) => {
                rows.sort_by(|a, b| b.date.cmp(&a.date));
                rows
            }
            Normalized::Empty => Vec::new(),
        };
        self.state = ViewState::Content(rows);
        true
    }

    /// Complete an invocation with a failure. The user-visible message is
    /// the standard prefix plus the failure's own message. Returns `false`
    /// (and changes nothing) for a stale token.
    pub fn fail(&mut self, token: RenderToken, error: &dyn fmt::Display) -> bool {
        if token.0 != self.issued {
            return false;
        }
        self.state = ViewState::Error(format!("{ERROR_PREFIX}: {error}"));
        true
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The table that was visible before the current invocation, if any.
    /// It stays hidden until the next successful invocation replaces it.
    pub fn retained_rows(&self) -> Option<&[SeriesRecord]> {
        self.retained.as_deref()
    }

    /// Map the current state to its visible output.
    pub fn render(&self) -> String {
        match &self.state {
            ViewState::Loading => table::loading_message(),
            ViewState::Content(rows) => table::render_table(rows),
            ViewState::Error(message) => message.clone(),
        }
    }
}
