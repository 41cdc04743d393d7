//! Payload decoding and normalization for the UF series backend.
//!
//! The backend answers with one of three shapes: an array of record objects,
//! a single record object, or a sentinel object lacking the `date` field
//! (its way of saying "no data found"). [`RawPayload`] is the tagged union
//! decoded at the transport boundary; anything that matches none of the
//! shapes is a decode error there, never silently empty data.
//!
//! [`normalize`] then collapses a payload into either an ordered run of
//! [`SeriesRecord`]s or [`Normalized::Empty`].

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// One date/value pair, ready for presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesRecord {
    /// Calendar date in `YYYY-MM-DD` form, rendered verbatim and used as the
    /// sort key.
    pub date: String,
    /// UF value for that date; `None` marks a record whose value was absent
    /// or not numeric. Such records are kept, not dropped.
    pub value: Option<f64>,
}

/// A record object as the backend sends it.
///
/// `date` is optional because its absence is meaningful: a lone object
/// without `date` is the backend's no-data sentinel. The backend also tags
/// records with a `cached` boolean; that and any other extra field is
/// ignored here.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub date: Option<String>,
    pub value: Option<f64>,
}

impl RawRecord {
    fn from_map(map: &serde_json::Map<String, serde_json::Value>) -> RawRecord {
        RawRecord {
            date: map.get("date").and_then(|v| v.as_str()).map(str::to_owned),
            value: map.get("value").and_then(serde_json::Value::as_f64),
        }
    }
}

/// The three response shapes of the backend contract.
#[derive(Debug, Clone, PartialEq)]
pub enum RawPayload {
    /// An array of record objects (range and cache-dump queries).
    Collection(Vec<RawRecord>),
    /// A single record object (single-date queries), or the no-data
    /// sentinel when `date` is absent.
    Record(RawRecord),
}

impl<'de> Deserialize<'de> for RawPayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::Array(items) => {
                let records = items
                    .iter()
                    .map(|item| match item {
                        serde_json::Value::Object(map) => Ok(RawRecord::from_map(map)),
                        other => Err(de::Error::custom(format!(
                            "series elements must be objects, got {}",
                            json_kind(other)
                        ))),
                    })
                    .collect::<Result<Vec<_>, D::Error>>()?;
                Ok(RawPayload::Collection(records))
            }
            serde_json::Value::Object(map) => Ok(RawPayload::Record(RawRecord::from_map(&map))),
            other => Err(de::Error::custom(format!(
                "expected an object or an array of objects, got {}",
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Outcome of normalization: rows to render, or nothing to show.
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    Rows(Vec<SeriesRecord>),
    Empty,
}

/// Coerce a payload into an ordered run of records.
///
/// A single object becomes a one-element run. "No data" is an empty
/// collection or one whose *first* element lacks `date`; later elements are
/// not inspected for the sentinel. Records with a non-numeric value survive
/// with `value: None`, so row count always matches record count.
pub fn normalize(payload: RawPayload) -> Normalized {
    match payload {
        RawPayload::Record(record) => match record.date {
            Some(date) => Normalized::Rows(vec![SeriesRecord {
                date,
                value: record.value,
            }]),
            None => Normalized::Empty,
        },
        RawPayload::Collection(records) => {
            let sentinel = match records.first() {
                None => true,
                Some(first) => first.date.is_none(),
            };
            if sentinel {
                return Normalized::Empty;
            }
            Normalized::Rows(
                records
                    .into_iter()
                    .map(|record| SeriesRecord {
                        date: record.date.unwrap_or_default(),
                        value: record.value,
                    })
                    .collect(),
            )
        }
    }
}
