use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// The full report catalog, keyed by report id. The on-disk form is a
/// single JSON object mapping ids to report records, so the map is the
/// whole document.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ReportCatalog {
    pub reports: BTreeMap<String, Report>,
}

/// One report record. `dates` is ordered newest-first: index 0 is the
/// most recent label and the last index is the oldest. Everything else
/// in the record is chart payload and is carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    #[serde(default)]
    pub dates: Vec<String>,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl Report {
    /// Display name for the list page: the payload's `title` when
    /// present; callers fall back to the report id.
    pub fn title(&self) -> Option<&str> {
        self.payload.get("title").and_then(Value::as_str)
    }
}

/// Which report view to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VizType {
    Histogram,
    Timeseries,
}
