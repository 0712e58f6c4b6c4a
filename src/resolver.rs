use crate::models::VizType;

/// Aliases accepted in place of a literal date label.
const LATEST: &str = "latest";
const EARLIEST: &str = "earliest";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRange {
    pub start: Option<String>,
    pub end: Option<String>,
    pub viz: VizType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    UnknownDate(String),
}

/// Canonicalizes the `start`/`end` query parameters against a report's
/// date list and picks the view type.
///
/// `dates` must be non-empty and ordered newest-first; callers reject
/// empty date lists before getting here. The steps run in a fixed
/// order:
///
/// 1. a lone `end` is treated as `start`
/// 2. `latest`/`earliest` aliases resolve to the first/last label
/// 3. `start == end` collapses to a single-date snapshot
/// 4. nothing given defaults to the full range (oldest through newest)
/// 5. any remaining label must be a member of `dates`
///
/// A single-date view (only `start` set) renders as a histogram;
/// everything else renders as a timeseries.
pub fn resolve_range(
    dates: &[String],
    start: Option<String>,
    end: Option<String>,
) -> Result<ResolvedRange, RangeError> {
    let (mut start, mut end) = if start.is_none() && end.is_some() {
        (end, None)
    } else {
        (start, end)
    };

    start = start.map(|label| resolve_alias(dates, label));
    end = end.map(|label| resolve_alias(dates, label));

    if start == end {
        end = None;
    }

    if start.is_none() && end.is_none() {
        start = dates.last().cloned();
        end = dates.first().cloned();
    }

    if let Some(label) = &start {
        if !dates.contains(label) {
            return Err(RangeError::UnknownDate(label.clone()));
        }
    }
    if let Some(label) = &end {
        if !dates.contains(label) {
            return Err(RangeError::UnknownDate(label.clone()));
        }
    }

    let viz = if start.is_some() && end.is_none() {
        VizType::Histogram
    } else {
        VizType::Timeseries
    };

    Ok(ResolvedRange { start, end, viz })
}

fn resolve_alias(dates: &[String], label: String) -> String {
    match label.as_str() {
        LATEST => dates.first().cloned().unwrap_or(label),
        EARLIEST => dates.last().cloned().unwrap_or(label),
        _ => label,
    }
}
