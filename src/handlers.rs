use crate::errors::AppError;
use crate::resolver::{RangeError, resolve_range};
use crate::state::AppState;
use crate::ui;
use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

pub async fn index() -> Html<String> {
    Html(ui::render_index())
}

pub async fn about() -> Html<String> {
    Html(ui::render_about())
}

pub async fn faq() -> Html<String> {
    Html(ui::render_faq())
}

pub async fn reports(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let catalog = state.ensure_fresh().await?;
    Ok(Html(ui::render_reports(&catalog)))
}

pub async fn report_detail(
    State(state): State<AppState>,
    Path(report_id): Path<String>,
    Query(params): Query<RangeQuery>,
) -> Result<Html<String>, AppError> {
    let catalog = state.ensure_fresh().await?;

    let report = catalog
        .reports
        .get(&report_id)
        .ok_or_else(|| AppError::not_found(format!("no report named '{report_id}'")))?;

    // A record without dates is malformed catalog data, not a bad
    // request.
    if report.dates.is_empty() {
        return Err(AppError::server_error(format!(
            "report '{report_id}' has no dates"
        )));
    }

    // An empty query value means the parameter was not given.
    let start = params.start.filter(|label| !label.is_empty());
    let end = params.end.filter(|label| !label.is_empty());

    let resolved = resolve_range(&report.dates, start, end).map_err(|err| match err {
        RangeError::UnknownDate(label) => {
            AppError::bad_request(format!("unknown date label '{label}'"))
        }
    })?;

    Ok(Html(ui::render_report(&report_id, report, &resolved)))
}

pub async fn not_found() -> AppError {
    AppError::not_found("no such page")
}
