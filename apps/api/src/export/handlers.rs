use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::screening::handlers::{current_result_set, validate_threshold};
use crate::screening::models::CandidateRecord;
use crate::screening::rank::shortlist;
use crate::state::AppState;

use super::csv::to_csv;
use super::qr::svg_for_url;
use super::report::{build_report, render_html};

#[derive(Deserialize)]
pub struct ExportQuery {
    /// When true, export only the shortlist cut instead of the full set.
    #[serde(default)]
    pub shortlist: bool,
    pub threshold: Option<f64>,
}

/// GET /api/v1/screenings/current/export/csv
pub async fn handle_export_csv(
    State(state): State<AppState>,
    Query(params): Query<ExportQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (records, filename) = selected_records(&state, &params, "csv").await?;
    let body = to_csv(&records)?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    ))
}

/// GET /api/v1/screenings/current/report
pub async fn handle_export_report(
    State(state): State<AppState>,
    Query(params): Query<ExportQuery>,
) -> Result<impl IntoResponse, AppError> {
    let result_set = current_result_set(&state).await?;
    let records = if params.shortlist {
        let threshold = validate_threshold(params.threshold)?;
        shortlist(&result_set.candidates, threshold)
    } else {
        result_set.candidates.clone()
    };
    let html = render_html(&build_report(&result_set, &records));
    Ok((
        [(header::CONTENT_TYPE, "text/html; charset=utf-8".to_string())],
        html,
    ))
}

#[derive(Deserialize)]
pub struct QrQuery {
    pub url: String,
}

/// GET /api/v1/share/qr
pub async fn handle_share_qr(
    Query(params): Query<QrQuery>,
) -> Result<impl IntoResponse, AppError> {
    let svg = svg_for_url(&params.url)?;
    Ok(([(header::CONTENT_TYPE, "image/svg+xml".to_string())], svg))
}

async fn selected_records(
    state: &AppState,
    params: &ExportQuery,
    extension: &str,
) -> Result<(Vec<CandidateRecord>, String), AppError> {
    let result_set = current_result_set(state).await?;
    if params.shortlist {
        let threshold = validate_threshold(params.threshold)?;
        Ok((
            shortlist(&result_set.candidates, threshold),
            format!("shortlist.{extension}"),
        ))
    } else {
        Ok((
            result_set.candidates,
            format!("screening_results.{extension}"),
        ))
    }
}
