use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::UploadedFile;
use crate::screening::models::{CandidateRecord, ResultSet, ScoreWeights};
use crate::screening::pipeline::run_screening;
use crate::screening::rank::shortlist;
use crate::state::AppState;

pub const DEFAULT_SHORTLIST_THRESHOLD: f64 = 70.0;

/// POST /api/v1/screenings
///
/// Multipart intake: one `job_description` file, one or more `resumes`
/// files, optional `weight_*` text fields. Missing inputs are rejected
/// before any processing starts; the batch itself runs on a blocking task.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResultSet>, AppError> {
    let mut jd_file: Option<UploadedFile> = None;
    let mut resume_files: Vec<UploadedFile> = Vec::new();
    let mut weights = ScoreWeights::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("job_description") => {
                let name = field
                    .file_name()
                    .unwrap_or("job_description.txt")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Unreadable upload '{name}': {e}")))?;
                jd_file = Some(UploadedFile { name, bytes });
            }
            Some("resumes") => {
                let name = field.file_name().unwrap_or("resume").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Unreadable upload '{name}': {e}")))?;
                resume_files.push(UploadedFile { name, bytes });
            }
            Some("weight_similarity") => weights.similarity = weight_field(field, "weight_similarity").await?,
            Some("weight_skills") => weights.skills = weight_field(field, "weight_skills").await?,
            Some("weight_experience") => weights.experience = weight_field(field, "weight_experience").await?,
            _ => {} // unknown fields are ignored
        }
    }

    let jd_file = jd_file.ok_or_else(|| {
        AppError::Validation("A job description file ('job_description') is required".to_string())
    })?;
    if resume_files.is_empty() {
        return Err(AppError::Validation(
            "At least one resume file ('resumes') is required".to_string(),
        ));
    }
    weights.validate().map_err(AppError::Validation)?;

    info!(
        jd = %jd_file.name,
        resumes = resume_files.len(),
        "Starting screening run"
    );

    let vocabulary = state.vocabulary.clone();
    let embedder = state.embedder.clone();
    let result_set = tokio::task::spawn_blocking(move || {
        run_screening(&jd_file, &resume_files, &weights, &vocabulary, embedder.as_ref())
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))??;

    info!(candidates = result_set.candidates.len(), "Screening complete");
    state.sessions.replace(result_set.clone()).await;
    Ok(Json(result_set))
}

/// GET /api/v1/screenings/current
pub async fn handle_get_results(
    State(state): State<AppState>,
) -> Result<Json<ResultSet>, AppError> {
    let result_set = current_result_set(&state).await?;
    Ok(Json(result_set))
}

#[derive(Deserialize)]
pub struct ShortlistQuery {
    pub threshold: Option<f64>,
}

#[derive(Serialize)]
pub struct ShortlistResponse {
    pub threshold: f64,
    /// Highest-ranked candidate overall, regardless of the threshold.
    pub best_candidate: Option<CandidateRecord>,
    pub shortlisted: Vec<CandidateRecord>,
}

/// GET /api/v1/screenings/current/shortlist
pub async fn handle_shortlist(
    State(state): State<AppState>,
    Query(params): Query<ShortlistQuery>,
) -> Result<Json<ShortlistResponse>, AppError> {
    let threshold = validate_threshold(params.threshold)?;
    let result_set = current_result_set(&state).await?;
    Ok(Json(ShortlistResponse {
        threshold,
        best_candidate: result_set.candidates.first().cloned(),
        shortlisted: shortlist(&result_set.candidates, threshold),
    }))
}

#[derive(Deserialize)]
pub struct NoteRequest {
    pub note: String,
}

/// PATCH /api/v1/candidates/:id/notes
pub async fn handle_set_note(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<NoteRequest>,
) -> Result<StatusCode, AppError> {
    if state.sessions.set_note(id, req.note).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Candidate {id} not found")))
    }
}

pub(crate) async fn current_result_set(state: &AppState) -> Result<ResultSet, AppError> {
    state.sessions.current().await.ok_or_else(|| {
        AppError::NotFound("No screening has been run in this session yet".to_string())
    })
}

pub(crate) fn validate_threshold(threshold: Option<f64>) -> Result<f64, AppError> {
    let threshold = threshold.unwrap_or(DEFAULT_SHORTLIST_THRESHOLD);
    if !threshold.is_finite() || !(0.0..=100.0).contains(&threshold) {
        return Err(AppError::Validation(format!(
            "threshold must be between 0 and 100, got {threshold}"
        )));
    }
    Ok(threshold)
}

async fn weight_field(
    field: axum::extract::multipart::Field<'_>,
    name: &str,
) -> Result<f64, AppError> {
    let text = field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Unreadable field '{name}': {e}")))?;
    text.trim()
        .parse::<f64>()
        .map_err(|_| AppError::Validation(format!("{name} must be a number, got '{text}'")))
}
