//! Axum route handlers for the Resume API.

use axum::{
    extract::State,
    http::{header, HeaderName, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::form::FormInput;
use crate::generation::generator::{
    export_resume, generate_resume, run_pipeline, GeneratedResume, ResumeArtifact,
};
use crate::layout::document::LaidOutSection;
use crate::state::AppState;

const GENERATION_ID_HEADER: &str = "x-generation-id";
const GENERATION_FAILED_HEADER: &str = "x-generation-failed";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub generation_id: Uuid,
    pub generated_at: DateTime<Utc>,
    /// Raw model output, or the failure placeholder.
    pub resume_text: String,
    /// Set when the model call failed and `resume_text` is a placeholder.
    pub generation_error: Option<String>,
    pub sections: Vec<LaidOutSection>,
}

impl From<GeneratedResume> for GenerateResponse {
    fn from(generated: GeneratedResume) -> Self {
        Self {
            generation_id: generated.generation_id,
            generated_at: generated.generated_at,
            resume_text: generated.outcome.text,
            generation_error: generated.outcome.failure,
            sections: generated.sections,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub form: FormInput,
    pub resume_text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/generate
///
/// Generates resume text and returns it with its section layout, without
/// rendering a document. Model failures come back as 200 with `generation_error` set.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(form): Json<FormInput>,
) -> Result<Json<GenerateResponse>, AppError> {
    let generated = generate_resume(&form, state.generator.as_ref(), &state.style).await?;
    Ok(Json(generated.into()))
}

/// POST /api/v1/resumes/export
///
/// Renders previously generated (possibly hand-edited) text into a document.
pub async fn handle_export(
    State(state): State<AppState>,
    Json(request): Json<ExportRequest>,
) -> Result<Response, AppError> {
    let artifact = export_resume(
        &request.form,
        &request.resume_text,
        state.renderer.clone(),
        &state.style,
    )
    .await?;
    download_response(artifact)
}

/// POST /api/v1/resumes
///
/// Full pipeline: generate text, then return the rendered document as a download.
pub async fn handle_create_resume(
    State(state): State<AppState>,
    Json(form): Json<FormInput>,
) -> Result<Response, AppError> {
    let (generated, artifact) = run_pipeline(
        &form,
        state.generator.as_ref(),
        state.renderer.clone(),
        &state.style,
    )
    .await?;

    let mut response = download_response(artifact)?;
    let headers = response.headers_mut();
    headers.insert(
        HeaderName::from_static(GENERATION_ID_HEADER),
        header_value(&generated.generation_id.to_string())?,
    );
    headers.insert(
        HeaderName::from_static(GENERATION_FAILED_HEADER),
        HeaderValue::from_static(if generated.outcome.is_failure() {
            "true"
        } else {
            "false"
        }),
    );
    Ok(response)
}

fn download_response(artifact: ResumeArtifact) -> Result<Response, AppError> {
    let disposition = header_value(&format!(
        "attachment; filename=\"{}\"",
        artifact.filename
    ))?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(artifact.mime_type)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        Bytes::from(artifact.bytes),
    )
        .into_response())
}

fn header_value(value: &str) -> Result<HeaderValue, AppError> {
    HeaderValue::from_str(value)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("invalid header value {value:?}: {e}")))
}
