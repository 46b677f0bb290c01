//! Resume Generation: orchestrates the form-to-document pipeline.
//!
//! Flow: validate form → build prompt → TextGenerator → extract sections →
//!       build draw commands → DocumentRenderer (spawn_blocking) → artifact.
//!
//! Model failures never abort a run: they become a visible sentinel text and
//! the document is still rendered (usually with the applicant header only).
//! Validation failures stop before the model is called; render failures stop
//! before any bytes are handed out.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::form::FormInput;
use crate::generation::prompts::{build_resume_prompt, RESUME_SYSTEM};
use crate::layout::document::{build_document, lay_out_sections, LaidOutSection, RenderStyle};
use crate::layout::sections::extract_sections;
use crate::llm_client::{LlmClient, LlmError};
use crate::render::{artifact_filename, DocumentRenderer};

/// Prefix of the text substituted for model output when generation fails.
pub const GENERATION_FAILED_PREFIX: &str = "AI generation failed: ";

// ────────────────────────────────────────────────────────────────────────────
// Generation service seam
// ────────────────────────────────────────────────────────────────────────────

/// Prompt in, text out. Carried in `AppState` as `Arc<dyn TextGenerator>`.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.complete(prompt, RESUME_SYSTEM).await
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Generated text, or the sentinel text plus the failure detail.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub text: String,
    pub failure: Option<String>,
}

impl GenerationOutcome {
    fn failed(err: &LlmError) -> Self {
        let detail = err.to_string();
        Self {
            text: format!("{GENERATION_FAILED_PREFIX}{detail}"),
            failure: Some(detail),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.failure.is_some()
    }
}

/// Generated text plus its section layout, before any document is rendered.
#[derive(Debug, Clone)]
pub struct GeneratedResume {
    pub generation_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub outcome: GenerationOutcome,
    pub sections: Vec<LaidOutSection>,
}

/// A finished, downloadable document.
#[derive(Debug, Clone)]
pub struct ResumeArtifact {
    pub filename: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Validates the form and asks the model for resume text.
///
/// Returns `AppError::Validation` without calling `generator` when the name is blank.
pub async fn generate_resume(
    form: &FormInput,
    generator: &dyn TextGenerator,
    style: &RenderStyle,
) -> Result<GeneratedResume, AppError> {
    form.validate()?;

    let generation_id = Uuid::new_v4();
    info!(%generation_id, "Generating resume text");

    let prompt = build_resume_prompt(form);
    let outcome = match generator.generate(&prompt).await {
        Ok(text) => GenerationOutcome {
            text,
            failure: None,
        },
        Err(e) => {
            warn!(%generation_id, error = %e, "Resume generation failed, continuing with placeholder text");
            GenerationOutcome::failed(&e)
        }
    };

    let sections = lay_out_sections(&extract_sections(&outcome.text), style.max_token_len);
    info!(
        %generation_id,
        sections = sections.len(),
        failed = outcome.is_failure(),
        "Resume text ready"
    );

    Ok(GeneratedResume {
        generation_id,
        generated_at: Utc::now(),
        outcome,
        sections,
    })
}

/// Renders already-generated text into a document. No model call.
pub async fn export_resume(
    form: &FormInput,
    resume_text: &str,
    renderer: Arc<dyn DocumentRenderer>,
    style: &RenderStyle,
) -> Result<ResumeArtifact, AppError> {
    form.validate()?;

    let sections = extract_sections(resume_text);
    let commands = build_document(form, &sections, style);
    let command_count = commands.len();

    // Packing the document is CPU-bound.
    let worker = Arc::clone(&renderer);
    let bytes = tokio::task::spawn_blocking(move || worker.render(&commands))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in render: {e}")))??;

    let filename = artifact_filename(&form.name, renderer.extension());
    info!(
        filename = %filename,
        commands = command_count,
        bytes = bytes.len(),
        "Resume document rendered"
    );

    Ok(ResumeArtifact {
        filename,
        mime_type: renderer.mime_type(),
        bytes,
    })
}

/// Full pipeline: generate then export. Nothing runs when validation fails.
pub async fn run_pipeline(
    form: &FormInput,
    generator: &dyn TextGenerator,
    renderer: Arc<dyn DocumentRenderer>,
    style: &RenderStyle,
) -> Result<(GeneratedResume, ResumeArtifact), AppError> {
    let generated = generate_resume(form, generator, style).await?;
    let artifact = export_resume(form, &generated.outcome.text, renderer, style).await?;
    Ok((generated, artifact))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
