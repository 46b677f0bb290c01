use std::sync::Arc;

use crate::generation::generator::TextGenerator;
use crate::layout::RenderStyle;
use crate::render::DocumentRenderer;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything here is read-only; each request owns its form, text and sections.
#[derive(Clone)]
pub struct AppState {
    /// Model backend. Default: `LlmClient`.
    pub generator: Arc<dyn TextGenerator>,
    /// Document backend. Default: `DocxRenderer`.
    pub renderer: Arc<dyn DocumentRenderer>,
    pub style: Arc<RenderStyle>,
}
