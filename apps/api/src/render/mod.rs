// Document rendering backends.
// The layout module decides WHAT goes on the page; a DocumentRenderer decides
// how draw commands become bytes.

pub mod docx;

use thiserror::Error;

use crate::layout::DrawCommand;

pub use self::docx::DocxRenderer;

/// Base of every artifact filename.
const FILENAME_STEM: &str = "SmartResume";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("document encoding failed: {0}")]
    Encode(String),
}

/// Draw commands in, finished document bytes out.
///
/// Carried in `AppState` as `Arc<dyn DocumentRenderer>`; `render` runs on a
/// blocking thread.
pub trait DocumentRenderer: Send + Sync {
    fn render(&self, commands: &[DrawCommand]) -> Result<Vec<u8>, RenderError>;

    fn mime_type(&self) -> &'static str;

    /// File extension without the dot.
    fn extension(&self) -> &'static str;
}

/// Deterministic download name: `SmartResume_<Name_Parts>.<ext>`.
///
/// Name parts are the ASCII alphanumeric runs of the applicant's name, so the
/// result is always safe inside a Content-Disposition header.
pub fn artifact_filename(applicant_name: &str, extension: &str) -> String {
    let parts: Vec<&str> = applicant_name
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect();

    if parts.is_empty() {
        format!("{FILENAME_STEM}.{extension}")
    } else {
        format!("{FILENAME_STEM}_{}.{extension}", parts.join("_"))
    }
}
