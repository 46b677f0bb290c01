use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, Paragraph, Run, RunFonts, Shading};

use crate::layout::document::{DrawCommand, FontVariant, Rgb};
use crate::render::{DocumentRenderer, RenderError};

const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Vertical gaps below this are absorbed by normal paragraph spacing.
const MIN_BLANK_PARAGRAPH_MM: f32 = 4.0;

/// Separator rule drawn as a run of box-drawing characters.
const RULE_WIDTH_CHARS: usize = 48;

/// Word (OOXML) backend.
///
/// Cells become shaded single-run paragraphs, bullets a coloured glyph run plus
/// a text run, and separators a coloured rule. Wrapping and pagination are left
/// to the word processor.
#[derive(Debug, Clone)]
pub struct DocxRenderer {
    font: String,
}

impl DocxRenderer {
    pub fn new(font: impl Into<String>) -> Self {
        Self { font: font.into() }
    }
}

impl Default for DocxRenderer {
    fn default() -> Self {
        Self::new("DejaVu Sans")
    }
}

/// Current pen, updated by the `Set*` commands.
#[derive(Debug, Clone, Copy)]
struct Pen {
    fill: Rgb,
    text: Rgb,
    variant: FontVariant,
    size_pt: u8,
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            fill: Rgb::WHITE,
            text: Rgb::BLACK,
            variant: FontVariant::Regular,
            size_pt: 12,
        }
    }
}

impl DocumentRenderer for DocxRenderer {
    fn render(&self, commands: &[DrawCommand]) -> Result<Vec<u8>, RenderError> {
        let mut pen = Pen::default();
        let mut pending_gap_mm = 0.0_f32;
        let mut docx = Docx::new();

        for command in commands {
            if let DrawCommand::AdvanceY { mm } = command {
                pending_gap_mm += mm;
                continue;
            }
            if pending_gap_mm >= MIN_BLANK_PARAGRAPH_MM {
                docx = docx.add_paragraph(Paragraph::new());
            }
            pending_gap_mm = 0.0;

            match command {
                DrawCommand::SetFillColor { color } => pen.fill = *color,
                DrawCommand::SetTextColor { color } => pen.text = *color,
                DrawCommand::SetFont { variant, size_pt } => {
                    pen.variant = *variant;
                    pen.size_pt = *size_pt;
                }
                DrawCommand::HeaderCell { text, fill, .. } => {
                    let mut run = self.run(&format!(" {text} "), &pen);
                    if *fill {
                        run = run.shading(Shading::new().fill(pen.fill.to_hex()));
                    }
                    docx = docx.add_paragraph(Paragraph::new().add_run(run));
                }
                DrawCommand::Paragraph { text, .. } => {
                    docx = docx.add_paragraph(
                        Paragraph::new()
                            .align(AlignmentType::Left)
                            .add_run(self.run(text, &pen)),
                    );
                }
                DrawCommand::BulletItem {
                    text, bullet_color, ..
                } => {
                    let glyph_pen = Pen {
                        text: *bullet_color,
                        ..pen
                    };
                    docx = docx.add_paragraph(
                        Paragraph::new()
                            .align(AlignmentType::Left)
                            .add_run(self.run("   \u{2022} ", &glyph_pen))
                            .add_run(self.run(text, &pen)),
                    );
                }
                DrawCommand::HorizontalLine { color, .. } => {
                    let rule_pen = Pen {
                        text: *color,
                        ..pen
                    };
                    docx = docx.add_paragraph(
                        Paragraph::new().add_run(self.run(&"\u{2500}".repeat(RULE_WIDTH_CHARS), &rule_pen)),
                    );
                }
                DrawCommand::AdvanceY { .. } => {}
            }
        }

        let mut buf = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buf)
            .map_err(|e| RenderError::Encode(e.to_string()))?;

        Ok(buf.into_inner())
    }

    fn mime_type(&self) -> &'static str {
        DOCX_MIME
    }

    fn extension(&self) -> &'static str {
        "docx"
    }
}

impl DocxRenderer {
    fn run(&self, text: &str, pen: &Pen) -> Run {
        let run = Run::new()
            .add_text(text)
            .size(usize::from(pen.size_pt) * 2) // OOXML uses half-points
            .color(pen.text.to_hex())
            .fonts(RunFonts::new().ascii(&self.font));

        match pen.variant {
            FontVariant::Regular => run,
            FontVariant::Bold => run.bold(),
            FontVariant::Italic => run.italic(),
        }
    }
}
