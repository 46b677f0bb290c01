//! Section Renderer: turns extracted sections into an ordered draw-command list.
//!
//! Nothing here produces bytes. The command list is handed to a
//! `render::DocumentRenderer`, which owns measurement, pagination and encoding.
//!
//! Document shape:
//! ```text
//! [ name banner ]                      filled, bold 22pt
//! Email: .. | Phone: ..                italic 12pt
//! LinkedIn: .. | GitHub: ..
//! [ SECTION ]                          filled, bold 14pt   ┐
//! paragraph / • bullet lines           regular 12pt        │ per non-empty section
//! ───────────────────────────────────  accent separator    ┘
//! ```

use serde::{Deserialize, Serialize};

use crate::generation::form::FormInput;
use crate::layout::sanitize::{sanitize_line, DEFAULT_MAX_TOKEN_LEN};
use crate::layout::sections::{SectionName, SectionRecord};

// ────────────────────────────────────────────────────────────────────────────
// Style
// ────────────────────────────────────────────────────────────────────────────

/// An sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    /// Parses `RRGGBB`, with or without a leading `#`.
    pub fn from_hex(s: &str) -> Option<Rgb> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Upper-case `RRGGBB` without `#`.
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Visual parameters for the generated document.
///
/// Built once at startup from config and shared read-only; the UI theme never
/// reaches this layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderStyle {
    /// Header fills, bullet glyphs and separators.
    pub accent: Rgb,
    pub header_text: Rgb,
    pub body_text: Rgb,
    pub banner_font_size_pt: u8,
    pub section_font_size_pt: u8,
    pub body_font_size_pt: u8,
    pub banner_height_mm: f32,
    pub section_header_height_mm: f32,
    pub line_height_mm: f32,
    pub separator_thickness_mm: f32,
    /// Passed to the Line Sanitizer for every emitted string.
    pub max_token_len: usize,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            accent: Rgb(0, 102, 204),
            header_text: Rgb::WHITE,
            body_text: Rgb::BLACK,
            banner_font_size_pt: 22,
            section_font_size_pt: 14,
            body_font_size_pt: 12,
            banner_height_mm: 15.0,
            section_header_height_mm: 10.0,
            line_height_mm: 8.0,
            separator_thickness_mm: 0.5,
            max_token_len: DEFAULT_MAX_TOKEN_LEN,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Draw commands
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontVariant {
    Regular,
    Bold,
    Italic,
}

/// One instruction for the document engine. Order is significant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    SetFillColor { color: Rgb },
    SetTextColor { color: Rgb },
    SetFont { variant: FontVariant, size_pt: u8 },
    /// Full-width single-line cell, filled with the current fill colour when `fill`.
    HeaderCell { text: String, height_mm: f32, fill: bool },
    /// Wrapped text block in the current font and text colour.
    Paragraph { text: String, line_height_mm: f32 },
    /// Bullet glyph in `bullet_color` followed by wrapped text in the current text colour.
    BulletItem {
        text: String,
        bullet_color: Rgb,
        line_height_mm: f32,
    },
    HorizontalLine { color: Rgb, thickness_mm: f32 },
    AdvanceY { mm: f32 },
}

// ────────────────────────────────────────────────────────────────────────────
// Line classification
// ────────────────────────────────────────────────────────────────────────────

/// How a single body line is presented. All strings are already sanitized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum RenderLine {
    Paragraph(String),
    Bullets(Vec<String>),
}

/// Classifies one body line. Returns `None` for blank lines.
///
/// SKILLS and PROJECTS lines containing a comma become bullets, one per
/// comma fragment (blank fragments included). Everything else is a paragraph.
pub fn classify_line(section: SectionName, line: &str, max_token_len: usize) -> Option<RenderLine> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if section.uses_comma_bullets() && line.contains(',') {
        let items = line
            .split(',')
            .map(|item| sanitize_line(item.trim(), max_token_len))
            .collect();
        return Some(RenderLine::Bullets(items));
    }

    Some(RenderLine::Paragraph(sanitize_line(line, max_token_len)))
}

/// A section after line classification, in render order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaidOutSection {
    pub name: SectionName,
    pub lines: Vec<RenderLine>,
}

/// Classifies every line of every section. Only sections with a blank body are dropped.
pub fn lay_out_sections(sections: &[SectionRecord], max_token_len: usize) -> Vec<LaidOutSection> {
    let mut ordered: Vec<&SectionRecord> = sections
        .iter()
        .filter(|s| !s.body.trim().is_empty())
        .collect();
    ordered.sort_by_key(|s| s.name);

    ordered
        .into_iter()
        .map(|section| LaidOutSection {
            name: section.name,
            lines: section
                .body
                .lines()
                .filter_map(|line| classify_line(section.name, line, max_token_len))
                .collect(),
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Document assembly
// ────────────────────────────────────────────────────────────────────────────

/// Builds the full command list: applicant header, then each non-empty section.
pub fn build_document(
    form: &FormInput,
    sections: &[SectionRecord],
    style: &RenderStyle,
) -> Vec<DrawCommand> {
    let mut commands = Vec::new();
    push_applicant_header(&mut commands, form, style);

    for section in lay_out_sections(sections, style.max_token_len) {
        push_section(&mut commands, &section, style);
    }

    commands
}

fn push_applicant_header(commands: &mut Vec<DrawCommand>, form: &FormInput, style: &RenderStyle) {
    let contact_lines = [
        format!("Email: {} | Phone: {}", form.email.trim(), form.phone.trim()),
        format!(
            "LinkedIn: {} | GitHub: {}",
            form.linkedin.trim(),
            form.github.trim()
        ),
    ];

    commands.extend([
        DrawCommand::SetFillColor {
            color: style.accent,
        },
        DrawCommand::SetTextColor {
            color: style.header_text,
        },
        DrawCommand::SetFont {
            variant: FontVariant::Bold,
            size_pt: style.banner_font_size_pt,
        },
        DrawCommand::HeaderCell {
            text: sanitize_line(form.name.trim(), style.max_token_len),
            height_mm: style.banner_height_mm,
            fill: true,
        },
        DrawCommand::SetTextColor {
            color: style.body_text,
        },
        DrawCommand::SetFont {
            variant: FontVariant::Italic,
            size_pt: style.body_font_size_pt,
        },
    ]);

    for line in contact_lines {
        commands.push(DrawCommand::Paragraph {
            text: sanitize_line(&line, style.max_token_len),
            line_height_mm: style.line_height_mm,
        });
    }

    commands.push(DrawCommand::AdvanceY { mm: 5.0 });
}

fn push_section(commands: &mut Vec<DrawCommand>, section: &LaidOutSection, style: &RenderStyle) {
    commands.extend([
        DrawCommand::SetFillColor {
            color: style.accent,
        },
        DrawCommand::SetTextColor {
            color: style.header_text,
        },
        DrawCommand::SetFont {
            variant: FontVariant::Bold,
            size_pt: style.section_font_size_pt,
        },
        DrawCommand::HeaderCell {
            text: section.name.marker().to_string(),
            height_mm: style.section_header_height_mm,
            fill: true,
        },
        DrawCommand::AdvanceY { mm: 2.0 },
        DrawCommand::SetTextColor {
            color: style.body_text,
        },
        DrawCommand::SetFont {
            variant: FontVariant::Regular,
            size_pt: style.body_font_size_pt,
        },
    ]);

    for line in &section.lines {
        match line {
            RenderLine::Paragraph(text) => commands.push(DrawCommand::Paragraph {
                text: text.clone(),
                line_height_mm: style.line_height_mm,
            }),
            RenderLine::Bullets(items) => {
                commands.extend(items.iter().map(|item| DrawCommand::BulletItem {
                    text: item.clone(),
                    bullet_color: style.accent,
                    line_height_mm: style.line_height_mm,
                }))
            }
        }
    }

    commands.extend([
        DrawCommand::AdvanceY { mm: 5.0 },
        DrawCommand::HorizontalLine {
            color: style.accent,
            thickness_mm: style.separator_thickness_mm,
        },
        DrawCommand::AdvanceY { mm: 3.0 },
    ]);
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
