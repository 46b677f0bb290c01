//! Section Extractor: splits generated resume text into titled sections.
//!
//! # Boundary rule
//! A section body starts right after the FIRST occurrence of its marker and runs
//! until the next marker of any kind (including a repeat of its own marker) or
//! the end of the text. Markers are matched as literal, case-sensitive substrings,
//! so a marker word used inside prose ("...with EDUCATION technology...") cuts the
//! surrounding section short. Known limitation; the boundaries stay exactly as described.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Section names
// ────────────────────────────────────────────────────────────────────────────

/// The fixed, ordered set of recognized resume sections.
///
/// Variant order IS the output order of `extract_sections` and the render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SectionName {
    Summary,
    Skills,
    Experience,
    Projects,
    Education,
}

impl SectionName {
    /// All recognized sections in enumeration order.
    pub const ALL: [SectionName; 5] = [
        SectionName::Summary,
        SectionName::Skills,
        SectionName::Experience,
        SectionName::Projects,
        SectionName::Education,
    ];

    /// The literal marker text searched for in generated output.
    pub fn marker(self) -> &'static str {
        match self {
            SectionName::Summary => "SUMMARY",
            SectionName::Skills => "SKILLS",
            SectionName::Experience => "EXPERIENCE",
            SectionName::Projects => "PROJECTS",
            SectionName::Education => "EDUCATION",
        }
    }

    /// Sections whose comma-separated lines render as individual bullets.
    pub fn uses_comma_bullets(self) -> bool {
        matches!(self, SectionName::Skills | SectionName::Projects)
    }
}

impl std::fmt::Display for SectionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.marker())
    }
}

/// One extracted section. Never mutated after extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRecord {
    pub name: SectionName,
    pub body: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Extraction
// ────────────────────────────────────────────────────────────────────────────

/// Extracts one record per recognized section present in `text`.
///
/// Single pass: every marker occurrence is collected up front, then each body is
/// sliced between the end of its first marker and the next marker start.
/// Sections that are absent or whose trimmed body is empty are omitted.
pub fn extract_sections(text: &str) -> Vec<SectionRecord> {
    let marker_starts = collect_marker_starts(text);

    SectionName::ALL
        .iter()
        .filter_map(|&name| {
            let first = text.find(name.marker())?;
            let body_start = first + name.marker().len();

            // marker_starts is sorted, so the first start at/after body_start is the cut.
            let body_end = marker_starts
                .iter()
                .copied()
                .find(|&pos| pos >= body_start)
                .unwrap_or(text.len());

            let body = text[body_start..body_end].trim();
            if body.is_empty() {
                return None;
            }

            Some(SectionRecord {
                name,
                body: body.to_string(),
            })
        })
        .collect()
}

/// Byte offsets of every marker occurrence in `text`, sorted ascending.
fn collect_marker_starts(text: &str) -> Vec<usize> {
    let mut starts: Vec<usize> = SectionName::ALL
        .iter()
        .flat_map(|name| text.match_indices(name.marker()).map(|(pos, _)| pos))
        .collect();
    starts.sort_unstable();
    starts
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn body_of(records: &[SectionRecord], name: SectionName) -> Option<&str> {
        records
            .iter()
            .find(|r| r.name == name)
            .map(|r| r.body.as_str())
    }

    #[test]
    fn test_inline_markers_split_into_sections() {
        let text = "SUMMARY Experienced engineer. SKILLS Python, Go EXPERIENCE Built stuff.";
        let records = extract_sections(text);

        assert_eq!(records.len(), 3);
        assert_eq!(
            body_of(&records, SectionName::Summary),
            Some("Experienced engineer.")
        );
        assert_eq!(body_of(&records, SectionName::Skills), Some("Python, Go"));
        assert_eq!(
            body_of(&records, SectionName::Experience),
            Some("Built stuff.")
        );
        assert!(body_of(&records, SectionName::Projects).is_none());
        assert!(body_of(&records, SectionName::Education).is_none());
    }

    #[test]
    fn test_all_five_sections_in_enumeration_order() {
        let text = "SUMMARY\nBackend engineer.\n\nSKILLS\nRust, SQL\n\nEXPERIENCE\nAcme Corp 2020-2024\n\n\
                    PROJECTS\nOrrery, Lantern\n\nEDUCATION\nBSc Computer Science\n";
        let records = extract_sections(text);

        let names: Vec<SectionName> = records.iter().map(|r| r.name).collect();
        assert_eq!(names, SectionName::ALL.to_vec());
        assert_eq!(records[0].body, "Backend engineer.");
        assert_eq!(records[1].body, "Rust, SQL");
        assert_eq!(records[2].body, "Acme Corp 2020-2024");
        assert_eq!(records[3].body, "Orrery, Lantern");
        assert_eq!(records[4].body, "BSc Computer Science");
    }

    #[test]
    fn test_output_order_ignores_input_order() {
        let text = "EDUCATION MSc Physics SUMMARY Curious generalist.";
        let records = extract_sections(text);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, SectionName::Summary);
        assert_eq!(records[0].body, "Curious generalist.");
        assert_eq!(records[1].name, SectionName::Education);
        assert_eq!(records[1].body, "MSc Physics");
    }

    #[test]
    fn test_missing_section_is_omitted() {
        let text = "SUMMARY a SKILLS b EXPERIENCE c PROJECTS d";
        let records = extract_sections(text);
        assert!(records.len() < 5);
        assert!(body_of(&records, SectionName::Education).is_none());
    }

    #[test]
    fn test_no_markers_yields_nothing() {
        assert!(extract_sections("AI generation failed: connection refused").is_empty());
        assert!(extract_sections("").is_empty());
    }

    #[test]
    fn test_empty_body_is_skipped() {
        let text = "SUMMARY   \n  SKILLS Rust";
        let records = extract_sections(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, SectionName::Skills);
    }

    #[test]
    fn test_marker_inside_prose_truncates_early() {
        // Known limitation: the EDUCATION marker inside the skills narrative cuts SKILLS short.
        let text = "SKILLS Built EDUCATION platforms in Rust";
        let records = extract_sections(text);

        assert_eq!(body_of(&records, SectionName::Skills), Some("Built"));
        assert_eq!(
            body_of(&records, SectionName::Education),
            Some("platforms in Rust")
        );
    }

    #[test]
    fn test_repeated_marker_ends_its_own_body() {
        let text = "SUMMARY first take SUMMARY second take";
        let records = extract_sections(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].body, "first take");
    }

    #[test]
    fn test_markers_are_case_sensitive() {
        let text = "Summary: lower-case headings are not markers. SKILLS Go";
        let records = extract_sections(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, SectionName::Skills);
    }

    #[test]
    fn test_markdown_heading_prefix_leaks_into_previous_body() {
        let text = "## SUMMARY\nShips things.\n## SKILLS\nRust";
        let records = extract_sections(text);
        assert_eq!(body_of(&records, SectionName::Summary), Some("Ships things.\n##"));
        assert_eq!(body_of(&records, SectionName::Skills), Some("Rust"));
    }

    #[test]
    fn test_multibyte_text_slices_on_char_boundaries() {
        let text = "SUMMARY Ingénieur logiciel — café ☕ SKILLS Rust, Zürich";
        let records = extract_sections(text);
        assert_eq!(
            body_of(&records, SectionName::Summary),
            Some("Ingénieur logiciel — café ☕")
        );
        assert_eq!(body_of(&records, SectionName::Skills), Some("Rust, Zürich"));
    }

    #[test]
    fn test_section_name_serializes_as_marker() {
        let json = serde_json::to_string(&SectionName::Experience).unwrap();
        assert_eq!(json, "\"EXPERIENCE\"");
        assert_eq!(SectionName::Projects.to_string(), "PROJECTS");
    }

    #[test]
    fn test_comma_bullet_sections() {
        let bulleted: Vec<SectionName> = SectionName::ALL
            .iter()
            .copied()
            .filter(|s| s.uses_comma_bullets())
            .collect();
        assert_eq!(bulleted, vec![SectionName::Skills, SectionName::Projects]);
    }
}
