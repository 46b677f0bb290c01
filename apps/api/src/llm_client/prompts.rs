// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Instruction that keeps section headings machine-splittable.
pub const SECTION_MARKER_INSTRUCTION: &str = "\
    Start each section with its name in UPPER CASE exactly as listed, on its own line. \
    Do NOT use the section names anywhere else in the text. \
    Within SKILLS and PROJECTS, separate items with commas.";
