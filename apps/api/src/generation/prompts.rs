// All LLM prompt constants for the Generation module.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::generation::form::FormInput;
use crate::layout::sections::SectionName;
use crate::llm_client::prompts::SECTION_MARKER_INSTRUCTION;

/// System prompt for resume generation.
pub const RESUME_SYSTEM: &str = "You are an expert resume writer. \
    You write concise, professional, modern resumes in plain structured text. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Resume generation prompt template.
/// Replace: {name}, {email}, {phone}, {linkedin}, {github}, {skills},
///          {experience}, {projects}, {education}, {sections}, {marker_instruction}
pub const RESUME_PROMPT_TEMPLATE: &str = r#"Create a professional, modern, stylish resume in structured text format.

Name: {name}
Email: {email}
Phone: {phone}
LinkedIn: {linkedin}
GitHub: {github}

Skills: {skills}
Experience: {experience}
Projects: {projects}
Education: {education}

Write in sections: {sections}.
{marker_instruction}
Tone: Professional, modern, ATS-friendly."#;

/// Fills the template with the applicant's form fields.
pub fn build_resume_prompt(form: &FormInput) -> String {
    let sections = SectionName::ALL
        .iter()
        .map(|s| s.marker())
        .collect::<Vec<_>>()
        .join(", ");

    fill_placeholders(
        RESUME_PROMPT_TEMPLATE,
        &[
            ("marker_instruction", SECTION_MARKER_INSTRUCTION),
            ("sections", sections.as_str()),
            ("name", form.name.trim()),
            ("email", form.email.trim()),
            ("phone", form.phone.trim()),
            ("linkedin", form.linkedin.trim()),
            ("github", form.github.trim()),
            ("skills", form.skills.trim()),
            ("experience", form.experience.trim()),
            ("projects", form.projects.trim()),
            ("education", form.education.trim()),
        ],
    )
}

/// Single-pass `{key}` substitution. Inserted values are never scanned again,
/// and unknown `{...}` spans are copied through unchanged.
fn fill_placeholders(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, close))
        });

        match value {
            Some((v, close)) => {
                out.push_str(v);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
