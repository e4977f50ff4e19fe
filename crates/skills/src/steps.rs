//! Execution-step extraction from a skill body.

/// Headings that open the execution section, matched as a prefix of the
/// trimmed line.
pub const EXECUTION_HEADINGS: &[&str] = &["## Execution Steps", "## 執行步驟"];

/// Position of the scanner relative to the execution section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionState {
    Outside,
    Inside,
}

/// Collect the non-blank lines of the first execution section, trimmed.
///
/// The section starts after a line beginning with one of
/// [`EXECUTION_HEADINGS`] and ends at the next line beginning with `#`, at
/// any heading level. Nothing after that line is examined, so only the first
/// section contributes.
pub fn extract_execution_steps(body: &str) -> Vec<String> {
    let mut steps = Vec::new();
    let mut state = SectionState::Outside;

    for line in body.split('\n') {
        let trimmed = line.trim();
        match state {
            SectionState::Outside => {
                if is_execution_heading(trimmed) {
                    state = SectionState::Inside;
                }
            },
            SectionState::Inside => {
                if trimmed.starts_with('#') {
                    break;
                }
                if !trimmed.is_empty() {
                    steps.push(trimmed.to_string());
                }
            },
        }
    }

    steps
}

fn is_execution_heading(line: &str) -> bool {
    EXECUTION_HEADINGS
        .iter()
        .any(|heading| line.starts_with(heading))
}
