//! Study document parser
//!
//! Splits a markdown-like study document into display sections. Sections are
//! separated by `---` lines. Within a section the first `#`/`##` heading is
//! the title, lines after `### Theory` form the theory paragraph and a fenced
//! block holds the code sample. There is no error path: malformed input just
//! yields sections with empty fields.

use serde::Serialize;

const SECTION_DELIMITER: &str = "---";
const FENCE: &str = "```";
const THEORY_MARKER: &str = "### Theory";
const CODE_MARKER: &str = "### Code Examples";

/// One titled section of a study document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Position among the non-blank sections of the document
    pub id: usize,
    pub title: String,
    pub theory: String,
    pub code: String,
}

impl Section {
    /// True when nothing displayable was extracted
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.theory.is_empty() && self.code.is_empty()
    }

    pub fn has_theory(&self) -> bool {
        !self.theory.is_empty()
    }

    pub fn has_code(&self) -> bool {
        !self.code.is_empty()
    }
}

/// Parse a whole document into sections
pub fn parse_sections(blob: &str) -> Vec<Section> {
    split_sections(blob)
        .into_iter()
        .filter(|chunk| chunk.iter().any(|line| !line.trim().is_empty()))
        .enumerate()
        .map(|(id, chunk)| parse_section(id, &chunk))
        .collect()
}

fn split_sections(blob: &str) -> Vec<Vec<&str>> {
    let mut sections = vec![Vec::new()];
    for line in blob.lines() {
        if line.trim() == SECTION_DELIMITER {
            sections.push(Vec::new());
        } else if let Some(current) = sections.last_mut() {
            current.push(line);
        }
    }
    sections
}

/// Line-level state while walking one section
#[derive(Default)]
struct SectionBuilder {
    section: Section,
    in_code: bool,
    in_theory: bool,
    code: Vec<String>,
    theory: Vec<String>,
}

impl SectionBuilder {
    fn feed(&mut self, line: &str) {
        let trimmed = line.trim();

        if trimmed.starts_with(FENCE) {
            self.end_theory();
            if self.in_code {
                // Later code blocks replace earlier ones
                if !self.code.is_empty() {
                    self.section.code = self.code.join("\n");
                }
                self.code.clear();
                self.in_code = false;
            } else {
                self.in_code = true;
            }
            return;
        }

        if self.in_code {
            self.code.push(line.to_string());
            return;
        }

        if let Some(title) = heading_title(trimmed) {
            if self.section.title.is_empty() {
                self.section.title = title.to_string();
            }
            return;
        }

        if trimmed == THEORY_MARKER {
            self.end_theory();
            self.in_theory = true;
            return;
        }

        if trimmed == CODE_MARKER {
            self.end_theory();
            return;
        }

        // Other headings are skipped; theory keeps accumulating across them
        if trimmed.starts_with('#') {
            return;
        }

        if self.in_theory && !trimmed.is_empty() {
            self.theory.push(trimmed.to_string());
        }
    }

    fn end_theory(&mut self) {
        if self.in_theory && !self.theory.is_empty() {
            self.section.theory = self.theory.join(" ");
        }
        self.theory.clear();
        self.in_theory = false;
    }

    fn finish(mut self) -> Section {
        self.end_theory();
        // An unterminated fence never produces a code sample
        self.section
    }
}

fn parse_section(id: usize, lines: &[&str]) -> Section {
    let mut builder = SectionBuilder::default();
    builder.section.id = id;
    for line in lines {
        builder.feed(line);
    }
    builder.finish()
}

/// Title text for `# ` and `## ` headings
fn heading_title(trimmed: &str) -> Option<&str> {
    trimmed
        .strip_prefix("# ")
        .or_else(|| trimmed.strip_prefix("## "))
        .map(str::trim)
}
