//! Learner study area
//!
//! Home shows the technology catalogue; selecting an available technology
//! opens its document. Code blocks offer a copy action whose confirmation
//! clears after [`COPY_FEEDBACK_MS`].

use crate::content::{self, Section, StudyDocument, Technology};

/// How long the "Copied!" confirmation stays visible
pub const COPY_FEEDBACK_MS: u32 = 2_000;

pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied!";

/// Which part of the learner dashboard is shown
#[derive(Debug, Clone, Default, PartialEq)]
pub enum StudyView {
    #[default]
    Home,
    Study {
        document: &'static StudyDocument,
        sections: Vec<Section>,
    },
}

impl StudyView {
    /// Open a technology. Unavailable technologies leave the view unchanged.
    pub fn select(&mut self, technology: &Technology) -> bool {
        match content::open(technology) {
            Some(document) => {
                *self = StudyView::Study {
                    document,
                    sections: document.sections(),
                };
                true
            }
            None => false,
        }
    }

    pub fn back(&mut self) {
        *self = StudyView::Home;
    }

    /// Heading shown in the navigation bar
    pub fn heading(&self) -> &'static str {
        match self {
            StudyView::Home => "Learning Dashboard",
            StudyView::Study { document, .. } => document.title,
        }
    }
}

/// Tracks which code block was copied last
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    copied: Option<String>,
}

impl CopyFeedback {
    pub fn mark(&mut self, code: &str) {
        self.copied = Some(code.to_string());
    }

    /// Clear the confirmation, but only if it still belongs to `code`
    pub fn expire(&mut self, code: &str) {
        if self.copied.as_deref() == Some(code) {
            self.copied = None;
        }
    }

    pub fn label_for(&self, code: &str) -> &'static str {
        if self.copied.as_deref() == Some(code) {
            COPIED_LABEL
        } else {
            COPY_LABEL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_available_technology() {
        let python = content::catalog().iter().find(|t| t.id == "python").unwrap();
        let mut view = StudyView::default();

        assert!(view.select(python));
        match &view {
            StudyView::Study { document, sections } => {
                assert_eq!(document.id, "python");
                assert!(!sections.is_empty());
            }
            StudyView::Home => panic!("expected study view"),
        }

        view.back();
        assert_eq!(view.heading(), "Learning Dashboard");
    }

    #[test]
    fn test_unavailable_technology_is_noop() {
        let react = content::catalog().iter().find(|t| t.id == "react").unwrap();
        let mut view = StudyView::default();
        assert!(!view.select(react));
        assert_eq!(view, StudyView::Home);
    }

    #[test]
    fn test_copy_feedback() {
        let mut feedback = CopyFeedback::default();
        feedback.mark("print(1)");
        assert_eq!(feedback.label_for("print(1)"), "Copied!");
        assert_eq!(feedback.label_for("print(2)"), "Copy");

        feedback.mark("print(2)");
        feedback.expire("print(1)");
        assert_eq!(feedback.label_for("print(2)"), "Copied!");

        feedback.expire("print(2)");
        assert_eq!(feedback.label_for("print(2)"), "Copy");
    }
}
