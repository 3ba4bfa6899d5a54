//! Study Library
//!
//! The technology catalogue shown on the learner dashboard and the study
//! documents bundled with the application.

use serde::Serialize;

use super::parser::{parse_sections, Section};

/// A technology tile on the learner dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Technology {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Gradient classes for the tile header
    pub accent: &'static str,
    /// Unavailable technologies render as "Coming Soon"
    pub available: bool,
}

/// A bundled study document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StudyDocument {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Label shown in the code block header
    pub language: &'static str,
    #[serde(skip)]
    pub body: &'static str,
}

impl StudyDocument {
    /// Parse the document body into display sections
    pub fn sections(&self) -> Vec<Section> {
        parse_sections(self.body)
    }
}

const PYTHON: StudyDocument = StudyDocument {
    id: "python",
    title: "Python Programming",
    description: "Core Python concepts with runnable examples",
    language: "Python",
    body: include_str!("docs/python.md"),
};

const SQL: StudyDocument = StudyDocument {
    id: "sql",
    title: "SQL Database Programming",
    description: "Master SQL with practical examples",
    language: "SQL",
    body: include_str!("docs/sql.md"),
};

static DOCUMENTS: [StudyDocument; 2] = [PYTHON, SQL];

static CATALOG: [Technology; 6] = [
    Technology {
        id: "python",
        name: "Python",
        description: "Programming Language",
        icon: "🐍",
        accent: "from-blue-400 to-blue-600",
        available: true,
    },
    Technology {
        id: "sql",
        name: "SQL",
        description: "Database Management",
        icon: "🗄️",
        accent: "from-orange-400 to-orange-600",
        available: true,
    },
    Technology {
        id: "html",
        name: "HTML",
        description: "Markup Language",
        icon: "🌐",
        accent: "from-red-400 to-red-600",
        available: false,
    },
    Technology {
        id: "css",
        name: "CSS",
        description: "Styling Language",
        icon: "🎨",
        accent: "from-purple-400 to-purple-600",
        available: false,
    },
    Technology {
        id: "javascript",
        name: "JavaScript",
        description: "Programming Language",
        icon: "⚡",
        accent: "from-yellow-400 to-yellow-600",
        available: false,
    },
    Technology {
        id: "react",
        name: "React",
        description: "JavaScript Library",
        icon: "⚛️",
        accent: "from-cyan-400 to-cyan-600",
        available: false,
    },
];

/// All technologies in display order
pub fn catalog() -> &'static [Technology] {
    &CATALOG
}

/// Look up a bundled document by id
pub fn document(id: &str) -> Option<&'static StudyDocument> {
    DOCUMENTS.iter().find(|doc| doc.id.eq_ignore_ascii_case(id))
}

/// Document opened when a technology tile is selected.
///
/// Unavailable technologies open nothing.
pub fn open(technology: &Technology) -> Option<&'static StudyDocument> {
    if !technology.available {
        return None;
    }
    document(technology.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_technologies_have_documents() {
        for tech in catalog() {
            assert_eq!(open(tech).is_some(), tech.available, "{}", tech.id);
        }
    }

    #[test]
    fn test_document_lookup() {
        assert_eq!(document("SQL").map(|d| d.id), Some("sql"));
        assert!(document("rust").is_none());
    }

    #[test]
    fn test_bundled_documents_parse() {
        for id in ["python", "sql"] {
            let doc = document(id).unwrap();
            let sections = doc.sections();
            assert!(sections.len() > 3, "{id} should have several sections");
            assert!(sections.iter().any(|s| s.has_theory()), "{id} theory");
            assert!(sections.iter().any(|s| s.has_code()), "{id} code");
            for section in &sections {
                assert!(!section.code.contains("```"));
            }
        }
    }
}
