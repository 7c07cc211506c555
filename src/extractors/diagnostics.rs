//! Non-fatal anomalies found during extraction.
//!
//! Diagnostics never stop a conversion. They are returned next to the result so the
//! caller can decide whether to show them; the extractor also logs each one at `warn`.

use serde::Serialize;
use std::fmt;

/// Longest element excerpt kept in a diagnostic message.
const MAX_EXCERPT_LEN: usize = 80;

/// A non-fatal anomaly in the source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A `<char/>` element without a usable integer `id`; it was skipped
    StrayGlyphElement {
        /// The skipped element, possibly shortened
        element: String,
    },

    /// A `<char/>` whose `id` is an integer but not a Unicode scalar value; it was skipped
    UnrepresentableCodepoint {
        /// The declared id, as written
        id: String,
    },

    /// The same character is declared by more than one `<char/>`; the last one wins
    DuplicateCodepoint {
        /// The repeated character
        character: char,
    },

    /// `<chars count>` does not match the number of glyphs parsed
    GlyphCountDiffers {
        /// Count declared by the document
        declared: u32,
        /// Glyphs actually parsed
        parsed: usize,
    },

    /// The document produced zero glyphs
    EmptyGlyphTable,
}

impl Diagnostic {
    /// Build a [`Diagnostic::StrayGlyphElement`], shortening long elements.
    pub fn stray_glyph(element: &str) -> Self {
        let element = if element.chars().count() > MAX_EXCERPT_LEN {
            let mut short: String = element.chars().take(MAX_EXCERPT_LEN).collect();
            short.push_str("...");
            short
        } else {
            element.to_string()
        };
        Diagnostic::StrayGlyphElement { element }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::StrayGlyphElement { element } => {
                write!(f, "Found <char> tag with missing or invalid 'id' attribute: {}", element)
            },
            Diagnostic::UnrepresentableCodepoint { id } => {
                write!(f, "Skipped <char> with id={}: not a valid Unicode character", id)
            },
            Diagnostic::DuplicateCodepoint { character } => write!(
                f,
                "Character U+{:04X} is defined more than once; the last definition wins",
                *character as u32
            ),
            Diagnostic::GlyphCountDiffers { declared, parsed } => write!(
                f,
                "<chars count=\"{}\"> declares {} characters but {} were parsed",
                declared, declared, parsed
            ),
            Diagnostic::EmptyGlyphTable => {
                write!(f, "No <char../> elements found; the character table is empty")
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stray_glyph_keeps_short_elements() {
        let diag = Diagnostic::stray_glyph(r#"<char x="1"/>"#);
        assert_eq!(
            diag,
            Diagnostic::StrayGlyphElement {
                element: r#"<char x="1"/>"#.to_string()
            }
        );
    }

    #[test]
    fn test_stray_glyph_shortens_long_elements() {
        let long = format!("<char {}/>", "a".repeat(200));
        match Diagnostic::stray_glyph(&long) {
            Diagnostic::StrayGlyphElement { element } => {
                assert!(element.ends_with("..."));
                assert_eq!(element.chars().count(), MAX_EXCERPT_LEN + 3);
            },
            other => panic!("unexpected diagnostic: {:?}", other),
        }
    }

    #[test]
    fn test_display() {
        let diag = Diagnostic::DuplicateCodepoint { character: 'A' };
        assert!(diag.to_string().contains("U+0041"));

        let diag = Diagnostic::GlyphCountDiffers {
            declared: 3,
            parsed: 2,
        };
        assert!(diag.to_string().contains("declares 3"));
        assert!(diag.to_string().contains("2 were parsed"));

        let diag = Diagnostic::UnrepresentableCodepoint {
            id: "-1".to_string(),
        };
        assert!(diag.to_string().contains("id=-1"));
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_value(Diagnostic::EmptyGlyphTable).unwrap();
        assert_eq!(json["kind"], "empty_glyph_table");
    }
}
