//! BMFont XML extraction.
//!
//! The document is treated as flat text: whitespace is collapsed, then the `<info>`,
//! `<chars>` and `<char/>` tags are located with patterns and their attributes scanned.
//! No DOM is built, so nesting, namespaces and the rest of the BMFont schema (pages,
//! kerning, common) are ignored.
//!
//! ## Tolerance policy
//!
//! - `<char/>` without a usable `id`: skipped, reported as a [`Diagnostic`]. These are
//!   assumed to be stray or commented-out tags.
//! - `<char/>` with an integer `id` but a missing or non-integer geometry attribute: the
//!   whole extraction fails with [`Error::InvalidGlyphAttributes`]. A glyph that knows
//!   which character it is but not where it lives means the document is corrupt. This
//!   holds for every integer id, including ones out of `u32` range.
//! - `<char/>` with complete geometry whose `id` is not a Unicode scalar value
//!   (negative, surrogate, above U+10FFFF): skipped, reported as a [`Diagnostic`].

use super::attributes::Attributes;
use super::diagnostics::Diagnostic;
use super::whitespace::normalize_whitespace;
use crate::error::{Error, Result};
use crate::font::{BmFont, FontMetadata, GlyphRecord, GlyphTable};
use crate::parser_config::ExtractOptions;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for the `<info ...>` metadata element
    static ref RE_INFO: Regex = Regex::new(r"<info\b([^>]*)>").unwrap();

    /// Regex for self-closing `<char .../>` glyph elements
    static ref RE_CHAR: Regex = Regex::new(r"<char\s([^>]*)/>").unwrap();

    /// Regex for the `<chars ...>` glyph-count element
    static ref RE_CHARS: Regex = Regex::new(r"<chars\b([^>]*)>").unwrap();
}

/// `<info>` attributes (besides `size`) that identify a BMFont document.
const METADATA_ATTRIBUTES: &[&str] = &["face", "charset", "padding", "spacing"];

/// Result of a successful extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// The extracted font
    pub font: BmFont,
    /// Non-fatal anomalies, in the order they were found
    pub diagnostics: Vec<Diagnostic>,
}

/// What the `<chars>` element says about the glyph count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeclaredCount {
    /// No `<chars>` element, or one without a `count` attribute
    Absent,
    /// `count` present but not a non-negative integer
    Malformed,
    /// A well-formed count
    Count(u32),
}

/// Extracts font metadata and glyph metrics from BMFont XML text.
///
/// # Example
///
/// ```
/// use fnt_oxide::extractors::BmFontExtractor;
///
/// let xml = r#"<font>
///   <info face="Arial" size="32"/>
///   <chars count="1">
///     <char id="65" x="0" y="0" width="10" height="12" xoffset="0" yoffset="0" xadvance="11"/>
///   </chars>
/// </font>"#;
///
/// let extraction = BmFontExtractor::new().extract(xml)?;
/// assert_eq!(extraction.font.metadata.size, 32);
/// assert_eq!(extraction.font.glyphs.len(), 1);
/// assert!(extraction.diagnostics.is_empty());
/// # Ok::<(), fnt_oxide::error::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct BmFontExtractor {
    options: ExtractOptions,
}

impl BmFontExtractor {
    /// Create an extractor with default (lenient) options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with custom options.
    pub fn with_options(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Options in use.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract the font from a document.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The document exceeds `max_document_size`
    /// - There is no `<info>` element, or it has no valid `size`
    /// - A glyph with a valid id has missing or invalid geometry
    /// - Glyphs are declared by `<chars count>` but none could be parsed
    /// - No glyphs were found and the options forbid an empty table
    pub fn extract(&self, document: &str) -> Result<Extraction> {
        if !self.options.accepts_size(document.len()) {
            return Err(Error::DocumentTooLarge {
                size: document.len(),
                limit: self.options.max_document_size,
            });
        }

        let text = normalize_whitespace(document);
        let metadata = parse_metadata(&text)?;
        log::debug!("Font size: {}", metadata.size);

        let mut diagnostics = Vec::new();
        let glyphs = parse_glyphs(&text, &mut diagnostics)?;
        log::debug!("Parsed {} glyphs", glyphs.len());

        self.check_glyph_count(&text, &glyphs, &mut diagnostics)?;

        for character in glyphs.duplicates() {
            report(&mut diagnostics, Diagnostic::DuplicateCodepoint { character });
        }

        Ok(Extraction {
            font: BmFont { metadata, glyphs },
            diagnostics,
        })
    }

    /// Reconcile the parsed glyphs with the `<chars count>` declaration.
    fn check_glyph_count(
        &self,
        text: &str,
        glyphs: &GlyphTable,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<()> {
        let declared = declared_glyph_count(text);

        if !glyphs.is_empty() {
            match declared {
                DeclaredCount::Count(declared) if declared as usize != glyphs.len() => {
                    report(
                        diagnostics,
                        Diagnostic::GlyphCountDiffers {
                            declared,
                            parsed: glyphs.len(),
                        },
                    );
                },
                DeclaredCount::Malformed => {
                    log::debug!("Ignoring malformed <chars count> since glyphs were parsed");
                },
                _ => {},
            }
            return Ok(());
        }

        match declared {
            DeclaredCount::Count(declared) if declared > 0 => {
                Err(Error::GlyphCountMismatch { declared })
            },
            DeclaredCount::Malformed => Err(Error::InvalidGlyphCount),
            _ if !self.options.allow_empty_glyph_table => Err(Error::EmptyGlyphTable),
            _ => {
                report(diagnostics, Diagnostic::EmptyGlyphTable);
                Ok(())
            },
        }
    }
}

/// Extract a font with default options.
///
/// Shorthand for `BmFontExtractor::new().extract(document)`.
pub fn extract(document: &str) -> Result<Extraction> {
    BmFontExtractor::new().extract(document)
}

fn report(diagnostics: &mut Vec<Diagnostic>, diagnostic: Diagnostic) {
    log::warn!("{}", diagnostic);
    diagnostics.push(diagnostic);
}

/// Read the font size from the first `<info>` element.
fn parse_metadata(text: &str) -> Result<FontMetadata> {
    let caps = RE_INFO
        .captures(text)
        .ok_or(Error::MissingMetadataElement)?;
    let attrs = Attributes::parse(caps.get(1).map_or("", |m| m.as_str()));

    match attrs.integer::<i32>("size") {
        Some(size) => Ok(FontMetadata { size }),
        None if METADATA_ATTRIBUTES.iter().any(|name| attrs.contains(name)) => {
            Err(Error::InvalidSizeAttribute)
        },
        None => Err(Error::UnrecognizedFormat),
    }
}

/// Collect every `<char/>` element in document order.
fn parse_glyphs(text: &str, diagnostics: &mut Vec<Diagnostic>) -> Result<GlyphTable> {
    let mut glyphs = GlyphTable::new();

    for caps in RE_CHAR.captures_iter(text) {
        let element = caps.get(0).map_or("", |m| m.as_str());
        let attrs = Attributes::parse(caps.get(1).map_or("", |m| m.as_str()));

        let id = match attrs.integer_text("id") {
            Some(id) => id,
            None => {
                report(diagnostics, Diagnostic::stray_glyph(element));
                continue;
            },
        };

        let field = |name: &str| {
            attrs
                .integer::<i32>(name)
                .ok_or_else(|| Error::InvalidGlyphAttributes { id: id.to_string() })
        };
        let width = field("width")?;
        let height = field("height")?;
        let x = field("x")?;
        let y = field("y")?;
        let x_offset = field("xoffset")?;
        let y_offset = field("yoffset")?;
        let x_advance = field("xadvance")?;

        let character = match id.parse::<u32>().ok().and_then(char::from_u32) {
            Some(c) => c,
            None => {
                report(
                    diagnostics,
                    Diagnostic::UnrepresentableCodepoint { id: id.to_string() },
                );
                continue;
            },
        };

        glyphs.push(GlyphRecord {
            character,
            width,
            height,
            x,
            y,
            x_offset,
            y_offset,
            x_advance,
        });
    }

    Ok(glyphs)
}

fn declared_glyph_count(text: &str) -> DeclaredCount {
    let Some(caps) = RE_CHARS.captures(text) else {
        return DeclaredCount::Absent;
    };
    let attrs = Attributes::parse(caps.get(1).map_or("", |m| m.as_str()));

    if !attrs.contains("count") {
        return DeclaredCount::Absent;
    }
    match attrs.integer::<u32>("count") {
        Some(count) => DeclaredCount::Count(count),
        None => DeclaredCount::Malformed,
    }
}
