//! Font description documents.
//!
//! [`FontDocument`] is the boundary between the outside world and the pure
//! extraction/serialization core: it reads files, checks extensions, sniffs content
//! and runs the conversion pipeline.

use crate::config::LiteralOptions;
use crate::converters::LuaConverter;
use crate::error::{Error, Result};
use crate::extractors::{BmFontExtractor, Diagnostic, Extraction};
use crate::font::BmFont;
use crate::parser_config::ExtractOptions;
use lazy_static::lazy_static;
use regex::Regex;
use std::fs;
use std::path::Path;

/// File extensions accepted by [`FontDocument::open`] (compared case-insensitively).
pub const ACCEPTED_EXTENSIONS: &[&str] = &["xml", "fnt", "txt"];

lazy_static! {
    /// Regex for a BMFont plain-text `info` line
    static ref RE_TEXT_INFO_LINE: Regex = Regex::new(r"(?m)^\s*info\s+\w+=").unwrap();
}

/// What a document's content looks like, regardless of its file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Markup with an `<info` tag: BMFont XML
    Xml,
    /// BMFont plain-text flavour (`info face=... size=...` lines); not convertible
    Text,
    /// Neither
    Unknown,
}

/// A successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// The Lua table literal
    pub literal: String,
    /// The font the literal was produced from
    pub font: BmFont,
    /// Non-fatal anomalies found during extraction
    pub diagnostics: Vec<Diagnostic>,
}

/// A font description document held in memory.
#[derive(Debug, Clone)]
pub struct FontDocument {
    text: String,
}

impl FontDocument {
    /// Open a font description file.
    ///
    /// The extension must be `.xml`, `.fnt` or `.txt`; the content must be UTF-8
    /// (a leading byte order mark is dropped).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use fnt_oxide::document::FontDocument;
    ///
    /// let doc = FontDocument::open("arial.fnt")?;
    /// let conversion = doc.to_lua(&Default::default(), &Default::default())?;
    /// println!("{}", conversion.literal);
    /// # Ok::<(), fnt_oxide::error::Error>(())
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        check_extension(path)?;

        let bytes = fs::read(path)?;
        log::debug!("Read {} bytes from {}", bytes.len(), path.display());
        let text = String::from_utf8(bytes)?;

        Ok(Self::from_text(text))
    }

    /// Wrap text that is already in memory.
    pub fn from_text(text: impl Into<String>) -> Self {
        let mut text = text.into();
        if text.starts_with('\u{FEFF}') {
            text.replace_range(..'\u{FEFF}'.len_utf8(), "");
        }
        Self { text }
    }

    /// The document text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Size of the document text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the document is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Sniff the content.
    pub fn source_kind(&self) -> SourceKind {
        if self.text.contains("<info") {
            SourceKind::Xml
        } else if RE_TEXT_INFO_LINE.is_match(&self.text) {
            SourceKind::Text
        } else {
            SourceKind::Unknown
        }
    }

    /// Extract the font.
    pub fn extract(&self, options: &ExtractOptions) -> Result<Extraction> {
        let result = BmFontExtractor::with_options(*options).extract(&self.text);
        if let Err(e) = &result {
            if e.is_content_error() && self.source_kind() == SourceKind::Text {
                log::warn!(
                    "Document looks like a plain-text BMFont file; only the XML flavour is supported"
                );
            }
        }
        result
    }

    /// Extract the font and render it as a Lua table literal.
    pub fn to_lua(
        &self,
        extract_options: &ExtractOptions,
        literal_options: &LiteralOptions,
    ) -> Result<Conversion> {
        let Extraction { font, diagnostics } = self.extract(extract_options)?;
        let literal = LuaConverter::with_options(literal_options.clone()).convert(&font);
        log::info!(
            "Converted {} glyphs ({} diagnostics)",
            font.glyphs.len(),
            diagnostics.len()
        );

        Ok(Conversion {
            literal,
            font,
            diagnostics,
        })
    }
}

/// Convert document text with default options.
///
/// # Example
///
/// ```
/// let xml = r#"<font><info size="32" face="Arial"/><chars count="1"><char id="65" x="0" y="0" width="10" height="12" xoffset="0" yoffset="0" xadvance="11"/></chars></font>"#;
/// let conversion = fnt_oxide::convert(xml)?;
/// assert!(conversion.literal.contains("Size = 32"));
/// # Ok::<(), fnt_oxide::error::Error>(())
/// ```
pub fn convert(document: &str) -> Result<Conversion> {
    FontDocument::from_text(document).to_lua(&ExtractOptions::default(), &LiteralOptions::default())
}

fn check_extension(path: &Path) -> Result<()> {
    let accepted = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        });

    if accepted {
        Ok(())
    } else {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Err(Error::UnsupportedFileType(name))
    }
}
