//! Error types for the converter.
//!
//! Every variant terminates a conversion. The `Display` text of each variant is the
//! message shown to the user, so callers can surface `err.to_string()` directly.
//! Non-fatal anomalies never travel through this type; see
//! [`Diagnostic`](crate::extractors::Diagnostic).

/// Result type alias for converter operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading, extracting or converting a font description.
#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum Error {
    /// No `<info>` element anywhere in the document
    #[error("Missing <info> element. Make sure the file is in BMFont XML format.")]
    MissingMetadataElement,

    /// `<info>` element present but it carries none of the expected BMFont attributes
    #[error("Could not find a valid <info> element. Is the file format BMFont XML?")]
    UnrecognizedFormat,

    /// `<info>` element recognized, but `size` is missing or not an integer
    #[error("Missing or invalid 'size' attribute in <info> element.")]
    InvalidSizeAttribute,

    /// A glyph with an integer id has missing or non-integer geometry
    #[error(
        "Character data (id={id}) is missing or invalid. Ensure attributes \
         (width, height, x, y, xoffset, yoffset, xadvance) are present and are integers."
    )]
    InvalidGlyphAttributes {
        /// The glyph's `id` attribute as written in the document
        id: String,
    },

    /// `<chars count>` declares glyphs but none could be parsed
    #[error(
        "Found <chars count=\"{declared}\"> indicating characters exist, but couldn't parse \
         any <char .../> elements. Check XML structure."
    )]
    GlyphCountMismatch {
        /// Number of glyphs the document declares
        declared: u32,
    },

    /// `<chars>` carries a `count` attribute that is not a non-negative integer
    #[error("Expected <chars count='...'> element, but it was not found or invalid.")]
    InvalidGlyphCount,

    /// Zero glyphs were parsed and strict extraction was requested
    #[error("No <char .../> elements found; refusing to emit an empty character table.")]
    EmptyGlyphTable,

    /// File extension is not one of the accepted font description extensions
    #[error("Invalid file type '{0}'. Please select .xml, .fnt, or .txt")]
    UnsupportedFileType(String),

    /// Document exceeds the configured size limit
    #[error("Document is too large: {size} bytes (limit: {limit} bytes)")]
    DocumentTooLarge {
        /// Size of the rejected document in bytes
        size: usize,
        /// Configured limit in bytes
        limit: usize,
    },

    /// IO error
    #[error("Error reading file: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 decoding error
    #[error("File is not valid UTF-8 text: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),
}

impl Error {
    /// Whether this error came from the document content rather than from reading it.
    ///
    /// Content errors are the extraction taxonomy; everything else is a boundary failure.
    pub fn is_content_error(&self) -> bool {
        matches!(
            self,
            Error::MissingMetadataElement
                | Error::UnrecognizedFormat
                | Error::InvalidSizeAttribute
                | Error::InvalidGlyphAttributes { .. }
                | Error::GlyphCountMismatch { .. }
                | Error::InvalidGlyphCount
                | Error::EmptyGlyphTable
        )
    }
}
