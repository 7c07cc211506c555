/// Extraction options for controlling lenient/strict handling of degenerate documents.
///
/// The glyph-level tolerance policy is fixed: a `<char>` with a bad id is skipped, a
/// `<char>` with a good id but bad geometry fails the whole document. These options only
/// cover the choices that are genuinely a matter of taste.
///
/// # Example
///
/// ```
/// use fnt_oxide::parser_config::ExtractOptions;
///
/// // Lenient mode - a font with zero glyphs is accepted with a diagnostic (default)
/// let lenient = ExtractOptions::lenient();
///
/// // Strict mode - a font with zero glyphs is an error
/// let strict = ExtractOptions::strict();
///
/// // Custom configuration
/// let custom = ExtractOptions {
///     allow_empty_glyph_table: true,
///     max_document_size: 1024 * 1024,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Accept a document that yields zero glyphs (true) or reject it (false)
    ///
    /// A declared positive `<chars count>` with zero parsed glyphs is always an error;
    /// this only governs documents that never declared any glyphs.
    pub allow_empty_glyph_table: bool,

    /// Maximum document size in bytes
    ///
    /// Default: 64 MB. Set to 0 to disable check.
    pub max_document_size: usize,
}

impl Default for ExtractOptions {
    /// Default configuration: lenient mode
    fn default() -> Self {
        Self::lenient()
    }
}

impl ExtractOptions {
    /// Strict mode: an empty glyph table is an error
    pub fn strict() -> Self {
        Self {
            allow_empty_glyph_table: false,
            max_document_size: 64 * 1024 * 1024, // 64 MB
        }
    }

    /// Lenient mode: an empty glyph table is reported as a diagnostic only
    pub fn lenient() -> Self {
        Self {
            allow_empty_glyph_table: true,
            max_document_size: 64 * 1024 * 1024, // 64 MB
        }
    }

    /// Check whether a document of `size` bytes is within the configured limit
    pub(crate) fn accepts_size(&self, size: usize) -> bool {
        self.max_document_size == 0 || size <= self.max_document_size
    }
}
