//! Lua table literal output.
//!
//! Produces a literal of the shape
//!
//! ```text
//! {
//!     Size = 32,
//!     Characters = {
//!         ["A"] = {10, 12, Vector2.new(0, 0), 0, 0, 11},
//!         ["B"] = {11, 12, Vector2.new(10, 0), 0, 0, 12}
//!     }
//! }
//! ```
//!
//! Each glyph value is `{width, height, <point>(x, y), xoffset, yoffset, xadvance}`,
//! the layout engine glyph-metric records use. Glyphs are written in table order
//! with no trailing comma.

use crate::config::LiteralOptions;
use crate::font::{BmFont, FontMetadata, GlyphRecord, GlyphTable};

/// Converts extracted fonts into Lua table literals.
///
/// Formatting cannot fail: every record reaching the converter has already been
/// validated by the extractor.
///
/// # Examples
///
/// ```
/// use fnt_oxide::converters::LuaConverter;
/// use fnt_oxide::font::{BmFont, FontMetadata, GlyphTable};
///
/// let font = BmFont {
///     metadata: FontMetadata { size: 16 },
///     glyphs: GlyphTable::new(),
/// };
/// let literal = LuaConverter::new().convert(&font);
/// assert!(literal.contains("Size = 16,"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LuaConverter {
    options: LiteralOptions,
}

impl LuaConverter {
    /// Create a converter with default output options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with custom output options.
    pub fn with_options(options: LiteralOptions) -> Self {
        Self { options }
    }

    /// Convert a whole font.
    pub fn convert(&self, font: &BmFont) -> String {
        self.convert_parts(&font.metadata, &font.glyphs)
    }

    /// Convert metadata and glyphs given separately.
    pub fn convert_parts(&self, metadata: &FontMetadata, glyphs: &GlyphTable) -> String {
        let indent = &self.options.indent;

        let mut output = String::new();
        output.push_str("{\n");
        output.push_str(&format!("{}Size = {},\n", indent, metadata.size));
        output.push_str(&format!("{}Characters = {{\n", indent));

        let entries: Vec<String> = glyphs
            .iter()
            .map(|glyph| format!("{}{}{}", indent, indent, self.glyph_entry(glyph)))
            .collect();
        if !entries.is_empty() {
            output.push_str(&entries.join(",\n"));
            output.push('\n');
        }

        output.push_str(&format!("{}}}\n", indent));
        output.push('}');
        output
    }

    /// A single `["key"] = {...}` entry, without indentation.
    fn glyph_entry(&self, glyph: &GlyphRecord) -> String {
        format!(
            "[\"{}\"] = {{{}, {}, {}({}, {}), {}, {}, {}}}",
            escape_key(glyph.character),
            glyph.width,
            glyph.height,
            self.options.point_constructor,
            glyph.x,
            glyph.y,
            glyph.x_offset,
            glyph.y_offset,
            glyph.x_advance
        )
    }
}

/// Serialize metadata and glyphs with default options.
pub fn serialize(metadata: &FontMetadata, glyphs: &GlyphTable) -> String {
    LuaConverter::new().convert_parts(metadata, glyphs)
}

/// Render a character as the contents of a double-quoted Lua string.
///
/// `\` and `"` get a backslash prefix. Control characters, which cannot appear raw
/// inside a quoted string, are written as three-digit decimal escapes.
///
/// # Examples
///
/// ```
/// use fnt_oxide::converters::lua::escape_key;
///
/// assert_eq!(escape_key('A'), "A");
/// assert_eq!(escape_key('"'), "\\\"");
/// assert_eq!(escape_key('\\'), "\\\\");
/// assert_eq!(escape_key('\n'), "\\010");
/// ```
pub fn escape_key(character: char) -> String {
    match character {
        '\\' => "\\\\".to_string(),
        '"' => "\\\"".to_string(),
        c if c.is_ascii_control() => format!("\\{:03}", c as u32),
        c => c.to_string(),
    }
}
