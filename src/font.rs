//! Extracted font data.
//!
//! These types are built fresh by every extraction and hold only what the Lua literal
//! needs: the nominal font size and per-glyph atlas metrics.

use indexmap::IndexMap;
use serde::Serialize;

/// Font-wide metadata taken from the `<info>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontMetadata {
    /// Nominal font size (`<info size>`)
    pub size: i32,
}

/// Atlas metrics for a single glyph (`<char>` element).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GlyphRecord {
    /// Character this glyph draws (`<char id>` as a Unicode scalar value)
    pub character: char,
    /// Width of the glyph in the atlas
    pub width: i32,
    /// Height of the glyph in the atlas
    pub height: i32,
    /// Left edge of the glyph in the atlas
    pub x: i32,
    /// Top edge of the glyph in the atlas
    pub y: i32,
    /// Horizontal offset applied when drawing
    pub x_offset: i32,
    /// Vertical offset applied when drawing
    pub y_offset: i32,
    /// How far the pen advances after drawing
    pub x_advance: i32,
}

impl GlyphRecord {
    /// Codepoint of the glyph's character.
    pub fn codepoint(&self) -> u32 {
        self.character as u32
    }
}

/// Glyph records in document order.
///
/// Duplicated codepoints are kept as-is; the emitted literal is a key/value table, so the
/// last record for a codepoint is the one a consumer ends up with. [`GlyphTable::resolve`]
/// gives that view directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GlyphTable {
    records: Vec<GlyphRecord>,
}

impl GlyphTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, keeping document order.
    pub fn push(&mut self, record: GlyphRecord) {
        self.records.push(record);
    }

    /// Number of records, duplicates included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, GlyphRecord> {
        self.records.iter()
    }

    /// Records as a slice.
    pub fn as_slice(&self) -> &[GlyphRecord] {
        &self.records
    }

    /// Key/value view: each character maps to its last record, positioned where the
    /// character first appeared.
    pub fn resolve(&self) -> IndexMap<char, GlyphRecord> {
        let mut map = IndexMap::with_capacity(self.records.len());
        for record in &self.records {
            map.insert(record.character, *record);
        }
        map
    }

    /// Characters declared more than once, in order of their first repeat.
    pub fn duplicates(&self) -> Vec<char> {
        let mut seen = IndexMap::new();
        let mut repeated = Vec::new();
        for record in &self.records {
            let count = seen.entry(record.character).or_insert(0usize);
            *count += 1;
            if *count == 2 {
                repeated.push(record.character);
            }
        }
        repeated
    }
}

impl FromIterator<GlyphRecord> for GlyphTable {
    fn from_iter<I: IntoIterator<Item = GlyphRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a GlyphTable {
    type Item = &'a GlyphRecord;
    type IntoIter = std::slice::Iter<'a, GlyphRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// A fully extracted font: metadata plus glyph table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BmFont {
    /// Font-wide metadata
    pub metadata: FontMetadata,
    /// Glyphs in document order
    pub glyphs: GlyphTable,
}
