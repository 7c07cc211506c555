//! Configuration for Lua literal output.

/// Lua literal output configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralOptions {
    /// One level of indentation.
    pub indent: String,

    /// Constructor used for the glyph's atlas position, e.g. `Vector2.new`.
    pub point_constructor: String,
}

impl Default for LiteralOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl LiteralOptions {
    /// Create new configuration with defaults (tab indentation, `Vector2.new`).
    pub fn new() -> Self {
        Self {
            indent: "\t".to_string(),
            point_constructor: "Vector2.new".to_string(),
        }
    }

    /// Indent with `width` spaces instead of tabs.
    pub fn with_spaces(mut self, width: usize) -> Self {
        self.indent = " ".repeat(width);
        self
    }

    /// Use a custom indentation string.
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Use a custom point constructor.
    pub fn with_point_constructor(mut self, constructor: impl Into<String>) -> Self {
        self.point_constructor = constructor.into();
        self
    }
}
