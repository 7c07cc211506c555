//! # FNT Oxide
//!
//! Converts BMFont XML font descriptions into Lua table literals that a game engine can
//! load directly.
//!
//! ## Pipeline
//!
//! 1. **Extraction** ([`extractors`]): locate `<info>` and every `<char/>` element in the
//!    document and pull out typed integer fields. Malformed documents fail with a
//!    classified [`Error`]; harmless anomalies come back as [`Diagnostic`]s.
//! 2. **Serialization** ([`converters`]): render the extracted [`BmFont`] as
//!    `{ Size = ..., Characters = { ["A"] = {w, h, Vector2.new(x, y), xo, yo, adv}, ... } }`.
//!
//! Both steps are pure functions over their input; every conversion is independent.
//!
//! ## Quick Start
//!
//! ```
//! use fnt_oxide::document::FontDocument;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let xml = r#"<font>
//!   <info face="Arial" size="32"/>
//!   <chars count="1">
//!     <char id="65" x="0" y="0" width="10" height="12" xoffset="0" yoffset="0" xadvance="11"/>
//!   </chars>
//! </font>"#;
//!
//! let doc = FontDocument::from_text(xml);
//! let conversion = doc.to_lua(&Default::default(), &Default::default())?;
//! assert!(conversion.literal.contains(r#"["A"] = {10, 12, Vector2.new(0, 0), 0, 0, 11}"#));
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either the Apache License, Version 2.0 or the MIT license, at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;
/// Extraction options
pub mod parser_config;

// Extracted data model
pub mod font;

// Font data extraction
pub mod extractors;

// Output converters
pub mod converters;

// Document boundary and pipeline
pub mod document;

// Re-exports
pub use config::LiteralOptions;
pub use document::{convert, Conversion, FontDocument, SourceKind};
pub use error::{Error, Result};
pub use extractors::{Diagnostic, Extraction};
pub use font::{BmFont, FontMetadata, GlyphRecord, GlyphTable};
pub use parser_config::ExtractOptions;

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        // VERSION is populated from CARGO_PKG_VERSION at compile time
        assert!(VERSION.starts_with("0."));
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "fnt_oxide");
    }
}
