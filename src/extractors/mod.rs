//! Font data extraction from BMFont description documents.
//!
//! Turns raw document text into a typed [`BmFont`](crate::font::BmFont) plus a list of
//! non-fatal [`Diagnostic`]s.

pub mod attributes;
pub mod bmfont;
pub mod diagnostics;
pub mod whitespace;

pub use attributes::Attributes;
pub use bmfont::{extract, BmFontExtractor, Extraction};
pub use diagnostics::Diagnostic;
pub use whitespace::normalize_whitespace;
