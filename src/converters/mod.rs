//! Output converters for extracted fonts.
//!
//! - **Lua**: a table literal keyed by character, for engines scripted in Lua/Luau
//!
//! # Examples
//!
//! ```
//! use fnt_oxide::converters::LuaConverter;
//! use fnt_oxide::extractors::extract;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let xml = r#"<info face="Arial" size="32"/><chars count="1">
//!   <char id="65" x="0" y="0" width="10" height="12" xoffset="0" yoffset="0" xadvance="11"/>
//! </chars>"#;
//!
//! let extraction = extract(xml)?;
//! let literal = LuaConverter::new().convert(&extraction.font);
//! assert!(literal.contains(r#"["A"] = {10, 12, Vector2.new(0, 0), 0, 0, 11}"#));
//! # Ok(())
//! # }
//! ```

pub mod lua;

pub use lua::{escape_key, serialize, LuaConverter};
