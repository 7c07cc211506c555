//! Attribute scanning for flat markup tags.
//!
//! BMFont XML is flat: every value we need lives in an attribute of a single tag.
//! Instead of building a DOM we scan the text between `<tag` and `>` for
//! `name = "value"` pairs and look values up by name.

use lazy_static::lazy_static;
use regex::Regex;
use std::str::FromStr;

lazy_static! {
    /// Regex for `name="value"` or `name='value'` pairs
    static ref RE_ATTRIBUTE: Regex =
        Regex::new(r#"([A-Za-z_][\w.:-]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap();

    /// Regex for a base-10 integer filling the whole value
    static ref RE_INTEGER: Regex = Regex::new(r"^-?\d+$").unwrap();
}

/// Attribute list of a single tag, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes<'a> {
    entries: Vec<(&'a str, &'a str)>,
}

impl<'a> Attributes<'a> {
    /// Scan the attribute section of a tag (the text after the tag name).
    ///
    /// # Examples
    ///
    /// ```
    /// use fnt_oxide::extractors::attributes::Attributes;
    ///
    /// let attrs = Attributes::parse(r#" id="65" x = "3" face='Arial'"#);
    /// assert_eq!(attrs.integer::<i32>("id"), Some(65));
    /// assert_eq!(attrs.integer::<i32>("x"), Some(3));
    /// assert_eq!(attrs.get("face"), Some("Arial"));
    /// ```
    pub fn parse(source: &'a str) -> Self {
        let entries = RE_ATTRIBUTE
            .captures_iter(source)
            .filter_map(|caps| {
                let name = caps.get(1)?.as_str();
                let value = caps.get(2).or_else(|| caps.get(3))?.as_str();
                Some((name, value))
            })
            .collect();
        Self { entries }
    }

    /// Raw value of the first attribute called `name`.
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }

    /// Whether an attribute called `name` is present, whatever its value.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| *key == name)
    }

    /// Integer value of the first attribute called `name`.
    ///
    /// Returns `None` when the attribute is absent, when its value is not entirely a
    /// base-10 integer (optional leading `-`), or when it does not fit `T`.
    pub fn integer<T: FromStr>(&self, name: &str) -> Option<T> {
        self.integer_text(name)?.parse().ok()
    }

    /// Raw value of the first attribute called `name`, if it is a base-10 integer.
    ///
    /// Unlike [`Attributes::integer`] this never fails on range, so digit strings too
    /// long for any integer type are still recognized as integers.
    pub fn integer_text(&self, name: &str) -> Option<&'a str> {
        self.get(name).filter(|value| RE_INTEGER.is_match(value))
    }

    /// Number of attributes scanned.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no attributes were found.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
