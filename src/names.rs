//! Name-list formatting and the language dictionary lookup.
//!
//! `format_name_list` turns a raw comma-separated path segment into a
//! natural-language list ("a, b and c"). The [`NameSource`] trait is the seam
//! for the opaque language→greeting dictionary; the dispatcher queries it per
//! request with the `language` query parameter and hands the result to the
//! template context.

use std::collections::BTreeMap;
use std::path::Path;

/// Format a raw comma-separated value as a natural-language list.
///
/// A value without a comma is returned unchanged. Otherwise all elements but
/// the last are joined with `", "` and the last is attached with `" and "`
/// (no Oxford comma): `"a,b,c"` becomes `"a, b and c"`.
#[must_use]
pub fn format_name_list(raw: &str) -> String {
    if !raw.contains(',') {
        return raw.to_string();
    }
    let parts: Vec<&str> = raw.split(',').collect();
    let (last, head) = match parts.split_last() {
        Some(split) => split,
        None => return raw.to_string(),
    };
    format!("{} and {}", head.join(", "), last)
}

/// Opaque key→string lookup for greeting words.
///
/// A specific key yields that entry alone (or nothing for an unknown/empty
/// key); no key yields every value. Implementations are constructed once at
/// startup and are read-only afterwards.
pub trait NameSource: Send + Sync {
    fn lookup(&self, key: Option<&str>) -> Vec<String>;
}

/// Dictionary backed by a JSON object of `language → greeting` entries.
///
/// A `BTreeMap` keeps the all-values enumeration order stable.
pub struct LanguageFile {
    entries: BTreeMap<String, String>,
}

impl LanguageFile {
    pub fn load<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let entries: BTreeMap<String, String> = serde_json::from_str(&raw)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(Self { entries })
    }

    #[must_use]
    pub fn from_entries(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }
}

impl NameSource for LanguageFile {
    fn lookup(&self, key: Option<&str>) -> Vec<String> {
        match key {
            Some(k) => self.entries.get(k).cloned().into_iter().collect(),
            None => self.entries.values().cloned().collect(),
        }
    }
}

/// Built-in dictionary used when no language file is configured.
#[must_use]
pub fn builtin_greetings() -> LanguageFile {
    let entries = [
        ("de", "Umarmung"),
        ("en", "hug"),
        ("es", "abrazo"),
        ("fr", "câlin"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    LanguageFile::from_entries(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_name_unchanged() {
        assert_eq!(format_name_list("a"), "a");
    }

    #[test]
    fn test_two_names() {
        assert_eq!(format_name_list("a,b"), "a and b");
    }

    #[test]
    fn test_three_names() {
        assert_eq!(format_name_list("a,b,c"), "a, b and c");
    }

    #[test]
    fn test_lookup_specific_key() {
        let src = builtin_greetings();
        assert_eq!(src.lookup(Some("en")), vec!["hug".to_string()]);
    }

    #[test]
    fn test_lookup_unknown_key_is_empty() {
        let src = builtin_greetings();
        assert!(src.lookup(Some("tlh")).is_empty());
        assert!(src.lookup(Some("")).is_empty());
    }

    #[test]
    fn test_lookup_all_values_in_key_order() {
        let src = builtin_greetings();
        let all = src.lookup(None);
        assert_eq!(all, vec!["Umarmung", "hug", "abrazo", "câlin"]);
    }
}
