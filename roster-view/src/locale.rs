//! Localization lookup.
//!
//! Text lookup is an injected capability: the engine asks an optional
//! [`Localizer`] for candidate keys in priority order and degrades to the
//! caller's literal fallback when no localization system is wired in. String
//! content itself lives with the embedder; only the lookup mechanics are
//! implemented here.

use std::collections::HashMap;

/// A key-based text lookup capability.
///
/// Implementations resolve a translation key to localized text, or `None`
/// when the key is unknown. Interpolation is handled by [`translate`], so
/// implementations only deal in raw template strings.
pub trait Localizer {
    /// Resolves a single key to its template text.
    fn lookup(&self, key: &str) -> Option<String>;
}

/// A `HashMap`-backed [`Localizer`] for embedders and tests.
#[derive(Debug, Clone, Default)]
pub struct MapLocalizer {
    entries: HashMap<String, String>,
}

impl MapLocalizer {
    /// Creates an empty localizer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a key/template pair.
    pub fn with(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.entries.insert(key.into(), text.into());
        self
    }
}

impl Localizer for MapLocalizer {
    fn lookup(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

/// Looks up the first candidate key that resolves, falling back to `fallback`
/// when the localizer is absent or no key matches, then interpolates
/// `%{name}` placeholders from `args`.
///
/// Lookup failure is never an error: a missing localization system degrades
/// to the literal fallback text.
pub fn translate(
    localizer: Option<&dyn Localizer>,
    keys: &[&str],
    fallback: &str,
    args: &[(&str, String)],
) -> String {
    let template = localizer
        .and_then(|l| keys.iter().find_map(|k| l.lookup(k)))
        .unwrap_or_else(|| fallback.to_string());
    interpolate(&template, args)
}

/// Replaces `%{name}` placeholders with their argument values.
///
/// Unknown placeholders are left verbatim so a half-filled template stays
/// visible rather than silently losing text.
fn interpolate(template: &str, args: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (name, value) in args {
        out = out.replace(&format!("%{{{}}}", name), value);
    }
    out
}
