//! Gradient style table
//!
//! Maps a category's `gradient` key to a CSS `background` value. The table
//! starts from a built-in palette, can be extended or overridden from the
//! `[gradients]` config section, and falls back to a solid colour for keys
//! it does not know.

use std::collections::BTreeMap;

/// Solid colour used when a gradient key has no entry.
pub const DEFAULT_FALLBACK_BACKGROUND: &str = "#1f2937";

const BUILTIN_GRADIENTS: &[(&str, &str)] = &[
    (
        "sunset",
        "linear-gradient(135deg, #f97316 0%, #db2777 55%, #7c3aed 100%)",
    ),
    (
        "ocean",
        "linear-gradient(135deg, #0ea5e9 0%, #2563eb 50%, #1e1b4b 100%)",
    ),
    (
        "forest",
        "linear-gradient(135deg, #22c55e 0%, #15803d 50%, #052e16 100%)",
    ),
    (
        "neon",
        "linear-gradient(135deg, #a3e635 0%, #06b6d4 50%, #8b5cf6 100%)",
    ),
    (
        "aurora",
        "linear-gradient(135deg, #34d399 0%, #3b82f6 50%, #c026d3 100%)",
    ),
    (
        "fire",
        "linear-gradient(135deg, #facc15 0%, #f97316 45%, #b91c1c 100%)",
    ),
    (
        "candy",
        "linear-gradient(135deg, #f9a8d4 0%, #e879f9 50%, #818cf8 100%)",
    ),
    (
        "midnight",
        "linear-gradient(135deg, #1e293b 0%, #312e81 50%, #020617 100%)",
    ),
];

/// Gradient name → CSS background value, plus a fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientTable {
    entries: BTreeMap<String, String>,
    fallback: String,
}

impl Default for GradientTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl GradientTable {
    /// Table holding only the built-in palette.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_GRADIENTS
                .iter()
                .map(|(name, css)| (name.to_string(), css.to_string()))
                .collect(),
            fallback: DEFAULT_FALLBACK_BACKGROUND.to_string(),
        }
    }

    /// Empty table; every lookup resolves to the fallback.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
            fallback: DEFAULT_FALLBACK_BACKGROUND.to_string(),
        }
    }

    /// Add or replace entries. Later entries win.
    pub fn with_overrides<I, K, V>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, css) in overrides {
            self.entries.insert(name.into(), css.into());
        }
        self
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Background for a gradient key, falling back to the solid colour.
    pub fn resolve(&self, name: &str) -> &str {
        match self.get(name) {
            Some(css) => css,
            None => {
                let known: Vec<&str> = self.names().collect();
                tracing::warn!(
                    gradient = %name,
                    fallback = %self.fallback,
                    known = %known.join(", "),
                    "Unknown gradient, using fallback"
                );
                &self.fallback
            }
        }
    }

    /// Known gradient names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
