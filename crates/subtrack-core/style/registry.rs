//! Name-to-style map with a never-failing fallback.

use super::Style;
use ahash::RandomState;
use std::collections::HashMap;

/// Owning map from style name to [`Style`], plus the fallback default.
///
/// Resolution never fails: [`resolve`](Self::resolve) returns the named
/// style when present and the registry's default otherwise, so lookup
/// paths stay total even when a track references styles that were never
/// defined.
///
/// # Example
///
/// ```
/// use subtrack_core::{Style, StyleRegistry};
///
/// let mut registry = StyleRegistry::new();
/// registry.insert("Sign", Style { font_size: 32.0, ..Style::default() });
///
/// assert_eq!(registry.resolve("Sign").font_size, 32.0);
/// // Unknown names resolve to the default style instead of failing.
/// assert_eq!(registry.resolve("Missing").font_size, 18.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleRegistry {
    styles: HashMap<String, Style, RandomState>,
    fallback: Style,
}

impl StyleRegistry {
    /// Creates an empty registry with [`Style::default`] as fallback.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `style` under `name`, returning the style it replaced.
    pub fn insert<S: Into<String>>(&mut self, name: S, style: Style) -> Option<Style> {
        self.styles.insert(name.into(), style)
    }

    /// Looks up a style by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    /// Mutable lookup by exact name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Style> {
        self.styles.get_mut(name)
    }

    /// Removes a style, returning it if it was present.
    pub fn remove(&mut self, name: &str) -> Option<Style> {
        self.styles.remove(name)
    }

    /// Whether `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Resolves `name`, falling back to the default style when the name
    /// is unknown.
    #[must_use]
    pub fn resolve(&self, name: &str) -> &Style {
        self.styles.get(name).unwrap_or(&self.fallback)
    }

    /// The style handed out for unknown names.
    #[must_use]
    pub const fn default_style(&self) -> &Style {
        &self.fallback
    }

    /// Replaces the fallback default style.
    pub fn set_default_style(&mut self, style: Style) {
        self.fallback = style;
    }

    /// Copies every style from `other` into this registry.
    ///
    /// With `append` set, existing entries survive unless `other` defines
    /// the same name; without it the registry is emptied first. The
    /// fallback default is kept either way.
    pub fn merge(&mut self, other: &Self, append: bool) {
        if !append {
            self.styles.clear();
        }
        for (name, style) in &other.styles {
            self.styles.insert(name.clone(), style.clone());
        }
    }

    /// Number of registered styles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Whether no styles are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Drops every registered style, keeping the fallback.
    pub fn clear(&mut self) {
        self.styles.clear();
    }

    /// Iterates over `(name, style)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Style)> {
        self.styles
            .iter()
            .map(|(name, style)| (name.as_str(), style))
    }

    /// Iterates over registered names in arbitrary order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }
}
