//! An in-memory document root.

use std::collections::{BTreeMap, BTreeSet};

use super::PresentationSurface;
use crate::theme::{PresentationBinding, ResolvedMode};

/// Model of a document's root element: a class list and inline custom
/// properties.
///
/// Applying a binding swaps the `light`/`dark` class and overwrites the toast
/// tokens. Other classes and properties are left alone.
///
/// # Example
///
/// ```rust
/// use lumen::{Palettes, PresentationBinding, PresentationSurface, ResolvedMode, RootStyle};
///
/// let mut root = RootStyle::with_classes(["antialiased"]);
/// root.apply(&PresentationBinding::for_mode(ResolvedMode::Dark, &Palettes::default()));
///
/// assert!(root.has_class("antialiased"));
/// assert!(root.has_class("dark"));
/// assert_eq!(root.property("--toast-color"), Some("#f9fafb"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootStyle {
    classes: BTreeSet<String>,
    properties: BTreeMap<String, String>,
    applies: usize,
}

impl RootStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a root carrying some unrelated classes already.
    pub fn with_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// The display mode currently flagged on the root, if any.
    pub fn mode(&self) -> Option<ResolvedMode> {
        if self.has_class(ResolvedMode::Dark.class_name()) {
            Some(ResolvedMode::Dark)
        } else if self.has_class(ResolvedMode::Light.class_name()) {
            Some(ResolvedMode::Light)
        } else {
            None
        }
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// How many bindings have been applied. Useful to observe redundant writes.
    pub fn apply_count(&self) -> usize {
        self.applies
    }

    /// Renders the root's state as a CSS rule.
    pub fn to_css(&self) -> String {
        let selector: String = self.classes.iter().map(|c| format!(".{c}")).collect();
        let mut css = format!(":root{selector} {{\n");
        for (name, value) in &self.properties {
            css.push_str(&format!("  {name}: {value};\n"));
        }
        css.push_str("}\n");
        css
    }
}

impl PresentationSurface for RootStyle {
    fn apply(&mut self, binding: &PresentationBinding) {
        for mode in [ResolvedMode::Light, ResolvedMode::Dark] {
            self.classes.remove(mode.class_name());
        }
        self.classes.insert(binding.class_name().to_string());
        for (name, value) in binding.tokens() {
            self.properties.insert(name.to_string(), value.to_string());
        }
        self.applies += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Palettes;

    fn binding(mode: ResolvedMode) -> PresentationBinding {
        PresentationBinding::for_mode(mode, &Palettes::default())
    }

    #[test]
    fn test_new_root_has_no_mode() {
        let root = RootStyle::new();
        assert_eq!(root.mode(), None);
        assert_eq!(root.apply_count(), 0);
    }

    #[test]
    fn test_apply_swaps_mode_class() {
        let mut root = RootStyle::new();
        root.apply(&binding(ResolvedMode::Dark));
        root.apply(&binding(ResolvedMode::Light));

        assert_eq!(root.mode(), Some(ResolvedMode::Light));
        assert!(!root.has_class("dark"));
        assert_eq!(root.classes().count(), 1);
    }

    #[test]
    fn test_apply_sets_tokens() {
        let mut root = RootStyle::new();
        root.apply(&binding(ResolvedMode::Dark));
        assert_eq!(root.property("--toast-bg"), Some("#374151"));
        assert_eq!(root.property("--toast-color"), Some("#f9fafb"));
        assert_eq!(root.property("--toast-border"), Some("#4b5563"));
    }

    #[test]
    fn test_to_css_includes_classes_and_properties() {
        let mut root = RootStyle::with_classes(["h-full"]);
        root.apply(&binding(ResolvedMode::Light));
        let css = root.to_css();
        assert!(css.starts_with(":root.h-full.light {"));
        assert!(css.contains("  --toast-border: #e5e7eb;\n"));
    }
}
