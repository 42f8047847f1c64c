//! The presentation binding derived from a resolved mode.

use serde::Serialize;

use super::mode::ResolvedMode;
use super::palette::{Palettes, ToastPalette};

/// Everything a surface must reflect for one resolved mode: the root
/// display-mode class and the toast color tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresentationBinding {
    pub mode: ResolvedMode,
    pub toast: ToastPalette,
}

impl PresentationBinding {
    /// Builds the binding for `mode`. Equal inputs give equal bindings.
    pub fn for_mode(mode: ResolvedMode, palettes: &Palettes) -> Self {
        Self {
            mode,
            toast: palettes.for_mode(mode).clone(),
        }
    }

    /// The root class name for this binding.
    pub fn class_name(&self) -> &'static str {
        self.mode.class_name()
    }

    /// The color tokens as `(custom property, value)` pairs.
    pub fn tokens(&self) -> [(&'static str, &str); 3] {
        self.toast.tokens()
    }

    /// Renders the binding as a `:root` CSS block.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lumen::{Palettes, PresentationBinding, ResolvedMode};
    ///
    /// let css = PresentationBinding::for_mode(ResolvedMode::Dark, &Palettes::default()).to_css();
    /// assert!(css.starts_with(":root.dark {"));
    /// assert!(css.contains("--toast-bg: #374151;"));
    /// ```
    pub fn to_css(&self) -> String {
        let mut css = format!(":root.{} {{\n", self.class_name());
        css.push_str(&format!("  color-scheme: {};\n", self.class_name()));
        for (name, value) in self.tokens() {
            css.push_str(&format!("  {}: {};\n", name, value));
        }
        css.push_str("}\n");
        css
    }
}
