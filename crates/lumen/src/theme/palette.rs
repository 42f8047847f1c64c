//! Toast color palettes.

use serde::{Deserialize, Serialize};

use super::mode::ResolvedMode;

/// CSS custom property for the toast background.
pub const TOAST_BACKGROUND: &str = "--toast-bg";
/// CSS custom property for the toast text color.
pub const TOAST_FOREGROUND: &str = "--toast-color";
/// CSS custom property for the toast border color.
pub const TOAST_BORDER: &str = "--toast-border";

/// The three color tokens used to style transient notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastPalette {
    pub background: String,
    pub foreground: String,
    pub border: String,
}

impl ToastPalette {
    /// Creates a palette from three CSS color values.
    pub fn new(background: &str, foreground: &str, border: &str) -> Self {
        Self {
            background: background.to_string(),
            foreground: foreground.to_string(),
            border: border.to_string(),
        }
    }

    /// The stock light palette.
    pub fn light() -> Self {
        Self::new("#ffffff", "#111827", "#e5e7eb")
    }

    /// The stock dark palette.
    pub fn dark() -> Self {
        Self::new("#374151", "#f9fafb", "#4b5563")
    }

    /// The palette as `(custom property, value)` pairs.
    pub fn tokens(&self) -> [(&'static str, &str); 3] {
        [
            (TOAST_BACKGROUND, &self.background),
            (TOAST_FOREGROUND, &self.foreground),
            (TOAST_BORDER, &self.border),
        ]
    }
}

/// One palette per display mode.
///
/// # Example
///
/// ```rust
/// use lumen::{Palettes, ResolvedMode, ToastPalette};
///
/// let palettes = Palettes::default()
///     .with_dark(ToastPalette::new("#000000", "#ffffff", "#333333"));
///
/// assert_eq!(palettes.for_mode(ResolvedMode::Dark).background, "#000000");
/// assert_eq!(palettes.for_mode(ResolvedMode::Light).background, "#ffffff");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palettes {
    pub light: ToastPalette,
    pub dark: ToastPalette,
}

impl Palettes {
    pub fn with_light(mut self, palette: ToastPalette) -> Self {
        self.light = palette;
        self
    }

    pub fn with_dark(mut self, palette: ToastPalette) -> Self {
        self.dark = palette;
        self
    }

    pub fn for_mode(&self, mode: ResolvedMode) -> &ToastPalette {
        match mode {
            ResolvedMode::Light => &self.light,
            ResolvedMode::Dark => &self.dark,
        }
    }
}

impl Default for Palettes {
    fn default() -> Self {
        Self {
            light: ToastPalette::light(),
            dark: ToastPalette::dark(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_dark_palette() {
        let dark = ToastPalette::dark();
        assert_eq!(dark.background, "#374151");
        assert_eq!(dark.foreground, "#f9fafb");
        assert_eq!(dark.border, "#4b5563");
    }

    #[test]
    fn test_stock_light_palette() {
        let light = ToastPalette::light();
        assert_eq!(light.background, "#ffffff");
        assert_eq!(light.foreground, "#111827");
        assert_eq!(light.border, "#e5e7eb");
    }

    #[test]
    fn test_tokens_use_css_property_names() {
        let dark = ToastPalette::dark();
        let tokens = dark.tokens();
        assert_eq!(tokens[0], ("--toast-bg", "#374151"));
        assert_eq!(tokens[1], ("--toast-color", "#f9fafb"));
        assert_eq!(tokens[2], ("--toast-border", "#4b5563"));
    }

    #[test]
    fn test_for_mode_selects_palette() {
        let palettes = Palettes::default();
        assert_eq!(palettes.for_mode(ResolvedMode::Light), &ToastPalette::light());
        assert_eq!(palettes.for_mode(ResolvedMode::Dark), &ToastPalette::dark());
    }
}
