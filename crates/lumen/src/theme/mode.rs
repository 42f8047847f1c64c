//! The concrete display mode.

use std::fmt;

use serde::Serialize;

use super::preference::Preference;

/// The mode actually displayed. Never stored on its own; always derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedMode {
    #[default]
    Light,
    Dark,
}

impl ResolvedMode {
    /// Maps a "prefers dark" flag to a mode.
    pub fn from_is_dark(is_dark: bool) -> Self {
        if is_dark {
            ResolvedMode::Dark
        } else {
            ResolvedMode::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == ResolvedMode::Dark
    }

    /// The class put on the document root for this mode.
    pub fn class_name(self) -> &'static str {
        match self {
            ResolvedMode::Light => "light",
            ResolvedMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ResolvedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// Resolves a preference against the current system mode.
///
/// Explicit preferences win; `System` takes whatever the system reports.
///
/// # Example
///
/// ```rust
/// use lumen::{resolve, Preference, ResolvedMode};
///
/// assert_eq!(resolve(Preference::Light, ResolvedMode::Dark), ResolvedMode::Light);
/// assert_eq!(resolve(Preference::System, ResolvedMode::Dark), ResolvedMode::Dark);
/// ```
pub fn resolve(preference: Preference, system: ResolvedMode) -> ResolvedMode {
    match preference {
        Preference::Light => ResolvedMode::Light,
        Preference::Dark => ResolvedMode::Dark,
        Preference::System => system,
    }
}
