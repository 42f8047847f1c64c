//! The user's theme preference.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PreferenceParseError;

/// What the user asked for: an explicit mode, or following the system.
///
/// Stored and parsed as the plain-text tokens `light`, `dark` and `system`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    Light,
    Dark,
    #[default]
    System,
}

impl Preference {
    /// All preferences, in the order a selector presents them.
    pub const ALL: [Preference; 3] = [Preference::Light, Preference::Dark, Preference::System];

    /// The persisted token for this preference.
    pub fn as_str(self) -> &'static str {
        match self {
            Preference::Light => "light",
            Preference::Dark => "dark",
            Preference::System => "system",
        }
    }

    /// Interprets a raw value read from a durable slot.
    ///
    /// Absent and unrecognized values both fall back to [`Preference::System`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use lumen::Preference;
    ///
    /// assert_eq!(Preference::from_stored(Some("dark")), Preference::Dark);
    /// assert_eq!(Preference::from_stored(Some("Dark ")), Preference::System);
    /// assert_eq!(Preference::from_stored(None), Preference::System);
    /// ```
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            None => Preference::System,
            Some(token) => token.parse().unwrap_or_else(|err: PreferenceParseError| {
                debug!(%err, "ignoring stored theme preference");
                Preference::System
            }),
        }
    }

    /// Whether this preference tracks the system color scheme.
    pub fn follows_system(self) -> bool {
        self == Preference::System
    }

    /// The next preference in [`Preference::ALL`] order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Preference::Light => Preference::Dark,
            Preference::Dark => Preference::System,
            Preference::System => Preference::Light,
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preference {
    type Err = PreferenceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Preference::Light),
            "dark" => Ok(Preference::Dark),
            "system" => Ok(Preference::System),
            other => Err(PreferenceParseError {
                token: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_round_trip_through_display() {
        for pref in Preference::ALL {
            assert_eq!(pref.to_string().parse::<Preference>(), Ok(pref));
        }
    }

    #[test]
    fn test_parse_is_exact() {
        assert!("Light".parse::<Preference>().is_err());
        assert!(" dark".parse::<Preference>().is_err());
        assert!("".parse::<Preference>().is_err());
    }

    #[test]
    fn test_from_stored_falls_back_to_system() {
        assert_eq!(Preference::from_stored(None), Preference::System);
        assert_eq!(Preference::from_stored(Some("")), Preference::System);
        assert_eq!(Preference::from_stored(Some("sepia")), Preference::System);
        assert_eq!(Preference::from_stored(Some("light")), Preference::Light);
    }

    #[test]
    fn test_default_is_system() {
        assert_eq!(Preference::default(), Preference::System);
    }

    #[test]
    fn test_next_cycles_through_all() {
        let mut pref = Preference::Light;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(pref);
            pref = pref.next();
        }
        assert_eq!(seen, Preference::ALL);
        assert_eq!(pref, Preference::Light);
    }

    #[test]
    fn test_serde_uses_lowercase_tokens() {
        let json = serde_json::to_string(&Preference::System).unwrap();
        assert_eq!(json, "\"system\"");
        let pref: Preference = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(pref, Preference::Dark);
    }
}
