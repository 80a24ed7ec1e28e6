//! Theme values and their wire form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::surface::Icon;

/// Theme options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Theme matching a `prefers-color-scheme: dark` result.
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// The icon shown while this theme is active: the one that switches away from it.
    pub fn visible_icon(self) -> Icon {
        match self {
            Theme::Dark => Icon::Sun,
            Theme::Light => Icon::Moon,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeError::UnknownTheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stored_values() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
    }

    #[test]
    fn rejects_unknown_values() {
        // Anything other than the two wire values must not silently become Light
        for raw in ["", "Dark", "LIGHT", "black", " dark"] {
            let err = raw.parse::<Theme>().unwrap_err();
            assert!(
                matches!(err, ThemeError::UnknownTheme(ref v) if v == raw),
                "expected UnknownTheme for {raw:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn toggled_flips_between_the_two_themes() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn dark_shows_sun_and_light_shows_moon() {
        assert_eq!(Theme::Dark.visible_icon(), Icon::Sun);
        assert_eq!(Theme::Light.visible_icon(), Icon::Moon);
    }

    #[test]
    fn serde_uses_wire_strings() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let theme: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(theme, Theme::Light);
        assert!(serde_json::from_str::<Theme>("\"oled\"").is_err());
    }
}
