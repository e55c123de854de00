use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Local storage key holding the persisted preference.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

impl ResolvedTheme {
    pub fn is_dark(&self) -> bool {
        *self == Self::Dark
    }
}

impl ThemePreference {
    /// light → dark → system → light
    pub fn next(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
            Self::System => Self::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    pub fn resolve(&self, prefers_dark: bool) -> ResolvedTheme {
        match self {
            Self::Light => ResolvedTheme::Light,
            Self::Dark => ResolvedTheme::Dark,
            Self::System if prefers_dark => ResolvedTheme::Dark,
            Self::System => ResolvedTheme::Light,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Light => "☀️",
            Self::Dark => "🌙",
            Self::System => "🖥️",
        }
    }

    /// Tooltip for the toggle button: what the next click does.
    pub fn toggle_title(&self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to system mode",
            Self::System => "Switch to light mode",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct ParseThemeError(String);

impl FromStr for ThemePreference {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            _ => Err(ParseThemeError(s.to_string())),
        }
    }
}

/// The page-wide theme. Built once from the persisted preference and
/// provided to the component tree; `reset` returns it to the system default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeState {
    preference: ThemePreference,
}

impl ThemeState {
    /// Unknown or missing persisted values fall back to `System`.
    pub fn init(persisted: Option<&str>) -> Self {
        let preference = persisted
            .and_then(|p| p.parse().ok())
            .unwrap_or_default();
        Self { preference }
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    pub fn cycle(&mut self) -> ThemePreference {
        self.preference = self.preference.next();
        self.preference
    }

    pub fn reset(&mut self) {
        self.preference = ThemePreference::System;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_order() {
        let mut state = ThemeState::init(Some("light"));
        assert_eq!(state.cycle(), ThemePreference::Dark);
        assert_eq!(state.cycle(), ThemePreference::System);
        assert_eq!(state.cycle(), ThemePreference::Light);
    }

    #[test]
    fn test_init_and_reset() {
        assert_eq!(ThemeState::init(None).preference(), ThemePreference::System);
        assert_eq!(
            ThemeState::init(Some("purple")).preference(),
            ThemePreference::System
        );
        let mut state = ThemeState::init(Some(" Dark "));
        assert_eq!(state.preference(), ThemePreference::Dark);
        state.reset();
        assert_eq!(state, ThemeState::default());
    }

    #[test]
    fn test_resolve() {
        assert!(ThemePreference::System.resolve(true).is_dark());
        assert!(!ThemePreference::System.resolve(false).is_dark());
        assert!(!ThemePreference::Light.resolve(true).is_dark());
        assert!(ThemePreference::Dark.resolve(false).is_dark());
    }

    #[test]
    fn test_round_trip_names() {
        for pref in [
            ThemePreference::Light,
            ThemePreference::Dark,
            ThemePreference::System,
        ] {
            assert_eq!(pref.to_string().parse(), Ok(pref));
        }
        assert_eq!(
            "neon".parse::<ThemePreference>(),
            Err(ParseThemeError("neon".to_string()))
        );
    }
}
