//! Cosmetic themes and the active-theme state
//!
//! The original design reached a global theme manager from every
//! screen; here the active theme is an explicit value the presentation
//! layer owns, constructed from the persisted setting at startup.

use fitquest_core::{Error, Result, RewardLedger};

pub const DEFAULT_THEME_ID: &str = "default";

/// One color scheme, ARGB components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub id: &'static str,
    pub display_name: &'static str,
    pub primary: u32,
    pub accent: u32,
    pub background: u32,
    pub card: u32,
    pub text: u32,
}

static THEMES: [ThemePalette; 4] = [
    ThemePalette {
        id: "default",
        display_name: "Default",
        primary: 0xFFFF6B35,
        accent: 0xFFFF8C5A,
        background: 0xFF0D0D0D,
        card: 0xFF1A1A1A,
        text: 0xFFFFFFFF,
    },
    ThemePalette {
        id: "golden",
        display_name: "Golden",
        primary: 0xFFFFD700,
        accent: 0xFFFFE55C,
        background: 0xFF1A1410,
        card: 0xFF2A2418,
        text: 0xFFFFFFFF,
    },
    ThemePalette {
        id: "purple",
        display_name: "Dark Purple",
        primary: 0xFF9C27B0,
        accent: 0xFFBA68C8,
        background: 0xFF0D0A0F,
        card: 0xFF1A141D,
        text: 0xFFFFFFFF,
    },
    ThemePalette {
        id: "neon",
        display_name: "Neon",
        primary: 0xFF00F0FF,
        accent: 0xFFFF10F0,
        background: 0xFF0A0A0F,
        card: 0xFF14141F,
        text: 0xFFFFFFFF,
    },
];

/// All built-in themes, default first
pub fn builtin_themes() -> &'static [ThemePalette] {
    &THEMES
}

pub fn theme_by_id(theme_id: &str) -> Option<&'static ThemePalette> {
    THEMES.iter().find(|t| t.id == theme_id)
}

/// The default theme ships unlocked; everything else is bought
pub fn is_theme_unlocked(ledger: &RewardLedger, theme_id: &str) -> bool {
    theme_id == DEFAULT_THEME_ID || ledger.is_theme_unlocked(theme_id)
}

/// The currently active theme id, owned by whoever drives presentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeState {
    active: String,
}

impl ThemeState {
    pub fn new() -> Self {
        Self {
            active: DEFAULT_THEME_ID.to_string(),
        }
    }

    /// Restore from a persisted setting; unknown ids fall back to default
    pub fn with_active(theme_id: impl Into<String>) -> Self {
        let theme_id = theme_id.into();
        match theme_by_id(&theme_id) {
            Some(_) => Self { active: theme_id },
            None => Self::new(),
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn active_palette(&self) -> &'static ThemePalette {
        theme_by_id(&self.active).unwrap_or(&THEMES[0])
    }

    /// Switch to `theme_id` if it exists and the ledger has unlocked it
    pub fn activate(
        &mut self,
        ledger: &RewardLedger,
        theme_id: &str,
    ) -> Result<&'static ThemePalette> {
        let palette =
            theme_by_id(theme_id).ok_or_else(|| Error::ThemeNotFound(theme_id.to_string()))?;

        if !is_theme_unlocked(ledger, theme_id) {
            return Err(Error::ThemeLocked(theme_id.to_string()));
        }

        self.active = palette.id.to_string();
        Ok(palette)
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}
