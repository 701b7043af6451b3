use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::storage::{theme_store, ThemeStore};

/// The two-valued selector driving all visual choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn flip(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn record(self) -> &'static ThemeRecord {
        match self {
            Self::Light => &LIGHT,
            Self::Dark => &DARK,
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme mode: {}", other)),
        }
    }
}

impl Display for ThemeMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved colors for one mode. Never built at runtime, only looked up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeRecord {
    pub id: ThemeMode,
    pub background: &'static str,
    pub surface: &'static str,
    pub color: &'static str,
    pub accent: &'static str,
}

impl ThemeRecord {
    /// Light palette (default).
    pub const fn light() -> Self {
        Self {
            id: ThemeMode::Light,
            background: "#ffffff",
            surface: "#f4f4f6",
            color: "#111827",
            accent: "#2563eb",
        }
    }

    /// Dark palette.
    pub const fn dark() -> Self {
        Self {
            id: ThemeMode::Dark,
            background: "#0b1220",
            surface: "#0f1724",
            color: "#e6eef8",
            accent: "#60a5fa",
        }
    }
}

static LIGHT: ThemeRecord = ThemeRecord::light();
static DARK: ThemeRecord = ThemeRecord::dark();

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ThemeState {
    pub mode: ThemeMode,
}

impl ThemeState {
    /// Read the persisted mode from the platform store, defaulting to light
    /// when nothing usable is stored.
    pub fn load() -> Self {
        Self::from_store(&theme_store())
    }

    pub fn from_store(store: &dyn ThemeStore) -> Self {
        Self {
            mode: store.load().unwrap_or_default(),
        }
    }

    pub fn toggle(&mut self) {
        self.mode = self.mode.flip();
    }

    pub fn record(&self) -> &'static ThemeRecord {
        self.mode.record()
    }

    /// Label for the toggle control, always naming the mode that is not
    /// currently active.
    pub fn toggle_label(&self) -> &'static str {
        match self.mode {
            ThemeMode::Light => "Switch to Dark",
            ThemeMode::Dark => "Switch to Light",
        }
    }
}
