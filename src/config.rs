//! Player settings loaded from a JSON file.
//!
//! Every section is optional; missing fields fall back to the built-in defaults
//! and out-of-range values are pulled back into range on load.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::types::{
    Rules, FALL_INTERVAL_STEP_MS, FRAME_MS, INITIAL_FALL_INTERVAL_MS, LINES_PER_LEVEL,
    MIN_FALL_INTERVAL_MS, POINTS_PER_LINE,
};

/// Environment variable overriding the settings path
pub const SETTINGS_PATH_ENV: &str = "BLOCKFALL_SETTINGS_PATH";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RuleSettings {
    pub initial_fall_interval_ms: u32,
    pub fall_interval_step_ms: u32,
    pub min_fall_interval_ms: u32,
    pub lines_per_level: u32,
    pub points_per_line: u32,
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self {
            initial_fall_interval_ms: INITIAL_FALL_INTERVAL_MS,
            fall_interval_step_ms: FALL_INTERVAL_STEP_MS,
            min_fall_interval_ms: MIN_FALL_INTERVAL_MS,
            lines_per_level: LINES_PER_LEVEL,
            points_per_line: POINTS_PER_LINE,
        }
    }
}

impl RuleSettings {
    fn sanitized(mut self) -> Self {
        self.min_fall_interval_ms = self.min_fall_interval_ms.max(1);
        self.initial_fall_interval_ms = self
            .initial_fall_interval_ms
            .max(self.min_fall_interval_ms);
        self.lines_per_level = self.lines_per_level.max(1);
        self
    }

    pub fn to_rules(self) -> Rules {
        Rules {
            initial_fall_interval_ms: self.initial_fall_interval_ms,
            fall_interval_step_ms: self.fall_interval_step_ms,
            min_fall_interval_ms: self.min_fall_interval_ms,
            lines_per_level: self.lines_per_level,
            points_per_line: self.points_per_line,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplaySettings {
    /// Terminal columns per grid cell
    pub cell_width: u16,
    /// Terminal rows per grid cell
    pub cell_height: u16,
    /// Frame period of the game loop
    pub frame_ms: u32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            cell_width: 2,
            cell_height: 1,
            frame_ms: FRAME_MS,
        }
    }
}

impl DisplaySettings {
    fn sanitized(mut self) -> Self {
        self.cell_width = self.cell_width.clamp(1, 4);
        self.cell_height = self.cell_height.clamp(1, 2);
        self.frame_ms = self.frame_ms.clamp(1, 1000);
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub rules: RuleSettings,
    pub display: DisplaySettings,
}

impl Settings {
    pub fn sanitized(self) -> Self {
        Self {
            rules: self.rules.sanitized(),
            display: self.display.sanitized(),
        }
    }

    /// Parse settings from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        let settings: Settings =
            serde_json::from_str(text).context("settings are not valid JSON")?;
        Ok(settings.sanitized())
    }

    /// Load settings from an explicit file. The file must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("in settings file {}", path.display()))
    }

    /// Load from `explicit` if given, else from the default location if a file
    /// exists there, else fall back to defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match default_settings_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }
}

/// `$BLOCKFALL_SETTINGS_PATH`, else `$XDG_CONFIG_HOME/tui-blockfall/settings.json`,
/// else `~/.config/tui-blockfall/settings.json`.
pub fn default_settings_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os(SETTINGS_PATH_ENV) {
        return Some(PathBuf::from(explicit));
    }

    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(base.join("tui-blockfall").join("settings.json"))
}
