use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ratatui::style::Color;
use serde::Deserialize;

use crate::board::Board;
use crate::error::ConfigError;

/// Default board width in cells.
pub const DEFAULT_GRID_WIDTH: u32 = 20;

/// Default board height in cells.
pub const DEFAULT_GRID_HEIGHT: u32 = 20;

/// Ticks per step at speed 1. Each speed level removes one tick, down to 1.
pub const BASE_TICK_INTERVAL: u32 = 10;

/// Score needed per speed level increase.
pub const POINTS_PER_SPEED_LEVEL: u32 = 5;

/// Random draws before food placement switches to a deterministic scan.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 4_096;

/// Delay between frames of the terminal driver, in milliseconds.
pub const FRAME_INTERVAL_MS: u64 = 16;

const APP_DIR_NAME: &str = "grid-snake";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// Runtime settings for the terminal front end.
///
/// Every field is optional in the JSON file; missing fields take defaults.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub width: u32,
    pub height: u32,
    pub frame_interval_ms: u64,
    /// Fixed food placement seed; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            frame_interval_ms: FRAME_INTERVAL_MS,
            seed: None,
        }
    }
}

impl Settings {
    /// Loads settings from `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&raw, path)
    }

    /// Loads settings from the platform config directory, falling back to
    /// defaults when no file exists there.
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = settings_path();
        match fs::read_to_string(&path) {
            Ok(raw) => Self::parse(&raw, &path),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read { path, source }),
        }
    }

    fn parse(raw: &str, path: &Path) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Checks the values against the engine's construction rules.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Board::new(self.width, self.height)?;
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::ZeroFrameInterval);
        }

        Ok(())
    }
}

/// Returns the platform-correct settings file path.
#[must_use]
pub fn settings_path() -> PathBuf {
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SETTINGS_FILE_NAME);
    base
}

/// Colors applied to the terminal front end.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_text: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Blue snake on a dark field.
pub const THEME_CLASSIC: Theme = Theme {
    snake_head: Color::LightBlue,
    snake_body: Color::Blue,
    food: Color::White,
    play_bg: Color::Black,
    border_fg: Color::DarkGray,
    hud_text: Color::White,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Full-block glyph for snake segments.
pub const GLYPH_SNAKE_BODY: &str = "█";

/// Glyph for the food cell.
pub const GLYPH_FOOD: &str = "●";

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::time::{SystemTime, UNIX_EPOCH};

    use crate::error::{ConfigError, EngineError};

    use super::{DEFAULT_GRID_HEIGHT, FRAME_INTERVAL_MS, Settings};

    #[test]
    fn partial_file_fills_in_defaults() {
        let path = unique_test_path("partial");
        write_test_file(&path, r#"{ "width": 32, "seed": 9 }"#);

        let settings = Settings::load(&path).expect("settings should load");

        assert_eq!(settings.width, 32);
        assert_eq!(settings.height, DEFAULT_GRID_HEIGHT);
        assert_eq!(settings.frame_interval_ms, FRAME_INTERVAL_MS);
        assert_eq!(settings.seed, Some(9));
        cleanup_test_path(&path);
    }

    #[test]
    fn malformed_file_returns_parse_error() {
        let path = unique_test_path("malformed");
        write_test_file(&path, "not-json");

        assert!(matches!(
            Settings::load(&path),
            Err(ConfigError::Parse { .. })
        ));
        cleanup_test_path(&path);
    }

    #[test]
    fn missing_file_returns_read_error() {
        let path = unique_test_path("missing");

        assert!(matches!(
            Settings::load(&path),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn validation_uses_engine_rules() {
        let settings = Settings {
            height: 0,
            ..Settings::default()
        };

        assert!(matches!(
            settings.validate(),
            Err(ConfigError::Engine(EngineError::ZeroDimension { .. }))
        ));

        let settings = Settings {
            frame_interval_ms: 0,
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::ZeroFrameInterval)
        ));

        assert!(Settings::default().validate().is_ok());
    }

    fn write_test_file(path: &Path, contents: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(path, contents).expect("test file write should succeed");
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("grid-snake-settings-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn cleanup_test_path(path: &Path) {
        let _ = fs::remove_file(path);
    }
}
