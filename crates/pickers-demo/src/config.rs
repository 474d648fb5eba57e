#![forbid(unsafe_code)]

//! Demo configuration read from the environment.
//!
//! | Variable | Values | Default |
//! |----------|--------|---------|
//! | `PICKERS_THEME` | `light`, `dark`, or a path to a `.json` theme | `light` |
//! | `RUST_LOG` | any `EnvFilter` directive | `info` |

use std::fmt;
use std::path::Path;

use pickers_style::{PickersTheme, ThemeError, ThemePreset};

pub const THEME_ENV: &str = "PICKERS_THEME";

#[derive(Debug)]
pub enum DemoError {
    Theme(ThemeError),
    Io(std::io::Error),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Theme(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Theme(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<ThemeError> for DemoError {
    fn from(e: ThemeError) -> Self {
        Self::Theme(e)
    }
}

impl From<std::io::Error> for DemoError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Resolve the `PICKERS_THEME` setting.
pub fn theme_from_setting(setting: Option<&str>) -> Result<PickersTheme, DemoError> {
    let Some(raw) = setting.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(PickersTheme::default());
    };
    if raw.ends_with(".json") {
        let json = std::fs::read_to_string(Path::new(raw))?;
        return Ok(PickersTheme::from_json(&json)?);
    }
    Ok(raw.parse::<ThemePreset>()?.theme())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_is_light() {
        assert_eq!(theme_from_setting(None).unwrap(), PickersTheme::light());
        assert_eq!(theme_from_setting(Some("  ")).unwrap(), PickersTheme::light());
    }

    #[test]
    fn preset_names() {
        assert_eq!(theme_from_setting(Some("DARK")).unwrap(), PickersTheme::dark());
        let err = theme_from_setting(Some("sepia")).unwrap_err();
        assert!(matches!(err, DemoError::Theme(ThemeError::UnknownPreset(_))));
        assert_eq!(err.to_string(), "unknown theme preset: sepia");
    }

    #[test]
    fn json_file() {
        let path = std::env::temp_dir().join(format!("pickers-demo-{}.json", std::process::id()));
        std::fs::write(&path, PickersTheme::dark().to_json().unwrap()).unwrap();
        let theme = theme_from_setting(path.to_str()).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(theme, PickersTheme::dark());
    }

    #[test]
    fn missing_json_file_is_io_error() {
        let err = theme_from_setting(Some("/nonexistent/pickers-theme.json")).unwrap_err();
        assert!(matches!(err, DemoError::Io(_)));
    }
}
