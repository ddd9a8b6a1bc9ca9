use std::path::{Path, PathBuf};

use newscheck_core::Theme;
use newscheck_engine::{read_if_exists, AtomicFileWriter, PersistError};
use newscheck_logging::{nc_info, nc_warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const PREFS_FILENAME: &str = ".newscheck_prefs.ron";

#[derive(Debug, Error)]
pub(crate) enum PreferenceError {
    #[error("could not encode preferences: {0}")]
    Encode(#[from] ron::Error),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedPreferences {
    theme: String,
}

/// Reads the stored theme. Anything unreadable falls back to the default.
pub(crate) fn load_theme(state_dir: &Path) -> Theme {
    let content = match read_if_exists(state_dir, PREFS_FILENAME) {
        Ok(Some(text)) => text,
        Ok(None) => return Theme::default(),
        Err(err) => {
            nc_warn!("Failed to read preferences from {:?}: {}", state_dir, err);
            return Theme::default();
        }
    };

    let prefs: PersistedPreferences = match ron::from_str(&content) {
        Ok(prefs) => prefs,
        Err(err) => {
            nc_warn!("Failed to parse preferences in {:?}: {}", state_dir, err);
            return Theme::default();
        }
    };

    match prefs.theme.parse() {
        Ok(theme) => theme,
        Err(err) => {
            nc_warn!("Ignoring stored theme: {}", err);
            Theme::default()
        }
    }
}

pub(crate) fn save_theme(state_dir: &Path, theme: Theme) -> Result<PathBuf, PreferenceError> {
    let prefs = PersistedPreferences {
        theme: theme.as_str().to_string(),
    };
    let content = ron::ser::to_string_pretty(&prefs, ron::ser::PrettyConfig::new())?;
    let path = AtomicFileWriter::new(state_dir.to_path_buf()).write(PREFS_FILENAME, &content)?;
    nc_info!("Stored theme {} in {:?}", theme, path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn missing_preferences_default_to_light() {
        let temp = TempDir::new().unwrap();
        assert_eq!(load_theme(temp.path()), Theme::Light);
    }

    #[test]
    fn saved_theme_is_loaded_back() {
        let temp = TempDir::new().unwrap();
        let path = save_theme(temp.path(), Theme::Dark).unwrap();

        assert!(path.ends_with(PREFS_FILENAME));
        assert!(fs::read_to_string(&path).unwrap().contains("\"dark\""));
        assert_eq!(load_theme(temp.path()), Theme::Dark);

        save_theme(temp.path(), Theme::Light).unwrap();
        assert_eq!(load_theme(temp.path()), Theme::Light);
    }

    #[test]
    fn corrupt_or_unknown_values_fall_back() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PREFS_FILENAME), "not ron at all (").unwrap();
        assert_eq!(load_theme(temp.path()), Theme::Light);

        fs::write(temp.path().join(PREFS_FILENAME), "(theme: \"solarized\")").unwrap();
        assert_eq!(load_theme(temp.path()), Theme::Light);
    }
}
