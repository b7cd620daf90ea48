use std::path::Path;

use finder_core::Theme;
use finder_engine::AtomicFile;
use finder_logging::{finder_error, finder_info, finder_warn};
use serde::{Deserialize, Serialize};

pub const PREFS_FILENAME: &str = ".finder_prefs.ron";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct PersistedPrefs {
    theme: Theme,
}

/// Saved theme choice, the console stand-in for the page's local storage.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    file: AtomicFile,
}

impl ThemeStore {
    pub fn in_dir(state_dir: &Path) -> Self {
        Self {
            file: AtomicFile::new(state_dir.join(PREFS_FILENAME)),
        }
    }

    /// Returns the saved theme; unreadable or corrupt files count as unset.
    pub fn load(&self) -> Option<Theme> {
        let content = match self.file.read() {
            Ok(Some(text)) => text,
            Ok(None) => return None,
            Err(err) => {
                finder_warn!(
                    "Failed to read preferences from {:?}: {}",
                    self.file.path(),
                    err
                );
                return None;
            }
        };

        match ron::from_str::<PersistedPrefs>(&content) {
            Ok(prefs) => Some(prefs.theme),
            Err(err) => {
                finder_warn!(
                    "Failed to parse preferences from {:?}: {}",
                    self.file.path(),
                    err
                );
                None
            }
        }
    }

    pub fn save(&self, theme: Theme) {
        let prefs = PersistedPrefs { theme };
        let content = match ron::ser::to_string_pretty(&prefs, ron::ser::PrettyConfig::default()) {
            Ok(text) => text,
            Err(err) => {
                finder_error!("Failed to serialize preferences: {}", err);
                return;
            }
        };
        match self.file.write(&content) {
            Ok(()) => finder_info!("Saved {} theme to {:?}", theme.as_str(), self.file.path()),
            Err(err) => finder_error!(
                "Failed to write preferences to {:?}: {}",
                self.file.path(),
                err
            ),
        }
    }
}
