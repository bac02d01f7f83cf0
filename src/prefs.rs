//! Editor preferences
//!
//! The slice of the editor's preferences this crate owns: the serialized
//! filter set and the flags steering resolution and icon theming, stored as
//! JSON under the user's config directory. Loading never fails; a missing or
//! unreadable file yields the defaults so a bad preferences file cannot
//! prevent startup.

use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::filters::SyntaxFilterSet;

fn default_true() -> bool {
    true
}

fn default_syntax_filters() -> String {
    SyntaxFilterSet::new().to_string()
}

/// File type preferences persisted between sessions.
///
/// Every field carries a serde default, so preference files written by other
/// versions load with missing keys filled in rather than erroring out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorPrefs {
    /// The filter set in its serialized `style:filter1 filter2 ,...` form.
    #[serde(default = "default_syntax_filters")]
    pub syntax_filters: String,

    /// Match `Foo.java.bak` as if it were `Foo.java`.
    #[serde(default = "default_true")]
    pub ignore_backup_extensions: bool,

    /// Sniff the first line of unrecognized files for `#!` and `<?xml`.
    #[serde(default = "default_true")]
    pub guess_file_content_type: bool,

    /// Select the dark-theme default file icon.
    #[serde(default)]
    pub dark_file_icons: bool,
}

impl Default for EditorPrefs {
    fn default() -> Self {
        Self {
            syntax_filters: default_syntax_filters(),
            ignore_backup_extensions: true,
            guess_file_content_type: true,
            dark_file_icons: false,
        }
    }
}

impl EditorPrefs {
    /// The filter set these preferences describe. Falls back to defaults if
    /// the stored string no longer parses.
    pub fn filter_set(&self) -> SyntaxFilterSet {
        SyntaxFilterSet::from_string(&self.syntax_filters)
    }

    /// Store a filter set back into its serialized form.
    pub fn set_filter_set(&mut self, filters: &SyntaxFilterSet) {
        self.syntax_filters = filters.to_string();
    }

    /// Parse preferences from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize preferences to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load preferences from a file, returning defaults if the file does not
    /// exist, cannot be read, or does not parse.
    pub fn load_from_file(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_json(&content).unwrap_or_else(|e| {
                warn!("Ignoring malformed preferences file {}: {}", path.display(), e);
                Self::default()
            }),
            Err(e) => {
                warn!("Cannot read preferences file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save preferences to a file, creating parent directories as needed.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// The conventional preferences location under the user's config
    /// directory, when the platform exposes one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("syntax-filters").join("prefs.json"))
    }
}
