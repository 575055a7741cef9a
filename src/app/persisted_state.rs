// SPDX-License-Identifier: MPL-2.0
//! Session state that carries over between runs.
//!
//! Unlike the preferences in `settings.toml`, nothing in here is meant to
//! be edited by hand, so the file is CBOR (`state.cbor`) in the data
//! directory rather than TOML in the config directory. Losing it costs a
//! convenience, never a setting.

use super::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

const STATE_FILE: &str = "state.cbor";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Where the last upload was picked from; seeds the next file dialog.
    #[serde(default)]
    pub last_open_directory: Option<PathBuf>,
}

impl AppState {
    /// Loads the session state from the resolved data directory.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads the session state, optionally from an explicit directory.
    ///
    /// A missing file is a first run. A file that cannot be opened or
    /// parsed yields the defaults plus a warning key for the notification
    /// layer; stale session state never blocks startup.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::file_path(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        let file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(_) => {
                return (
                    Self::default(),
                    Some("notification-state-read-error".to_string()),
                );
            }
        };

        match ciborium::from_reader(BufReader::new(file)) {
            Ok(state) => (state, None),
            Err(_) => (
                Self::default(),
                Some("notification-state-parse-error".to_string()),
            ),
        }
    }

    /// Writes the session state to the resolved data directory.
    pub fn save(&self) -> Result<()> {
        self.save_to(None)
    }

    /// Writes the session state, optionally to an explicit directory.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Result<()> {
        let Some(path) = Self::file_path(base_dir) else {
            return Err(Error::Io("application data directory unavailable".into()));
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let writer = BufWriter::new(fs::File::create(&path)?);
        ciborium::into_writer(self, writer)?;
        Ok(())
    }

    fn file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|dir| dir.join(STATE_FILE))
    }

    /// Remembers the directory a file was picked from.
    ///
    /// Paths without a parent, such as a bare root, leave the remembered
    /// directory untouched.
    pub fn set_last_open_directory_from_file(&mut self, file_path: &Path) {
        if let Some(parent) = file_path.parent() {
            self.last_open_directory = Some(parent.to_path_buf());
        }
    }
}
