// SPDX-License-Identifier: MPL-2.0
//! Resolution of the application's data and config directories.
//!
//! Every path in the crate funnels through here. A directory is resolved by
//! taking the first of:
//!
//! 1. an explicit override handed to a `_with_override()` function (tests),
//! 2. the `--data-dir` / `--config-dir` CLI flags, registered once at
//!    startup via [`init_cli_overrides`],
//! 3. the `CANDIDATE_STUDIO_DATA_DIR` / `CANDIDATE_STUDIO_CONFIG_DIR`
//!    environment variables, when non-empty,
//! 4. the platform directory from the `dirs` crate, with the application
//!    name appended.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Directory name appended to the platform defaults.
const APP_NAME: &str = "CandidateStudio";

/// Environment variable overriding the data directory.
pub const ENV_DATA_DIR: &str = "CANDIDATE_STUDIO_DATA_DIR";

/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "CANDIDATE_STUDIO_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Registers the CLI directory flags.
///
/// Call exactly once at startup, before anything resolves a path.
///
/// # Panics
///
/// Panics on a second call; the overrides are write-once.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    CLI_DATA_DIR
        .set(data_dir.map(PathBuf::from))
        .expect("CLI data dir override already initialized");
    CLI_CONFIG_DIR
        .set(config_dir.map(PathBuf::from))
        .expect("CLI config dir override already initialized");
}

/// The directory holding session state (`state.cbor`).
///
/// `None` when the platform reports no data directory.
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// [`get_app_data_dir`] with an explicit override in front of the cascade.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, &CLI_DATA_DIR, ENV_DATA_DIR, dirs::data_dir)
}

/// The directory holding user preferences (`settings.toml`).
///
/// `None` when the platform reports no config directory.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// [`get_app_config_dir`] with an explicit override in front of the cascade.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        override_path,
        &CLI_CONFIG_DIR,
        ENV_CONFIG_DIR,
        dirs::config_dir,
    )
}

/// Walks the override cascade documented at the module level.
fn resolve(
    override_path: Option<PathBuf>,
    cli: &OnceLock<Option<PathBuf>>,
    env_var: &str,
    platform_dir: fn() -> Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = cli.get().and_then(Clone::clone) {
        return Some(path);
    }

    if let Ok(value) = std::env::var(env_var) {
        if !value.is_empty() {
            return Some(PathBuf::from(value));
        }
    }

    platform_dir().map(|mut dir| {
        dir.push(APP_NAME);
        dir
    })
}

/// Serializes tests that mutate the process environment. Shared with the
/// app-level tests that point the data directory at a temp dir.
#[cfg(test)]
pub(crate) static ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());
