// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::DecodeError;
use crate::media::{SlotId, UploadedImage};
use crate::ui::info_editor;
use crate::ui::media_slot;
use crate::ui::notifications;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// A message for one of the media slots, tagged with its identity.
    Slot(SlotId, media_slot::Message),
    Info(info_editor::Message),
    Notification(notifications::NotificationMessage),
    /// Result from the upload file dialog. `None` means the user cancelled.
    UploadDialogResult {
        slot: SlotId,
        path: Option<PathBuf>,
    },
    /// Result from decoding a picked file off the UI thread.
    ///
    /// The generation lets the receiving slot drop completions that were
    /// superseded by a newer pick or by closing the popup.
    UploadDecoded {
        slot: SlotId,
        generation: u64,
        result: Result<UploadedImage, DecodeError>,
    },
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Escape dismisses whichever popup is currently open.
    EscapePressed,
    Tick(Instant), // Periodic tick for notification auto-dismiss
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional data directory override (for state files).
    /// Takes precedence over `CANDIDATE_STUDIO_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `CANDIDATE_STUDIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
