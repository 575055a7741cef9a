// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers that `App::update`
//! dispatches to. Handlers receive an [`UpdateContext`] with mutable access
//! to the pieces of application state they coordinate.

use super::{persisted_state, Message};
use crate::i18n::fluent::I18n;
use crate::media::{self, extensions, SlotId, UploadedImage};
use crate::ui::info_editor::{self, Event as InfoEvent};
use crate::ui::media_slot::{self, Event as SlotEvent};
use crate::ui::notifications;
use iced::Task;
use std::path::PathBuf;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub profile: &'a mut media_slot::State,
    pub poster: &'a mut media_slot::State,
    pub info: &'a mut info_editor::State,
    pub app_state: &'a mut persisted_state::AppState,
    pub notifications: &'a mut notifications::Manager,
}

impl UpdateContext<'_> {
    /// Returns the slot state addressed by `slot`.
    pub fn slot_mut(&mut self, slot: SlotId) -> &mut media_slot::State {
        match slot {
            SlotId::Profile => self.profile,
            SlotId::Poster => self.poster,
        }
    }

    /// Returns the slot whose popup is currently open, if any.
    pub fn open_slot(&self) -> Option<SlotId> {
        if self.profile.is_open() {
            Some(SlotId::Profile)
        } else if self.poster.is_open() {
            Some(SlotId::Poster)
        } else {
            None
        }
    }
}

/// Handles messages addressed to one of the media slots.
pub fn handle_slot_message(
    ctx: &mut UpdateContext<'_>,
    slot: SlotId,
    message: media_slot::Message,
) -> Task<Message> {
    match ctx.slot_mut(slot).update(message) {
        SlotEvent::None => Task::none(),
        SlotEvent::Opened => {
            // Only one popup may be open at a time.
            close_sibling_popups(ctx, slot);
            Task::none()
        }
        SlotEvent::FilePickRequested => open_upload_dialog(ctx, slot),
        SlotEvent::Confirmed => {
            ctx.notifications
                .push(notifications::Notification::success(
                    "notification-upload-confirmed",
                ));
            Task::none()
        }
        SlotEvent::Deleted => {
            ctx.notifications.push(notifications::Notification::info(
                "notification-media-reset",
            ));
            Task::none()
        }
    }
}

/// Handles messages addressed to the free-text editor.
pub fn handle_info_message(
    ctx: &mut UpdateContext<'_>,
    message: info_editor::Message,
) -> Task<Message> {
    match ctx.info.update(message) {
        InfoEvent::None => {}
        InfoEvent::Opened => {
            // Only one popup may be open at a time.
            close_media_popups(ctx);
        }
        InfoEvent::Saved => {
            ctx.notifications
                .push(notifications::Notification::success(
                    "notification-info-saved",
                ));
        }
        InfoEvent::Deleted => {
            ctx.notifications
                .push(notifications::Notification::info("notification-info-reset"));
        }
    }
    Task::none()
}

/// Opens the async file dialog for picking an upload.
///
/// The dialog starts in the last directory the user picked from, when that
/// directory still exists.
fn open_upload_dialog(ctx: &UpdateContext<'_>, slot: SlotId) -> Task<Message> {
    let filter_name = ctx.i18n.tr("dialog-image-filter");
    let last_directory = ctx.app_state.last_open_directory.clone();

    Task::perform(
        async move {
            let mut dialog =
                rfd::AsyncFileDialog::new().add_filter(filter_name, extensions::IMAGE_EXTENSIONS);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        move |path| Message::UploadDialogResult { slot, path },
    )
}

/// Handles the result of the upload file dialog.
pub fn handle_upload_dialog_result(
    ctx: &mut UpdateContext<'_>,
    slot: SlotId,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        // User cancelled the dialog
        return Task::none();
    };

    begin_upload_decode(ctx, slot, path)
}

/// Handles a file dropped on the window.
///
/// Drops are routed to whichever upload popup is open; decoding decides
/// whether the file is usable. Drops with no popup open are ignored.
pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    let Some(slot) = ctx.open_slot() else {
        return Task::none();
    };

    begin_upload_decode(ctx, slot, path)
}

/// Remembers the pick directory and kicks off the async decode for `path`.
fn begin_upload_decode(
    ctx: &mut UpdateContext<'_>,
    slot: SlotId,
    path: PathBuf,
) -> Task<Message> {
    ctx.app_state.set_last_open_directory_from_file(&path);
    if let Err(error) = ctx.app_state.save() {
        ctx.notifications.push(
            notifications::Notification::warning("notification-state-save-failed")
                .with_arg("reason", error.to_string()),
        );
    }

    let generation = ctx.slot_mut(slot).begin_decode();
    Task::perform(async move { media::load_upload(&path) }, move |result| {
        Message::UploadDecoded {
            slot,
            generation,
            result,
        }
    })
}

/// Handles a finished decode for a picked or dropped file.
///
/// Completions whose generation no longer matches the slot are dropped,
/// both successes and failures: the user has already moved on.
pub fn handle_upload_decoded(
    ctx: &mut UpdateContext<'_>,
    slot: SlotId,
    generation: u64,
    result: Result<UploadedImage, crate::error::DecodeError>,
) -> Task<Message> {
    if !ctx.slot_mut(slot).is_current_decode(generation) {
        return Task::none();
    }

    match result {
        Ok(upload) => {
            ctx.slot_mut(slot).apply_decoded(generation, upload);
            // A usable pick makes earlier decode complaints obsolete.
            ctx.notifications.clear_decode_errors();
        }
        Err(error) => {
            ctx.notifications
                .push(notifications::Notification::error(error.i18n_key()));
        }
    }

    Task::none()
}

/// Dismisses whichever popup is currently open.
pub fn handle_escape(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if let Some(slot) = ctx.open_slot() {
        ctx.slot_mut(slot).update(media_slot::Message::CloseRequested);
    } else if ctx.info.is_editing() {
        ctx.info.update(info_editor::Message::CloseRequested);
    }
    Task::none()
}

/// Closes any open popup other than the one belonging to `opened`.
fn close_sibling_popups(ctx: &mut UpdateContext<'_>, opened: SlotId) {
    for slot in SlotId::ALL {
        if slot != opened && ctx.slot_mut(slot).is_open() {
            ctx.slot_mut(slot).update(media_slot::Message::CloseRequested);
        }
    }
    if ctx.info.is_editing() {
        ctx.info.update(info_editor::Message::CloseRequested);
    }
}

/// Closes both media popups (used when the text editor opens).
fn close_media_popups(ctx: &mut UpdateContext<'_>) {
    for slot in SlotId::ALL {
        if ctx.slot_mut(slot).is_open() {
            ctx.slot_mut(slot).update(media_slot::Message::CloseRequested);
        }
    }
}
