// SPDX-License-Identifier: MPL-2.0
//! Slot message/event types re-exported by the facade.

/// Messages emitted by the slot card and its popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Open the preview popup for this slot.
    OpenRequested,
    /// Pick a replacement file from disk.
    ChooseFileRequested,
    /// Commit the popup preview to the page card.
    ConfirmRequested,
    /// Reset the slot to its default artwork.
    DeleteRequested,
    /// Close the popup, discarding the preview.
    CloseRequested,
}

/// Events propagated to the parent application for side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// The popup opened; the parent closes any other popup.
    Opened,
    /// Request to open the file picker dialog.
    FilePickRequested,
    /// The preview was committed.
    Confirmed,
    /// The slot was reset to its default artwork.
    Deleted,
}
