// SPDX-License-Identifier: MPL-2.0
//! Information field message/event types re-exported by the facade.

/// Messages emitted by the information section and its popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Open the edit popup, seeded with the current text.
    EditRequested,
    /// The popup input changed.
    InputChanged(String),
    /// Save the draft to the page.
    SaveRequested,
    /// Reset the field to its placeholder text.
    DeleteRequested,
    /// Close the popup, discarding the draft.
    CloseRequested,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// The popup opened; the parent closes any other popup.
    Opened,
    /// The draft was saved.
    Saved,
    /// The field was reset to its placeholder.
    Deleted,
}
