// SPDX-License-Identifier: MPL-2.0
//! The free-text information field and its edit popup.
//!
//! Same "state down, messages up" pattern as the picture slots: the page
//! shows the saved text, the popup works on a draft, and only an explicit
//! save writes the draft back.

mod component;
mod messages;

pub use component::ViewContext;
pub use messages::{Event, Message};

/// Text shown until the operator saves something of their own, and restored
/// by a delete. The page treats it as ordinary content, not a hint.
pub const PLACEHOLDER: &str = "Type your information here...";

/// Local UI state for the information field.
#[derive(Debug)]
pub struct State {
    /// The text shown on the page.
    displayed: String,
    /// Popup draft. `Some` while the edit popup is open.
    draft: Option<String>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            displayed: PLACEHOLDER.to_owned(),
            draft: None,
        }
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the state and emit an [`Event`] for the parent when needed.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::EditRequested => {
                self.draft = Some(self.displayed.clone());
                Event::Opened
            }
            Message::InputChanged(value) => {
                if self.draft.is_some() {
                    self.draft = Some(value);
                }
                Event::None
            }
            Message::SaveRequested => {
                if let Some(draft) = self.draft.take() {
                    // The page never shows an empty field.
                    self.displayed = if draft.is_empty() {
                        PLACEHOLDER.to_owned()
                    } else {
                        draft
                    };
                    Event::Saved
                } else {
                    Event::None
                }
            }
            Message::DeleteRequested => {
                self.displayed = PLACEHOLDER.to_owned();
                self.draft = None;
                Event::Deleted
            }
            Message::CloseRequested => {
                self.draft = None;
                Event::None
            }
        }
    }

    /// The text shown on the page.
    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    /// The popup draft, if the popup is open.
    pub fn draft(&self) -> Option<&str> {
        self.draft.as_deref()
    }

    /// Whether the edit popup is open.
    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }
}
