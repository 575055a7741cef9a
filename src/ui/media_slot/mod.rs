// SPDX-License-Identifier: MPL-2.0
//! A managed picture slot with a preview popup.
//!
//! This module follows a "state down, messages up" pattern like the other
//! components. The slot shows its committed picture on the page card; the
//! popup works on a pending copy and only touches the committed picture when
//! the operator explicitly confirms.

use crate::media::{ImageData, MediaSource, SlotId, UploadedImage};

mod component;
mod messages;

pub use component::ViewContext;
pub use messages::{Event, Message};

/// Local UI state for one picture slot.
#[derive(Debug)]
pub struct State {
    /// Which slot this is (profile or poster).
    slot: SlotId,
    /// The picture shown on the page card.
    committed: MediaSource,
    /// Popup working copy. `Some` while the popup is open.
    pending: Option<MediaSource>,
    /// Sequence number for in-flight decodes; stale completions are dropped.
    decode_generation: u64,
    /// Decoded default artwork, shown when a source is [`MediaSource::Default`].
    default_image: ImageData,
}

impl State {
    /// Update the state and emit an [`Event`] for the parent when needed.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::OpenRequested => {
                self.pending = Some(self.committed.clone());
                Event::Opened
            }
            Message::ChooseFileRequested => {
                if self.is_open() {
                    Event::FilePickRequested
                } else {
                    Event::None
                }
            }
            Message::ConfirmRequested => {
                if let Some(pending) = self.pending.take() {
                    self.committed = pending;
                    self.invalidate_decodes();
                    Event::Confirmed
                } else {
                    Event::None
                }
            }
            Message::DeleteRequested => {
                self.committed = MediaSource::Default;
                self.pending = None;
                self.invalidate_decodes();
                Event::Deleted
            }
            Message::CloseRequested => {
                self.pending = None;
                self.invalidate_decodes();
                Event::None
            }
        }
    }

    /// Which slot this state manages.
    pub fn slot(&self) -> SlotId {
        self.slot
    }

    /// The committed source shown on the page card.
    pub fn committed(&self) -> &MediaSource {
        &self.committed
    }

    /// The popup working copy, if the popup is open.
    pub fn preview(&self) -> Option<&MediaSource> {
        self.pending.as_ref()
    }

    /// Whether the preview popup is open.
    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    /// Pixels for the page card.
    pub fn display_image(&self) -> &ImageData {
        self.image_for(&self.committed)
    }

    /// Pixels for the popup preview, while the popup is open.
    pub fn preview_image(&self) -> Option<&ImageData> {
        self.pending.as_ref().map(|source| self.image_for(source))
    }

    /// Starts a new decode and returns its generation token.
    ///
    /// The token must be handed back to [`apply_decoded`](Self::apply_decoded)
    /// when the decode completes; an older token means a newer pick or a
    /// popup close superseded the decode.
    pub fn begin_decode(&mut self) -> u64 {
        self.decode_generation += 1;
        self.decode_generation
    }

    /// Installs a decoded upload as the popup preview.
    ///
    /// Returns `false` when the completion is stale (the popup closed or a
    /// newer pick started since `generation` was issued); stale results are
    /// dropped without touching any state.
    pub fn apply_decoded(&mut self, generation: u64, upload: UploadedImage) -> bool {
        if !self.is_current_decode(generation) {
            return false;
        }
        self.pending = Some(MediaSource::Upload(upload));
        true
    }

    /// Whether a decode started with `generation` is still the one the
    /// open popup is waiting for.
    pub fn is_current_decode(&self, generation: u64) -> bool {
        generation == self.decode_generation && self.is_open()
    }

    fn invalidate_decodes(&mut self) {
        self.decode_generation += 1;
    }

    fn image_for<'a>(&'a self, source: &'a MediaSource) -> &'a ImageData {
        match source {
            MediaSource::Default => &self.default_image,
            MediaSource::Upload(upload) => &upload.image,
        }
    }
}

#[cfg(test)]
mod tests;
