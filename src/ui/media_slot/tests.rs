// SPDX-License-Identifier: MPL-2.0

use super::*;
use crate::media::{ImageData, MediaSource, SlotId, UploadedImage};

fn sample_image(width: u32, height: u32) -> ImageData {
    let pixels = vec![128; (width * height * 4) as usize];
    ImageData::from_rgba(width, height, pixels)
}

fn sample_upload(tag: &str) -> UploadedImage {
    UploadedImage {
        data_uri: format!("data:image/png;base64,{tag}"),
        image: sample_image(2, 2),
    }
}

fn profile_state() -> State {
    State::new(SlotId::Profile, sample_image(8, 8))
}

#[test]
fn new_state_is_closed_and_default() {
    let state = profile_state();

    assert!(!state.is_open());
    assert!(state.committed().is_default());
    assert!(state.preview().is_none());
    assert_eq!(state.slot(), SlotId::Profile);
}

#[test]
fn card_shows_default_artwork_until_something_is_committed() {
    let state = profile_state();
    assert_eq!(state.display_image().width, 8);
}

#[test]
fn open_seeds_preview_from_committed() {
    let mut state = profile_state();

    let event = state.update(Message::OpenRequested);

    assert_eq!(event, Event::Opened);
    assert!(state.is_open());
    assert_eq!(state.preview(), Some(&MediaSource::Default));
}

#[test]
fn open_with_committed_upload_previews_that_upload() {
    let mut state = profile_state();
    state.update(Message::OpenRequested);
    let generation = state.begin_decode();
    state.apply_decoded(generation, sample_upload("abc"));
    state.update(Message::ConfirmRequested);

    state.update(Message::OpenRequested);

    assert_eq!(
        state.preview().and_then(MediaSource::data_uri),
        Some("data:image/png;base64,abc")
    );
}

#[test]
fn choose_file_is_only_available_while_open() {
    let mut state = profile_state();
    assert_eq!(state.update(Message::ChooseFileRequested), Event::None);

    state.update(Message::OpenRequested);
    assert_eq!(
        state.update(Message::ChooseFileRequested),
        Event::FilePickRequested
    );
}

#[test]
fn apply_decoded_installs_preview() {
    let mut state = profile_state();
    state.update(Message::OpenRequested);

    let generation = state.begin_decode();
    assert!(state.apply_decoded(generation, sample_upload("fresh")));

    assert_eq!(
        state.preview().and_then(MediaSource::data_uri),
        Some("data:image/png;base64,fresh")
    );
    // Committed is untouched until confirm.
    assert!(state.committed().is_default());
}

#[test]
fn stale_decode_is_dropped_when_newer_pick_started() {
    let mut state = profile_state();
    state.update(Message::OpenRequested);

    let first = state.begin_decode();
    let second = state.begin_decode();

    assert!(!state.apply_decoded(first, sample_upload("old")));
    assert!(state.preview().is_some_and(MediaSource::is_default));

    assert!(state.apply_decoded(second, sample_upload("new")));
    assert_eq!(
        state.preview().and_then(MediaSource::data_uri),
        Some("data:image/png;base64,new")
    );
}

#[test]
fn decode_is_dropped_after_popup_closed() {
    let mut state = profile_state();
    state.update(Message::OpenRequested);
    let generation = state.begin_decode();

    state.update(Message::CloseRequested);

    assert!(!state.is_current_decode(generation));
    assert!(!state.apply_decoded(generation, sample_upload("late")));
    assert!(!state.is_open());
}

#[test]
fn decode_is_dropped_after_delete() {
    let mut state = profile_state();
    state.update(Message::OpenRequested);
    let generation = state.begin_decode();

    state.update(Message::DeleteRequested);

    assert!(!state.apply_decoded(generation, sample_upload("late")));
    assert!(state.committed().is_default());
}

#[test]
fn confirm_commits_preview_and_closes() {
    let mut state = profile_state();
    state.update(Message::OpenRequested);
    let generation = state.begin_decode();
    state.apply_decoded(generation, sample_upload("picked"));

    let event = state.update(Message::ConfirmRequested);

    assert_eq!(event, Event::Confirmed);
    assert!(!state.is_open());
    assert_eq!(
        state.committed().data_uri(),
        Some("data:image/png;base64,picked")
    );
    assert_eq!(state.display_image().width, 2);
}

#[test]
fn confirm_without_new_pick_keeps_committed_value() {
    let mut state = profile_state();
    state.update(Message::OpenRequested);

    let event = state.update(Message::ConfirmRequested);

    // Re-committing the seeded preview is a no-op for the card.
    assert_eq!(event, Event::Confirmed);
    assert!(state.committed().is_default());
    assert!(!state.is_open());
}

#[test]
fn confirm_while_closed_does_nothing() {
    let mut state = profile_state();
    assert_eq!(state.update(Message::ConfirmRequested), Event::None);
    assert!(state.committed().is_default());
}

#[test]
fn close_discards_preview_and_keeps_committed() {
    let mut state = profile_state();
    state.update(Message::OpenRequested);
    let generation = state.begin_decode();
    state.apply_decoded(generation, sample_upload("discarded"));

    state.update(Message::CloseRequested);

    assert!(!state.is_open());
    assert!(state.committed().is_default());
    assert!(state.preview().is_none());
}

#[test]
fn delete_resets_committed_and_closes() {
    let mut state = profile_state();
    state.update(Message::OpenRequested);
    let generation = state.begin_decode();
    state.apply_decoded(generation, sample_upload("doomed"));
    state.update(Message::ConfirmRequested);

    state.update(Message::OpenRequested);
    let event = state.update(Message::DeleteRequested);

    assert_eq!(event, Event::Deleted);
    assert!(!state.is_open());
    assert!(state.committed().is_default());
    assert_eq!(state.display_image().width, 8);
}

#[test]
fn reopen_after_close_seeds_from_committed_again() {
    let mut state = profile_state();
    state.update(Message::OpenRequested);
    let generation = state.begin_decode();
    state.apply_decoded(generation, sample_upload("kept"));
    state.update(Message::ConfirmRequested);

    state.update(Message::OpenRequested);
    state.update(Message::CloseRequested);
    state.update(Message::OpenRequested);

    assert_eq!(
        state.preview().and_then(MediaSource::data_uri),
        Some("data:image/png;base64,kept")
    );
}
