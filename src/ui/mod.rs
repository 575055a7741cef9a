// SPDX-License-Identifier: MPL-2.0
//! User interface components, Elm style: state down, messages up.
//!
//! The two interactive components each own their state machine and views:
//!
//! - [`media_slot`] - picture slot cards with their preview/confirm popup
//! - [`info_editor`] - the free-text section with its edit popup
//!
//! The rest is shared chrome:
//!
//! - [`design_tokens`] - color, spacing, and sizing scales
//! - [`styles`] - button and container style functions built on the tokens
//! - [`theming`] - light/dark/system mode resolution
//! - [`notifications`] - toast queue and overlay

pub mod design_tokens;
pub mod info_editor;
pub mod media_slot;
pub mod notifications;
pub mod styles;
pub mod theming;
