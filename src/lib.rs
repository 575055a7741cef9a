// SPDX-License-Identifier: MPL-2.0
//! `candidate_studio` is a small desktop tool for staging a candidate page:
//! a profile picture, a poster image, and a free-text blurb, each edited
//! through its own popup before changes are committed.
//!
//! Built on the Iced GUI framework, with Fluent catalogs for the UI text
//! and preferences that persist between runs.

#![doc(html_root_url = "https://docs.rs/candidate_studio/0.1.0")]

pub mod app;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
