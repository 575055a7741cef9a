// SPDX-License-Identifier: MPL-2.0
//! Localization via Fluent.
//!
//! Catalogs for each supported locale are embedded into the binary and
//! can be overridden from a directory at startup. Locale selection
//! prefers the CLI flag, then the config file, then the OS locale, and
//! every lookup falls back to a visible `MISSING:` marker rather than an
//! empty string.

pub mod fluent;
