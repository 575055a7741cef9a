// SPDX-License-Identifier: MPL-2.0
//! Window dimension defaults and floors.

/// Startup window width in logical pixels when the config says nothing.
pub const DEFAULT_WINDOW_WIDTH: f32 = 900.0;

/// Startup window height in logical pixels when the config says nothing.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 700.0;

/// Narrowest window the two-card layout still works at.
pub const MIN_WINDOW_WIDTH: f32 = 640.0;

/// Shortest window the two-card layout still works at.
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

const _: () = {
    assert!(MIN_WINDOW_WIDTH > 0.0);
    assert!(MIN_WINDOW_HEIGHT > 0.0);
    assert!(DEFAULT_WINDOW_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(DEFAULT_WINDOW_HEIGHT >= MIN_WINDOW_HEIGHT);
};
