// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every view.
//!
//! All magic numbers for color, spacing, sizing, type, borders and shadows
//! live here so the components stay free of ad-hoc values. The scales are
//! deliberately small; add a step only when a component needs it.
//!
//! ```
//! use candidate_studio::ui::design_tokens::{palette, spacing};
//! use iced::Color;
//!
//! let padding = spacing::MD;
//! let accent = palette::PRIMARY_500;
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.12, 0.12, 0.13);
    pub const GRAY_700: Color = Color::from_rgb(0.28, 0.28, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.45, 0.47);
    pub const GRAY_200: Color = Color::from_rgb(0.72, 0.72, 0.74);
    pub const GRAY_100: Color = Color::from_rgb(0.88, 0.88, 0.9);

    // Brand blues, darkest for pressed states
    pub const PRIMARY_400: Color = Color::from_rgb(0.36, 0.62, 0.92);
    pub const PRIMARY_500: Color = Color::from_rgb(0.25, 0.52, 0.85);
    pub const PRIMARY_600: Color = Color::from_rgb(0.18, 0.42, 0.72);

    // Severity accents, matched to the notification levels
    pub const ERROR_500: Color = Color::from_rgb(0.86, 0.24, 0.21);
    pub const WARNING_500: Color = Color::from_rgb(0.93, 0.62, 0.14);
    pub const SUCCESS_500: Color = Color::from_rgb(0.28, 0.68, 0.42);
    pub const INFO_500: Color = Color::from_rgb(0.36, 0.56, 0.95);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.85;

    /// Alpha for panels drawn over the page.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (multiples of a 8px unit)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;

    /// Thumbnail edge shown on the slot cards.
    pub const CARD_PREVIEW: f32 = 160.0;
    /// Maximum preview edge inside the upload popup.
    pub const POPUP_PREVIEW: f32 = 360.0;

    pub const DIALOG_WIDTH: f32 = 480.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page heading.
    pub const TITLE_LG: f32 = 30.0;
    /// Popup titles.
    pub const TITLE_MD: f32 = 20.0;
    /// Section headers and slot labels.
    pub const TITLE_SM: f32 = 18.0;
    /// Form inputs and the information text.
    pub const BODY_LG: f32 = 16.0;
    /// Buttons and most labels.
    pub const BODY: f32 = 14.0;
    /// Dismiss glyphs, secondary labels.
    pub const BODY_SM: f32 = 13.0;
    /// Hints.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Borders and Radii
// ============================================================================

pub mod border {
    /// Separators and input outlines.
    pub const WIDTH_SM: f32 = 1.0;
    /// Toast accents.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadows
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    /// Translucent black; shadows never use a fully opaque color.
    const TINT: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.45,
    };

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: TINT,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: TINT,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: TINT,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// Scale ordering is load-bearing for the views; break the build if an edit
// reorders a step.
const _: () = {
    assert!(spacing::XXS < spacing::XS);
    assert!(spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::MD);
    assert!(spacing::MD < spacing::LG);
    assert!(spacing::LG < spacing::XL);
    assert!(spacing::XL < spacing::XXL);

    assert!(sizing::CARD_PREVIEW < sizing::POPUP_PREVIEW);
    assert!(sizing::POPUP_PREVIEW < sizing::DIALOG_WIDTH);

    assert!(typography::CAPTION < typography::BODY_SM);
    assert!(typography::BODY_SM < typography::BODY);
    assert!(typography::BODY < typography::BODY_LG);
    assert!(typography::BODY_LG < typography::TITLE_SM);
    assert!(typography::TITLE_SM < typography::TITLE_MD);
    assert!(typography::TITLE_MD < typography::TITLE_LG);

    assert!(border::WIDTH_SM < border::WIDTH_MD);

    assert!(radius::SM < radius::MD);
    assert!(radius::MD < radius::LG);
};
