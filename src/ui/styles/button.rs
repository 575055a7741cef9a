// SPDX-License-Identifier: MPL-2.0
//! Button styles for the page and popup actions.

use crate::ui::design_tokens::{border, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

/// Filled rectangle with the standard radius; every variant below is a
/// parameterization of this shape.
fn filled(bg: Color, text: Color, outline: Color, shadow: Shadow) -> button::Style {
    button::Style {
        background: Some(Background::Color(bg)),
        text_color: text,
        border: Border {
            color: outline,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

/// Multiplies the RGB channels, clamped to the displayable range.
fn scaled(color: Color, factor: f32) -> Color {
    Color {
        r: (color.r * factor).min(1.0),
        g: (color.g * factor).min(1.0),
        b: (color.b * factor).min(1.0),
        a: color.a,
    }
}

/// Primary action (confirm upload, save).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => filled(
            palette::PRIMARY_500,
            palette::WHITE,
            palette::PRIMARY_600,
            shadow::SM,
        ),
        button::Status::Hovered => filled(
            palette::PRIMARY_400,
            palette::WHITE,
            palette::PRIMARY_500,
            shadow::MD,
        ),
        button::Status::Disabled => filled(
            palette::GRAY_400,
            palette::GRAY_200,
            palette::GRAY_400,
            shadow::NONE,
        ),
    }
}

/// Secondary action (change picture, choose file, cancel). Follows the
/// light or dark theme.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let (bg, text) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, palette::WHITE)
    };

    match status {
        button::Status::Active | button::Status::Pressed => {
            filled(bg, text, palette::GRAY_400, shadow::NONE)
        }
        button::Status::Hovered => {
            let hover = if is_light {
                palette::GRAY_200
            } else {
                scaled(palette::GRAY_700, 1.25)
            };
            filled(hover, text, palette::PRIMARY_500, shadow::SM)
        }
        button::Status::Disabled => filled(bg, palette::GRAY_400, palette::GRAY_400, shadow::NONE),
    }
}

/// Destructive action (delete picture, delete text).
pub fn danger(_theme: &Theme, status: button::Status) -> button::Style {
    let base = palette::ERROR_500;

    match status {
        button::Status::Active | button::Status::Pressed => {
            filled(base, palette::WHITE, scaled(base, 0.8), shadow::SM)
        }
        button::Status::Hovered => filled(scaled(base, 1.1), palette::WHITE, base, shadow::MD),
        button::Status::Disabled => filled(
            palette::GRAY_400,
            palette::GRAY_200,
            palette::GRAY_400,
            shadow::NONE,
        ),
    }
}
