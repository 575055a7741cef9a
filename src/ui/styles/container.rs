// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card surface for the two picture slots and the information section.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so cards stay readable in both light and dark modes without
/// hard-coding colors.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Recessed well behind picture previews.
pub fn image_well(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.strong.color)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Popup dialog surface.
pub fn dialog(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Dimming scrim behind an open popup.
pub fn backdrop(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

/// Page background, colored from the application scheme rather than the
/// built-in theme so the page tracks the configured mode.
pub fn page(surface: Color, text: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(surface)),
        text_color: Some(text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialog_has_visible_border_and_shadow() {
        let style = dialog(&Theme::Light);
        assert!(style.border.width > 0.0);
        assert!(style.shadow.blur_radius > 0.0);
    }

    #[test]
    fn backdrop_uses_given_color() {
        let scrim = Color {
            a: 0.7,
            ..Color::BLACK
        };
        let style = backdrop(scrim)(&Theme::Dark);
        assert_eq!(style.background, Some(Background::Color(scrim)));
    }

    #[test]
    fn page_applies_scheme_colors() {
        let style = page(Color::WHITE, Color::BLACK)(&Theme::Dark);
        assert_eq!(style.background, Some(Background::Color(Color::WHITE)));
        assert_eq!(style.text_color, Some(Color::BLACK));
    }
}
