// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use candidate_studio::ui::design_tokens::{palette, sizing, spacing};
    use candidate_studio::ui::styles::{button, container};
    use candidate_studio::ui::theming::{AppTheme, ThemeMode};
    use iced::Theme;

    #[test]
    fn all_button_styles_compile() {
        let theme = Theme::Light;

        // Smoke-test all button styles compile and are callable
        let _ = button::primary(&theme, iced::widget::button::Status::Active);
        let _ = button::secondary(&theme, iced::widget::button::Status::Hovered);
        let _ = button::danger(&theme, iced::widget::button::Status::Pressed);
    }

    #[test]
    fn all_container_styles_compile() {
        let theme = Theme::Light;
        let app_theme = AppTheme::new(ThemeMode::Light);

        let _ = container::card(&theme);
        let _ = container::image_well(&theme);
        let _ = container::dialog(&theme);
        let _ = container::backdrop(app_theme.colors.overlay_background)(&theme);
    }

    #[test]
    fn design_tokens_are_accessible() {
        // Palette
        let _ = palette::PRIMARY_500;
        let _ = palette::WHITE;

        // Spacing
        let _ = spacing::MD;

        // Sizing
        let _ = sizing::CARD_PREVIEW;
        let _ = sizing::POPUP_PREVIEW;
    }

    #[test]
    fn theming_switches_correctly() {
        let light = AppTheme::new(ThemeMode::Light);
        let dark = AppTheme::new(ThemeMode::Dark);

        // Surface colors should be visually opposite between light and dark
        assert!(light.colors.surface.r > dark.colors.surface.r);

        // Text colors should also be opposite between light and dark
        assert!(light.colors.text.r < dark.colors.text.r);
    }
}
