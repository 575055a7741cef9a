// SPDX-License-Identifier: MPL-2.0
//! Toast cards and the bottom-right overlay that stacks them.
//!
//! A toast is one row: severity glyph, localized message, dismiss button.
//! Messages are resolved from their Fluent key at render time, so open
//! toasts follow a language switch like the rest of the UI.

use super::manager::{Manager, Message};
use super::notification::{Notification, Severity};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, Column, Container, Row};
use iced::{alignment, Color, Element, Length, Theme};

pub struct Toast;

impl Toast {
    /// Renders one notification as a card.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let severity = notification.severity();
        let accent = severity.color();

        let glyph = text(Self::severity_glyph(severity))
            .size(sizing::ICON_SM)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent),
            });

        let message = text(resolve_message(notification, i18n))
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        let dismiss = button(text("✕").size(typography::BODY_SM))
            .on_press(Message::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(glyph).padding(spacing::XXS))
            .push(
                Container::new(message)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| card_style(theme, accent))
            .into()
    }

    /// Renders every visible toast, stacked in the bottom-right corner.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        let cards: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|notification| Self::view(notification, i18n))
            .collect();

        if cards.is_empty() {
            return Column::new().into();
        }

        let stack = Column::with_children(cards)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(stack)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }

    fn severity_glyph(severity: Severity) -> &'static str {
        match severity {
            Severity::Success => "✓",
            Severity::Info => "ℹ",
            Severity::Warning | Severity::Error => "⚠",
        }
    }
}

/// Looks up the toast text, passing along any message arguments.
fn resolve_message(notification: &Notification, i18n: &I18n) -> String {
    if notification.message_args().is_empty() {
        return i18n.tr(notification.message_key());
    }

    let args: Vec<(&str, &str)> = notification
        .message_args()
        .iter()
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect();
    i18n.tr_with_args(notification.message_key(), &args)
}

/// Card background from the theme, border from the severity accent.
fn card_style(theme: &Theme, accent: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = theme.extended_palette().background.base.text;

    match status {
        button::Status::Active => ghost(None, text_color),
        button::Status::Hovered => ghost(Some(opacity::OVERLAY_SUBTLE), text_color),
        button::Status::Pressed => ghost(Some(opacity::OVERLAY_MEDIUM), text_color),
        button::Status::Disabled => ghost(
            None,
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..text_color
            },
        ),
    }
}

/// Borderless button chrome; `tint` is the alpha of a gray wash, if any.
fn ghost(tint: Option<f32>, text_color: Color) -> button::Style {
    button::Style {
        background: tint.map(|a| {
            iced::Background::Color(Color {
                a,
                ..palette::GRAY_400
            })
        }),
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_border_carries_the_severity_accent() {
        let style = card_style(&Theme::Dark, palette::SUCCESS_500);

        assert_eq!(style.border.color, palette::SUCCESS_500);
        assert!(style.background.is_some());
    }

    #[test]
    fn every_severity_has_a_glyph() {
        for severity in [
            Severity::Success,
            Severity::Info,
            Severity::Warning,
            Severity::Error,
        ] {
            assert!(!Toast::severity_glyph(severity).is_empty());
        }
    }

    #[test]
    fn success_and_warning_read_differently() {
        assert_ne!(
            Toast::severity_glyph(Severity::Success),
            Toast::severity_glyph(Severity::Warning)
        );
    }

    #[test]
    fn dismiss_button_is_transparent_at_rest() {
        let style = dismiss_button_style(&Theme::Light, button::Status::Active);
        assert!(style.background.is_none());

        let hovered = dismiss_button_style(&Theme::Light, button::Status::Hovered);
        assert!(hovered.background.is_some());
    }
}
