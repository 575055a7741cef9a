// SPDX-License-Identifier: MPL-2.0
//! Public-facing view helpers for the information field facade.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

use super::{Message, State, PLACEHOLDER};

/// Contextual data needed to render the information field views.
pub struct ViewContext<'a> {
    pub i18n: &'a crate::i18n::fluent::I18n,
}

impl State {
    /// Render the page section showing the saved text.
    pub fn view_section<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let title =
            Text::new(ctx.i18n.tr("info-section-title")).size(typography::TITLE_SM);

        let body = Text::new(self.displayed())
            .size(typography::BODY_LG)
            .width(Length::Fill);

        let edit_button = button(Text::new(ctx.i18n.tr("info-edit-button")).size(typography::BODY))
            .on_press(Message::EditRequested)
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::secondary);

        let content = Column::new()
            .spacing(spacing::SM)
            .push(title)
            .push(body)
            .push(
                Row::new()
                    .width(Length::Fill)
                    .align_y(alignment::Vertical::Center)
                    .push(iced::widget::space::horizontal())
                    .push(edit_button),
            );

        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::MD)
            .style(styles::container::card)
            .into()
    }

    /// Render the edit popup. Call only while [`is_editing`](Self::is_editing).
    pub fn view_popup<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let title = Text::new(ctx.i18n.tr("info-popup-title")).size(typography::TITLE_MD);

        let input = text_input(PLACEHOLDER, self.draft().unwrap_or(""))
            .on_input(Message::InputChanged)
            .on_submit(Message::SaveRequested)
            .size(typography::BODY_LG)
            .padding(spacing::SM);

        let save_button = button(Text::new(ctx.i18n.tr("popup-save-button")).size(typography::BODY))
            .on_press(Message::SaveRequested)
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::primary);

        let delete_button =
            button(Text::new(ctx.i18n.tr("popup-delete-button")).size(typography::BODY))
                .on_press(Message::DeleteRequested)
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::danger);

        let close_button =
            button(Text::new(ctx.i18n.tr("popup-close-button")).size(typography::BODY))
                .on_press(Message::CloseRequested)
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::secondary);

        let buttons = Row::new()
            .spacing(spacing::XS)
            .push(save_button)
            .push(delete_button)
            .push(close_button);

        let content = Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(title)
            .push(input)
            .push(buttons);

        Container::new(content)
            .width(Length::Fixed(sizing::DIALOG_WIDTH))
            .padding(spacing::LG)
            .style(styles::container::dialog)
            .into()
    }
}
