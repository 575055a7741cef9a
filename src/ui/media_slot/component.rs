// SPDX-License-Identifier: MPL-2.0
//! Public-facing view helpers and constructor for the slot facade.

use crate::media::{ImageData, MediaSource, SlotId};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::Image;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length};

use super::{Message, State};

/// Contextual data needed to render the slot views.
pub struct ViewContext<'a> {
    pub i18n: &'a crate::i18n::fluent::I18n,
}

impl State {
    /// Create the state for a slot, showing its default artwork.
    pub fn new(slot: SlotId, default_image: ImageData) -> Self {
        Self {
            slot,
            committed: MediaSource::Default,
            pending: None,
            decode_generation: 0,
            default_image,
        }
    }

    /// Render the page card for this slot.
    pub fn view_card<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let label = Text::new(ctx.i18n.tr(self.slot().label_key())).size(typography::TITLE_SM);

        let picture = Container::new(
            Image::new(self.display_image().handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fixed(sizing::CARD_PREVIEW))
                .height(Length::Fixed(sizing::CARD_PREVIEW)),
        )
        .padding(spacing::XXS)
        .style(styles::container::image_well);

        let open_button = button(Text::new(ctx.i18n.tr("slot-open-button")).size(typography::BODY))
            .on_press(Message::OpenRequested)
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::secondary);

        let content = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(label)
            .push(picture)
            .push(open_button);

        Container::new(content)
            .padding(spacing::MD)
            .style(styles::container::card)
            .into()
    }

    /// Render the preview popup. Call only while [`is_open`](Self::is_open).
    pub fn view_popup<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let title =
            Text::new(ctx.i18n.tr(self.slot().popup_title_key())).size(typography::TITLE_MD);

        // Falls back to the card picture if rendered while closed.
        let preview = self.preview_image().unwrap_or_else(|| self.display_image());
        let picture = Container::new(
            Image::new(preview.handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fixed(sizing::POPUP_PREVIEW))
                .height(Length::Fixed(sizing::POPUP_PREVIEW)),
        )
        .padding(spacing::XS)
        .style(styles::container::image_well);

        let hint = Text::new(ctx.i18n.tr("popup-formats-hint")).size(typography::CAPTION);

        let buttons = Row::new()
            .spacing(spacing::XS)
            .push(popup_button(
                ctx.i18n.tr("popup-choose-button"),
                Message::ChooseFileRequested,
                styles::button::secondary,
            ))
            .push(popup_button(
                ctx.i18n.tr("popup-confirm-button"),
                Message::ConfirmRequested,
                styles::button::primary,
            ))
            .push(popup_button(
                ctx.i18n.tr("popup-delete-button"),
                Message::DeleteRequested,
                styles::button::danger,
            ))
            .push(popup_button(
                ctx.i18n.tr("popup-close-button"),
                Message::CloseRequested,
                styles::button::secondary,
            ));

        let content = Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(title)
            .push(picture)
            .push(hint)
            .push(buttons);

        Container::new(content)
            .width(Length::Fixed(sizing::DIALOG_WIDTH))
            .padding(spacing::LG)
            .style(styles::container::dialog)
            .into()
    }
}

fn popup_button<'a>(
    label: String,
    message: Message,
    style: fn(&iced::Theme, button::Status) -> button::Style,
) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XXS, spacing::SM])
        .style(style)
        .into()
}
