// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is a single screen: a header, the two media cards side by side,
//! and the free-text section below. The open popup and the toast overlay
//! render as stacked layers on top of the page.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::media::SlotId;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::info_editor;
use crate::ui::media_slot;
use crate::ui::notifications::{self, Toast};
use crate::ui::styles;
use crate::ui::theming::AppTheme;
use iced::widget::{center, mouse_area, opaque, Column, Container, Row, Stack, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme: &'a AppTheme,
    pub profile: &'a media_slot::State,
    pub poster: &'a media_slot::State,
    pub info: &'a info_editor::State,
    pub notifications: &'a notifications::Manager,
}

/// Renders the page with popup and toast layers stacked on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut layers = Stack::new().push(view_page(&ctx));

    if let Some(popup) = view_popup_layer(&ctx) {
        layers = layers.push(popup);
    }

    layers = layers.push(
        Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification),
    );

    layers.into()
}

fn view_page<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let slot_ctx = media_slot::ViewContext { i18n: ctx.i18n };
    let info_ctx = info_editor::ViewContext { i18n: ctx.i18n };

    let title = Text::new(ctx.i18n.tr("app-title")).size(typography::TITLE_LG);

    let cards = Row::new()
        .push(
            ctx.profile
                .view_card(&slot_ctx)
                .map(|m| Message::Slot(SlotId::Profile, m)),
        )
        .push(
            ctx.poster
                .view_card(&slot_ctx)
                .map(|m| Message::Slot(SlotId::Poster, m)),
        )
        .spacing(spacing::LG);

    let content = Column::new()
        .push(title)
        .push(cards)
        .push(ctx.info.view_section(&info_ctx).map(Message::Info))
        .spacing(spacing::XL);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .padding(spacing::XL)
        .style(styles::container::page(
            ctx.theme.colors.surface,
            ctx.theme.colors.text,
        ))
        .into()
}

/// Renders the open popup as a modal layer, or `None` when all are closed.
fn view_popup_layer<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    let slot_ctx = media_slot::ViewContext { i18n: ctx.i18n };

    if ctx.profile.is_open() {
        let dialog = ctx
            .profile
            .view_popup(&slot_ctx)
            .map(|m| Message::Slot(SlotId::Profile, m));
        return Some(modal_layer(
            ctx.theme,
            dialog,
            Message::Slot(SlotId::Profile, media_slot::Message::CloseRequested),
        ));
    }

    if ctx.poster.is_open() {
        let dialog = ctx
            .poster
            .view_popup(&slot_ctx)
            .map(|m| Message::Slot(SlotId::Poster, m));
        return Some(modal_layer(
            ctx.theme,
            dialog,
            Message::Slot(SlotId::Poster, media_slot::Message::CloseRequested),
        ));
    }

    if ctx.info.is_editing() {
        let info_ctx = info_editor::ViewContext { i18n: ctx.i18n };
        let dialog = ctx.info.view_popup(&info_ctx).map(Message::Info);
        return Some(modal_layer(
            ctx.theme,
            dialog,
            Message::Info(info_editor::Message::CloseRequested),
        ));
    }

    None
}

/// Dims the page behind `dialog` and dismisses the popup when the backdrop
/// is clicked. The dialog itself swallows clicks so only true outside
/// clicks dismiss.
fn modal_layer<'a>(
    theme: &AppTheme,
    dialog: Element<'a, Message>,
    on_dismiss: Message,
) -> Element<'a, Message> {
    let backdrop = center(opaque(dialog))
        .style(styles::container::backdrop(theme.colors.overlay_background));

    opaque(mouse_area(backdrop).on_press(on_dismiss))
}
