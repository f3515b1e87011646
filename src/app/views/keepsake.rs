// SPDX-License-Identifier: GPL-3.0-only

//! Keepsake stage showing where the reaction landed

use crate::app::state::{AppModel, Message};
use crate::fl;
use cosmic::Element;
use cosmic::iced::{Alignment, Length};
use cosmic::widget;

const KEEPSAKE_ART: &[u8] = include_bytes!("../../../resources/artwork/keepsake.svg");

/// Artwork edge length
const ART_SIZE: u16 = 96;

impl AppModel {
    pub(crate) fn build_keepsake_view(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let mut column = widget::column()
            .push(widget::icon(widget::icon::from_svg_bytes(KEEPSAKE_ART)).size(ART_SIZE))
            .push(widget::vertical_space().height(spacing.space_m))
            .push(widget::text::heading(fl!("keepsake-title")))
            .push(widget::vertical_space().height(spacing.space_xs))
            .push(widget::text::body(fl!("keepsake-subtitle")))
            .push(widget::vertical_space().height(spacing.space_l))
            .align_x(Alignment::Center)
            .spacing(0);

        column = if let Some(path) = self.capture.artifact() {
            let buttons = widget::row()
                .push(
                    widget::button::suggested(fl!("play-reaction")).on_press(Message::PlayReaction),
                )
                .push(widget::horizontal_space().width(spacing.space_s))
                .push(
                    widget::button::standard(fl!("show-in-folder"))
                        .on_press(Message::ShowReactionInFolder),
                )
                .spacing(0);

            column
                .push(widget::text::body(fl!("reaction-saved")))
                .push(widget::vertical_space().height(spacing.space_xxs))
                .push(
                    widget::text(path.display().to_string())
                        .size(12)
                        .class(cosmic::theme::Text::Accent),
                )
                .push(widget::vertical_space().height(spacing.space_m))
                .push(buttons)
        } else if self.capture.is_finalizing() {
            column.push(widget::text::body(fl!("reaction-finalizing")))
        } else if let Some(error) = self.capture_error.clone() {
            column.push(widget::text::body(error))
        } else {
            column.push(widget::text::body(fl!("reaction-missing")))
        };

        widget::container(column).center(Length::Fill).into()
    }
}
