// SPDX-License-Identifier: GPL-3.0-only

//! Landing stage with the sealed envelope
//!
//! The envelope opens in two steps: the first press lifts the flap, the
//! second takes the letter out and moves to the question.

use crate::app::state::{AppModel, Message};
use crate::fl;
use cosmic::Element;
use cosmic::iced::{Alignment, Length};
use cosmic::widget;

const ENVELOPE_CLOSED: &[u8] = include_bytes!("../../../resources/artwork/envelope-closed.svg");
const ENVELOPE_OPEN: &[u8] = include_bytes!("../../../resources/artwork/envelope-open.svg");

/// Envelope artwork edge length
const ART_SIZE: u16 = 128;

impl AppModel {
    pub(crate) fn build_landing_view(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let artwork_bytes = if self.envelope_open {
            ENVELOPE_OPEN
        } else {
            ENVELOPE_CLOSED
        };
        let envelope = widget::mouse_area(
            widget::icon(widget::icon::from_svg_bytes(artwork_bytes)).size(ART_SIZE),
        )
        .on_press(if self.envelope_open {
            Message::ReadLetter
        } else {
            Message::OpenEnvelope
        });

        let hint = if self.envelope_open {
            fl!("landing-open-hint")
        } else {
            fl!("landing-hint")
        };

        let action = if self.envelope_open {
            widget::button::suggested(fl!("open-letter")).on_press(Message::ReadLetter)
        } else {
            widget::button::suggested(fl!("open-envelope")).on_press(Message::OpenEnvelope)
        };

        let column = widget::column()
            .push(envelope)
            .push(widget::vertical_space().height(spacing.space_m))
            .push(widget::text::heading(fl!("landing-title")))
            .push(widget::vertical_space().height(spacing.space_xs))
            .push(widget::text::body(hint))
            .push(widget::vertical_space().height(spacing.space_l))
            .push(action)
            .align_x(Alignment::Center)
            .spacing(0);

        widget::container(column).center(Length::Fill).into()
    }
}
