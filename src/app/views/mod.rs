// SPDX-License-Identifier: GPL-3.0-only

//! Stage views
//!
//! One module per stage of the card, plus the settings drawer. Each view is
//! a method on `AppModel` so it can read state directly.

use crate::app::state::{AppModel, Message};
use crate::constants::format_elapsed;
use crate::fl;
use cosmic::Element;
use cosmic::iced::{Alignment, Background, Color, Length};
use cosmic::widget;

mod celebration;
mod keepsake;
mod landing;
mod question;
mod settings;

impl AppModel {
    /// Red dot and elapsed time, shown on any stage while the reaction
    /// records
    pub(crate) fn build_recording_indicator(&self) -> Option<Element<'_, Message>> {
        if !self.capture.is_rolling() {
            return None;
        }

        let spacing = cosmic::theme::spacing();

        let red_dot =
            widget::container(widget::Space::new(Length::Fixed(12.0), Length::Fixed(12.0))).style(
                |_theme| widget::container::Style {
                    background: Some(Background::Color(Color::from_rgb(1.0, 0.0, 0.0))),
                    border: cosmic::iced::Border {
                        radius: [6.0; 4].into(),
                        ..Default::default()
                    },
                    ..Default::default()
                },
            );

        let row = widget::row()
            .push(red_dot)
            .push(widget::horizontal_space().width(spacing.space_xxs))
            .push(widget::text(fl!("recording")).size(14))
            .push(widget::horizontal_space().width(spacing.space_xxs))
            .push(widget::text(format_elapsed(self.capture.elapsed_seconds())).size(14))
            .align_y(Alignment::Center)
            .spacing(0);

        Some(row.into())
    }
}
