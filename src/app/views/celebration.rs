// SPDX-License-Identifier: GPL-3.0-only

//! Celebration stage with the slideshow and recording indicator

use crate::app::state::{AppModel, Message};
use crate::fl;
use crate::slideshow::SLIDE_ART;
use cosmic::Element;
use cosmic::iced::{Alignment, Color, Length};
use cosmic::widget;

/// Slide artwork edge length
const ART_SIZE: u16 = 96;

/// Caption opacity during the mid-change dip
const DIP_ALPHA: f32 = 0.15;

impl AppModel {
    pub(crate) fn build_celebration_view(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let mut column = widget::column()
            .push(widget::text::heading(fl!("celebration-title")))
            .push(widget::vertical_space().height(spacing.space_l))
            .push(self.build_slide())
            .align_x(Alignment::Center)
            .spacing(0);

        if let Some(indicator) = self.build_recording_indicator() {
            column = column
                .push(widget::vertical_space().height(spacing.space_l))
                .push(indicator);
        }

        widget::container(column).center(Length::Fill).into()
    }

    /// The visible slide. During the mid-change dip the artwork is held
    /// out of view and the caption dims, then the next slide swaps in.
    fn build_slide(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let Some(index) = self.slideshow.current_index() else {
            return widget::text::heading(fl!("celebration-complete")).into();
        };

        let artwork: Element<'_, Message> = if self.slideshow.is_fading() {
            widget::Space::new(
                Length::Fixed(f32::from(ART_SIZE)),
                Length::Fixed(f32::from(ART_SIZE)),
            )
            .into()
        } else {
            widget::icon(widget::icon::from_svg_bytes(SLIDE_ART[index]))
                .size(ART_SIZE)
                .into()
        };

        let caption = widget::container(widget::text(slide_caption(index)).size(20));
        let caption = if self.slideshow.is_fading() {
            caption.style(|_theme| widget::container::Style {
                text_color: Some(Color::from_rgba(0.5, 0.5, 0.5, DIP_ALPHA)),
                ..Default::default()
            })
        } else {
            caption
        };

        widget::column()
            .push(artwork)
            .push(widget::vertical_space().height(spacing.space_s))
            .push(caption)
            .align_x(Alignment::Center)
            .spacing(0)
            .into()
    }
}

/// Caption under each slide
fn slide_caption(index: usize) -> String {
    match index {
        0 => fl!("slide-caption-0"),
        1 => fl!("slide-caption-1"),
        2 => fl!("slide-caption-2"),
        3 => fl!("slide-caption-3"),
        4 => fl!("slide-caption-4"),
        5 => fl!("slide-caption-5"),
        6 => fl!("slide-caption-6"),
        _ => fl!("slide-caption-7"),
    }
}
