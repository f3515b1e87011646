// SPDX-License-Identifier: GPL-3.0-only

//! Question stage with the evasive refusal button
//!
//! The refusal button starts beside the accept button. Hovering it fires the
//! dodge before a press can land, and from then on the button floats over
//! the whole stage, pinned by flex weights so every jump spans the full
//! window.

use crate::app::state::{AppModel, Message, Mood};
use crate::fl;
use cosmic::Element;
use cosmic::iced::{Alignment, Length};
use cosmic::widget;

const MOOD_CUTE: &[u8] = include_bytes!("../../../resources/artwork/mood-cute.svg");
const MOOD_HAPPY: &[u8] = include_bytes!("../../../resources/artwork/mood-happy.svg");
const MOOD_SAD: &[u8] = include_bytes!("../../../resources/artwork/mood-sad.svg");

/// Mood artwork edge length
const ART_SIZE: u16 = 96;

impl AppModel {
    pub(crate) fn build_question_view(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let yes_button = widget::mouse_area(
            widget::button::suggested(fl!("yes-button")).on_press(Message::Accept),
        )
        .on_enter(Message::SetMood(Mood::Excited))
        .on_exit(Message::SetMood(Mood::Hopeful));

        let mut answers = widget::row().push(yes_button).spacing(0);
        if self.prompt.dodges == 0 {
            answers = answers
                .push(widget::horizontal_space().width(spacing.space_s))
                .push(self.build_refusal_button());
        }

        let mood = widget::icon(widget::icon::from_svg_bytes(mood_artwork(self.mood)))
            .size(ART_SIZE);

        let mut column = widget::column()
            .push(mood)
            .push(widget::vertical_space().height(spacing.space_m))
            .push(widget::text::heading(fl!("question-title")))
            .push(widget::vertical_space().height(spacing.space_l))
            .push(answers)
            .align_x(Alignment::Center)
            .spacing(0);

        if let Some(indicator) = self.build_recording_indicator() {
            column = column
                .push(widget::vertical_space().height(spacing.space_l))
                .push(indicator);
        }

        let page = widget::container(column).center(Length::Fill);

        if self.prompt.dodges == 0 {
            return page.into();
        }

        // The spacers ignore events, so the accept button stays clickable
        cosmic::iced::widget::stack![page, self.build_fleeing_button()]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// The refusal button at its current random spot over the whole stage
    fn build_fleeing_button(&self) -> Element<'_, Message> {
        let ((lead_x, trail_x), (lead_y, trail_y)) = self.prompt.fill_weights();

        let row = widget::row()
            .push(widget::horizontal_space().width(Length::FillPortion(lead_x)))
            .push(self.build_refusal_button())
            .push(widget::horizontal_space().width(Length::FillPortion(trail_x)))
            .width(Length::Fill)
            .spacing(0);

        widget::column()
            .push(widget::vertical_space().height(Length::FillPortion(lead_y)))
            .push(row)
            .push(widget::vertical_space().height(Length::FillPortion(trail_y)))
            .width(Length::Fill)
            .height(Length::Fill)
            .spacing(0)
            .into()
    }

    fn build_refusal_button(&self) -> Element<'_, Message> {
        let label = if self.prompt.dodges == 0 {
            fl!("no-button")
        } else {
            taunt(self.prompt.taunt_index)
        };

        widget::mouse_area(widget::button::standard(label).on_press(Message::DodgeNo))
            .on_enter(Message::DodgeNo)
            .on_exit(Message::SetMood(Mood::Hopeful))
            .into()
    }
}

/// Artwork for each mood the face can be in
fn mood_artwork(mood: Mood) -> &'static [u8] {
    match mood {
        Mood::Hopeful => MOOD_CUTE,
        Mood::Excited => MOOD_HAPPY,
        Mood::Sad => MOOD_SAD,
    }
}

/// Rotating refusal label
fn taunt(index: usize) -> String {
    match index {
        0 => fl!("taunt-0"),
        1 => fl!("taunt-1"),
        2 => fl!("taunt-2"),
        3 => fl!("taunt-3"),
        4 => fl!("taunt-4"),
        _ => fl!("taunt-5"),
    }
}
