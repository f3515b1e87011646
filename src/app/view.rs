// SPDX-License-Identifier: GPL-3.0-only

//! Main application view
//!
//! Routes to the view for the current stage and layers the overlays on top:
//! particle effects over the celebration, the camera notice while it still
//! needs an answer, the capture alert until it is dismissed, and the fade
//! curtain while a stage settles in.

use crate::app::effects::build_effects_overlay;
use crate::app::state::{AppModel, Message, Stage};
use crate::constants::ui::OVERLAY_BACKGROUND_ALPHA;
use crate::fl;
use cosmic::Element;
use cosmic::iced::{Alignment, Background, Color, Length};
use cosmic::widget;

impl AppModel {
    /// Build the main application view
    pub fn view(&self) -> Element<'_, Message> {
        let stage_view: Element<'_, Message> = match self.stage {
            Stage::Landing => self.build_landing_view(),
            Stage::Question => self.build_question_view(),
            Stage::Celebration => self.build_celebration_view(),
            Stage::Keepsake => self.build_keepsake_view(),
        };

        let mut layers = cosmic::iced::widget::stack![stage_view];

        // The overlay widget ignores events, so clicks reach the stage below
        if self.stage == Stage::Celebration {
            layers = layers.push(build_effects_overlay(&self.confetti, &self.hearts));
        }

        // The keepsake stage presents the outcome itself
        if self.stage != Stage::Keepsake
            && let Some(error) = &self.capture_error
        {
            layers = layers.push(self.build_capture_alert(error));
        }

        if self.permission_pending {
            layers = layers.push(self.build_camera_notice());
        }

        if self.fade.is_active() {
            layers = layers.push(self.build_fade_curtain());
        }

        layers.width(Length::Fill).height(Length::Fill).into()
    }

    /// Camera notice modal shown over the landing stage
    fn build_camera_notice(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let buttons = widget::row()
            .push(
                widget::button::suggested(fl!("camera-prompt-continue"))
                    .on_press(Message::AnswerCameraNotice(true)),
            )
            .push(widget::horizontal_space().width(spacing.space_s))
            .push(
                widget::button::standard(fl!("camera-prompt-skip"))
                    .on_press(Message::AnswerCameraNotice(false)),
            )
            .spacing(0);

        let card = widget::column()
            .push(widget::text::heading(fl!("camera-prompt-title")))
            .push(widget::vertical_space().height(spacing.space_s))
            .push(widget::text::body(fl!("camera-prompt-body")))
            .push(widget::vertical_space().height(spacing.space_m))
            .push(buttons)
            .align_x(Alignment::Center)
            .spacing(0);

        let card = widget::container(card)
            .padding(spacing.space_l)
            .width(Length::Fixed(420.0))
            .class(cosmic::theme::Container::Card);

        let scrim = widget::container(card)
            .center(Length::Fill)
            .style(|_theme| widget::container::Style {
                background: Some(Background::Color(Color::from_rgba(
                    0.0,
                    0.0,
                    0.0,
                    OVERLAY_BACKGROUND_ALPHA,
                ))),
                ..Default::default()
            });

        // Swallow clicks beside the card so the stage below stays inert
        widget::mouse_area(scrim).on_press(Message::Noop).into()
    }

    /// Dismissible banner shown after the camera failed, without blocking
    /// the stage below
    fn build_capture_alert(&self, error: &str) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let card = widget::container(
            widget::row()
                .push(widget::text::body(error.to_owned()))
                .push(widget::horizontal_space().width(spacing.space_m))
                .push(
                    widget::button::standard(fl!("dismiss"))
                        .on_press(Message::DismissCaptureAlert),
                )
                .align_y(Alignment::Center)
                .spacing(0),
        )
        .padding(spacing.space_s)
        .class(cosmic::theme::Container::Card);

        widget::column()
            .push(widget::container(card).padding(spacing.space_m))
            .width(Length::Fill)
            .align_x(Alignment::Center)
            .into()
    }

    /// Opaque-to-transparent cover while a stage fades in
    fn build_fade_curtain(&self) -> Element<'_, Message> {
        let alpha = self.fade.curtain_alpha;

        let cover = widget::container(widget::Space::new(Length::Fill, Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| widget::container::Style {
                background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, alpha))),
                ..Default::default()
            });

        widget::mouse_area(cover).on_press(Message::Noop).into()
    }
}
