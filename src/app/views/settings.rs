// SPDX-License-Identifier: GPL-3.0-only

//! Settings drawer view

use crate::app::state::{AppModel, ContextPage, Message};
use crate::constants::app_info;
use crate::fl;
use cosmic::Element;
use cosmic::app::context_drawer;
use cosmic::iced::{Alignment, Length};
use cosmic::widget;

impl AppModel {
    /// Create the settings view for the context drawer
    ///
    /// Shows the theme preference and the music options.
    pub fn settings_view(&self) -> context_drawer::ContextDrawer<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let theme_dropdown = widget::dropdown(
            &self.theme_dropdown_options,
            Some(self.config.app_theme as usize),
            Message::SetAppTheme,
        );

        let autoplay_toggle =
            widget::toggler(self.config.music_enabled).on_toggle(|_| Message::ToggleMusicAutoplay);

        let volume_slider =
            widget::slider(0..=100u32, self.config.music_volume, Message::SetMusicVolume);

        let track_label = self
            .config
            .music_track
            .as_deref()
            .and_then(|path| std::path::Path::new(path).file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| fl!("music-track-default"));

        let choose_track_button =
            widget::button::standard(fl!("choose-track")).on_press(Message::ChooseMusicTrack);

        // Version info string
        let version_info = if app_info::is_flatpak() {
            format!("Version {} (Flatpak)", app_info::version())
        } else {
            format!("Version {}", app_info::version())
        };

        let settings_column: Element<'_, Message> = widget::column()
            .push(
                widget::text(fl!("appearance"))
                    .size(16)
                    .font(cosmic::font::bold()),
            )
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(theme_dropdown)
            .push(widget::vertical_space().height(spacing.space_l))
            .push(widget::divider::horizontal::default())
            .push(widget::vertical_space().height(spacing.space_s))
            .push(
                widget::text(fl!("music"))
                    .size(16)
                    .font(cosmic::font::bold()),
            )
            .push(widget::vertical_space().height(spacing.space_s))
            .push(
                widget::row()
                    .push(widget::text(fl!("music-autoplay")).size(14))
                    .push(widget::horizontal_space().width(Length::Fill))
                    .push(autoplay_toggle)
                    .align_y(Alignment::Center),
            )
            .push(widget::vertical_space().height(spacing.space_s))
            .push(widget::text(fl!("music-volume")).size(14))
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(volume_slider)
            .push(widget::vertical_space().height(spacing.space_s))
            .push(
                widget::row()
                    .push(widget::text(track_label).size(14))
                    .push(widget::horizontal_space().width(Length::Fill))
                    .push(choose_track_button)
                    .align_y(Alignment::Center),
            )
            .push(widget::vertical_space().height(spacing.space_l))
            .push(widget::divider::horizontal::default())
            .push(widget::vertical_space().height(spacing.space_s))
            .push(
                widget::button::standard(fl!("reset-settings")).on_press(Message::ResetSettings),
            )
            .push(widget::vertical_space().height(spacing.space_s))
            .push(
                widget::text(version_info)
                    .size(12)
                    .class(cosmic::theme::Text::Accent),
            )
            .spacing(0)
            .into();

        context_drawer::context_drawer(
            settings_column,
            Message::ToggleContextPage(ContextPage::Settings),
        )
        .title(fl!("settings"))
    }
}
