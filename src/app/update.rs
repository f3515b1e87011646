// SPDX-License-Identifier: GPL-3.0-only

//! Message update handling
//!
//! This module handles all application messages by routing them to focused handler methods.
//! The main `update()` function acts as a dispatcher, while specific handlers are implemented
//! in the `handlers` submodules organized by functional domain.
//!
//! # Handler Modules
//!
//! - `handlers::flow`: Stage changes, the camera notice, the evasive button
//! - `handlers::slideshow`: Slide pacing and the caption dip
//! - `handlers::effects`: Confetti bursts and particle frames
//! - `handlers::capture`: Reaction recording lifecycle
//! - `handlers::music`: Playback, looping and track selection
//! - `handlers::system`: Settings, theme, external URLs

use crate::app::state::{AppModel, Message};
use cosmic::Task;

impl AppModel {
    /// Main message handler - routes messages to appropriate handler methods.
    ///
    /// This dispatcher pattern keeps the main update function clean and makes
    /// it easy to find the handling code for any message type.
    pub fn update(&mut self, message: Message) -> Task<cosmic::Action<Message>> {
        match message {
            // ===== UI Navigation =====
            Message::LaunchUrl(url) => self.handle_launch_url(url),
            Message::ToggleContextPage(page) => self.handle_toggle_context_page(page),

            // ===== Flow =====
            Message::AnswerCameraNotice(allowed) => self.handle_answer_camera_notice(allowed),
            Message::OpenEnvelope => self.handle_open_envelope(),
            Message::ReadLetter => self.handle_read_letter(),
            Message::FadeTick(epoch) => self.handle_fade_tick(epoch),
            Message::Accept => self.handle_accept(),
            Message::DodgeNo => self.handle_dodge_no(),
            Message::SetMood(mood) => {
                self.mood = mood;
                Task::none()
            }

            // ===== Slideshow =====
            Message::SlideTick(epoch) => self.handle_slide_tick(epoch),
            Message::SlideSwap(epoch) => self.handle_slide_swap(epoch),
            Message::CelebrationDone => self.handle_celebration_done(),

            // ===== Effects =====
            Message::ConfettiBurst(epoch) => self.handle_confetti_burst(epoch),
            Message::EffectsFrame(epoch) => self.handle_effects_frame(epoch),

            // ===== Capture =====
            Message::CaptureStarted => self.handle_capture_started(),
            Message::FinishCapture => self.handle_finish_capture(),
            Message::CaptureFinalized(result) => self.handle_capture_finalized(result),
            Message::IndicatorTick(epoch) => self.handle_indicator_tick(epoch),
            Message::DismissCaptureAlert => {
                self.capture_error = None;
                Task::none()
            }
            Message::PlayReaction => self.handle_play_reaction(),
            Message::ShowReactionInFolder => self.handle_show_reaction_in_folder(),

            // ===== Music =====
            Message::ToggleMusic => self.handle_toggle_music(),
            Message::MusicTick(epoch) => self.handle_music_tick(epoch),
            Message::SetMusicVolume(percent) => self.handle_set_music_volume(percent),
            Message::ToggleMusicAutoplay => self.handle_toggle_music_autoplay(),
            Message::ChooseMusicTrack => self.handle_choose_music_track(),
            Message::MusicTrackChosen(path) => self.handle_music_track_chosen(path),

            // ===== Settings =====
            Message::UpdateConfig(config) => self.handle_update_config(config),
            Message::SetAppTheme(index) => self.handle_set_app_theme(index),
            Message::ResetSettings => self.handle_reset_settings(),

            Message::Noop => Task::none(),
        }
    }
}
