// SPDX-License-Identifier: GPL-3.0-only

//! Music handlers
//!
//! Playback control for the celebration soundtrack: starting and pausing
//! the player, the loop poll chain, volume, and track selection.

use std::path::PathBuf;

use crate::app::state::{AppModel, Message};
use crate::constants::music::LOOP_POLL_MS;
use crate::music::{self, MusicPlayer};
use cosmic::Task;
use cosmic::cosmic_config::CosmicConfigEntry;
use tracing::{debug, error, info, warn};

impl AppModel {
    // =========================================================================
    // Music Handlers
    // =========================================================================

    /// Start the soundtrack, creating the player on first use
    pub(crate) fn start_music(&mut self) -> Task<cosmic::Action<Message>> {
        if self.music.is_none() {
            let track = match music::resolve_track(&self.config) {
                Ok(track) => track,
                Err(err) => {
                    warn!(error = %err, "No soundtrack available, running silent");
                    return Task::none();
                }
            };
            match MusicPlayer::new(&track, self.config.music_volume) {
                Ok(player) => self.music = Some(player),
                Err(err) => {
                    warn!(error = %err, "Failed to create music player");
                    return Task::none();
                }
            }
        }

        if let Some(player) = self.music.as_ref() {
            match player.play() {
                Ok(()) => {
                    self.music_playing = true;
                    self.music_epoch += 1;
                    return Self::delay_task(LOOP_POLL_MS, Message::MusicTick(self.music_epoch));
                }
                Err(err) => warn!(error = %err, "Failed to start music playback"),
            }
        }
        Task::none()
    }

    pub(crate) fn handle_toggle_music(&mut self) -> Task<cosmic::Action<Message>> {
        if self.music_playing {
            if let Some(player) = self.music.as_ref() {
                player.pause();
            }
            self.music_playing = false;
            // Kill the poll chain
            self.music_epoch += 1;
            return Task::none();
        }
        self.start_music()
    }

    /// Poll the player bus so the track loops back on end of stream
    pub(crate) fn handle_music_tick(&mut self, epoch: u64) -> Task<cosmic::Action<Message>> {
        if epoch != self.music_epoch || !self.music_playing {
            return Task::none();
        }
        let Some(player) = self.music.as_ref() else {
            return Task::none();
        };
        if player.poll_loop() {
            debug!("Soundtrack looped back to start");
        }
        Self::delay_task(LOOP_POLL_MS, Message::MusicTick(epoch))
    }

    pub(crate) fn handle_set_music_volume(&mut self, percent: u32) -> Task<cosmic::Action<Message>> {
        self.config.music_volume = percent;
        if let Some(handler) = self.config_handler.as_ref()
            && let Err(err) = self.config.write_entry(handler)
        {
            error!(?err, "Failed to save music volume");
        }
        if let Some(player) = self.music.as_ref() {
            player.set_volume(percent);
        }
        Task::none()
    }

    pub(crate) fn handle_toggle_music_autoplay(&mut self) -> Task<cosmic::Action<Message>> {
        self.config.music_enabled = !self.config.music_enabled;
        if let Some(handler) = self.config_handler.as_ref()
            && let Err(err) = self.config.write_entry(handler)
        {
            error!(?err, "Failed to save music autoplay setting");
        }
        Task::none()
    }

    pub(crate) fn handle_choose_music_track(&self) -> Task<cosmic::Action<Message>> {
        Task::perform(
            async move {
                rfd::AsyncFileDialog::new()
                    .add_filter("Audio", &["ogg", "opus", "mp3", "flac", "wav"])
                    .pick_file()
                    .await
                    .map(|file| file.path().to_path_buf())
            },
            |choice| cosmic::Action::App(Message::MusicTrackChosen(choice)),
        )
    }

    pub(crate) fn handle_music_track_chosen(
        &mut self,
        choice: Option<PathBuf>,
    ) -> Task<cosmic::Action<Message>> {
        let Some(path) = choice else {
            return Task::none();
        };
        info!(path = %path.display(), "Soundtrack changed");
        self.config.music_track = Some(path.display().to_string());
        if let Some(handler) = self.config_handler.as_ref()
            && let Err(err) = self.config.write_entry(handler)
        {
            error!(?err, "Failed to save music track");
        }
        // Rebuild the player so the new track takes effect
        self.music = None;
        if self.music_playing {
            self.music_playing = false;
            return self.start_music();
        }
        Task::none()
    }
}
