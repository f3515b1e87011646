// SPDX-License-Identifier: GPL-3.0-only

//! Flow handlers
//!
//! Drives progress through the stages: the camera notice, opening the
//! envelope, the question with its evasive refusal button, and the kickoff
//! of the celebration.

use crate::app::state::{AppModel, Message, Mood, Stage};
use crate::constants::effects::FRAME_MS;
use crate::constants::slideshow::TICK_MS;
use crate::constants::ui::STAGE_FADE_FRAME_MS;
use cosmic::Task;
use tracing::{debug, info};

impl AppModel {
    // =========================================================================
    // Flow Handlers
    // =========================================================================

    /// Create a delayed task that sends a message after the specified milliseconds
    pub(crate) fn delay_task(millis: u64, message: Message) -> Task<cosmic::Action<Message>> {
        Task::perform(
            async move {
                tokio::time::sleep(tokio::time::Duration::from_millis(millis)).await;
                message
            },
            cosmic::Action::App,
        )
    }

    /// Switch stages and start the fade-in over the new stage
    pub(crate) fn enter_stage(&mut self, stage: Stage) -> Task<cosmic::Action<Message>> {
        debug!(?stage, "Entering stage");
        self.stage = stage;
        let epoch = self.fade.begin();
        Self::delay_task(STAGE_FADE_FRAME_MS, Message::FadeTick(epoch))
    }

    /// Answering the notice starts recording (when allowed) and music.
    /// Either way the experience itself proceeds identically.
    pub(crate) fn handle_answer_camera_notice(
        &mut self,
        allowed: bool,
    ) -> Task<cosmic::Action<Message>> {
        info!(allowed, "Camera notice answered");
        self.permission_pending = false;
        self.camera_allowed = allowed;

        let capture_task = if allowed {
            self.start_reaction_capture()
        } else {
            Task::none()
        };
        let music_task = if self.config.music_enabled {
            self.start_music()
        } else {
            Task::none()
        };
        Task::batch([capture_task, music_task])
    }

    pub(crate) fn handle_open_envelope(&mut self) -> Task<cosmic::Action<Message>> {
        if self.stage != Stage::Landing || self.permission_pending || self.envelope_open {
            return Task::none();
        }
        info!("Envelope opened");
        self.envelope_open = true;
        Task::none()
    }

    pub(crate) fn handle_read_letter(&mut self) -> Task<cosmic::Action<Message>> {
        if self.stage != Stage::Landing || !self.envelope_open {
            return Task::none();
        }
        info!("Letter taken out");
        self.enter_stage(Stage::Question)
    }

    pub(crate) fn handle_fade_tick(&mut self, epoch: u64) -> Task<cosmic::Action<Message>> {
        if !self.fade.matches_epoch(epoch) {
            return Task::none();
        }
        if self.fade.step() {
            return Self::delay_task(STAGE_FADE_FRAME_MS, Message::FadeTick(epoch));
        }
        Task::none()
    }

    pub(crate) fn handle_accept(&mut self) -> Task<cosmic::Action<Message>> {
        if self.stage != Stage::Question {
            return Task::none();
        }
        info!(dodges = self.prompt.dodges, "Question answered yes");
        self.mood = Mood::Excited;
        self.start_celebration()
    }

    pub(crate) fn handle_dodge_no(&mut self) -> Task<cosmic::Action<Message>> {
        if self.stage != Stage::Question {
            return Task::none();
        }
        let mut rng = rand::rng();
        self.prompt.dodge(&mut rng);
        self.mood = Mood::Sad;
        debug!(dodges = self.prompt.dodges, "Refusal button fled");
        Task::none()
    }

    /// Kick off everything the celebration stage runs at once: the
    /// slideshow and both particle fields
    fn start_celebration(&mut self) -> Task<cosmic::Action<Message>> {
        let stage_task = self.enter_stage(Stage::Celebration);

        let slide_epoch = self.slideshow.start();
        let slide_task = Self::delay_task(TICK_MS, Message::SlideTick(slide_epoch));

        let mut rng = rand::rng();
        self.confetti.ignite();
        self.hearts.scatter(&mut rng);
        self.confetti_epoch += 1;
        self.effects_epoch += 1;
        let burst_task = Task::done(cosmic::Action::App(Message::ConfettiBurst(
            self.confetti_epoch,
        )));
        let frame_task = Self::delay_task(FRAME_MS, Message::EffectsFrame(self.effects_epoch));

        Task::batch([stage_task, slide_task, burst_task, frame_task])
    }

    /// The celebration has lingered long enough after the last slide.
    /// Stop the particle chains and show the keepsake summary.
    pub(crate) fn handle_celebration_done(&mut self) -> Task<cosmic::Action<Message>> {
        if self.stage != Stage::Celebration {
            return Task::none();
        }
        self.effects_epoch += 1;
        self.confetti.clear();
        self.hearts.clear();
        self.enter_stage(Stage::Keepsake)
    }
}
