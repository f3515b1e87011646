// SPDX-License-Identifier: GPL-3.0-only

//! Effects handlers
//!
//! Two timer chains drive the celebration particles. The burst chain
//! fires confetti on a coarse interval until the spawn window closes; the
//! frame chain advances both simulations at display pace. Both chains are
//! epoch guarded so a restarted celebration kills leftover timers.

use crate::app::state::{AppModel, Message};
use crate::constants::effects::{CONFETTI_INTERVAL_MS, FRAME_MS};
use cosmic::Task;

impl AppModel {
    // =========================================================================
    // Effects Handlers
    // =========================================================================

    pub(crate) fn handle_confetti_burst(&mut self, epoch: u64) -> Task<cosmic::Action<Message>> {
        if epoch != self.confetti_epoch {
            return Task::none();
        }
        let mut rng = rand::rng();
        self.confetti.burst(&mut rng);
        if self.confetti.is_firing() {
            return Self::delay_task(CONFETTI_INTERVAL_MS, Message::ConfettiBurst(epoch));
        }
        Task::none()
    }

    pub(crate) fn handle_effects_frame(&mut self, epoch: u64) -> Task<cosmic::Action<Message>> {
        if epoch != self.effects_epoch {
            return Task::none();
        }
        let mut rng = rand::rng();
        self.confetti.step();
        self.hearts.step(&mut rng);
        if self.confetti.is_spent() && self.hearts.is_empty() {
            return Task::none();
        }
        Self::delay_task(FRAME_MS, Message::EffectsFrame(epoch))
    }
}
