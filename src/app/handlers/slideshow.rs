// SPDX-License-Identifier: GPL-3.0-only

//! Slideshow handlers
//!
//! Paces the celebration slideshow. Each slide holds for the tick
//! interval, dips for the swap interval, then advances. After the last
//! slide the recording is finished immediately and the celebration
//! lingers for a moment before the keepsake summary appears.

use crate::app::state::{AppModel, Message};
use crate::constants::capture::FINALIZE_GRACE_MS;
use crate::constants::slideshow::{SWAP_MS, TICK_MS};
use crate::slideshow::SlideAdvance;
use cosmic::Task;
use tracing::{debug, info};

impl AppModel {
    // =========================================================================
    // Slideshow Handlers
    // =========================================================================

    pub(crate) fn handle_slide_tick(&mut self, epoch: u64) -> Task<cosmic::Action<Message>> {
        if !self.slideshow.matches_epoch(epoch) {
            return Task::none();
        }
        if self.slideshow.begin_fade() {
            return Self::delay_task(SWAP_MS, Message::SlideSwap(epoch));
        }
        Task::none()
    }

    pub(crate) fn handle_slide_swap(&mut self, epoch: u64) -> Task<cosmic::Action<Message>> {
        if !self.slideshow.matches_epoch(epoch) {
            return Task::none();
        }
        match self.slideshow.advance() {
            Some(SlideAdvance::Swapped(index)) => {
                debug!(index, "Slide changed");
                Self::delay_task(TICK_MS - SWAP_MS, Message::SlideTick(epoch))
            }
            Some(SlideAdvance::Completed) => {
                info!("Slideshow complete");
                // Finalize right away; the stage change waits out the linger
                let finish = Task::done(cosmic::Action::App(Message::FinishCapture));
                let linger = Self::delay_task(FINALIZE_GRACE_MS, Message::CelebrationDone);
                Task::batch([finish, linger])
            }
            None => Task::none(),
        }
    }
}
