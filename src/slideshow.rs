// SPDX-License-Identifier: GPL-3.0-only

//! Celebration slideshow state machine
//!
//! Eight slides advance on a fixed beat. Each change happens in two phases:
//! the caption dips first, then the new slide is swapped in. Once the last
//! slide would wrap back to the first, the show is over.

use tracing::debug;

use crate::constants::slideshow::SLIDE_COUNT;

/// Embedded artwork shown above each slide caption, in slide order
pub const SLIDE_ART: [&[u8]; SLIDE_COUNT] = [
    include_bytes!("../resources/artwork/slide-0.svg"),
    include_bytes!("../resources/artwork/slide-1.svg"),
    include_bytes!("../resources/artwork/slide-2.svg"),
    include_bytes!("../resources/artwork/slide-3.svg"),
    include_bytes!("../resources/artwork/slide-4.svg"),
    include_bytes!("../resources/artwork/slide-5.svg"),
    include_bytes!("../resources/artwork/slide-6.svg"),
    include_bytes!("../resources/artwork/slide-7.svg"),
];

/// Where the slideshow currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum SlideshowState {
    /// Not started yet
    #[default]
    Idle,
    /// Showing a slide
    Running {
        /// Index of the visible slide
        index: usize,
        /// Whether the mid-change dip is in progress
        fading: bool,
    },
    /// All slides were shown
    Completed,
}

/// Outcome of one slide change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideAdvance {
    /// The next slide is now visible
    Swapped(usize),
    /// The show wrapped around and is over
    Completed,
}

/// Slideshow driver owned by the application model.
///
/// Timers re-dispatch their own messages, so every start bumps an epoch
/// that stale timer messages are checked against.
#[derive(Debug, Default)]
pub struct Slideshow {
    state: SlideshowState,
    epoch: u64,
}

impl Slideshow {
    /// Start from the first slide and return the epoch for timer messages
    pub fn start(&mut self) -> u64 {
        self.state = SlideshowState::Running {
            index: 0,
            fading: false,
        };
        self.epoch += 1;
        debug!(epoch = self.epoch, "Slideshow started");
        self.epoch
    }

    /// Begin the mid-change dip; returns false when not running or already fading
    pub fn begin_fade(&mut self) -> bool {
        match self.state {
            SlideshowState::Running { index, fading: false } => {
                self.state = SlideshowState::Running { index, fading: true };
                true
            }
            _ => false,
        }
    }

    /// Swap in the next slide, completing the show when it would wrap
    pub fn advance(&mut self) -> Option<SlideAdvance> {
        let SlideshowState::Running { index, .. } = self.state else {
            return None;
        };

        let next = (index + 1) % SLIDE_COUNT;
        if next == 0 {
            self.state = SlideshowState::Completed;
            debug!("Slideshow completed");
            Some(SlideAdvance::Completed)
        } else {
            self.state = SlideshowState::Running {
                index: next,
                fading: false,
            };
            debug!(index = next, "Slide swapped");
            Some(SlideAdvance::Swapped(next))
        }
    }

    /// Whether `epoch` belongs to the current run
    pub fn matches_epoch(&self, epoch: u64) -> bool {
        self.epoch == epoch
    }

    /// Whether slides are currently being shown
    pub fn is_running(&self) -> bool {
        matches!(self.state, SlideshowState::Running { .. })
    }

    /// Whether the mid-change dip is in progress
    pub fn is_fading(&self) -> bool {
        matches!(self.state, SlideshowState::Running { fading: true, .. })
    }

    /// Whether every slide has been shown
    pub fn is_completed(&self) -> bool {
        self.state == SlideshowState::Completed
    }

    /// Index of the visible slide, if any
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            SlideshowState::Running { index, .. } => Some(index),
            _ => None,
        }
    }
}
