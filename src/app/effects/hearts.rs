// SPDX-License-Identifier: GPL-3.0-only

//! Floating hearts field
//!
//! A fixed number of hearts drift from below the stage to above it, each
//! with its own speed, size and translucency. A heart that clears the top
//! respawns at the bottom, so the field runs for as long as the
//! celebration stays on screen.

use rand::Rng;

use crate::constants::effects::{FRAME_MS, HEART_COUNT};

/// Shortest climb from bottom to top (ms)
const RISE_MIN_MS: f32 = 2000.0;

/// Longest climb from bottom to top (ms)
const RISE_MAX_MS: f32 = 5000.0;

/// Largest initial stagger before a heart starts climbing (ms)
const DELAY_MAX_MS: f32 = 5000.0;

/// Vertical distance covered over one climb, in stage fractions
const TRAVEL: f32 = 1.2;

/// Hearts above this point have cleared the stage
const CEILING: f32 = -0.15;

/// Where respawned hearts re-enter from
const BOTTOM: f32 = 1.05;

/// One heart drifting up the stage
#[derive(Debug, Clone, Copy)]
pub struct Heart {
    /// Horizontal position as a stage fraction
    pub x: f32,
    /// Vertical position as a stage fraction
    pub y: f32,
    /// Draw translucency
    pub opacity: f32,
    /// Draw size multiplier
    pub scale: f32,
    rise_per_tick: f32,
    delay_ticks: u32,
}

impl Heart {
    /// Whether the heart should be drawn this frame
    pub fn is_visible(&self) -> bool {
        self.delay_ticks == 0 && self.y < BOTTOM
    }
}

/// The full field of drifting hearts
#[derive(Debug, Default)]
pub struct HeartField {
    hearts: Vec<Heart>,
}

impl HeartField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate the field with freshly staggered hearts
    pub fn scatter(&mut self, rng: &mut impl Rng) {
        self.hearts = (0..HEART_COUNT).map(|_| spawn_heart(rng, true)).collect();
    }

    /// Advance every heart one frame, recycling ones that cleared the top
    pub fn step(&mut self, rng: &mut impl Rng) {
        for heart in &mut self.hearts {
            if heart.delay_ticks > 0 {
                heart.delay_ticks -= 1;
                continue;
            }
            heart.y -= heart.rise_per_tick;
            if heart.y < CEILING {
                *heart = spawn_heart(rng, false);
            }
        }
    }

    pub fn hearts(&self) -> &[Heart] {
        &self.hearts
    }

    pub fn is_empty(&self) -> bool {
        self.hearts.is_empty()
    }

    pub fn clear(&mut self) {
        self.hearts.clear();
    }
}

fn spawn_heart(rng: &mut impl Rng, staggered: bool) -> Heart {
    let rise_ms = rng.random_range(RISE_MIN_MS..RISE_MAX_MS);
    let ticks = (rise_ms / FRAME_MS as f32).max(1.0);
    let delay_ticks = if staggered {
        let delay_ms = rng.random_range(0.0..DELAY_MAX_MS);
        (delay_ms / FRAME_MS as f32) as u32
    } else {
        0
    };
    Heart {
        x: rng.random_range(0.05..0.95),
        y: BOTTOM,
        opacity: rng.random_range(0.1..0.6),
        scale: rng.random_range(0.5..1.0),
        rise_per_tick: TRAVEL / ticks,
        delay_ticks,
    }
}
