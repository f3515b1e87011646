// SPDX-License-Identifier: GPL-3.0-only

//! Confetti burst simulation
//!
//! Confetti fires from two side cannons in bursts that taper off across a
//! five second window. Positions are stage fractions (0.0 to 1.0) so the
//! overlay widget can scale them to any window size.

use rand::Rng;

use crate::constants::effects::{
    CONFETTI_BASE_COUNT, CONFETTI_DURATION_MS, CONFETTI_INTERVAL_MS, CONFETTI_TICKS,
    CONFETTI_VELOCITY,
};

/// Downward pull applied to vertical velocity each frame
const GRAVITY: f32 = 0.0018;

/// Horizontal velocity decay per frame
const DRAG: f32 = 0.96;

/// Pieces below this stage fraction have fallen out of view
const FLOOR: f32 = 1.2;

/// Palette the overlay maps `color_index` into, as linear RGB
pub const CONFETTI_COLORS: [(f32, f32, f32); 6] = [
    (1.00, 0.42, 0.62),
    (1.00, 0.78, 0.25),
    (0.47, 0.76, 1.00),
    (0.64, 0.48, 1.00),
    (0.45, 0.89, 0.55),
    (1.00, 0.55, 0.35),
];

/// One confetti rectangle in flight
#[derive(Debug, Clone, Copy)]
pub struct ConfettiPiece {
    /// Horizontal position as a stage fraction
    pub x: f32,
    /// Vertical position as a stage fraction
    pub y: f32,
    vx: f32,
    vy: f32,
    /// Index into [`CONFETTI_COLORS`]
    pub color_index: usize,
    ticks_left: u32,
}

impl ConfettiPiece {
    /// Remaining lifetime mapped onto draw opacity
    pub fn opacity(&self) -> f32 {
        self.ticks_left as f32 / CONFETTI_TICKS as f32
    }
}

/// Burst scheduler and particle field for one celebration
#[derive(Debug, Default)]
pub struct ConfettiSystem {
    pieces: Vec<ConfettiPiece>,
    window_elapsed_ms: u64,
    firing: bool,
}

impl ConfettiSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the burst window, dropping leftovers from a previous run
    pub fn ignite(&mut self) {
        self.pieces.clear();
        self.window_elapsed_ms = 0;
        self.firing = true;
    }

    /// Whether the burst window is still open
    pub fn is_firing(&self) -> bool {
        self.firing
    }

    /// Pieces currently in flight
    pub fn pieces(&self) -> &[ConfettiPiece] {
        &self.pieces
    }

    /// Fire one burst from both cannons and advance the window.
    ///
    /// Each cannon contributes [`burst_count`] pieces, so early bursts are
    /// dense and the last ones sparse. Returns the total number spawned.
    pub fn burst(&mut self, rng: &mut impl Rng) -> usize {
        if !self.firing {
            return 0;
        }
        let per_side = burst_count(self.window_elapsed_ms);
        for _ in 0..per_side {
            self.pieces.push(spawn_piece(rng, Cannon::Left));
            self.pieces.push(spawn_piece(rng, Cannon::Right));
        }
        self.window_elapsed_ms += CONFETTI_INTERVAL_MS;
        if self.window_elapsed_ms >= CONFETTI_DURATION_MS {
            self.firing = false;
        }
        per_side * 2
    }

    /// Advance every piece one frame and drop expired ones
    pub fn step(&mut self) {
        for piece in &mut self.pieces {
            piece.x += piece.vx;
            piece.y += piece.vy;
            piece.vy += GRAVITY;
            piece.vx *= DRAG;
            piece.ticks_left = piece.ticks_left.saturating_sub(1);
        }
        self.pieces.retain(|p| p.ticks_left > 0 && p.y < FLOOR);
    }

    /// True once the window has closed and every piece has expired
    pub fn is_spent(&self) -> bool {
        !self.firing && self.pieces.is_empty()
    }

    pub fn clear(&mut self) {
        self.pieces.clear();
        self.firing = false;
    }
}

#[derive(Clone, Copy)]
enum Cannon {
    Left,
    Right,
}

/// Per-cannon burst size at a point in the window: full strength at the
/// start, tapering linearly to zero at the end
pub fn burst_count(window_elapsed_ms: u64) -> usize {
    if window_elapsed_ms >= CONFETTI_DURATION_MS {
        return 0;
    }
    let remaining =
        (CONFETTI_DURATION_MS - window_elapsed_ms) as f32 / CONFETTI_DURATION_MS as f32;
    (CONFETTI_BASE_COUNT as f32 * remaining).round() as usize
}

fn spawn_piece(rng: &mut impl Rng, cannon: Cannon) -> ConfettiPiece {
    let x = match cannon {
        Cannon::Left => rng.random_range(0.1..0.3),
        Cannon::Right => rng.random_range(0.7..0.9),
    };
    // Matches a full-circle spread launched anywhere in the upper stage
    let y = rng.random_range(-0.2..0.8);
    let angle = rng.random_range(0.0..std::f32::consts::TAU);
    let speed = CONFETTI_VELOCITY / 1000.0 * rng.random_range(0.5..1.0);
    ConfettiPiece {
        x,
        y,
        vx: angle.cos() * speed,
        vy: angle.sin() * speed,
        color_index: rng.random_range(0..CONFETTI_COLORS.len()),
        ticks_left: CONFETTI_TICKS,
    }
}
