// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

/// UI dimensions and stage transition tuning
pub mod ui {
    /// Duration of the fade-in when switching stages (ms)
    pub const STAGE_FADE_MS: u64 = 800;

    /// Interval between fade opacity steps (ms)
    pub const STAGE_FADE_FRAME_MS: u64 = 50;

    /// Number of rotating refusal labels on the evasive button
    pub const TAUNT_COUNT: usize = 6;

    /// Lower bound for the evasive button's normalized position, keeping it
    /// off the stage edges
    pub const DODGE_MIN: f32 = 0.05;

    /// Upper bound for the evasive button's normalized position
    pub const DODGE_MAX: f32 = 0.95;

    /// Scrim alpha behind modal overlays
    pub const OVERLAY_BACKGROUND_ALPHA: f32 = 0.6;
}

/// Reaction capture tuning
pub mod capture {
    /// Requested camera frame width
    pub const FRAME_WIDTH: u32 = 1280;

    /// Requested camera frame height
    pub const FRAME_HEIGHT: u32 = 720;

    /// Requested camera frame rate
    pub const FRAME_RATE: u32 = 30;

    /// Interval between recording indicator updates (ms)
    pub const INDICATOR_TICK_MS: u64 = 1000;

    /// Wait between the slideshow ending and the keepsake screen (ms)
    pub const FINALIZE_GRACE_MS: u64 = 3000;

    /// How long to wait for early pipeline bus errors on start (ms)
    pub const START_BUS_TIMEOUT_MS: u64 = 500;
}

/// Slideshow pacing
pub mod slideshow {
    /// Number of slides in the celebration slideshow
    pub const SLIDE_COUNT: usize = 8;

    /// Interval between slide changes (ms)
    pub const TICK_MS: u64 = 3000;

    /// Duration of the mid-change caption dip (ms)
    pub const SWAP_MS: u64 = 500;
}

/// Confetti and heart overlay tuning
pub mod effects {
    /// Total length of the confetti spawn window (ms)
    pub const CONFETTI_DURATION_MS: u64 = 5000;

    /// Interval between confetti bursts (ms)
    pub const CONFETTI_INTERVAL_MS: u64 = 250;

    /// Particle count per side at the start of the spawn window
    pub const CONFETTI_BASE_COUNT: u32 = 50;

    /// Launch speed passed to the particle simulation
    pub const CONFETTI_VELOCITY: f32 = 30.0;

    /// Frames a confetti particle lives for
    pub const CONFETTI_TICKS: u32 = 60;

    /// Interval between simulation frames (ms)
    pub const FRAME_MS: u64 = 33;

    /// Number of hearts floating behind the celebration
    pub const HEART_COUNT: usize = 15;
}

/// Background music defaults
pub mod music {
    /// Default playback volume as a percentage
    pub const DEFAULT_VOLUME_PERCENT: u32 = 50;

    /// Interval between bus polls while the soundtrack plays (ms)
    pub const LOOP_POLL_MS: u64 = 500;
}

/// Format a second count as MM:SS
pub fn format_elapsed(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Application information utilities
pub mod app_info {
    use std::path::Path;

    /// Get the application version from build-time environment
    pub fn version() -> &'static str {
        env!("GIT_VERSION")
    }

    /// Check if the application is running inside a Flatpak sandbox
    pub fn is_flatpak() -> bool {
        Path::new("/.flatpak-info").exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "00:00");
        assert_eq!(format_elapsed(9), "00:09");
        assert_eq!(format_elapsed(75), "01:15");
        assert_eq!(format_elapsed(3600), "60:00");
    }

    #[test]
    fn test_fade_steps_divide_evenly() {
        assert_eq!(ui::STAGE_FADE_MS % ui::STAGE_FADE_FRAME_MS, 0);
    }
}
