// SPDX-License-Identifier: GPL-3.0-only

//! Celebration effects
//!
//! The celebration stage layers two particle fields over the slideshow:
//!
//! - Confetti bursts that taper off over a five second window
//! - A field of hearts drifting up for as long as the stage is shown
//!
//! Both simulations work in normalized stage fractions (0.0 to 1.0) and
//! are advanced by timer messages. The overlay widget scales them to the
//! actual window bounds at render time.

pub mod confetti;
pub mod hearts;
mod widget;

use cosmic::Element;
use cosmic::iced::Length;

use crate::app::state::Message;

use confetti::ConfettiSystem;
use hearts::HeartField;

/// Build the effects layer for the celebration stage
///
/// Collapses to an empty spacer when nothing is in flight.
pub fn build_effects_overlay<'a>(
    confetti: &ConfettiSystem,
    hearts: &HeartField,
) -> Element<'a, Message> {
    if confetti.pieces().is_empty() && hearts.is_empty() {
        return cosmic::widget::Space::new(Length::Fill, Length::Fill).into();
    }

    widget::EffectsOverlay::new(confetti.pieces().to_vec(), hearts.hearts()).into()
}
