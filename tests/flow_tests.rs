// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for stage fades and the evasive refusal button

use rand::SeedableRng;
use rand::rngs::StdRng;

use cosmic_keepsake::Stage;
use cosmic_keepsake::app::{Mood, PromptState, StageFade};
use cosmic_keepsake::constants::ui::{
    DODGE_MAX, DODGE_MIN, STAGE_FADE_FRAME_MS, STAGE_FADE_MS, TAUNT_COUNT,
};

#[test]
fn test_experience_starts_at_the_envelope() {
    assert_eq!(Stage::default(), Stage::Landing);
    assert_eq!(Mood::default(), Mood::Hopeful);
}

#[test]
fn test_fade_steps_from_opaque_to_clear() {
    let mut fade = StageFade::default();
    assert!(!fade.is_active());

    fade.begin();
    assert!(fade.is_active());
    assert_eq!(fade.curtain_alpha, 1.0);

    // The curtain clears in exactly one fade duration worth of frames
    let mut frames = 0;
    while fade.step() {
        frames += 1;
        assert!(frames < 1000, "fade never finished");
    }
    frames += 1;

    assert_eq!(frames, (STAGE_FADE_MS / STAGE_FADE_FRAME_MS) as usize);
    assert_eq!(fade.curtain_alpha, 0.0);
    assert!(!fade.is_active());

    // Stepping a finished fade does nothing
    assert!(!fade.step());
    assert_eq!(fade.curtain_alpha, 0.0);
}

#[test]
fn test_fade_epoch_orphans_interrupted_runs() {
    let mut fade = StageFade::default();
    let first = fade.begin();
    assert!(fade.matches_epoch(first));

    // A second stage change while the first is mid-fade restarts the curtain
    fade.step();
    let second = fade.begin();
    assert!(!fade.matches_epoch(first));
    assert!(fade.matches_epoch(second));
    assert_eq!(fade.curtain_alpha, 1.0);
}

#[test]
fn test_refusal_button_starts_centered() {
    let prompt = PromptState::default();
    assert_eq!(prompt.offset_x, 0.5);
    assert_eq!(prompt.offset_y, 0.5);
    assert_eq!(prompt.dodges, 0);
    assert_eq!(prompt.taunt_index, 0);
    assert_eq!(prompt.fill_weights(), ((500, 500), (500, 500)));
}

#[test]
fn test_dodges_stay_clear_of_the_stage_edges() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut prompt = PromptState::default();

    for _ in 0..50 {
        prompt.dodge(&mut rng);
        assert!((DODGE_MIN..DODGE_MAX).contains(&prompt.offset_x));
        assert!((DODGE_MIN..DODGE_MAX).contains(&prompt.offset_y));

        let ((lead_x, trail_x), (lead_y, trail_y)) = prompt.fill_weights();
        assert_eq!(lead_x + trail_x, 1000);
        assert_eq!(lead_y + trail_y, 1000);
        assert!((50..=950).contains(&lead_x));
        assert!((50..=950).contains(&lead_y));
    }
    assert_eq!(prompt.dodges, 50);
}

#[test]
fn test_weights_place_the_button_proportionally() {
    let prompt = PromptState {
        offset_x: 0.25,
        offset_y: 0.75,
        dodges: 3,
        taunt_index: 2,
    };
    // A quarter of the free width leads the button, three quarters trail it
    assert_eq!(prompt.fill_weights(), ((250, 750), (750, 250)));
}

#[test]
fn test_fled_spots_span_the_whole_stage() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut prompt = PromptState::default();

    let mut min_lead = u16::MAX;
    let mut max_lead = 0u16;
    for _ in 0..200 {
        prompt.dodge(&mut rng);
        let ((lead_x, _), _) = prompt.fill_weights();
        min_lead = min_lead.min(lead_x);
        max_lead = max_lead.max(lead_x);
    }

    // The button ranges over the full width, not a fixed pocket of it
    assert!(min_lead < 300, "never fled toward the left edge");
    assert!(max_lead > 700, "never fled toward the right edge");
}

#[test]
fn test_taunts_rotate_through_the_whole_set() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut prompt = PromptState::default();

    // The label walks the set in order and wraps around
    for expected in 0..TAUNT_COUNT * 2 {
        prompt.dodge(&mut rng);
        assert_eq!(prompt.taunt_index, expected % TAUNT_COUNT);
    }
}
