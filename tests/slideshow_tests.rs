// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for the slideshow state machine

use cosmic_keepsake::constants::slideshow::SLIDE_COUNT;
use cosmic_keepsake::slideshow::{SLIDE_ART, SlideAdvance, Slideshow};

#[test]
fn test_starts_on_first_slide() {
    let mut show = Slideshow::default();
    assert!(!show.is_running());
    assert_eq!(show.current_index(), None);

    show.start();
    assert!(show.is_running());
    assert!(!show.is_fading());
    assert_eq!(show.current_index(), Some(0));
}

#[test]
fn test_runs_exactly_one_cycle() {
    let mut show = Slideshow::default();
    show.start();

    // Seven swaps walk through slides 1..=7
    for expected in 1..SLIDE_COUNT {
        assert_eq!(show.advance(), Some(SlideAdvance::Swapped(expected)));
        assert_eq!(show.current_index(), Some(expected));
    }

    // The wrap back to slide 0 ends the show instead of repeating it
    assert_eq!(show.advance(), Some(SlideAdvance::Completed));
    assert!(show.is_completed());
    assert_eq!(show.current_index(), None);

    // Terminal state: nothing advances past completion
    assert_eq!(show.advance(), None);
    assert!(!show.begin_fade());
}

#[test]
fn test_fade_wraps_each_change() {
    let mut show = Slideshow::default();

    // No dip before the show starts
    assert!(!show.begin_fade());

    show.start();
    assert!(show.begin_fade());
    assert!(show.is_fading());

    // A dip cannot stack on an ongoing dip
    assert!(!show.begin_fade());

    // The swap clears the dip
    show.advance();
    assert!(!show.is_fading());
    assert!(show.begin_fade());
}

#[test]
fn test_epoch_invalidates_stale_timers() {
    let mut show = Slideshow::default();
    let first = show.start();
    assert!(show.matches_epoch(first));

    // A restart orphans timers from the previous run
    let second = show.start();
    assert!(!show.matches_epoch(first));
    assert!(show.matches_epoch(second));
}

#[test]
fn test_artwork_covers_every_slide() {
    assert_eq!(SLIDE_ART.len(), SLIDE_COUNT);
    for art in SLIDE_ART {
        assert!(!art.is_empty());
    }
}
