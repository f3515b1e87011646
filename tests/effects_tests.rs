// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for the confetti and heart simulations

use rand::SeedableRng;
use rand::rngs::StdRng;

use cosmic_keepsake::app::effects::confetti::{CONFETTI_COLORS, ConfettiSystem, burst_count};
use cosmic_keepsake::app::effects::hearts::HeartField;
use cosmic_keepsake::constants::effects::{
    CONFETTI_BASE_COUNT, CONFETTI_DURATION_MS, CONFETTI_INTERVAL_MS, CONFETTI_TICKS, HEART_COUNT,
};

#[test]
fn test_burst_count_tapers_to_zero() {
    // Full strength at the start of the window, nothing at the end
    assert_eq!(burst_count(0), CONFETTI_BASE_COUNT as usize);
    assert_eq!(burst_count(CONFETTI_DURATION_MS), 0);
    assert_eq!(burst_count(CONFETTI_DURATION_MS * 2), 0);

    // Counts never grow as the window ages
    let mut previous = usize::MAX;
    for elapsed in (0..=CONFETTI_DURATION_MS).step_by(CONFETTI_INTERVAL_MS as usize) {
        let count = burst_count(elapsed);
        assert!(count <= previous, "burst size grew at {} ms", elapsed);
        previous = count;
    }
}

#[test]
fn test_burst_window_closes_after_the_full_duration() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut system = ConfettiSystem::new();

    system.ignite();
    let mut bursts = 0;
    while system.is_firing() {
        assert!(system.burst(&mut rng) > 0);
        bursts += 1;
    }

    assert_eq!(bursts, (CONFETTI_DURATION_MS / CONFETTI_INTERVAL_MS) as usize);

    // A closed window fires nothing
    assert_eq!(system.burst(&mut rng), 0);
}

#[test]
fn test_burst_fires_both_cannons_evenly() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut system = ConfettiSystem::new();
    system.ignite();

    let spawned = system.burst(&mut rng);
    assert_eq!(spawned, CONFETTI_BASE_COUNT as usize * 2);
    assert_eq!(system.pieces().len(), spawned);

    let left = system.pieces().iter().filter(|p| p.x < 0.5).count();
    let right = system.pieces().iter().filter(|p| p.x >= 0.5).count();
    assert_eq!(left, right);
}

#[test]
fn test_pieces_spawn_inside_the_cannon_bands() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut system = ConfettiSystem::new();
    system.ignite();
    system.burst(&mut rng);

    for piece in system.pieces() {
        let in_left = (0.1..0.3).contains(&piece.x);
        let in_right = (0.7..0.9).contains(&piece.x);
        assert!(in_left || in_right, "piece outside both cannon bands");
        assert!((-0.2..0.8).contains(&piece.y));
        assert!(piece.color_index < CONFETTI_COLORS.len());
        // Fresh pieces draw fully opaque
        assert!((piece.opacity() - 1.0).abs() < f32::EPSILON);
    }
}

#[test]
fn test_pieces_expire_after_their_lifetime() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut system = ConfettiSystem::new();
    system.ignite();
    system.burst(&mut rng);
    assert!(!system.pieces().is_empty());

    for _ in 0..CONFETTI_TICKS {
        system.step();
    }
    assert!(system.pieces().is_empty());

    // The window is still open, so the system is not spent yet
    assert!(!system.is_spent());
    system.clear();
    assert!(system.is_spent());
}

#[test]
fn test_hearts_scatter_full_field() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut field = HeartField::new();
    assert!(field.is_empty());

    field.scatter(&mut rng);
    assert_eq!(field.hearts().len(), HEART_COUNT);

    for heart in field.hearts() {
        // Everything starts below the stage, inside the horizontal margins
        assert!(heart.y > 1.0);
        assert!((0.05..0.95).contains(&heart.x));
        assert!((0.1..0.6).contains(&heart.opacity));
        assert!((0.5..1.0).contains(&heart.scale));
        assert!(!heart.is_visible());
    }
}

#[test]
fn test_hearts_recycle_instead_of_draining() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut field = HeartField::new();
    field.scatter(&mut rng);

    // Long enough for every heart to finish its stagger and clear the top
    for _ in 0..400 {
        field.step(&mut rng);
    }

    assert_eq!(field.hearts().len(), HEART_COUNT);
    assert!(field.hearts().iter().any(|heart| heart.is_visible()));
    for heart in field.hearts() {
        // Recycled hearts re-enter from below instead of piling above the top
        assert!(heart.y >= -0.15);
        assert!(heart.y <= 1.05);
    }
}

#[test]
fn test_hearts_clear() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut field = HeartField::new();
    field.scatter(&mut rng);
    field.clear();
    assert!(field.is_empty());
}
