// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for the reaction capture session and profile negotiation

use std::path::PathBuf;

use cosmic_keepsake::capture::CaptureSession;
use cosmic_keepsake::capture::encoders::{CANDIDATES, default_profile, first_supported};
use cosmic_keepsake::capture::recorder::classify_start_error;
use cosmic_keepsake::errors::CaptureError;

#[test]
fn test_session_lifecycle() {
    let (tx, mut rx) = tokio::sync::oneshot::channel();

    let mut session = CaptureSession::begin(tx);
    assert!(session.is_rolling());
    assert!(!session.is_finalizing());
    assert_eq!(session.elapsed_seconds(), 0);

    // Taking the sender moves the session to finalizing
    let sender = session.take_stop_sender().expect("stop sender");
    assert!(session.is_finalizing());
    assert!(!session.is_rolling());

    // The signal reaches the capture loop
    sender.send(()).expect("send stop");
    assert!(rx.try_recv().is_ok());

    // A second take finds nothing to stop
    assert!(session.take_stop_sender().is_none());

    session.finalize(PathBuf::from("/tmp/reaction_test.webm"));
    assert_eq!(
        session.artifact(),
        Some(std::path::Path::new("/tmp/reaction_test.webm"))
    );
}

#[test]
fn test_inactive_session_has_nothing_to_stop() {
    let mut session = CaptureSession::default();
    assert!(!session.is_rolling());
    assert_eq!(session.elapsed_seconds(), 0);
    assert!(session.take_stop_sender().is_none());
    assert!(session.artifact().is_none());
}

#[test]
fn test_dropped_session_releases_the_capture_loop() {
    let (tx, mut rx) = tokio::sync::oneshot::channel::<()>();
    let session = CaptureSession::begin(tx);

    // The loop also stops when the app side goes away without a stop signal
    drop(session);
    assert!(matches!(
        rx.try_recv(),
        Err(tokio::sync::oneshot::error::TryRecvError::Closed)
    ));
}

#[test]
fn test_reset_returns_to_inactive() {
    let (tx, _rx) = tokio::sync::oneshot::channel();
    let mut session = CaptureSession::begin(tx);
    session.finalize(PathBuf::from("/tmp/reaction_test.webm"));

    let previous = session.reset();
    assert!(previous.artifact().is_some());
    assert!(session.artifact().is_none());
    assert!(!session.is_rolling());
}

#[test]
fn test_profile_preference_order() {
    // Two codec variants, the bare container, then the fallbacks
    assert_eq!(CANDIDATES.len(), 5);
    assert_eq!(CANDIDATES[0].label, "webm-vp9");
    assert_eq!(CANDIDATES[1].label, "webm-vp8");
    assert_eq!(CANDIDATES[2].label, "webm");
    assert_eq!(CANDIDATES[3].label, "mp4-h264");
    assert_eq!(CANDIDATES[4].label, "mpeg2");
}

#[test]
fn test_first_supported_walks_the_preference_list() {
    // Everything installed picks the top preference
    let best = first_supported(|_| true);
    assert_eq!(best.label, "webm-vp9");

    // Only the mp4 pairing installed
    let mp4 = first_supported(|profile| profile.muxer == "mp4mux");
    assert_eq!(mp4.label, "mp4-h264");
    assert_eq!(mp4.extension, "mp4");

    // Nothing installed still yields a profile to try
    let fallback = first_supported(|_| false);
    assert_eq!(fallback, default_profile());
    assert_eq!(fallback.label, "webm");
}

#[test]
fn test_only_mp4_gets_its_own_extension() {
    for profile in CANDIDATES {
        let expected = if profile.muxer == "mp4mux" { "mp4" } else { "webm" };
        assert_eq!(
            profile.extension, expected,
            "unexpected extension for {}",
            profile.label
        );
    }
}

#[test]
fn test_classify_start_error() {
    assert!(matches!(
        classify_start_error("Permission denied by the portal"),
        CaptureError::PermissionDenied
    ));
    assert!(matches!(
        classify_start_error("Access to the camera was not authorized"),
        CaptureError::PermissionDenied
    ));
    assert!(matches!(
        classify_start_error("Could not open resource for reading"),
        CaptureError::DeviceUnavailable
    ));
    assert!(matches!(
        classify_start_error("Internal data stream error"),
        CaptureError::DeviceUnavailable
    ));
}
