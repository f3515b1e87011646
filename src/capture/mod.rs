// SPDX-License-Identifier: GPL-3.0-only

//! Webcam reaction capture
//!
//! The reaction recording runs silently behind the card. The pipeline pulls
//! muxed bytes into memory and writes a single file once the card finishes.
//!
//! - `encoders`: recording profile negotiation
//! - `recorder`: the GStreamer capture pipeline

pub mod encoders;
pub mod recorder;

use std::path::{Path, PathBuf};
use std::time::Instant;

/// Reaction capture state machine
///
/// The session starts rolling when the camera notice is accepted and
/// finalizes once the slideshow is done, so unlike a manual recorder there
/// is no user-facing stop control.
#[derive(Debug, Default)]
pub enum CaptureSession {
    /// No recording is running
    #[default]
    Inactive,
    /// Frames are being pulled from the camera
    Rolling {
        /// When recording started
        start_time: Instant,
        /// Channel to signal stop
        stop_sender: Option<tokio::sync::oneshot::Sender<()>>,
    },
    /// Stop was requested, the muxer is draining
    Finalizing {
        /// When recording started
        start_time: Instant,
    },
    /// The reaction video is on disk
    Finalized {
        /// Path of the saved recording
        artifact: PathBuf,
    },
}

impl CaptureSession {
    /// Start rolling
    pub fn begin(stop_sender: tokio::sync::oneshot::Sender<()>) -> Self {
        CaptureSession::Rolling {
            start_time: Instant::now(),
            stop_sender: Some(stop_sender),
        }
    }

    /// Check if frames are currently being recorded
    pub fn is_rolling(&self) -> bool {
        matches!(self, CaptureSession::Rolling { .. })
    }

    /// Check if the recording is waiting to be written out
    pub fn is_finalizing(&self) -> bool {
        matches!(self, CaptureSession::Finalizing { .. })
    }

    /// Get the elapsed recording duration in seconds
    pub fn elapsed_seconds(&self) -> u64 {
        match self {
            CaptureSession::Rolling { start_time, .. }
            | CaptureSession::Finalizing { start_time } => start_time.elapsed().as_secs(),
            _ => 0,
        }
    }

    /// Take the stop sender and move to Finalizing (consumes the channel)
    pub fn take_stop_sender(&mut self) -> Option<tokio::sync::oneshot::Sender<()>> {
        if let CaptureSession::Rolling {
            start_time,
            stop_sender,
        } = self
        {
            let sender = stop_sender.take();
            let start_time = *start_time;
            *self = CaptureSession::Finalizing { start_time };
            sender
        } else {
            None
        }
    }

    /// Record where the finished video landed
    pub fn finalize(&mut self, artifact: PathBuf) {
        *self = CaptureSession::Finalized { artifact };
    }

    /// Get the saved recording path, if any
    pub fn artifact(&self) -> Option<&Path> {
        match self {
            CaptureSession::Finalized { artifact } => Some(artifact),
            _ => None,
        }
    }

    /// Drop any recording state (returns the previous state)
    pub fn reset(&mut self) -> Self {
        std::mem::take(self)
    }
}
