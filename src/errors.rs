// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the keepsake application

use std::fmt;

/// Reaction capture errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// The camera portal or device refused access
    PermissionDenied,
    /// No usable camera was found or it is busy
    DeviceUnavailable,
    /// The capture pipeline could not be built or run
    Pipeline(String),
    /// The recording could not be muxed or written to disk
    Finalize(String),
}

/// Background music errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MusicError {
    /// No track is configured and no fallback was found
    NoTrack,
    /// The track file could not be materialized or read
    Track(String),
    /// The playback pipeline failed
    Pipeline(String),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::PermissionDenied => write!(f, "Camera access was denied"),
            CaptureError::DeviceUnavailable => write!(f, "No camera is available"),
            CaptureError::Pipeline(msg) => write!(f, "Pipeline error: {}", msg),
            CaptureError::Finalize(msg) => write!(f, "Failed to finalize recording: {}", msg),
        }
    }
}

impl fmt::Display for MusicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MusicError::NoTrack => write!(f, "No music track available"),
            MusicError::Track(msg) => write!(f, "Invalid music track: {}", msg),
            MusicError::Pipeline(msg) => write!(f, "Playback error: {}", msg),
        }
    }
}

impl std::error::Error for CaptureError {}
impl std::error::Error for MusicError {}
