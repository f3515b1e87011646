// SPDX-License-Identifier: GPL-3.0-only

//! Recording profile negotiation
//!
//! Candidate codec/container pairings are tried in preference order and the
//! first one whose GStreamer factories are installed wins. WebM stays the
//! hard fallback so a recording can always be produced on a stock install.

use gstreamer as gst;
use tracing::info;

/// A codec/container pairing the recorder can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordingProfile {
    /// Short name shown in logs and the CLI
    pub label: &'static str,
    /// GStreamer encoder factory name
    pub encoder: &'static str,
    /// GStreamer muxer factory name
    pub muxer: &'static str,
    /// Extension of the written file
    pub extension: &'static str,
}

/// Candidate profiles in preference order
pub const CANDIDATES: [RecordingProfile; 5] = [
    RecordingProfile {
        label: "webm-vp9",
        encoder: "vp9enc",
        muxer: "webmmux",
        extension: "webm",
    },
    RecordingProfile {
        label: "webm-vp8",
        encoder: "vp8enc",
        muxer: "webmmux",
        extension: "webm",
    },
    // Bare container entry; WebM without a codec qualifier means VP8
    RecordingProfile {
        label: "webm",
        encoder: "vp8enc",
        muxer: "webmmux",
        extension: "webm",
    },
    RecordingProfile {
        label: "mp4-h264",
        encoder: "x264enc",
        muxer: "mp4mux",
        extension: "mp4",
    },
    // MPEG program streams are saved under the webm extension, matching the
    // rule that only mp4 output gets its own extension.
    RecordingProfile {
        label: "mpeg2",
        encoder: "mpeg2enc",
        muxer: "mpegpsmux",
        extension: "webm",
    },
];

/// The fallback profile used when nothing else is installed
pub fn default_profile() -> RecordingProfile {
    CANDIDATES[2]
}

/// First candidate accepted by `probe`, falling back to plain WebM
pub fn first_supported(mut probe: impl FnMut(&RecordingProfile) -> bool) -> RecordingProfile {
    CANDIDATES
        .iter()
        .copied()
        .find(|profile| probe(profile))
        .unwrap_or_else(default_profile)
}

/// Check that the profile's encoder and muxer factories are installed
pub fn is_installed(profile: &RecordingProfile) -> bool {
    gst::ElementFactory::find(profile.encoder).is_some()
        && gst::ElementFactory::find(profile.muxer).is_some()
}

/// Pick the best installed profile (requires GStreamer to be initialized)
pub fn negotiate() -> RecordingProfile {
    let profile = first_supported(is_installed);
    info!(
        label = profile.label,
        encoder = profile.encoder,
        muxer = profile.muxer,
        "Negotiated recording profile"
    );
    profile
}
