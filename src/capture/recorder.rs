// SPDX-License-Identifier: GPL-3.0-only

//! Reaction capture pipeline
//!
//! Records the default camera at 1280x720 into an in-memory muxed stream:
//!
//! `pipewiresrc -> videoconvert -> videoscale -> capsfilter -> encoder -> muxer -> appsink`
//!
//! Video only; the reaction clip never records audio. Bytes accumulate in
//! memory and are written out as one file when the capture finalizes.

use std::path::PathBuf;

use gstreamer as gst;
use gstreamer::prelude::*;
use gstreamer_app as gst_app;
use tracing::{error, info, warn};

use crate::constants::capture::{
    FRAME_HEIGHT, FRAME_RATE, FRAME_WIDTH, START_BUS_TIMEOUT_MS,
};
use crate::errors::CaptureError;
use crate::storage;

use super::encoders::RecordingProfile;

/// Capture pipeline wrapper
pub struct ReactionRecorder {
    pipeline: gst::Pipeline,
    appsink: gst_app::AppSink,
}

impl ReactionRecorder {
    /// Build the capture pipeline for the given profile
    pub fn new(profile: RecordingProfile) -> Result<Self, CaptureError> {
        info!(
            width = FRAME_WIDTH,
            height = FRAME_HEIGHT,
            framerate = FRAME_RATE,
            label = profile.label,
            "Creating reaction recorder"
        );

        // Empty target lets PipeWire pick the default camera
        let source = gst::ElementFactory::make("pipewiresrc")
            .property("do-timestamp", true)
            .build()
            .map_err(|e| CaptureError::Pipeline(format!("Failed to create pipewiresrc: {}", e)))?;

        let videoconvert = gst::ElementFactory::make("videoconvert")
            .build()
            .map_err(|e| CaptureError::Pipeline(format!("Failed to create videoconvert: {}", e)))?;

        let videoscale = gst::ElementFactory::make("videoscale")
            .build()
            .map_err(|e| CaptureError::Pipeline(format!("Failed to create videoscale: {}", e)))?;

        let output_caps = gst::Caps::builder("video/x-raw")
            .field("width", FRAME_WIDTH as i32)
            .field("height", FRAME_HEIGHT as i32)
            .field("framerate", gst::Fraction::new(FRAME_RATE as i32, 1))
            .build();

        let capsfilter = gst::ElementFactory::make("capsfilter")
            .property("caps", &output_caps)
            .build()
            .map_err(|e| CaptureError::Pipeline(format!("Failed to create capsfilter: {}", e)))?;

        let encoder = create_encoder(&profile)?;
        let muxer = create_muxer(&profile)?;

        let appsink = gst::ElementFactory::make("appsink")
            .build()
            .map_err(|e| CaptureError::Pipeline(format!("Failed to create appsink: {}", e)))?
            .dynamic_cast::<gst_app::AppSink>()
            .map_err(|_| CaptureError::Pipeline("Failed to cast to AppSink".to_string()))?;

        appsink.set_property("emit-signals", false);
        appsink.set_property("sync", false);
        appsink.set_property("max-buffers", 64u32);
        appsink.set_property("drop", false);

        let pipeline = gst::Pipeline::new();
        let elements: Vec<&gst::Element> = vec![
            &source,
            &videoconvert,
            &videoscale,
            &capsfilter,
            &encoder,
            &muxer,
            appsink.upcast_ref::<gst::Element>(),
        ];
        pipeline
            .add_many(&elements)
            .map_err(|e| CaptureError::Pipeline(format!("Failed to add elements: {}", e)))?;

        source
            .link(&videoconvert)
            .map_err(|_| CaptureError::Pipeline("Failed to link source to convert".into()))?;
        videoconvert
            .link(&videoscale)
            .map_err(|_| CaptureError::Pipeline("Failed to link convert to scale".into()))?;
        videoscale
            .link(&capsfilter)
            .map_err(|_| CaptureError::Pipeline("Failed to link scale to capsfilter".into()))?;
        capsfilter
            .link(&encoder)
            .map_err(|_| CaptureError::Pipeline("Failed to link capsfilter to encoder".into()))?;
        encoder
            .link(&muxer)
            .map_err(|_| CaptureError::Pipeline("Failed to link encoder to muxer".into()))?;
        muxer
            .link(appsink.upcast_ref::<gst::Element>())
            .map_err(|_| CaptureError::Pipeline("Failed to link muxer to appsink".into()))?;

        Ok(ReactionRecorder { pipeline, appsink })
    }

    /// Start the pipeline and surface early bus errors
    pub fn start(&self) -> Result<(), CaptureError> {
        self.pipeline
            .set_state(gst::State::Playing)
            .map_err(|e| CaptureError::Pipeline(format!("Failed to start pipeline: {}", e)))?;

        let Some(bus) = self.pipeline.bus() else {
            return Ok(());
        };
        if let Some(msg) = bus.timed_pop_filtered(
            gst::ClockTime::from_mseconds(START_BUS_TIMEOUT_MS),
            &[gst::MessageType::Error, gst::MessageType::Warning],
        ) {
            match msg.view() {
                gst::MessageView::Error(err) => {
                    error!(
                        error = %err.error(),
                        debug = ?err.debug(),
                        source = ?err.src().map(|s| s.name()),
                        "GStreamer error during capture start"
                    );
                    let _ = self.pipeline.set_state(gst::State::Null);
                    return Err(classify_start_error(&err.error().to_string()));
                }
                gst::MessageView::Warning(w) => {
                    warn!(
                        warning = %w.error(),
                        debug = ?w.debug(),
                        "GStreamer warning during capture start"
                    );
                }
                _ => {}
            }
        }

        Ok(())
    }

    /// Pull the next muxed chunk, waiting at most `timeout_ms`
    pub fn pull_chunk(&self, timeout_ms: u64) -> Option<Vec<u8>> {
        let sample = self
            .appsink
            .try_pull_sample(gst::ClockTime::from_mseconds(timeout_ms))?;
        let buffer = sample.buffer()?;
        let map = buffer.map_readable().ok()?;
        Some(map.as_slice().to_vec())
    }

    /// Whether the sink has seen EOS and holds no more samples
    pub fn is_drained(&self) -> bool {
        self.appsink.is_eos()
    }

    /// Send EOS so the muxer writes its headers and indexes
    pub fn request_finish(&self) {
        if !self.pipeline.send_event(gst::event::Eos::new()) {
            warn!("Failed to send EOS event to pipeline");
        }
    }

    /// Pull everything still queued after EOS until the sink reports drained
    pub fn drain(&self, bytes: &mut Vec<u8>) {
        let mut idle = 0;
        while idle < 20 {
            match self.pull_chunk(250) {
                Some(chunk) => {
                    bytes.extend_from_slice(&chunk);
                    idle = 0;
                }
                None if self.is_drained() => break,
                None => idle += 1,
            }
        }
    }

    /// Tear the pipeline down
    pub fn shutdown(&self) -> Result<(), CaptureError> {
        self.pipeline
            .set_state(gst::State::Null)
            .map_err(|e| CaptureError::Finalize(format!("Failed to stop pipeline: {}", e)))?;
        Ok(())
    }
}

impl Drop for ReactionRecorder {
    fn drop(&mut self) {
        let _ = self.pipeline.set_state(gst::State::Null);
    }
}

/// Create and configure the encoder element for a profile
fn create_encoder(profile: &RecordingProfile) -> Result<gst::Element, CaptureError> {
    let builder = gst::ElementFactory::make(profile.encoder);
    let builder = match profile.encoder {
        // Realtime deadline keeps VPx encoding from starving the camera
        "vp8enc" | "vp9enc" => builder
            .property("deadline", 1i64)
            .property("target-bitrate", 2_000_000i32),
        "x264enc" => builder
            .property_from_str("speed-preset", "ultrafast")
            .property_from_str("tune", "zerolatency")
            .property("bitrate", 2000u32),
        _ => builder,
    };
    builder.build().map_err(|e| {
        CaptureError::Pipeline(format!("Failed to create {}: {}", profile.encoder, e))
    })
}

/// Create and configure the muxer element for a profile
fn create_muxer(profile: &RecordingProfile) -> Result<gst::Element, CaptureError> {
    let builder = gst::ElementFactory::make(profile.muxer);
    let builder = if profile.muxer == "mp4mux" {
        // Fragmented output so the appsink receives data before EOS
        builder.property("fragment-duration", 1000u32)
    } else {
        builder
    };
    builder.build().map_err(|e| {
        CaptureError::Pipeline(format!("Failed to create {}: {}", profile.muxer, e))
    })
}

/// Map a bus error message onto the user-facing capture error
pub fn classify_start_error(message: &str) -> CaptureError {
    let lowered = message.to_lowercase();
    if lowered.contains("permission")
        || lowered.contains("denied")
        || lowered.contains("not authorized")
    {
        CaptureError::PermissionDenied
    } else {
        CaptureError::DeviceUnavailable
    }
}

/// Run a full capture: camera to muxed bytes to a file in the keepsake folder.
///
/// Recording continues until `stop_rx` fires or its sender is dropped. The
/// blocking pull loop runs on the blocking pool; only the file write happens
/// on the async runtime.
pub async fn record_reaction(
    profile: RecordingProfile,
    stop_rx: tokio::sync::oneshot::Receiver<()>,
) -> Result<PathBuf, CaptureError> {
    let bytes = tokio::task::spawn_blocking(move || capture_bytes(profile, stop_rx))
        .await
        .map_err(|e| CaptureError::Pipeline(format!("Capture task panicked: {}", e)))??;

    let path = storage::reaction_directory().join(storage::reaction_file_name(profile.extension));
    storage::write_reaction(&path, &bytes)
        .await
        .map_err(|e| CaptureError::Finalize(e.to_string()))?;

    info!(path = %path.display(), bytes = bytes.len(), "Reaction saved");
    Ok(path)
}

/// Blocking capture loop: pull chunks until stop is requested, then drain
fn capture_bytes(
    profile: RecordingProfile,
    mut stop_rx: tokio::sync::oneshot::Receiver<()>,
) -> Result<Vec<u8>, CaptureError> {
    let recorder = ReactionRecorder::new(profile)?;
    recorder.start()?;

    let mut bytes = Vec::new();
    loop {
        match stop_rx.try_recv() {
            Err(tokio::sync::oneshot::error::TryRecvError::Empty) => {}
            // Stop requested, or the app side went away
            _ => break,
        }
        if let Some(chunk) = recorder.pull_chunk(100) {
            bytes.extend_from_slice(&chunk);
        }
    }

    recorder.request_finish();
    recorder.drain(&mut bytes);
    recorder.shutdown()?;

    if bytes.is_empty() {
        return Err(CaptureError::Finalize(
            "No data was produced by the encoder".to_string(),
        ));
    }
    Ok(bytes)
}
