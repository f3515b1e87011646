// SPDX-License-Identifier: GPL-3.0-only

//! Capture handlers
//!
//! Owns the reaction recording lifecycle: starting the camera once the
//! notice is answered, the recording indicator, the stop-and-finalize
//! handoff, and opening the saved file afterwards.

use std::path::PathBuf;

use crate::app::state::{AppModel, Message};
use crate::capture::CaptureSession;
use crate::capture::recorder;
use crate::constants::capture::INDICATOR_TICK_MS;
use crate::errors::CaptureError;
use crate::fl;
use cosmic::Task;
use tracing::{debug, error, info};

impl AppModel {
    // =========================================================================
    // Capture Handlers
    // =========================================================================

    /// Start recording the reaction, if the camera was allowed
    pub(crate) fn start_reaction_capture(&mut self) -> Task<cosmic::Action<Message>> {
        if !self.camera_allowed {
            debug!("Camera not allowed, continuing without capture");
            return Task::none();
        }
        if !self.gst_ready {
            error!("GStreamer unavailable, cannot record reaction");
            self.capture_error = Some(fl!("capture-failed"));
            return Task::none();
        }
        if self.capture.is_rolling() {
            return Task::none();
        }

        let profile = self.recording_profile;
        info!(profile = profile.label, "Starting reaction capture");

        let (stop_tx, stop_rx) = tokio::sync::oneshot::channel();
        self.capture = CaptureSession::begin(stop_tx);
        self.capture_error = None;

        let capture_task = Task::perform(
            async move { recorder::record_reaction(profile, stop_rx).await },
            |result| cosmic::Action::App(Message::CaptureFinalized(result)),
        );

        let started = Task::done(cosmic::Action::App(Message::CaptureStarted));
        Task::batch([started, capture_task])
    }

    pub(crate) fn handle_capture_started(&mut self) -> Task<cosmic::Action<Message>> {
        self.indicator_epoch += 1;
        Self::delay_task(
            INDICATOR_TICK_MS,
            Message::IndicatorTick(self.indicator_epoch),
        )
    }

    pub(crate) fn handle_indicator_tick(&mut self, epoch: u64) -> Task<cosmic::Action<Message>> {
        if epoch == self.indicator_epoch && self.capture.is_rolling() {
            return Self::delay_task(INDICATOR_TICK_MS, Message::IndicatorTick(epoch));
        }
        Task::none()
    }

    /// Signal the recorder to stop; a no-op when nothing is recording
    pub(crate) fn handle_finish_capture(&mut self) -> Task<cosmic::Action<Message>> {
        if let Some(sender) = self.capture.take_stop_sender() {
            info!("Stopping reaction capture");
            let _ = sender.send(());
            // CaptureFinalized arrives once the file is written
        }
        Task::none()
    }

    pub(crate) fn handle_capture_finalized(
        &mut self,
        result: Result<PathBuf, CaptureError>,
    ) -> Task<cosmic::Action<Message>> {
        match result {
            Ok(path) => {
                info!(path = %path.display(), "Reaction capture finalized");
                self.capture.finalize(path);
            }
            Err(err) => {
                error!(error = %err, "Reaction capture failed");
                self.capture_error = Some(localize_capture_error(&err));
                self.capture.reset();
            }
        }
        Task::none()
    }

    pub(crate) fn handle_play_reaction(&self) -> Task<cosmic::Action<Message>> {
        if let Some(path) = self.capture.artifact() {
            info!(path = %path.display(), "Opening saved reaction");
            if let Err(err) = open::that_detached(path) {
                error!(error = %err, "Failed to open saved reaction");
            }
        }
        Task::none()
    }

    pub(crate) fn handle_show_reaction_in_folder(&self) -> Task<cosmic::Action<Message>> {
        if let Some(path) = self.capture.artifact()
            && let Err(err) = Self::show_in_file_manager(path)
        {
            error!(error = %err, "Failed to reveal saved reaction");
        }
        Task::none()
    }
}

/// Map a capture error onto the localized line shown in the interface
fn localize_capture_error(error: &CaptureError) -> String {
    match error {
        CaptureError::PermissionDenied => fl!("capture-permission-denied"),
        CaptureError::DeviceUnavailable => fl!("capture-device-unavailable"),
        CaptureError::Pipeline(_) | CaptureError::Finalize(_) => fl!("capture-failed"),
    }
}
