// SPDX-License-Identifier: GPL-3.0-only

//! Background music playback
//!
//! Plays the celebration track in a loop:
//!
//! `filesrc -> decodebin -> audioconvert -> audioresample -> volume -> autoaudiosink`
//!
//! decodebin exposes its source pad once the stream type is known, so the
//! decode half links to the convert half from the pad-added callback.
//! Looping is poll-driven: the app ticks [`MusicPlayer::poll_loop`] and the
//! player seeks back to the start whenever the bus reports end of stream.

use std::path::{Path, PathBuf};

use gstreamer as gst;
use gstreamer::prelude::*;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::errors::MusicError;

/// Bundled celebration theme, written out to the cache on first use
const THEME_TRACK: &[u8] = include_bytes!("../resources/audio/keepsake-theme.wav");

/// File name the bundled theme is materialized under
const THEME_FILE_NAME: &str = "keepsake-theme.wav";

/// Cache subdirectory holding the materialized theme
const CACHE_FOLDER: &str = "cosmic-keepsake";

/// Looping audio player for the celebration track
pub struct MusicPlayer {
    pipeline: gst::Pipeline,
}

impl MusicPlayer {
    /// Build the playback pipeline for a track file
    pub fn new(track: &Path, volume_percent: u32) -> Result<Self, MusicError> {
        info!(track = %track.display(), volume_percent, "Creating music player");

        // The location property takes the path verbatim, no launch-string
        // quoting involved
        let location = track.to_str().ok_or_else(|| {
            MusicError::Track(format!(
                "Track path is not valid UTF-8: {}",
                track.display()
            ))
        })?;

        let source = gst::ElementFactory::make("filesrc")
            .property("location", location)
            .build()
            .map_err(|e| MusicError::Pipeline(format!("Failed to create filesrc: {}", e)))?;

        let decode = gst::ElementFactory::make("decodebin")
            .build()
            .map_err(|e| MusicError::Pipeline(format!("Failed to create decodebin: {}", e)))?;

        let convert = gst::ElementFactory::make("audioconvert")
            .build()
            .map_err(|e| MusicError::Pipeline(format!("Failed to create audioconvert: {}", e)))?;

        let resample = gst::ElementFactory::make("audioresample")
            .build()
            .map_err(|e| MusicError::Pipeline(format!("Failed to create audioresample: {}", e)))?;

        let volume = gst::ElementFactory::make("volume")
            .name("vol")
            .property("volume", volume_from_percent(volume_percent))
            .build()
            .map_err(|e| MusicError::Pipeline(format!("Failed to create volume: {}", e)))?;

        let sink = gst::ElementFactory::make("autoaudiosink")
            .build()
            .map_err(|e| MusicError::Pipeline(format!("Failed to create autoaudiosink: {}", e)))?;

        let pipeline = gst::Pipeline::new();
        let elements: Vec<&gst::Element> =
            vec![&source, &decode, &convert, &resample, &volume, &sink];
        pipeline
            .add_many(&elements)
            .map_err(|e| MusicError::Pipeline(format!("Failed to add elements: {}", e)))?;

        source
            .link(&decode)
            .map_err(|_| MusicError::Pipeline("Failed to link source to decode".into()))?;
        convert
            .link(&resample)
            .map_err(|_| MusicError::Pipeline("Failed to link convert to resample".into()))?;
        resample
            .link(&volume)
            .map_err(|_| MusicError::Pipeline("Failed to link resample to volume".into()))?;
        volume
            .link(&sink)
            .map_err(|_| MusicError::Pipeline("Failed to link volume to sink".into()))?;

        // Tracks with embedded artwork also expose a video pad; only the
        // audio pad gets linked
        let convert_weak = convert.downgrade();
        decode.connect_pad_added(move |_, pad| {
            let Some(convert) = convert_weak.upgrade() else {
                return;
            };
            let is_audio = pad
                .current_caps()
                .and_then(|caps| caps.structure(0).map(|s| s.name().starts_with("audio/")))
                .unwrap_or(false);
            if !is_audio {
                return;
            }
            let Some(sink_pad) = convert.static_pad("sink") else {
                return;
            };
            if sink_pad.is_linked() {
                return;
            }
            if let Err(err) = pad.link(&sink_pad) {
                warn!(?err, "Failed to link decoded audio pad");
            }
        });

        Ok(MusicPlayer { pipeline })
    }

    /// Start or resume playback
    pub fn play(&self) -> Result<(), MusicError> {
        self.pipeline
            .set_state(gst::State::Playing)
            .map_err(|e| MusicError::Pipeline(format!("Failed to start music: {}", e)))?;
        Ok(())
    }

    /// Pause playback, keeping position
    pub fn pause(&self) {
        if let Err(e) = self.pipeline.set_state(gst::State::Paused) {
            warn!(?e, "Failed to pause music");
        }
    }

    /// Adjust the volume element without interrupting playback
    pub fn set_volume(&self, volume_percent: u32) {
        if let Some(vol) = self.pipeline.by_name("vol") {
            vol.set_property("volume", volume_from_percent(volume_percent));
        }
    }

    /// Drain the bus, seeking back to the start on end of stream.
    ///
    /// Returns true when a loop restart happened.
    pub fn poll_loop(&self) -> bool {
        let Some(bus) = self.pipeline.bus() else {
            return false;
        };
        while let Some(msg) = bus.pop() {
            match msg.view() {
                gst::MessageView::Eos(_) => {
                    debug!("Music track ended, restarting for loop");
                    if let Err(e) = self.pipeline.seek_simple(
                        gst::SeekFlags::FLUSH | gst::SeekFlags::KEY_UNIT,
                        gst::ClockTime::ZERO,
                    ) {
                        warn!(?e, "Music loop seek failed");
                    }
                    return true;
                }
                gst::MessageView::Error(err) => {
                    warn!(error = %err.error(), debug = ?err.debug(), "Music pipeline error");
                }
                _ => {}
            }
        }
        false
    }
}

impl Drop for MusicPlayer {
    fn drop(&mut self) {
        let _ = self.pipeline.set_state(gst::State::Null);
    }
}

/// Pick the track to play: the configured file if it exists, otherwise the
/// bundled theme
pub fn resolve_track(config: &Config) -> Result<PathBuf, MusicError> {
    if let Some(track) = &config.music_track {
        let path = PathBuf::from(track);
        if path.is_file() {
            return Ok(path);
        }
        warn!(track = %path.display(), "Configured music track not found, using bundled theme");
    }
    materialize_theme()
}

/// Write the bundled theme into the cache directory on first use
fn materialize_theme() -> Result<PathBuf, MusicError> {
    let cache_dir = dirs::cache_dir()
        .ok_or(MusicError::NoTrack)?
        .join(CACHE_FOLDER);
    let path = cache_dir.join(THEME_FILE_NAME);
    if path.is_file() {
        return Ok(path);
    }
    std::fs::create_dir_all(&cache_dir)
        .map_err(|e| MusicError::Track(format!("Failed to create cache directory: {}", e)))?;
    std::fs::write(&path, THEME_TRACK)
        .map_err(|e| MusicError::Track(format!("Failed to write bundled theme: {}", e)))?;
    info!(path = %path.display(), "Bundled theme materialized");
    Ok(path)
}

/// Map the configured percentage onto the element's 0.0 to 1.0 scale
pub fn volume_from_percent(volume_percent: u32) -> f64 {
    f64::from(volume_percent.min(100)) / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_from_percent() {
        assert_eq!(volume_from_percent(0), 0.0);
        assert_eq!(volume_from_percent(50), 0.5);
        assert_eq!(volume_from_percent(100), 1.0);
    }

    #[test]
    fn test_volume_clamps_above_full() {
        assert_eq!(volume_from_percent(250), 1.0);
    }

    #[test]
    fn test_player_rejects_non_utf8_track_path() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        // Rejected before any pipeline element is built
        let path = Path::new(OsStr::from_bytes(b"/tmp/\xff\xfe/track.wav"));
        let err = MusicPlayer::new(path, 50).unwrap_err();
        assert!(matches!(err, MusicError::Track(_)));
    }
}
