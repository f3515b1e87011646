// SPDX-License-Identifier: GPL-3.0-only

//! Application state management

use std::path::PathBuf;

use cosmic::cosmic_config;
use cosmic::widget::about::About;
use rand::Rng;

use crate::app::effects::confetti::ConfettiSystem;
use crate::app::effects::hearts::HeartField;
use crate::capture::CaptureSession;
use crate::capture::encoders::RecordingProfile;
use crate::config::Config;
use crate::constants::ui::{DODGE_MAX, DODGE_MIN, STAGE_FADE_FRAME_MS, STAGE_FADE_MS, TAUNT_COUNT};
use crate::errors::CaptureError;
use crate::music::MusicPlayer;
use crate::slideshow::Slideshow;

/// The stages of the experience, in visit order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    /// Sealed envelope waiting to be opened
    #[default]
    Landing,
    /// The question with the evasive refusal button
    Question,
    /// Slideshow with confetti, hearts and music
    Celebration,
    /// Saved reaction summary
    Keepsake,
}

/// Opacity drop per fade frame
const FADE_STEP: f32 = STAGE_FADE_FRAME_MS as f32 / STAGE_FADE_MS as f32;

/// Fade-in state for stage changes
///
/// A stage change puts a full-opacity curtain over the new stage and steps
/// it to transparent. The epoch guards against ticks left over from a fade
/// that was interrupted by another stage change.
#[derive(Debug, Clone, Default)]
pub struct StageFade {
    /// Curtain opacity, 1.0 down to 0.0
    pub curtain_alpha: f32,
    active: bool,
    epoch: u64,
}

impl StageFade {
    /// Start a fresh fade and return its epoch
    pub fn begin(&mut self) -> u64 {
        self.curtain_alpha = 1.0;
        self.active = true;
        self.epoch += 1;
        self.epoch
    }

    /// Advance one frame; returns true while more frames are needed
    pub fn step(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.curtain_alpha -= FADE_STEP;
        if self.curtain_alpha <= 0.0 {
            self.curtain_alpha = 0.0;
            self.active = false;
        }
        self.active
    }

    /// Whether a tick belongs to the current fade
    pub fn matches_epoch(&self, epoch: u64) -> bool {
        self.epoch == epoch
    }

    /// Whether a fade is in progress
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Face shown on the question stage, reacting to the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mood {
    /// Waiting for an answer
    #[default]
    Hopeful,
    /// Pointer over the yes button
    Excited,
    /// Pointer chasing the refusal button
    Sad,
}

/// State of the evasive refusal button
#[derive(Debug, Clone)]
pub struct PromptState {
    /// Normalized horizontal position of the fled button
    pub offset_x: f32,
    /// Normalized vertical position of the fled button
    pub offset_y: f32,
    /// How many times the button has fled
    pub dodges: u32,
    /// Which refusal label is showing
    pub taunt_index: usize,
}

impl Default for PromptState {
    fn default() -> Self {
        Self {
            offset_x: 0.5,
            offset_y: 0.5,
            dodges: 0,
            taunt_index: 0,
        }
    }
}

impl PromptState {
    /// Jump to a fresh random spot and rotate the refusal label
    pub fn dodge(&mut self, rng: &mut impl Rng) {
        self.offset_x = rng.random_range(DODGE_MIN..DODGE_MAX);
        self.offset_y = rng.random_range(DODGE_MIN..DODGE_MAX);
        self.taunt_index = (self.dodges as usize) % TAUNT_COUNT;
        self.dodges += 1;
    }

    /// Flex weights that pin the button at the current normalized position.
    ///
    /// Each axis splits into a leading and trailing share of 1000; the free
    /// space around the button divides in that ratio, so the spot scales
    /// with the window.
    pub fn fill_weights(&self) -> ((u16, u16), (u16, u16)) {
        let split = |offset: f32| {
            let lead = (offset.clamp(0.0, 1.0) * 1000.0).round() as u16;
            (lead, 1000 - lead)
        };
        (split(self.offset_x), split(self.offset_y))
    }
}

/// The application model stores app-specific state used to describe its interface and
/// drive its logic.
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    pub core: cosmic::Core,
    /// Display a context drawer with the designated page if defined.
    pub context_page: ContextPage,
    /// The about page for this app.
    pub about: About,
    /// Configuration data that persists between application runs.
    pub config: Config,
    /// Configuration handler for saving settings
    pub config_handler: Option<cosmic_config::Config>,
    /// Localized theme names for the settings dropdown
    pub theme_dropdown_options: Vec<String>,
    /// Which stage of the experience is showing
    pub stage: Stage,
    /// Fade-in running over the current stage
    pub fade: StageFade,
    /// Whether the camera notice still needs an answer
    pub permission_pending: bool,
    /// Whether the camera notice was answered with continue
    pub camera_allowed: bool,
    /// Whether the envelope flap has been lifted
    pub envelope_open: bool,
    /// Mood face on the question stage
    pub mood: Mood,
    /// Evasive refusal button state
    pub prompt: PromptState,
    /// Celebration slideshow
    pub slideshow: Slideshow,
    /// Confetti field
    pub confetti: ConfettiSystem,
    /// Floating hearts field
    pub hearts: HeartField,
    /// Guards the confetti burst chain
    pub confetti_epoch: u64,
    /// Guards the particle frame chain
    pub effects_epoch: u64,
    /// Guards the recording indicator chain
    pub indicator_epoch: u64,
    /// Guards the music loop poll chain
    pub music_epoch: u64,
    /// Reaction capture state (inactive, rolling, finalizing, finalized)
    pub capture: CaptureSession,
    /// Encoder and muxer pair negotiated at startup
    pub recording_profile: RecordingProfile,
    /// Error shown when the camera could not start
    pub capture_error: Option<String>,
    /// Background music player, created when the celebration starts
    pub music: Option<MusicPlayer>,
    /// Whether music is audible right now
    pub music_playing: bool,
    /// Whether GStreamer initialized successfully
    pub gst_ready: bool,
}

/// The context page to display in the context drawer.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ContextPage {
    #[default]
    About,
    Settings,
}

/// Messages emitted by the application and its widgets.
///
/// Messages are organized into logical groups:
/// - **UI Navigation**: Context pages and external URLs
/// - **Flow**: Stage changes, the camera notice, the evasive button
/// - **Slideshow**: Slide pacing ticks
/// - **Effects**: Confetti bursts and particle frames
/// - **Capture**: Reaction recording lifecycle
/// - **Music**: Playback, looping and track selection
/// - **Settings**: Configuration and theme
#[derive(Debug, Clone)]
pub enum Message {
    // ===== UI Navigation =====
    /// Open external URL (repository, etc.)
    LaunchUrl(String),
    /// Toggle context drawer page (About, Settings)
    ToggleContextPage(ContextPage),

    // ===== Flow =====
    /// Camera notice answered (true allows recording)
    AnswerCameraNotice(bool),
    /// Lift the envelope flap, revealing the letter
    OpenEnvelope,
    /// Take the letter out and move to the question
    ReadLetter,
    /// Advance the stage fade for the given epoch
    FadeTick(u64),
    /// The yes button was pressed
    Accept,
    /// The refusal button was hovered or pressed and must flee
    DodgeNo,
    /// Change the mood face
    SetMood(Mood),

    // ===== Slideshow =====
    /// A slide interval elapsed for the given epoch
    SlideTick(u64),
    /// The mid-change caption dip finished for the given epoch
    SlideSwap(u64),
    /// The linger after the last slide is over
    CelebrationDone,

    // ===== Effects =====
    /// Fire a confetti burst for the given epoch
    ConfettiBurst(u64),
    /// Advance the particle simulations one frame for the given epoch
    EffectsFrame(u64),

    // ===== Capture =====
    /// Reaction recording started
    CaptureStarted,
    /// Stop recording and write the reaction file
    FinishCapture,
    /// Reaction capture ended, successfully or not
    CaptureFinalized(Result<PathBuf, CaptureError>),
    /// Update the recording indicator (every second)
    IndicatorTick(u64),
    /// Close the capture failure banner
    DismissCaptureAlert,
    /// Open the saved reaction in the default player
    PlayReaction,
    /// Reveal the saved reaction in the file manager
    ShowReactionInFolder,

    // ===== Music =====
    /// Toggle music playback
    ToggleMusic,
    /// Poll the music loop for the given epoch
    MusicTick(u64),
    /// Music volume setting changed
    SetMusicVolume(u32),
    /// Toggle whether music starts with the celebration
    ToggleMusicAutoplay,
    /// Open a file picker for a custom music track
    ChooseMusicTrack,
    /// Custom music track picked (None when cancelled)
    MusicTrackChosen(Option<PathBuf>),

    // ===== Settings =====
    /// Configuration updated
    UpdateConfig(Config),
    /// Theme selected in settings
    SetAppTheme(usize),
    /// Restore default settings
    ResetSettings,
    /// No-op message for async tasks that don't need a response
    Noop,
}
