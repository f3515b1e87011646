// SPDX-License-Identifier: GPL-3.0-only

//! COSMIC Keepsake - an interactive greeting card for the COSMIC desktop
//!
//! The card walks through four stages: a sealed envelope, a question whose
//! refusal button refuses to be pressed, a celebration with confetti, hearts,
//! music and a slideshow, and a keepsake screen pointing at the camera
//! reaction that was recorded along the way.
//!
//! # Architecture
//!
//! - [`app`]: Main application logic and UI
//! - [`capture`]: Webcam reaction recording
//! - [`music`]: Background music playback
//! - [`slideshow`]: Celebration slideshow state machine
//! - [`config`]: User configuration handling
//! - [`storage`]: Reaction file storage

pub mod app;
pub mod capture;
pub mod config;
pub mod constants;
pub mod errors;
pub mod i18n;
pub mod music;
pub mod slideshow;
pub mod storage;

// Re-export commonly used types
pub use app::{AppModel, Message, Stage};
pub use capture::CaptureSession;
pub use config::Config;
