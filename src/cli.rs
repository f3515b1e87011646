// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands for working with the reaction recorder
//!
//! This module provides command-line functionality for:
//! - Listing the recording profiles GStreamer can provide
//! - Recording a reaction clip without the card interface

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use cosmic_keepsake::capture::encoders;
use cosmic_keepsake::capture::recorder::ReactionRecorder;
use cosmic_keepsake::storage;

/// List the candidate recording profiles and whether they are installed
pub fn list_profiles() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize GStreamer
    gstreamer::init()?;

    let negotiated = encoders::negotiate();

    println!("Recording profiles:");
    println!();
    for profile in &encoders::CANDIDATES {
        let installed = if encoders::is_installed(profile) {
            "installed"
        } else {
            "missing"
        };
        let marker = if *profile == negotiated { "*" } else { " " };
        println!(
            "  {} {:10} {} + {} -> .{} ({})",
            marker, profile.label, profile.encoder, profile.muxer, profile.extension, installed
        );
    }
    println!();
    println!("* profile used for recordings");

    Ok(())
}

/// Record a reaction clip from the default camera
pub fn record_reaction(
    duration: u64,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize GStreamer
    gstreamer::init()?;

    let profile = encoders::negotiate();
    println!("Recording profile: {}", profile.label);
    println!("Duration: {} seconds", duration);

    let recorder = ReactionRecorder::new(profile)?;
    recorder.start()?;

    println!();
    println!("Recording... (press Ctrl+C to stop early)");

    // Set up Ctrl+C handler
    let stop_flag = Arc::new(AtomicBool::new(false));
    let stop_flag_clone = stop_flag.clone();
    ctrlc::set_handler(move || {
        stop_flag_clone.store(true, Ordering::SeqCst);
    })?;

    let start = Instant::now();
    let target_duration = Duration::from_secs(duration);
    let mut bytes = Vec::new();

    while start.elapsed() < target_duration {
        if stop_flag.load(Ordering::SeqCst) {
            println!();
            println!("Stopping early...");
            break;
        }

        if let Some(chunk) = recorder.pull_chunk(100) {
            bytes.extend_from_slice(&chunk);
        }

        // Print progress
        let elapsed = start.elapsed().as_secs();
        print!("\rRecording: {:02}:{:02}", elapsed / 60, elapsed % 60);
        std::io::stdout().flush()?;
    }
    println!();

    recorder.request_finish();
    recorder.drain(&mut bytes);
    recorder.shutdown()?;

    if bytes.is_empty() {
        return Err("No data was produced by the encoder".into());
    }

    let path = match output {
        Some(path) => path,
        None => storage::reaction_directory().join(storage::reaction_file_name(profile.extension)),
    };

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(storage::write_reaction(&path, &bytes))?;

    println!("Reaction saved: {}", path.display());
    Ok(())
}
