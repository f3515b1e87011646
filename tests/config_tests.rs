// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for configuration module

use cosmic_keepsake::Config;
use cosmic_keepsake::config::AppTheme;
use cosmic_keepsake::constants::music::DEFAULT_VOLUME_PERCENT;

#[test]
fn test_config_default() {
    let config = Config::default();

    // Music plays out of the box at the default volume
    assert!(
        config.music_enabled,
        "Music should be enabled by default"
    );
    assert_eq!(config.music_volume, DEFAULT_VOLUME_PERCENT);
}

#[test]
fn test_config_default_track_is_bundled() {
    // No custom track means the bundled theme is used
    let config = Config::default();
    assert!(config.music_track.is_none());
}

#[test]
fn test_config_default_theme_follows_system() {
    let config = Config::default();
    assert_eq!(config.app_theme, AppTheme::System);
    assert_eq!(AppTheme::default(), AppTheme::System);
}
