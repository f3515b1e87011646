// SPDX-License-Identifier: GPL-3.0-only

//! System handlers
//!
//! Settings, theme switching, context drawer toggling and handing paths or
//! URLs off to the desktop.

use std::path::Path;

use crate::app::state::{AppModel, ContextPage, Message};
use cosmic::Task;
use cosmic::cosmic_config::CosmicConfigEntry;
use tracing::{error, info};

impl AppModel {
    // =========================================================================
    // UI Navigation Handlers
    // =========================================================================

    pub(crate) fn handle_launch_url(&mut self, url: String) -> Task<cosmic::Action<Message>> {
        match open::that_detached(&url) {
            Ok(()) => {}
            Err(err) => {
                error!(url = url, ?err, "Failed to open URL");
            }
        }
        Task::none()
    }

    pub(crate) fn handle_toggle_context_page(
        &mut self,
        context_page: ContextPage,
    ) -> Task<cosmic::Action<Message>> {
        if self.context_page == context_page {
            self.core.window.show_context = !self.core.window.show_context;
        } else {
            self.context_page = context_page;
            self.core.window.show_context = true;
        }
        Task::none()
    }

    // =========================================================================
    // Settings Handlers
    // =========================================================================

    pub(crate) fn handle_update_config(
        &mut self,
        config: crate::config::Config,
    ) -> Task<cosmic::Action<Message>> {
        info!("UpdateConfig received");
        self.config = config;
        Task::none()
    }

    pub(crate) fn handle_set_app_theme(&mut self, index: usize) -> Task<cosmic::Action<Message>> {
        use crate::config::AppTheme;

        let app_theme = match index {
            0 => AppTheme::System,
            1 => AppTheme::Dark,
            2 => AppTheme::Light,
            _ => return Task::none(),
        };

        info!(?app_theme, "Setting application theme");
        self.config.app_theme = app_theme;

        if let Some(handler) = self.config_handler.as_ref()
            && let Err(err) = self.config.write_entry(handler)
        {
            error!(?err, "Failed to save app theme setting");
        }

        cosmic::command::set_theme(app_theme.theme())
    }

    /// Restore every setting to its default value
    pub(crate) fn handle_reset_settings(&mut self) -> Task<cosmic::Action<Message>> {
        info!("Settings reset to defaults");
        self.config = crate::config::Config::default();

        if let Some(handler) = self.config_handler.as_ref()
            && let Err(err) = self.config.write_entry(handler)
        {
            error!(?err, "Failed to save settings reset");
        }

        // Rebuild the player so the default track and volume take effect
        self.music = None;
        let music_task = if self.music_playing {
            self.music_playing = false;
            self.start_music()
        } else {
            Task::none()
        };

        let theme_task = cosmic::command::set_theme(self.config.app_theme.theme());
        Task::batch([theme_task, music_task])
    }

    // =========================================================================
    // Helper Functions
    // =========================================================================

    /// Show a file in the file manager with pre-selection
    pub(crate) fn show_in_file_manager(path: &Path) -> Result<(), String> {
        use std::process::Command;

        let file_path = path.display().to_string();
        let file_uri = format!("file://{}", path.display());

        // Method 1: Try D-Bus FileManager1.ShowItems
        let dbus_result = Command::new("dbus-send")
            .args([
                "--session",
                "--dest=org.freedesktop.FileManager1",
                "--type=method_call",
                "/org/freedesktop/FileManager1",
                "org.freedesktop.FileManager1.ShowItems",
                &format!("array:string:{}", file_uri),
                "string:",
            ])
            .output();

        if let Ok(output) = dbus_result
            && output.status.success()
        {
            info!("Opened file manager via D-Bus");
            return Ok(());
        }

        // Method 2: Try file manager-specific commands
        let file_managers = [
            ("nautilus", vec!["--select", file_path.as_str()]),
            ("dolphin", vec!["--select", file_path.as_str()]),
            ("nemo", vec![file_path.as_str()]),
            ("caja", vec![file_path.as_str()]),
            ("thunar", vec![file_path.as_str()]),
        ];

        for (fm_name, args) in &file_managers {
            if let Ok(output) = Command::new(fm_name).args(args).spawn() {
                info!(file_manager = fm_name, "Opened file manager");
                drop(output);
                return Ok(());
            }
        }

        // Method 3: Fallback to opening the parent directory
        if let Some(parent) = path.parent()
            && let Ok(child) = Command::new("xdg-open").arg(parent).spawn()
        {
            info!("Opened parent directory as fallback");
            drop(child);
            return Ok(());
        }

        Err("Failed to open file manager".to_string())
    }
}
