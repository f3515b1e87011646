// SPDX-License-Identifier: GPL-3.0-only

//! Storage utilities for saved reaction videos

use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::debug;

/// Folder under the user's video directory that holds saved reactions
pub const KEEPSAKE_FOLDER: &str = "Keepsake";

/// Get the reaction save directory (~/Videos/Keepsake)
pub fn reaction_directory() -> PathBuf {
    dirs::video_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join(KEEPSAKE_FOLDER)
}

/// Build a timestamped reaction file name with the given extension
pub fn reaction_file_name(extension: &str) -> String {
    format!(
        "reaction_{}.{}",
        Local::now().format("%Y%m%d_%H%M%S"),
        extension
    )
}

/// Ensure the reaction directory exists, creating it if necessary
pub fn ensure_reaction_directory() -> std::io::Result<PathBuf> {
    let dir = reaction_directory();
    std::fs::create_dir_all(&dir)?;
    debug!(path = %dir.display(), "Reaction directory ready");
    Ok(dir)
}

/// Write a finished recording to disk, creating parent directories as needed
pub async fn write_reaction(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, bytes).await?;
    debug!(path = %path.display(), bytes = bytes.len(), "Reaction written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reaction_file_name() {
        let name = reaction_file_name("webm");
        assert!(name.starts_with("reaction_"));
        assert!(name.ends_with(".webm"));
        // reaction_YYYYMMDD_HHMMSS.webm
        assert_eq!(name.len(), "reaction_".len() + 15 + ".webm".len());
    }

    #[test]
    fn test_reaction_directory_ends_with_folder() {
        assert!(reaction_directory().ends_with(KEEPSAKE_FOLDER));
    }
}
