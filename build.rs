// SPDX-License-Identifier: GPL-3.0-only

use std::process::Command;

fn main() {
    // Re-run build script if git HEAD changes
    println!("cargo::rerun-if-changed=.git/HEAD");
    println!("cargo::rerun-if-changed=.git/refs/tags");

    // Packaged builds (e.g. flatpak) set the version explicitly
    let version = std::env::var("COSMIC_KEEPSAKE_VERSION").unwrap_or_else(|_| git_version());

    println!("cargo::rustc-env=GIT_VERSION={}", version);
}

fn git_version() -> String {
    // "v0.1.0" at a tag, "v0.1.0-5-gabcdef1" when ahead of one
    let described = Command::new("git")
        .args(["describe", "--tags", "--always", "--match", "v*"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string());

    match described {
        Some(version) => version.strip_prefix('v').unwrap_or(&version).to_string(),
        None => env!("CARGO_PKG_VERSION").to_string(),
    }
}
