//! Local authentication gag
//!
//! One-shot shell-out to the platform authentication dialog, followed by a
//! sound effect and a browser redirect. This asks the OS whether the user
//! can authenticate and branches on the answer; it issues, stores and
//! verifies no credentials of its own.

use std::process::Command;

use anyhow::Result;
use tracing::{debug, warn};

use crate::config::UnlockConfig;
use crate::sound;

/// AppleScript that triggers the admin-privileges dialog and reports the
/// outcome as a single word on stdout.
const AUTH_SCRIPT: &str = r#"
try
    do shell script "true" with administrator privileges
    return "authenticated"
on error
    return "failed"
end try
"#;

/// Ask the OS to authenticate the current user. Any spawn error counts as a
/// failed authentication.
fn authenticate() -> bool {
    if cfg!(target_os = "macos") {
        match Command::new("osascript").args(["-e", AUTH_SCRIPT]).output() {
            Ok(output) => String::from_utf8_lossy(&output.stdout).trim() == "authenticated",
            Err(e) => {
                warn!("Failed to run osascript: {}", e);
                false
            }
        }
    } else {
        Command::new("pkexec")
            .arg("true")
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

/// Set the output volume (0-100). macOS only; a silent no-op elsewhere.
fn set_volume(percent: u8) {
    if !cfg!(target_os = "macos") {
        return;
    }
    let script = format!("set volume output volume {}", percent);
    if let Err(e) = Command::new("osascript").args(["-e", &script]).status() {
        debug!("Failed to set volume: {}", e);
    }
}

/// Open a URL in the default browser
fn open_url(url: &str) {
    let cmd = if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    };

    match Command::new(cmd).arg(url).status() {
        Ok(status) if status.success() => {}
        Ok(status) => warn!("'{}' exited with {:?}", cmd, status.code()),
        Err(e) => warn!("Failed to open URL: {}", e),
    }
}

/// Run the gag: authenticate, react with volume + sound, then redirect.
/// The redirect happens on both outcomes.
pub fn run(config: &UnlockConfig) -> Result<()> {
    if authenticate() {
        println!("✅ Authentication successful");
        set_volume(100);
        sound::play_sound(&config.success_sound);
    } else {
        println!("❌ Authentication failed");
        set_volume(0);
        sound::play_sound(&config.failure_sound);
    }

    open_url(&config.redirect_url);
    Ok(())
}
