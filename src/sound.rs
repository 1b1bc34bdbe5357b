//! Sound effects for the unlock gag
//!
//! Plays sound files placed in the sounds directory:
//!   - Linux: ~/.config/school-planner/sounds/
//!   - macOS: ~/Library/Application Support/school-planner/sounds/
//!
//! Any .wav/.ogg/.mp3 file works; sounds are referred to by file stem.

use std::path::PathBuf;

use crate::planner::get_app_dir;

/// Get the directory where sound files are stored
pub fn get_sounds_dir() -> Option<PathBuf> {
    get_app_dir().ok().map(|d| d.join("sounds"))
}

/// Find the full path for a sound by name (checks .wav, .ogg, .mp3)
fn find_sound_file(name: &str) -> Option<PathBuf> {
    let dir = get_sounds_dir()?;
    for ext in ["wav", "ogg", "mp3"] {
        let candidate = dir.join(format!("{name}.{ext}"));
        if candidate.exists() {
            return Some(candidate);
        }
    }
    None
}

/// Play a sound file by name. Blocks until playback finishes; missing files
/// and player failures are logged and swallowed.
pub fn play_sound(name: &str) {
    let Some(path) = find_sound_file(name) else {
        tracing::debug!("Sound file not found: {}", name);
        return;
    };

    let path_str = path.to_string_lossy().to_string();
    let (cmd, args): (&str, Vec<&str>) = if cfg!(target_os = "macos") {
        ("afplay", vec![&path_str])
    } else {
        // paplay handles ogg, mpg123 handles mp3, aplay handles wav
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("wav");

        if ext.eq_ignore_ascii_case("ogg") {
            ("paplay", vec![&path_str])
        } else if ext.eq_ignore_ascii_case("mp3") {
            ("mpg123", vec!["-q", &path_str])
        } else {
            ("aplay", vec![&path_str])
        }
    };

    let result = std::process::Command::new(cmd)
        .args(&args)
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status();

    match result {
        Ok(status) if status.success() => {}
        Ok(status) => {
            tracing::warn!("Sound player exited with {:?}", status.code());
        }
        Err(e) => {
            tracing::warn!("Failed to run '{}': {}", cmd, e);
        }
    }
}
