//! Desktop notifications for due tasks
//!
//! Sends a transient OS notification via osascript (macOS) or notify-send
//! (Linux). Fire-and-forget: failures are logged and swallowed, never
//! propagated to the caller.

use std::process::Command;

use tracing::warn;

/// Show a desktop notification with the given title and body
pub fn send(title: &str, body: &str) {
    let result = if cfg!(target_os = "macos") {
        let script = format!(
            "display notification \"{}\" with title \"{}\"",
            escape(body),
            escape(title)
        );
        Command::new("osascript").args(["-e", &script]).status()
    } else {
        Command::new("notify-send").args([title, body]).status()
    };

    match result {
        Ok(status) if status.success() => {}
        Ok(status) => warn!("Notification command exited with {:?}", status.code()),
        Err(e) => warn!("Failed to send notification: {}", e),
    }
}

/// Escape for embedding in a double-quoted AppleScript string
fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain_text() {
        assert_eq!(escape("Tasks due"), "Tasks due");
    }

    #[test]
    fn test_escape_quotes_and_backslashes() {
        assert_eq!(escape(r#"read "Moby Dick""#), r#"read \"Moby Dick\""#);
        assert_eq!(escape(r"a\b"), r"a\\b");
    }
}
