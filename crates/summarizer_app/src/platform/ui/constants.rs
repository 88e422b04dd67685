use std::time::Duration;

pub const TITLE: &str = "🔮 Website Summarizer";
pub const TAGLINE: &str =
    "Drop any URL and get an instant AI-powered summary. No more endless scrolling through web pages.";
pub const INPUT_PLACEHOLDER: &str = "Paste website URL here... (e.g., https://example.com)";
pub const SUBMIT_LABEL: &str = "✨ Summarize";
pub const BUSY_LABEL: &str = "Analyzing...";
pub const KEY_HINTS: &str = "Enter summarize · ↑/↓ scroll · Esc quit";

pub const HEADER_HEIGHT: u16 = 3;
pub const INPUT_HEIGHT: u16 = 3;
pub const STATUS_HEIGHT: u16 = 1;
pub const SUBMIT_WIDTH: u16 = 18;

/// Render cadence; also drives the spinner.
pub const TICK: Duration = Duration::from_millis(75);
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
