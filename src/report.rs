//! Console report printed around a run: a header before, a summary after.
//!
//! Rendering returns `String`s so the wording can be tested; `main` prints them.

use crate::config::RunConfig;
use crate::domain::RunSummary;
use std::fmt::Write;

const RULE_WIDTH: usize = 60;
const MESSAGE_PREVIEW_CHARS: usize = 50;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// First 50 characters of a user-supplied message, or `(none)`.
pub fn message_preview(message: Option<&str>) -> String {
    match message {
        None | Some("") => "(none)".to_string(),
        Some(m) if m.chars().count() > MESSAGE_PREVIEW_CHARS => {
            let head: String = m.chars().take(MESSAGE_PREVIEW_CHARS).collect();
            format!("{}...", head)
        }
        Some(m) => m.to_string(),
    }
}

pub fn render_banner(config: &RunConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(out, "🔗 LINKEDIN CONNECTION AUTOMATION");
    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(out, "Email: {}", config.email);
    let _ = writeln!(out, "Keyword: {}", config.keyword);
    let _ = writeln!(out, "Limit: {}", config.limit);
    let _ = writeln!(out, "Message: {}", message_preview(config.message.as_deref()));
    if config.unfollow_after_connect {
        let _ = writeln!(out, "Unfollow after connect: yes");
    }
    out
}

pub fn render_summary(summary: &RunSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(out, "📊 SUMMARY");
    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(out, "✅ Successful: {}", summary.successful);
    let _ = writeln!(out, "❌ Failed: {}", summary.failed);
    if summary.skipped > 0 {
        let _ = writeln!(out, "⏭️ Skipped: {}", summary.skipped);
    }
    if summary.unfollowed > 0 {
        let _ = writeln!(out, "👋 Unfollowed: {}", summary.unfollowed);
    }
    let _ = writeln!(out, "⏱️ Time elapsed: {:.1}s", summary.elapsed.as_secs_f64());
    let _ = writeln!(out, "{}", rule());
    out
}
