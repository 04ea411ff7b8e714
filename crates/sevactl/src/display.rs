//! Terminal rendering of tracking results.
//!
//! Renders into a `String` so the layout can be tested without a TTY. Color
//! is optional; with `color = false` the output is plain text.

use owo_colors::OwoColorize;
use seva_common::{SampleSummary, TrackingCode, TrackingView, HELP_CONTACTS, QUICK_ACTIONS};
use std::fmt::Write;

pub const SEPARATOR: &str = "------------------------------------------------------------";

/// Paint `text` in the terminal color closest to a `text-<color>-600` class.
fn paint(text: &str, color_class: &str, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match color_class {
        "text-blue-600" => text.blue().to_string(),
        "text-yellow-600" => text.yellow().to_string(),
        "text-orange-600" => text.bright_yellow().to_string(),
        "text-green-600" => text.green().to_string(),
        "text-red-600" => text.red().to_string(),
        _ => text.bright_black().to_string(),
    }
}

fn heading(text: &str, color: bool) -> String {
    if color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

/// Full tracking page for one application.
pub fn render_view(view: &TrackingView, code: &TrackingCode, color: bool) -> String {
    let mut out = String::new();

    let badge = format!("{} {}", view.status_icon(), view.status);
    let _ = writeln!(out, "{}", heading(&view.application_type, color));
    let _ = writeln!(out, "आवेदक: {}", view.applicant_name);
    let _ = writeln!(out, "आवेदन संख्या: {}", code);
    let _ = writeln!(out, "Status: {}", paint(&badge, &view.status_color, color));
    let _ = writeln!(out, "{}", SEPARATOR);
    let _ = writeln!(out, "आवेदन दिनांक      {}", view.application_date);
    let _ = writeln!(out, "वर्तमान चरण       {}", view.current_stage);
    let _ = writeln!(out, "अपेक्षित पूर्णता     {}", view.expected_completion);
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "{}",
        heading("प्रगति ट्रैकिंग | Progress Timeline", color)
    );
    let _ = writeln!(
        out,
        "  {}/{} stages complete",
        view.completed_stages(),
        view.stages.len()
    );
    for (index, stage) in view.stages.iter().enumerate() {
        let mark = if stage.completed { "[x]" } else { "[ ]" };
        let mark = if stage.completed {
            paint(mark, "text-green-600", color)
        } else {
            paint(mark, "text-gray-600", color)
        };
        let date = if stage.date.is_empty() {
            String::new()
        } else {
            format!("  {}", stage.date)
        };
        let _ = writeln!(out, "  {} {}. {}{}", mark, index + 1, stage.name, date);
    }
    if let Some(next) = view.next_stage() {
        let _ = writeln!(out, "  Next: {}", next.name);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", heading("टिप्पणी | Remarks", color));
    let _ = writeln!(out, "  {}", view.remarks);

    if let Some(link) = &view.download_link {
        let _ = writeln!(out);
        let _ = writeln!(out, "Download: {}", link);
    }

    out
}

/// Quick actions and help desk block shown under a result.
pub fn render_footer(color: bool) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", heading("त्वरित कार्य | Quick Actions", color));
    for (label, path) in QUICK_ACTIONS {
        let _ = writeln!(out, "  {:<32} {}", label, path);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", heading("सहायता संपर्क | Help & Contact", color));
    for (label, value) in HELP_CONTACTS {
        let _ = writeln!(out, "  {}: {}", label, value);
    }

    out
}

/// Listing of the demonstration codes.
pub fn render_samples(samples: &[SampleSummary]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "डेमो के लिए उपलब्ध आवेदन नंबर | Sample Application Numbers"
    );
    for sample in samples {
        let _ = writeln!(
            out,
            "  {:<10} {:<24} Status: {}",
            sample.code, sample.application_type, sample.status
        );
    }
    out
}
