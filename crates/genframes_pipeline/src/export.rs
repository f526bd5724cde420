//! Standalone HTML export of a storyboard.

use crate::Storyboard;
use chrono::{DateTime, Utc};
use std::fmt::Write;

const STYLESHEET: &str = r#"    body { font-family: Arial, sans-serif; margin: 20px; background: white; }
    .storyboard { display: grid; grid-template-columns: repeat(2, 1fr); gap: 20px; }
    .frame { border: 2px solid #333; padding: 10px; }
    .frame img { width: 100%; height: auto; display: block; }
    .frame-info { margin-top: 10px; font-size: 14px; }
    .frame-number { font-weight: bold; margin-bottom: 5px; }
    .frame-title { font-weight: bold; color: #333; }
    .frame-details { color: #666; font-size: 12px; margin-top: 5px; }
    .header { text-align: center; margin-bottom: 30px; }
    .style-badge { display: inline-block; background: #007bff; color: white; padding: 4px 8px; border-radius: 4px; font-size: 12px; }
    .footer { margin-top: 40px; text-align: center; color: #666; font-size: 12px; }
"#;

/// Suggested file name for an export, e.g. `storyboard-noir-1700000000000.html`.
pub fn export_file_name(storyboard: &Storyboard, generated_at: DateTime<Utc>) -> String {
    format!(
        "storyboard-{}-{}.html",
        storyboard.style(),
        generated_at.timestamp_millis()
    )
}

/// Render the storyboard as a self-contained HTML page, stamped with the current time.
pub fn export_html(storyboard: &Storyboard) -> String {
    render_html(storyboard, Utc::now())
}

/// Render the storyboard as a self-contained HTML page.
///
/// Only shots that have a frame are included, in shot order. All text taken
/// from shots and frames is escaped.
pub fn render_html(storyboard: &Storyboard, generated_at: DateTime<Utc>) -> String {
    let mut html = String::with_capacity(4096);
    let style = escape_html(storyboard.style().label());

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("  <meta charset=\"utf-8\">\n");
    let _ = writeln!(
        html,
        "  <title>Storyboard - {}</title>",
        generated_at.format("%Y-%m-%d")
    );
    let _ = write!(html, "  <style>\n{}  </style>\n", STYLESHEET);
    html.push_str("</head>\n<body>\n");

    html.push_str("  <div class=\"header\">\n");
    html.push_str("    <h1>AI-Generated Storyboard</h1>\n");
    let _ = writeln!(
        html,
        "    <p>Created with GenFrames \u{2022} Style: <span class=\"style-badge\">{}</span></p>",
        style
    );
    let _ = writeln!(
        html,
        "    <p>Generated on {}</p>",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    html.push_str("  </div>\n");

    html.push_str("  <div class=\"storyboard\">\n");
    for (shot, frame) in storyboard.rendered() {
        let number = shot.order;
        let title = if shot.title.is_empty() {
            format!("Shot {}", number)
        } else {
            escape_html(&shot.title)
        };

        html.push_str("    <div class=\"frame\">\n");
        let _ = writeln!(html, "      <div class=\"frame-number\">Frame {}</div>", number);
        let _ = writeln!(
            html,
            "      <img src=\"{}\" alt=\"Frame {}\" />",
            escape_html(&frame.image_url),
            number
        );
        html.push_str("      <div class=\"frame-info\">\n");
        let _ = writeln!(html, "        <div class=\"frame-title\">{}</div>", title);
        let _ = writeln!(
            html,
            "        <div class=\"frame-details\">{} \u{2022} {}</div>",
            escape_html(&shot.camera),
            escape_html(&shot.duration)
        );
        let _ = writeln!(
            html,
            "        <div class=\"frame-details\">{}</div>",
            escape_html(&shot.action)
        );
        html.push_str("      </div>\n    </div>\n");
    }
    html.push_str("  </div>\n");

    html.push_str("  <div class=\"footer\">\n");
    html.push_str("    <p>Generated by GenFrames - AI-Powered Storyboard Creation</p>\n");
    html.push_str("  </div>\n</body>\n</html>\n");
    html
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
