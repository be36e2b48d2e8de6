//! Shared formatting utilities for the UI layer.

use chrono::{DateTime, Utc};

/// Format a timestamp as "Jan 20, 2026".
pub fn format_date_human(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

/// Coarse relative time: "just now", "5 minutes ago", "3 days ago".
///
/// Falls back to the absolute date beyond four weeks, or for timestamps in the future.
pub fn format_relative(at: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(*at);
    if elapsed.num_seconds() < 0 || elapsed.num_days() >= 28 {
        return format_date_human(at);
    }

    let (n, unit) = if elapsed.num_days() > 0 {
        (elapsed.num_days(), "day")
    } else if elapsed.num_hours() > 0 {
        (elapsed.num_hours(), "hour")
    } else if elapsed.num_minutes() > 0 {
        (elapsed.num_minutes(), "minute")
    } else {
        return "just now".to_string();
    };

    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

/// Convert a snake_case tag to Title Case (e.g. "independent_living" → "Independent Living").
pub fn format_snake_case_title(s: &str) -> String {
    s.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().to_string() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split stored plain-text content into paragraphs on blank lines.
pub fn paragraphs(content: &str) -> Vec<String> {
    content
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}
