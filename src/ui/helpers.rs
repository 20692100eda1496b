//! Helper functions and constants for UI rendering
//!
//! Contains utility functions for formatting, truncation, and common UI patterns.

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Spinner frames for in-flight requests
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner frame for the given tick (advances every 4 ticks)
pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[((tick / 4) % SPINNER_FRAMES.len() as u64) as usize]
}

/// Get inner rect with margin
pub fn inner_rect(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin,
        y: area.y + margin,
        width: area.width.saturating_sub(margin * 2),
        height: area.height.saturating_sub(margin * 2),
    }
}

/// A `width` x `height` rect centered in `area`, clamped to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Truncate to at most `max_width` display columns, adding "…" if truncated.
/// Wide characters (CJK, emoji) count as two columns.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// "1 yr" / "5 yrs"
pub fn format_age(age: u32) -> String {
    if age == 1 {
        "1 yr".to_string()
    } else {
        format!("{} yrs", age)
    }
}
