//! Column-width helpers for terminal rows.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Exactly `width` terminal columns of `s`.
///
/// Short text is right-padded with spaces. Overflowing text is cut and ends
/// in an ellipsis; a wide character that no longer fits leaves a blank column.
pub fn fit_to_width(s: &str, width: usize) -> String {
    let full = s.width();
    if full <= width {
        let mut out = s.to_string();
        out.push_str(&" ".repeat(width - full));
        return out;
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - 1;
    let mut out = String::with_capacity(width);
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push(ELLIPSIS);
    out.push_str(&" ".repeat(budget - used));
    out
}

/// Collapse runs of whitespace (including newlines) into single spaces.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
