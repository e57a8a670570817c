use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Room reserved after a header name for " ▲3".
pub const SORT_INDICATOR_ROOM: u16 = 3;
const ELLIPSIS: char = '…';

pub fn display_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

/// Cuts `text` to at most `max` terminal cells, ending in `…` when shortened.
pub fn truncate_to_width(text: &str, max: u16) -> String {
    let max = usize::from(max);
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push(ELLIPSIS);
    out
}

/// Keeps the end of `text` within `max` cells, for an input whose cursor sits at the end.
pub fn tail_to_width(text: &str, max: u16) -> String {
    let max = usize::from(max);
    let mut kept: Vec<char> = Vec::new();
    let mut used = 0;
    for ch in text.chars().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > max {
            break;
        }
        kept.push(ch);
        used += w;
    }
    kept.into_iter().rev().collect()
}

/// Width for a column nobody has resized: wide enough for the header (plus sort
/// indicator) and the longest cell seen, clamped to `min..=cap`.
pub fn auto_column_width<'a>(
    header: &str,
    cells: impl IntoIterator<Item = &'a str>,
    min: u16,
    cap: u16,
) -> u16 {
    let header_width = display_width(header).saturating_add(SORT_INDICATOR_ROOM);
    let widest = cells
        .into_iter()
        .map(display_width)
        .fold(header_width, u16::max);
    widest.clamp(min, cap.max(min))
}
