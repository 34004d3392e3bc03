use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Take the slice of `s` covering display columns `[start, start + len)`.
/// Characters straddling either boundary are replaced by a space so the
/// result always occupies exactly `len` columns (right-padded if the string
/// runs out).
pub fn slice_columns(s: &str, start: usize, len: usize) -> String {
    let mut result = String::new();
    let mut col = 0;
    let end = start + len;

    for ch in s.chars() {
        let w = char_width(ch);
        if w == 0 {
            // Zero-width characters ride along with the previous column.
            if col > start && col <= end {
                result.push(ch);
            }
            continue;
        }

        if col + w <= start {
            col += w;
            continue;
        }
        if col >= end {
            break;
        }

        if col < start || col + w > end {
            // Straddles a boundary; pad with spaces for the visible part.
            let visible = (col + w).min(end) - col.max(start);
            for _ in 0..visible {
                result.push(' ');
            }
        } else {
            result.push(ch);
        }
        col += w;
    }

    let width = display_width(&result);
    for _ in width..len {
        result.push(' ');
    }

    result
}
