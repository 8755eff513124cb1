//! Text metrics used to estimate word-wrapped cell heights.

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Number of lines `s` takes when word-wrapped at `max_width` columns.
///
/// Explicit newlines always break. Words wider than a line are broken
/// between characters. Empty input still takes one line.
pub fn wrapped_line_count(s: &str, max_width: usize) -> usize {
    if max_width == 0 {
        return 0;
    }

    let mut lines = 0;

    for input_line in s.split('\n') {
        if input_line.trim().is_empty() {
            lines += 1;
            continue;
        }

        // Width of the line currently being filled
        let mut current = 0;

        for word in input_line.split_whitespace() {
            let word_width = display_width(word);

            if word_width > max_width {
                if current > 0 {
                    lines += 1;
                    current = 0;
                }
                for ch in word.chars() {
                    let w = char_width(ch);
                    if w == 0 {
                        continue;
                    }
                    if current > 0 && current + w > max_width {
                        lines += 1;
                        current = 0;
                    }
                    current += w;
                }
                continue;
            }

            let needed = if current == 0 { word_width } else { word_width + 1 };
            if current + needed > max_width {
                lines += 1;
                current = word_width;
            } else {
                current += needed;
            }
        }

        if current > 0 {
            lines += 1;
        }
    }

    lines.max(1)
}
