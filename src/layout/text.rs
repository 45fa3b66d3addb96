use crate::font::Font;
use crate::units::Pt;

/// Collapse every run of whitespace (including newlines and tabs) to a single space and
/// trim the ends
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<&str>>().join(" ")
}

/// Greedily wraps text into lines no wider than `max_width`.
///
/// Words are never split: a word that is wider than `max_width` on its own gets a line
/// to itself and overflows it. Widths are accumulated word by word, with one space
/// between words, so the result only depends on the font metrics and not on how the
/// text was spaced originally.
pub fn wrap_text(text: &str, font: &Font, size: Pt, max_width: Pt) -> Vec<String> {
    let space_width = font.width_of_text(" ", size);

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = Pt(0.0);

    for word in text.split_whitespace() {
        let word_width = font.width_of_text(word, size);
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + space_width + word_width <= max_width {
            current.push(' ');
            current.push_str(word);
            current_width += space_width + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }

        if current_width > max_width && !current.contains(' ') {
            log::warn!(
                "word {:?} is {} wide, overflowing the {} line width",
                word,
                current_width,
                max_width
            );
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// A word of a justified line, positioned horizontally
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord<'a> {
    pub text: &'a str,
    pub x: Pt,
    pub width: Pt,
}

/// Spreads the words of a line so that the first starts at `x` and the last ends at
/// `x + target_width`, with the slack shared equally between the gaps.
///
/// Returns [None] for lines with fewer than two words: there are no gaps to stretch,
/// and such lines are drawn as they are.
pub fn justify_line<'a>(
    line: &'a str,
    font: &Font,
    size: Pt,
    x: Pt,
    target_width: Pt,
) -> Option<Vec<PlacedWord<'a>>> {
    struct Word<'a> {
        word: &'a str,
        width: Pt,
    }

    let words: Vec<Word> = line
        .split_whitespace()
        .map(|word| Word {
            word,
            width: font.width_of_text(word, size),
        })
        .collect();
    if words.len() < 2 {
        return None;
    }

    let words_width: Pt = words.iter().map(|w| w.width).sum();
    let gaps = (words.len() - 1) as f32;
    let gap_width = (target_width - words_width).max(Pt(0.0)) / gaps;

    let mut cursor = x;
    let mut placed = Vec::with_capacity(words.len());
    for word in words {
        placed.push(PlacedWord {
            text: word.word,
            x: cursor,
            width: word.width,
        });
        cursor += word.width + gap_width;
    }

    Some(placed)
}
