use crate::font::FontStyle;
use crate::units::Pt;
use serde::{Deserialize, Serialize};

/// How a run of text sits relative to its `x` anchor
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// `x` is the left edge of the text
    Left,
    /// `x` is the horizontal centre of the text
    Center,
    /// `x` is the right edge of the text
    Right,
}

/// A single run of text placed on a page.
///
/// Coordinates are measured from the top-left corner of the page with `y` growing
/// downwards, and `y` is the baseline of the text. Backends that use PDF's bottom-up
/// coordinate space flip `y` against the page height when drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawInstruction {
    pub text: String,
    pub x: Pt,
    pub y: Pt,
    pub font_style: FontStyle,
    pub font_size: Pt,
    pub alignment: Alignment,
    /// Spread the words of `text` so that they fill exactly `width`
    pub justify: bool,
    /// Horizontal span of the run: its natural width, or the target width when justified
    pub width: Pt,
}

impl DrawInstruction {
    /// The left edge of the run once alignment is applied
    pub fn left(&self) -> Pt {
        match self.alignment {
            Alignment::Left => self.x,
            Alignment::Center => self.x - self.width / 2.0,
            Alignment::Right => self.x - self.width,
        }
    }

    /// The right edge of the run once alignment is applied
    pub fn right(&self) -> Pt {
        self.left() + self.width
    }
}

/// A laid-out page: everything drawn between the top margin and the bottom of the
/// content area, plus the footer stamped on once the page count is known
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// 1-based page number, in creation order
    pub number: usize,
    /// The laid out text, in drawing order
    pub contents: Vec<DrawInstruction>,
    /// The "Page i of N" annotation. Only written by the footer pass.
    pub footer: Option<DrawInstruction>,
}

impl Page {
    pub fn new(number: usize) -> Page {
        Page {
            number,
            contents: Vec::default(),
            footer: None,
        }
    }

    pub fn add_instruction(&mut self, instruction: DrawInstruction) {
        self.contents.push(instruction);
    }

    /// Every instruction on the page, body first and the footer last
    pub fn instructions(&self) -> impl Iterator<Item = &DrawInstruction> {
        self.contents.iter().chain(self.footer.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn run(alignment: Alignment) -> DrawInstruction {
        DrawInstruction {
            text: "Page 1 of 1".to_string(),
            x: Pt(100.0),
            y: Pt(10.0),
            font_style: FontStyle::Regular,
            font_size: Pt(10.0),
            alignment,
            justify: false,
            width: Pt(40.0),
        }
    }

    #[test]
    fn alignment_moves_left_edge() {
        assert_eq!(run(Alignment::Left).left(), Pt(100.0));
        assert_eq!(run(Alignment::Center).left(), Pt(80.0));
        assert_eq!(run(Alignment::Right).left(), Pt(60.0));
        assert_eq!(run(Alignment::Right).right(), Pt(100.0));
    }

    #[test]
    fn footer_is_drawn_last() {
        let mut page = Page::new(1);
        assert!(page.is_empty());
        page.add_instruction(run(Alignment::Left));
        page.footer = Some(run(Alignment::Right));
        let alignments: Vec<Alignment> = page.instructions().map(|i| i.alignment).collect();
        assert_eq!(alignments, vec![Alignment::Left, Alignment::Right]);
    }
}
