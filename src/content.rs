//! Content stream rendering for laid-out pages.

use crate::font::{Font, FontStyle, Typeface};
use crate::layout::justify_line;
use crate::page::{DrawInstruction, Page};
use crate::units::Pt;
use std::io::Write;

/// Renders a page's instructions, footer included, to PDF content stream operators.
///
/// Instruction coordinates run from the top of the page; PDF's run from the bottom, so
/// every baseline is flipped against `page_height` here.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_page(
    page: &Page,
    typeface: &Typeface,
    page_height: Pt,
) -> Result<Vec<u8>, std::io::Error> {
    let mut content: Vec<u8> = Vec::default();
    if page.instructions().next().is_none() {
        return Ok(content);
    }

    write!(&mut content, "q\n")?;
    write!(&mut content, "0 g\n")?;
    for instruction in page.instructions() {
        render_instruction(&mut content, instruction, typeface, page_height)?;
    }
    write!(&mut content, "Q\n")?;

    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn render_instruction(
    content: &mut Vec<u8>,
    instruction: &DrawInstruction,
    typeface: &Typeface,
    page_height: Pt,
) -> Result<(), std::io::Error> {
    if instruction.text.is_empty() {
        return Ok(());
    }

    let font = typeface.font(instruction.font_style);
    let baseline = page_height - instruction.y;

    write!(content, "BT\n")?;
    write_font(content, instruction.font_style, instruction.font_size)?;

    let words = if instruction.justify {
        justify_line(
            &instruction.text,
            font,
            instruction.font_size,
            instruction.left(),
            instruction.width,
        )
    } else {
        None
    };

    match words {
        Some(words) => {
            for word in words {
                write_position(content, word.x, baseline)?;
                write_text(content, font, word.text)?;
            }
        }
        None => {
            write_position(content, instruction.left(), baseline)?;
            write_text(content, font, &instruction.text)?;
        }
    }

    write!(content, "ET\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn write_position(content: &mut Vec<u8>, x: Pt, y: Pt) -> Result<(), std::io::Error> {
    write!(content, "1 0 0 1 {} {} Tm\n", x.0, y.0)
}

#[allow(clippy::write_with_newline)]
fn write_font(content: &mut Vec<u8>, style: FontStyle, size: Pt) -> Result<(), std::io::Error> {
    write!(content, "/{} {} Tf\n", style.resource_name(), size.0)
}

#[allow(clippy::write_with_newline)]
fn write_text(content: &mut Vec<u8>, font: &Font, text: &str) -> Result<(), std::io::Error> {
    write!(content, "<")?;
    for byte in font.encode(text) {
        write!(content, "{byte:02x}")?;
    }
    write!(content, "> Tj\n")
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::layout::{layout_document, LayoutConfig};

    fn rendered(text: &str) -> String {
        let config = LayoutConfig::default();
        let typeface = Typeface::default();
        let layout = layout_document(text, &config, &typeface);
        let page = layout.page(1).expect("page 1");
        let bytes = render_page(page, &typeface, config.page_height()).expect("renders");
        String::from_utf8(bytes).expect("content streams are ascii")
    }

    #[test]
    fn headings_use_the_bold_font() {
        let content = rendered("# TITLE");
        assert!(content.contains("/F1 16 Tf"));
        // footer
        assert!(content.contains("/F0 10 Tf"));
        // "TITLE" as WinAnsi hex
        assert!(content.contains("<5449544c45> Tj"));
    }

    #[test]
    fn justified_lines_draw_word_by_word() {
        let text = lipsum::lipsum(40);
        let content = rendered(&text);
        let words_drawn = content.matches(" Tj\n").count();
        // every word of the justified lines plus the last line and the footer
        assert!(words_drawn > 10);
        assert!(content.starts_with("q\n0 g\n"));
        assert!(content.ends_with("Q\n"));
    }

    #[test]
    fn baselines_are_flipped() {
        let config = LayoutConfig::default();
        let content = rendered("plain");
        let expected = format!("1 0 0 1 56 {} Tm", (config.page_height() - config.top()).0);
        assert!(content.contains(&expected), "{content}");
    }
}
