use crate::font::{FontStyle, Typeface};
use crate::layout::{Layout, LayoutConfig};
use crate::page::{Alignment, DrawInstruction};

/// Stamp "Page i of N" onto the footer of every page. Runs after layout has finished,
/// since N isn't known before then; only the footer slots are touched.
pub fn stamp_footers(layout: &mut Layout, config: &LayoutConfig, typeface: &Typeface) {
    let count = layout.page_count();
    let size = config.footer_font_size;
    let x = config.page_width() - config.margin;
    let y = config.page_height() - config.margin / 2.0;

    for (index, id) in layout.page_order.iter().enumerate() {
        let text = format!("Page {} of {}", index + 1, count);
        let width = typeface.width_of_text(&text, FontStyle::Regular, size);
        layout.pages[*id].footer = Some(DrawInstruction {
            text,
            x,
            y,
            font_style: FontStyle::Regular,
            font_size: size,
            alignment: Alignment::Right,
            justify: false,
            width,
        });
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::layout::layout_document;
    use crate::units::Pt;

    #[test]
    fn every_page_knows_the_total() {
        let config = LayoutConfig::default();
        let typeface = Typeface::default();
        let text = (0..6)
            .map(|_| lipsum::lipsum(250))
            .collect::<Vec<String>>()
            .join("\n\n");
        let layout = layout_document(&text, &config, &typeface);
        let count = layout.page_count();
        assert!(count > 1);

        for (i, page) in layout.pages().enumerate() {
            let footer = page.footer.as_ref().expect("page has a footer");
            assert_eq!(footer.text, format!("Page {} of {}", i + 1, count));
            assert_eq!(footer.alignment, Alignment::Right);
            assert_eq!(footer.font_size, Pt(10.0));
            assert!((footer.right() - (config.page_width() - config.margin)).0.abs() < 1e-3);
            assert_eq!(footer.y, config.page_height() - Pt(28.0));
        }
    }

    #[test]
    fn restamping_replaces_stale_counts() {
        let config = LayoutConfig::default();
        let typeface = Typeface::default();
        let mut layout = layout_document("short", &config, &typeface);
        assert_eq!(
            layout.pages().next().and_then(|p| p.footer.as_ref()).map(|f| f.text.as_str()),
            Some("Page 1 of 1")
        );

        stamp_footers(&mut layout, &config, &typeface);
        let footers: Vec<&str> = layout
            .pages()
            .filter_map(|p| p.footer.as_ref())
            .map(|f| f.text.as_str())
            .collect();
        assert_eq!(footers, vec!["Page 1 of 1"]);
    }
}
