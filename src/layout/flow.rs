use crate::font::{FontStyle, Typeface};
use crate::layout::heading::{Heading, HeadingClassifier, HeadingLevel};
use crate::layout::paginator::Paginator;
use crate::layout::text::{normalize_whitespace, wrap_text};
use crate::layout::{footer, Layout, LayoutConfig};
use crate::page::{Alignment, DrawInstruction};
use crate::PDFError;

/// Extra vertical advance after a heading line, relative to the body line height
const HEADING_ADVANCE: f32 = 1.2;

/// Gap after a paragraph or a blank line, relative to the body line height
const PARAGRAPH_GAP: f32 = 0.5;

/// Lays out a whole document: headings centred in bold, paragraphs justified, pages
/// broken when the cursor reaches the bottom margin, and every page stamped with a
/// "Page i of N" footer once the page count is known.
///
/// Identical text, configuration and fonts always give an identical layout.
pub fn layout_document(text: &str, config: &LayoutConfig, typeface: &Typeface) -> Layout {
    let mut flow = Flow::new(config, typeface);

    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    for line in text.split('\n') {
        flow.line(line);
    }
    flow.flush_paragraph();

    let mut layout = flow.paginator.finish(config.page_size());
    footer::stamp_footers(&mut layout, config, typeface);

    log::debug!(
        "laid out {} input lines onto {} pages",
        text.split('\n').count(),
        layout.page_count()
    );
    layout
}

/// Like [layout_document], but rejects a configuration that leaves no room to lay
/// anything out
pub fn layout_document_checked(
    text: &str,
    config: &LayoutConfig,
    typeface: &Typeface,
) -> Result<Layout, PDFError> {
    config.validate()?;
    Ok(layout_document(text, config, typeface))
}

struct Flow<'a> {
    config: &'a LayoutConfig,
    typeface: &'a Typeface,
    classifier: HeadingClassifier,
    paginator: Paginator,
    buffer: Vec<String>,
}

impl<'a> Flow<'a> {
    fn new(config: &'a LayoutConfig, typeface: &'a Typeface) -> Flow<'a> {
        Flow {
            config,
            typeface,
            classifier: HeadingClassifier::new(&config.title_match),
            paginator: Paginator::new(config.top(), config.page_bottom()),
            buffer: Vec::new(),
        }
    }

    fn line(&mut self, line: &str) {
        self.paginator.ensure_room();

        if let Some(heading) = self.classifier.classify(line) {
            self.flush_paragraph();
            self.heading(heading);
            return;
        }

        if line.trim().is_empty() {
            self.flush_paragraph();
            self.paginator.advance(self.config.line_height * PARAGRAPH_GAP);
            return;
        }

        self.buffer.push(line.to_string());
    }

    fn heading(&mut self, heading: Heading) {
        let size = match heading.level {
            HeadingLevel::H1 => self.config.heading_sizes.h1,
            HeadingLevel::H2 => self.config.heading_sizes.h2,
        };
        let font = self.typeface.font(FontStyle::Bold);
        let centre = self.config.page_width() / 2.0;
        let advance = self.config.line_height * HEADING_ADVANCE;

        let mut lines = wrap_text(heading.text, font, size, self.config.max_width());
        if lines.is_empty() {
            // a bare marker still takes up its line
            lines.push(String::new());
        }

        for text in lines {
            if !text.is_empty() {
                let width = font.width_of_text(&text, size);
                self.paginator.draw(|y| DrawInstruction {
                    text,
                    x: centre,
                    y,
                    font_style: FontStyle::Bold,
                    font_size: size,
                    alignment: Alignment::Center,
                    justify: false,
                    width,
                });
            }
            self.paginator.advance(advance);
        }
    }

    fn flush_paragraph(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let text = normalize_whitespace(&self.buffer.join(" "));
        self.buffer.clear();
        if text.is_empty() {
            return;
        }

        let size = self.config.body_font_size;
        let font = self.typeface.font(FontStyle::Regular);
        let max_width = self.config.max_width();
        let left = self.config.margin;
        let lines = wrap_text(&text, font, size, max_width);
        log::trace!("flushing paragraph of {} lines", lines.len());

        let last = lines.len().saturating_sub(1);
        for (i, line) in lines.into_iter().enumerate() {
            let justify = i != last && line.contains(' ');
            let width = if justify {
                max_width
            } else {
                font.width_of_text(&line, size)
            };
            self.paginator.draw(|y| DrawInstruction {
                text: line,
                x: left,
                y,
                font_style: FontStyle::Regular,
                font_size: size,
                alignment: Alignment::Left,
                justify,
                width,
            });
            self.paginator.advance(self.config.line_height);
        }

        self.paginator.advance(self.config.line_height * PARAGRAPH_GAP);
    }
}
