use crate::{
    content::render_page,
    font::{FontStyle, Typeface},
    info::Info,
    layout::{layout_document, Layout, LayoutConfig},
    refs::{ObjectReferences, RefType},
    PDFError,
};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Name, Pdf, Rect, Ref};
use std::io::Write;

/// Name generated documents are saved under unless the caller picks another
pub const DEFAULT_FILE_NAME: &str = "legal-document.pdf";

/// A laid-out document together with the fonts it was measured with, ready to be
/// rendered out with a call to [Document::write]
pub struct Document {
    pub info: Option<Info>,
    pub layout: Layout,
    pub typeface: Typeface,
}

impl Document {
    /// Wrap an existing layout. `typeface` must be the one the layout was measured with,
    /// or justified lines won't line up with the margins.
    pub fn new(layout: Layout, typeface: Typeface) -> Document {
        Document {
            info: None,
            layout,
            typeface,
        }
    }

    /// Lay out `text` and wrap the result, in one step
    pub fn from_text(text: &str, config: &LayoutConfig, typeface: Typeface) -> Document {
        let layout = layout_document(text, config, &typeface);
        Document::new(layout, typeface)
    }

    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    pub fn page_count(&self) -> usize {
        self.layout.page_count()
    }

    /// Write the entire document to the writer. The whole PDF is assembled in memory first
    /// and then written in one go.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), PDFError> {
        let bytes = self.to_bytes()?;
        w.write_all(bytes.as_slice()).map_err(Into::into)
    }

    /// Render the document to PDF bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, PDFError> {
        let Document {
            info,
            layout,
            typeface,
        } = self;

        let mut refs = ObjectReferences::new();
        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        let page_refs: Vec<Ref> = (0..layout.page_count())
            .map(|i| refs.gen(RefType::Page(i)))
            .collect();
        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs.iter().copied());

        for style in [FontStyle::Regular, FontStyle::Bold] {
            typeface.font(style).write(&mut refs, style, &mut writer);
        }

        let (width, height) = layout.page_size;
        let media_box = Rect::new(0.0, 0.0, width.0, height.0);
        for (page_index, id) in layout.page_order.iter().enumerate() {
            let page = layout.pages.get(*id).ok_or(PDFError::PageMissing)?;
            let page_id = refs.get(RefType::Page(page_index)).ok_or(PDFError::PageMissing)?;
            let content_id = refs.gen(RefType::ContentForPage(page_index));

            let mut pdf_page = writer.page(page_id);
            pdf_page.media_box(media_box);
            pdf_page.parent(page_tree_id);
            pdf_page.contents(content_id);

            let mut resources = pdf_page.resources();
            let mut fonts = resources.fonts();
            for style in [FontStyle::Regular, FontStyle::Bold] {
                let font_id = refs.get_or_gen(RefType::Font(style));
                fonts.pair(Name(style.resource_name().as_bytes()), font_id);
            }
            fonts.finish();
            resources.finish();
            pdf_page.finish();

            let rendered = render_page(page, typeface, height)?;
            let compressed =
                compress_to_vec_zlib(&rendered, CompressionLevel::DefaultCompression as u8);
            writer
                .stream(content_id, compressed.as_slice())
                .filter(Filter::FlateDecode);
        }

        writer.catalog(catalog_id).pages(page_tree_id);

        log::debug!("wrote PDF with {} pages", layout.page_count());
        Ok(writer.finish())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::font::FontFamily;

    fn count(haystack: &[u8], needle: &[u8]) -> usize {
        haystack.windows(needle.len()).filter(|w| *w == needle).count()
    }

    #[test]
    fn writes_one_page_object_per_page() {
        let config = LayoutConfig::default();
        let text = (0..8)
            .map(|_| lipsum::lipsum(200))
            .collect::<Vec<String>>()
            .join("\n\n");
        let document = Document::from_text(&text, &config, Typeface::default());
        let pages = document.page_count();
        assert!(pages > 1);

        let bytes = document.to_bytes().expect("renders");
        assert!(bytes.starts_with(b"%PDF-"));
        assert_eq!(count(&bytes, b"/Type /Page\n"), pages);
        assert_eq!(count(&bytes, b"/Type /Pages"), 1);
    }

    #[test]
    fn references_standard_fonts() {
        let config = LayoutConfig::default();
        let typeface = Typeface::standard(FontFamily::Helvetica);
        let document = Document::from_text("hello", &config, typeface);
        let bytes = document.to_bytes().expect("renders");
        assert_eq!(count(&bytes, b"/BaseFont /Helvetica\n"), 1);
        assert_eq!(count(&bytes, b"/BaseFont /Helvetica-Bold"), 1);
        assert_eq!(count(&bytes, b"/WinAnsiEncoding"), 2);
    }

    #[test]
    fn writes_into_any_writer() {
        let mut document = Document::from_text("", &LayoutConfig::default(), Typeface::default());
        let mut info = Info::new();
        info.title("Empty");
        document.set_info(info);

        let mut out: Vec<u8> = Vec::new();
        document.write(&mut out).expect("writes");
        assert!(out.starts_with(b"%PDF-"));
        assert_eq!(count(&out, b"/Title (Empty)"), 1);
        assert!(out.ends_with(b"%%EOF") || out.ends_with(b"%%EOF\n"));
    }
}
