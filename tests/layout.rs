use smartdoc_pdf::{
    layout::{layout_document, layout_document_checked, Layout, LayoutConfig},
    pagesize::Paper,
    templates::{government_contract_dated, Parties, Party, TemplateInput},
    Alignment, DrawInstruction, FontStyle, PDFError, Pt, Typeface,
};

const EXAMPLE: &str = "# TITLE\n\nHello world this is a test paragraph that should wrap across multiple lines depending on width.\n\nARTICLE 1. SCOPE\n\nBody text here.";

fn config(width: f32, height: f32) -> LayoutConfig {
    LayoutConfig {
        paper: Paper::Custom {
            width: Pt(width),
            height: Pt(height),
        },
        margin: Pt(20.0),
        ..LayoutConfig::default()
    }
}

fn instructions(layout: &Layout) -> Vec<&DrawInstruction> {
    layout.pages().flat_map(|page| page.contents.iter()).collect()
}

#[test]
fn example_document_lays_out_in_order() {
    let config = config(240.0, 600.0);
    let layout = layout_document(EXAMPLE, &config, &Typeface::default());
    assert_eq!(layout.page_count(), 1);

    let drawn = instructions(&layout);
    let title = drawn[0];
    assert_eq!(title.text, "TITLE");
    assert_eq!(title.font_style, FontStyle::Bold);
    assert_eq!(title.font_size, Pt(16.0));
    assert_eq!(title.alignment, Alignment::Center);

    let article = drawn
        .iter()
        .position(|i| i.text == "ARTICLE 1. SCOPE")
        .expect("article heading drawn");
    assert_eq!(drawn[article].font_size, Pt(14.0));
    assert_eq!(drawn[article].font_style, FontStyle::Bold);

    let paragraph = &drawn[1..article];
    assert!(paragraph.len() >= 2, "paragraph should wrap");
    let (last, rest) = paragraph.split_last().expect("paragraph lines");
    assert!(rest.iter().all(|line| line.justify));
    assert!(!last.justify);
    assert!(paragraph.iter().all(|line| line.font_style == FontStyle::Regular));

    assert_eq!(drawn.len(), article + 2);
    assert_eq!(drawn[article + 1].text, "Body text here.");

    // baselines only ever move down the page
    for pair in drawn.windows(2) {
        assert!(pair[0].y < pair[1].y);
    }
}

#[test]
fn sixth_line_starts_the_second_page() {
    // five lines of 18pt fit between the margins
    let config = config(100.0, 40.0 + 5.0 * 18.0);
    let text = "abcdefghij klmnopqrst uvwxyzabcd efghijklmn opqrstuvwx yzabcdefgh";
    let layout = layout_document(text, &config, &Typeface::default());

    assert_eq!(layout.page_count(), 2);
    let first = layout.page(1).expect("page 1");
    let second = layout.page(2).expect("page 2");
    assert_eq!(first.contents.len(), 5);
    assert_eq!(second.contents.len(), 1);
    assert_eq!(second.contents[0].text, "yzabcdefgh");
    assert_eq!(second.contents[0].y, config.top());
    for line in first.contents.iter() {
        assert!(line.y < config.page_bottom());
    }
}

#[test]
fn every_page_has_a_consistent_footer() {
    let config = config(300.0, 300.0);
    let text = (0..6)
        .map(|_| lipsum::lipsum(80))
        .collect::<Vec<String>>()
        .join("\n\n");
    let layout = layout_document(&text, &config, &Typeface::default());
    let total = layout.page_count();
    assert!(total > 2);

    for (i, page) in layout.pages().enumerate() {
        assert_eq!(page.number, i + 1);
        let footer = page.footer.as_ref().expect("footer stamped");
        assert_eq!(footer.text, format!("Page {} of {}", i + 1, total));
        assert_eq!(footer.alignment, Alignment::Right);
        assert_eq!(footer.font_size, Pt(10.0));
        assert_eq!(footer.y, config.page_height() - config.margin / 2.0);
    }
}

#[test]
fn adding_content_restamps_all_footers() {
    let config = config(300.0, 300.0);
    let short = lipsum::lipsum(100);
    let long = format!("{short}\n\n{}", lipsum::lipsum(300));

    let before = layout_document(&short, &config, &Typeface::default());
    let after = layout_document(&long, &config, &Typeface::default());
    assert!(after.page_count() > before.page_count());

    let expected = format!("Page 1 of {}", after.page_count());
    let first = after.page(1).and_then(|p| p.footer.as_ref()).expect("footer");
    assert_eq!(first.text, expected);
}

#[test]
fn justified_lines_span_the_content_width() {
    let config = config(320.0, 2000.0);
    let layout = layout_document(&lipsum::lipsum(120), &config, &Typeface::default());
    for line in instructions(&layout).into_iter().filter(|i| i.justify) {
        assert_eq!(line.left(), config.margin);
        assert!((line.right() - (config.page_width() - config.margin)).0.abs() < 1e-3);
    }
}

#[test]
fn contract_template_headings_are_recognised() {
    let input = TemplateInput {
        parties: Parties {
            first_party: Party {
                name: "Water Board".to_string(),
                address: "1 Reservoir Road".to_string(),
            },
            second_party: Party {
                name: "Pipe Works".to_string(),
                address: "9 Foundry Street".to_string(),
            },
        },
        description: "lay a new water main".to_string(),
        terms: "Monthly payments against certified progress.".to_string(),
        additional_details: None,
    };
    let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date");
    let text = government_contract_dated(&input, date);

    let config = LayoutConfig::default();
    let layout = layout_document(&text, &config, &Typeface::default());
    let drawn = instructions(&layout);

    let title = drawn[0];
    assert_eq!(title.text, "FORMAT OF CONTRACT AGREEMENT");
    assert_eq!(title.font_size, config.heading_sizes.h1);

    let articles: Vec<&&DrawInstruction> = drawn
        .iter()
        .filter(|i| i.text.starts_with("ARTICLE "))
        .collect();
    assert_eq!(articles.len(), 9);
    assert!(articles
        .iter()
        .all(|i| i.font_size == config.heading_sizes.h2 && i.font_style == FontStyle::Bold));
}

#[test]
fn checked_layout_rejects_bad_configuration() {
    let config = LayoutConfig {
        margin: Pt(1000.0),
        ..LayoutConfig::default()
    };
    let result = layout_document_checked("text", &config, &Typeface::default());
    assert!(matches!(result, Err(PDFError::InvalidConfig(_))));
}
