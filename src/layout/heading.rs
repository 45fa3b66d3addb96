use regex::Regex;
use serde::{Deserialize, Serialize};

/// Title line of the standard government contract agreement
pub const DEFAULT_TITLE: &str = "FORMAT OF CONTRACT AGREEMENT";

/// Numbered article headings, e.g. `ARTICLE 3. EFFECTIVE DATE`
pub const ARTICLE_PATTERN: &str = r"(?i)^ARTICLE\s+\d+\.";

/// Fraction of a line's letters that must be uppercase for it to read as a heading
pub const UPPERCASE_HEADING_RATIO: f32 = 0.9;

/// Lines longer than this (in characters) are never uppercase headings
pub const UPPERCASE_HEADING_MAX_CHARS: usize = 120;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeadingLevel {
    H1,
    H2,
}

/// A line recognised as a heading, with any markup removed
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Heading<'a> {
    pub level: HeadingLevel,
    pub text: &'a str,
}

/// Decides which lines of a document are headings. Rules are tried in order and the
/// first that matches wins:
///
/// 1. `# ` prefix: H1
/// 2. `## ` prefix: H2
/// 3. the document title: H1
/// 4. `ARTICLE <n>.`: H2
/// 5. short, (nearly) all-caps lines: H1
#[derive(Debug, Clone)]
pub struct HeadingClassifier {
    title: String,
    article: Regex,
}

impl HeadingClassifier {
    pub fn new(title: &str) -> HeadingClassifier {
        HeadingClassifier {
            title: title.trim().to_uppercase(),
            article: Regex::new(ARTICLE_PATTERN).expect("article pattern is a valid regex"),
        }
    }

    pub fn classify<'a>(&self, line: &'a str) -> Option<Heading<'a>> {
        if let Some(text) = line.strip_prefix("# ") {
            return Some(Heading {
                level: HeadingLevel::H1,
                text,
            });
        }
        if let Some(text) = line.strip_prefix("## ") {
            return Some(Heading {
                level: HeadingLevel::H2,
                text,
            });
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        if !self.title.is_empty() && trimmed.to_uppercase() == self.title {
            return Some(Heading {
                level: HeadingLevel::H1,
                text: trimmed,
            });
        }
        if self.article.is_match(trimmed) {
            return Some(Heading {
                level: HeadingLevel::H2,
                text: trimmed,
            });
        }
        if is_uppercase_heading(trimmed) {
            return Some(Heading {
                level: HeadingLevel::H1,
                text: trimmed,
            });
        }
        None
    }
}

fn is_uppercase_heading(trimmed: &str) -> bool {
    if trimmed.chars().count() > UPPERCASE_HEADING_MAX_CHARS {
        return false;
    }
    let (letters, uppercase) = trimmed
        .chars()
        .filter(char::is_ascii_alphabetic)
        .fold((0usize, 0usize), |(letters, uppercase), ch| {
            (letters + 1, uppercase + ch.is_ascii_uppercase() as usize)
        });
    letters > 0 && uppercase as f32 / letters as f32 >= UPPERCASE_HEADING_RATIO
}

#[cfg(test)]
mod test {
    use super::*;

    fn classify(line: &str) -> Option<(HeadingLevel, &str)> {
        HeadingClassifier::new(DEFAULT_TITLE)
            .classify(line)
            .map(|h| (h.level, h.text))
    }

    #[test]
    fn markdown_markers_win() {
        assert_eq!(classify("# Title"), Some((HeadingLevel::H1, "Title")));
        assert_eq!(classify("# TITLE"), Some((HeadingLevel::H1, "TITLE")));
        assert_eq!(classify("## Scope of work"), Some((HeadingLevel::H2, "Scope of work")));
        // an all-caps `## ` line is still H2, not the uppercase H1 heuristic
        assert_eq!(classify("## SCOPE"), Some((HeadingLevel::H2, "SCOPE")));
    }

    #[test]
    fn marker_needs_trailing_space() {
        assert_eq!(classify("#Title"), None);
        assert_eq!(classify("##Title"), None);
        assert_eq!(classify("#"), None);
    }

    #[test]
    fn document_title_ignores_case_and_padding() {
        assert_eq!(
            classify("  Format of Contract Agreement "),
            Some((HeadingLevel::H1, "Format of Contract Agreement"))
        );
    }

    #[test]
    fn article_lines_are_h2() {
        assert_eq!(
            classify("ARTICLE 1. SCOPE"),
            Some((HeadingLevel::H2, "ARTICLE 1. SCOPE"))
        );
        assert_eq!(
            classify("Article 12. Waiver of rights"),
            Some((HeadingLevel::H2, "Article 12. Waiver of rights"))
        );
        assert_eq!(classify("Article twelve. Waiver"), None);
        assert_eq!(classify("ARTICLE 1 SCOPE").map(|h| h.0), Some(HeadingLevel::H1));
    }

    #[test]
    fn uppercase_heuristic() {
        assert_eq!(classify("BETWEEN"), Some((HeadingLevel::H1, "BETWEEN")));
        assert_eq!(
            classify("NOW IT IS HEREBY AGREED as follows:").map(|h| h.0),
            None
        );
        // digits and punctuation don't count against the ratio
        let terms = "(1) TERMS: 30 DAYS";
        assert_eq!(classify(terms), Some((HeadingLevel::H1, terms)));
        // no letters at all
        assert_eq!(classify("________ 2024"), None);
        // too long
        let long = "A".repeat(UPPERCASE_HEADING_MAX_CHARS + 1);
        assert_eq!(classify(&long), None);
        let limit = "A".repeat(UPPERCASE_HEADING_MAX_CHARS);
        assert!(classify(&limit).is_some());
    }

    #[test]
    fn ratio_threshold_is_inclusive() {
        // 9 of 10 letters uppercase
        assert!(classify("ABCDEFGHIj").is_some());
        // 8 of 10
        assert!(classify("ABCDEFGHij").is_none());
    }

    #[test]
    fn blank_and_body_lines_are_not_headings() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("   "), None);
        assert_eq!(classify("The Owner hereby agrees to pay."), None);
    }
}
