//! Rendered document text and the shared line classifier
//!
//! Both exporters consume the same classification pass, so a line can
//! never be styled as a heading in one format and body text in the other.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Numbered clause prefix: "1.", "2.1.", "14." etc.
    static ref CLAUSE_PREFIX: Regex = Regex::new(r"^\d+\.").unwrap();
}

/// Literal token the renderer emits between the body and the acceptance footer
pub const SEPARATOR_TOKEN: &str = "---";

/// Style category of a single rendered line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Empty after trimming; rendered as vertical spacing
    Blank,
    /// The literal `---` token; rendered as vertical spacing, never as text
    Separator,
    /// All-caps section heading
    Heading,
    /// Numbered clause ("3.1. ...")
    Clause,
    /// Ordinary prose
    Body,
}

/// A line tagged with its style category.
///
/// `text` keeps the raw line; list items rely on their leading indentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedLine {
    pub kind: LineKind,
    pub text: String,
}

impl ClassifiedLine {
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }
}

/// Classify one line. Purely local: no cross-line context, no backtracking.
pub fn classify_line(line: &str) -> LineKind {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if trimmed == SEPARATOR_TOKEN {
        return LineKind::Separator;
    }
    if trimmed == trimmed.to_uppercase() && !trimmed.contains('@') && !trimmed.contains('.') {
        return LineKind::Heading;
    }
    if CLAUSE_PREFIX.is_match(trimmed) {
        return LineKind::Clause;
    }
    LineKind::Body
}

/// Flat plain-text result of template interpolation, before export formatting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedDocument {
    content: String,
}

impl RenderedDocument {
    pub fn new(content: String) -> Self {
        Self { content }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.lines()
    }

    /// The single classification pass both exporters consume
    pub fn classified_lines(&self) -> Vec<ClassifiedLine> {
        self.content
            .lines()
            .map(|line| ClassifiedLine {
                kind: classify_line(line),
                text: line.to_string(),
            })
            .collect()
    }
}

impl From<String> for RenderedDocument {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_classify_as_blank() {
        assert_eq!(classify_line(""), LineKind::Blank);
        assert_eq!(classify_line("   "), LineKind::Blank);
        assert_eq!(classify_line("\t"), LineKind::Blank);
    }

    #[test]
    fn test_separator_token_classifies_as_separator() {
        assert_eq!(classify_line("---"), LineKind::Separator);
        assert_eq!(classify_line("  ---  "), LineKind::Separator);
    }

    #[test]
    fn test_all_caps_line_classifies_as_heading() {
        assert_eq!(classify_line("TERMOS DE USO"), LineKind::Heading);
        assert_eq!(classify_line("DADOS COLETADOS"), LineKind::Heading);
    }

    #[test]
    fn test_heading_rejects_at_sign_and_period() {
        assert_eq!(classify_line("DPO: DPO@ACME"), LineKind::Body);
        assert_eq!(classify_line("LEI 13.709"), LineKind::Body);
    }

    #[test]
    fn test_numeric_prefix_classifies_as_clause() {
        assert_eq!(classify_line("1. INFORMAÇÕES GERAIS"), LineKind::Clause);
        assert_eq!(classify_line("3.1. Coletamos os seguintes dados:"), LineKind::Clause);
        assert_eq!(classify_line("  10.2. Reservamo-nos o direito"), LineKind::Clause);
    }

    #[test]
    fn test_prose_classifies_as_body() {
        assert_eq!(
            classify_line("Ao acessar e utilizar nossos serviços, você concorda."),
            LineKind::Body
        );
        assert_eq!(classify_line("   a) Utilizar os serviços;"), LineKind::Body);
    }

    #[test]
    fn test_accented_uppercase_is_still_heading() {
        assert_eq!(classify_line("POLÍTICA DE PRIVACIDADE E PROTEÇÃO DE DADOS"), LineKind::Heading);
    }

    #[test]
    fn test_classified_lines_preserve_raw_text_and_order() {
        let doc = RenderedDocument::new("TITULO\n\n1. Primeiro\n   a) item\n---".to_string());
        let lines = doc.classified_lines();
        let kinds: Vec<LineKind> = lines.iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![
                LineKind::Heading,
                LineKind::Blank,
                LineKind::Clause,
                LineKind::Body,
                LineKind::Separator,
            ]
        );
        assert_eq!(lines[3].text, "   a) item");
        assert_eq!(lines[3].trimmed(), "a) item");
    }
}
