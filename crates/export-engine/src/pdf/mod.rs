//! Paginated PDF assembly
//!
//! Layout mirrors the product's print format: A4 portrait, 15 mm margins,
//! a centered title block, then one styled run per classified line with
//! measured word wrap and page breaks on overflow. Geometry is kept in
//! millimetres and converted to PDF points at emission time.

pub mod metrics;

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream, StringFormat};
use shared_types::{DocumentKind, LineKind, RenderedDocument};

use crate::error::ExportError;
use metrics::{encode_win_ansi, text_width_mm, wrap_to_width, FontFace};

const PT_PER_MM: f32 = 72.0 / 25.4;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 15.0;
const USABLE_WIDTH_MM: f32 = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;

const LINE_HEIGHT_MM: f32 = 6.0;
const BLANK_ADVANCE_MM: f32 = 5.0;
const TITLE_ADVANCE_MM: f32 = 15.0;

const TITLE_SIZE_PT: f32 = 16.0;
const HEADING_SIZE_PT: f32 = 11.0;
const CLAUSE_SIZE_PT: f32 = 10.0;
const BODY_SIZE_PT: f32 = 10.0;

/// Render the classified lines into PDF bytes
pub fn export_pdf(rendered: &RenderedDocument, kind: DocumentKind) -> Result<Vec<u8>, ExportError> {
    let mut writer = PageWriter::new();

    let title = kind.title();
    let title_x = (PAGE_WIDTH_MM - text_width_mm(title, FontFace::HelveticaBold, TITLE_SIZE_PT))
        / 2.0;
    writer.draw_text(title, FontFace::HelveticaBold, TITLE_SIZE_PT, title_x.max(MARGIN_MM));
    writer.advance(TITLE_ADVANCE_MM);

    for line in rendered.classified_lines() {
        match line.kind {
            LineKind::Blank | LineKind::Separator => {
                writer.advance(BLANK_ADVANCE_MM);
            }
            LineKind::Heading => {
                writer.draw_wrapped(&line.text, FontFace::HelveticaBold, HEADING_SIZE_PT);
            }
            LineKind::Clause => {
                writer.draw_wrapped(&line.text, FontFace::HelveticaBold, CLAUSE_SIZE_PT);
            }
            LineKind::Body => {
                writer.draw_wrapped(&line.text, FontFace::Helvetica, BODY_SIZE_PT);
            }
        }
    }

    writer.into_bytes()
}

/// Cursor-based page builder: tracks the vertical position from the top
/// of the current page and accumulates content operations per page.
struct PageWriter {
    pages: Vec<Vec<Operation>>,
    y_mm: f32,
}

impl PageWriter {
    fn new() -> Self {
        Self {
            pages: vec![Vec::new()],
            y_mm: MARGIN_MM,
        }
    }

    fn advance(&mut self, delta_mm: f32) {
        self.y_mm += delta_mm;
    }

    fn break_page_if_needed(&mut self) {
        if self.y_mm > PAGE_HEIGHT_MM - MARGIN_MM {
            self.pages.push(Vec::new());
            self.y_mm = MARGIN_MM;
        }
    }

    /// Wrap to the usable width, then emit each sub-line with page breaks
    fn draw_wrapped(&mut self, text: &str, face: FontFace, size_pt: f32) {
        for sub_line in wrap_to_width(text, face, size_pt, USABLE_WIDTH_MM) {
            self.break_page_if_needed();
            self.draw_text(&sub_line, face, size_pt, MARGIN_MM);
            self.advance(LINE_HEIGHT_MM);
        }
    }

    /// Emit one text run at the cursor; `x_mm` is measured from the left edge
    fn draw_text(&mut self, text: &str, face: FontFace, size_pt: f32, x_mm: f32) {
        let x_pt = x_mm * PT_PER_MM;
        let y_pt = (PAGE_HEIGHT_MM - self.y_mm) * PT_PER_MM;
        let ops = self.pages.last_mut().expect("at least one page");
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new(
            "Tf",
            vec![
                Object::Name(face.resource_name().as_bytes().to_vec()),
                Object::Real(size_pt),
            ],
        ));
        ops.push(Operation::new(
            "Td",
            vec![Object::Real(x_pt), Object::Real(y_pt)],
        ));
        ops.push(Operation::new(
            "Tj",
            vec![Object::String(encode_win_ansi(text), StringFormat::Literal)],
        ));
        ops.push(Operation::new("ET", vec![]));
    }

    fn into_bytes(self) -> Result<Vec<u8>, ExportError> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let helvetica_id = doc.add_object(type1_font(FontFace::Helvetica));
        let helvetica_bold_id = doc.add_object(type1_font(FontFace::HelveticaBold));
        let fonts = Dictionary::from_iter(vec![
            (FontFace::Helvetica.resource_name(), Object::Reference(helvetica_id)),
            (
                FontFace::HelveticaBold.resource_name(),
                Object::Reference(helvetica_bold_id),
            ),
        ]);
        let resources = Dictionary::from_iter(vec![("Font", Object::Dictionary(fonts))]);

        let page_count = self.pages.len();
        let mut page_ids = Vec::with_capacity(page_count);
        for operations in self.pages {
            let content = Content { operations };
            let encoded = content
                .encode()
                .map_err(|e| ExportError::Pdf(e.to_string()))?;
            let content_id = doc.add_object(Stream::new(Dictionary::new(), encoded));

            let page = Dictionary::from_iter(vec![
                ("Type", Object::Name(b"Page".to_vec())),
                ("Parent", Object::Reference(pages_id)),
                (
                    "MediaBox",
                    Object::Array(vec![
                        Object::Integer(0),
                        Object::Integer(0),
                        Object::Real(PAGE_WIDTH_MM * PT_PER_MM),
                        Object::Real(PAGE_HEIGHT_MM * PT_PER_MM),
                    ]),
                ),
                ("Contents", Object::Reference(content_id)),
            ]);
            page_ids.push(doc.add_object(page));
        }

        let pages = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Count", Object::Integer(page_count as i64)),
            (
                "Kids",
                Object::Array(page_ids.iter().map(|id| Object::Reference(*id)).collect()),
            ),
            ("Resources", Object::Dictionary(resources)),
        ]);
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(pages_id)),
        ]);
        let catalog_id = doc.add_object(catalog);
        doc.trailer.set("Root", Object::Reference(catalog_id));

        doc.compress();
        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)
            .map_err(|e| ExportError::Pdf(e.to_string()))?;
        Ok(buffer)
    }
}

fn type1_font(face: FontFace) -> Dictionary {
    Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Font".to_vec())),
        ("Subtype", Object::Name(b"Type1".to_vec())),
        ("BaseFont", Object::Name(face.base_font().as_bytes().to_vec())),
        ("Encoding", Object::Name(b"WinAnsiEncoding".to_vec())),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short_doc() -> RenderedDocument {
        RenderedDocument::new(
            "TERMOS DE USO\n\n1. INFORMAÇÕES GERAIS\n\nUm parágrafo curto.\n".to_string(),
        )
    }

    fn long_doc() -> RenderedDocument {
        let paragraph = "Texto corrido que ocupa uma linha inteira do documento gerado. ";
        let mut content = String::from("POLÍTICA DE PRIVACIDADE\n");
        for i in 1..=80 {
            content.push_str(&format!("\n{i}. SEÇÃO\n\n{}\n", paragraph.repeat(4)));
        }
        RenderedDocument::new(content)
    }

    #[test]
    fn test_output_is_a_loadable_pdf() {
        let bytes = export_pdf(&short_doc(), DocumentKind::TermsOfUse).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_long_document_paginates() {
        let bytes = export_pdf(&long_doc(), DocumentKind::PrivacyPolicy).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert!(doc.get_pages().len() > 1);
    }

    #[test]
    fn test_export_is_deterministic() {
        let a = export_pdf(&short_doc(), DocumentKind::TermsOfUse).unwrap();
        let b = export_pdf(&short_doc(), DocumentKind::TermsOfUse).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_separator_emits_no_text_run() {
        let with = RenderedDocument::new("Corpo.\n---\nFim.\n".to_string());
        let without = RenderedDocument::new("Corpo.\n\nFim.\n".to_string());
        // The separator behaves exactly like a blank line
        assert_eq!(
            export_pdf(&with, DocumentKind::TermsOfUse).unwrap(),
            export_pdf(&without, DocumentKind::TermsOfUse).unwrap()
        );
    }
}
