//! Word (.docx) assembly
//!
//! One styled paragraph per classified line; no pagination logic since
//! the format reflows. Run sizes are in half-points.

use docx_rs::{AlignmentType, Docx, LineSpacing, Paragraph, Run};
use shared_types::{DocumentKind, LineKind, RenderedDocument};

use crate::error::ExportError;

const TITLE_SIZE: usize = 32;
const HEADING_SIZE: usize = 24;
const CLAUSE_SIZE: usize = 22;
const BODY_SIZE: usize = 20;

/// Render the classified lines into DOCX bytes
pub fn export_docx(
    rendered: &RenderedDocument,
    kind: DocumentKind,
) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new().add_paragraph(
        Paragraph::new()
            .add_run(Run::new().add_text(kind.heading()).bold().size(TITLE_SIZE))
            .align(AlignmentType::Center)
            .line_spacing(LineSpacing::new().after(400)),
    );

    for line in rendered.classified_lines() {
        let paragraph = match line.kind {
            // Blank spacing; the separator token is suppressed, not printed
            LineKind::Blank | LineKind::Separator => Paragraph::new(),
            LineKind::Heading => Paragraph::new()
                .add_run(Run::new().add_text(line.trimmed()).bold().size(HEADING_SIZE))
                .line_spacing(LineSpacing::new().before(300).after(200)),
            LineKind::Clause => Paragraph::new()
                .add_run(Run::new().add_text(line.trimmed()).bold().size(CLAUSE_SIZE))
                .line_spacing(LineSpacing::new().before(200).after(100)),
            LineKind::Body => Paragraph::new()
                .add_run(Run::new().add_text(line.text.as_str()).size(BODY_SIZE))
                .line_spacing(LineSpacing::new().after(100)),
        };
        docx = docx.add_paragraph(paragraph);
    }

    let mut cursor = std::io::Cursor::new(Vec::new());
    docx.build()
        .pack(&mut cursor)
        .map_err(|e| ExportError::Docx(e.to_string()))?;
    Ok(cursor.into_inner())
}
