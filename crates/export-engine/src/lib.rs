//! Binary artifact generation for rendered documents
//!
//! Consumes the shared classification pass from `shared-types` and emits
//! either a paginated PDF (lopdf) or a reflowing Word document (docx-rs).
//! Both exporters style a given line identically because they read the
//! same `ClassifiedLine` sequence.

pub mod docx;
pub mod error;
pub mod filename;
pub mod pdf;

pub use docx::export_docx;
pub use error::ExportError;
pub use filename::{artifact_file_name, ArtifactFormat};
pub use pdf::export_pdf;

use shared_types::{DocumentKind, RenderedDocument};

/// A finished export: bytes plus the metadata the delivery layer needs
#[derive(Debug, Clone)]
pub struct Artifact {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Export a rendered document in the requested format.
///
/// `legal_name` only participates in the artifact file name.
pub fn export(
    rendered: &RenderedDocument,
    kind: DocumentKind,
    legal_name: &str,
    format: ArtifactFormat,
) -> Result<Artifact, ExportError> {
    let bytes = match format {
        ArtifactFormat::Pdf => export_pdf(rendered, kind)?,
        ArtifactFormat::Docx => export_docx(rendered, kind)?,
    };
    Ok(Artifact {
        file_name: artifact_file_name(kind, legal_name, format),
        content_type: format.content_type(),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::RenderedDocument;

    fn fixture() -> RenderedDocument {
        RenderedDocument::new(
            "TERMOS DE USO\n\n1. INFORMAÇÕES GERAIS\n\nTexto corrido do documento.\n---\nRodapé.\n"
                .to_string(),
        )
    }

    #[test]
    fn test_export_dispatches_both_formats() {
        let rendered = fixture();
        let pdf = export(&rendered, DocumentKind::TermsOfUse, "Acme LTDA", ArtifactFormat::Pdf)
            .unwrap();
        assert_eq!(pdf.file_name, "termos-de-uso-acme-ltda.pdf");
        assert_eq!(pdf.content_type, "application/pdf");
        assert!(pdf.bytes.starts_with(b"%PDF"));

        let docx = export(&rendered, DocumentKind::TermsOfUse, "Acme LTDA", ArtifactFormat::Docx)
            .unwrap();
        assert_eq!(docx.file_name, "termos-de-uso-acme-ltda.docx");
        // DOCX is a ZIP container
        assert!(docx.bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_both_artifacts_share_a_file_stem() {
        let rendered = fixture();
        let pdf = export(&rendered, DocumentKind::PrivacyPolicy, "Acme LTDA", ArtifactFormat::Pdf)
            .unwrap();
        let docx =
            export(&rendered, DocumentKind::PrivacyPolicy, "Acme LTDA", ArtifactFormat::Docx)
                .unwrap();
        let stem = |name: &str| name.rsplit_once('.').map(|(s, _)| s.to_string()).unwrap();
        assert_eq!(stem(&pdf.file_name), stem(&docx.file_name));
    }
}
