//! Deterministic artifact file naming

use shared_types::DocumentKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactFormat {
    Pdf,
    Docx,
}

impl ArtifactFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ArtifactFormat::Pdf => "pdf",
            ArtifactFormat::Docx => "docx",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ArtifactFormat::Pdf => "application/pdf",
            ArtifactFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

/// `"<title>-<legal name>.<ext>"`, lower-cased with spaces hyphenated.
/// Diacritics are kept as-is.
pub fn artifact_file_name(kind: DocumentKind, legal_name: &str, format: ArtifactFormat) -> String {
    format!(
        "{}-{}.{}",
        hyphenate(kind.title()),
        hyphenate(legal_name),
        format.extension()
    )
}

fn hyphenate(text: &str) -> String {
    text.to_lowercase().replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_pdf_name() {
        assert_eq!(
            artifact_file_name(DocumentKind::TermsOfUse, "Acme LTDA", ArtifactFormat::Pdf),
            "termos-de-uso-acme-ltda.pdf"
        );
    }

    #[test]
    fn test_privacy_docx_name_keeps_diacritics() {
        assert_eq!(
            artifact_file_name(
                DocumentKind::PrivacyPolicy,
                "João Serviços ME",
                ArtifactFormat::Docx
            ),
            "política-de-privacidade-joão-serviços-me.docx"
        );
    }

    #[test]
    fn test_naming_is_deterministic() {
        let a = artifact_file_name(DocumentKind::TermsOfUse, "Acme LTDA", ArtifactFormat::Pdf);
        let b = artifact_file_name(DocumentKind::TermsOfUse, "Acme LTDA", ArtifactFormat::Pdf);
        assert_eq!(a, b);
    }
}
