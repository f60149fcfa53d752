//! Cross-exporter consistency over real rendered documents

use chrono::NaiveDate;
use docgen_engine::DocumentGenerator;
use export_engine::{artifact_file_name, export_docx, export_pdf, ArtifactFormat};
use shared_types::{DocumentKind, DocumentRequest, LineKind, OwnerType};

fn request(kind: DocumentKind) -> DocumentRequest {
    DocumentRequest {
        kind,
        owner_type: OwnerType::Organization,
        legal_name: "Acme LTDA".to_string(),
        tax_id: "12345678000190".to_string(),
        service_description: "Plataforma de geração de documentos jurídicos.".to_string(),
        contact_email: "contato@acme.com".to_string(),
        contact_phone: "(11) 99999-8888".to_string(),
        website_url: Some("https://acme.com".to_string()),
        postal_address: "Av. Paulista, 1000".to_string(),
        city: "São Paulo".to_string(),
        region: "SP".to_string(),
        dpo_email: "dpo@acme.com".to_string(),
        selected_features: vec!["Processamento de pagamentos".to_string()],
        collected_data_types: vec!["email".to_string(), "telefone".to_string()],
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
}

#[test]
fn both_exporters_accept_every_rendered_document() {
    let generator = DocumentGenerator::new();
    for kind in [DocumentKind::TermsOfUse, DocumentKind::PrivacyPolicy] {
        let rendered = generator.render(&request(kind), today());
        let pdf = export_pdf(&rendered, kind).unwrap();
        let docx = export_docx(&rendered, kind).unwrap();
        assert!(pdf.starts_with(b"%PDF"));
        assert!(docx.starts_with(b"PK"));
    }
}

#[test]
fn classification_is_shared_between_exporters() {
    // Both exporters consume RenderedDocument::classified_lines, so the
    // styling decision for a given line cannot drift between formats.
    // Assert the pass itself is stable and covers every category.
    let generator = DocumentGenerator::new();
    let rendered = generator.render(&request(DocumentKind::PrivacyPolicy), today());
    let first = rendered.classified_lines();
    let second = rendered.classified_lines();
    assert_eq!(first, second);

    let kinds: Vec<LineKind> = first.iter().map(|l| l.kind).collect();
    for expected in [
        LineKind::Blank,
        LineKind::Separator,
        LineKind::Heading,
        LineKind::Clause,
        LineKind::Body,
    ] {
        assert!(kinds.contains(&expected), "missing {expected:?}");
    }
}

#[test]
fn full_terms_document_spans_multiple_pages() {
    let generator = DocumentGenerator::new();
    let rendered = generator.render(&request(DocumentKind::TermsOfUse), today());
    let bytes = export_pdf(&rendered, DocumentKind::TermsOfUse).unwrap();
    let doc = lopdf::Document::load_mem(&bytes).unwrap();
    assert!(doc.get_pages().len() >= 2, "a full Termos de Uso should paginate");
}

#[test]
fn artifact_names_match_the_product_scheme() {
    assert_eq!(
        artifact_file_name(DocumentKind::TermsOfUse, "Acme LTDA", ArtifactFormat::Pdf),
        "termos-de-uso-acme-ltda.pdf"
    );
    assert_eq!(
        artifact_file_name(DocumentKind::PrivacyPolicy, "Acme LTDA", ArtifactFormat::Docx),
        "política-de-privacidade-acme-ltda.docx"
    );
}
