//! Prose skeletons for the supported document kinds
//!
//! Each template interpolates the request into a fixed pt-BR legal text.
//! Free text passes through unescaped; the export formats encode at their
//! own boundary.

pub mod privacy;
pub mod terms;

use shared_types::DocumentRequest;
use std::fmt::Write;

/// Numbered sub-list in the house indentation style: `   1) item`
pub(crate) fn numbered_list(items: &[String]) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = write!(out, "   {}) {}", i + 1, item);
    }
    out
}

/// Platform reference for the object clause: the site URL when present,
/// a generic phrase otherwise
pub(crate) fn platform_reference(data: &DocumentRequest) -> &str {
    match data.website_url.as_deref() {
        Some(url) if !url.trim().is_empty() => url,
        _ => "nossa plataforma digital",
    }
}

/// Contact block shared by both documents' closing sections
pub(crate) fn contact_block(data: &DocumentRequest) -> String {
    let mut out = String::new();
    let _ = write!(out, "Email: {}\nTelefone: {}", data.contact_email, data.contact_phone);
    if let Some(url) = data.website_url.as_deref() {
        if !url.trim().is_empty() {
            let _ = write!(out, "\nWebsite: {}", url);
        }
    }
    let _ = write!(
        out,
        "\nEndereço: {}, {} - {}",
        data.postal_address, data.city, data.region
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{DocumentKind, OwnerType};

    fn request(website: Option<&str>) -> DocumentRequest {
        DocumentRequest {
            kind: DocumentKind::TermsOfUse,
            owner_type: OwnerType::Organization,
            legal_name: "Acme LTDA".to_string(),
            tax_id: "12345678000190".to_string(),
            service_description: "Serviços digitais".to_string(),
            contact_email: "contato@acme.com".to_string(),
            contact_phone: "(11) 99999-8888".to_string(),
            website_url: website.map(str::to_string),
            postal_address: "Av. Paulista, 1000".to_string(),
            city: "São Paulo".to_string(),
            region: "SP".to_string(),
            dpo_email: "dpo@acme.com".to_string(),
            selected_features: vec![],
            collected_data_types: vec![],
        }
    }

    #[test]
    fn test_numbered_list_indents_and_counts() {
        let items = vec!["um".to_string(), "dois".to_string()];
        assert_eq!(numbered_list(&items), "   1) um\n   2) dois");
    }

    #[test]
    fn test_platform_reference_prefers_website() {
        assert_eq!(platform_reference(&request(Some("https://acme.com"))), "https://acme.com");
        assert_eq!(platform_reference(&request(None)), "nossa plataforma digital");
        assert_eq!(platform_reference(&request(Some("  "))), "nossa plataforma digital");
    }

    #[test]
    fn test_contact_block_omits_empty_website_line() {
        let with = contact_block(&request(Some("https://acme.com")));
        assert!(with.contains("Website: https://acme.com"));
        let without = contact_block(&request(None));
        assert!(!without.contains("Website:"));
        assert!(without.contains("Endereço: Av. Paulista, 1000, São Paulo - SP"));
    }
}
