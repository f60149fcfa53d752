//! Template registry and metadata

use serde::{Deserialize, Serialize};
use shared_types::DocumentKind;

/// Information about an available document template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateInfo {
    /// Template name (used in URLs)
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Document kind this template renders
    pub kind: DocumentKind,
    /// Required input fields
    pub required_inputs: Vec<String>,
    /// Optional input fields
    pub optional_inputs: Vec<String>,
}

/// List all available templates
pub fn list_templates() -> Vec<TemplateInfo> {
    let base_required = [
        "legal_name",
        "tax_id",
        "service_description",
        "contact_email",
        "contact_phone",
        "postal_address",
        "city",
        "region",
        "dpo_email",
    ];

    vec![
        TemplateInfo {
            name: "termos-de-uso".to_string(),
            description: "Termos de Uso conforme a legislação brasileira e a LGPD".to_string(),
            kind: DocumentKind::TermsOfUse,
            required_inputs: base_required.iter().map(|s| s.to_string()).collect(),
            optional_inputs: vec![
                "website_url".to_string(),
                "selected_features".to_string(),
            ],
        },
        TemplateInfo {
            name: "politica-de-privacidade".to_string(),
            description: "Política de Privacidade e Proteção de Dados (LGPD - Lei 13.709/2018)"
                .to_string(),
            kind: DocumentKind::PrivacyPolicy,
            required_inputs: base_required.iter().map(|s| s.to_string()).collect(),
            optional_inputs: vec![
                "website_url".to_string(),
                "collected_data_types".to_string(),
            ],
        },
    ]
}

/// Find a template by its registry name
pub fn get_template(name: &str) -> Option<TemplateInfo> {
    list_templates().into_iter().find(|t| t.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lists_both_kinds() {
        let templates = list_templates();
        assert_eq!(templates.len(), 2);
        assert_eq!(templates[0].kind, DocumentKind::TermsOfUse);
        assert_eq!(templates[1].kind, DocumentKind::PrivacyPolicy);
    }

    #[test]
    fn test_template_lookup_by_name() {
        let t = get_template("politica-de-privacidade").unwrap();
        assert_eq!(t.kind, DocumentKind::PrivacyPolicy);
        assert!(t.optional_inputs.contains(&"collected_data_types".to_string()));
        assert!(get_template("contrato-social").is_none());
    }

    #[test]
    fn test_templates_require_the_lgpd_contact_fields() {
        for t in list_templates() {
            assert!(t.required_inputs.contains(&"dpo_email".to_string()));
            assert!(t.required_inputs.contains(&"tax_id".to_string()));
        }
    }
}
