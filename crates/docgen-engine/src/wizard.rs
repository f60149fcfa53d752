//! Headless multi-step form controller
//!
//! Drives the four-step document creation flow: each call to [`WizardForm::next`]
//! validates the current step's required fields before advancing, and
//! [`WizardForm::into_request`] produces the final immutable record handed to
//! the renderer.

use serde::{Deserialize, Serialize};
use shared_types::{DocumentKind, DocumentRequest, OwnerType};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Identification,
    ContactAddress,
    DocumentDetails,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Identification,
        WizardStep::ContactAddress,
        WizardStep::DocumentDetails,
        WizardStep::Review,
    ];

    /// 1-based position, for "Passo N de 4" displays
    pub fn position(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0) + 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

/// Feature toggles offered on the Terms of Use details step, with the
/// labels the rendered sub-list carries
const FEATURE_LABELS: [(&str, &str); 5] = [
    ("cookies", "Uso de cookies e tecnologias de rastreamento"),
    ("payments", "Processamento de pagamentos"),
    ("social_login", "Login através de redes sociais"),
    ("analytics", "Coleta de dados analíticos"),
    ("user_content", "Publicação de conteúdo por usuários"),
];

/// Display labels for the Privacy Policy data-type picker; unknown keys
/// pass through verbatim
const DATA_TYPE_LABELS: [(&str, &str); 8] = [
    ("nome", "Nome completo"),
    ("email", "Endereço de email"),
    ("telefone", "Número de telefone"),
    ("cpf", "CPF"),
    ("endereco", "Endereço completo"),
    ("pagamento", "Dados de pagamento (cartão, etc.)"),
    ("navegacao", "Dados de navegação (IP, cookies, user agent)"),
    ("localizacao", "Dados de localização geográfica"),
];

/// In-progress form state for one document creation flow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardForm {
    pub kind: DocumentKind,
    pub owner_type: OwnerType,
    pub legal_name: String,
    pub tax_id: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub website_url: Option<String>,
    pub postal_address: String,
    pub city: String,
    pub region: String,
    pub service_description: String,
    pub dpo_email: String,
    /// Terms of Use feature toggles, by key of [`FEATURE_LABELS`]
    pub enabled_features: Vec<String>,
    /// Privacy Policy data-type keys, order preserved
    pub data_type_keys: Vec<String>,
    step: WizardStep,
}

impl WizardForm {
    pub fn new(kind: DocumentKind) -> Self {
        Self {
            kind,
            owner_type: OwnerType::Organization,
            legal_name: String::new(),
            tax_id: String::new(),
            contact_email: String::new(),
            contact_phone: String::new(),
            website_url: None,
            postal_address: String::new(),
            city: String::new(),
            region: String::new(),
            service_description: String::new(),
            dpo_email: String::new(),
            enabled_features: Vec::new(),
            data_type_keys: Vec::new(),
            step: WizardStep::Identification,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn progress_percent(&self) -> u8 {
        (self.step.position() * 100 / WizardStep::ALL.len()) as u8
    }

    /// Validate the current step and advance. The review step is terminal.
    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        self.validate_step(self.step)?;
        let pos = self.step.position();
        if pos < WizardStep::ALL.len() {
            self.step = WizardStep::ALL[pos];
        }
        Ok(self.step)
    }

    /// Go back one step; never fails, clamped at the first step
    pub fn back(&mut self) -> WizardStep {
        let pos = self.step.position();
        if pos > 1 {
            self.step = WizardStep::ALL[pos - 2];
        }
        self.step
    }

    fn validate_step(&self, step: WizardStep) -> Result<(), WizardError> {
        let required: Vec<(&'static str, &str)> = match step {
            WizardStep::Identification => vec![
                ("legal_name", self.legal_name.as_str()),
                ("tax_id", self.tax_id.as_str()),
            ],
            WizardStep::ContactAddress => vec![
                ("contact_email", self.contact_email.as_str()),
                ("contact_phone", self.contact_phone.as_str()),
                ("postal_address", self.postal_address.as_str()),
                ("city", self.city.as_str()),
                ("region", self.region.as_str()),
            ],
            WizardStep::DocumentDetails => vec![
                ("service_description", self.service_description.as_str()),
                ("dpo_email", self.dpo_email.as_str()),
            ],
            WizardStep::Review => vec![],
        };

        let missing: Vec<&'static str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(WizardError::MissingFields(missing))
        }
    }

    /// Resolve feature toggles to their rendered labels (Terms of Use only)
    fn feature_labels(&self) -> Vec<String> {
        FEATURE_LABELS
            .iter()
            .filter(|(key, _)| self.enabled_features.iter().any(|f| f == key))
            .map(|(_, label)| label.to_string())
            .collect()
    }

    /// Resolve data-type keys to display labels, keeping the picked order
    fn data_type_labels(&self) -> Vec<String> {
        self.data_type_keys
            .iter()
            .map(|key| {
                DATA_TYPE_LABELS
                    .iter()
                    .find(|(k, _)| k == key)
                    .map(|(_, label)| label.to_string())
                    .unwrap_or_else(|| key.clone())
            })
            .collect()
    }

    /// Validate every data-entry step and build the final request record
    pub fn into_request(self) -> Result<DocumentRequest, WizardError> {
        self.validate_step(WizardStep::Identification)?;
        self.validate_step(WizardStep::ContactAddress)?;
        self.validate_step(WizardStep::DocumentDetails)?;

        let selected_features = match self.kind {
            DocumentKind::TermsOfUse => self.feature_labels(),
            DocumentKind::PrivacyPolicy => Vec::new(),
        };
        let collected_data_types = match self.kind {
            DocumentKind::PrivacyPolicy => self.data_type_labels(),
            DocumentKind::TermsOfUse => Vec::new(),
        };

        Ok(DocumentRequest {
            kind: self.kind,
            owner_type: self.owner_type,
            legal_name: self.legal_name,
            tax_id: self.tax_id,
            service_description: self.service_description,
            contact_email: self.contact_email,
            contact_phone: self.contact_phone,
            website_url: self.website_url,
            postal_address: self.postal_address,
            city: self.city,
            region: self.region,
            dpo_email: self.dpo_email,
            selected_features,
            collected_data_types,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form(kind: DocumentKind) -> WizardForm {
        let mut form = WizardForm::new(kind);
        form.legal_name = "Acme LTDA".to_string();
        form.tax_id = "12345678000190".to_string();
        form.contact_email = "contato@acme.com".to_string();
        form.contact_phone = "11999998888".to_string();
        form.postal_address = "Av. Paulista, 1000".to_string();
        form.city = "São Paulo".to_string();
        form.region = "SP".to_string();
        form.service_description = "Plataforma digital.".to_string();
        form.dpo_email = "dpo@acme.com".to_string();
        form
    }

    #[test]
    fn test_next_blocks_on_missing_identification() {
        let mut form = WizardForm::new(DocumentKind::TermsOfUse);
        let err = form.next().unwrap_err();
        assert_eq!(
            err,
            WizardError::MissingFields(vec!["legal_name", "tax_id"])
        );
        assert_eq!(form.step(), WizardStep::Identification);
    }

    #[test]
    fn test_full_walk_through_all_steps() {
        let mut form = filled_form(DocumentKind::TermsOfUse);
        assert_eq!(form.next().unwrap(), WizardStep::ContactAddress);
        assert_eq!(form.next().unwrap(), WizardStep::DocumentDetails);
        assert_eq!(form.next().unwrap(), WizardStep::Review);
        // Review is terminal
        assert_eq!(form.next().unwrap(), WizardStep::Review);
    }

    #[test]
    fn test_back_clamps_at_first_step() {
        let mut form = filled_form(DocumentKind::TermsOfUse);
        assert_eq!(form.back(), WizardStep::Identification);
        form.next().unwrap();
        assert_eq!(form.back(), WizardStep::Identification);
    }

    #[test]
    fn test_progress_percent() {
        let mut form = filled_form(DocumentKind::TermsOfUse);
        assert_eq!(form.progress_percent(), 25);
        form.next().unwrap();
        assert_eq!(form.progress_percent(), 50);
    }

    #[test]
    fn test_terms_request_maps_feature_labels_in_fixed_order() {
        let mut form = filled_form(DocumentKind::TermsOfUse);
        form.enabled_features = vec!["analytics".to_string(), "cookies".to_string()];
        let req = form.into_request().unwrap();
        // Labels follow the toggle catalog order, not the toggle click order
        assert_eq!(
            req.selected_features,
            vec![
                "Uso de cookies e tecnologias de rastreamento".to_string(),
                "Coleta de dados analíticos".to_string(),
            ]
        );
        assert!(req.collected_data_types.is_empty());
    }

    #[test]
    fn test_privacy_request_maps_data_type_labels_preserving_order() {
        let mut form = filled_form(DocumentKind::PrivacyPolicy);
        form.data_type_keys = vec![
            "telefone".to_string(),
            "email".to_string(),
            "biometria".to_string(),
        ];
        let req = form.into_request().unwrap();
        assert_eq!(
            req.collected_data_types,
            vec![
                "Número de telefone".to_string(),
                "Endereço de email".to_string(),
                // unknown keys pass through
                "biometria".to_string(),
            ]
        );
        assert!(req.selected_features.is_empty());
    }

    #[test]
    fn test_into_request_validates_all_steps() {
        let mut form = filled_form(DocumentKind::TermsOfUse);
        form.dpo_email = String::new();
        let err = form.into_request().unwrap_err();
        assert_eq!(err, WizardError::MissingFields(vec!["dpo_email"]));
    }
}
