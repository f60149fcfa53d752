//! Document request record and presentation-layer validation

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which legal document to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    #[serde(rename = "termos-de-uso")]
    TermsOfUse,
    #[serde(rename = "politica-de-privacidade")]
    PrivacyPolicy,
}

impl DocumentKind {
    /// Display title, used for the export title block and artifact naming
    pub fn title(&self) -> &'static str {
        match self {
            DocumentKind::TermsOfUse => "Termos de Uso",
            DocumentKind::PrivacyPolicy => "Política de Privacidade",
        }
    }

    /// All-caps heading as it appears on the first line of the document
    pub fn heading(&self) -> &'static str {
        match self {
            DocumentKind::TermsOfUse => "TERMOS DE USO",
            DocumentKind::PrivacyPolicy => "POLÍTICA DE PRIVACIDADE E PROTEÇÃO DE DADOS",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentKind::TermsOfUse => write!(f, "termos-de-uso"),
            DocumentKind::PrivacyPolicy => write!(f, "politica-de-privacidade"),
        }
    }
}

/// Whether the requester is a natural person (CPF) or a company (CNPJ)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OwnerType {
    #[serde(rename = "pf")]
    Individual,
    #[serde(rename = "pj")]
    Organization,
}

impl OwnerType {
    /// Label that precedes the tax id in rendered documents
    pub fn tax_id_label(&self) -> &'static str {
        match self {
            OwnerType::Individual => "CPF",
            OwnerType::Organization => "CNPJ",
        }
    }

    /// Digit count the tax id must carry for this owner type
    pub fn tax_id_digits(&self) -> usize {
        match self {
            OwnerType::Individual => 11,
            OwnerType::Organization => 14,
        }
    }
}

/// Input record for a single generation request.
///
/// Immutable once handed to the renderer: built, validated, rendered,
/// exported, discarded. Nothing is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRequest {
    pub kind: DocumentKind,
    pub owner_type: OwnerType,
    pub legal_name: String,
    pub tax_id: String,
    pub service_description: String,
    pub contact_email: String,
    pub contact_phone: String,
    #[serde(default)]
    pub website_url: Option<String>,
    pub postal_address: String,
    pub city: String,
    pub region: String,
    pub dpo_email: String,
    /// Terms of Use only; rendered as a numbered sub-list when non-empty
    #[serde(default)]
    pub selected_features: Vec<String>,
    /// Privacy Policy only; order is preserved in the rendered list
    #[serde(default)]
    pub collected_data_types: Vec<String>,
}

impl DocumentRequest {
    /// Presentation-layer validation, run before rendering.
    ///
    /// The renderer itself does not enforce any of this: it interpolates
    /// whatever it is given.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("legal_name", &self.legal_name)?;
        require("tax_id", &self.tax_id)?;
        require("service_description", &self.service_description)?;
        require("contact_email", &self.contact_email)?;
        require("contact_phone", &self.contact_phone)?;
        require("postal_address", &self.postal_address)?;
        require("city", &self.city)?;
        require("region", &self.region)?;
        require("dpo_email", &self.dpo_email)?;

        let expected = self.owner_type.tax_id_digits();
        let digits = self.tax_id.chars().filter(|c| c.is_ascii_digit()).count();
        if digits != self.tax_id.chars().count() || digits != expected {
            return Err(ValidationError::InvalidTaxId {
                label: self.owner_type.tax_id_label(),
                expected,
                got: self.tax_id.chars().count(),
            });
        }

        if !self.contact_email.contains('@') {
            return Err(ValidationError::InvalidEmail(self.contact_email.clone()));
        }
        if !self.dpo_email.contains('@') {
            return Err(ValidationError::InvalidEmail(self.dpo_email.clone()));
        }

        Ok(())
    }
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("{label} must be exactly {expected} digits (got {got})")]
    InvalidTaxId {
        label: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("invalid email address: {0}")]
    InvalidEmail(String),
}
