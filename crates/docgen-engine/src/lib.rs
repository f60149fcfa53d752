//! Legal document text generation
//!
//! This crate renders a validated [`DocumentRequest`] into the flat
//! plain-text document that the export engine paginates and styles.
//! Rendering is deterministic: the only input besides the request is the
//! caller-supplied date used for the "Última atualização" stamp.

pub mod date;
pub mod registry;
pub mod templates;
pub mod wizard;

use chrono::NaiveDate;
use shared_types::{DocumentKind, DocumentRequest, RenderedDocument};

/// Template renderer entry point
pub struct DocumentGenerator;

impl DocumentGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Render the request into a flat text document.
    ///
    /// No validation happens here; callers run
    /// [`DocumentRequest::validate`] first.
    pub fn render(&self, request: &DocumentRequest, today: NaiveDate) -> RenderedDocument {
        let updated = date::format_long_pt_br(today);
        let content = match request.kind {
            DocumentKind::TermsOfUse => templates::terms::render(request, &updated),
            DocumentKind::PrivacyPolicy => templates::privacy::render(request, &updated),
        };
        RenderedDocument::new(content)
    }
}

impl Default for DocumentGenerator {
    fn default() -> Self {
        Self::new()
    }
}
