use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("PAGARME_API_KEY is not set")]
    MissingCredentials,

    #[error("payment provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Error the provider reported in its response body; the message is
    /// surfaced to the user as-is
    #[error("{message}")]
    Provider { status: u16, message: String },
}
