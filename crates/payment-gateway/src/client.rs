//! HTTP client for the order endpoints

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::error::PaymentError;
use crate::types::{CreateOrderRequest, OrderResponse};

const DEFAULT_BASE_URL: &str = "https://api.pagar.me/core/v5";

/// Provider API configuration
#[derive(Clone)]
pub struct GatewayConfig {
    api_key: SecretString,
    base_url: String,
}

impl GatewayConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Reads `PAGARME_API_KEY` and, optionally, `PAGARME_BASE_URL`
    pub fn from_env() -> Result<Self, PaymentError> {
        let api_key =
            std::env::var("PAGARME_API_KEY").map_err(|_| PaymentError::MissingCredentials)?;
        let mut config = Self::new(api_key);
        if let Ok(base_url) = std::env::var("PAGARME_BASE_URL") {
            config.base_url = base_url;
        }
        Ok(config)
    }

    /// Set a custom API base URL (for testing)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

/// Error body the provider returns on non-2xx responses
#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    #[serde(default)]
    message: Option<String>,
}

pub struct PagarmeClient {
    config: GatewayConfig,
    http_client: reqwest::Client,
}

impl PagarmeClient {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Submit an order. Single request/response, no retries; failures are
    /// surfaced to the caller for a user-facing notification.
    #[instrument(skip(self, order), fields(amount = order.amount))]
    pub async fn create_order(
        &self,
        order: &CreateOrderRequest,
    ) -> Result<OrderResponse, PaymentError> {
        let response = self
            .http_client
            .post(format!("{}/orders", self.config.base_url))
            .basic_auth(self.config.api_key.expose_secret(), Some(""))
            .json(order)
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let created: OrderResponse = response.json().await?;
        info!(order_id = %created.id, status = %created.status, "Order created");
        Ok(created)
    }

    /// Fetch an order by id, for status polling
    #[instrument(skip(self))]
    pub async fn get_order(&self, order_id: &str) -> Result<OrderResponse, PaymentError> {
        let response = self
            .http_client
            .get(format!("{}/orders/{}", self.config.base_url, order_id))
            .basic_auth(self.config.api_key.expose_secret(), Some(""))
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, PaymentError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ProviderErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| "Erro ao processar pagamento".to_string());
        warn!(status = status.as_u16(), %message, "Provider rejected the request");
        Err(PaymentError::Provider {
            status: status.as_u16(),
            message,
        })
    }
}
