//! Data models for ContratoJusto API

use payment_gateway::{
    split_phone, Customer, OrderResponse, PaymentInstrument, Phones,
};
use serde::{Deserialize, Serialize};
use shared_types::OwnerType;

use crate::error::ApiError;

/// Rendered text returned by the preview endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewResponse {
    pub content: String,
    /// File name stem both export formats will use
    pub file_stem: String,
}

/// Payer identity as collected by the checkout form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    pub owner_type: OwnerType,
    /// Digits-only CPF or CNPJ
    pub tax_id: String,
    /// Digits-only mobile number with area code
    pub phone: String,
}

impl CustomerInfo {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::InvalidRequest("customer name is required".into()));
        }
        if !self.email.contains('@') {
            return Err(ApiError::InvalidRequest(format!(
                "invalid email address: {}",
                self.email
            )));
        }
        let expected = self.owner_type.tax_id_digits();
        let all_digits = self.tax_id.chars().all(|c| c.is_ascii_digit());
        if !all_digits || self.tax_id.len() != expected {
            return Err(ApiError::InvalidRequest(format!(
                "{} must be exactly {} digits",
                self.owner_type.tax_id_label(),
                expected
            )));
        }
        if self.phone.chars().filter(|c| c.is_ascii_digit()).count() < 10 {
            return Err(ApiError::InvalidRequest(
                "phone must carry area code and number".into(),
            ));
        }
        Ok(())
    }

    pub fn into_customer(self) -> Customer {
        Customer {
            document_type: self.owner_type.into(),
            customer_type: self.owner_type.into(),
            phones: Phones {
                mobile_phone: split_phone(&self.phone),
            },
            name: self.name,
            email: self.email,
            document: self.tax_id,
        }
    }
}

/// Payment selection on the checkout form. Cards arrive as the token the
/// provider's capture widget issued; raw card fields are not accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum PaymentSelection {
    Pix,
    CreditCard { card_token: String, installments: u32 },
}

impl PaymentSelection {
    pub fn into_instrument(self) -> Result<PaymentInstrument, ApiError> {
        match self {
            PaymentSelection::Pix => Ok(PaymentInstrument::pix()),
            PaymentSelection::CreditCard {
                card_token,
                installments,
            } => {
                if card_token.trim().is_empty() {
                    return Err(ApiError::InvalidRequest("card_token is required".into()));
                }
                if installments == 0 {
                    return Err(ApiError::InvalidRequest(
                        "installments must be at least 1".into(),
                    ));
                }
                Ok(PaymentInstrument::card_token(card_token, installments))
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub plan_id: String,
    pub customer: CustomerInfo,
    pub payment: PaymentSelection,
}

/// Order outcome returned to the client; PIX orders carry the redeemable
/// code and the QR display URL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutResponse {
    pub order_id: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pix_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pix_qr_code_url: Option<String>,
}

impl From<OrderResponse> for CheckoutResponse {
    fn from(order: OrderResponse) -> Self {
        let transaction = order.charges.first().map(|c| &c.last_transaction);
        Self {
            order_id: order.id,
            status: order.status,
            pix_code: transaction.and_then(|t| t.qr_code.clone()),
            pix_qr_code_url: transaction.and_then(|t| t.qr_code_url.clone()),
        }
    }
}
