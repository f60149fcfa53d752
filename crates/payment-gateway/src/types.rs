//! Wire types for the provider's order API (v5)

use serde::{Deserialize, Serialize};
use shared_types::{OwnerType, Plan};

/// Tax id tag on the payer identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    #[serde(rename = "CPF")]
    Cpf,
    #[serde(rename = "CNPJ")]
    Cnpj,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerType {
    Individual,
    Company,
}

impl From<OwnerType> for DocumentType {
    fn from(owner: OwnerType) -> Self {
        match owner {
            OwnerType::Individual => DocumentType::Cpf,
            OwnerType::Organization => DocumentType::Cnpj,
        }
    }
}

impl From<OwnerType> for CustomerType {
    fn from(owner: OwnerType) -> Self {
        match owner {
            OwnerType::Individual => CustomerType::Individual,
            OwnerType::Organization => CustomerType::Company,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MobilePhone {
    pub country_code: String,
    pub area_code: String,
    pub number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phones {
    pub mobile_phone: MobilePhone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
    /// Digits-only CPF or CNPJ
    pub document: String,
    pub document_type: DocumentType,
    #[serde(rename = "type")]
    pub customer_type: CustomerType,
    pub phones: Phones,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Minor currency units (centavos)
    pub amount: i64,
    pub description: String,
    pub quantity: u32,
}

/// PIX orders expire after one hour
pub const PIX_EXPIRY_SECONDS: u32 = 3600;

/// Payment instrument descriptor.
///
/// There is deliberately no raw-card variant: cards enter as the token the
/// provider's capture widget issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "payment_method", rename_all = "snake_case")]
pub enum PaymentInstrument {
    Pix {
        pix: PixOptions,
    },
    CreditCard {
        credit_card: CreditCardOptions,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixOptions {
    pub expires_in: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCardOptions {
    pub card_token: String,
    pub installments: u32,
}

impl PaymentInstrument {
    pub fn pix() -> Self {
        PaymentInstrument::Pix {
            pix: PixOptions {
                expires_in: PIX_EXPIRY_SECONDS,
            },
        }
    }

    pub fn card_token(token: impl Into<String>, installments: u32) -> Self {
        PaymentInstrument::CreditCard {
            credit_card: CreditCardOptions {
                card_token: token.into(),
                installments,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    /// Minor currency units (centavos)
    pub amount: i64,
    pub customer: Customer,
    pub items: Vec<OrderItem>,
    pub payments: Vec<PaymentInstrument>,
}

impl CreateOrderRequest {
    /// One-item order charging a subscription plan
    pub fn for_plan(plan: &Plan, customer: Customer, payment: PaymentInstrument) -> Self {
        Self {
            amount: plan.price_cents,
            customer,
            items: vec![OrderItem {
                amount: plan.price_cents,
                description: plan.order_description.to_string(),
                quantity: 1,
            }],
            payments: vec![payment],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResponse {
    pub id: String,
    pub status: String,
    pub amount: i64,
    #[serde(default)]
    pub charges: Vec<Charge>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charge {
    pub id: String,
    pub amount: i64,
    pub status: String,
    pub payment_method: String,
    pub last_transaction: LastTransaction,
}

/// Per-charge transaction outcome; PIX carries the redeemable code and a
/// QR display URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastTransaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_code_url: Option<String>,
    pub success: bool,
}

/// Split a digits-only Brazilian mobile number into the provider's
/// country/area/local parts
pub fn split_phone(phone: &str) -> MobilePhone {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    let (area, number) = if digits.len() > 2 {
        digits.split_at(2)
    } else {
        ("", digits.as_str())
    };
    MobilePhone {
        country_code: "55".to_string(),
        area_code: area.to_string(),
        number: number.to_string(),
    }
}
