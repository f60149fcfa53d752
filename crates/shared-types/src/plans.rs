//! Subscription plan catalog
//!
//! The checkout flow charges the Start plan; the free tier only exists so
//! the listing endpoint mirrors the pricing page.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingPeriod {
    Free,
    Monthly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub id: &'static str,
    pub name: &'static str,
    /// Amount in minor currency units (centavos)
    pub price_cents: i64,
    pub billing_period: BillingPeriod,
    /// Line-item description sent to the payment provider
    pub order_description: &'static str,
    pub features: &'static [&'static str],
}

const GRATUITO: Plan = Plan {
    id: "gratuito",
    name: "Gratuito",
    price_cents: 0,
    billing_period: BillingPeriod::Free,
    order_description: "Plano Gratuito - ContratoJusto",
    features: &["Acesso à plataforma"],
};

const START: Plan = Plan {
    id: "start",
    name: "Plano Start",
    price_cents: 5900,
    billing_period: BillingPeriod::Monthly,
    order_description: "Plano Start - ContratoJusto (Mensal)",
    features: &[
        "Geração ilimitada",
        "Histórico de versões",
        "PDF + Word editável",
        "Sem fidelidade",
    ],
};

pub fn plans() -> &'static [Plan] {
    &[GRATUITO, START]
}

pub fn find_plan(id: &str) -> Option<&'static Plan> {
    plans().iter().find(|p| p.id == id)
}
