//! Application state for ContratoJusto API

use anyhow::Result;
use docgen_engine::DocumentGenerator;
use payment_gateway::{GatewayConfig, PagarmeClient};

pub struct AppState {
    pub generator: DocumentGenerator,
    pub payments: PagarmeClient,
}

impl AppState {
    pub fn new() -> Result<Self> {
        let config = GatewayConfig::from_env()?;
        Ok(Self {
            generator: DocumentGenerator::new(),
            payments: PagarmeClient::new(config),
        })
    }
}
