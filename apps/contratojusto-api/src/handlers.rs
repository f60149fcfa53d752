//! HTTP handlers for ContratoJusto API

use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use std::sync::Arc;

use docgen_engine::registry::{self, TemplateInfo};
use export_engine::{Artifact, ArtifactFormat};
use shared_types::{find_plan, plans, DocumentRequest, Plan};

use crate::error::ApiError;
use crate::models::*;
use crate::state::AppState;

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// List the available document templates
pub async fn list_templates() -> Json<Vec<TemplateInfo>> {
    Json(registry::list_templates())
}

/// List the subscription plans
pub async fn list_plans() -> Json<Vec<Plan>> {
    Json(plans().to_vec())
}

/// Render the document and return its text for on-screen preview
pub async fn preview_document(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DocumentRequest>,
) -> Result<Json<PreviewResponse>, ApiError> {
    request.validate()?;
    let rendered = state.generator.render(&request, Utc::now().date_naive());
    let file_name =
        export_engine::artifact_file_name(request.kind, &request.legal_name, ArtifactFormat::Pdf);
    let file_stem = file_name
        .strip_suffix(".pdf")
        .unwrap_or(&file_name)
        .to_string();
    Ok(Json(PreviewResponse {
        content: rendered.content().to_string(),
        file_stem,
    }))
}

/// Export the document as a paginated PDF
pub async fn export_document_pdf(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DocumentRequest>,
) -> Result<Response, ApiError> {
    export_document(&state, request, ArtifactFormat::Pdf)
}

/// Export the document as an editable Word file
pub async fn export_document_docx(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DocumentRequest>,
) -> Result<Response, ApiError> {
    export_document(&state, request, ArtifactFormat::Docx)
}

fn export_document(
    state: &AppState,
    request: DocumentRequest,
    format: ArtifactFormat,
) -> Result<Response, ApiError> {
    request.validate()?;
    let rendered = state.generator.render(&request, Utc::now().date_naive());
    let artifact = export_engine::export(&rendered, request.kind, &request.legal_name, format)?;
    tracing::info!(file_name = %artifact.file_name, size = artifact.bytes.len(), "Exported document");
    artifact_response(artifact)
}

fn artifact_response(artifact: Artifact) -> Result<Response, ApiError> {
    // File names carry accented characters, so the header value is built
    // from raw bytes rather than an ASCII string
    let disposition = HeaderValue::from_bytes(
        format!("attachment; filename=\"{}\"", artifact.file_name).as_bytes(),
    )
    .map_err(|e| ApiError::Internal(anyhow::anyhow!("invalid file name header: {e}")))?;

    let mut response = (StatusCode::OK, artifact.bytes).into_response();
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(artifact.content_type),
    );
    response
        .headers_mut()
        .insert(header::CONTENT_DISPOSITION, disposition);
    Ok(response)
}

/// Submit a checkout order to the payment provider
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>, ApiError> {
    let plan = find_plan(&request.plan_id)
        .ok_or_else(|| ApiError::UnknownPlan(request.plan_id.clone()))?;

    request.customer.validate()?;
    let instrument = request.payment.into_instrument()?;
    let order = payment_gateway::CreateOrderRequest::for_plan(
        plan,
        request.customer.into_customer(),
        instrument,
    );

    let response = state.payments.create_order(&order).await?;
    tracing::info!(order_id = %response.id, "Created checkout order");
    Ok(Json(CheckoutResponse::from(response)))
}

/// Poll an order's status
pub async fn get_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<CheckoutResponse>, ApiError> {
    let order = state.payments.get_order(&id).await?;
    Ok(Json(CheckoutResponse::from(order)))
}
