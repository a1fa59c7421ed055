//! JSON handlers for the KPI resource.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;

use scorecard_app::ports::{AssignmentRepository, KpiRepository};
use scorecard_domain::error::{NotFoundError, ScorecardError, ValidationError};
use scorecard_domain::id::KpiId;
use scorecard_domain::kpi::NewKpi;
use scorecard_domain::time::Timestamp;

use crate::document::KpiDocument;
use crate::error::ApiError;
use crate::state::AppState;

/// Success envelope carrying a single KPI document.
#[derive(Serialize)]
pub struct KpiEnvelope {
    pub success: bool,
    pub kpi: KpiDocument,
}

/// Success envelope carrying a confirmation message and a KPI document.
#[derive(Serialize)]
pub struct KpiMessageEnvelope {
    pub success: bool,
    pub message: String,
    pub kpi: KpiDocument,
}

/// Success envelope carrying only a confirmation message.
#[derive(Serialize)]
pub struct MessageEnvelope {
    pub success: bool,
    pub message: String,
}

/// Success envelope carrying all KPI documents.
#[derive(Serialize)]
pub struct KpiListEnvelope {
    pub success: bool,
    pub kpis: Vec<KpiDocument>,
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<KpiEnvelope>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<KpiMessageEnvelope>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Ok(Json<MessageEnvelope>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<KpiMessageEnvelope>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<KpiListEnvelope>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Fields accepted by the update endpoint.
struct UpdateKpiRequest {
    elements: Vec<Value>,
    updated_at: Option<Timestamp>,
}

/// Parse a path identifier into a [`KpiId`].
///
/// A non-numeric id can never match a row, so it is answered as "not
/// found" rather than "bad request".
fn parse_id(raw: &str) -> Result<KpiId, ScorecardError> {
    raw.parse::<KpiId>().map_err(|_| {
        NotFoundError {
            entity: "KPI",
            id: raw.to_string(),
        }
        .into()
    })
}

/// Parse and validate the update body by hand.
///
/// The body is taken as a raw string so this adapter, not the framework,
/// controls the failure envelope and the exact parse-error message. No
/// storage access happens before this returns.
fn parse_update_body(body: &str) -> Result<UpdateKpiRequest, ScorecardError> {
    let value: Value =
        serde_json::from_str(body).map_err(|_| ValidationError::InvalidJson)?;

    let elements = match value.get("elements") {
        Some(Value::Array(items)) => items.clone(),
        _ => return Err(ValidationError::ElementsNotArray.into()),
    };

    let updated_at = match value.get("updatedAt") {
        None | Some(Value::Null) => None,
        Some(Value::String(raw)) => Some(
            raw.parse::<Timestamp>()
                .map_err(|_| ValidationError::InvalidTimestamp)?,
        ),
        Some(_) => return Err(ValidationError::InvalidTimestamp.into()),
    };

    Ok(UpdateKpiRequest {
        elements,
        updated_at,
    })
}

/// Parse and validate the create body by hand.
fn parse_create_body(body: &str) -> Result<NewKpi, ScorecardError> {
    let value: Value =
        serde_json::from_str(body).map_err(|_| ValidationError::InvalidJson)?;

    let name = match value.get("kpi_name") {
        Some(Value::String(name)) => name.clone(),
        None | Some(Value::Null) => return Err(ValidationError::EmptyName.into()),
        Some(_) => return Err(ValidationError::NameNotString.into()),
    };

    let elements = match value.get("elements") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.clone(),
        Some(_) => return Err(ValidationError::ElementsNotArray.into()),
    };

    NewKpi::builder().name(name).elements(elements).build()
}

/// `GET /kpi/{id}`
pub async fn get<KR, AR>(
    State(state): State<AppState<KR, AR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    KR: KpiRepository + Send + Sync + 'static,
    AR: AssignmentRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let kpi = state.kpi_service.get_kpi(id).await?;
    Ok(GetResponse::Ok(Json(KpiEnvelope {
        success: true,
        kpi: kpi.into(),
    })))
}

/// `PUT /kpi/{id}`
pub async fn update<KR, AR>(
    State(state): State<AppState<KR, AR>>,
    Path(id): Path<String>,
    body: String,
) -> Result<UpdateResponse, ApiError>
where
    KR: KpiRepository + Send + Sync + 'static,
    AR: AssignmentRepository + Send + Sync + 'static,
{
    // Body validation comes first; a malformed payload must fail before
    // any lookup happens.
    let req = parse_update_body(&body)?;
    let id = parse_id(&id)?;

    let kpi = state
        .kpi_service
        .update_elements(id, req.elements, req.updated_at)
        .await?;

    Ok(UpdateResponse::Ok(Json(KpiMessageEnvelope {
        success: true,
        message: "KPI updated successfully".to_string(),
        kpi: kpi.into(),
    })))
}

/// `DELETE /kpi/{id}`
pub async fn delete<KR, AR>(
    State(state): State<AppState<KR, AR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    KR: KpiRepository + Send + Sync + 'static,
    AR: AssignmentRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    state.kpi_service.delete_kpi(id).await?;
    Ok(DeleteResponse::Ok(Json(MessageEnvelope {
        success: true,
        message: "KPI deleted successfully".to_string(),
    })))
}

/// `POST /kpi`
pub async fn create<KR, AR>(
    State(state): State<AppState<KR, AR>>,
    body: String,
) -> Result<CreateResponse, ApiError>
where
    KR: KpiRepository + Send + Sync + 'static,
    AR: AssignmentRepository + Send + Sync + 'static,
{
    let new = parse_create_body(&body)?;
    let kpi = state.kpi_service.create_kpi(new).await?;
    Ok(CreateResponse::Created(Json(KpiMessageEnvelope {
        success: true,
        message: "KPI created successfully".to_string(),
        kpi: kpi.into(),
    })))
}

/// `GET /kpis`
pub async fn list<KR, AR>(
    State(state): State<AppState<KR, AR>>,
) -> Result<ListResponse, ApiError>
where
    KR: KpiRepository + Send + Sync + 'static,
    AR: AssignmentRepository + Send + Sync + 'static,
{
    let kpis = state.kpi_service.list_kpis().await?;
    Ok(ListResponse::Ok(Json(KpiListEnvelope {
        success: true,
        kpis: kpis.into_iter().map(KpiDocument::from).collect(),
    })))
}
