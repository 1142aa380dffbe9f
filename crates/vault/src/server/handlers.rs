//! Axum request handlers for all service endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::protocol::{CreateTransactionRequest, DecryptedTransaction, ErrorResponse, HealthResponse};
use common::ServiceError;
use envelope::{EnvelopeError, ErrorClass, SecureRecord};
use tracing::{error, info, warn};

use super::state::AppState;

/// `POST /transactions/encrypt` — seal a payload and store the resulting record.
///
/// Returns `201 Created` with the Secure Record.
pub async fn create_transaction(
    State(state): State<AppState>,
    body: Result<Json<CreateTransactionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SecureRecord>), ApiError> {
    let Json(req) = body?;

    let party_id = req.party_id.ok_or(EnvelopeError::MissingField("partyId"))?;
    let payload = req
        .payload
        .ok_or_else(|| EnvelopeError::NotSerializable("payload is absent".into()))?;

    let record = envelope::encrypt_transaction(&party_id, &payload, &state.master_key_hex)?;
    state.store.put(record.clone());
    info!(record_id = %record.id, "transaction record created");

    Ok((StatusCode::CREATED, Json(record)))
}

/// `GET /transactions/:id` — return a stored record as-is (still encrypted).
pub async fn get_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SecureRecord>, ApiError> {
    let record = lookup(&state, &id)?;
    Ok(Json(record))
}

/// `POST /transactions/:id/decrypt` — open a stored record with the configured key.
pub async fn decrypt_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DecryptedTransaction>, ApiError> {
    let record = lookup(&state, &id)?;
    let payload: serde_json::Value = envelope::decrypt_transaction(&record, &state.master_key_hex)
        .map_err(|e| {
            warn!(record_id = %record.id, error = %e, "record could not be opened");
            e
        })?;

    Ok(Json(DecryptedTransaction {
        id: record.id,
        party_id: record.party_id,
        payload,
    }))
}

/// `GET /health` — liveness check.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        records_stored: state.store.len(),
    })
}

/// Catch-all 404 handler.
pub async fn not_found() -> impl IntoResponse {
    let err = ErrorResponse::new("not_found", "the requested resource does not exist");
    (StatusCode::NOT_FOUND, Json(err))
}

fn lookup(state: &AppState, id: &str) -> Result<SecureRecord, ApiError> {
    state
        .store
        .get(id)
        .ok_or_else(|| ServiceError::NotFound(format!("no record with id {id}")).into())
}

// ---------------------------------------------------------------------------
// Error mapping
// ---------------------------------------------------------------------------

/// Handler error rendered as an [`ErrorResponse`] body.
#[derive(Debug)]
pub enum ApiError {
    /// A classified service error.
    Service(ServiceError),
    /// The request body could not be read as JSON.
    Body(JsonRejection),
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        ApiError::Service(e)
    }
}

impl From<EnvelopeError> for ApiError {
    fn from(e: EnvelopeError) -> Self {
        let service = match e.class() {
            ErrorClass::Structural => ServiceError::BadRequest(e.to_string()),
            ErrorClass::Cryptographic => ServiceError::AuthenticationFailed,
            ErrorClass::Internal => ServiceError::Internal(e.to_string()),
        };
        ApiError::Service(service)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError::Body(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Service(e) => {
                if let ServiceError::Internal(detail) = &e {
                    error!(error = %detail, "internal error");
                }
                let status =
                    StatusCode::from_u16(e.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                let body = ErrorResponse::new(e.code(), e.public_message());
                (status, Json(body)).into_response()
            }
            ApiError::Body(rejection) => {
                // Type mismatches (e.g. a numeric partyId) are plain bad requests.
                let status = match &rejection {
                    JsonRejection::JsonDataError(_) => StatusCode::BAD_REQUEST,
                    other => other.status(),
                };
                let code = match status {
                    StatusCode::PAYLOAD_TOO_LARGE => "payload_too_large",
                    StatusCode::UNSUPPORTED_MEDIA_TYPE => "unsupported_media_type",
                    s if s.is_server_error() => "internal_error",
                    _ => "bad_request",
                };
                let body = ErrorResponse::new(code, rejection.body_text());
                (status, Json(body)).into_response()
            }
        }
    }
}
