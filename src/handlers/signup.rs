//! # Signup Endpoint Handler
//!
//! Authoritative validation, dedupe, persistence, and notification for
//! signup submissions. The flow is validate, find-by-email, insert, then a
//! spawned confirmation email whose outcome never affects the response.

use std::sync::Arc;

use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{ApiError, EMAIL_CONFLICT_MESSAGE};
use crate::notify::Notifier;
use crate::repositories::{NewSignup, SignupRepository, SignupStore};
use crate::server::AppState;

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";

/// Request payload for a signup submission.
///
/// Fields default to empty when absent so that an omitted required field is
/// reported as a validation failure rather than a parse error.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    /// Full name (required)
    #[serde(default)]
    #[schema(example = "Ada")]
    pub name: String,
    /// Contact email (required, unique; accepted as-is, no format check)
    #[serde(default)]
    #[schema(example = "ada@example.com")]
    pub email: String,
    /// Industry sector, already resolved from any "Other" override (required)
    #[serde(default)]
    #[schema(example = "Technology")]
    pub industry: String,
    /// Job title (required)
    #[serde(default)]
    #[schema(example = "Engineer")]
    pub job_title: String,
    /// Company or organisation name (required)
    #[serde(default)]
    #[schema(example = "Acme")]
    pub organisation: String,
    /// Phone number (required; stored as given)
    #[serde(default)]
    #[schema(example = "+1-555-0100")]
    pub phone: String,
    /// Optional free-text interest statement
    #[serde(default)]
    pub interest: Option<String>,
    /// Privacy policy consent flag; accepted on the wire, not persisted
    #[serde(default)]
    pub agree: bool,
}

/// Response payload for a successful signup
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SignupResponse {
    /// Always true on success
    pub ok: bool,
}

impl From<SignupRequest> for NewSignup {
    fn from(request: SignupRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            industry: request.industry,
            job_title: request.job_title,
            organisation: request.organisation,
            phone: request.phone,
            interest: request.interest,
        }
    }
}

/// Handle a signup submission
#[utoipa::path(
    post,
    path = "/api/signup",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Signup recorded", body = SignupResponse),
        (status = 400, description = "Missing required fields", body = ApiError),
        (status = 409, description = "Email already signed up", body = ApiError),
        (status = 500, description = "Store or processing failure", body = ApiError)
    ),
    tag = "signup"
)]
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<Json<SignupResponse>, ApiError> {
    let Json(request) = payload?;

    let repository = SignupRepository::new(&state.db);
    process_signup(&repository, state.notifier.clone(), request).await
}

/// Transport-free core of the signup flow, generic over the store so it can
/// run against in-memory fakes in tests.
pub async fn process_signup<S: SignupStore + ?Sized>(
    store: &S,
    notifier: Arc<dyn Notifier>,
    request: SignupRequest,
) -> Result<Json<SignupResponse>, ApiError> {
    let required = [
        &request.name,
        &request.email,
        &request.industry,
        &request.job_title,
        &request.organisation,
        &request.phone,
    ];
    if required.iter().any(|field| field.is_empty()) {
        return Err(ApiError::new(
            StatusCode::BAD_REQUEST,
            MISSING_FIELDS_MESSAGE,
        ));
    }

    // Advisory pre-check for a friendly 409. The unique index remains the
    // authoritative guard: a concurrent insert between this check and ours
    // is caught below via the duplicate-key mapping.
    if store.find_by_email(&request.email).await?.is_some() {
        return Err(ApiError::new(StatusCode::CONFLICT, EMAIL_CONFLICT_MESSAGE));
    }

    let record = store.insert(NewSignup::from(request)).await?;

    // Fire-and-forget confirmation email
    let recipient = record.email.clone();
    let name = record.name.clone();
    tokio::spawn(async move {
        notifier.send_confirmation(&recipient, &name).await;
    });

    Ok(Json(SignupResponse { ok: true }))
}
