//! Form submission API

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::{OpenApi, ToSchema};

use crate::{
    domain::notifications::{DeliveryReceipt, NotificationDispatcher, Submission},
    infrastructure::http::{errors::ApiError, open_api::ApiDocs, state::AppState},
};

pub mod booking_form;
pub mod contact_form;
mod fields;
pub mod pricing_form;
pub mod stoplight;
pub mod uptime;

/// Returned when a submission has been delivered
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmissionResponse {
    /// Always `true`
    #[schema(example = true)]
    pub success: bool,

    /// A confirmation for the submitter
    #[schema(example = "Form submitted successfully!")]
    pub message: String,

    /// The mail relay's receipt, passed through unchanged
    #[schema(value_type = Object)]
    pub info: DeliveryReceipt,
}

/// Where the OpenAPI document is served
pub const OPENAPI_PATH: &str = "/api/openapi.json";

pub fn router<D: NotificationDispatcher>() -> Router<AppState<D>> {
    Router::new()
        .route("/docs", get(stoplight::handler))
        .route("/openapi.json", get(Json(ApiDocs::openapi())))
        .route("/uptime", get(uptime::handler))
        .route("/pricing-form", post(pricing_form::handler))
        .route("/contact-form", post(contact_form::handler))
        .route("/booking-form", post(booking_form::handler))
}

/// Composes the notification for `submission` and delivers it
async fn submit<D: NotificationDispatcher>(
    state: &AppState<D>,
    submission: Submission,
    confirmation: &str,
) -> Result<Json<SubmissionResponse>, ApiError> {
    info!(kind = %submission.kind(), "Submission received");

    let notification = state.composer.compose(&submission);
    let info = state.dispatcher.deliver(&notification).await?;

    Ok(Json(SubmissionResponse {
        success: true,
        message: confirmation.to_string(),
        info,
    }))
}
