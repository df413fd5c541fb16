//! Contact form handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    domain::notifications::{ContactRequest, NotificationDispatcher},
    infrastructure::http::{errors::ApiError, state::AppState},
};

use super::{fields, submit, SubmissionResponse};

/// Contact form request body
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactFormBody {
    #[schema(example = "Ana")]
    #[serde(deserialize_with = "fields::required")]
    first_name: String,

    #[schema(example = "Lee")]
    #[serde(deserialize_with = "fields::required")]
    last_name: String,

    #[schema(example = "ana@x.com")]
    #[serde(deserialize_with = "fields::required")]
    email: String,

    #[schema(example = "555")]
    #[serde(deserialize_with = "fields::required")]
    phone: String,

    #[schema(example = "Acme")]
    #[serde(deserialize_with = "fields::required")]
    company_name: String,

    #[schema(example = "US")]
    #[serde(deserialize_with = "fields::required")]
    country: String,

    /// The kind of company the submitter represents
    #[schema(example = "Owner")]
    #[serde(deserialize_with = "fields::required")]
    are_you: String,

    #[schema(example = "Pricing")]
    #[serde(deserialize_with = "fields::required")]
    main_goal: String,
}

impl From<ContactFormBody> for ContactRequest {
    fn from(body: ContactFormBody) -> Self {
        Self {
            first_name: body.first_name,
            last_name: body.last_name,
            email: body.email,
            phone: body.phone,
            company_name: body.company_name,
            country: body.country,
            are_you: body.are_you,
            main_goal: body.main_goal,
        }
    }
}

/// Submit the "contact us" form
#[utoipa::path(
    post,
    operation_id = "contact_form",
    tag = "Forms",
    path = "/api/contact-form",
    request_body = ContactFormBody,
    responses(
        (status = StatusCode::OK, description = "Notification sent", body = SubmissionResponse),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "Notification could not be sent", body = ErrorResponse, example = json!({ "success": false, "error": "Connection refused (os error 111)" })),
    )
)]
pub async fn handler<D: NotificationDispatcher>(
    State(state): State<AppState<D>>,
    request: Result<Json<ContactFormBody>, JsonRejection>,
) -> Result<Json<SubmissionResponse>, ApiError> {
    let Json(body) = request?;

    submit(
        &state,
        ContactRequest::from(body).into(),
        "Contact form submitted successfully!",
    )
    .await
}
