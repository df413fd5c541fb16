//! Booking form handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    domain::notifications::{BookingRequest, NotificationDispatcher, ProductInterest},
    infrastructure::http::{errors::ApiError, state::AppState},
};

use super::{fields, submit, SubmissionResponse};

/// Booking form request body
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct BookingFormBody {
    #[schema(example = "10:00 - 10:30")]
    #[serde(deserialize_with = "fields::required")]
    time_slot: String,

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

    #[schema(example = "US")]
    #[serde(deserialize_with = "fields::required")]
    country: String,

    #[schema(example = "2024-09-01")]
    #[serde(deserialize_with = "fields::required")]
    date: String,

    #[serde(deserialize_with = "fields::optional")]
    facility: Option<String>,

    #[serde(deserialize_with = "fields::optional")]
    telematics: Option<String>,

    #[serde(deserialize_with = "fields::optional")]
    fleet: Option<String>,

    #[serde(deserialize_with = "fields::optional")]
    procurement: Option<String>,

    #[serde(deserialize_with = "fields::optional")]
    asset_inventory: Option<String>,

    #[serde(deserialize_with = "fields::optional")]
    others: Option<String>,

    #[schema(example = "Demo")]
    #[serde(deserialize_with = "fields::required")]
    main_goal: String,
}

impl From<BookingFormBody> for BookingRequest {
    fn from(body: BookingFormBody) -> Self {
        Self {
            time_slot: body.time_slot,
            first_name: body.first_name,
            last_name: body.last_name,
            email: body.email,
            phone: body.phone,
            country: body.country,
            date: body.date,
            interest: ProductInterest {
                facility: body.facility,
                telematics: body.telematics,
                fleet: body.fleet,
                procurement: body.procurement,
                asset_inventory: body.asset_inventory,
                others: body.others,
            },
            main_goal: body.main_goal,
        }
    }
}

/// Submit the booking form
#[utoipa::path(
    post,
    operation_id = "booking_form",
    tag = "Forms",
    path = "/api/booking-form",
    request_body = BookingFormBody,
    responses(
        (status = StatusCode::OK, description = "Notification sent", body = SubmissionResponse),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "Notification could not be sent", body = ErrorResponse, example = json!({ "success": false, "error": "Email delivery timed out after 30s" })),
    )
)]
pub async fn handler<D: NotificationDispatcher>(
    State(state): State<AppState<D>>,
    request: Result<Json<BookingFormBody>, JsonRejection>,
) -> Result<Json<SubmissionResponse>, ApiError> {
    let Json(body) = request?;

    submit(
        &state,
        BookingRequest::from(body).into(),
        "Booking form submitted successfully!",
    )
    .await
}
