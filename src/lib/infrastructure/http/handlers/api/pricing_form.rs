//! Pricing form handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    domain::notifications::{NotificationDispatcher, PricingInquiry, ProductInterest},
    infrastructure::http::{errors::ApiError, state::AppState},
};

use super::{fields, submit, SubmissionResponse};

/// Pricing form request body
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingFormBody {
    #[schema(example = "Ana")]
    #[serde(deserialize_with = "fields::required")]
    first_name: String,

    #[schema(example = "Lee")]
    #[serde(deserialize_with = "fields::required")]
    last_name: String,

    #[schema(example = "ana@acme.com")]
    #[serde(deserialize_with = "fields::required")]
    business_email: String,

    #[schema(example = "Acme")]
    #[serde(deserialize_with = "fields::required")]
    company_name: String,

    #[schema(example = "555-0100")]
    #[serde(deserialize_with = "fields::required")]
    phone_number: String,

    #[schema(example = "US")]
    #[serde(deserialize_with = "fields::required")]
    country: String,

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

    #[serde(deserialize_with = "fields::optional")]
    news_letter_subscription: Option<String>,
}

impl From<PricingFormBody> for PricingInquiry {
    fn from(body: PricingFormBody) -> Self {
        Self {
            first_name: body.first_name,
            last_name: body.last_name,
            business_email: body.business_email,
            company_name: body.company_name,
            phone_number: body.phone_number,
            country: body.country,
            interest: ProductInterest {
                facility: body.facility,
                telematics: body.telematics,
                fleet: body.fleet,
                procurement: body.procurement,
                asset_inventory: body.asset_inventory,
                others: body.others,
            },
            newsletter_subscription: body.news_letter_subscription,
        }
    }
}

/// Submit the pricing form
#[utoipa::path(
    post,
    operation_id = "pricing_form",
    tag = "Forms",
    path = "/api/pricing-form",
    request_body = PricingFormBody,
    responses(
        (status = StatusCode::OK, description = "Notification sent", body = SubmissionResponse),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "Notification could not be sent", body = ErrorResponse, example = json!({ "success": false, "error": "Connection refused (os error 111)" })),
    )
)]
pub async fn handler<D: NotificationDispatcher>(
    State(state): State<AppState<D>>,
    request: Result<Json<PricingFormBody>, JsonRejection>,
) -> Result<Json<SubmissionResponse>, ApiError> {
    let Json(body) = request?;

    submit(
        &state,
        PricingInquiry::from(body).into(),
        "Form submitted successfully!",
    )
    .await
}
