//! OpenAPI module

use utoipa::OpenApi;

use crate::infrastructure::http::{errors::ErrorResponse, handlers::api::*};

#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "Form Mailer"),
    paths(
        pricing_form::handler,
        contact_form::handler,
        booking_form::handler,
        uptime::handler
    ),
    components(schemas(
        pricing_form::PricingFormBody,
        contact_form::ContactFormBody,
        booking_form::BookingFormBody,
        SubmissionResponse,
        uptime::UptimeResponse,
        ErrorResponse,
    ))
)]
pub struct ApiDocs;
