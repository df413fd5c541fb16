//! Notification composer

use std::{borrow::Cow, fmt};

use super::{
    BookingRequest, ContactRequest, NotificationMessage, PricingInquiry, ProductInterest,
    Submission,
};

/// Rendered in place of an optional field that was left empty
pub const PLACEHOLDER: &str = "Not selected";

/// Builds notification emails from form submissions.
///
/// Composition never fails: missing required fields are rendered empty and
/// missing optional fields are rendered as [`PLACEHOLDER`]. Submitted values
/// are interpolated into the HTML body as-is, without escaping.
#[derive(Clone, Debug)]
pub struct NotificationComposer {
    operator_address: String,
}

impl NotificationComposer {
    /// Creates a composer addressing every notification to `operator_address`
    pub fn new(operator_address: impl Into<String>) -> Self {
        Self {
            operator_address: operator_address.into(),
        }
    }

    /// The address every notification is sent to
    pub fn operator_address(&self) -> &str {
        &self.operator_address
    }

    /// Composes the notification for `submission`
    pub fn compose(&self, submission: &Submission) -> NotificationMessage {
        let (subject, lines, reply_to) = match submission {
            Submission::PricingInquiry(inquiry) => (
                format!(
                    "New Pricing Form Submission from {} {}",
                    inquiry.first_name, inquiry.last_name
                ),
                pricing_lines(inquiry),
                &inquiry.business_email,
            ),
            Submission::ContactRequest(request) => (
                format!("New Contact Us Form Submission from {}", request.first_name),
                contact_lines(request),
                &request.email,
            ),
            Submission::BookingRequest(request) => (
                format!("New Booking Form Submission from {}", request.first_name),
                booking_lines(request),
                &request.email,
            ),
        };

        NotificationMessage::new(
            subject,
            render(&lines),
            self.operator_address.as_str(),
            reply_to.as_str(),
        )
    }
}

/// A single line of the HTML body
enum Line<'a> {
    /// A required field, rendered verbatim even when empty
    Field(&'static str, Cow<'a, str>),

    /// An optional field, rendered as [`PLACEHOLDER`] when empty
    Choice(&'static str, Option<&'a str>),

    /// A section heading
    Heading(&'static str),
}

impl<'a> Line<'a> {
    fn field(label: &'static str, value: &'a str) -> Self {
        Line::Field(label, Cow::Borrowed(value))
    }

    fn full_name(first_name: &str, last_name: &str) -> Self {
        Line::Field("Name", Cow::Owned(format!("{first_name} {last_name}")))
    }
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Field(label, value) => write!(f, "<p><strong>{label}:</strong> {value}</p>"),
            Line::Choice(label, value) => {
                let value = value.filter(|value| !value.is_empty()).unwrap_or(PLACEHOLDER);
                write!(f, "<p><strong>{label}:</strong> {value}</p>")
            }
            Line::Heading(label) => write!(f, "<p><strong>{label}</strong></p>"),
        }
    }
}

fn render(lines: &[Line<'_>]) -> String {
    lines
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn interest_lines(interest: &ProductInterest) -> [Line<'_>; 6] {
    [
        Line::Choice("Facility", interest.facility.as_deref()),
        Line::Choice("Telematics", interest.telematics.as_deref()),
        Line::Choice("Fleet", interest.fleet.as_deref()),
        Line::Choice("Procurement", interest.procurement.as_deref()),
        Line::Choice("Asset Inventory", interest.asset_inventory.as_deref()),
        Line::Choice("Others", interest.others.as_deref()),
    ]
}

fn pricing_lines(inquiry: &PricingInquiry) -> Vec<Line<'_>> {
    let mut lines = vec![
        Line::field("First Name", &inquiry.first_name),
        Line::field("Last Name", &inquiry.last_name),
        Line::field("Email", &inquiry.business_email),
        Line::field("Company Name", &inquiry.company_name),
        Line::field("Phone Number", &inquiry.phone_number),
        Line::field("Country", &inquiry.country),
    ];
    lines.extend(interest_lines(&inquiry.interest));
    lines.push(Line::Choice(
        "Newsletter Subscription",
        inquiry.newsletter_subscription.as_deref(),
    ));

    lines
}

fn contact_lines(request: &ContactRequest) -> Vec<Line<'_>> {
    vec![
        Line::full_name(&request.first_name, &request.last_name),
        Line::field("Email", &request.email),
        Line::field("Phone", &request.phone),
        Line::field("Company Name", &request.company_name),
        Line::field("Country", &request.country),
        Line::field("Company Type", &request.are_you),
        Line::field("Main goal", &request.main_goal),
    ]
}

fn booking_lines(request: &BookingRequest) -> Vec<Line<'_>> {
    let mut lines = vec![
        Line::full_name(&request.first_name, &request.last_name),
        Line::field("Time slot", &request.time_slot),
        Line::field("Email", &request.email),
        Line::field("Phone", &request.phone),
        Line::field("Country", &request.country),
        Line::field("Date", &request.date),
        Line::Heading("Product(s) of Interest"),
    ];
    lines.extend(interest_lines(&request.interest));
    lines.push(Line::field("Main goal", &request.main_goal));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPERATOR: &str = "sales@example.com";

    fn interest() -> ProductInterest {
        ProductInterest {
            facility: Some("Facility".to_string()),
            telematics: Some("Telematics".to_string()),
            fleet: Some("Fleet".to_string()),
            procurement: Some("Procurement".to_string()),
            asset_inventory: Some("Asset Inventory".to_string()),
            others: Some("Others".to_string()),
        }
    }

    fn pricing_inquiry() -> PricingInquiry {
        PricingInquiry {
            first_name: "Ana".to_string(),
            last_name: "Lee".to_string(),
            business_email: "ana@acme.com".to_string(),
            company_name: "Acme".to_string(),
            phone_number: "555-0100".to_string(),
            country: "US".to_string(),
            interest: interest(),
            newsletter_subscription: Some("Yes".to_string()),
        }
    }

    fn contact_request() -> ContactRequest {
        ContactRequest {
            first_name: "Ana".to_string(),
            last_name: "Lee".to_string(),
            email: "ana@x.com".to_string(),
            phone: "555".to_string(),
            company_name: "Acme".to_string(),
            country: "US".to_string(),
            are_you: "Owner".to_string(),
            main_goal: "Pricing".to_string(),
        }
    }

    fn booking_request() -> BookingRequest {
        BookingRequest {
            time_slot: "10:00 - 10:30".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Lee".to_string(),
            email: "ana@x.com".to_string(),
            phone: "555".to_string(),
            country: "US".to_string(),
            date: "2024-09-01".to_string(),
            interest: interest(),
            main_goal: "Demo".to_string(),
        }
    }

    fn compose(submission: impl Into<Submission>) -> NotificationMessage {
        NotificationComposer::new(OPERATOR).compose(&submission.into())
    }

    #[test]
    fn test_compose_pricing_inquiry() {
        let message = compose(pricing_inquiry());

        assert_eq!(message.subject(), "New Pricing Form Submission from Ana Lee");
        assert_eq!(
            message.html_body(),
            [
                "<p><strong>First Name:</strong> Ana</p>",
                "<p><strong>Last Name:</strong> Lee</p>",
                "<p><strong>Email:</strong> ana@acme.com</p>",
                "<p><strong>Company Name:</strong> Acme</p>",
                "<p><strong>Phone Number:</strong> 555-0100</p>",
                "<p><strong>Country:</strong> US</p>",
                "<p><strong>Facility:</strong> Facility</p>",
                "<p><strong>Telematics:</strong> Telematics</p>",
                "<p><strong>Fleet:</strong> Fleet</p>",
                "<p><strong>Procurement:</strong> Procurement</p>",
                "<p><strong>Asset Inventory:</strong> Asset Inventory</p>",
                "<p><strong>Others:</strong> Others</p>",
                "<p><strong>Newsletter Subscription:</strong> Yes</p>",
            ]
            .join("\n")
        );
        assert_eq!(message.to_address(), OPERATOR);
        assert_eq!(message.reply_to_address(), "ana@acme.com");
    }

    #[test]
    fn test_compose_contact_request() {
        let message = compose(contact_request());

        assert_eq!(message.subject(), "New Contact Us Form Submission from Ana");
        assert_eq!(
            message.html_body(),
            [
                "<p><strong>Name:</strong> Ana Lee</p>",
                "<p><strong>Email:</strong> ana@x.com</p>",
                "<p><strong>Phone:</strong> 555</p>",
                "<p><strong>Company Name:</strong> Acme</p>",
                "<p><strong>Country:</strong> US</p>",
                "<p><strong>Company Type:</strong> Owner</p>",
                "<p><strong>Main goal:</strong> Pricing</p>",
            ]
            .join("\n")
        );
        assert_eq!(message.to_address(), OPERATOR);
        assert_eq!(message.reply_to_address(), "ana@x.com");
    }

    #[test]
    fn test_compose_booking_request() {
        let message = compose(booking_request());

        assert_eq!(message.subject(), "New Booking Form Submission from Ana");
        assert_eq!(
            message.html_body(),
            [
                "<p><strong>Name:</strong> Ana Lee</p>",
                "<p><strong>Time slot:</strong> 10:00 - 10:30</p>",
                "<p><strong>Email:</strong> ana@x.com</p>",
                "<p><strong>Phone:</strong> 555</p>",
                "<p><strong>Country:</strong> US</p>",
                "<p><strong>Date:</strong> 2024-09-01</p>",
                "<p><strong>Product(s) of Interest</strong></p>",
                "<p><strong>Facility:</strong> Facility</p>",
                "<p><strong>Telematics:</strong> Telematics</p>",
                "<p><strong>Fleet:</strong> Fleet</p>",
                "<p><strong>Procurement:</strong> Procurement</p>",
                "<p><strong>Asset Inventory:</strong> Asset Inventory</p>",
                "<p><strong>Others:</strong> Others</p>",
                "<p><strong>Main goal:</strong> Demo</p>",
            ]
            .join("\n")
        );
        assert_eq!(message.reply_to_address(), "ana@x.com");
    }

    #[test]
    fn test_missing_optional_fields_use_placeholder() {
        let inquiry = PricingInquiry {
            interest: ProductInterest {
                facility: None,
                fleet: Some(String::new()),
                ..interest()
            },
            ..pricing_inquiry()
        };

        let message = compose(inquiry);

        assert_eq!(message.html_body().matches(PLACEHOLDER).count(), 2);
        assert!(message
            .html_body()
            .contains("<p><strong>Facility:</strong> Not selected</p>"));
        assert!(message
            .html_body()
            .contains("<p><strong>Fleet:</strong> Not selected</p>"));
        assert!(message
            .html_body()
            .contains("<p><strong>Telematics:</strong> Telematics</p>"));
    }

    #[test]
    fn test_every_optional_field_missing() {
        let message = compose(BookingRequest {
            interest: ProductInterest::default(),
            ..booking_request()
        });

        assert_eq!(message.html_body().matches(PLACEHOLDER).count(), 6);

        let message = compose(PricingInquiry {
            interest: ProductInterest::default(),
            newsletter_subscription: None,
            ..pricing_inquiry()
        });

        assert_eq!(message.html_body().matches(PLACEHOLDER).count(), 7);
    }

    #[test]
    fn test_required_fields_are_never_replaced() {
        let message = compose(ContactRequest::default());

        assert!(!message.html_body().contains(PLACEHOLDER));
        assert!(message
            .html_body()
            .contains("<p><strong>Main goal:</strong> </p>"));
    }

    #[test]
    fn test_empty_names_leave_blank_subject() {
        assert_eq!(
            compose(PricingInquiry::default()).subject(),
            "New Pricing Form Submission from  "
        );
        assert_eq!(
            compose(ContactRequest::default()).subject(),
            "New Contact Us Form Submission from "
        );
        assert_eq!(
            compose(BookingRequest::default()).subject(),
            "New Booking Form Submission from "
        );
    }

    #[test]
    fn test_addresses_are_not_validated() {
        let message = compose(ContactRequest {
            email: "not an email".to_string(),
            ..contact_request()
        });

        assert_eq!(message.to_address(), OPERATOR);
        assert_eq!(message.reply_to_address(), "not an email");
    }

    #[test]
    fn test_values_are_interpolated_verbatim() {
        let message = compose(ContactRequest {
            main_goal: "<script>alert(1)</script>".to_string(),
            ..contact_request()
        });

        assert!(message
            .html_body()
            .contains("<p><strong>Main goal:</strong> <script>alert(1)</script></p>"));
    }
}
