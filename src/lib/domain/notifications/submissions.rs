//! Typed form submissions

use std::fmt;

/// The kind of form a submission was received from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionKind {
    /// The pricing form
    PricingInquiry,

    /// The "contact us" form
    ContactRequest,

    /// The demo booking form
    BookingRequest,
}

impl SubmissionKind {
    /// Gets the name used for this kind in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PricingInquiry => "pricing_inquiry",
            Self::ContactRequest => "contact_request",
            Self::BookingRequest => "booking_request",
        }
    }
}

impl fmt::Display for SubmissionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Products the submitter ticked as being of interest.
///
/// Every field is optional; unticked products are rendered with a placeholder.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductInterest {
    /// Facility management
    pub facility: Option<String>,

    /// Telematics
    pub telematics: Option<String>,

    /// Fleet management
    pub fleet: Option<String>,

    /// Procurement
    pub procurement: Option<String>,

    /// Asset inventory
    pub asset_inventory: Option<String>,

    /// Anything else
    pub others: Option<String>,
}

/// A pricing inquiry
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PricingInquiry {
    /// The submitter's first name
    pub first_name: String,

    /// The submitter's last name
    pub last_name: String,

    /// The submitter's business email address, used as the reply-to address
    pub business_email: String,

    /// The submitter's company
    pub company_name: String,

    /// The submitter's phone number
    pub phone_number: String,

    /// The submitter's country
    pub country: String,

    /// Products of interest
    pub interest: ProductInterest,

    /// Whether the submitter asked for the newsletter
    pub newsletter_subscription: Option<String>,
}

/// A "contact us" request
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactRequest {
    /// The submitter's first name
    pub first_name: String,

    /// The submitter's last name
    pub last_name: String,

    /// The submitter's email address, used as the reply-to address
    pub email: String,

    /// The submitter's phone number
    pub phone: String,

    /// The submitter's company
    pub company_name: String,

    /// The submitter's country
    pub country: String,

    /// What kind of company the submitter represents
    pub are_you: String,

    /// What the submitter wants to achieve
    pub main_goal: String,
}

/// A demo booking request
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingRequest {
    /// The requested time slot
    pub time_slot: String,

    /// The submitter's first name
    pub first_name: String,

    /// The submitter's last name
    pub last_name: String,

    /// The submitter's email address, used as the reply-to address
    pub email: String,

    /// The submitter's phone number
    pub phone: String,

    /// The submitter's country
    pub country: String,

    /// The requested date
    pub date: String,

    /// Products of interest
    pub interest: ProductInterest,

    /// What the submitter wants to achieve
    pub main_goal: String,
}

/// A form submission of any kind
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Received from the pricing form
    PricingInquiry(PricingInquiry),

    /// Received from the "contact us" form
    ContactRequest(ContactRequest),

    /// Received from the booking form
    BookingRequest(BookingRequest),
}

impl Submission {
    /// Gets the kind of the submission
    pub fn kind(&self) -> SubmissionKind {
        match self {
            Self::PricingInquiry(_) => SubmissionKind::PricingInquiry,
            Self::ContactRequest(_) => SubmissionKind::ContactRequest,
            Self::BookingRequest(_) => SubmissionKind::BookingRequest,
        }
    }
}

impl From<PricingInquiry> for Submission {
    fn from(inquiry: PricingInquiry) -> Self {
        Self::PricingInquiry(inquiry)
    }
}

impl From<ContactRequest> for Submission {
    fn from(request: ContactRequest) -> Self {
        Self::ContactRequest(request)
    }
}

impl From<BookingRequest> for Submission {
    fn from(request: BookingRequest) -> Self {
        Self::BookingRequest(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_kind() {
        assert_eq!(
            Submission::from(PricingInquiry::default()).kind(),
            SubmissionKind::PricingInquiry
        );
        assert_eq!(
            Submission::from(ContactRequest::default()).kind(),
            SubmissionKind::ContactRequest
        );
        assert_eq!(
            Submission::from(BookingRequest::default()).kind(),
            SubmissionKind::BookingRequest
        );
    }

    #[test]
    fn test_submission_kind_display() {
        assert_eq!(SubmissionKind::ContactRequest.to_string(), "contact_request");
    }
}
