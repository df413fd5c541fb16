//! Notifications module.
//!
//! A [`Submission`] received from one of the website's forms is turned into a
//! [`NotificationMessage`] by the [`NotificationComposer`], then handed to a
//! [`NotificationDispatcher`] which sends it through a [`Mailer`].

mod composer;
mod dispatcher;
mod errors;
mod mailer;
mod message;
mod submissions;

pub use composer::{NotificationComposer, PLACEHOLDER};
pub use dispatcher::{NotificationDispatcher, NotificationDispatcherImpl};
pub use errors::{DeliveryError, MailerError};
pub use mailer::{DeliveryReceipt, Envelope, Mailer};
pub use message::NotificationMessage;
pub use submissions::{
    BookingRequest, ContactRequest, PricingInquiry, ProductInterest, Submission, SubmissionKind,
};
