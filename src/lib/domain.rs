//! Domain logic: submissions, notification composition and delivery.

pub mod notifications;
