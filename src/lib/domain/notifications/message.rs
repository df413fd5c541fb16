//! Notification message

/// A notification email ready to be delivered.
///
/// Built by [`NotificationComposer`](super::NotificationComposer) and never
/// modified afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationMessage {
    subject: String,
    html_body: String,
    to_address: String,
    reply_to_address: String,
}

impl NotificationMessage {
    /// Creates a new notification message
    pub fn new(
        subject: impl Into<String>,
        html_body: impl Into<String>,
        to_address: impl Into<String>,
        reply_to_address: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            html_body: html_body.into(),
            to_address: to_address.into(),
            reply_to_address: reply_to_address.into(),
        }
    }

    /// The subject line
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The HTML body
    pub fn html_body(&self) -> &str {
        &self.html_body
    }

    /// The operator address the notification is sent to
    pub fn to_address(&self) -> &str {
        &self.to_address
    }

    /// The submitter's address, unvalidated
    pub fn reply_to_address(&self) -> &str {
        &self.reply_to_address
    }
}
