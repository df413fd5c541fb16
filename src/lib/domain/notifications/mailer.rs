//! Mail transport module

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[cfg(test)]
use mockall::mock;

use super::{MailerError, NotificationMessage};

/// The envelope a message was sent with
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// The envelope sender
    pub from: Option<String>,

    /// The envelope recipients
    pub to: Vec<String>,
}

/// The transport's confirmation that a message was accepted.
///
/// Handed back to the submitter unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryReceipt {
    /// The `Message-ID` header of the sent message
    pub message_id: String,

    /// The envelope the message was sent with
    pub envelope: Envelope,

    /// The recipients the relay accepted
    pub accepted: Vec<String>,

    /// The relay's final response, e.g. `250 Ok`
    pub response: String,
}

/// Mail transport
#[async_trait]
pub trait Mailer: Clone + Send + Sync + 'static {
    /// Sends a notification in a single attempt.
    ///
    /// # Arguments
    /// * `message` - The [`NotificationMessage`] to send.
    ///
    /// # Returns
    /// A [`Result`] which is [`Ok`] containing the relay's [`DeliveryReceipt`],
    /// or an [`Err`] containing a [`MailerError`] if the message was not accepted.
    async fn send(&self, message: &NotificationMessage) -> Result<DeliveryReceipt, MailerError>;
}

#[cfg(test)]
mock! {
    pub Mailer {}

    impl Clone for Mailer {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl Mailer for Mailer {
        async fn send(&self, message: &NotificationMessage) -> Result<DeliveryReceipt, MailerError>;
    }
}
