//! Notification dispatcher

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use tracing::{error, info};

use super::{DeliveryError, DeliveryReceipt, Mailer, NotificationMessage};

/// Notification dispatcher
#[async_trait]
pub trait NotificationDispatcher: Clone + Send + Sync + 'static {
    /// Delivers a notification.
    ///
    /// Makes exactly one attempt; nothing is retried or queued.
    ///
    /// # Arguments
    /// * `message` - The [`NotificationMessage`] to deliver.
    ///
    /// # Returns
    /// A [`Result`] which is [`Ok`] containing the transport's [`DeliveryReceipt`] unchanged,
    /// or an [`Err`] containing a [`DeliveryError`] if the transport failed or timed out.
    async fn deliver(&self, message: &NotificationMessage)
        -> Result<DeliveryReceipt, DeliveryError>;
}

/// Notification dispatcher implementation
#[derive(Debug, Clone)]
pub struct NotificationDispatcherImpl<M>
where
    M: Mailer,
{
    mailer: Arc<M>,
    timeout: Duration,
}

impl<M> NotificationDispatcherImpl<M>
where
    M: Mailer,
{
    /// Creates a dispatcher that gives up on a delivery after `timeout`
    pub fn new(mailer: Arc<M>, timeout: Duration) -> Self {
        Self { mailer, timeout }
    }
}

#[async_trait]
impl<M> NotificationDispatcher for NotificationDispatcherImpl<M>
where
    M: Mailer,
{
    async fn deliver(
        &self,
        message: &NotificationMessage,
    ) -> Result<DeliveryReceipt, DeliveryError> {
        let result = match tokio::time::timeout(self.timeout, self.mailer.send(message)).await {
            Ok(sent) => sent.map_err(DeliveryError::from),
            Err(_) => Err(DeliveryError::TimedOut(self.timeout)),
        };

        match &result {
            Ok(receipt) => info!(
                message_id = %receipt.message_id,
                response = %receipt.response,
                "Email sent successfully"
            ),
            Err(err) => error!(error = %err, "Error sending email"),
        }

        result
    }
}
