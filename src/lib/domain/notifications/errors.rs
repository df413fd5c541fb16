//! Error types for the notifications module

use std::time::Duration;

use lettre::{address::AddressError, transport::smtp};
use thiserror::Error;
use tracing::debug;

/// Mailer errors
#[derive(Debug, Error)]
pub enum MailerError {
    /// An address could not be parsed
    #[error("Invalid email address \"{address}\": {reason}")]
    InvalidAddress {
        /// The offending address
        address: String,

        /// Why it was rejected
        reason: String,
    },

    /// The message could not be built
    #[error("{0}")]
    BuildError(String),

    /// The relay failed or rejected the message
    #[error("{0}")]
    TransportError(String),
}

impl From<lettre::error::Error> for MailerError {
    fn from(err: lettre::error::Error) -> Self {
        MailerError::BuildError(err.to_string())
    }
}

impl From<smtp::Error> for MailerError {
    fn from(err: smtp::Error) -> Self {
        MailerError::TransportError(err.to_string())
    }
}

impl MailerError {
    /// Creates a [`MailerError::InvalidAddress`] for `address`
    pub fn invalid_address(address: &str, err: AddressError) -> Self {
        MailerError::InvalidAddress {
            address: address.to_string(),
            reason: err.to_string(),
        }
    }
}

/// Errors that can occur when delivering a notification
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeliveryError {
    /// The transport failed; carries the transport's own message
    #[error("{0}")]
    Transport(String),

    /// The transport did not answer in time
    #[error("Email delivery timed out after {}s", .0.as_secs())]
    TimedOut(Duration),
}

impl From<MailerError> for DeliveryError {
    fn from(err: MailerError) -> Self {
        debug!("MailerError -> DeliveryError");

        DeliveryError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_error_keeps_transport_message() {
        let err = DeliveryError::from(MailerError::TransportError(
            "Connection refused (os error 111)".to_string(),
        ));

        assert_eq!(
            err,
            DeliveryError::Transport("Connection refused (os error 111)".to_string())
        );
        assert_eq!(err.to_string(), "Connection refused (os error 111)");
    }

    #[test]
    fn test_delivery_error_timed_out_message() {
        let err = DeliveryError::TimedOut(Duration::from_secs(30));

        assert_eq!(err.to_string(), "Email delivery timed out after 30s");
    }

    #[test]
    fn test_invalid_address_message() {
        let err = "not an email"
            .parse::<lettre::Address>()
            .map_err(|e| MailerError::invalid_address("not an email", e))
            .expect_err("address should be rejected");

        assert!(err
            .to_string()
            .starts_with("Invalid email address \"not an email\""));
    }
}
