//! SMTP mailer implementation

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use clap::Parser;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
        response::Response,
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::debug;
use uuid::Uuid;

use crate::domain::notifications::{
    DeliveryReceipt, Envelope, Mailer, MailerError, NotificationMessage,
};

/// SMTP configuration
#[derive(Clone, Default, Debug, Parser)]
pub struct SMTPConfig {
    /// The SMTP host
    #[clap(long = "smtp-host", env = "SMTP_HOST")]
    pub host: String,

    /// The SMTP port
    #[clap(long = "smtp-port", env = "SMTP_PORT", default_value = "587")]
    pub port: u16,

    /// The SMTP username
    #[clap(long = "smtp-username", env = "SMTP_USERNAME")]
    pub username: String,

    /// The SMTP password
    #[clap(long = "smtp-password", env = "SMTP_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// The sender identity, e.g. `Website <noreply@example.com>`
    #[clap(long = "email-from", env = "EMAIL_FROM")]
    pub sender: String,

    /// Verify the TLS certificate
    #[clap(long = "smtp-verify-tls", env = "SMTP_VERIFY_TLS", default_value = "true")]
    pub verify_tls: bool,

    /// Enable STARTTLS (TLS upgrade on connection)
    #[clap(long = "smtp-starttls", env = "SMTP_STARTTLS", default_value = "true")]
    pub starttls: bool,
}

/// SMTP mailer.
///
/// Holds one transport for the lifetime of the process; every send reuses it.
#[derive(Clone)]
pub struct SMTPMailer {
    sender: Mailbox,
    transport: Arc<AsyncSmtpTransport<Tokio1Executor>>,
}

impl fmt::Debug for SMTPMailer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SMTPMailer")
            .field("sender", &self.sender)
            .field("transport", &"AsyncSmtpTransport")
            .finish()
    }
}

impl SMTPMailer {
    /// Creates a new SMTP mailer
    pub fn new(config: &SMTPConfig) -> Result<Self, MailerError> {
        let sender = parse_mailbox(&config.sender)?;

        let creds = Credentials::new(config.username.clone(), config.password.clone());

        let relay = if config.starttls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
        };

        let transport = relay
            .credentials(creds)
            .port(config.port)
            .tls(Tls::Opportunistic(
                TlsParameters::builder(config.host.to_string())
                    .dangerous_accept_invalid_certs(!config.verify_tls)
                    .build()?,
            ))
            .build();

        debug!(host = %config.host, port = config.port, "SMTP transport ready");

        Ok(Self {
            sender,
            transport: Arc::new(transport),
        })
    }
}

#[async_trait]
impl Mailer for SMTPMailer {
    async fn send(&self, message: &NotificationMessage) -> Result<DeliveryReceipt, MailerError> {
        let email = build_message(&self.sender, message)?;
        let response = self.transport.send(email.clone()).await?;

        Ok(receipt(&email, &response))
    }
}

/// The receipt for `email`, which the relay accepted with `response`
pub fn receipt(email: &Message, response: &Response) -> DeliveryReceipt {
    let envelope = email.envelope();
    let envelope = Envelope {
        from: envelope.from().map(ToString::to_string),
        to: envelope.to().iter().map(ToString::to_string).collect(),
    };
    let message_id = email
        .headers()
        .get_raw("Message-ID")
        .unwrap_or_default()
        .to_string();

    DeliveryReceipt {
        message_id,
        accepted: envelope.to.clone(),
        envelope,
        response: describe(response),
    }
}

/// Builds the email for `message`, sent on behalf of `sender`.
///
/// The reply-to header is left out when the submitter gave no address.
pub fn build_message(
    sender: &Mailbox,
    message: &NotificationMessage,
) -> Result<Message, MailerError> {
    let message_id = format!("<{}@{}>", Uuid::now_v7(), sender.email.domain());

    let mut builder = Message::builder()
        .from(sender.clone())
        .to(parse_mailbox(message.to_address())?)
        .message_id(Some(message_id))
        .subject(message.subject())
        .header(ContentType::TEXT_HTML);

    if !message.reply_to_address().is_empty() {
        builder = builder.reply_to(parse_mailbox(message.reply_to_address())?);
    }

    Ok(builder.body(message.html_body().to_string())?)
}

fn parse_mailbox(address: &str) -> Result<Mailbox, MailerError> {
    address
        .parse()
        .map_err(|err| MailerError::invalid_address(address, err))
}

fn describe(response: &Response) -> String {
    let lines = response
        .message()
        .map(ToString::to_string)
        .collect::<Vec<_>>();

    format!("{} {}", response.code(), lines.join(" "))
}
