#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Form submission notification server

use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use form_mailer::{
    domain::notifications::{NotificationComposer, NotificationDispatcherImpl},
    infrastructure::{
        email::smtp::{SMTPConfig, SMTPMailer},
        http::{state::AppState, HttpServer, HttpServerConfig},
    },
};

/// Notification settings
#[derive(Debug, Parser)]
pub struct NotificationConfig {
    /// The operator address every notification is sent to
    #[clap(long = "email-to", env = "EMAIL_USER")]
    pub operator: String,

    /// How long a single delivery may take, in seconds
    #[clap(long, env = "DELIVERY_TIMEOUT_SECS", default_value = "30")]
    pub delivery_timeout: u64,
}

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The HTTP server configuration
    #[clap(flatten)]
    pub server: HttpServerConfig,

    /// The SMTP relay configuration
    #[clap(flatten)]
    pub smtp: SMTPConfig,

    /// The notification settings
    #[clap(flatten)]
    pub notifications: NotificationConfig,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let mailer = SMTPMailer::new(&args.smtp).context("failed to configure the SMTP relay")?;

    let dispatcher = NotificationDispatcherImpl::new(
        Arc::new(mailer),
        Duration::from_secs(args.notifications.delivery_timeout),
    );

    let state = AppState::new(
        NotificationComposer::new(args.notifications.operator),
        dispatcher,
    );

    HttpServer::new(state, &args.server)?.run().await
}
