//! Infrastructure: the SMTP relay and the HTTP API

pub mod email;
pub mod http;
