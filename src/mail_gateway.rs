//! Adapter that delivers email and probes SMTP reachability.
//!
//! The gateway receives a fully assembled transient [`SmtpConfig`] for every
//! probe or send; it does not read the settings store itself. The saved
//! configuration accessor exists so handlers can fall back to the persisted
//! SMTP password when a request omits one.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;

/// Transient SMTP configuration assembled per request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SmtpConfig {
	pub host: String,
	pub port: u16,
	pub username: String,
	pub password: String,
	pub from_email: String,
	pub from_name: String,
	pub use_tls: bool,
}

/// A `Steward` mail gateway
#[async_trait]
pub trait MailGateway: Debug + Send + Sync {
	/// Reads the SMTP configuration currently persisted for the instance
	async fn read_saved_config(&self) -> ClResult<SmtpConfig>;

	/// Probes SMTP reachability with the supplied configuration.
	/// No retries; the probe result is reported to the caller verbatim.
	async fn test_connection(&self, config: &SmtpConfig) -> ClResult<()>;

	/// Sends a single message with the supplied configuration
	async fn send(
		&self,
		config: &SmtpConfig,
		to: &str,
		subject: &str,
		html_body: &str,
	) -> ClResult<()>;
}

// vim: ts=4
