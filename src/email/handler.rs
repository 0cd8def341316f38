//! SMTP connectivity test and test email handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;

use crate::{
	core::extract::{JsonBody, OptionalRequestId},
	mail_gateway::SmtpConfig,
	prelude::*,
	types::{ApiResponse, MessageRes},
};

/// Request to probe SMTP reachability
#[derive(Debug, Clone, Deserialize)]
pub struct TestSmtpRequest {
	pub smtp_host: String,
	#[serde(default)]
	pub smtp_port: i32,
	#[serde(default)]
	pub smtp_username: String,
	#[serde(default)]
	pub smtp_password: String,
	#[serde(default)]
	pub smtp_use_tls: bool,
}

/// Request to send a test email
#[derive(Debug, Clone, Deserialize)]
pub struct SendTestEmailRequest {
	pub email: String,
	pub smtp_host: String,
	#[serde(default)]
	pub smtp_port: i32,
	#[serde(default)]
	pub smtp_username: String,
	#[serde(default)]
	pub smtp_password: String,
	#[serde(default)]
	pub smtp_from_email: String,
	#[serde(default)]
	pub smtp_from_name: String,
	#[serde(default)]
	pub smtp_use_tls: bool,
}

/// POST /api/admin/settings/test-smtp - Probe SMTP reachability
///
/// The probe result is reported verbatim; no retries at this layer.
pub async fn test_smtp_connection(
	State(app): State<App>,
	OptionalRequestId(req_id): OptionalRequestId,
	JsonBody(req): JsonBody<TestSmtpRequest>,
) -> ClResult<(StatusCode, Json<ApiResponse<MessageRes>>)> {
	if req.smtp_host.is_empty() {
		return Err(Error::ValidationError("smtp_host is required".into()));
	}

	let port = effective_port(req.smtp_port)?;
	let password = resolve_password(&app, req.smtp_password).await;

	let config = SmtpConfig {
		host: req.smtp_host,
		port,
		username: req.smtp_username,
		password,
		use_tls: req.smtp_use_tls,
		..Default::default()
	};

	debug!("Testing SMTP connection to {}:{}", config.host, config.port);
	app.mail_gateway.test_connection(&config).await?;

	let response = ApiResponse::new(MessageRes::new("SMTP connection successful"))
		.with_req_id(req_id.unwrap_or_default());
	Ok((StatusCode::OK, Json(response)))
}

/// POST /api/admin/settings/send-test-email - Send a test email
///
/// Sends a fixed HTML message branded with the current site name so
/// administrators can verify the full delivery path, not just the
/// connection handshake.
pub async fn send_test_email(
	State(app): State<App>,
	OptionalRequestId(req_id): OptionalRequestId,
	JsonBody(req): JsonBody<SendTestEmailRequest>,
) -> ClResult<(StatusCode, Json<ApiResponse<MessageRes>>)> {
	if req.smtp_host.is_empty() {
		return Err(Error::ValidationError("smtp_host is required".into()));
	}
	if req.email.is_empty() {
		return Err(Error::ValidationError("email is required".into()));
	}
	if !req.email.contains('@') || !req.email.contains('.') {
		return Err(Error::ValidationError("Invalid email address format".into()));
	}

	let port = effective_port(req.smtp_port)?;
	let password = resolve_password(&app, req.smtp_password).await;

	let config = SmtpConfig {
		host: req.smtp_host,
		port,
		username: req.smtp_username,
		password,
		from_email: req.smtp_from_email,
		from_name: req.smtp_from_name,
		use_tls: req.smtp_use_tls,
	};

	let site_name = app.settings_store.read_site_name().await?;
	let subject = format!("[{}] Test Email", site_name);
	let body = test_email_body(&site_name);

	info!(to = %req.email, "Sending test email via {}:{}", config.host, config.port);
	app.mail_gateway.send(&config, &req.email, &subject, &body).await?;

	let response = ApiResponse::new(MessageRes::new("Test email sent successfully"))
		.with_req_id(req_id.unwrap_or_default());
	Ok((StatusCode::OK, Json(response)))
}

/// Defaults an unset port to 587. A port beyond the valid range is
/// rejected rather than truncated to 16 bits.
fn effective_port(port: i32) -> ClResult<u16> {
	if port > u16::MAX as i32 {
		return Err(Error::ValidationError(format!("Invalid SMTP port: {}", port)));
	}
	if port <= 0 { Ok(587) } else { Ok(port as u16) }
}

/// Falls back to the saved SMTP password when the request omits one.
/// A failed lookup is tolerated silently and leaves the password empty.
async fn resolve_password(app: &App, password: String) -> String {
	if !password.is_empty() {
		return password;
	}
	match app.mail_gateway.read_saved_config().await {
		Ok(saved) => saved.password,
		Err(err) => {
			debug!("No saved SMTP config available: {}", err);
			String::new()
		}
	}
}

fn test_email_body(site_name: &str) -> String {
	format!(
		"<html><body>\
		<h2>Test Email from {}</h2>\
		<p>This is a test email to verify your SMTP settings are working correctly.</p>\
		<p>If you received this email, your email configuration is working.</p>\
		<hr>\
		<p style=\"color: #666;\">This is an automated test message.</p>\
		</body></html>",
		site_name
	)
}


// vim: ts=4
