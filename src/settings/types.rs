//! Settings types
//!
//! The domain record carries the raw secrets so stores can persist them and
//! handlers can detect changes; it never crosses the HTTP boundary. The
//! response shape replaces each secret with a derived "configured" flag.

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// The singleton system settings record (full-replace update semantics)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SystemSettings {
	// Registration
	pub registration_enabled: bool,
	pub email_verify_enabled: bool,

	// SMTP
	pub smtp_host: String,
	pub smtp_port: u16,
	pub smtp_username: String,
	pub smtp_password: String,
	pub smtp_from_email: String,
	pub smtp_from_name: String,
	pub smtp_use_tls: bool,

	// CAPTCHA (Turnstile)
	pub turnstile_enabled: bool,
	pub turnstile_site_key: String,
	pub turnstile_secret_key: String,

	// Branding
	pub site_name: String,
	pub site_logo: String,
	pub site_subtitle: String,
	pub api_base_url: String,
	pub contact_info: String,
	pub doc_url: String,

	// Default account parameters
	pub default_concurrency: i64,
	pub default_balance: f64,
}

/// Masked settings shape returned to clients.
///
/// Secrets are represented only as derived booleans; the raw values are
/// never serialized outward after initial capture.
#[derive(Debug, Clone, Serialize)]
pub struct SystemSettingsRes {
	pub registration_enabled: bool,
	pub email_verify_enabled: bool,

	pub smtp_host: String,
	pub smtp_port: u16,
	pub smtp_username: String,
	pub smtp_password_configured: bool,
	pub smtp_from_email: String,
	pub smtp_from_name: String,
	pub smtp_use_tls: bool,

	pub turnstile_enabled: bool,
	pub turnstile_site_key: String,
	pub turnstile_secret_key_configured: bool,

	pub site_name: String,
	pub site_logo: String,
	pub site_subtitle: String,
	pub api_base_url: String,
	pub contact_info: String,
	pub doc_url: String,

	pub default_concurrency: i64,
	pub default_balance: f64,
}

impl From<&SystemSettings> for SystemSettingsRes {
	fn from(settings: &SystemSettings) -> Self {
		Self {
			registration_enabled: settings.registration_enabled,
			email_verify_enabled: settings.email_verify_enabled,
			smtp_host: settings.smtp_host.clone(),
			smtp_port: settings.smtp_port,
			smtp_username: settings.smtp_username.clone(),
			smtp_password_configured: !settings.smtp_password.is_empty(),
			smtp_from_email: settings.smtp_from_email.clone(),
			smtp_from_name: settings.smtp_from_name.clone(),
			smtp_use_tls: settings.smtp_use_tls,
			turnstile_enabled: settings.turnstile_enabled,
			turnstile_site_key: settings.turnstile_site_key.clone(),
			turnstile_secret_key_configured: !settings.turnstile_secret_key.is_empty(),
			site_name: settings.site_name.clone(),
			site_logo: settings.site_logo.clone(),
			site_subtitle: settings.site_subtitle.clone(),
			api_base_url: settings.api_base_url.clone(),
			contact_info: settings.contact_info.clone(),
			doc_url: settings.doc_url.clone(),
			default_concurrency: settings.default_concurrency,
			default_balance: settings.default_balance,
		}
	}
}

/// Request to replace the settings record.
///
/// Missing fields deserialize to their zero values, matching the
/// full-object PUT semantics: the record is replaced as a whole.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateSettingsRequest {
	pub registration_enabled: bool,
	pub email_verify_enabled: bool,

	pub smtp_host: String,
	pub smtp_port: i32,
	pub smtp_username: String,
	pub smtp_password: String,
	pub smtp_from_email: String,
	pub smtp_from_name: String,
	pub smtp_use_tls: bool,

	pub turnstile_enabled: bool,
	pub turnstile_site_key: String,
	pub turnstile_secret_key: String,

	pub site_name: String,
	pub site_logo: String,
	pub site_subtitle: String,
	pub api_base_url: String,
	pub contact_info: String,
	pub doc_url: String,

	pub default_concurrency: i64,
	pub default_balance: f64,
}

impl UpdateSettingsRequest {
	/// Applies the normalization floors before the record is persisted.
	/// A port beyond the valid range is rejected rather than truncated.
	pub fn normalize(&mut self) -> ClResult<()> {
		if self.smtp_port > u16::MAX as i32 {
			return Err(Error::ValidationError(format!("Invalid SMTP port: {}", self.smtp_port)));
		}
		if self.default_concurrency < 1 {
			self.default_concurrency = 1;
		}
		if self.default_balance < 0.0 {
			self.default_balance = 0.0;
		}
		if self.smtp_port <= 0 {
			self.smtp_port = 587;
		}
		Ok(())
	}

	/// Builds the full settings record from the normalized request
	pub fn into_settings(self) -> SystemSettings {
		SystemSettings {
			registration_enabled: self.registration_enabled,
			email_verify_enabled: self.email_verify_enabled,
			smtp_host: self.smtp_host,
			smtp_port: self.smtp_port as u16,
			smtp_username: self.smtp_username,
			smtp_password: self.smtp_password,
			smtp_from_email: self.smtp_from_email,
			smtp_from_name: self.smtp_from_name,
			smtp_use_tls: self.smtp_use_tls,
			turnstile_enabled: self.turnstile_enabled,
			turnstile_site_key: self.turnstile_site_key,
			turnstile_secret_key: self.turnstile_secret_key,
			site_name: self.site_name,
			site_logo: self.site_logo,
			site_subtitle: self.site_subtitle,
			api_base_url: self.api_base_url,
			contact_info: self.contact_info,
			doc_url: self.doc_url,
			default_concurrency: self.default_concurrency,
			default_balance: self.default_balance,
		}
	}
}


// vim: ts=4
