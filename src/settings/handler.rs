//! Settings management handlers

use axum::{Json, extract::State, http::StatusCode};

use crate::{
	core::extract::{AuthCtx, JsonBody, OptionalAuth, OptionalRequestId},
	prelude::*,
	settings::types::{SystemSettings, SystemSettingsRes, UpdateSettingsRequest},
	types::ApiResponse,
};

/// GET /api/admin/settings - Fetch the settings record in its masked shape
pub async fn get_settings(
	State(app): State<App>,
	OptionalRequestId(req_id): OptionalRequestId,
) -> ClResult<(StatusCode, Json<ApiResponse<SystemSettingsRes>>)> {
	let settings = app.settings_store.read_settings().await?;

	let response = ApiResponse::new(SystemSettingsRes::from(&settings))
		.with_req_id(req_id.unwrap_or_default());
	Ok((StatusCode::OK, Json(response)))
}

/// PUT /api/admin/settings - Replace the settings record
///
/// The record is replaced as a whole. Out-of-range account defaults are
/// floored rather than rejected, while an impossible SMTP port fails
/// validation; a CAPTCHA key change is validated with the provider
/// before the save so a bad key can never be persisted.
pub async fn update_settings(
	State(app): State<App>,
	OptionalAuth(auth): OptionalAuth,
	OptionalRequestId(req_id): OptionalRequestId,
	JsonBody(mut req): JsonBody<UpdateSettingsRequest>,
) -> ClResult<(StatusCode, Json<ApiResponse<SystemSettingsRes>>)> {
	// Needed both for CAPTCHA change detection and for the audit diff
	let previous = app.settings_store.read_settings().await?;

	req.normalize()?;

	if req.turnstile_enabled {
		if req.turnstile_site_key.is_empty() {
			return Err(Error::ValidationError(
				"Turnstile site key is required when enabled".into(),
			));
		}
		if req.turnstile_secret_key.is_empty() {
			return Err(Error::ValidationError(
				"Turnstile secret key is required when enabled".into(),
			));
		}

		// Validate only when a key actually changed, so re-saving the same
		// configuration does not hit the provider
		let site_key_changed = previous.turnstile_site_key != req.turnstile_site_key;
		let secret_key_changed = previous.turnstile_secret_key != req.turnstile_secret_key;
		if site_key_changed || secret_key_changed {
			app.challenge_validator.validate_secret_key(&req.turnstile_secret_key).await?;
		}
	}

	let settings = req.clone().into_settings();
	app.settings_store.update_settings(&settings).await?;

	audit_settings_update(auth.as_ref(), &previous, &settings, &req);

	// Re-fetch so the response reflects what was actually persisted
	let updated = app.settings_store.read_settings().await?;

	let response = ApiResponse::new(SystemSettingsRes::from(&updated))
		.with_req_id(req_id.unwrap_or_default());
	Ok((StatusCode::OK, Json(response)))
}

/// Emits one structured audit line describing the update.
///
/// A missing acting identity degrades to placeholder identity fields;
/// audit emission never fails the request.
fn audit_settings_update(
	auth: Option<&AuthCtx>,
	before: &SystemSettings,
	after: &SystemSettings,
	req: &UpdateSettingsRequest,
) {
	let changed = diff_settings(before, after, req);
	if changed.is_empty() {
		return;
	}

	let (user_id, role) = match auth {
		Some(auth) => (auth.user_id, auth.roles.first().map(|r| r.as_ref()).unwrap_or("")),
		None => (0, ""),
	};

	info!(
		target: "audit",
		user_id,
		role,
		changed = ?changed,
		"settings updated"
	);
}

/// Computes the changed-field list for the audit line.
///
/// Non-secret fields compare before/after by value. The two secrets are
/// counted as changed whenever the raw request value is non-empty: the
/// stored values are not comparable, and supplying a non-empty secret is
/// defined as an intentional change. Output follows the canonical field
/// order, not insertion order.
fn diff_settings(
	before: &SystemSettings,
	after: &SystemSettings,
	req: &UpdateSettingsRequest,
) -> Vec<&'static str> {
	let mut changed = Vec::with_capacity(16);
	if before.registration_enabled != after.registration_enabled {
		changed.push("registration_enabled");
	}
	if before.email_verify_enabled != after.email_verify_enabled {
		changed.push("email_verify_enabled");
	}
	if before.smtp_host != after.smtp_host {
		changed.push("smtp_host");
	}
	if before.smtp_port != after.smtp_port {
		changed.push("smtp_port");
	}
	if before.smtp_username != after.smtp_username {
		changed.push("smtp_username");
	}
	if !req.smtp_password.is_empty() {
		changed.push("smtp_password");
	}
	if before.smtp_from_email != after.smtp_from_email {
		changed.push("smtp_from_email");
	}
	if before.smtp_from_name != after.smtp_from_name {
		changed.push("smtp_from_name");
	}
	if before.smtp_use_tls != after.smtp_use_tls {
		changed.push("smtp_use_tls");
	}
	if before.turnstile_enabled != after.turnstile_enabled {
		changed.push("turnstile_enabled");
	}
	if before.turnstile_site_key != after.turnstile_site_key {
		changed.push("turnstile_site_key");
	}
	if !req.turnstile_secret_key.is_empty() {
		changed.push("turnstile_secret_key");
	}
	if before.site_name != after.site_name {
		changed.push("site_name");
	}
	if before.site_logo != after.site_logo {
		changed.push("site_logo");
	}
	if before.site_subtitle != after.site_subtitle {
		changed.push("site_subtitle");
	}
	if before.api_base_url != after.api_base_url {
		changed.push("api_base_url");
	}
	if before.contact_info != after.contact_info {
		changed.push("contact_info");
	}
	if before.doc_url != after.doc_url {
		changed.push("doc_url");
	}
	if before.default_concurrency != after.default_concurrency {
		changed.push("default_concurrency");
	}
	if before.default_balance != after.default_balance {
		changed.push("default_balance");
	}
	changed
}


// vim: ts=4
