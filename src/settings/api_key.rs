//! Admin API key lifecycle endpoints

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::{
	core::extract::OptionalRequestId,
	prelude::*,
	types::{ApiResponse, MessageRes},
};

/// Response for the API key status endpoint (masked form only)
#[derive(Debug, Serialize)]
pub struct ApiKeyStatusRes {
	pub exists: bool,
	#[serde(rename = "maskedKey")]
	pub masked_key: String,
}

/// Response for regenerating the API key (includes plaintext key shown only once)
#[derive(Debug, Serialize)]
pub struct RegenerateApiKeyRes {
	pub key: String,
}

/// GET /api/admin/settings/admin-api-key - Admin API key status
///
/// Returns the existence flag and the store's masked display form. The
/// plaintext key is never available here.
pub async fn get_admin_api_key(
	State(app): State<App>,
	OptionalRequestId(req_id): OptionalRequestId,
) -> ClResult<(StatusCode, Json<ApiResponse<ApiKeyStatusRes>>)> {
	let status = app.settings_store.read_api_key_status().await?;

	let response_data = ApiKeyStatusRes {
		exists: status.exists,
		masked_key: status.masked_key.to_string(),
	};

	let response = ApiResponse::new(response_data).with_req_id(req_id.unwrap_or_default());
	Ok((StatusCode::OK, Json(response)))
}

/// POST /api/admin/settings/admin-api-key/regenerate - Rotate the admin API key
///
/// Generates a new key, invalidating any existing one. The plaintext in
/// this response is the ONLY disclosure point: the store retains just a
/// hash and a masked form, so the key cannot be retrieved again through
/// any other operation.
pub async fn regenerate_admin_api_key(
	State(app): State<App>,
	OptionalRequestId(req_id): OptionalRequestId,
) -> ClResult<(StatusCode, Json<ApiResponse<RegenerateApiKeyRes>>)> {
	info!("Regenerating admin API key");

	let key = app.settings_store.generate_api_key().await?;

	let response = ApiResponse::new(RegenerateApiKeyRes { key: key.to_string() })
		.with_req_id(req_id.unwrap_or_default());
	Ok((StatusCode::OK, Json(response)))
}

/// DELETE /api/admin/settings/admin-api-key - Remove the admin API key
///
/// Idempotency for delete-when-absent is the store's policy; a store
/// error is passed through unchanged.
pub async fn delete_admin_api_key(
	State(app): State<App>,
	OptionalRequestId(req_id): OptionalRequestId,
) -> ClResult<(StatusCode, Json<ApiResponse<MessageRes>>)> {
	info!("Deleting admin API key");

	app.settings_store.delete_api_key().await?;

	let response = ApiResponse::new(MessageRes::new("Admin API key deleted"))
		.with_req_id(req_id.unwrap_or_default());
	Ok((StatusCode::OK, Json(response)))
}

// vim: ts=4
