use axum::{
	Router, middleware,
	routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::core::perm;
use crate::email;
use crate::prelude::*;
use crate::settings;

/// Builds the admin settings router. Every route requires the admin role.
pub fn init(app: App) -> Router {
	let admin_router = Router::new()
		.route("/api/admin/settings", get(settings::handler::get_settings))
		.route("/api/admin/settings", put(settings::handler::update_settings))
		.route("/api/admin/settings/test-smtp", post(email::handler::test_smtp_connection))
		.route("/api/admin/settings/send-test-email", post(email::handler::send_test_email))
		.route("/api/admin/settings/admin-api-key", get(settings::api_key::get_admin_api_key))
		.route("/api/admin/settings/admin-api-key", delete(settings::api_key::delete_admin_api_key))
		.route(
			"/api/admin/settings/admin-api-key/regenerate",
			post(settings::api_key::regenerate_admin_api_key),
		)
		.layer(middleware::from_fn_with_state(app.clone(), perm::require_admin));

	Router::new()
		.merge(admin_router)
		.layer(TraceLayer::new_for_http())
		.with_state(app)
}

// vim: ts=4
