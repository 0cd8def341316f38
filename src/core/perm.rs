//! Admin permission middleware

use axum::{
	extract::{Request, State},
	middleware::Next,
	response::Response,
};

use crate::core::extract::Auth;
use crate::prelude::*;

/// Middleware that checks if the current user has the admin role (ADMN)
///
/// The settings surface is administrative in its entirety, so the whole
/// router is layered with this check.
pub async fn require_admin(
	State(_app): State<App>,
	Auth(auth_ctx): Auth,
	req: Request,
	next: Next,
) -> Result<Response, Error> {
	if !auth_ctx.roles.iter().any(|r| r.as_ref() == "ADMN") {
		warn!(
			user_id = auth_ctx.user_id,
			roles = ?auth_ctx.roles,
			"Admin permission denied - ADMN role required"
		);
		return Err(Error::PermissionDenied);
	}

	Ok(next.run(req).await)
}

// vim: ts=4
