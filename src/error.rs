use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::types::ErrorResponse;

pub type ClResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	NotFound,
	PermissionDenied,
	ValidationError(String),
	ConfigError(String),
	DbError(String),
	ServiceUnavailable(String),

	// externals
	Io(std::io::Error),
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Error::NotFound => write!(f, "not found"),
			Error::PermissionDenied => write!(f, "permission denied"),
			Error::ValidationError(msg) => write!(f, "{}", msg),
			Error::ConfigError(msg) => write!(f, "configuration error: {}", msg),
			Error::DbError(msg) => write!(f, "database error: {}", msg),
			Error::ServiceUnavailable(msg) => write!(f, "{}", msg),
			Error::Io(err) => write!(f, "io error: {}", err),
		}
	}
}

impl std::error::Error for Error {}

impl IntoResponse for Error {
	fn into_response(self) -> axum::response::Response {
		let (status, code) = match &self {
			Error::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
			Error::PermissionDenied => (StatusCode::FORBIDDEN, "PERMISSION_DENIED"),
			Error::ValidationError(_) => (StatusCode::BAD_REQUEST, "VALIDATION"),
			Error::ConfigError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG"),
			Error::DbError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DB"),
			Error::ServiceUnavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE"),
			Error::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO"),
		};
		let message = self.to_string();
		(status, Json(ErrorResponse::new(code.to_string(), message))).into_response()
	}
}

// vim: ts=4
