//! Common response envelope types used by all handlers.

use serde::Serialize;
use serde_with::skip_serializing_none;

/// Success envelope wrapping the response payload
#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
	pub data: T,
	#[serde(rename = "reqId")]
	pub req_id: Option<String>,
}

impl<T> ApiResponse<T> {
	pub fn new(data: T) -> Self {
		Self { data, req_id: None }
	}

	/// Attach the caller-supplied request ID. An empty ID is omitted from the response.
	pub fn with_req_id(mut self, req_id: impl Into<String>) -> Self {
		let req_id = req_id.into();
		self.req_id = if req_id.is_empty() { None } else { Some(req_id) };
		self
	}
}

/// Error envelope with a machine-readable code and a human-readable message
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
	pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
	pub code: String,
	pub message: String,
}

impl ErrorResponse {
	pub fn new(code: String, message: String) -> Self {
		Self { error: ErrorDetail { code, message } }
	}
}

/// Plain confirmation payload
#[derive(Debug, Serialize)]
pub struct MessageRes {
	pub message: String,
}

impl MessageRes {
	pub fn new(message: impl Into<String>) -> Self {
		Self { message: message.into() }
	}
}

// vim: ts=4
