use axum::{
	Json,
	extract::{FromRequest, FromRequestParts, Request},
	http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::prelude::*;

// Extractors //
//************//

// AuthCtx //
//*********//

/// Context struct for an authenticated administrator.
///
/// Inserted as a request extension by the embedding application's
/// authentication middleware (session token, admin API key, ...).
#[derive(Clone, Debug)]
pub struct AuthCtx {
	pub user_id: i64,
	pub roles: Box<[Box<str>]>,
}

// Auth //
//******//
#[derive(Debug, Clone)]
pub struct Auth(pub AuthCtx);

impl<S> FromRequestParts<S> for Auth
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		if let Some(auth) = parts.extensions.get::<AuthCtx>().cloned() {
			Ok(Auth(auth))
		} else {
			Err(Error::PermissionDenied)
		}
	}
}

// OptionalAuth //
//**************//

/// Like [`Auth`], but never rejects. Used where the acting identity is only
/// needed for audit logging and its absence must not fail the request.
#[derive(Debug, Clone)]
pub struct OptionalAuth(pub Option<AuthCtx>);

impl<S> FromRequestParts<S> for OptionalAuth
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		Ok(OptionalAuth(parts.extensions.get::<AuthCtx>().cloned()))
	}
}

// OptionalRequestId //
//*******************//

/// Caller-supplied request correlation ID from the `X-Request-Id` header
#[derive(Debug, Clone)]
pub struct OptionalRequestId(pub Option<String>);

impl<S> FromRequestParts<S> for OptionalRequestId
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		let req_id = parts
			.headers
			.get("x-request-id")
			.and_then(|v| v.to_str().ok())
			.map(String::from);
		Ok(OptionalRequestId(req_id))
	}
}

// JsonBody //
//**********//

/// JSON body extractor that reports parse failures through the uniform
/// error envelope instead of axum's default rejection.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
	T: DeserializeOwned,
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
		let Json(value) = Json::<T>::from_request(req, state)
			.await
			.map_err(|err| Error::ValidationError(format!("Invalid request: {}", err.body_text())))?;
		Ok(JsonBody(value))
	}
}

// vim: ts=4
