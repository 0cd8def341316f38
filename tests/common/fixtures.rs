//! Router and request fixtures for integration tests

use axum::{
	Router,
	body::Body,
	http::{Request, header},
	response::Response,
};
use http_body_util::BodyExt;
use std::sync::Arc;

use steward::{AppBuilder, core::extract::AuthCtx, routes};

use super::adapters::{MockChallengeValidator, MockMailGateway, MockSettingsStore};

/// Fully wired test application with handles to every mock adapter
pub struct TestApp {
	pub router: Router,
	pub store: Arc<MockSettingsStore>,
	pub mail: Arc<MockMailGateway>,
	pub captcha: Arc<MockChallengeValidator>,
}

pub fn test_app() -> TestApp {
	test_app_with(MockSettingsStore::default())
}

pub fn test_app_with(store: MockSettingsStore) -> TestApp {
	let store = Arc::new(store);
	let mail = Arc::new(MockMailGateway::default());
	let captcha = Arc::new(MockChallengeValidator::default());

	let mut builder = AppBuilder::new();
	builder
		.settings_store(store.clone())
		.mail_gateway(mail.clone())
		.challenge_validator(captcha.clone());
	let app = builder.build().expect("failed to build test app");

	TestApp { router: routes::init(app), store, mail, captcha }
}

impl TestApp {
	pub async fn send(&self, request: Request<Body>) -> Response {
		use tower::ServiceExt;
		self.router.clone().oneshot(request).await.expect("request failed")
	}
}

pub fn admin_ctx() -> AuthCtx {
	AuthCtx { user_id: 42, roles: vec![Box::from("ADMN")].into_boxed_slice() }
}

pub fn user_ctx() -> AuthCtx {
	AuthCtx { user_id: 7, roles: vec![Box::from("USER")].into_boxed_slice() }
}

/// Builds a request carrying the admin auth context
pub fn admin_request(method: &str, uri: &str, body: Option<serde_json::Value>) -> Request<Body> {
	request_with_ctx(method, uri, body, Some(admin_ctx()))
}

pub fn request_with_ctx(
	method: &str,
	uri: &str,
	body: Option<serde_json::Value>,
	ctx: Option<AuthCtx>,
) -> Request<Body> {
	let mut builder = Request::builder().method(method).uri(uri);
	if let Some(ctx) = ctx {
		builder = builder.extension(ctx);
	}
	match body {
		Some(json) => builder
			.header(header::CONTENT_TYPE, "application/json")
			.body(Body::from(json.to_string()))
			.unwrap(),
		None => builder.body(Body::empty()).unwrap(),
	}
}

/// Builds an admin request with a raw (possibly malformed) body
pub fn admin_raw_request(method: &str, uri: &str, body: &str) -> Request<Body> {
	Request::builder()
		.method(method)
		.uri(uri)
		.extension(admin_ctx())
		.header(header::CONTENT_TYPE, "application/json")
		.body(Body::from(body.to_string()))
		.unwrap()
}

/// Collects the response body and parses it as JSON
pub async fn read_json(response: Response) -> serde_json::Value {
	let bytes = response.into_body().collect().await.unwrap().to_bytes();
	serde_json::from_slice(&bytes).unwrap()
}

/// Collects the response body as a raw string, for negative substring checks
pub async fn read_text(response: Response) -> String {
	let bytes = response.into_body().collect().await.unwrap().to_bytes();
	String::from_utf8(bytes.to_vec()).unwrap()
}

// vim: ts=4
