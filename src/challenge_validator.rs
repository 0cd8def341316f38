//! Adapter that validates CAPTCHA credentials against the provider.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;

/// A `Steward` challenge validator
///
/// Called before a CAPTCHA secret key is persisted, so a mistyped key can
/// never lock administrators out of the login flow.
#[async_trait]
pub trait ChallengeValidator: Debug + Send + Sync {
	/// Validates a CAPTCHA secret key with the provider
	async fn validate_secret_key(&self, secret_key: &str) -> ClResult<()>;
}

// vim: ts=4
