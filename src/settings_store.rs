//! Adapter that persists the singleton system settings record and the admin API key.
//!
//! Every `SettingsStore` implementation is required to implement this trait.
//! The store owns all durability and consistency guarantees: the settings
//! record is replaced as a whole, atomically, and concurrent writers are
//! serialized (or allowed to race last-write-wins) at this layer, not in
//! the handlers.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;
use crate::settings::types::SystemSettings;

/// Status of the admin API key, safe to disclose
#[derive(Debug, Clone)]
pub struct ApiKeyStatus {
	pub exists: bool,
	/// Masked display form (e.g. prefix and suffix with the middle redacted).
	/// Empty when no key exists.
	pub masked_key: Box<str>,
}

/// A `Steward` settings store
#[async_trait]
pub trait SettingsStore: Debug + Send + Sync {
	/// Reads the singleton settings record
	async fn read_settings(&self) -> ClResult<SystemSettings>;

	/// Replaces the whole settings record. The write is atomic: either the
	/// full record is persisted or nothing is.
	async fn update_settings(&self, settings: &SystemSettings) -> ClResult<()>;

	/// Reads the configured site name used for branding outgoing messages
	async fn read_site_name(&self) -> ClResult<Box<str>>;

	// Admin API key lifecycle

	/// Reads the existence flag and masked display form of the admin API key
	async fn read_api_key_status(&self) -> ClResult<ApiKeyStatus>;

	/// Generates a new admin API key, replacing any existing one.
	///
	/// The returned plaintext is the only copy that will ever exist outside
	/// the store; implementations must retain only a hash and a masked form.
	async fn generate_api_key(&self) -> ClResult<Box<str>>;

	/// Deletes the admin API key. Whether deleting an absent key is an
	/// error is the store's policy; any error is passed through to callers.
	async fn delete_api_key(&self) -> ClResult<()>;
}

// vim: ts=4
