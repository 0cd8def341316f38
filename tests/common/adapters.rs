//! Mock adapter implementations for integration tests
//!
//! Every mock records the calls it receives so tests can assert on what the
//! handlers actually sent to the adapter layer, and carries failure flags so
//! error paths can be exercised without a real backend.

use async_trait::async_trait;
use std::sync::{
	Mutex,
	atomic::{AtomicBool, AtomicUsize, Ordering},
};

use steward::challenge_validator::ChallengeValidator;
use steward::mail_gateway::{MailGateway, SmtpConfig};
use steward::prelude::*;
use steward::settings::types::SystemSettings;
use steward::settings_store::{ApiKeyStatus, SettingsStore};

// MockSettingsStore //
//*******************//

#[derive(Debug, Default)]
pub struct MockSettingsStore {
	pub settings: Mutex<SystemSettings>,
	/// Every record passed to `update_settings`, in order
	pub updates: Mutex<Vec<SystemSettings>>,
	/// Plaintext of the current admin API key, if one exists
	pub api_key: Mutex<Option<String>>,
	pub generation: AtomicUsize,
	pub fail_reads: AtomicBool,
	pub fail_writes: AtomicBool,
	pub fail_api_key: AtomicBool,
}

impl MockSettingsStore {
	pub fn with_settings(settings: SystemSettings) -> Self {
		MockSettingsStore { settings: Mutex::new(settings), ..Default::default() }
	}

	pub fn update_count(&self) -> usize {
		self.updates.lock().unwrap().len()
	}

	fn mask(key: &str) -> String {
		if key.len() > 10 {
			format!("{}****{}", &key[..6], &key[key.len() - 4..])
		} else {
			"****".into()
		}
	}
}

#[async_trait]
impl SettingsStore for MockSettingsStore {
	async fn read_settings(&self) -> ClResult<SystemSettings> {
		if self.fail_reads.load(Ordering::Relaxed) {
			return Err(Error::DbError("settings read failed".into()));
		}
		Ok(self.settings.lock().unwrap().clone())
	}

	async fn update_settings(&self, settings: &SystemSettings) -> ClResult<()> {
		if self.fail_writes.load(Ordering::Relaxed) {
			return Err(Error::DbError("settings write failed".into()));
		}
		self.updates.lock().unwrap().push(settings.clone());
		*self.settings.lock().unwrap() = settings.clone();
		Ok(())
	}

	async fn read_site_name(&self) -> ClResult<Box<str>> {
		if self.fail_reads.load(Ordering::Relaxed) {
			return Err(Error::DbError("settings read failed".into()));
		}
		Ok(self.settings.lock().unwrap().site_name.as_str().into())
	}

	async fn read_api_key_status(&self) -> ClResult<ApiKeyStatus> {
		if self.fail_api_key.load(Ordering::Relaxed) {
			return Err(Error::DbError("api key read failed".into()));
		}
		let key = self.api_key.lock().unwrap();
		Ok(match key.as_deref() {
			Some(key) => ApiKeyStatus { exists: true, masked_key: Self::mask(key).into() },
			None => ApiKeyStatus { exists: false, masked_key: "".into() },
		})
	}

	async fn generate_api_key(&self) -> ClResult<Box<str>> {
		if self.fail_api_key.load(Ordering::Relaxed) {
			return Err(Error::DbError("api key write failed".into()));
		}
		let n = self.generation.fetch_add(1, Ordering::Relaxed) + 1;
		let key = format!("sk_admin_{:016x}{:04}", 0x5eed_c0de_u64 * n as u64, n);
		*self.api_key.lock().unwrap() = Some(key.clone());
		Ok(key.into())
	}

	async fn delete_api_key(&self) -> ClResult<()> {
		if self.fail_api_key.load(Ordering::Relaxed) {
			return Err(Error::DbError("api key delete failed".into()));
		}
		*self.api_key.lock().unwrap() = None;
		Ok(())
	}
}

// MockMailGateway //
//*****************//

#[derive(Debug, Clone)]
pub struct SentMail {
	pub config: SmtpConfig,
	pub to: String,
	pub subject: String,
	pub html_body: String,
}

#[derive(Debug, Default)]
pub struct MockMailGateway {
	/// Saved SMTP configuration returned by `read_saved_config`
	pub saved: Mutex<Option<SmtpConfig>>,
	pub test_calls: Mutex<Vec<SmtpConfig>>,
	pub send_calls: Mutex<Vec<SentMail>>,
	pub fail_saved_lookup: AtomicBool,
	pub fail_test: AtomicBool,
	pub fail_send: AtomicBool,
}

impl MockMailGateway {
	pub fn last_test_call(&self) -> Option<SmtpConfig> {
		self.test_calls.lock().unwrap().last().cloned()
	}

	pub fn last_send_call(&self) -> Option<SentMail> {
		self.send_calls.lock().unwrap().last().cloned()
	}
}

#[async_trait]
impl MailGateway for MockMailGateway {
	async fn read_saved_config(&self) -> ClResult<SmtpConfig> {
		if self.fail_saved_lookup.load(Ordering::Relaxed) {
			return Err(Error::DbError("smtp config read failed".into()));
		}
		self.saved.lock().unwrap().clone().ok_or(Error::NotFound)
	}

	async fn test_connection(&self, config: &SmtpConfig) -> ClResult<()> {
		self.test_calls.lock().unwrap().push(config.clone());
		if self.fail_test.load(Ordering::Relaxed) {
			return Err(Error::ServiceUnavailable("SMTP connection failed".into()));
		}
		Ok(())
	}

	async fn send(
		&self,
		config: &SmtpConfig,
		to: &str,
		subject: &str,
		html_body: &str,
	) -> ClResult<()> {
		self.send_calls.lock().unwrap().push(SentMail {
			config: config.clone(),
			to: to.into(),
			subject: subject.into(),
			html_body: html_body.into(),
		});
		if self.fail_send.load(Ordering::Relaxed) {
			return Err(Error::ServiceUnavailable("SMTP send failed".into()));
		}
		Ok(())
	}
}

// MockChallengeValidator //
//************************//

#[derive(Debug, Default)]
pub struct MockChallengeValidator {
	pub calls: AtomicUsize,
	pub fail: AtomicBool,
}

impl MockChallengeValidator {
	pub fn call_count(&self) -> usize {
		self.calls.load(Ordering::Relaxed)
	}
}

#[async_trait]
impl ChallengeValidator for MockChallengeValidator {
	async fn validate_secret_key(&self, _secret_key: &str) -> ClResult<()> {
		self.calls.fetch_add(1, Ordering::Relaxed);
		if self.fail.load(Ordering::Relaxed) {
			return Err(Error::ValidationError("Turnstile secret key validation failed".into()));
		}
		Ok(())
	}
}

// vim: ts=4
