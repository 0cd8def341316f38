//! App state type

use std::sync::Arc;

use crate::prelude::*;
use crate::routes;

use crate::challenge_validator::ChallengeValidator;
use crate::mail_gateway::MailGateway;
use crate::settings_store::SettingsStore;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub opts: AppBuilderOpts,

	pub settings_store: Arc<dyn SettingsStore>,
	pub mail_gateway: Arc<dyn MailGateway>,
	pub challenge_validator: Arc<dyn ChallengeValidator>,
}

pub type App = Arc<AppState>;

pub struct Adapters {
	pub settings_store: Option<Arc<dyn SettingsStore>>,
	pub mail_gateway: Option<Arc<dyn MailGateway>>,
	pub challenge_validator: Option<Arc<dyn ChallengeValidator>>,
}

#[derive(Debug)]
pub struct AppBuilderOpts {
	listen: Box<str>,
}

pub struct AppBuilder {
	opts: AppBuilderOpts,
	adapters: Adapters,
}

impl AppBuilder {
	pub fn new() -> Self {
		AppBuilder {
			opts: AppBuilderOpts { listen: "127.0.0.1:8080".into() },
			adapters: Adapters {
				settings_store: None,
				mail_gateway: None,
				challenge_validator: None,
			},
		}
	}

	// Opts
	pub fn listen(&mut self, listen: impl Into<Box<str>>) -> &mut Self { self.opts.listen = listen.into(); self }

	// Adapters
	pub fn settings_store(&mut self, settings_store: Arc<dyn SettingsStore>) -> &mut Self { self.adapters.settings_store = Some(settings_store); self }
	pub fn mail_gateway(&mut self, mail_gateway: Arc<dyn MailGateway>) -> &mut Self { self.adapters.mail_gateway = Some(mail_gateway); self }
	pub fn challenge_validator(&mut self, challenge_validator: Arc<dyn ChallengeValidator>) -> &mut Self { self.adapters.challenge_validator = Some(challenge_validator); self }

	/// Builds the application state without serving it.
	/// Useful for embedding the router into a larger application or for tests.
	pub fn build(self) -> ClResult<App> {
		let settings_store = self
			.adapters
			.settings_store
			.ok_or_else(|| Error::ConfigError("No settings store".into()))?;
		let mail_gateway = self
			.adapters
			.mail_gateway
			.ok_or_else(|| Error::ConfigError("No mail gateway".into()))?;
		let challenge_validator = self
			.adapters
			.challenge_validator
			.ok_or_else(|| Error::ConfigError("No challenge validator".into()))?;

		Ok(Arc::new(AppState { opts: self.opts, settings_store, mail_gateway, challenge_validator }))
	}

	pub async fn run(self) -> ClResult<()> {
		tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_target(false)
			.init();
		info!("Steward v{}", VERSION);

		let app = self.build()?;
		let router = routes::init(app.clone());

		let listener = tokio::net::TcpListener::bind(app.opts.listen.as_ref()).await?;
		info!("Listening on {}", app.opts.listen);
		axum::serve(listener, router).await?;

		Ok(())
	}
}

impl Default for AppBuilder {
	fn default() -> Self { Self::new() }
}

// vim: ts=4
