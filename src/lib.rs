//! Steward is an administrative settings service for web backends.
//!
//! # Features
//!
//! - Singleton system configuration record
//!		- registration and email verification flags
//!		- SMTP credentials (never echoed back, only "configured" flags)
//!		- CAPTCHA keys with validation before save
//!		- branding fields and default account parameters
//!	- SMTP connectivity testing and test email delivery
//!	- Single rotatable admin API key
//!		- plaintext disclosed exactly once at generation
//!	- Adapter-based persistence, mail delivery and CAPTCHA validation
//!		- bring your own `SettingsStore`, `MailGateway` and `ChallengeValidator`

#![forbid(unsafe_code)]

pub mod error;
pub mod core;
pub mod email;
pub mod settings;
pub mod challenge_validator;
pub mod mail_gateway;
pub mod settings_store;
pub mod prelude;
pub mod types;
pub mod routes;

pub use crate::core::app::{App, AppBuilder, AppState};

// vim: ts=4
