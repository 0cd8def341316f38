//! Settings subsystem
//!
//! # Architecture
//!
//! - **Types** (`types.rs`): the singleton settings record, its masked
//!   response shape and the update request
//! - **Handler** (`handler.rs`): read/update HTTP endpoints with
//!   normalization, CAPTCHA validation and audit logging
//! - **Api key** (`api_key.rs`): admin API key lifecycle endpoints
//!
//! The record has exactly one instance system-wide and is updated with
//! full-replace semantics; partial patches are not supported.

pub mod api_key;
pub mod handler;
pub mod types;

pub use types::{SystemSettings, SystemSettingsRes, UpdateSettingsRequest};

// vim: ts=4
