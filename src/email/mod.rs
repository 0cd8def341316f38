//! SMTP configuration testing
//!
//! Both endpoints assemble a transient [`SmtpConfig`](crate::mail_gateway::SmtpConfig)
//! from the request and delegate the network work to the mail gateway. A
//! request without a password falls back to the password currently saved
//! for the instance, so administrators can verify a stored configuration
//! without re-entering the secret.

pub mod handler;

// vim: ts=4
