//! Outbound webhook delivery and the notification ledger.
//!
//! Handlers never await delivery: they hand the notifier to `tokio::spawn`
//! and return. Every attempted delivery writes exactly one ledger row,
//! success or failure; an unconfigured destination is a logged no-op.

mod webhook;

pub use webhook::{
    BoxError, HttpTransport, WebhookConfig, WebhookNotifier, WebhookTransport,
};
