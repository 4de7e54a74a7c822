//! Case actions for the dispute resolution front-end.
//!
//! Every action is a stub: it waits for the configured latency and then reads
//! or appends local data. Nothing is sent anywhere. The only state that
//! outlives a [`DisputeService`] is the wallet flag in its [`FlagStore`].
//!
//! [`FlagStore`]: dispute_store::FlagStore

pub mod action;
pub mod browser;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod service;

pub use action::Action;
pub use browser::CaseBrowser;
pub use config::ServiceConfig;
pub use error::ServiceError;
pub use service::{DisputeService, WALLET_FLAG};
