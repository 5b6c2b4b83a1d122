//! Runtime-facing contracts for agent configuration adapters.
//!
//! This crate defines what a configuration adapter produces and how it can
//! fail, without committing to any provider:
//!
//! - [`AgentInitArgs`] — the normalized option set handed to a runtime.
//! - [`AgentBase`] — the capability trait a runtime implements to consume it.
//! - [`ConfigurationError`] / [`RemoteServiceError`] / [`AgentError`] — the
//!   error taxonomy shared by all adapters.
//!
//! Provider backends (see `arcturus_providers`) validate caller options,
//! bind a transport client, and build an [`AgentInitArgs`] from them.

mod args;
mod base;
mod error;

pub use args::{AgentInitArgs, DEFAULT_SERVICE_ID};
pub use base::AgentBase;
pub use error::{AgentError, ConfigurationError, RemoteServiceError};
