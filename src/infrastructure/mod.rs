//! Infrastructure layer for external integrations.
//!
//! This layer implements the ports defined by the domain layer.
//!
//! # Modules
//!
//! - [`backend`] - HTTP client for the shortening backend (reqwest)
//! - [`clipboard`] - Terminal clipboard via OSC 52 escape sequences

pub mod backend;
pub mod clipboard;
