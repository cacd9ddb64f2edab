//! JSON endpoints for operators.
//!
//! # Modules
//!
//! - [`dto`] - Response serialization types
//! - [`handlers`] - HTTP request handlers

pub mod dto;
pub mod handlers;
