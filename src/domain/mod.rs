//! Domain layer: backend data shapes and the ports views depend on.
//!
//! # Architecture
//!
//! - [`entities`] - Projections of backend responses (links, statistics, health)
//! - [`ports`] - Traits for the backend API, clipboard and confirmation prompts
//!
//! Views in [`crate::application`] only see these types. Concrete adapters live in
//! [`crate::infrastructure`].

pub mod entities;
pub mod ports;
