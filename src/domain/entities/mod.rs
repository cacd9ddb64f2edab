//! Client-side projections of backend responses.
//!
//! Entities are created by response handlers and replaced wholesale on every
//! re-fetch; nothing here is mutated in place.
//!
//! # Entity Types
//!
//! - [`LinkSummary`] / [`LinkPage`] - One page of link history
//! - [`NewLinkRequest`] / [`CreatedLink`] - Create call payload and result
//! - [`LinkStatistics`] - Per-link analytics with daily series and access log
//! - [`BackendHealth`] - Backend health probe result

pub mod health;
pub mod link;
pub mod statistics;
pub mod timestamp;

pub use health::BackendHealth;
pub use link::{CreatedLink, LinkPage, LinkSummary, NewLinkRequest};
pub use statistics::{AccessRecord, DailyClicks, LinkStatistics};
