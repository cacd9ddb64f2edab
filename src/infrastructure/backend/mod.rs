//! HTTP adapter for the shortening backend.

mod http_client;

pub use http_client::{ClientOptions, HttpShortenerClient};
