//! Fitquest Sync - HTTP client for the optional remote profile store

pub mod api;
pub mod http;

pub use http::ProfileStoreClient;
