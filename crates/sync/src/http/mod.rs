//! HTTP transport for the remote profile store

mod client;

pub use client::ProfileStoreClient;
