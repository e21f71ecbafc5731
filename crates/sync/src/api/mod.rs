//! High-level API wrappers for the profile store
//!
//! Thin conveniences over the raw HTTP client so callers don't touch
//! request plumbing directly.

mod profile;

pub use profile::*;
