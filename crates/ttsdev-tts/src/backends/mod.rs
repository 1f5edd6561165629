//! Vendor backend implementations
//!
//! One module per vendor, each feature-gated so the crate only carries
//! the clients a build actually needs.

#[cfg(feature = "elevenlabs")]
pub mod elevenlabs;

#[cfg(feature = "lmnt")]
pub mod lmnt;

#[cfg(feature = "openai")]
pub mod openai;

/// Default request timeout for vendor calls. A hanging provider call
/// fails its own slot instead of blocking a batch forever.
#[allow(dead_code)]
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 120;
