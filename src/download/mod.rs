//! Download module.
//!
//! Sequential, best-effort media downloading: a failed asset is logged and
//! skipped, never fatal.

pub mod media;

pub use media::download_all;
