//! Filesystem module.
//!
//! Provides the media work directory downloaded assets land in.

pub mod temp;

pub use temp::media_dir;
