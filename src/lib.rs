//! Git Distribution Provisioner Library
//!
//! This library provides the core functionality for the `gitfetch` CLI:
//! resolve the platform-specific prebuilt Git archive, download it, verify
//! its SHA-256 checksum, and unpack it into the output directory.

pub mod core;
pub mod error;
pub mod utils;
