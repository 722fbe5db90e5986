#![forbid(unsafe_code)]
#![deny(clippy::all)]

//! Derivation of the documentation build metadata for the shoal shell: the
//! release version, the per-command descriptions, and the ordered man page
//! manifest handed to the documentation renderer.
//!
//! **This crate is not semver compliant**. The version is locked to the root
//! `shoaldoc` crate version. If you choose to depend directly on this crate,
//! you do so at your own risk of breakage.

pub mod config;
pub mod error;
pub mod manifest;
pub mod meta;
pub mod synopsis;
pub mod version;
