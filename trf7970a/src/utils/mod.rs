//! Utilities for trf7970a: small, reusable helpers used across the crate.

pub mod hex;

pub use hex::*;
