// trf7970a-rs/trf7970a/src/lib.rs

//! trf7970a
//!
//! Decoder for the SPI transactions exchanged between a host controller and
//! a Texas Instruments TRF7970A NFC transceiver. Bus events (chip select,
//! byte transfers, chip deselect) go in; annotated command and register
//! access frames come out.
#![warn(missing_docs)]

pub mod constants;
pub mod decoder;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod source;
pub mod test_support;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
