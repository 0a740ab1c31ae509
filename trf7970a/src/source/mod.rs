// trf7970a-rs/trf7970a/src/source/mod.rs

pub mod capture;
pub mod scripted;
pub mod traits;

pub use capture::CaptureBuilder;
pub use scripted::ScriptedSource;
pub use traits::EventSource;
