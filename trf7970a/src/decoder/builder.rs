// trf7970a-rs/trf7970a/src/decoder/builder.rs

use crate::decoder::Decoder;

/// What to do with register accesses cut short by a bus boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IncompletePolicy {
    /// Drop them without emitting anything.
    #[default]
    Silent,
    /// Emit a `FrameKind::Incomplete` frame with whatever was collected.
    Report,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecoderConfig {
    pub incomplete_policy: IncompletePolicy,
}

/// Helper to construct a Decoder with optional configuration.
#[derive(Debug, Default)]
pub struct DecoderBuilder {
    config: DecoderConfig,
}

impl DecoderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn incomplete_policy(mut self, policy: IncompletePolicy) -> Self {
        self.config.incomplete_policy = policy;
        self
    }

    /// Shorthand for `incomplete_policy(IncompletePolicy::Report)`.
    pub fn report_incomplete(self) -> Self {
        self.incomplete_policy(IncompletePolicy::Report)
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    pub fn build(self) -> Decoder {
        Decoder::with_config(self.config)
    }
}
