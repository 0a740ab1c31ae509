// trf7970a-rs/trf7970a/src/decoder/mod.rs

//! TRF7970A transaction decoder.
//!
//! A sequential reducer from `(state, event)` to `(state, optional frame)`.
//! Each transaction starts with chip select; its first byte on MOSI is the
//! instruction byte. Commands produce a frame at once. Direct register
//! accesses produce a frame after their single data byte, continuous
//! accesses at chip deselect.
//!
//! Malformed traffic never produces an error: orphan bytes are ignored,
//! and accesses cut short by a bus boundary are dropped (or reported as
//! `FrameKind::Incomplete` when configured).

use log::{debug, trace};

use crate::Result;
use crate::protocol::{BusEvent, Frame, FrameKind, Instruction};
use crate::source::EventSource;
use crate::types::{AddressMode, Timespan, Timestamp};
use crate::utils::bytes_to_hex_spaced;

pub mod builder;
pub mod state;
pub mod stats;

pub use builder::{DecoderBuilder, DecoderConfig, IncompletePolicy};
pub use state::{DecoderState, PendingTransaction};
pub use stats::DecoderStats;

/// Decoder instance. All state is instance-local; independent captures
/// need independent decoders.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    state: DecoderState,
    config: DecoderConfig,
    stats: DecoderStats,
}

impl Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DecoderConfig) -> Self {
        Self {
            state: DecoderState::Idle,
            config,
            stats: DecoderStats::default(),
        }
    }

    pub fn builder() -> DecoderBuilder {
        DecoderBuilder::new()
    }

    pub fn state(&self) -> &DecoderState {
        &self.state
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    pub fn stats(&self) -> &DecoderStats {
        &self.stats
    }

    /// Return to `Idle` and clear the counters. The configuration is kept.
    pub fn reset(&mut self) {
        self.state = DecoderState::Idle;
        self.stats = DecoderStats::default();
    }

    /// Chip enable asserted.
    ///
    /// A register access still pending from the previous transaction is
    /// abandoned. Under `IncompletePolicy::Report` it is returned as an
    /// incomplete frame ending at its last byte; otherwise nothing is emitted.
    pub fn on_select(&mut self) -> Option<Frame> {
        trace!("select");
        let previous = std::mem::replace(&mut self.state, DecoderState::AwaitingInstruction);
        match previous {
            DecoderState::AccumulatingData(pending) => {
                self.stats.abandoned += 1;
                debug!(
                    "select while {} @ {} pending, discarding [{}]",
                    pending.instruction().label(),
                    pending.instruction().register,
                    bytes_to_hex_spaced(pending.data())
                );
                let end = pending.last_seen();
                self.report_incomplete(pending.into_incomplete(end))
            }
            DecoderState::Idle | DecoderState::AwaitingInstruction => None,
        }
    }

    /// One byte clocked on both lines.
    pub fn on_byte_transfer(
        &mut self,
        mosi: u8,
        miso: u8,
        start: Timestamp,
        end: Timestamp,
    ) -> Option<Frame> {
        trace!("byte mosi={:#04x} miso={:#04x} [{}, {}]", mosi, miso, start, end);
        match std::mem::take(&mut self.state) {
            DecoderState::Idle => {
                self.stats.orphan_bytes += 1;
                debug!("byte {:#04x} outside of a transaction, ignored", mosi);
                None
            }
            DecoderState::AwaitingInstruction => {
                self.state = DecoderState::AwaitingInstruction;
                match Instruction::classify(mosi) {
                    Instruction::Command(opcode) => {
                        self.emit(Frame::command(opcode, Timespan { start, end }))
                    }
                    Instruction::Address(instruction) => {
                        self.state = DecoderState::AccumulatingData(PendingTransaction::new(
                            instruction,
                            start,
                            end,
                        ));
                        None
                    }
                }
            }
            DecoderState::AccumulatingData(mut pending) => {
                pending.collect(mosi, miso, end);
                match pending.instruction().mode {
                    AddressMode::Direct => {
                        self.state = DecoderState::AwaitingInstruction;
                        self.emit(pending.into_frame(end))
                    }
                    AddressMode::Continuous => {
                        self.state = DecoderState::AccumulatingData(pending);
                        None
                    }
                }
            }
        }
    }

    /// Chip enable released. Completes a continuous access with however
    /// many bytes were collected, possibly none.
    pub fn on_deselect(&mut self, end: Timestamp) -> Option<Frame> {
        trace!("deselect [{}]", end);
        match std::mem::take(&mut self.state) {
            DecoderState::AccumulatingData(pending) => match pending.instruction().mode {
                AddressMode::Continuous => self.emit(pending.into_frame(end)),
                AddressMode::Direct => {
                    self.stats.incomplete += 1;
                    debug!(
                        "deselect before data byte of {} @ {}",
                        pending.instruction().label(),
                        pending.instruction().register
                    );
                    self.report_incomplete(pending.into_incomplete(end))
                }
            },
            DecoderState::Idle | DecoderState::AwaitingInstruction => None,
        }
    }

    /// Dispatch one bus event.
    pub fn feed(&mut self, event: BusEvent) -> Option<Frame> {
        match event {
            BusEvent::Select => self.on_select(),
            BusEvent::ByteTransfer {
                mosi,
                miso,
                start,
                end,
            } => self.on_byte_transfer(mosi, miso, start, end),
            BusEvent::Deselect { end } => self.on_deselect(end),
        }
    }

    /// Decode a batch of events, collecting every emitted frame.
    pub fn decode<I>(&mut self, events: I) -> Vec<Frame>
    where
        I: IntoIterator<Item = BusEvent>,
    {
        self.frames(events).collect()
    }

    /// Lazily decode events, yielding frames as they complete.
    pub fn frames<I>(&mut self, events: I) -> Frames<'_, I::IntoIter>
    where
        I: IntoIterator<Item = BusEvent>,
    {
        Frames {
            decoder: self,
            events: events.into_iter(),
        }
    }

    /// Drain an event source until it is exhausted.
    pub fn run(&mut self, source: &mut dyn EventSource) -> Result<Vec<Frame>> {
        let mut frames = Vec::new();
        while let Some(event) = source.next_event()? {
            if let Some(frame) = self.feed(event) {
                frames.push(frame);
            }
        }
        Ok(frames)
    }

    fn report_incomplete(&mut self, frame: Frame) -> Option<Frame> {
        match self.config.incomplete_policy {
            IncompletePolicy::Silent => None,
            IncompletePolicy::Report => self.emit(frame),
        }
    }

    fn emit(&mut self, frame: Frame) -> Option<Frame> {
        match frame.kind {
            FrameKind::Command { .. } => self.stats.command_frames += 1,
            FrameKind::Address { .. } => self.stats.address_frames += 1,
            FrameKind::Incomplete { .. } => self.stats.incomplete_frames += 1,
        }
        if frame.has_unmapped_symbol() {
            self.stats.unmapped_symbols += 1;
            debug!("unmapped symbol in frame: {}", frame);
        }
        debug!("frame [{}, {}] {}", frame.span.start, frame.span.end, frame);
        Some(frame)
    }
}

/// Iterator returned by [`Decoder::frames`].
pub struct Frames<'a, I> {
    decoder: &'a mut Decoder,
    events: I,
}

impl<I> Iterator for Frames<'_, I>
where
    I: Iterator<Item = BusEvent>,
{
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        for event in self.events.by_ref() {
            if let Some(frame) = self.decoder.feed(event) {
                return Some(frame);
            }
        }
        None
    }
}
