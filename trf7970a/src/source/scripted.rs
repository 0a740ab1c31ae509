// trf7970a-rs/trf7970a/src/source/scripted.rs

use std::collections::VecDeque;

use crate::protocol::BusEvent;
use crate::source::traits::EventSource;
use crate::{Error, Result};

/// In-memory event source for tests. Replays queued events in order.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    pub events: VecDeque<BusEvent>,
    /// Number of events delivered so far
    pub delivered: usize,
    /// Testing hook: fail with `Error::Source` once this many events were delivered
    pub fail_after: Option<usize>,
}

impl ScriptedSource {
    pub fn new(events: Vec<BusEvent>) -> Self {
        Self {
            events: events.into(),
            delivered: 0,
            fail_after: None,
        }
    }

    pub fn push_event(&mut self, event: BusEvent) {
        self.events.push_back(event);
    }

    /// Make the source fail after `n` more successful deliveries.
    pub fn set_fail_after(&mut self, n: usize) {
        self.fail_after = Some(self.delivered + n);
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl EventSource for ScriptedSource {
    fn next_event(&mut self) -> Result<Option<BusEvent>> {
        if self.fail_after == Some(self.delivered) {
            return Err(Error::Source(format!(
                "scripted failure after {} events",
                self.delivered
            )));
        }
        let event = self.events.pop_front();
        if event.is_some() {
            self.delivered += 1;
        }
        Ok(event)
    }
}

impl From<Vec<BusEvent>> for ScriptedSource {
    fn from(events: Vec<BusEvent>) -> Self {
        Self::new(events)
    }
}
