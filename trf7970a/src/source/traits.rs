// trf7970a-rs/trf7970a/src/source/traits.rs

use crate::Result;
use crate::protocol::BusEvent;

/// EventSource abstracts the SPI transport layer away from the decoder.
///
/// Implementations deliver events in strict chronological order. `Ok(None)`
/// marks the end of the capture.
pub trait EventSource {
    fn next_event(&mut self) -> Result<Option<BusEvent>>;

    /// Pull every remaining event. Default implementation loops over
    /// `next_event`.
    fn collect_events(&mut self) -> Result<Vec<BusEvent>> {
        let mut out = Vec::new();
        while let Some(event) = self.next_event()? {
            out.push(event);
        }
        Ok(out)
    }
}
