//! Handler layer
//!
//! Every pipeline stage speaks the same `TripleHandler` contract: filters
//! wrap a downstream handler, sinks terminate the chain.

mod counting;
mod events;
mod recording;
mod traits;
mod writer;

pub use counting::{CountingHandler, HandlerCounts};
pub use events::{event_lines, read_events, replay, replay_lines, EventLines, HandlerEvent};
pub use recording::RecordingHandler;
#[cfg(test)]
pub(crate) use recording::FailingHandler;
pub use traits::{HandlerError, HandlerResult, TripleHandler};
pub use writer::{JsonLinesWriter, NTriplesWriter};
