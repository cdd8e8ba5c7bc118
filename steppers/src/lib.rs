//! Lazy stepping sequences in the spirit of Python's `range` and chunked slicing.
//!
//! Every stepper comes in three delivery styles sharing one stepping algorithm:
//!
//! - pull style: [`SequenceStepper`] and [`ChunkStepper`], plain iterators with explicit
//!   `try_next`/`next_with_flag` handles;
//! - closure style: [`generator`] and [`chunk_generator`];
//! - push style: [`xrange`] and [`chunk`], a producer task handing values over through a
//!   [`Handoff`].
//!
//! Misconfigured steppers report [`StepperError::Config`]; exhausted ones report
//! [`StepperError::Stop`] (or simply end, for iterators and handoffs).

mod chunk_ranges;
mod chunks;
pub mod config;
mod errors;
mod generators;
mod handoff;
mod producers;
mod sequence;

pub use chunk_ranges::ChunkRanges;
pub use chunks::{ChunkStepper, SharedChunk};
pub use errors::{ensure_positive, StepperError, StepperResult};
pub use generators::{chunk_generator, drain, generator};
pub use handoff::Handoff;
pub use producers::{chunk, spawn_chunks, spawn_sequence, xrange};
pub use sequence::SequenceStepper;
