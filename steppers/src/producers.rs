use std::ops::Range;
use std::sync::Arc;

use tracing::info;

use crate::chunks::{SharedChunk, SharedChunks};
use crate::config::{ChunkConfig, SequenceConfig};
use crate::errors::StepperResult;
use crate::handoff::Handoff;
use crate::sequence::SequenceStepper;

/// Push-style range: values `start, start + step, ...` below `stop`, handed over by a producer task.
///
/// Must be called within a tokio runtime.
pub fn xrange(start: i64, stop: i64, step: i64) -> StepperResult<Handoff<i64>> {
    spawn_sequence(&SequenceConfig::new(start..stop).with_step(step))
}

/// Push-style chunks of at most `size` items, handed over by a producer task.
///
/// Must be called within a tokio runtime.
pub fn chunk<T: Send + Sync + 'static>(
    items: impl Into<Arc<[T]>>,
    size: usize,
) -> StepperResult<Handoff<SharedChunk<T>>> {
    spawn_chunks(items, &ChunkConfig::new(size))
}

pub fn spawn_sequence(config: &SequenceConfig) -> StepperResult<Handoff<i64>> {
    let stepper = SequenceStepper::from_config(config)?;

    let Range { start, end } = config.range;
    info!("Spawning xrange producer for {start}..{end} by {}", config.step);

    Ok(Handoff::spawn("xrange", stepper, config.cancel_token.clone()))
}

pub fn spawn_chunks<T: Send + Sync + 'static>(
    items: impl Into<Arc<[T]>>,
    ChunkConfig { size, cancel_token }: &ChunkConfig,
) -> StepperResult<Handoff<SharedChunk<T>>> {
    let chunks = SharedChunks::new(items.into(), *size)?;

    info!("Spawning chunk producer with chunk size:{size}");

    Ok(Handoff::spawn("chunk", chunks, cancel_token.clone()))
}
