//! Closure-driven steppers: each call of the returned function produces the next value.
//!
//! Unlike [`SequenceStepper::new`], creating a generator never fails. A misconfigured generator
//! reports [`StepperError::Config`] on every call instead.

use crate::chunks::ChunkStepper;
use crate::errors::{StepperError, StepperResult};
use crate::sequence::SequenceStepper;

pub fn generator(start: i64, stop: i64, step: i64) -> impl FnMut() -> StepperResult<i64> {
    let mut stepper = SequenceStepper::new(start, stop, step);

    move || stepper.as_mut().map_err(|err| *err)?.try_next()
}

pub fn chunk_generator<'a, T>(
    items: &'a [T],
    size: usize,
) -> impl FnMut() -> StepperResult<&'a [T]> + 'a {
    let mut stepper = ChunkStepper::new(items, size);

    move || stepper.as_mut().map_err(|err| *err)?.try_next()
}

/// Drains a generator until it signals [`StepperError::Stop`].
pub fn drain<T>(mut generator: impl FnMut() -> StepperResult<T>) -> StepperResult<Vec<T>> {
    let mut values = Vec::new();

    loop {
        match generator() {
            Ok(value) => values.push(value),
            Err(StepperError::Stop) => break Ok(values),
            Err(err) => break Err(err),
        }
    }
}
