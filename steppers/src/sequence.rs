use std::iter::FusedIterator;
use std::ops::Range;

use crate::config::SequenceConfig;
use crate::errors::{ensure_positive, StepperError, StepperResult};

/// Pull-style arithmetic progression `start, start + step, ...` strictly below `stop`.
///
/// Once the cursor reaches `stop` the stepper stays exhausted; it is never reset.
#[derive(Clone, Debug)]
pub struct SequenceStepper {
    stop: i64,
    step: i64,
    cursor: i64,
}

impl SequenceStepper {
    pub fn new(start: i64, stop: i64, step: i64) -> StepperResult<Self> {
        Ok(Self {
            stop,
            step: ensure_positive(step)?,
            cursor: start,
        })
    }

    pub fn from_config(
        SequenceConfig {
            range: Range { start, end },
            step,
            ..
        }: &SequenceConfig,
    ) -> StepperResult<Self> {
        Self::new(*start, *end, *step)
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.stop
    }

    /// Number of values still to be produced.
    pub fn remaining(&self) -> u128 {
        if self.is_exhausted() {
            0
        } else {
            let span = self.stop as i128 - self.cursor as i128;
            let step = self.step as i128;
            ((span + step - 1) / step) as u128
        }
    }

    /// Returns the current value, or `Stop` for every call once exhausted.
    pub fn try_next(&mut self) -> StepperResult<i64> {
        if self.is_exhausted() {
            Err(StepperError::Stop)
        } else {
            let value = self.cursor;
            self.advance();
            Ok(value)
        }
    }

    /// Returns the cursor together with whether it is still below `stop`, then advances.
    ///
    /// The value is meaningless once the flag is `false`.
    pub fn next_with_flag(&mut self) -> (i64, bool) {
        let value = self.cursor;
        let has_more = !self.is_exhausted();
        self.advance();
        (value, has_more)
    }

    // Saturating keeps the cursor at or past any `stop` instead of wrapping around.
    fn advance(&mut self) {
        self.cursor = self.cursor.saturating_add(self.step);
    }
}

impl Iterator for SequenceStepper {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        match usize::try_from(remaining) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for SequenceStepper {}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(start: i64, stop: i64, step: i64) -> Vec<i64> {
        SequenceStepper::new(start, stop, step).unwrap().collect()
    }

    #[test]
    fn produces_values_below_stop() {
        assert_eq!(collect(0, 3, 1), vec![0, 1, 2]);
        assert_eq!(collect(0, 1, 1), vec![0]);
    }

    #[test]
    fn produces_values_separated_by_step() {
        assert_eq!(collect(3, 12, 2), vec![3, 5, 7, 9, 11]);
    }

    #[test]
    fn produces_values_from_negative_start() {
        assert_eq!(collect(-7, 10, 5), vec![-7, -2, 3, 8]);
    }

    #[test]
    fn produces_nothing_when_start_is_not_below_stop() {
        assert!(collect(0, 0, 1).is_empty());
        assert!(collect(2, 0, 1).is_empty());
    }

    #[test]
    fn produces_single_value_when_step_overshoots_stop() {
        assert_eq!(collect(0, 10, 1_000), vec![0]);
    }

    #[test]
    fn rejects_non_positive_step() {
        assert_eq!(
            SequenceStepper::new(0, 1, 0).unwrap_err(),
            StepperError::Config
        );
        assert_eq!(
            SequenceStepper::new(0, 1, -1).unwrap_err(),
            StepperError::Config
        );
    }

    #[test]
    fn keeps_signalling_stop_after_exhaustion() {
        let mut stepper = SequenceStepper::new(0, 2, 1).unwrap();

        assert_eq!(stepper.try_next(), Ok(0));
        assert_eq!(stepper.try_next(), Ok(1));
        assert_eq!(stepper.try_next(), Err(StepperError::Stop));
        assert_eq!(stepper.try_next(), Err(StepperError::Stop));
        assert_eq!(stepper.next(), None);
    }

    #[test]
    fn next_with_flag_reports_whether_value_is_below_stop() {
        let mut stepper = SequenceStepper::new(3, 6, 2).unwrap();

        assert_eq!(stepper.next_with_flag(), (3, true));
        assert_eq!(stepper.next_with_flag(), (5, true));
        assert!(!stepper.next_with_flag().1);
        assert!(!stepper.next_with_flag().1);
    }

    #[test]
    fn does_not_overflow_near_integer_bounds() {
        let values = collect(i64::MAX - 3, i64::MAX, 2);
        assert_eq!(values, vec![i64::MAX - 3, i64::MAX - 1]);

        let mut stepper = SequenceStepper::new(i64::MAX - 1, i64::MAX, i64::MAX).unwrap();
        assert_eq!(stepper.try_next(), Ok(i64::MAX - 1));
        for _ in 0..3 {
            assert!(!stepper.next_with_flag().1);
        }
    }

    #[test]
    fn builds_from_config() {
        let config = SequenceConfig::new(3..12).with_step(2);
        let stepper = SequenceStepper::from_config(&config).unwrap();

        assert_eq!(stepper.collect::<Vec<_>>(), vec![3, 5, 7, 9, 11]);

        let config = config.with_step(0);
        assert!(SequenceStepper::from_config(&config).is_err());
    }

    #[test]
    fn size_hint_matches_number_of_values() {
        let mut stepper = SequenceStepper::new(-7, 10, 5).unwrap();

        assert_eq!(stepper.size_hint(), (4, Some(4)));
        stepper.next();
        assert_eq!(stepper.size_hint(), (3, Some(3)));
    }

    #[test]
    fn count_follows_ceiling_of_span_over_step() {
        for start in -6..6 {
            for stop in -6..6 {
                for step in 1..8 {
                    let values = collect(start, stop, step);
                    let span = (stop - start).max(0);
                    let expected_count = (span + step - 1) / step;

                    assert_eq!(values.len() as i64, expected_count);
                    for (index, value) in values.iter().enumerate() {
                        assert_eq!(*value, start + step * index as i64);
                        assert!(*value < stop);
                    }
                }
            }
        }
    }
}
