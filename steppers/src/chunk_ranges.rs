use std::iter::FusedIterator;
use std::ops::Range;

use crate::errors::{ensure_positive, StepperResult};

/// Splits a range into consecutive windows of `chunk_size`, the last one clamped to the end.
#[derive(Clone, Debug)]
pub struct ChunkRanges {
    next_range: Range<usize>,
    chunk_size: usize,
}

impl ChunkRanges {
    pub fn new(next_range: Range<usize>, chunk_size: usize) -> StepperResult<Self> {
        Ok(Self {
            next_range,
            chunk_size: ensure_positive(chunk_size)?,
        })
    }

    pub fn has_next(&self) -> bool {
        self.next_range.start < self.next_range.end
    }

    pub fn position(&self) -> usize {
        self.next_range.start
    }
}

impl Iterator for ChunkRanges {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            None
        } else {
            let next_start = self.next_range.start;
            let next_end = next_start
                .saturating_add(self.chunk_size)
                .min(self.next_range.end);

            self.next_range.start = next_end;

            Some(next_start..next_end)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ChunkRanges {
    fn len(&self) -> usize {
        if self.has_next() {
            let span = self.next_range.end - self.next_range.start;
            span / self.chunk_size + usize::from(span % self.chunk_size != 0)
        } else {
            0
        }
    }
}

impl FusedIterator for ChunkRanges {}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::errors::StepperError;

    #[test]
    fn splits_range_into_equal_windows() {
        let windows: Vec<_> = ChunkRanges::new(0..4, 2).unwrap().collect();

        assert_eq!(windows, vec![0..2, 2..4]);
    }

    #[test]
    fn clamps_last_window_to_range_end() {
        let windows: Vec<_> = ChunkRanges::new(0..5, 2).unwrap().collect();

        assert_eq!(windows, vec![0..2, 2..4, 4..5]);
    }

    #[test]
    fn yields_single_window_when_chunk_size_exceeds_range() {
        let windows: Vec<_> = ChunkRanges::new(0..3, 5).unwrap().collect();

        assert_eq!(windows, vec![0..3]);
    }

    #[test]
    fn yields_nothing_for_empty_range() {
        let mut windows = ChunkRanges::new(0..0, 1).unwrap();

        assert!(!windows.has_next());
        assert_eq!(windows.next(), None);
        assert_eq!(windows.next(), None);
    }

    #[test]
    fn tracks_position_and_remaining_windows() {
        let mut windows = ChunkRanges::new(0..5, 2).unwrap();

        assert_eq!(windows.len(), 3);
        windows.next();
        assert_eq!(windows.position(), 2);
        assert_eq!(windows.len(), 2);
        windows.by_ref().for_each(drop);
        assert_eq!(windows.position(), 5);
        assert_eq!(windows.len(), 0);
    }

    #[test]
    fn rejects_zero_chunk_size() {
        assert_eq!(
            ChunkRanges::new(0..4, 0).unwrap_err(),
            StepperError::Config
        );
    }

    #[test]
    fn does_not_overflow_with_huge_chunk_size() {
        let windows: Vec<_> = ChunkRanges::new(3..7, usize::MAX).unwrap().collect();

        assert_eq!(windows, vec![3..7]);
    }
}
