use std::iter::FusedIterator;
use std::ops::{Deref, Range};
use std::sync::Arc;

use crate::chunk_ranges::ChunkRanges;
use crate::config::ChunkConfig;
use crate::errors::{StepperError, StepperResult};

/// Pull-style splitter of a borrowed slice into contiguous chunks of at most `size` elements.
///
/// Chunks cover every element exactly once, in order; only the last one may be shorter.
#[derive(Clone, Debug)]
pub struct ChunkStepper<'a, T> {
    items: &'a [T],
    windows: ChunkRanges,
}

impl<'a, T> ChunkStepper<'a, T> {
    pub fn new(items: &'a [T], size: usize) -> StepperResult<Self> {
        Ok(Self {
            items,
            windows: ChunkRanges::new(0..items.len(), size)?,
        })
    }

    pub fn from_config(
        items: &'a [T],
        ChunkConfig { size, .. }: &ChunkConfig,
    ) -> StepperResult<Self> {
        Self::new(items, *size)
    }

    pub fn is_exhausted(&self) -> bool {
        !self.windows.has_next()
    }

    pub fn try_next(&mut self) -> StepperResult<&'a [T]> {
        let items = self.items;

        self.windows
            .next()
            .map(|window| &items[window])
            .ok_or(StepperError::Stop)
    }

    /// Returns the next chunk together with whether one was available.
    ///
    /// Once exhausted, the chunk is empty and the flag is `false`.
    pub fn next_with_flag(&mut self) -> (&'a [T], bool) {
        match self.try_next() {
            Ok(chunk) => (chunk, true),
            Err(_) => {
                let items = self.items;
                (&items[items.len()..], false)
            }
        }
    }
}

impl<'a, T> Iterator for ChunkStepper<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.windows.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for ChunkStepper<'a, T> {}

impl<'a, T> FusedIterator for ChunkStepper<'a, T> {}

/// A chunk of shared items, handed across tasks without copying the elements.
#[derive(Debug)]
pub struct SharedChunk<T> {
    items: Arc<[T]>,
    window: Range<usize>,
}

impl<T> SharedChunk<T> {
    pub(crate) fn new(items: Arc<[T]>, window: Range<usize>) -> Self {
        Self { items, window }
    }

    /// Position of this chunk within the original items.
    pub fn window(&self) -> Range<usize> {
        self.window.clone()
    }
}

impl<T> Clone for SharedChunk<T> {
    fn clone(&self) -> Self {
        Self::new(self.items.clone(), self.window.clone())
    }
}

impl<T> Deref for SharedChunk<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.items[self.window.clone()]
    }
}

impl<T: PartialEq> PartialEq<[T]> for SharedChunk<T> {
    fn eq(&self, other: &[T]) -> bool {
        **self == *other
    }
}

/// Owned chunk source over shared items, driven by the same windows as [`ChunkStepper`].
pub(crate) struct SharedChunks<T> {
    items: Arc<[T]>,
    windows: ChunkRanges,
}

impl<T> SharedChunks<T> {
    pub(crate) fn new(items: Arc<[T]>, size: usize) -> StepperResult<Self> {
        let windows = ChunkRanges::new(0..items.len(), size)?;

        Ok(Self { items, windows })
    }
}

impl<T> Iterator for SharedChunks<T> {
    type Item = SharedChunk<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.windows
            .next()
            .map(|window| SharedChunk::new(self.items.clone(), window))
    }
}
