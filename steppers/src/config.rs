use std::ops::Range;

use tokio_util::sync::CancellationToken;

#[derive(Clone, Debug)]
pub struct SequenceConfig {
    pub range: Range<i64>,
    pub step: i64,
    pub cancel_token: CancellationToken,
}

impl SequenceConfig {
    pub fn new(range: Range<i64>) -> Self {
        Self {
            range,
            step: 1,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn with_range(mut self, range: Range<i64>) -> Self {
        self.range = range;
        self
    }
    pub fn with_step(mut self, step: i64) -> Self {
        self.step = step;
        self
    }
    /// Only push-style producers observe the token.
    pub fn with_cancel_token(mut self, cancel_token: CancellationToken) -> Self {
        self.cancel_token = cancel_token;
        self
    }
}

#[derive(Clone, Debug)]
pub struct ChunkConfig {
    pub size: usize,
    pub cancel_token: CancellationToken,
}

impl ChunkConfig {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }
    /// Only push-style producers observe the token.
    pub fn with_cancel_token(mut self, cancel_token: CancellationToken) -> Self {
        self.cancel_token = cancel_token;
        self
    }
}
