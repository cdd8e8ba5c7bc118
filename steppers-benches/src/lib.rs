//! Shared fixtures for the stepper benchmarks.

pub const BENCH_STOP: i64 = 1_000;
pub const BENCH_CHUNK: i64 = 1_000;

/// Items `0..BENCH_CHUNK`, so chunks of two are always `[j, j + 1]`.
pub fn bench_items() -> Vec<i64> {
    (0..BENCH_CHUNK).collect()
}

/// Panics when a pair chunk doesn't start at `expected_start`.
pub fn check_pair(chunk: &[i64], expected_start: i64) {
    assert_eq!(chunk, [expected_start, expected_start + 1]);
}
