//! Benchmark driver and time measurement helpers.
//!
//! Measurements use `std::time::Instant`, a monotonic clock, so clock
//! adjustments cannot skew a run. The whole loop is timed once; there is no
//! per-iteration timing.

use std::hint::black_box;
use std::time::{Duration, Instant};

/// Outcome of one driver run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BenchmarkResult {
    /// Wall-clock time spent in the loop, in seconds
    pub elapsed_secs: f64,
    /// Value returned by the final iteration (0 if no iteration ran)
    pub last_result: i64,
}

/// Read the monotonic clock.
#[inline(always)]
pub fn now() -> Instant {
    Instant::now()
}

/// Time elapsed since `start`.
#[inline(always)]
pub fn elapsed(start: Instant) -> Duration {
    start.elapsed()
}

/// Convert a duration to seconds, keeping nanosecond resolution.
pub fn to_seconds(d: Duration) -> f64 {
    d.as_nanos() as f64 / 1_000_000_000.0
}

/// Run `work` exactly `iterations` times and time the whole loop.
///
/// Only the most recent return value is kept. Each value goes through
/// `black_box` so the optimizer cannot drop the loop body.
#[inline(always)]
pub fn benchmark<F>(iterations: usize, mut work: F) -> BenchmarkResult
where
    F: FnMut() -> i64,
{
    let mut last_result = 0i64;
    let start = now();
    for _ in 0..iterations {
        last_result = black_box(work());
    }
    let total = elapsed(start);

    BenchmarkResult {
        elapsed_secs: to_seconds(total),
        last_result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_seconds() {
        assert_eq!(to_seconds(Duration::ZERO), 0.0);
        assert_eq!(to_seconds(Duration::from_secs(2)), 2.0);
        assert!((to_seconds(Duration::from_micros(1500)) - 0.0015).abs() < 1e-12);
        assert!((to_seconds(Duration::from_nanos(1)) - 1e-9).abs() < 1e-18);
    }

    #[test]
    fn test_benchmark_keeps_last_result() {
        let mut counter = 0i64;
        let result = benchmark(100, || {
            counter += 1;
            counter * 2
        });
        assert_eq!(counter, 100, "work should run exactly `iterations` times");
        assert_eq!(result.last_result, 200);
        assert!(result.elapsed_secs >= 0.0);
    }

    #[test]
    fn test_benchmark_zero_iterations() {
        let mut calls = 0;
        let result = benchmark(0, || {
            calls += 1;
            42
        });
        assert_eq!(calls, 0);
        assert_eq!(result.last_result, 0);
        assert!(result.elapsed_secs >= 0.0);
        assert!(result.elapsed_secs < 0.01, "empty loop took {}s", result.elapsed_secs);
    }

    #[test]
    fn test_benchmark_deterministic_result() {
        for _ in 0..5 {
            let result = benchmark(1000, || black_box(10i64) * 3);
            assert_eq!(result.last_result, 30);
        }
    }

    #[test]
    fn test_benchmark_scales_with_iterations() {
        // Noise tolerant: compare the best of several trials
        fn best_of(iterations: usize) -> f64 {
            (0..7)
                .map(|_| {
                    benchmark(iterations, || {
                        let mut sum = 0i64;
                        for i in 0..64 {
                            sum = black_box(sum.wrapping_add(black_box(i)));
                        }
                        sum
                    })
                    .elapsed_secs
                })
                .fold(f64::INFINITY, f64::min)
        }

        let single = best_of(20_000);
        let double = best_of(40_000);
        assert!(
            double >= single * 0.8,
            "doubling iterations should not reduce time: {} vs {}",
            single,
            double
        );
    }
}
