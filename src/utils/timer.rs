//! Measurement sequencing for the call-shape benchmarks.
//!
//! This module provides:
//! - The benchmark configuration and its fixed defaults
//! - Optional CPU core pinning for the whole measurement sequence
//! - In-order execution of each variant, once

use crate::dispatch::code::CallShape;
use crate::utils::bench::BenchmarkResult;

#[cfg(feature = "cpu_pin")]
use super::cpu_affinity::CpuPinGuard;

// ============================================================================
// Configuration
// ============================================================================

/// Calls made per call shape.
pub const ITERATIONS: usize = 100_000;
/// Input passed to every call.
pub const INPUT: i64 = 10;
/// Factor held by the shared multiplier.
pub const FACTOR: i64 = 3;

/// Configuration for a benchmark suite
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchConfig {
    /// Calls per call shape (default: 100 000)
    pub iterations: usize,
    /// Input value (default: 10)
    pub input: i64,
    /// Multiplier factor (default: 3)
    pub factor: i64,
    /// Keep the thread on one core while measuring (default: true).
    /// Ignored without the `cpu_pin` feature.
    pub pin_to_core: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: ITERATIONS,
            input: INPUT,
            factor: FACTOR,
            pin_to_core: true,
        }
    }
}

impl BenchConfig {
    /// Result every call shape is expected to produce.
    pub fn expected_result(&self) -> i64 {
        self.input * self.factor
    }
}

/// A call shape ready to be measured
pub struct Variant<'a> {
    pub shape: CallShape,
    /// Runs the driver for the given iteration count.
    /// The whole timed loop lives inside the closure, so the box's own
    /// indirection is paid once per run, not once per call.
    pub run: Box<dyn FnMut(usize) -> BenchmarkResult + 'a>,
}

/// Result from measuring a single variant
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeResult {
    pub shape: CallShape,
    pub result: BenchmarkResult,
}

/// Measure each variant once, in the order given.
pub fn measure_variants(variants: Vec<Variant>, config: &BenchConfig) -> Vec<ShapeResult> {
    if variants.is_empty() {
        return Vec::new();
    }

    #[cfg(feature = "cpu_pin")]
    let _pin = config.pin_to_core.then(|| {
        let guard = CpuPinGuard::new();
        match guard.core_id() {
            Some(core) => log::debug!("pinned to core {}", core),
            None => log::warn!("could not pin thread to a core, measuring unpinned"),
        }
        guard
    });

    variants
        .into_iter()
        .map(|mut variant| {
            let result = (variant.run)(config.iterations);
            log::debug!(
                "{}: {} iterations in {:.6}s, last result {}",
                variant.shape.name(),
                config.iterations,
                result.elapsed_secs,
                result.last_result
            );
            ShapeResult {
                shape: variant.shape,
                result,
            }
        })
        .collect()
}
