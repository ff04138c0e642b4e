//! Utility modules for benchmarking and execution.

pub mod bench;
#[cfg(feature = "cpu_pin")]
pub mod cpu_affinity;
pub mod timer;
pub mod tui;

// Re-export commonly used items
pub use bench::{benchmark, elapsed, now, to_seconds, BenchmarkResult};
#[cfg(feature = "cpu_pin")]
pub use cpu_affinity::CpuPinGuard;
pub use timer::{measure_variants, BenchConfig, ShapeResult, Variant};
