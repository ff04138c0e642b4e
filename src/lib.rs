//! # Dispatch-Bench
//!
//! Measures what dynamic dispatch (`dyn Trait`) costs compared with static
//! dispatch (generics), with and without inlining.

pub mod dispatch;
pub mod error;
pub mod utils;

pub use error::{DispatchError, Result};

/// Re-export tui from utils
pub use utils::tui;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::dispatch::{run_all_benchmarks, verify_all, CallShape, Multiplier, Operation};
    pub use crate::utils::{benchmark, BenchConfig, BenchmarkResult};
}
