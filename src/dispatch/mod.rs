//! # Static vs Dynamic Dispatch
//!
//! The same operation (`input * factor`) called three ways:
//!
//! - **static-inline**: generic over `O: Operation`, monomorphized and
//!   `#[inline(always)]`. No indirection.
//! - **dynamic**: through `&dyn Operation`, one indirect call per use via the
//!   vtable. Whether the wrapper itself is inlined is left to the compiler.
//! - **dynamic-no-inline**: as above, with the wrapper marked
//!   `#[inline(never)]`, so each call pays the CALL/RET and the vtable lookup.
//!
//! All three return the same value; only their cost differs.

pub mod bench;
pub mod code;
pub mod test;

pub use bench::{run_all_benchmarks, SuiteReport};
pub use code::{CallShape, Multiplier, Operation};
pub use test::verify_all;
