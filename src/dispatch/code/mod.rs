//! Operation contract and call-shape wrappers.

mod operation;
mod shapes;

pub use operation::{Multiplier, Operation};
pub use shapes::{process_dynamic, process_dynamic_no_inline, process_static, CallShape};
