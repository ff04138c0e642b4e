//! The three call shapes wrapping `Operation::execute`.
//!
//! # Static dispatch (generics)
//! `process_static::<Multiplier>` is monomorphized. With `#[inline(always)]`
//! the body usually collapses into the caller's loop:
//! ```asm
//! loop:
//!     imul rax, qword ptr [rdi]   ; input * factor, no call at all
//! ```
//!
//! # Dynamic dispatch (`dyn Operation`)
//! A `&dyn Operation` is a fat pointer (data, vtable). Every call loads the
//! method address from the vtable and jumps through it:
//! ```asm
//! loop:
//!     mov  rax, qword ptr [rsi + 24]   ; vtable slot for execute
//!     call rax                         ; indirect call
//! ```
//!
//! | Aspect | Static | Dynamic | Dynamic, `#[inline(never)]` |
//! |--------|--------|---------|-----------------------------|
//! | Target known at compile time | yes | no | no |
//! | Indirect call | none | one | one |
//! | Wrapper call | inlined | compiler decides | always a CALL/RET |
//!
//! Inline attributes are hints. The compiler may still inline or
//! devirtualize where it can prove the concrete type, which is why the
//! benchmark hides the operation behind `black_box`.

use super::operation::{Multiplier, Operation};

/// Static dispatch, resolved at compile time and forced inline.
#[inline(always)]
pub fn process_static<O: Operation>(operation: &O, input: i64) -> i64 {
    operation.execute(input)
}

/// Dynamic dispatch through the vtable, inlining left to the optimizer.
pub fn process_dynamic(operation: &dyn Operation, input: i64) -> i64 {
    operation.execute(input)
}

/// Dynamic dispatch with the wrapper kept out of line.
#[inline(never)]
pub fn process_dynamic_no_inline(operation: &dyn Operation, input: i64) -> i64 {
    operation.execute(input)
}

/// How an `Operation` is invoked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallShape {
    /// Generic, monomorphized, `#[inline(always)]`
    StaticInline,
    /// `&dyn Operation`, default inlining
    DynamicDefault,
    /// `&dyn Operation`, `#[inline(never)]`
    DynamicNoInline,
}

impl CallShape {
    /// Every shape, in the order they are measured.
    pub const ALL: [CallShape; 3] = [
        CallShape::StaticInline,
        CallShape::DynamicDefault,
        CallShape::DynamicNoInline,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CallShape::StaticInline => "static-inline",
            CallShape::DynamicDefault => "dynamic",
            CallShape::DynamicNoInline => "dynamic-no-inline",
        }
    }

    /// Label printed in the report.
    pub fn label(self) -> &'static str {
        match self {
            CallShape::StaticInline => "Static (generics, #[inline(always)])",
            CallShape::DynamicDefault => "Dynamic (dyn Operation)",
            CallShape::DynamicNoInline => "Dynamic (dyn Operation, #[inline(never)])",
        }
    }

    /// Route one call through the wrapper matching this shape.
    pub fn call(self, operation: &Multiplier, input: i64) -> i64 {
        match self {
            CallShape::StaticInline => process_static(operation, input),
            CallShape::DynamicDefault => process_dynamic(operation, input),
            CallShape::DynamicNoInline => process_dynamic_no_inline(operation, input),
        }
    }
}
