//! The unit of work being dispatched.

/// Transforms an integer input into an integer output.
///
/// Object safe, so it can be called both through a generic bound
/// (`O: Operation`) and through a trait object (`&dyn Operation`).
pub trait Operation {
    fn execute(&self, input: i64) -> i64;
}

/// Multiplies its input by a fixed factor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Multiplier {
    factor: i64,
}

impl Multiplier {
    pub const fn new(factor: i64) -> Self {
        Self { factor }
    }

    pub const fn factor(&self) -> i64 {
        self.factor
    }
}

impl Operation for Multiplier {
    fn execute(&self, input: i64) -> i64 {
        input * self.factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_execute() {
        let op = Multiplier::new(3);
        assert_eq!(op.execute(10), 30);
        assert_eq!(op.execute(0), 0);
        assert_eq!(op.execute(-7), -21);
    }

    #[test]
    fn test_multiplier_factor_is_kept() {
        let op = Multiplier::new(3);
        for v in [1, 2, 1000] {
            op.execute(v);
        }
        assert_eq!(op.factor(), 3);
    }

    #[test]
    fn test_multiplier_as_trait_object() {
        let op = Multiplier::new(4);
        let dyn_op: &dyn Operation = &op;
        assert_eq!(dyn_op.execute(5), 20);
    }
}
