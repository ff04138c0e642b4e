//! Tests for the call-shape wrappers

use super::code::{process_static, CallShape, Multiplier};
use crate::error::{DispatchError, Result};
use crate::utils::timer::{FACTOR, INPUT};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random operand pairs checked on top of the fixed scenario
const RANDOM_CASES: usize = 1000;

/// Check one shape against the static reference for one operand pair
fn check(shape: CallShape, factor: i64, input: i64, expected: i64) -> Result<()> {
    let actual = shape.call(&Multiplier::new(factor), input);
    if actual != expected {
        return Err(DispatchError::Mismatch {
            shape: shape.name(),
            factor,
            input,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Verify all call shapes produce the same results.
///
/// Covers the benchmark's own operands, whose product must be 30, then a
/// reproducible set of random operands small enough not to overflow.
pub fn verify_all() -> Result<()> {
    for shape in CallShape::ALL {
        check(shape, FACTOR, INPUT, FACTOR * INPUT)?;
    }

    let mut rng = StdRng::seed_from_u64(0x12345678);
    for _ in 0..RANDOM_CASES {
        let factor = rng.random_range(-1_000..=1_000);
        let input = rng.random_range(-1_000_000..=1_000_000);
        let expected = process_static(&Multiplier::new(factor), input);
        for shape in CallShape::ALL {
            check(shape, factor, input, expected)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_variants() {
        verify_all().expect("All call shapes should produce correct results");
    }

    #[test]
    fn test_expected_computation() {
        // 10 * 3 = 30 for every shape
        let op = Multiplier::new(3);
        for shape in CallShape::ALL {
            assert_eq!(shape.call(&op, 10), 30, "{}: 10 * 3 should be 30", shape.name());
        }
    }

    #[test]
    fn test_zero() {
        let op = Multiplier::new(3);
        for shape in CallShape::ALL {
            assert_eq!(shape.call(&op, 0), 0, "{}: 0 * 3 should be 0", shape.name());
        }
    }

    #[test]
    fn test_check_reports_mismatch() {
        let err = check(CallShape::DynamicDefault, 3, 10, 31).unwrap_err();
        assert_eq!(
            err,
            DispatchError::Mismatch {
                shape: "dynamic",
                factor: 3,
                input: 10,
                expected: 31,
                actual: 30,
            }
        );
        assert_eq!(err.to_string(), "dynamic returned 30 for 10 * 3, expected 31");
    }
}
