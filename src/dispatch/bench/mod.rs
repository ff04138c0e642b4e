//! Benchmarks for static vs dynamic dispatch

use super::code::{
    process_dynamic, process_dynamic_no_inline, process_static, CallShape, Multiplier, Operation,
};
use crate::utils::bench::{benchmark, BenchmarkResult};
use crate::utils::timer::{measure_variants, BenchConfig, ShapeResult, Variant};
use std::hint::black_box;

/// Results of one run of every call shape
#[derive(Clone, Debug, PartialEq)]
pub struct SuiteReport {
    pub iterations: usize,
    /// One entry per call shape, in run order
    pub results: Vec<ShapeResult>,
}

impl SuiteReport {
    pub fn get(&self, shape: CallShape) -> Option<&BenchmarkResult> {
        self.results
            .iter()
            .find(|r| r.shape == shape)
            .map(|r| &r.result)
    }

    /// Last value computed by the static run, the reference result.
    pub fn final_result(&self) -> Option<i64> {
        self.get(CallShape::StaticInline).map(|r| r.last_result)
    }

    /// Time of `shape` divided by the static time.
    /// `None` when either is missing or the static time is zero.
    pub fn ratio(&self, shape: CallShape) -> Option<f64> {
        let base = self.get(CallShape::StaticInline)?.elapsed_secs;
        let time = self.get(shape)?.elapsed_secs;
        if base > 0.0 {
            Some(time / base)
        } else {
            None
        }
    }

    pub fn dynamic_ratio(&self) -> Option<f64> {
        self.ratio(CallShape::DynamicDefault)
    }

    pub fn no_inline_ratio(&self) -> Option<f64> {
        self.ratio(CallShape::DynamicNoInline)
    }

    /// True when every shape returned the same last result.
    pub fn results_agree(&self) -> bool {
        self.results
            .windows(2)
            .all(|w| w[0].result.last_result == w[1].result.last_result)
    }
}

/// Build the three call-shape variants around one shared operation.
///
/// The operation and the input go through `black_box` on every call so the
/// compiler can neither fold the multiplication nor devirtualize the
/// dynamic calls.
fn build_variants(operation: &Multiplier, input: i64) -> Vec<Variant<'_>> {
    let dyn_operation: &dyn Operation = operation;

    vec![
        Variant {
            shape: CallShape::StaticInline,
            run: Box::new(move |iterations| {
                benchmark(iterations, || {
                    process_static(black_box(operation), black_box(input))
                })
            }),
        },
        Variant {
            shape: CallShape::DynamicDefault,
            run: Box::new(move |iterations| {
                benchmark(iterations, || {
                    process_dynamic(black_box(dyn_operation), black_box(input))
                })
            }),
        },
        Variant {
            shape: CallShape::DynamicNoInline,
            run: Box::new(move |iterations| {
                benchmark(iterations, || {
                    process_dynamic_no_inline(black_box(dyn_operation), black_box(input))
                })
            }),
        },
    ]
}

/// Run every call shape once and collect the results
pub fn run_all_benchmarks(config: &BenchConfig) -> SuiteReport {
    let multiplier = Multiplier::new(config.factor);
    log::info!(
        "measuring {} calls per shape ({} * {})",
        config.iterations,
        config.input,
        multiplier.factor()
    );

    let results = measure_variants(build_variants(&multiplier, config.input), config);
    let report = SuiteReport {
        iterations: config.iterations,
        results,
    };

    if !report.results_agree() {
        log::warn!("call shapes returned different results: {:?}", report.results);
    }
    report
}
