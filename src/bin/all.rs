//! CLI for the static vs dynamic dispatch comparison.
//!
//! Usage:
//!   dispatch-bench          # Verify the call shapes, run them, print the report
//!
//! Takes no options; iterations, input and factor are fixed in `BenchConfig`.

use dispatch_bench::prelude::*;
use dispatch_bench::tui;
use log::LevelFilter;

fn main() {
    // Fixed filter: the harness reads no environment variables
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .format_timestamp(None)
        .init();

    if let Err(e) = verify_all() {
        log::error!("call shape verification failed: {}", e);
        std::process::exit(1);
    }

    let config = BenchConfig::default();

    tui::print_header();
    let report = run_all_benchmarks(&config);
    tui::print_report(&report);
}
