// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Daybands-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Daybands and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;

use pprof::criterion::{Output, PProfProfiler};

/// Reads a `DAYBANDS_BENCH_*` override, falling back to `default` when unset or unparsable.
fn knob<T: FromStr + PartialOrd>(name: &str, default: T, min: T, max: T) -> T {
    let value = std::env::var(format!("DAYBANDS_BENCH_{name}"))
        .ok()
        .and_then(|raw| raw.trim().parse::<T>().ok())
        .unwrap_or(default);
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Criterion tuned for the layout benches, with a flamegraph per bench when run with
/// `--profile-time`.
pub fn criterion() -> Criterion {
    let frequency = knob("PROFILE_FREQ", 250i32, 1, 1000);
    let sample_size = knob("SAMPLES", 50usize, 10, 200);
    let warmup = knob("WARMUP_SECS", 2u64, 1, 60);
    let measurement = knob("MEASUREMENT_SECS", 4u64, 1, 120);

    Criterion::default()
        .sample_size(sample_size)
        .warm_up_time(Duration::from_secs(warmup))
        .measurement_time(Duration::from_secs(measurement))
        .with_profiler(PProfProfiler::new(frequency, Output::Flamegraph(None)))
}
