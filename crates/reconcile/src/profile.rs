// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Size formatting, read timing and peak memory

use diagnostics::info;
use peak_alloc::PeakAlloc;
use std::time::{Duration, Instant};

const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Human readable byte count, two decimals, capped at GB
#[must_use]
pub fn format_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    for unit in &UNITS[..UNITS.len() - 1] {
        if size < 1024.0 {
            return format!("{size:.2} {unit}");
        }
        size /= 1024.0;
    }
    format!("{size:.2} GB")
}

/// Run `f`, logging how long it took under `label`
pub fn measure<T, F: FnOnce() -> T>(label: &str, f: F) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();
    info!(
        "{label} took {seconds} seconds",
        label: label,
        seconds: format!("{:.3}", elapsed.as_secs_f64())
    );
    (result, elapsed)
}

/// Source of peak heap usage, usually the process's global allocator
pub trait MemoryGauge {
    fn reset_peak(&self);
    fn peak_bytes(&self) -> u64;
}

impl MemoryGauge for PeakAlloc {
    fn reset_peak(&self) {
        self.reset_peak_usage();
    }

    fn peak_bytes(&self) -> u64 {
        self.peak_usage() as u64
    }
}

/// Cost of one measured call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub elapsed: Duration,
    /// Peak heap usage while the call ran
    pub peak_bytes: u64,
}

/// Like [`measure`], also recording peak heap usage from `gauge`.
///
/// The gauge's peak is reset first, so the figure covers only `f`.
pub fn measure_memory<T, G, F>(label: &str, gauge: &G, f: F) -> (T, Measurement)
where
    G: MemoryGauge + ?Sized,
    F: FnOnce() -> T,
{
    gauge.reset_peak();
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();
    let peak_bytes = gauge.peak_bytes();
    info!(
        "{label} took {seconds} seconds, Memory usage: {memory}",
        label: label,
        seconds: format!("{:.3}", elapsed.as_secs_f64()),
        memory: format_size(peak_bytes)
    );
    (result, Measurement { elapsed, peak_bytes })
}
