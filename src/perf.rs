//! Performance instrumentation for the gesture hot path.
//!
//! Drag-move handling runs once per movement sample (60+ Hz), so it carries
//! a scoped timer that is compiled out unless the `profiling` feature is on.
//!
//! ## Usage
//!
//! Enable profiling with the `profiling` feature flag:
//! ```toml
//! [dependencies]
//! swipedeck = { features = ["profiling"] }
//! ```
//!
//! Use the macro for zero-cost instrumentation:
//! ```ignore
//! fn handle_drag_move() {
//!     profile_scope!("handle_drag_move");
//!     // ... work ...
//! }
//! ```

use std::time::Instant;
#[cfg(feature = "profiling")]
use tracing::trace;
#[cfg(not(feature = "profiling"))]
use tracing::warn;

/// Threshold in milliseconds above which a gesture handler is considered
/// slow enough to warn about (roughly one 60 FPS frame).
pub const SLOW_HANDLER_MS: f64 = 16.0;

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name; // Suppress unused variable warning
    };
}

pub use profile_scope;

/// A scoped timer that logs its duration on drop.
///
/// With the `profiling` feature enabled every scope over its threshold is
/// traced; without it, only scopes slow enough to threaten the frame budget
/// produce a warning.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    /// Create a new scoped timer with a warning threshold.
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Create a timer for profiling (low 1ms threshold).
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, 1.0)
    }

    /// Get elapsed time without stopping the timer.
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();

        #[cfg(feature = "profiling")]
        if elapsed_ms > self.threshold_ms {
            trace!("[PERF] {}: {:.2}ms", self.name, elapsed_ms);
        }

        #[cfg(not(feature = "profiling"))]
        if elapsed_ms > self.threshold_ms.max(SLOW_HANDLER_MS) {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{elapsed_ms:.2}"),
                "Slow gesture handler"
            );
        }
    }
}

/// Measure execution time of a closure, returning the result and elapsed
/// milliseconds.
#[inline]
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    (result, elapsed_ms)
}
