//! Performance instrumentation for hot input paths.
//!
//! Pointer-move handling and hit testing run at pointer frequency. With the
//! `profiling` feature enabled, `profile_scope!` wraps a block in a
//! [`ScopedTimer`] that reports slow scopes through `tracing`; without the
//! feature the macro compiles to nothing.
//!
//! ```ignore
//! fn handle_pointer_move(&mut self) {
//!     profile_scope!("handle_pointer_move");
//!     // ...
//! }
//! ```

use std::cell::Cell;
use std::time::Instant;
use tracing::{trace, warn};

/// Budget for handling a single input event (one 60 FPS frame)
pub const EVENT_BUDGET_MS: f64 = 16.67;

/// Threshold used by `profile_scope!` without an explicit threshold
pub const PROFILING_THRESHOLD_MS: f64 = 1.0;

thread_local! {
    static CURRENT_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Time a scope. Zero-cost when the `profiling` feature is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use profile_scope;

/// Reports its scope's duration on drop when it exceeds the threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
    depth: usize,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        let depth = CURRENT_DEPTH.with(|d| {
            let current = d.get();
            d.set(current + 1);
            current
        });

        Self {
            name,
            start: Instant::now(),
            threshold_ms,
            depth,
        }
    }

    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, PROFILING_THRESHOLD_MS)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Nesting level among live timers on this thread (0 = outermost)
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        CURRENT_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));

        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms > EVENT_BUDGET_MS {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                "Input handling exceeded frame budget"
            );
        } else if elapsed_ms > self.threshold_ms {
            let indent = "  ".repeat(self.depth);
            trace!("{}[PERF] {}: {:.2}ms", indent, self.name, elapsed_ms);
        }
    }
}
