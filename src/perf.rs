//! Timing for per-sample input handlers.
//!
//! Move and wheel handlers run once per pointer sample, so a slow one shows
//! up as lag under the finger. Each is wrapped in [`time_handler!`], which
//! arms a [`HandlerTimer`] only when the `profiling` feature is enabled.

use crate::constants::HANDLER_WARN_MS;
use std::time::{Duration, Instant};
use tracing::{trace, warn};

/// Time the rest of the enclosing handler against a budget in milliseconds.
///
/// ```ignore
/// pub fn handle_wheel(&mut self, event: &WheelEvent) -> ZoomPanResult<()> {
///     time_handler!("handle_wheel");
///     // ...
/// }
/// ```
#[macro_export]
macro_rules! time_handler {
    ($handler:expr) => {
        $crate::time_handler!($handler, $crate::constants::HANDLER_WARN_MS)
    };
    ($handler:expr, $budget_ms:expr) => {
        let _handler_timer = $crate::perf::HandlerTimer::when_profiling($handler, $budget_ms);
    };
}

/// Measures one handler invocation and reports it on drop.
#[derive(Debug)]
pub struct HandlerTimer {
    handler: &'static str,
    started: Instant,
    budget_ms: f64,
}

impl HandlerTimer {
    pub fn new(handler: &'static str, budget_ms: f64) -> Self {
        Self {
            handler,
            started: Instant::now(),
            budget_ms,
        }
    }

    /// Timer against the per-sample handler budget.
    pub fn with_default_budget(handler: &'static str) -> Self {
        Self::new(handler, HANDLER_WARN_MS)
    }

    /// `None` unless built with the `profiling` feature.
    pub fn when_profiling(handler: &'static str, budget_ms: f64) -> Option<Self> {
        cfg!(feature = "profiling").then(|| Self::new(handler, budget_ms))
    }

    pub fn handler(&self) -> &'static str {
        self.handler
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed().as_secs_f64() * 1000.0
    }

    pub fn over_budget(&self) -> bool {
        self.elapsed_ms() > self.budget_ms
    }
}

impl Drop for HandlerTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        trace!(handler = self.handler, elapsed_ms, "input sample handled");
        if elapsed_ms > self.budget_ms {
            warn!(
                handler = self.handler,
                elapsed_ms,
                budget_ms = self.budget_ms,
                "input sample handled over budget"
            );
        }
    }
}
