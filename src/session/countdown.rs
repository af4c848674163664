//! Countdown ticker owned by the session machine.
//!
//! A ticker exists only while a quiz is in progress. It is represented by a
//! [`TickerGuard`]; dropping the guard stops the ticker. Every ticker has a
//! generation number so ticks already queued from a stopped ticker can be
//! recognised and ignored.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use scopeguard::ScopeGuard;
use tokio::runtime::Handle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Period of the quiz countdown.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

type Cancel = Box<dyn FnOnce(()) + Send + 'static>;

/// Live countdown. Stops the underlying ticker when dropped.
pub struct TickerGuard {
    generation: u64,
    _cancel: ScopeGuard<(), Cancel>,
}

impl TickerGuard {
    pub fn new<F>(generation: u64, cancel: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let cancel: Cancel = Box::new(move |()| cancel());
        Self {
            generation,
            _cancel: scopeguard::guard((), cancel),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl fmt::Debug for TickerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TickerGuard")
            .field("generation", &self.generation)
            .finish()
    }
}

/// Something that can start a once-per-second ticker.
pub trait TickSource: Send {
    /// Start a ticker tagged with `generation`.
    fn start(&self, generation: u64) -> TickerGuard;
}

/// Receives the generation of each tick. Returns `false` once nobody is
/// listening, which ends the ticker.
pub type TickSink = Arc<dyn Fn(u64) -> bool + Send + Sync>;

/// Ticker backed by a tokio interval task.
pub struct IntervalTicks {
    handle: Handle,
    period: Duration,
    sink: TickSink,
}

impl IntervalTicks {
    pub fn new(handle: Handle, sink: TickSink) -> Self {
        Self::with_period(handle, TICK_PERIOD, sink)
    }

    pub fn with_period(handle: Handle, period: Duration, sink: TickSink) -> Self {
        Self {
            handle,
            period,
            sink,
        }
    }
}

impl TickSource for IntervalTicks {
    fn start(&self, generation: u64) -> TickerGuard {
        let period = self.period;
        let sink = Arc::clone(&self.sink);

        let task = self.handle.spawn(async move {
            // First tick one full period after start.
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if !sink(generation) {
                    tracing::debug!(generation, "Countdown sink closed");
                    break;
                }
            }
        });

        tracing::debug!(generation, period_ms = period.as_millis() as u64, "Countdown started");
        TickerGuard::new(generation, move || {
            task.abort();
            tracing::debug!(generation, "Countdown stopped");
        })
    }
}
