use std::time::Duration;

use parking_lot::Mutex;

/// Request counters shared by every connection.
///
/// ## Usage
///
/// One `Stats` lives behind an `Arc` for the whole server; each session
/// calls [`Stats::record`] once per answered line.
#[derive(Debug, Default)]
pub struct Stats {
    inner: Mutex<Counters>,
}

#[derive(Debug, Default, Clone, Copy)]
struct Counters {
    requests:   u64,
    total_time: f64,
    max_time:   f64,
}

/// A consistent view of the counters at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    /// Number of answered requests.
    pub requests: u64,
    /// Mean response time in seconds, `0.0` before the first request.
    pub avg_time: f64,
    /// Largest response time in seconds.
    pub max_time: f64,
}

impl Stats {
    /// Creates zeroed counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one answered request that took `elapsed`.
    pub fn record(&self, elapsed: Duration) {
        let seconds = elapsed.as_secs_f64();
        let mut counters = self.inner.lock();
        counters.requests += 1;
        counters.total_time += seconds;
        counters.max_time = counters.max_time.max(seconds);
    }

    /// Returns the current counters.
    ///
    /// # Example
    /// ```
    /// use std::time::Duration;
    ///
    /// use tuplecalc::service::stats::Stats;
    ///
    /// let stats = Stats::new();
    /// assert_eq!(stats.snapshot().avg_time, 0.0);
    ///
    /// stats.record(Duration::from_millis(100));
    /// stats.record(Duration::from_millis(300));
    ///
    /// let snapshot = stats.snapshot();
    /// assert_eq!(snapshot.requests, 2);
    /// assert!((snapshot.avg_time - 0.2).abs() < 1e-9);
    /// assert!((snapshot.max_time - 0.3).abs() < 1e-9);
    /// ```
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let counters = *self.inner.lock();
        let avg_time = if counters.requests == 0 {
            0.0
        } else {
            counters.total_time / counters.requests as f64
        };

        Snapshot { requests: counters.requests,
                   avg_time,
                   max_time: counters.max_time }
    }
}
