//! Delay adapters for the boot poll loop.
//!
//! Both implement [`embedded_hal::delay::DelayNs`]:
//!
//! - [`StdDelay`] blocks the calling thread (host builds).
//! - [`SimDelay`] never sleeps; it accumulates the requested time so tests
//!   can assert on retry pacing without waiting on the wall clock.

use core::time::Duration;

use embedded_hal::delay::DelayNs;

/// Blocking delay backed by `std::thread::sleep`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDelay;

impl StdDelay {
    pub fn new() -> Self {
        Self
    }
}

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(ns as u64));
    }

    fn delay_us(&mut self, us: u32) {
        std::thread::sleep(Duration::from_micros(us as u64));
    }

    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(ms as u64));
    }
}

/// Simulated delay: records waits instead of performing them.
#[derive(Debug, Default, Clone)]
pub struct SimDelay {
    elapsed_ns: u64,
    waits: Vec<Duration>,
}

impl SimDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total simulated time waited.
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.elapsed_ns)
    }

    /// Every individual wait, in call order.
    pub fn waits(&self) -> &[Duration] {
        &self.waits
    }

    fn record(&mut self, d: Duration) {
        self.elapsed_ns = self.elapsed_ns.saturating_add(d.as_nanos() as u64);
        self.waits.push(d);
    }
}

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.record(Duration::from_nanos(ns as u64));
    }

    fn delay_us(&mut self, us: u32) {
        self.record(Duration::from_micros(us as u64));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.record(Duration::from_millis(ms as u64));
    }
}
