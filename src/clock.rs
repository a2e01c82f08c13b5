//! Millisecond time source for fast-mode interval measurement.

/// A monotonic millisecond counter.
///
/// The value may wrap around `u32::MAX`; the decoder measures intervals
/// with wrapping subtraction, so wraparound is harmless as long as two
/// consecutive events are less than ~49 days apart.
pub trait MillisClock {
    /// Current timestamp in milliseconds.
    fn now_ms(&mut self) -> u32;
}

impl<F> MillisClock for F
where
    F: FnMut() -> u32,
{
    fn now_ms(&mut self) -> u32 {
        self()
    }
}

/// [`MillisClock`] backed by the Embassy time driver.
///
/// Requires the `time` feature and a time driver linked into the firmware
/// (e.g. `embassy-rp` with `time-driver`).
#[cfg(feature = "time")]
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

#[cfg(feature = "time")]
impl MillisClock for EmbassyClock {
    fn now_ms(&mut self) -> u32 {
        // Truncation is the intended wraparound.
        embassy_time::Instant::now().as_millis() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    #[test]
    fn closure_clock_reads_through() {
        let time = Cell::new(5u32);
        let mut clock = || time.get();
        assert_eq!(clock.now_ms(), 5);
        time.set(1234);
        assert_eq!(clock.now_ms(), 1234);
    }
}
