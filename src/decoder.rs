//! Quadrature decoding state machine.
//!
//! [`QuadratureDecoder`] is hardware-agnostic: it is fed phase samples and
//! millisecond timestamps and returns signed deltas. [`Encoder`] wraps it
//! with real input pins and a clock.
//!
//! [`Encoder`]: crate::Encoder

use crate::config::{EncoderConfig, Resolution};
use crate::phase::{PhaseState, HIGH_RES_DELTAS};

/// Decoder state for one physical encoder.
///
/// The only state carried between calls is the previous phase pair and
/// the timestamp of the last fast-mode reference event: every non-zero
/// click in normal resolution, every non-zero detent step in high
/// resolution.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QuadratureDecoder {
    previous: PhaseState,
    resolution: Resolution,
    fast_trigger_ms: u32,
    fast_multiplier: i32,
    /// `None` until the first non-zero delta of either kind.
    last_event_ms: Option<u32>,
}

impl QuadratureDecoder {
    /// Create a decoder seeded with the phase levels read at start-up.
    pub fn new(initial: PhaseState, config: &EncoderConfig) -> Self {
        Self {
            previous: initial,
            resolution: config.resolution,
            fast_trigger_ms: config.fast_trigger_ms,
            fast_multiplier: config.fast_multiplier,
            last_event_ms: None,
        }
    }

    /// Phase levels seen on the most recent update.
    pub fn phase(&self) -> PhaseState {
        self.previous
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Consume one phase sample taken at `now_ms` and return the delta
    /// since the previous sample.
    ///
    /// Zero means no step was detected. The sample always becomes the new
    /// previous state.
    pub fn update(&mut self, current: PhaseState, now_ms: u32) -> i32 {
        let delta = match self.resolution {
            Resolution::High => self.decode_high_res(current, now_ms),
            Resolution::Normal => self.decode_normal_res(current, now_ms),
        };

        self.previous = current;
        delta
    }

    // -----------------------------------------------------------------------
    // Resolution modes
    // -----------------------------------------------------------------------

    /// One event per quarter-step, classified by [`HIGH_RES_DELTAS`].
    fn decode_high_res(&mut self, current: PhaseState, now_ms: u32) -> i32 {
        if current == self.previous {
            return 0;
        }

        let code = self.previous.transition_code(current);
        let delta = i32::from(HIGH_RES_DELTAS[code as usize]);

        // A click spans four quarter-steps; only the detent boundary may
        // multiply or move the reference, so the interval is detent to detent.
        if current.is_detent() {
            self.apply_fast_mode(delta, now_ms)
        } else {
            if self.last_event_ms.is_none() {
                // First movement ever: seed the reference.
                self.record_event(delta, now_ms);
            }
            delta
        }
    }

    /// One event per click, on the falling edge of channel A.
    fn decode_normal_res(&mut self, current: PhaseState, now_ms: u32) -> i32 {
        let delta = if self.previous.a && !current.a {
            // B low on A's falling edge means clockwise.
            if current.b {
                -1
            } else {
                1
            }
        } else {
            0
        };

        self.apply_fast_mode(delta, now_ms)
    }

    // -----------------------------------------------------------------------
    // Fast mode
    // -----------------------------------------------------------------------

    /// Multiply `delta` when the previous event happened within the
    /// trigger interval, then record `now_ms` as the latest event.
    ///
    /// Zero deltas pass through and leave the reference untouched, so idle
    /// polling does not disturb the interval measurement.
    fn apply_fast_mode(&mut self, delta: i32, now_ms: u32) -> i32 {
        if delta == 0 {
            return 0;
        }

        let fast = match self.last_event_ms {
            Some(last) => now_ms.wrapping_sub(last) <= self.fast_trigger_ms,
            None => false,
        };

        self.record_event(delta, now_ms);

        if fast {
            let amplified = delta.saturating_mul(self.fast_multiplier);
            #[cfg(feature = "defmt")]
            defmt::debug!("fast mode: delta {} -> {}", delta, amplified);
            amplified
        } else {
            delta
        }
    }

    fn record_event(&mut self, delta: i32, now_ms: u32) {
        if delta != 0 {
            #[cfg(feature = "defmt")]
            defmt::trace!("step {} at {} ms", delta, now_ms);
            self.last_event_ms = Some(now_ms);
        }
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
