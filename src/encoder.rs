//! Hardware-facing encoder interface.
//!
//! [`Encoder`] owns the two channel inputs and a millisecond clock, and
//! forwards every sample to a [`QuadratureDecoder`].

use embassy_futures::select::{select, Either};
use embedded_hal::digital::InputPin;
use embedded_hal_async::digital::Wait;

use crate::clock::MillisClock;
use crate::config::{EncoderConfig, Resolution};
use crate::decoder::QuadratureDecoder;
use crate::error::EncoderError;
use crate::phase::PhaseState;

/// A two-phase quadrature rotary encoder.
///
/// Works the same whether [`delta_value`](Self::delta_value) is called
/// from a polling loop or right after a change notification. Calls must
/// not overlap; `&mut self` enforces that within safe code.
///
/// # Example
///
/// ```ignore
/// use quadrature_encoder::{EmbassyClock, Encoder, EncoderConfig, Resolution};
///
/// let config = EncoderConfig::new().resolution(Resolution::High).fast_mode(50, 4);
/// let mut encoder = Encoder::new(pin_a, pin_b, EmbassyClock, config)?;
///
/// loop {
///     encoder.wait_for_change().await?;
///     value += encoder.delta_value()?;
/// }
/// ```
pub struct Encoder<A, B, C> {
    pin_a: A,
    pin_b: B,
    clock: C,
    config: EncoderConfig,
    decoder: QuadratureDecoder,
}

impl<A, B, C> Encoder<A, B, C>
where
    A: InputPin,
    B: InputPin<Error = A::Error>,
    C: MillisClock,
{
    /// Create an encoder and sample both channels once as the starting state.
    ///
    /// # Arguments
    /// * `pin_a` — channel A input, already configured (pull-ups per
    ///   [`EncoderConfig::pull_up`])
    /// * `pin_b` — channel B input
    /// * `clock` — millisecond time source for fast mode
    /// * `config` — resolution and fast-mode parameters
    ///
    /// # Errors
    /// * [`EncoderError::Pin`] if either channel cannot be read
    pub fn new(
        mut pin_a: A,
        mut pin_b: B,
        clock: C,
        config: EncoderConfig,
    ) -> Result<Self, EncoderError<A::Error>> {
        let initial = read_phase(&mut pin_a, &mut pin_b)?;

        Ok(Self {
            pin_a,
            pin_b,
            clock,
            config,
            decoder: QuadratureDecoder::new(initial, &config),
        })
    }

    /// Sample both channels and return the delta since the previous call.
    ///
    /// In [`Resolution::High`] a click yields up to four events; in
    /// [`Resolution::Normal`] it yields one. Zero means no step. Fast mode
    /// multiplies the result when clicks arrive within
    /// [`EncoderConfig::fast_trigger_ms`] of each other.
    ///
    /// # Errors
    /// * [`EncoderError::Pin`] if either channel cannot be read; the
    ///   decoder state is left untouched in that case
    pub fn delta_value(&mut self) -> Result<i32, EncoderError<A::Error>> {
        let current = read_phase(&mut self.pin_a, &mut self.pin_b)?;
        let now = self.clock.now_ms();
        Ok(self.decoder.update(current, now))
    }

    /// Phase levels seen on the most recent sample.
    pub fn phase(&self) -> PhaseState {
        self.decoder.phase()
    }

    pub fn resolution(&self) -> Resolution {
        self.decoder.resolution()
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Give back the pins and the clock.
    pub fn release(self) -> (A, B, C) {
        (self.pin_a, self.pin_b, self.clock)
    }
}

impl<A, B, C> Encoder<A, B, C>
where
    A: InputPin + Wait,
    B: InputPin<Error = A::Error> + Wait,
    C: MillisClock,
{
    /// Wait until either channel changes level.
    ///
    /// This is the notification hook: await it, then call
    /// [`delta_value`](Self::delta_value). The encoder itself never waits.
    pub async fn wait_for_change(&mut self) -> Result<(), EncoderError<A::Error>> {
        match select(self.pin_a.wait_for_any_edge(), self.pin_b.wait_for_any_edge()).await {
            Either::First(result) => result?,
            Either::Second(result) => result?,
        }
        Ok(())
    }
}

/// Read channel A then channel B.
fn read_phase<A, B>(pin_a: &mut A, pin_b: &mut B) -> Result<PhaseState, A::Error>
where
    A: InputPin,
    B: InputPin<Error = A::Error>,
{
    let a = pin_a.is_high()?;
    let b = pin_b.is_high()?;
    Ok(PhaseState::new(a, b))
}

// ── Unit Tests ───────────────────────────────────────────────────────
