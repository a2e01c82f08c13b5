//! Decoder for two-phase quadrature rotary encoders.
//!
//! Turns successive readings of channel A and channel B into signed step
//! deltas, for control code that polls the encoder or wakes on every phase
//! change.
//!
//! # Architecture
//!
//! The crate is split into two layers:
//!
//! - **[`QuadratureDecoder`]** — pure state machine fed with
//!   [`PhaseState`] samples and millisecond timestamps. No hardware access.
//! - **[`Encoder`]** — owns two [`embedded_hal::digital::InputPin`]s and a
//!   [`MillisClock`], samples them and forwards to the decoder.
//!
//! # Resolutions
//!
//! - [`Resolution::High`] — one event per quarter-step, four per click.
//!   Double-bit changes (a missed quarter-step) count as two steps.
//! - [`Resolution::Normal`] — one event per click, on the falling edge of
//!   channel A.
//!
//! # Fast mode
//!
//! When two steps arrive within [`EncoderConfig::fast_trigger_ms`], the
//! delta is multiplied by [`EncoderConfig::fast_multiplier`]. In high
//! resolution this is evaluated once per click, when both channels are
//! high, and the interval is measured from one such detent to the next.
//!
//! # Quick start
//!
//! ```
//! use quadrature_encoder::{EncoderConfig, PhaseState, QuadratureDecoder, Resolution};
//!
//! let config = EncoderConfig::new().resolution(Resolution::High);
//! let mut decoder = QuadratureDecoder::new(PhaseState::new(false, false), &config);
//!
//! assert_eq!(decoder.update(PhaseState::new(false, true), 0), 1);
//! assert_eq!(decoder.update(PhaseState::new(false, true), 1), 0);
//! ```
//!
//! # Features
//!
//! - **`defmt`** — `defmt::Format` implementations and decoder trace logs.
//! - **`time`** — `EmbassyClock`, a [`MillisClock`] backed by `embassy-time`.

#![cfg_attr(not(test), no_std)]

#[cfg(feature = "time")]
pub use clock::EmbassyClock;
pub use clock::MillisClock;
pub use config::{EncoderConfig, Resolution};
pub use decoder::QuadratureDecoder;
pub use encoder::Encoder;
pub use error::EncoderError;
pub use phase::{PhaseState, HIGH_RES_DELTAS};

mod clock;
mod config;
mod decoder;
mod encoder;
mod error;
mod phase;
