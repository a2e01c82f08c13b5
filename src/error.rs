//! Errors surfaced by [`Encoder`](crate::Encoder).
//!
//! Decoding is pure arithmetic and cannot fail. What can fail is the GPIO
//! layer underneath: reading a channel level or waiting for an edge.

use core::fmt;

/// A channel input reported an error.
///
/// `E` is the pin's [`ErrorType::Error`](embedded_hal::digital::ErrorType).
/// Most HALs use [`core::convert::Infallible`], which makes this type
/// uninhabited.
#[derive(Debug, PartialEq, Eq)]
pub enum EncoderError<E> {
    /// Channel A or B could not be sampled, or waiting for its edge failed.
    Pin(E),
}

impl<E> From<E> for EncoderError<E> {
    fn from(error: E) -> Self {
        EncoderError::Pin(error)
    }
}

impl<E: fmt::Debug> fmt::Display for EncoderError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EncoderError::Pin(e) => write!(f, "encoder channel input failed: {:?}", e),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for EncoderError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            EncoderError::Pin(e) => defmt::write!(f, "encoder channel input failed: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_channel_input() {
        let error: EncoderError<&str> = "line stuck".into();
        assert_eq!(
            std::format!("{}", error),
            "encoder channel input failed: \"line stuck\""
        );
    }
}
