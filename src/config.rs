//! Construction-time configuration.

/// Decoding resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resolution {
    /// Four delta events per physical click, one per quarter-step.
    High,
    /// One delta event per physical click, on the falling edge of channel A.
    #[default]
    Normal,
}

/// Options fixed when an [`Encoder`](crate::Encoder) is constructed.
///
/// With the defaults, fast mode is effectively off: the multiplier is 1.
///
/// # Example
///
/// ```
/// use quadrature_encoder::{EncoderConfig, Resolution};
///
/// let config = EncoderConfig::new()
///     .resolution(Resolution::High)
///     .fast_mode(50, 4);
/// assert_eq!(config.fast_multiplier, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderConfig {
    /// Decoding algorithm.
    pub resolution: Resolution,
    /// Enable the internal pull-ups on both channels.
    ///
    /// Only the pin-setup code reads this; decoding ignores it.
    pub pull_up: bool,
    /// Two events at most this many milliseconds apart trigger fast mode.
    pub fast_trigger_ms: u32,
    /// Factor applied to the delta while fast mode is triggered.
    pub fast_multiplier: i32,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl EncoderConfig {
    pub const fn new() -> Self {
        Self {
            resolution: Resolution::Normal,
            pull_up: true,
            fast_trigger_ms: 0,
            fast_multiplier: 1,
        }
    }

    pub const fn resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    pub const fn pull_up(mut self, pull_up: bool) -> Self {
        self.pull_up = pull_up;
        self
    }

    /// Set the fast-mode trigger interval and multiplier together.
    pub const fn fast_mode(mut self, trigger_ms: u32, multiplier: i32) -> Self {
        self.fast_trigger_ms = trigger_ms;
        self.fast_multiplier = multiplier;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = EncoderConfig::default();
        assert_eq!(config.resolution, Resolution::Normal);
        assert!(config.pull_up);
        assert_eq!(config.fast_trigger_ms, 0);
        assert_eq!(config.fast_multiplier, 1);
    }

    #[test]
    fn builder_sets_fields() {
        let config = EncoderConfig::new()
            .resolution(Resolution::High)
            .pull_up(false)
            .fast_mode(30, 8);
        assert_eq!(config.resolution, Resolution::High);
        assert!(!config.pull_up);
        assert_eq!(config.fast_trigger_ms, 30);
        assert_eq!(config.fast_multiplier, 8);
    }
}
