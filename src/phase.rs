//! Phase samples and the high-resolution transition table.
//!
//! A transition is packed into a 4-bit code, most-significant bit first:
//!
//! ```text
//!   bit 3   bit 2   bit 1   bit 0
//!  prev A  prev B  curr A  curr B
//! ```
//!
//! [`HIGH_RES_DELTAS`] is indexed directly by that code.

/// Levels of channel A and channel B at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhaseState {
    /// Channel A level (`true` = high).
    pub a: bool,
    /// Channel B level (`true` = high).
    pub b: bool,
}

impl PhaseState {
    pub const fn new(a: bool, b: bool) -> Self {
        Self { a, b }
    }

    /// Both channels high. In high-resolution mode this is the only
    /// boundary where the fast-mode multiplier is evaluated.
    pub const fn is_detent(&self) -> bool {
        self.a && self.b
    }

    /// Pack `self` (previous) and `next` (current) into the 4-bit code.
    pub const fn transition_code(&self, next: PhaseState) -> u8 {
        (self.a as u8) << 3 | (self.b as u8) << 2 | (next.a as u8) << 1 | next.b as u8
    }
}

// ---------------------------------------------------------------------------
// High-resolution lookup table
// ---------------------------------------------------------------------------

/// Delta for every 4-bit transition code in high-resolution mode.
///
/// | Code                   | Delta |
/// |------------------------|-------|
/// | 0001, 0111, 1000, 1110 | +1    |
/// | 0010, 0100, 1011, 1101 | -1    |
/// | 0011, 1100             | +2    |
/// | 0110, 1001             | -2    |
/// | 0000, 0101, 1010, 1111 | 0     |
///
/// A double-bit change means a quarter-step was missed between samples.
/// It is counted as two steps in the direction that a clockwise
/// (`00 <-> 11`) or counter-clockwise (`01 <-> 10`) completion implies;
/// the direction of the missed step cannot actually be known.
pub const HIGH_RES_DELTAS: [i8; 16] = [
    0,  // 0000  00 -> 00
    1,  // 0001  00 -> 01
    -1, // 0010  00 -> 10
    2,  // 0011  00 -> 11 (skipped step)
    -1, // 0100  01 -> 00
    0,  // 0101  01 -> 01
    -2, // 0110  01 -> 10 (skipped step)
    1,  // 0111  01 -> 11
    1,  // 1000  10 -> 00
    -2, // 1001  10 -> 01 (skipped step)
    0,  // 1010  10 -> 10
    -1, // 1011  10 -> 11
    2,  // 1100  11 -> 00 (skipped step)
    -1, // 1101  11 -> 01
    1,  // 1110  11 -> 10
    0,  // 1111  11 -> 11
];
