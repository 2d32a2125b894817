//! Progression rules for successive blink intervals

const PROGRESSION_NAME_ARITHMETIC: &str = "arithmetic";
const PROGRESSION_NAME_GEOMETRIC: &str = "geometric";

const PROGRESSION_ID_ARITHMETIC: u8 = 0;
const PROGRESSION_ID_GEOMETRIC: u8 = 1;

/// Rule that derives the next blink interval from the previous one
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Progression {
    /// Add a fixed step to every interval
    #[default]
    Arithmetic = PROGRESSION_ID_ARITHMETIC,
    /// Multiply every interval by a fixed ratio, truncating to whole milliseconds
    Geometric = PROGRESSION_ID_GEOMETRIC,
}

impl Progression {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PROGRESSION_ID_ARITHMETIC => Self::Arithmetic,
            PROGRESSION_ID_GEOMETRIC => Self::Geometric,
            _ => return None,
        })
    }

    pub fn parse_from_str(name: &str) -> Option<Self> {
        Some(match name {
            PROGRESSION_NAME_ARITHMETIC => Self::Arithmetic,
            PROGRESSION_NAME_GEOMETRIC => Self::Geometric,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Arithmetic => PROGRESSION_NAME_ARITHMETIC,
            Self::Geometric => PROGRESSION_NAME_GEOMETRIC,
        }
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// Apply the rule once
    ///
    /// `step_ms` is only used by [`Progression::Arithmetic`], `ratio` only by
    /// [`Progression::Geometric`]. The geometric product is floored, so
    /// rounding error accumulates from step to step.
    ///
    /// Returns `None` if the next interval does not fit in `u32` milliseconds.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn next_period(self, current_ms: u32, step_ms: u32, ratio: f64) -> Option<u32> {
        match self {
            Self::Arithmetic => current_ms.checked_add(step_ms),
            Self::Geometric => {
                let next = libm::floor(f64::from(current_ms) * ratio);
                if !next.is_finite() || next < 0.0 || next > f64::from(u32::MAX) {
                    return None;
                }
                Some(next as u32)
            }
        }
    }
}
