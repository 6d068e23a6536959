use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Account limit in reais, as set by the limit slider.
///
/// Always lies in `[Limit::MIN, Limit::MAX]` on a multiple of [`Limit::STEP`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Limit(u32);

impl Limit {
    pub const MIN: u32 = 500;
    pub const MAX: u32 = 10_000;
    pub const STEP: u32 = 100;

    /// Creates a limit from an exact value.
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::LimitOutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        if value % Self::STEP != 0 {
            return Err(ValidationError::LimitOffStep {
                value,
                step: Self::STEP,
            });
        }
        Ok(Self(value))
    }

    /// Snaps an arbitrary slider position to the nearest step within range.
    pub fn from_slider(position: f64) -> Self {
        if position.is_nan() {
            return Self::min();
        }
        let steps = (position / f64::from(Self::STEP)).round();
        let value = (steps * f64::from(Self::STEP))
            .clamp(f64::from(Self::MIN), f64::from(Self::MAX));
        // In range after the clamp, so the cast is exact.
        Self(value as u32)
    }

    /// The lowest limit.
    pub fn min() -> Self {
        Self(Self::MIN)
    }

    /// The highest limit.
    pub fn max() -> Self {
        Self(Self::MAX)
    }

    /// Returns the value in reais.
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Moves up by `steps` increments, stopping at the maximum.
    pub fn increase(self, steps: u32) -> Self {
        let value = self
            .0
            .saturating_add(steps.saturating_mul(Self::STEP))
            .min(Self::MAX);
        Self(value)
    }

    /// Moves down by `steps` increments, stopping at the minimum.
    pub fn decrease(self, steps: u32) -> Self {
        let value = self
            .0
            .saturating_sub(steps.saturating_mul(Self::STEP))
            .max(Self::MIN);
        Self(value)
    }

    /// Position of the slider thumb, from `0.0` at the minimum to `1.0` at the maximum.
    pub fn fraction(&self) -> f64 {
        f64::from(self.0 - Self::MIN) / f64::from(Self::MAX - Self::MIN)
    }

    /// Formats as a whole amount, e.g. `R$ 2500`.
    pub fn whole(&self) -> String {
        format!("R$ {}", self.0)
    }

    /// Formats as currency with two decimals, e.g. `R$ 2500.00`.
    pub fn currency(&self) -> String {
        format!("R$ {}.00", self.0)
    }
}

impl Default for Limit {
    fn default() -> Self {
        Self(2_500)
    }
}

/// Displays the bare value, the same form [`FromStr`] accepts.
impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Limit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidLimit(s.to_string()))?;
        Self::new(value)
    }
}
