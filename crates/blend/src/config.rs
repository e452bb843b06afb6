/// How an [`Interpolator`](crate::Interpolator) treats a parameter outside `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Extrapolation {
    /// Continue the line past either endpoint.
    #[default]
    Linear,

    /// Pin the parameter to the nearest endpoint.
    Clamp,
}

impl Extrapolation {
    /// Maps a raw parameter according to this policy.
    ///
    /// `NaN` passes through unchanged under both policies.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Extrapolation::Linear => t,
            Extrapolation::Clamp => t.clamp(0.0, 1.0),
        }
    }
}

/// Configuration for building an [`Interpolator`](crate::Interpolator).
///
/// The default matches plain linear interpolation with no bounds checking
/// on the parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    extrapolation: Extrapolation,
}

impl Config {
    /// Creates a new config.
    #[must_use]
    pub fn new(extrapolation: Extrapolation) -> Self {
        Self { extrapolation }
    }

    /// Returns a copy of this config with a different extrapolation policy.
    #[must_use]
    pub fn with_extrapolation(self, extrapolation: Extrapolation) -> Self {
        Self { extrapolation }
    }

    /// Returns the extrapolation policy.
    #[must_use]
    pub fn extrapolation(&self) -> Extrapolation {
        self.extrapolation
    }
}
