use std::str::FromStr;

use palette::{Srgb, Srgba};
use thiserror::Error;

/// An sRGB color with an alpha channel.
///
/// Components are stored as `f64` and are conventionally within `[0, 1]`,
/// but nothing here clamps them: blending past the endpoints produces
/// out-of-range components on purpose.
///
/// # Examples
///
/// ```
/// use blend::Color;
///
/// let teal: Color = "#5CD0B3".parse().unwrap();
/// assert_eq!(teal.alpha(), 1.0);
///
/// let grey = Color::rgb(0.5, 0.5, 0.5);
/// assert_eq!(grey.components(), [0.5, 0.5, 0.5, 1.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(Srgba<f64>);

/// Errors that can occur when building a [`Color`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ColorError {
    /// The wrong number of components was supplied.
    #[error("expected 4 color components, found {0}")]
    ComponentCount(usize),

    /// A hex code could not be parsed.
    #[error("invalid hex color code: {0}")]
    Hex(#[from] palette::rgb::FromHexError),
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a color from red, green, blue, and alpha components.
    #[must_use]
    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self(Srgba::new(red, green, blue, alpha))
    }

    /// Creates an opaque color from red, green, and blue components.
    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// Creates a color from a slice of exactly four components, ordered
    /// red, green, blue, alpha.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::ComponentCount`] if `components` does not have
    /// exactly four elements.
    pub fn from_components(components: &[f64]) -> Result<Self, ColorError> {
        match *components {
            [red, green, blue, alpha] => Ok(Self::new(red, green, blue, alpha)),
            _ => Err(ColorError::ComponentCount(components.len())),
        }
    }

    /// Returns the components ordered red, green, blue, alpha.
    #[must_use]
    pub fn components(&self) -> [f64; 4] {
        [self.red(), self.green(), self.blue(), self.alpha()]
    }

    #[must_use]
    pub fn red(&self) -> f64 {
        self.0.color.red
    }

    #[must_use]
    pub fn green(&self) -> f64 {
        self.0.color.green
    }

    #[must_use]
    pub fn blue(&self) -> f64 {
        self.0.color.blue
    }

    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.0.alpha
    }

    /// Returns this color with a different alpha.
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self::new(self.red(), self.green(), self.blue(), alpha)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<Srgba<f64>> for Color {
    fn from(color: Srgba<f64>) -> Self {
        Self(color)
    }
}

impl From<Srgb<f64>> for Color {
    fn from(color: Srgb<f64>) -> Self {
        Self::rgb(color.red, color.green, color.blue)
    }
}

impl From<Color> for Srgba<f64> {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl From<[f64; 4]> for Color {
    fn from([red, green, blue, alpha]: [f64; 4]) -> Self {
        Self::new(red, green, blue, alpha)
    }
}

impl TryFrom<&[f64]> for Color {
    type Error = ColorError;

    fn try_from(components: &[f64]) -> Result<Self, Self::Error> {
        Self::from_components(components)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Parses `#rgb`, `#rgba`, `#rrggbb`, or `#rrggbbaa` (the `#` is optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = Srgba::<u8>::from_str(s)
            .or_else(|_| Srgb::<u8>::from_str(s).map(Srgba::from))?;
        let color: Srgba<f64> = parsed.into_format();
        Ok(Self(color))
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn components_round_trip_in_order() {
        let color = Color::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(color.components(), [0.1, 0.2, 0.3, 0.4]);
        assert_eq!(Color::from(color.components()), color);
    }

    #[test]
    fn rgb_is_opaque() {
        assert_eq!(Color::rgb(0.2, 0.4, 0.6).alpha(), 1.0);
        assert_eq!(Color::default(), Color::BLACK);
        assert_eq!(
            Color::WHITE.with_alpha(0.0).components(),
            [1.0, 1.0, 1.0, 0.0]
        );
    }

    #[test]
    fn from_components_requires_four() {
        assert_eq!(
            Color::from_components(&[1.0, 0.5, 0.0, 1.0]).unwrap(),
            Color::new(1.0, 0.5, 0.0, 1.0)
        );
        assert!(matches!(
            Color::from_components(&[1.0, 0.5, 0.0]),
            Err(ColorError::ComponentCount(3))
        ));
        assert!(matches!(
            Color::try_from(&[0.0; 5][..]),
            Err(ColorError::ComponentCount(5))
        ));
        assert!(matches!(
            Color::from_components(&[]),
            Err(ColorError::ComponentCount(0))
        ));
    }

    #[test]
    fn parses_hex_codes() {
        let white: Color = "#FFFFFF".parse().unwrap();
        assert_eq!(white, Color::WHITE);

        let half: Color = "00000080".parse().unwrap();
        assert_eq!(half.red(), 0.0);
        assert_relative_eq!(half.alpha(), 128.0 / 255.0, epsilon = 1e-12);

        let short: Color = "#f00".parse().unwrap();
        assert_eq!(short.components(), [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn rejects_bad_hex_codes() {
        assert!(matches!("#GGGGGG".parse::<Color>(), Err(ColorError::Hex(_))));
        assert!(matches!("#12345".parse::<Color>(), Err(ColorError::Hex(_))));
    }

    #[test]
    fn palette_conversions() {
        let color = Color::new(0.25, 0.5, 0.75, 1.0);
        let srgba: Srgba<f64> = color.into();
        assert_eq!(Color::from(srgba), color);
        assert_eq!(Color::from(Srgb::new(0.25, 0.5, 0.75)), color);
    }
}
