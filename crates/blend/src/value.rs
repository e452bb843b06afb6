use std::fmt;

use crate::{Color, Error};

/// The kind of an interpolatable [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    Scalar,
    Color,
    Sequence,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Scalar => "scalar",
            Kind::Color => "color",
            Kind::Sequence => "sequence",
        };
        f.write_str(name)
    }
}

/// A value that can be blended by an [`Interpolator`](crate::Interpolator).
///
/// Each variant carries its data alongside its [`Kind`], so the factory can
/// match on it exhaustively instead of inspecting types at runtime.
///
/// # Examples
///
/// ```
/// use blend::{Color, Kind, Value};
///
/// assert_eq!(Value::from(1.5).kind(), Kind::Scalar);
/// assert_eq!(Value::from(Color::WHITE).kind(), Kind::Color);
/// assert_eq!(Value::from(vec![1.0, 2.0]).kind(), Kind::Sequence);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// A single real number.
    Scalar(f64),

    /// Red, green, blue, and alpha components.
    Color(Color),

    /// A positional sequence of real numbers.
    Sequence(Vec<f64>),
}

impl Value {
    /// Returns the kind of this value.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Value::Scalar(_) => Kind::Scalar,
            Value::Color(_) => Kind::Color,
            Value::Sequence(_) => Kind::Sequence,
        }
    }

    /// Returns the inner number if this is a scalar.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Coercion`] if the value is not a scalar.
    pub fn as_scalar(&self) -> Result<f64, Error> {
        match self {
            Value::Scalar(x) => Ok(*x),
            other => Err(other.coercion(Kind::Scalar)),
        }
    }

    /// Returns the inner color if this is a color.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Coercion`] if the value is not a color.
    pub fn as_color(&self) -> Result<Color, Error> {
        match self {
            Value::Color(color) => Ok(*color),
            other => Err(other.coercion(Kind::Color)),
        }
    }

    /// Returns the inner elements if this is a sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Coercion`] if the value is not a sequence.
    pub fn as_sequence(&self) -> Result<&[f64], Error> {
        match self {
            Value::Sequence(values) => Ok(values.as_slice()),
            other => Err(other.coercion(Kind::Sequence)),
        }
    }

    fn coercion(&self, expected: Kind) -> Error {
        Error::Coercion {
            expected,
            found: self.kind(),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Scalar(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Scalar(f64::from(value))
    }
}

impl From<Color> for Value {
    fn from(color: Color) -> Self {
        Value::Color(color)
    }
}

impl From<Vec<f64>> for Value {
    fn from(values: Vec<f64>) -> Self {
        Value::Sequence(values)
    }
}

impl From<&[f64]> for Value {
    fn from(values: &[f64]) -> Self {
        Value::Sequence(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Value {
    fn from(values: [f64; N]) -> Self {
        Value::Sequence(values.to_vec())
    }
}

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.as_scalar()
    }
}

impl TryFrom<Value> for Color {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.as_color()
    }
}

impl TryFrom<Value> for Vec<f64> {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Sequence(values) => Ok(values),
            other => Err(other.coercion(Kind::Sequence)),
        }
    }
}
