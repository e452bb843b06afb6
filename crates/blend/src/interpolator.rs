//! Interpolators over runtime-typed [`Value`]s.
//!
//! # Dispatch
//!
//! [`interpolate`] inspects the [`Kind`] of both endpoints and picks one of
//! three strategies:
//!
//! - **Color**: each of red, green, blue, and alpha is blended independently
//! - **Sequence**: elements are blended by position, and the output always has
//!   the length of the end value (see [`lerp_sequence`])
//! - **Scalar**: `start * (1 - t) + end * t`
//!
//! Endpoints of different kinds are rejected when the interpolator is built,
//! so evaluating an [`Interpolator`] never fails.
//!
//! # Parameter
//!
//! By default `t` is not bounds checked and values outside `[0, 1]`
//! extrapolate linearly. Use [`interpolate_with`] and a [`Config`] with
//! [`Extrapolation::Clamp`](crate::Extrapolation::Clamp) to pin `t` to the
//! endpoints instead.


use crate::{Color, Config, Error, Kind, Lerp, Value, lerp_sequence};

/// A reusable blend between two endpoints of the same kind.
///
/// An `Interpolator` owns its endpoints and never mutates them, so it can be
/// evaluated any number of times and shared freely between threads.
///
/// # Example
///
/// ```
/// use blend::{Value, interpolate};
///
/// let width = interpolate(10.0, 20.0).unwrap();
/// assert_eq!(width.at(0.5), Value::Scalar(15.0));
///
/// let path = interpolate(vec![1.0, 2.0], vec![10.0, 20.0, 30.0]).unwrap();
/// assert_eq!(path.at(0.5), Value::Sequence(vec![5.5, 11.0, 30.0]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Interpolator {
    endpoints: Endpoints,
    config: Config,
}

#[derive(Debug, Clone, PartialEq)]
enum Endpoints {
    Scalar(f64, f64),
    Color(Color, Color),
    Sequence(Vec<f64>, Vec<f64>),
}

impl Endpoints {
    fn kind(&self) -> Kind {
        match self {
            Endpoints::Scalar(..) => Kind::Scalar,
            Endpoints::Color(..) => Kind::Color,
            Endpoints::Sequence(..) => Kind::Sequence,
        }
    }
}

/// Builds an interpolator from `start` to `end` using the default [`Config`].
///
/// # Errors
///
/// Returns [`Error::KindMismatch`] if the endpoints are of different kinds.
pub fn interpolate(
    start: impl Into<Value>,
    end: impl Into<Value>,
) -> Result<Interpolator, Error> {
    interpolate_with(start, end, &Config::default())
}

/// Builds an interpolator from `start` to `end` with the given [`Config`].
///
/// # Errors
///
/// Returns [`Error::KindMismatch`] if the endpoints are of different kinds.
pub fn interpolate_with(
    start: impl Into<Value>,
    end: impl Into<Value>,
    config: &Config,
) -> Result<Interpolator, Error> {
    let endpoints = match (start.into(), end.into()) {
        (Value::Color(a), Value::Color(b)) => Endpoints::Color(a, b),
        (Value::Sequence(a), Value::Sequence(b)) => {
            if a.len() != b.len() {
                log::trace!(
                    "sequence lengths differ ({} -> {}), output follows the end",
                    a.len(),
                    b.len()
                );
            }
            Endpoints::Sequence(a, b)
        }
        (Value::Scalar(a), Value::Scalar(b)) => Endpoints::Scalar(a, b),
        (a, b) => {
            let error = Error::KindMismatch {
                start: a.kind(),
                end: b.kind(),
            };
            log::debug!("rejected endpoints: {error}");
            return Err(error);
        }
    };

    log::trace!(
        "built {} interpolator ({:?})",
        endpoints.kind(),
        config.extrapolation()
    );

    Ok(Interpolator {
        endpoints,
        config: *config,
    })
}

impl Interpolator {
    /// Evaluates the blend at `t`.
    ///
    /// `t = 0` yields the start value and `t = 1` the end value. How other
    /// values are treated depends on the configured
    /// [`Extrapolation`](crate::Extrapolation).
    #[must_use]
    pub fn at(&self, t: f64) -> Value {
        let t = self.config.extrapolation().apply(t);
        match &self.endpoints {
            Endpoints::Scalar(a, b) => Value::Scalar(a.lerp(b, t)),
            Endpoints::Color(a, b) => Value::Color(a.lerp(b, t)),
            Endpoints::Sequence(a, b) => Value::Sequence(lerp_sequence(a, b, t)),
        }
    }

    /// Returns the kind shared by both endpoints.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.endpoints.kind()
    }

    /// Returns copies of the start and end values.
    #[must_use]
    pub fn endpoints(&self) -> (Value, Value) {
        match &self.endpoints {
            Endpoints::Scalar(a, b) => (Value::Scalar(*a), Value::Scalar(*b)),
            Endpoints::Color(a, b) => (Value::Color(*a), Value::Color(*b)),
            Endpoints::Sequence(a, b) => {
                (Value::Sequence(a.clone()), Value::Sequence(b.clone()))
            }
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Converts this interpolator into a plain `Fn(f64) -> Value` closure.
    pub fn into_fn(self) -> impl Fn(f64) -> Value + Send + Sync {
        move |t| self.at(t)
    }
}
