//! Linear interpolation for statically-typed endpoints.
//!
//! Use [`Lerp`] and [`between`] when the kind of the endpoints is known at
//! compile time. For values whose kind is only known at runtime, see
//! [`interpolate`](crate::interpolate).

use crate::Color;

/// Types that can be linearly blended toward another value of the same type.
pub trait Lerp {
    /// Blends `self` toward `end` at parameter `t`.
    ///
    /// `t = 0` yields `self` and `t = 1` yields `end`. Parameters outside
    /// `[0, 1]` extrapolate along the same line.
    #[must_use]
    fn lerp(&self, end: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(&self, end: &Self, t: f64) -> Self {
        self * (1.0 - t) + end * t
    }
}

impl Lerp for f32 {
    #[allow(clippy::cast_possible_truncation)]
    fn lerp(&self, end: &Self, t: f64) -> Self {
        f64::from(*self).lerp(&f64::from(*end), t) as f32
    }
}

/// Each component is blended independently, with no clamping.
impl Lerp for Color {
    fn lerp(&self, end: &Self, t: f64) -> Self {
        Color::new(
            self.red().lerp(&end.red(), t),
            self.green().lerp(&end.green(), t),
            self.blue().lerp(&end.blue(), t),
            self.alpha().lerp(&end.alpha(), t),
        )
    }
}

/// Blends positionally; see [`lerp_sequence`] for the length rule.
impl Lerp for Vec<f64> {
    fn lerp(&self, end: &Self, t: f64) -> Self {
        lerp_sequence(self, end, t)
    }
}

/// Blends two sequences position by position.
///
/// The result always has the length of `end`. Positions past the end of
/// `start` blend from the `end` value to itself, so they hold still at every
/// `t`. Extra trailing elements of a longer `start` are ignored.
///
/// # Example
///
/// ```
/// use blend::lerp_sequence;
///
/// let path = lerp_sequence(&[1.0, 2.0], &[10.0, 20.0, 30.0], 0.5);
/// assert_eq!(path, vec![5.5, 11.0, 30.0]);
/// ```
#[must_use]
pub fn lerp_sequence(start: &[f64], end: &[f64], t: f64) -> Vec<f64> {
    end.iter()
        .enumerate()
        .map(|(i, b)| start.get(i).unwrap_or(b).lerp(b, t))
        .collect()
}

/// Returns a closure that blends from `start` to `end`.
///
/// The closure only reads its captured endpoints, so it can be called any
/// number of times and shared across threads when `T` allows it.
///
/// # Example
///
/// ```
/// use blend::{Color, between};
///
/// let fade = between(Color::BLACK, Color::WHITE);
/// assert_eq!(fade(0.5), Color::new(0.5, 0.5, 0.5, 1.0));
///
/// let width = between(10.0, 20.0);
/// assert_eq!(width(0.25), 12.5);
/// ```
pub fn between<T: Lerp>(start: T, end: T) -> impl Fn(f64) -> T {
    move |t| start.lerp(&end, t)
}
