//! Linear interpolation of scalars, colors, and numeric sequences.
//!
//! This crate blends two endpoint values at a parameter `t`, where `t = 0`
//! yields the start and `t = 1` the end. It only computes blended values;
//! driving `t` over time is left to the caller.
//!
//! - [`interpolate`]: builds an [`Interpolator`] from two runtime-typed
//!   [`Value`]s, rejecting endpoints of different kinds up front
//! - [`between`]: returns a closure for endpoints whose type is known at
//!   compile time
//! - [`Lerp`]: the per-type blending rules for `f64`, [`Color`], and
//!   sequences
//!
//! # Example
//!
//! ```
//! use blend::{Color, Value, interpolate};
//!
//! let fade = interpolate(Color::BLACK, Color::WHITE).unwrap();
//! assert_eq!(fade.at(0.5), Value::Color(Color::new(0.5, 0.5, 0.5, 1.0)));
//! ```
//!
//! # Features
//!
//! - `serde`: derives `Serialize` and `Deserialize` for [`Value`], [`Kind`],
//!   [`Color`], and [`Config`].

mod color;
mod config;
mod error;
mod interpolator;
mod lerp;
mod value;

pub use color::{Color, ColorError};
pub use config::{Config, Extrapolation};
pub use error::Error;
pub use interpolator::{Interpolator, interpolate, interpolate_with};
pub use lerp::{Lerp, between, lerp_sequence};
pub use value::{Kind, Value};
