use thiserror::Error;

use crate::{ColorError, Kind};

/// Errors that can occur when building or reading interpolated values.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The two endpoints are of different kinds.
    #[error("cannot interpolate from a {start} to a {end}")]
    KindMismatch { start: Kind, end: Kind },

    /// A value was read as a kind it does not have.
    #[error("expected a {expected} value, found a {found}")]
    Coercion { expected: Kind, found: Kind },

    /// A color could not be built from its components.
    #[error("color component extraction failed: {0}")]
    ComponentExtraction(#[from] ColorError),
}
