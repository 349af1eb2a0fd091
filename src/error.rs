use crate::GeoPoint;

/// Errors returned by the track error decomposition
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The two observed positions coincide, so there is no direction of motion
    #[error("Degenerate track: both observed positions are at {point}")]
    DegenerateTrack { point: GeoPoint },

    #[error("Coordinate out of range: lat={lat}, lon={lon}")]
    CoordinateOutOfRange { lat: f64, lon: f64 },

    /// An intermediate value left the domain of the trigonometric functions
    /// (or became NaN) even after clamping
    #[error("Numeric domain error in {quantity}: {value}")]
    NumericDomain { quantity: &'static str, value: f64 },

    /// The geodesic solver could not solve the inverse problem
    #[error("Geodesic solver failed between {from} and {to}: {reason}")]
    GeodesicSolver {
        from: GeoPoint,
        to: GeoPoint,
        reason: String,
    },

    #[error("Interpolation fraction outside [0, 1]: {0}")]
    InvalidFraction(f64),

    #[error("Invalid earth model: {0}")]
    InvalidEarthModel(String),
}

pub type Result<T> = std::result::Result<T, Error>;
