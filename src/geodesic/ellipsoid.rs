use super::{GeodesicSolver, Inverse, checked_inverse, coincident};
use crate::error::Result;
use crate::types::GeoPoint;
use geo::{Bearing, Distance, Geodesic, Point};

/// Geodesic solver on the WGS84 ellipsoid
///
/// Delegates to Karney's algorithm in the `geo` crate, which converges for
/// nearly antipodal points as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EllipsoidalSolver;

fn to_geo(point: GeoPoint) -> Point<f64> {
    Point::new(point.lon, point.lat)
}

impl GeodesicSolver for EllipsoidalSolver {
    fn inverse(&self, from: GeoPoint, to: GeoPoint) -> Result<Inverse> {
        if from.approx_eq(&to) {
            return Err(coincident(from, to));
        }

        let (a, b) = (to_geo(from), to_geo(to));
        let inverse = Inverse {
            forward_azimuth: Geodesic::bearing(a, b),
            back_azimuth: Geodesic::bearing(b, a),
            distance_m: Geodesic::distance(a, b),
        };
        checked_inverse(from, to, inverse)
    }
}
