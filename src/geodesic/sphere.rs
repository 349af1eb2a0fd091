use super::{GeodesicSolver, Inverse, checked_inverse, coincident};
use crate::error::Result;
use crate::types::GeoPoint;
use geo::{Bearing, Distance, Haversine, Point};

/// Sphere radius `geo::Haversine` measures distances on, in meters
const HAVERSINE_RADIUS_M: f64 = 6_371_008.8;

/// Great-circle solver on a sphere of fixed radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalSolver {
    radius_m: f64,
}

fn to_geo(point: GeoPoint) -> Point<f64> {
    Point::new(point.lon, point.lat)
}

impl SphericalSolver {
    pub fn new(radius_m: f64) -> Self {
        Self { radius_m }
    }

    pub fn radius_m(&self) -> f64 {
        self.radius_m
    }

    /// Haversine distance in meters, rescaled to this sphere
    pub fn distance(&self, from: GeoPoint, to: GeoPoint) -> f64 {
        Haversine::distance(to_geo(from), to_geo(to)) / HAVERSINE_RADIUS_M * self.radius_m
    }
}

impl GeodesicSolver for SphericalSolver {
    fn inverse(&self, from: GeoPoint, to: GeoPoint) -> Result<Inverse> {
        if from.approx_eq(&to) {
            return Err(coincident(from, to));
        }

        let (a, b) = (to_geo(from), to_geo(to));
        // bearings on a sphere do not depend on its radius
        let inverse = Inverse {
            forward_azimuth: Haversine::bearing(a, b),
            back_azimuth: Haversine::bearing(b, a),
            distance_m: self.distance(from, to),
        };
        checked_inverse(from, to, inverse)
    }
}
