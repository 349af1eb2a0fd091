//! Inverse geodesic problem
//!
//! Given two points, find the azimuths and distance between them. The
//! decomposition only ever talks to a [`GeodesicSolver`], so the Earth model
//! is picked once when the solver is built.

mod ellipsoid;
mod sphere;

pub use self::ellipsoid::EllipsoidalSolver;
pub use self::sphere::SphericalSolver;

use crate::config::{EarthModel, EllipsoidModel};
use crate::error::{Error, Result};
use crate::types::{GeoPoint, normalize_longitude};

/// Solution of the inverse geodesic problem between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inverse {
    /// Bearing at `from` toward `to`, degrees clockwise from north in `(-180, 180]`
    pub forward_azimuth: f64,
    /// Bearing at `to` pointing back toward `from`, same convention
    pub back_azimuth: f64,
    /// Distance in meters
    pub distance_m: f64,
}

pub trait GeodesicSolver {
    /// Solve the inverse problem from `from` to `to`
    ///
    /// Coincident points have no defined azimuth and return
    /// [`Error::GeodesicSolver`].
    fn inverse(&self, from: GeoPoint, to: GeoPoint) -> Result<Inverse>;
}

/// Solver selected by an [`EarthModel`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Solver {
    Sphere(SphericalSolver),
    Wgs84(EllipsoidalSolver),
}

impl Solver {
    pub fn from_model(model: &EarthModel) -> Self {
        match model.ellipsoid_model {
            EllipsoidModel::Sphere => Solver::Sphere(SphericalSolver::new(model.radius_m)),
            EllipsoidModel::Wgs84 => Solver::Wgs84(EllipsoidalSolver),
        }
    }
}

impl GeodesicSolver for Solver {
    fn inverse(&self, from: GeoPoint, to: GeoPoint) -> Result<Inverse> {
        match self {
            Solver::Sphere(solver) => solver.inverse(from, to),
            Solver::Wgs84(solver) => solver.inverse(from, to),
        }
    }
}

/// Wrap an azimuth in degrees into `(-180, 180]`
pub fn normalize_azimuth(azimuth: f64) -> f64 {
    let wrapped = normalize_longitude(azimuth);
    if wrapped == -180.0 { 180.0 } else { wrapped }
}

fn coincident(from: GeoPoint, to: GeoPoint) -> Error {
    Error::GeodesicSolver {
        from,
        to,
        reason: "coincident points have no azimuth".to_string(),
    }
}

fn checked_inverse(from: GeoPoint, to: GeoPoint, inverse: Inverse) -> Result<Inverse> {
    let Inverse {
        forward_azimuth,
        back_azimuth,
        distance_m,
    } = inverse;

    if !forward_azimuth.is_finite() || !back_azimuth.is_finite() || !distance_m.is_finite() {
        return Err(Error::GeodesicSolver {
            from,
            to,
            reason: format!(
                "non-finite solution (azi1={forward_azimuth}, azi2={back_azimuth}, s12={distance_m})"
            ),
        });
    }

    Ok(Inverse {
        forward_azimuth: normalize_azimuth(forward_azimuth),
        back_azimuth: normalize_azimuth(back_azimuth),
        distance_m: distance_m.abs(),
    })
}
