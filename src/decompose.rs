//! Decomposition of a forecast position error into DPE, CTE and ATE
//!
//! Given the last two observed fixes `ob0 -> ob1` and a forecast `fc1` valid
//! at the time of `ob1`, the error vector `ob1 -> fc1` is split into a part
//! perpendicular to the observed great-circle track (cross-track) and a part
//! along it (along-track).
//!
//! With `d` the distance from `ob1` to `fc1`, `R` the sphere radius and `θ`
//! the angle at `ob1` between the direction of travel and the direction to
//! `fc1`:
//!
//! ```text
//! cte = asin(sin(d/R) · sin θ) · R
//! ate = ± acos(cos(d/R) / cos(cte/R)) · R
//! ```
//!
//! Sign conventions:
//!
//! - positive CTE: the forecast lies to the right of the direction of travel
//!   (seen from above, looking along the track)
//! - positive ATE: the closest point on the track lies ahead of `ob1`, i.e.
//!   the forecast is too fast
//!
//! The direction of travel at `ob1` is taken as the reverse of the azimuth
//! from `ob1` back to `ob0`, so all angles are measured at the same vertex.

use crate::config::EarthModel;
use crate::error::{Error, Result};
use crate::geodesic::{GeodesicSolver, Solver, normalize_azimuth};
use crate::types::{ErrorResult, GeoPoint, TrackSegment};
use tracing::{debug, trace};

/// Decomposes forecast errors against observed tracks
///
/// Holds one [`EarthModel`] and the solver built from it, so every geodesic
/// query of a decomposition runs on the same model. Build it once and reuse
/// it for all forecasts.
#[derive(Debug, Clone)]
pub struct TrackVerifier<S = Solver> {
    model: EarthModel,
    solver: S,
}

impl TrackVerifier<Solver> {
    /// Create a verifier with the solver selected by `model`
    ///
    /// Returns [`Error::InvalidEarthModel`] if the radius is not finite and
    /// positive.
    pub fn new(model: EarthModel) -> Result<Self> {
        let solver = Solver::from_model(&model);
        Self::with_solver(model, solver)
    }
}

impl Default for TrackVerifier<Solver> {
    fn default() -> Self {
        let model = EarthModel::default();
        let solver = Solver::from_model(&model);
        Self { model, solver }
    }
}

impl<S: GeodesicSolver> TrackVerifier<S> {
    /// Create a verifier around a custom geodesic solver
    ///
    /// `model.radius_m` and `model.unit` are still used by the decomposition;
    /// `model.ellipsoid_model` is ignored.
    pub fn with_solver(model: EarthModel, solver: S) -> Result<Self> {
        model.check().map_err(Error::InvalidEarthModel)?;
        Ok(Self { model, solver })
    }

    pub fn model(&self) -> &EarthModel {
        &self.model
    }

    pub fn solver(&self) -> &S {
        &self.solver
    }

    /// Decompose the error of `fc1` against the observed fixes `ob0 -> ob1`
    ///
    /// # Errors
    ///
    /// - [`Error::CoordinateOutOfRange`] for invalid coordinates
    /// - [`Error::DegenerateTrack`] if `ob0` and `ob1` coincide
    /// - [`Error::GeodesicSolver`] propagated from the solver
    /// - [`Error::NumericDomain`] if an intermediate value is not finite
    pub fn decompose(&self, ob0: GeoPoint, ob1: GeoPoint, fc1: GeoPoint) -> Result<ErrorResult> {
        let segment = TrackSegment::new(ob0, ob1)?;
        self.decompose_segment(&segment, fc1)
    }

    /// Same as [`TrackVerifier::decompose`] for an already validated segment
    pub fn decompose_segment(&self, segment: &TrackSegment, fc1: GeoPoint) -> Result<ErrorResult> {
        let fc1 = fc1.checked()?;
        let ob1 = segment.ob1();

        if fc1.approx_eq(&ob1) {
            return Ok(ErrorResult::zero(self.model.unit));
        }

        let back = self.solver.inverse(ob1, segment.ob0())?;
        let to_forecast = self.solver.inverse(ob1, fc1)?;

        let radius = self.model.radius_m;
        let distance = finite("forecast distance", to_forecast.distance_m)?;
        let delta = distance / radius;

        let track_azimuth = normalize_azimuth(back.forward_azimuth + 180.0);
        let theta = (to_forecast.forward_azimuth - track_azimuth).to_radians();

        let cross_track = clamp_unit("sine of cross-track angle", delta.sin() * theta.sin())?.asin();
        let cte = finite("cross-track error", cross_track * radius)?;

        let cos_along_track = clamp_unit(
            "cosine of along-track angle",
            delta.cos() / cross_track.cos(),
        )?;
        // a leg of the right triangle never exceeds its hypotenuse
        let along_track = (cos_along_track.acos() * radius).min(distance);
        // the foot of the perpendicular lies ahead of ob1 when the forecast
        // bears within 90° of the direction of travel
        let ate = finite("along-track error", along_track.copysign(theta.cos()))?;

        debug!(
            ob0 = %segment.ob0(),
            %ob1,
            %fc1,
            track_azimuth,
            forecast_azimuth = to_forecast.forward_azimuth,
            distance_m = distance,
            cte_m = cte,
            ate_m = ate,
            "decomposed forecast error"
        );

        Ok(ErrorResult::from_meters(distance, cte, ate, self.model.unit))
    }

    /// Direct positional error between the observed and forecast positions
    ///
    /// Needs no track, only `ob1` and `fc1`. Returned in the model's unit.
    pub fn direct_positional_error(&self, ob1: GeoPoint, fc1: GeoPoint) -> Result<f64> {
        let ob1 = ob1.checked()?;
        let fc1 = fc1.checked()?;

        if fc1.approx_eq(&ob1) {
            return Ok(0.0);
        }

        let inverse = self.solver.inverse(ob1, fc1)?;
        let distance = finite("forecast distance", inverse.distance_m)?;
        Ok(self.model.unit.from_meters(distance))
    }
}

/// Decompose the error of `fc1` against `ob0 -> ob1` under `model`
///
/// Builds a [`TrackVerifier`] for a single call. When verifying many
/// forecasts, create the verifier once instead.
pub fn decompose(ob0: GeoPoint, ob1: GeoPoint, fc1: GeoPoint, model: &EarthModel) -> Result<ErrorResult> {
    TrackVerifier::new(*model)?.decompose(ob0, ob1, fc1)
}

/// Direct positional error between `ob1` and `fc1` under `model`
pub fn direct_positional_error(ob1: GeoPoint, fc1: GeoPoint, model: &EarthModel) -> Result<f64> {
    TrackVerifier::new(*model)?.direct_positional_error(ob1, fc1)
}

/// Bring an argument of `asin`/`acos` back into `[-1, 1]`
///
/// Rounding pushes the ratio fractionally outside the domain when the
/// forecast lies almost exactly across the track. NaN cannot be clamped.
fn clamp_unit(quantity: &'static str, value: f64) -> Result<f64> {
    if value.is_nan() {
        return Err(Error::NumericDomain { quantity, value });
    }

    let clamped = value.clamp(-1.0, 1.0);
    if clamped != value {
        trace!(quantity, value, "clamped to unit range");
    }
    Ok(clamped)
}

fn finite(quantity: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NumericDomain { quantity, value })
    }
}
