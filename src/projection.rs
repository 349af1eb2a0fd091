//! Projection of a point onto the great circle of an observed track
//!
//! Points are handled as n-vectors (unit normals to the sphere). The pole of
//! the track circle is `ob0 x ob1`, so travelling from `ob0` toward `ob1` is a
//! positive rotation about it and `pole x ob0` is the direction of travel at
//! `ob0`.
//!
//! These helpers work on the unit sphere only. They give the closest point
//! `c` that verification plots mark on the track, and an independent way of
//! telling whether `c` is ahead of or behind `ob1`.

use crate::error::{Error, Result};
use crate::types::{GeoPoint, TrackSegment};
use nalgebra::Vector3;
use std::f64::consts::PI;

/// Below this norm a projected vector has no usable direction
const MIN_NORM: f64 = 1e-12;

fn to_nvector(point: GeoPoint) -> Vector3<f64> {
    let (lat, lon) = (point.lat_radians(), point.lon_radians());
    Vector3::new(lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin())
}

fn from_nvector(v: &Vector3<f64>) -> Result<GeoPoint> {
    let lat = v.z.atan2(v.x.hypot(v.y));
    let lon = v.y.atan2(v.x);
    GeoPoint::new(lat.to_degrees(), lon.to_degrees())
}

/// Unit pole of the great circle through the segment, oriented along travel
fn track_pole(segment: &TrackSegment) -> Result<Vector3<f64>> {
    let pole = to_nvector(segment.ob0()).cross(&to_nvector(segment.ob1()));
    let norm = pole.norm();
    if norm < MIN_NORM {
        // antipodal fixes do not define a single great circle
        return Err(Error::NumericDomain {
            quantity: "track pole",
            value: norm,
        });
    }
    Ok(pole / norm)
}

/// The in-plane part of `point`, normalized back onto the sphere
fn project(pole: &Vector3<f64>, point: &Vector3<f64>) -> Result<Vector3<f64>> {
    let in_plane = point - pole * pole.dot(point);
    let norm = in_plane.norm();
    if norm < MIN_NORM {
        return Err(Error::NumericDomain {
            quantity: "closest point on track",
            value: norm,
        });
    }
    Ok(in_plane / norm)
}

/// Angle of a unit vector on the track circle, measured from `ob0` in the
/// direction of travel, in `(-PI, PI]`
fn angle_from_ob0(segment: &TrackSegment, pole: &Vector3<f64>, v: &Vector3<f64>) -> f64 {
    let ob0 = to_nvector(segment.ob0());
    let ahead = pole.cross(&ob0);
    v.dot(&ahead).atan2(v.dot(&ob0))
}

fn wrap_angle(angle: f64) -> f64 {
    let wrapped = (angle + PI).rem_euclid(2.0 * PI) - PI;
    if wrapped <= -PI { wrapped + 2.0 * PI } else { wrapped }
}

/// The point on the great circle through `ob0` and `ob1` closest to `point`
///
/// Fails with [`Error::NumericDomain`] when `point` is a pole of that circle,
/// since every point of the circle is then equally close.
pub fn closest_point_on_track(segment: &TrackSegment, point: GeoPoint) -> Result<GeoPoint> {
    let pole = track_pole(segment)?;
    let c = project(&pole, &to_nvector(point))?;
    from_nvector(&c)
}

/// Signed angle in radians from `ob1` to the projection of `point`
///
/// Positive values lie ahead of `ob1` in the direction of travel, negative
/// values behind it. The result is in `(-PI, PI]`.
pub fn signed_along_track_offset(segment: &TrackSegment, point: GeoPoint) -> Result<f64> {
    let pole = track_pole(segment)?;
    let c = project(&pole, &to_nvector(point))?;

    let to_c = angle_from_ob0(segment, &pole, &c);
    let to_ob1 = angle_from_ob0(segment, &pole, &to_nvector(segment.ob1()));
    Ok(wrap_angle(to_c - to_ob1))
}

/// Signed angle in radians from the track circle to `point`, positive to the
/// right of the direction of travel
pub fn cross_track_angle(segment: &TrackSegment, point: GeoPoint) -> Result<f64> {
    let pole = track_pole(segment)?;
    let sin_xtd = pole.dot(&to_nvector(point)).clamp(-1.0, 1.0);
    Ok(-sin_xtd.asin())
}

/// Whether the projection of `point` falls ahead of `ob1`
///
/// This is the positional form of the along-track sign: the projection is
/// behind when it lies between `ob0` and `ob1` or behind `ob0`.
pub fn projection_is_ahead(segment: &TrackSegment, point: GeoPoint) -> Result<bool> {
    Ok(signed_along_track_offset(segment, point)? >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use claims::{assert_matches, assert_ok};

    fn segment(ob0: (f64, f64), ob1: (f64, f64)) -> TrackSegment {
        TrackSegment::new(GeoPoint::lat_lon(ob0.0, ob0.1), GeoPoint::lat_lon(ob1.0, ob1.1)).unwrap()
    }

    #[test]
    fn closest_point_on_meridian() {
        let track = segment((0.0, 0.0), (10.0, 0.0));
        let c = assert_ok!(closest_point_on_track(&track, GeoPoint::lat_lon(1.0, 0.1)));
        assert_abs_diff_eq!(c.lon, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.lat, 1.0, epsilon = 1e-3);
    }

    #[test]
    fn point_on_track_is_its_own_projection() {
        let track = segment((0.0, 0.0), (0.0, 10.0));
        let c = assert_ok!(closest_point_on_track(&track, GeoPoint::lat_lon(0.0, 25.0)));
        assert_abs_diff_eq!(c.lat, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.lon, 25.0, epsilon = 1e-12);
    }

    #[test]
    fn pole_of_track_has_no_projection() {
        let track = segment((0.0, 0.0), (0.0, 10.0));
        let result = closest_point_on_track(&track, GeoPoint::lat_lon(90.0, 0.0));
        assert_matches!(result, Err(Error::NumericDomain { .. }));
    }

    #[test]
    fn antipodal_fixes_have_no_pole() {
        let track = segment((0.0, 0.0), (0.0, -180.0));
        let result = closest_point_on_track(&track, GeoPoint::lat_lon(1.0, 1.0));
        assert_matches!(result, Err(Error::NumericDomain { .. }));
    }

    #[test]
    fn offset_between_fixes_is_behind() {
        let track = segment((0.0, 0.0), (10.0, 0.0));
        let offset = assert_ok!(signed_along_track_offset(&track, GeoPoint::lat_lon(1.0, 0.1)));
        assert_abs_diff_eq!(offset, -9f64.to_radians(), epsilon = 1e-4);
    }

    #[test]
    fn offset_beyond_ob1_is_ahead() {
        let track = segment((0.0, 0.0), (10.0, 0.0));
        let offset = assert_ok!(signed_along_track_offset(&track, GeoPoint::lat_lon(12.0, -0.5)));
        assert!(offset > 0.0);
        assert_abs_diff_eq!(offset, 2f64.to_radians(), epsilon = 1e-3);
    }

    #[test]
    fn offset_behind_ob0_is_behind() {
        let track = segment((-10.0, 100.0), (-10.0, 104.0));
        assert!(!assert_ok!(projection_is_ahead(&track, GeoPoint::lat_lon(-10.0, 95.0))));
    }

    #[test]
    fn cross_track_sign() {
        // northbound track, east is to the right
        let track = segment((0.0, 0.0), (10.0, 0.0));
        assert!(assert_ok!(cross_track_angle(&track, GeoPoint::lat_lon(1.0, 0.1))) > 0.0);
        assert!(assert_ok!(cross_track_angle(&track, GeoPoint::lat_lon(1.0, -0.1))) < 0.0);
    }

    #[test]
    fn wrap_angle_range() {
        assert_abs_diff_eq!(wrap_angle(PI), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(wrap_angle(-PI), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(wrap_angle(1.5 * PI), -0.5 * PI, epsilon = 1e-12);
    }
}
