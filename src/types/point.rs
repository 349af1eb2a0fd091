use crate::error::{Error, Result};
use std::fmt;

/// A geographic position in decimal degrees
///
/// Latitude is in `[-90, 90]`. Longitude is normalized to `[-180, 180)` by
/// the checked constructors, so azimuth and longitude comparisons never
/// have to care about wrap-around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
}

impl GeoPoint {
    /// Create a validated point, normalizing the longitude
    ///
    /// Returns [`Error::CoordinateOutOfRange`] if either coordinate is not
    /// finite or the latitude lies outside `[-90, 90]`.
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        let point = Self::lat_lon(lat, lon);
        if !point.is_valid() {
            return Err(Error::CoordinateOutOfRange { lat, lon });
        }

        Ok(Self {
            lat,
            lon: normalize_longitude(lon),
        })
    }

    /// Create a point without validation or normalization
    pub const fn lat_lon(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Check that the coordinates are finite and the latitude is in range
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite() && (-90.0..=90.0).contains(&self.lat)
    }

    /// Validate and normalize a point built with [`GeoPoint::lat_lon`]
    pub fn checked(self) -> Result<Self> {
        Self::new(self.lat, self.lon)
    }

    /// Whether both coordinates match to floating point precision
    ///
    /// Longitudes are compared after normalization, so `180` and `-180`
    /// are the same meridian. At a pole every longitude names the same
    /// position, so only the latitudes are compared there.
    pub fn approx_eq(&self, other: &GeoPoint) -> bool {
        let dlat = (self.lat - other.lat).abs();
        if dlat > f64::EPSILON * self.lat.abs().max(other.lat.abs()).max(1.0) {
            return false;
        }
        if self.is_at_pole() {
            return true;
        }

        let dlon = longitude_difference(self.lon, other.lon).abs();
        dlon <= f64::EPSILON * 180.0
    }

    /// Whether the latitude is ±90° to floating point precision
    pub fn is_at_pole(&self) -> bool {
        (self.lat.abs() - 90.0).abs() <= f64::EPSILON * 90.0
    }

    /// Return a copy displaced by `(dlat, dlon)` degrees
    ///
    /// The new longitude is normalized to `[-180, 180)`.
    pub fn displaced_by(&self, dlat: f64, dlon: f64) -> Result<Self> {
        Self::new(self.lat + dlat, self.lon + dlon)
    }

    /// Blend this point with another
    ///
    /// An `amount` of 0 returns this point and 1 returns `other`. In between,
    /// latitude is blended linearly and longitude along the shorter way
    /// around the globe, so tracks crossing the antimeridian interpolate
    /// through it instead of across the whole map.
    pub fn interpolate(&self, other: &GeoPoint, amount: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&amount) {
            return Err(Error::InvalidFraction(amount));
        }

        let lat = self.lat + amount * (other.lat - self.lat);
        let lon = self.lon + amount * longitude_difference(self.lon, other.lon);
        Self::new(lat, lon)
    }

    pub(crate) fn lat_radians(&self) -> f64 {
        self.lat.to_radians()
    }

    pub(crate) fn lon_radians(&self) -> f64 {
        self.lon.to_radians()
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

/// Wrap a longitude (or any angle in degrees) into `[-180, 180)`
pub fn normalize_longitude(lon: f64) -> f64 {
    if (-180.0..180.0).contains(&lon) {
        return lon;
    }

    let wrapped = (lon + 180.0).rem_euclid(360.0) - 180.0;
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 180.0 { wrapped - 360.0 } else { wrapped }
}

/// Shortest signed longitude difference from `from` to `to`, in `[-180, 180)`
pub fn longitude_difference(from: f64, to: f64) -> f64 {
    normalize_longitude(to - from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use claims::{assert_err, assert_ok};
    use insta::assert_compact_debug_snapshot;

    #[test]
    fn new_normalizes_longitude() {
        let point = assert_ok!(GeoPoint::new(-10.0, 190.0));
        assert_eq!(point.lat, -10.0);
        assert_eq!(point.lon, -170.0);
    }

    #[test]
    fn new_rejects_out_of_range_latitude() {
        let result = GeoPoint::new(91.0, 0.0);
        assert_compact_debug_snapshot!(result.unwrap_err(), @"CoordinateOutOfRange { lat: 91.0, lon: 0.0 }");
    }

    #[test]
    fn new_rejects_non_finite() {
        assert_err!(GeoPoint::new(f64::NAN, 0.0));
        assert_err!(GeoPoint::new(0.0, f64::INFINITY));
    }

    #[test]
    fn poles_are_valid() {
        assert_ok!(GeoPoint::new(90.0, 0.0));
        assert_ok!(GeoPoint::new(-90.0, 0.0));
    }

    #[test]
    fn normalize_longitude_range() {
        assert_eq!(normalize_longitude(0.0), 0.0);
        assert_eq!(normalize_longitude(180.0), -180.0);
        assert_eq!(normalize_longitude(-180.0), -180.0);
        assert_eq!(normalize_longitude(540.0), -180.0);
        assert_eq!(normalize_longitude(-190.0), 170.0);
        assert_eq!(normalize_longitude(359.0), -1.0);
    }

    #[test]
    fn longitude_difference_takes_short_way() {
        assert_eq!(longitude_difference(170.0, -170.0), 20.0);
        assert_eq!(longitude_difference(-170.0, 170.0), -20.0);
        assert_eq!(longitude_difference(10.0, 30.0), 20.0);
    }

    #[test]
    fn approx_eq_across_antimeridian() {
        let east = GeoPoint::lat_lon(10.0, 180.0);
        let west = GeoPoint::lat_lon(10.0, -180.0);
        assert!(east.approx_eq(&west));
        assert!(!east.approx_eq(&GeoPoint::lat_lon(10.0, 179.9)));
    }

    #[test]
    fn approx_eq_at_poles_ignores_longitude() {
        assert!(GeoPoint::lat_lon(90.0, 0.0).approx_eq(&GeoPoint::lat_lon(90.0, 45.0)));
        assert!(GeoPoint::lat_lon(-90.0, 10.0).approx_eq(&GeoPoint::lat_lon(-90.0, -170.0)));
        assert!(!GeoPoint::lat_lon(90.0, 0.0).approx_eq(&GeoPoint::lat_lon(-90.0, 0.0)));
        assert!(!GeoPoint::lat_lon(89.9, 0.0).approx_eq(&GeoPoint::lat_lon(89.9, 45.0)));
    }

    #[test]
    fn displaced_by_wraps() {
        let point = GeoPoint::lat_lon(-10.0, 175.0);
        let displaced = assert_ok!(point.displaced_by(1.0, 10.0));
        assert_eq!(displaced.lat, -9.0);
        assert_eq!(displaced.lon, -175.0);

        assert_err!(point.displaced_by(-81.0, 0.0));
    }

    #[test]
    fn interpolate_endpoints() {
        let a = GeoPoint::lat_lon(-10.2, 94.4);
        let b = GeoPoint::lat_lon(-10.4, 94.6);

        let start = assert_ok!(a.interpolate(&b, 0.0));
        assert_eq!(start, a);
        let end = assert_ok!(a.interpolate(&b, 1.0));
        assert_abs_diff_eq!(end.lat, b.lat, epsilon = 1e-12);
        assert_abs_diff_eq!(end.lon, b.lon, epsilon = 1e-12);
    }

    #[test]
    fn interpolate_across_antimeridian() {
        let a = GeoPoint::lat_lon(0.0, 170.0);
        let b = GeoPoint::lat_lon(10.0, -170.0);

        let mid = assert_ok!(a.interpolate(&b, 0.5));
        assert_abs_diff_eq!(mid.lat, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mid.lon, -180.0, epsilon = 1e-12);
    }

    #[test]
    fn interpolate_rejects_bad_amount() {
        let a = GeoPoint::lat_lon(0.0, 0.0);
        let b = GeoPoint::lat_lon(1.0, 1.0);
        assert_compact_debug_snapshot!(a.interpolate(&b, 1.5).unwrap_err(), @"InvalidFraction(1.5)");
        assert_err!(a.interpolate(&b, -0.1));
    }

    #[test]
    fn display() {
        assert_eq!(GeoPoint::lat_lon(-10.25, 94.5).to_string(), "(-10.25, 94.5)");
    }
}
