//! Earth model configuration
//!
//! One [`EarthModel`] describes the sphere radius, the geodesic model and the
//! output unit shared by every geodesic query of a decomposition. It can be
//! built in code or loaded from TOML:
//!
//! ```toml
//! radius_m = 6378137.0
//! ellipsoid_model = "wgs84"
//! unit = "meters"
//! ```

use crate::types::Unit;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default sphere radius in meters (WGS84 equatorial radius)
pub const DEFAULT_RADIUS_M: f64 = 6_378_137.0;

/// Which inverse geodesic solver answers bearing/distance queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EllipsoidModel {
    /// Great circles on a sphere of radius `radius_m`
    #[default]
    Sphere,
    /// Geodesics on the WGS84 ellipsoid
    Wgs84,
}

/// Configuration shared by all geodesic queries of one computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EarthModel {
    pub radius_m: f64,
    pub ellipsoid_model: EllipsoidModel,
    pub unit: Unit,
}

impl Default for EarthModel {
    fn default() -> Self {
        Self {
            radius_m: DEFAULT_RADIUS_M,
            ellipsoid_model: EllipsoidModel::Sphere,
            unit: Unit::NauticalMiles,
        }
    }
}

/// Configuration loading/validation error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid earth model TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid earth model: {0}")]
    Validation(String),
}

impl EarthModel {
    /// Spherical model with a custom radius
    pub fn sphere(radius_m: f64) -> Self {
        Self {
            radius_m,
            ..Self::default()
        }
    }

    /// WGS84 ellipsoidal geodesics with the default radius
    pub fn wgs84() -> Self {
        Self {
            ellipsoid_model: EllipsoidModel::Wgs84,
            ..Self::default()
        }
    }

    /// Override the output unit
    pub fn with_unit(self, unit: Unit) -> Self {
        Self { unit, ..self }
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let model: EarthModel = toml::from_str(toml)?;
        model.validate()?;
        Ok(model)
    }

    /// Read, parse and validate a TOML file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let toml = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let model = Self::from_toml_str(&toml)?;
        tracing::debug!(path = %path.display(), ?model, "loaded earth model");
        Ok(model)
    }

    /// Check that the radius is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.check().map_err(ConfigError::Validation)
    }

    pub(crate) fn check(&self) -> Result<(), String> {
        if !self.radius_m.is_finite() || self.radius_m <= 0.0 {
            return Err(format!("radius_m must be finite and positive, got {}", self.radius_m));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_matches, assert_ok};
    use insta::{assert_compact_debug_snapshot, assert_snapshot};

    #[test]
    fn default_model() {
        assert_compact_debug_snapshot!(EarthModel::default(), @"EarthModel { radius_m: 6378137.0, ellipsoid_model: Sphere, unit: NauticalMiles }");
    }

    #[test]
    fn empty_toml_is_default() {
        let model = assert_ok!(EarthModel::from_toml_str(""));
        assert_eq!(model, EarthModel::default());
    }

    #[test]
    fn full_toml() {
        let model = assert_ok!(EarthModel::from_toml_str(
            r#"
            radius_m = 6371008.8
            ellipsoid_model = "wgs84"
            unit = "meters"
            "#
        ));
        assert_compact_debug_snapshot!(model, @"EarthModel { radius_m: 6371008.8, ellipsoid_model: Wgs84, unit: Meters }");
    }

    #[test]
    fn unknown_model_is_rejected() {
        let result = EarthModel::from_toml_str(r#"ellipsoid_model = "clarke1866""#);
        assert_matches!(result, Err(ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert_err!(EarthModel::from_toml_str("radius = 1.0"));
    }

    #[test]
    fn non_positive_radius_is_rejected() {
        let error = EarthModel::from_toml_str("radius_m = -1.0").unwrap_err();
        assert_snapshot!(error, @"Invalid earth model: radius_m must be finite and positive, got -1");
    }

    #[test]
    fn missing_file() {
        let result = EarthModel::from_path("does/not/exist.toml");
        assert_matches!(result, Err(ConfigError::Io { .. }));
    }

    #[test]
    fn builders() {
        let model = EarthModel::wgs84().with_unit(Unit::Meters);
        assert_eq!(model.ellipsoid_model, EllipsoidModel::Wgs84);
        assert_eq!(model.unit, Unit::Meters);
        assert_eq!(model.radius_m, DEFAULT_RADIUS_M);

        assert_eq!(EarthModel::sphere(6_371_000.0).radius_m, 6_371_000.0);
    }
}
