use serde::{Deserialize, Serialize};

/// Meters in one international nautical mile
pub const METERS_PER_NAUTICAL_MILE: f64 = 1852.0;

/// Distance unit of an [`ErrorResult`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    #[default]
    NauticalMiles,
    Meters,
}

impl Unit {
    /// Factor converting meters into this unit
    pub fn per_meter(self) -> f64 {
        match self {
            Unit::NauticalMiles => 1.0 / METERS_PER_NAUTICAL_MILE,
            Unit::Meters => 1.0,
        }
    }

    /// Convert a distance in meters into this unit
    pub fn from_meters(self, meters: f64) -> f64 {
        match self {
            Unit::NauticalMiles => meters / METERS_PER_NAUTICAL_MILE,
            Unit::Meters => meters,
        }
    }

    /// Convert a distance in this unit back into meters
    pub fn to_meters(self, value: f64) -> f64 {
        match self {
            Unit::NauticalMiles => value * METERS_PER_NAUTICAL_MILE,
            Unit::Meters => value,
        }
    }
}

/// Decomposed position error of one forecast
///
/// - `dpe` is the direct positional error, never negative.
/// - `cte` is the cross-track error. Positive means the forecast lies to the
///   right of the observed direction of travel.
/// - `ate` is the along-track error. Positive means the forecast is ahead of
///   the observed position (fast bias), negative means behind (slow bias).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ErrorResult {
    pub dpe: f64,
    pub cte: f64,
    pub ate: f64,
    pub unit: Unit,
}

impl ErrorResult {
    /// The result for a forecast placed exactly on the observed position
    pub fn zero(unit: Unit) -> Self {
        Self {
            dpe: 0.0,
            cte: 0.0,
            ate: 0.0,
            unit,
        }
    }

    pub(crate) fn from_meters(dpe: f64, cte: f64, ate: f64, unit: Unit) -> Self {
        Self {
            dpe: unit.from_meters(dpe),
            cte: unit.from_meters(cte),
            ate: unit.from_meters(ate),
            unit,
        }
    }

    /// Express the same result in another unit
    pub fn to_unit(&self, unit: Unit) -> Self {
        if unit == self.unit {
            return *self;
        }

        Self::from_meters(
            self.unit.to_meters(self.dpe),
            self.unit.to_meters(self.cte),
            self.unit.to_meters(self.ate),
            unit,
        )
    }

    /// Whether the forecast lies to the left of the direction of travel
    pub fn is_left_of_track(&self) -> bool {
        self.cte < 0.0
    }

    /// Whether the forecast runs ahead of the observed position
    pub fn is_fast(&self) -> bool {
        self.ate > 0.0
    }
}
