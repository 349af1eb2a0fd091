//! Order-preserving batch decomposition
//!
//! Each triplet is decomposed on its own; one failure never affects the
//! others. Failures are reported per element at the end.

use crate::decompose::TrackVerifier;
use crate::error::{Error, Result};
use crate::geodesic::GeodesicSolver;
use crate::types::{ErrorResult, GeoPoint};

/// Two observed fixes and the forecast valid at the time of the second
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triplet {
    pub ob0: GeoPoint,
    pub ob1: GeoPoint,
    pub fc1: GeoPoint,
}

impl Triplet {
    pub fn new(ob0: GeoPoint, ob1: GeoPoint, fc1: GeoPoint) -> Self {
        Self { ob0, ob1, fc1 }
    }
}

impl From<((f64, f64), (f64, f64), (f64, f64))> for Triplet {
    /// Build from `(lat, lon)` tuples
    fn from((ob0, ob1, fc1): ((f64, f64), (f64, f64), (f64, f64))) -> Self {
        Self {
            ob0: GeoPoint::lat_lon(ob0.0, ob0.1),
            ob1: GeoPoint::lat_lon(ob1.0, ob1.1),
            fc1: GeoPoint::lat_lon(fc1.0, fc1.1),
        }
    }
}

/// Results of a batch, in input order
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub results: Vec<Result<ErrorResult>>,
}

impl BatchReport {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Whether every triplet was decomposed
    pub fn is_complete(&self) -> bool {
        self.results.iter().all(Result::is_ok)
    }

    /// Input indices and errors of the failed triplets
    pub fn failures(&self) -> impl Iterator<Item = (usize, &Error)> {
        self.results
            .iter()
            .enumerate()
            .filter_map(|(i, result)| result.as_ref().err().map(|error| (i, error)))
    }

    /// Successful results with their input indices
    pub fn successes(&self) -> impl Iterator<Item = (usize, &ErrorResult)> {
        self.results
            .iter()
            .enumerate()
            .filter_map(|(i, result)| result.as_ref().ok().map(|value| (i, value)))
    }
}

/// Decompose every triplet, keeping one result per input in the same order
pub fn decompose_batch<S: GeodesicSolver>(verifier: &TrackVerifier<S>, triplets: &[Triplet]) -> BatchReport {
    let results = triplets
        .iter()
        .enumerate()
        .map(|(i, triplet)| {
            let result = verifier.decompose(triplet.ob0, triplet.ob1, triplet.fc1);
            if let Err(error) = &result {
                tracing::warn!(index = i, %error, "failed to decompose triplet");
            }
            result
        })
        .collect();

    BatchReport { results }
}
