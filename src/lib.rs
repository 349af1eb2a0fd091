#![doc = include_str!("../README.md")]

pub use crate::batch::{BatchReport, Triplet, decompose_batch};
pub use crate::config::{ConfigError, EarthModel, EllipsoidModel};
pub use crate::decompose::{TrackVerifier, decompose, direct_positional_error};
pub use crate::error::{Error, Result};
pub use crate::types::*;

mod batch;
pub mod config;
mod decompose;
mod error;
pub mod geodesic;
pub mod projection;
mod types;
