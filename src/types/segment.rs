use crate::error::{Error, Result};
use crate::types::GeoPoint;

/// The last two observed positions of a track
///
/// `ob1` is the more recent fix, so `ob0 -> ob1` is the direction of motion.
/// The two positions never coincide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackSegment {
    ob0: GeoPoint,
    ob1: GeoPoint,
}

impl TrackSegment {
    /// Validate both fixes and build the segment
    ///
    /// Returns [`Error::DegenerateTrack`] if the fixes coincide, since no
    /// direction of motion is defined then.
    pub fn new(ob0: GeoPoint, ob1: GeoPoint) -> Result<Self> {
        let ob0 = ob0.checked()?;
        let ob1 = ob1.checked()?;

        if ob0.approx_eq(&ob1) {
            return Err(Error::DegenerateTrack { point: ob1 });
        }

        Ok(Self { ob0, ob1 })
    }

    /// The earlier observed position
    pub fn ob0(&self) -> GeoPoint {
        self.ob0
    }

    /// The later observed position, valid at the forecast time
    pub fn ob1(&self) -> GeoPoint {
        self.ob1
    }

    /// The same segment travelled in the opposite direction
    pub fn reversed(&self) -> Self {
        Self {
            ob0: self.ob1,
            ob1: self.ob0,
        }
    }
}
