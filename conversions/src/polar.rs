use crate::cartesian::Cartesian2d;
use crate::AngleUnit;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Represents a point in polar coordinates. The azimuth is the right hand
/// rotation angle about the origin where +x is 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Polar {
    pub radius: f64,
    pub azimuth: f64,
}

impl Polar {
    pub fn new(radius: f64, azimuth: f64) -> Self {
        Self { radius, azimuth }
    }

    pub fn from_vec(v: &Vector2<f64>) -> Self {
        Self {
            radius: v[0],
            azimuth: v[1],
        }
    }

    pub fn to_array(&self) -> [f64; 2] {
        [self.radius, self.azimuth]
    }

    /// Converts the point to 2d cartesian coordinates. The azimuth is read
    /// in `unit`.
    pub fn to_cartesian2d(&self, unit: AngleUnit) -> Cartesian2d {
        let azimuth = unit.to_radians(self.azimuth);
        Cartesian2d::new(self.radius * azimuth.cos(), self.radius * azimuth.sin())
    }
}
