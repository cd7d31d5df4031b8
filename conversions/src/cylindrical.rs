use crate::spherical::Spherical;
use crate::AngleUnit;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Represents a point in cylindrical coordinates. Relative to a Cartesian
/// x-y-z coordinate system, azimuth is the right hand rotation angle about
/// +z where +x is 0, and height is the displacement along +z.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cylindrical {
    pub radius: f64,
    pub azimuth: f64,
    pub height: f64,
}

impl Cylindrical {
    pub fn new(radius: f64, azimuth: f64, height: f64) -> Self {
        Self {
            radius,
            azimuth,
            height,
        }
    }

    pub fn from_vec(v: &Vector3<f64>) -> Self {
        Self {
            radius: v[0],
            azimuth: v[1],
            height: v[2],
        }
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.radius, self.azimuth, self.height]
    }

    /// Converts the point to spherical coordinates. The azimuth is shared by
    /// both systems and passes through unchanged; the spherical radius and
    /// inclination are computed from the planar radius and the height.
    pub fn to_spherical(&self, unit: AngleUnit) -> Spherical {
        let radius = self.radius.hypot(self.height);
        let inclination = unit.from_radians(self.radius.atan2(self.height));
        Spherical::new(radius, self.azimuth, inclination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const TOL: f64 = 1e-12;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < TOL,
            "Expected: {}, Actual: {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_cylindrical_to_spherical() {
        let cylindrical = Cylindrical::new(3.0, PI / 4.0, 4.0);
        let spherical = cylindrical.to_spherical(AngleUnit::Radian);
        assert_close(spherical.radius, 5.0);
        assert_close(spherical.azimuth, PI / 4.0);
        assert_close(spherical.inclination, 0.6435011087932844);
    }

    #[test]
    fn test_cylindrical_to_spherical_degrees() {
        let cylindrical = Cylindrical::new(3.0, 60.0, 4.0);
        let spherical = cylindrical.to_spherical(AngleUnit::Degree);
        assert!((spherical.radius - 5.0).abs() < TOL);
        assert!((spherical.azimuth - 60.0).abs() < TOL);
        assert!((spherical.inclination - 36.8699).abs() < 1e-3);
    }
}
