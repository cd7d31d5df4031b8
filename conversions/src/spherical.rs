use crate::cartesian::Cartesian3d;
use crate::cylindrical::Cylindrical;
use crate::AngleUnit;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Represents a point in spherical coordinates. Relative to a Cartesian
/// x-y-z coordinate system, azimuth is the right hand rotation angle about
/// +z where +x is 0, and inclination is the angle from the +z axis.
/// Unique values are not enforced (all values can be negative and are
/// unbounded) so that instabilities are easily detectable without rolling
/// over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Spherical {
    pub radius: f64,
    pub azimuth: f64,
    pub inclination: f64,
}

impl Spherical {
    /// Creates a new `Spherical` instance with the given radius, azimuth,
    /// and inclination.
    ///
    /// # Arguments
    ///
    /// * `radius` - The radial distance from the origin.
    /// * `azimuth` - The azimuth angle.
    /// * `inclination` - The inclination angle from the +z axis.
    ///
    /// # Returns
    ///
    /// A `Spherical` instance.
    pub fn new(radius: f64, azimuth: f64, inclination: f64) -> Self {
        Self {
            radius,
            azimuth,
            inclination,
        }
    }

    pub fn from_vec(v: &Vector3<f64>) -> Self {
        Self {
            radius: v[0],
            azimuth: v[1],
            inclination: v[2],
        }
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.radius, self.azimuth, self.inclination]
    }

    /// Converts the point to 3d cartesian coordinates. Both angles are read
    /// in `unit`.
    pub fn to_cartesian3d(&self, unit: AngleUnit) -> Cartesian3d {
        let azimuth = unit.to_radians(self.azimuth);
        let inclination = unit.to_radians(self.inclination);
        let x = self.radius * inclination.sin() * azimuth.cos();
        let y = self.radius * inclination.sin() * azimuth.sin();
        let z = self.radius * inclination.cos();
        Cartesian3d::new(x, y, z)
    }

    /// Converts the point to cylindrical coordinates. The azimuth passes
    /// through unchanged.
    pub fn to_cylindrical(&self, unit: AngleUnit) -> Cylindrical {
        let inclination = unit.to_radians(self.inclination);
        let radius = self.radius * inclination.sin();
        let height = self.radius * inclination.cos();
        Cylindrical::new(radius, self.azimuth, height)
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
    fn test_spherical_to_cartesian3d() {
        let spherical = Spherical::new(5.0, PI / 4.0, PI / 4.0);
        let cartesian = spherical.to_cartesian3d(AngleUnit::Radian);
        assert_close(cartesian.x, 2.5);
        assert_close(cartesian.y, 2.5);
        assert_close(cartesian.z, 3.5355339059327378);
    }

    #[test]
    fn test_spherical_to_cylindrical() {
        let spherical = Spherical::new(5.0, PI / 4.0, 0.6435011087932844);
        let cylindrical = spherical.to_cylindrical(AngleUnit::Radian);
        assert_close(cylindrical.radius, 3.0);
        assert_close(cylindrical.azimuth, PI / 4.0);
        assert_close(cylindrical.height, 4.0);
    }

    #[test]
    fn test_spherical_to_cylindrical_degrees() {
        let spherical = Spherical::new(5.0, 60.0, 36.86989764584402);
        let cylindrical = spherical.to_cylindrical(AngleUnit::Degree);
        assert!((cylindrical.radius - 3.0).abs() < 1e-9);
        assert!((cylindrical.azimuth - 60.0).abs() < TOL);
        assert!((cylindrical.height - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_spherical_cylindrical_round_trip() {
        let cylindrical = Cylindrical::new(3.0, PI / 3.0, 4.0);
        let back = cylindrical
            .to_spherical(AngleUnit::Radian)
            .to_cylindrical(AngleUnit::Radian);
        assert!((back.radius - cylindrical.radius).abs() < 1e-9);
        assert!((back.azimuth - cylindrical.azimuth).abs() < 1e-9);
        assert!((back.height - cylindrical.height).abs() < 1e-9);
    }
}
