use crate::cylindrical::Cylindrical;
use crate::polar::Polar;
use crate::spherical::Spherical;
use crate::AngleUnit;
use nalgebra::{Vector2, Vector3};
use serde::{Deserialize, Serialize};

/// Represents a point in the cartesian plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cartesian2d {
    pub x: f64,
    pub y: f64,
}

impl Cartesian2d {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new `Cartesian2d` instance with the given x and y components.
    ///
    /// # Arguments
    ///
    /// * `x` - The x component.
    /// * `y` - The y component.
    ///
    /// # Returns
    ///
    /// A `Cartesian2d` instance.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Converts the `Cartesian2d` instance to a `Vector2`.
    pub fn vec(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    pub fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Converts the point to polar coordinates.
    ///
    /// When `center` is given it is subtracted from the point first, so the
    /// radius and azimuth are measured about that center rather than the
    /// origin. The azimuth is returned in `unit`.
    ///
    /// # Arguments
    ///
    /// * `unit` - The unit angular results are expressed in.
    /// * `center` - Optional center the point is measured about.
    ///
    /// # Returns
    ///
    /// A `Polar` instance.
    pub fn to_polar(&self, unit: AngleUnit, center: Option<Cartesian2d>) -> Polar {
        let center = center.unwrap_or(Cartesian2d::ZERO);
        let x = self.x - center.x;
        let y = self.y - center.y;
        let radius = x.hypot(y);
        let azimuth = unit.from_radians(y.atan2(x));
        Polar::new(radius, azimuth)
    }
}

impl From<Vector2<f64>> for Cartesian2d {
    fn from(v: Vector2<f64>) -> Cartesian2d {
        Cartesian2d::new(v[0], v[1])
    }
}

/// Represents a point in 3d cartesian coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cartesian3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Cartesian3d {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    /// Creates a new `Cartesian3d` instance with the given x, y, and z components.
    ///
    /// # Arguments
    ///
    /// * `x` - The x component.
    /// * `y` - The y component.
    /// * `z` - The z component.
    ///
    /// # Returns
    ///
    /// A `Cartesian3d` instance.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Converts the `Cartesian3d` instance to a `Vector3`.
    pub fn vec(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Converts the point to cylindrical coordinates.
    ///
    /// The planar part is converted with [`Cartesian2d::to_polar`], the
    /// height is passed through unchanged. An optional `center` relocates
    /// the origin of the planar part.
    ///
    /// # Arguments
    ///
    /// * `unit` - The unit angular results are expressed in.
    /// * `center` - Optional planar center the point is measured about.
    ///
    /// # Returns
    ///
    /// A `Cylindrical` instance.
    pub fn to_cylindrical(&self, unit: AngleUnit, center: Option<Cartesian2d>) -> Cylindrical {
        let polar = Cartesian2d::new(self.x, self.y).to_polar(unit, center);
        Cylindrical::new(polar.radius, polar.azimuth, self.z)
    }

    /// Converts the point to spherical coordinates.
    ///
    /// The azimuth is `atan2(y, x)` and the inclination is measured from the
    /// +z axis as `atan2(sqrt(x^2 + y^2), z)`. A point exactly at the origin
    /// has no defined direction, so both angles are returned as `0` rather
    /// than relying on `atan2(0, 0)`. An optional `center` relocates the
    /// origin before the angles are computed.
    ///
    /// # Arguments
    ///
    /// * `unit` - The unit angular results are expressed in.
    /// * `center` - Optional center the point is measured about.
    ///
    /// # Returns
    ///
    /// A `Spherical` instance.
    pub fn to_spherical(&self, unit: AngleUnit, center: Option<Cartesian3d>) -> Spherical {
        let center = center.unwrap_or(Cartesian3d::ZERO);
        let x = self.x - center.x;
        let y = self.y - center.y;
        let z = self.z - center.z;
        let radius = (x * x + y * y + z * z).sqrt();
        if radius == 0.0 {
            return Spherical::new(0.0, 0.0, 0.0);
        }
        let azimuth = unit.from_radians(y.atan2(x));
        let inclination = unit.from_radians((x * x + y * y).sqrt().atan2(z));
        Spherical::new(radius, azimuth, inclination)
    }
}

impl From<Vector3<f64>> for Cartesian3d {
    fn from(v: Vector3<f64>) -> Cartesian3d {
        Cartesian3d::new(v[0], v[1], v[2])
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
    fn test_cartesian2d_to_polar() {
        let cartesian = Cartesian2d::new(0.0, 5.0);
        let polar = cartesian.to_polar(AngleUnit::Radian, None);
        assert_close(polar.radius, 5.0);
        assert_close(polar.azimuth, PI / 2.0);
    }

    #[test]
    fn test_cartesian2d_to_polar_degrees() {
        let cartesian = Cartesian2d::new(0.0, 5.0);
        let polar = cartesian.to_polar(AngleUnit::Degree, None);
        assert_close(polar.radius, 5.0);
        assert_close(polar.azimuth, 90.0);
    }

    #[test]
    fn test_cartesian2d_to_polar_about_center() {
        let cartesian = Cartesian2d::new(3.0, 4.0);
        let polar = cartesian.to_polar(AngleUnit::Radian, Some(Cartesian2d::new(3.0, 0.0)));
        assert_close(polar.radius, 4.0);
        assert_close(polar.azimuth, PI / 2.0);
    }

    #[test]
    fn test_cartesian2d_polar_round_trip() {
        let cartesian = Cartesian2d::new(-2.5, 1.75);
        let polar = cartesian.to_polar(AngleUnit::Radian, None);
        let back = polar.to_cartesian2d(AngleUnit::Radian);
        assert!((back.x - cartesian.x).abs() < 1e-3);
        assert!((back.y - cartesian.y).abs() < 1e-3);
    }

    #[test]
    fn test_cartesian3d_to_cylindrical() {
        let cartesian = Cartesian3d::new(1.0, 1.0, 7.0);
        let cylindrical = cartesian.to_cylindrical(AngleUnit::Radian, None);
        assert_close(cylindrical.radius, 2.0_f64.sqrt());
        assert_close(cylindrical.azimuth, PI / 4.0);
        assert_close(cylindrical.height, 7.0);
    }

    #[test]
    fn test_cartesian3d_to_spherical() {
        let cartesian = Cartesian3d::new(3.0, 4.0, 5.0);
        let spherical = cartesian.to_spherical(AngleUnit::Radian, None);
        assert_close(spherical.radius, 7.0710678118654755);
        assert_close(spherical.azimuth, 0.9272952180016122);
        assert_close(spherical.inclination, PI / 4.0);
    }

    #[test]
    fn test_cartesian3d_to_spherical_degrees() {
        let cartesian = Cartesian3d::new(3.0, 4.0, 5.0);
        let spherical = cartesian.to_spherical(AngleUnit::Degree, None);
        assert!((spherical.radius - 7.07106).abs() < 1e-3);
        assert!((spherical.azimuth - 53.13).abs() < 1e-2);
        assert!((spherical.inclination - 45.0).abs() < 1e-2);
    }

    #[test]
    fn test_cartesian3d_to_spherical_degenerate_origin() {
        let spherical = Cartesian3d::ZERO.to_spherical(AngleUnit::Radian, None);
        assert_eq!(spherical.radius, 0.0);
        assert_eq!(spherical.azimuth, 0.0);
        assert_eq!(spherical.inclination, 0.0);
    }

    #[test]
    fn test_cartesian3d_to_spherical_about_center() {
        let cartesian = Cartesian3d::new(4.0, 6.0, 8.0);
        let center = Cartesian3d::new(1.0, 2.0, 3.0);
        let spherical = cartesian.to_spherical(AngleUnit::Radian, Some(center));
        let expected = Cartesian3d::new(3.0, 4.0, 5.0).to_spherical(AngleUnit::Radian, None);
        assert_close(spherical.radius, expected.radius);
        assert_close(spherical.azimuth, expected.azimuth);
        assert_close(spherical.inclination, expected.inclination);
    }

    #[test]
    fn test_cartesian_from_vec() {
        let planar = Cartesian2d::from(Vector2::new(1.0, 2.0));
        assert_close(planar.x, 1.0);
        assert_close(planar.y, 2.0);

        let spatial = Cartesian3d::from(Vector3::new(1.0, 2.0, 3.0));
        assert_close(spatial.x, 1.0);
        assert_close(spatial.y, 2.0);
        assert_close(spatial.z, 3.0);
    }
}
