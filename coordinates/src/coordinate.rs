use crate::cache::CoordinateCache;
use crate::errors::CoordinateErrors;
use crate::value::{coerce_values, Value};
use crate::{Cartesian, CoordinateSystem, CoordinateType};
use conversions::prelude::*;
use serde::{Deserialize, Serialize};

/// A point constructed in one coordinate system that can express itself in
/// the others on demand.
///
/// The origin representation is fixed at construction and determines which
/// conversions are defined: a planar origin (cartesian 2d, polar) reaches
/// the angular systems by zero-padding, while spatial origins (cartesian
/// 3d, cylindrical, spherical) cannot be projected down to polar and fail
/// with [`CoordinateErrors::UnsupportedConversion`] instead.
///
/// Each requested representation is computed once and cached, so repeated
/// queries are cheap and stable. Conversion methods therefore take
/// `&mut self`; a `Coordinate` is meant to be owned by a single caller.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Coordinate {
    origin: CoordinateSystem,
    unit: AngleUnit,
    cache: CoordinateCache,
}

impl Coordinate {
    /// Creates a point of the given system from loosely typed components.
    ///
    /// Every element is coerced to a float first (text that parses as a
    /// float is accepted), then the component count is checked against the
    /// system.
    ///
    /// # Arguments
    ///
    /// * `coordinate_type` - The system the components are expressed in.
    /// * `values` - The components, in the system's conventional order.
    /// * `unit` - The unit angular components are expressed in.
    ///
    /// # Returns
    ///
    /// A `Coordinate` instance, or the construction error.
    pub fn new(
        coordinate_type: CoordinateType,
        values: &[Value],
        unit: AngleUnit,
    ) -> Result<Self, CoordinateErrors> {
        if values.is_empty() {
            return Err(CoordinateErrors::NoCoordinates);
        }
        let values = coerce_values(values)?;
        let expected = coordinate_type.component_count();
        if values.len() != expected {
            return Err(CoordinateErrors::WrongComponentCount {
                coordinate_type,
                expected,
                got: values.len(),
            });
        }
        let origin = match coordinate_type {
            CoordinateType::Cartesian2d => Cartesian2d::new(values[0], values[1]).into(),
            CoordinateType::Cartesian3d => {
                Cartesian3d::new(values[0], values[1], values[2]).into()
            }
            CoordinateType::Polar => Polar::new(values[0], values[1]).into(),
            CoordinateType::Cylindrical => {
                Cylindrical::new(values[0], values[1], values[2]).into()
            }
            CoordinateType::Spherical => {
                Spherical::new(values[0], values[1], values[2]).into()
            }
        };
        Ok(Self::from_origin(origin, unit))
    }

    fn from_origin(origin: CoordinateSystem, unit: AngleUnit) -> Self {
        Self {
            origin,
            unit,
            cache: CoordinateCache::seeded(origin),
        }
    }

    /// Creates a cartesian point, planar or spatial depending on whether 2
    /// or 3 components are given.
    pub fn from_cartesian(values: &[Value]) -> Result<Self, CoordinateErrors> {
        match values.len() {
            0 => Err(CoordinateErrors::NoCoordinates),
            2 => Self::new(CoordinateType::Cartesian2d, values, AngleUnit::Radian),
            3 => Self::new(CoordinateType::Cartesian3d, values, AngleUnit::Radian),
            other => Err(CoordinateErrors::WrongCartesianComponentCount(other)),
        }
    }

    /// Creates a polar point from `[radius, azimuth]`.
    pub fn from_polar(values: &[Value]) -> Result<Self, CoordinateErrors> {
        Self::new(CoordinateType::Polar, values, AngleUnit::Radian)
    }

    /// Creates a cylindrical point from `[radius, azimuth, height]`.
    pub fn from_cylindrical(values: &[Value]) -> Result<Self, CoordinateErrors> {
        Self::new(CoordinateType::Cylindrical, values, AngleUnit::Radian)
    }

    /// Creates a spherical point from `[radius, azimuth, inclination]`.
    pub fn from_spherical(values: &[Value]) -> Result<Self, CoordinateErrors> {
        Self::new(CoordinateType::Spherical, values, AngleUnit::Radian)
    }

    /// Sets the angular unit, consuming and returning the point.
    pub fn with_unit(mut self, unit: AngleUnit) -> Self {
        self.set_angle_unit(unit);
        self
    }

    /// The system the point was constructed in.
    pub fn origin_type(&self) -> CoordinateType {
        self.origin.coordinate_type()
    }

    /// The representation the point was constructed with.
    pub fn origin(&self) -> CoordinateSystem {
        self.origin
    }

    pub fn unit(&self) -> AngleUnit {
        self.unit
    }

    pub fn is_radian(&self) -> bool {
        self.unit.is_radian()
    }

    pub fn is_degree(&self) -> bool {
        self.unit.is_degree()
    }

    /// Changes the angular unit.
    ///
    /// Cached representations were computed in the previous unit, so every
    /// derived slot is dropped and recomputed on the next request; only the
    /// origin representation is kept, and its angular components are read
    /// in the new unit from then on.
    pub fn set_angle_unit(&mut self, unit: AngleUnit) {
        if unit == self.unit {
            return;
        }
        self.unit = unit;
        self.cache = CoordinateCache::seeded(self.origin);
    }

    /// Returns the point in cartesian coordinates, planar for planar
    /// origins and spatial for spatial ones. Defined for every origin
    /// system.
    pub fn to_cartesian(&mut self) -> Cartesian {
        match self.origin {
            CoordinateSystem::Cartesian2d(point) => Cartesian::TwoD(point),
            CoordinateSystem::Cartesian3d(point) => Cartesian::ThreeD(point),
            CoordinateSystem::Polar(point) => {
                let planar = match self.cache.cartesian2d {
                    Some(planar) => planar,
                    None => {
                        let planar = point.to_cartesian2d(self.unit);
                        self.cache.cartesian2d = Some(planar);
                        planar
                    }
                };
                Cartesian::TwoD(planar)
            }
            CoordinateSystem::Cylindrical(point) => {
                let spatial = match self.cache.cartesian3d {
                    Some(spatial) => spatial,
                    None => {
                        let planar =
                            Polar::new(point.radius, point.azimuth).to_cartesian2d(self.unit);
                        let spatial = Cartesian3d::new(planar.x, planar.y, point.height);
                        self.cache.cartesian3d = Some(spatial);
                        spatial
                    }
                };
                Cartesian::ThreeD(spatial)
            }
            CoordinateSystem::Spherical(point) => {
                let spatial = match self.cache.cartesian3d {
                    Some(spatial) => spatial,
                    None => {
                        let spatial = point.to_cartesian3d(self.unit);
                        self.cache.cartesian3d = Some(spatial);
                        spatial
                    }
                };
                Cartesian::ThreeD(spatial)
            }
        }
    }

    /// Returns the point in polar coordinates. Only defined for planar
    /// origins; spatial origins would silently lose a dimension, so they
    /// fail instead.
    pub fn to_polar(&mut self) -> Result<Polar, CoordinateErrors> {
        self.polar_representation(None)
    }

    /// Like [`Coordinate::to_polar`], measured about `center` (an `[x, y]`
    /// offset subtracted before the radius and azimuth are computed). The
    /// center only participates when this call computes the representation;
    /// a previously cached polar representation is returned as is.
    pub fn to_polar_about(&mut self, center: &[f64]) -> Result<Polar, CoordinateErrors> {
        self.polar_representation(Some(center))
    }

    fn polar_representation(
        &mut self,
        center: Option<&[f64]>,
    ) -> Result<Polar, CoordinateErrors> {
        if let Some(polar) = self.cache.polar {
            return Ok(polar);
        }
        let polar = match self.origin {
            CoordinateSystem::Cartesian2d(point) => {
                point.to_polar(self.unit, planar_center(center)?)
            }
            CoordinateSystem::Polar(point) => point,
            _ => {
                return Err(CoordinateErrors::UnsupportedConversion {
                    from: self.origin_type(),
                    to: CoordinateType::Polar,
                })
            }
        };
        self.cache.polar = Some(polar);
        Ok(polar)
    }

    /// Returns the point in cylindrical coordinates. Planar origins are
    /// zero-padded: the height of their cylindrical representation is 0.
    pub fn to_cylindrical(&mut self) -> Result<Cylindrical, CoordinateErrors> {
        self.cylindrical_representation(None)
    }

    /// Like [`Coordinate::to_cylindrical`], with the planar part measured
    /// about `center` (an `[x, y]` offset). Only cartesian origins consume
    /// the center; on other paths it is ignored.
    pub fn to_cylindrical_about(
        &mut self,
        center: &[f64],
    ) -> Result<Cylindrical, CoordinateErrors> {
        self.cylindrical_representation(Some(center))
    }

    fn cylindrical_representation(
        &mut self,
        center: Option<&[f64]>,
    ) -> Result<Cylindrical, CoordinateErrors> {
        if let Some(cylindrical) = self.cache.cylindrical {
            return Ok(cylindrical);
        }
        let cylindrical = match self.origin {
            CoordinateSystem::Cartesian2d(point) => {
                let polar = point.to_polar(self.unit, planar_center(center)?);
                Cylindrical::new(polar.radius, polar.azimuth, 0.0)
            }
            CoordinateSystem::Cartesian3d(point) => {
                point.to_cylindrical(self.unit, planar_center(center)?)
            }
            CoordinateSystem::Polar(point) => Cylindrical::new(point.radius, point.azimuth, 0.0),
            CoordinateSystem::Cylindrical(point) => point,
            CoordinateSystem::Spherical(point) => point.to_cylindrical(self.unit),
        };
        self.cache.cylindrical = Some(cylindrical);
        Ok(cylindrical)
    }

    /// Returns the point in spherical coordinates. Planar origins are
    /// zero-padded: the inclination of their spherical representation is 0,
    /// with no trigonometric recomputation.
    pub fn to_spherical(&mut self) -> Result<Spherical, CoordinateErrors> {
        self.spherical_representation(None)
    }

    /// Like [`Coordinate::to_spherical`], measured about `center`: an
    /// `[x, y]` offset for a planar origin, `[x, y, z]` for a cartesian 3d
    /// origin. Only cartesian origins consume the center; on other paths it
    /// is ignored.
    pub fn to_spherical_about(&mut self, center: &[f64]) -> Result<Spherical, CoordinateErrors> {
        self.spherical_representation(Some(center))
    }

    fn spherical_representation(
        &mut self,
        center: Option<&[f64]>,
    ) -> Result<Spherical, CoordinateErrors> {
        if let Some(spherical) = self.cache.spherical {
            return Ok(spherical);
        }
        let spherical = match self.origin {
            CoordinateSystem::Cartesian2d(point) => {
                let polar = point.to_polar(self.unit, planar_center(center)?);
                Spherical::new(polar.radius, polar.azimuth, 0.0)
            }
            CoordinateSystem::Cartesian3d(point) => {
                point.to_spherical(self.unit, spatial_center(center)?)
            }
            CoordinateSystem::Polar(point) => Spherical::new(point.radius, point.azimuth, 0.0),
            CoordinateSystem::Cylindrical(point) => point.to_spherical(self.unit),
            CoordinateSystem::Spherical(point) => point,
        };
        self.cache.spherical = Some(spherical);
        Ok(spherical)
    }
}

impl From<CoordinateSystem> for Coordinate {
    fn from(origin: CoordinateSystem) -> Self {
        Self::from_origin(origin, AngleUnit::Radian)
    }
}

impl From<Cartesian2d> for Coordinate {
    fn from(point: Cartesian2d) -> Self {
        CoordinateSystem::from(point).into()
    }
}

impl From<Cartesian3d> for Coordinate {
    fn from(point: Cartesian3d) -> Self {
        CoordinateSystem::from(point).into()
    }
}

impl From<Polar> for Coordinate {
    fn from(point: Polar) -> Self {
        CoordinateSystem::from(point).into()
    }
}

impl From<Cylindrical> for Coordinate {
    fn from(point: Cylindrical) -> Self {
        CoordinateSystem::from(point).into()
    }
}

impl From<Spherical> for Coordinate {
    fn from(point: Spherical) -> Self {
        CoordinateSystem::from(point).into()
    }
}

fn planar_center(center: Option<&[f64]>) -> Result<Option<Cartesian2d>, CoordinateErrors> {
    match center {
        None => Ok(None),
        Some(&[x, y]) => Ok(Some(Cartesian2d::new(x, y))),
        Some(values) => Err(CoordinateErrors::MalformedCenter {
            expected: 2,
            got: values.len(),
        }),
    }
}

fn spatial_center(center: Option<&[f64]>) -> Result<Option<Cartesian3d>, CoordinateErrors> {
    match center {
        None => Ok(None),
        Some(&[x, y, z]) => Ok(Some(Cartesian3d::new(x, y, z))),
        Some(values) => Err(CoordinateErrors::MalformedCenter {
            expected: 3,
            got: values.len(),
        }),
    }
}
