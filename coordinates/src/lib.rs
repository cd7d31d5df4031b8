pub mod coordinate;
pub mod errors;
pub mod value;

mod cache;

use conversions::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod prelude {
    pub use crate::coordinate::Coordinate;
    pub use crate::errors::CoordinateErrors;
    pub use crate::value::Value;
    pub use crate::{Cartesian, CoordinateSystem, CoordinateType};
    pub use conversions::prelude::*;
}

/// The closed set of supported coordinate systems. A point's origin system
/// is fixed at construction and determines which conversions are defined
/// for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoordinateType {
    Cartesian2d,
    Cartesian3d,
    Polar,
    Cylindrical,
    Spherical,
}

impl CoordinateType {
    /// Number of components a point of this system carries.
    pub fn component_count(&self) -> usize {
        match self {
            CoordinateType::Cartesian2d | CoordinateType::Polar => 2,
            CoordinateType::Cartesian3d
            | CoordinateType::Cylindrical
            | CoordinateType::Spherical => 3,
        }
    }
}

impl fmt::Display for CoordinateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CoordinateType::Cartesian2d => "cartesian 2d",
            CoordinateType::Cartesian3d => "cartesian 3d",
            CoordinateType::Polar => "polar",
            CoordinateType::Cylindrical => "cylindrical",
            CoordinateType::Spherical => "spherical",
        };
        write!(f, "{}", name)
    }
}

/// Represents a point in any of the supported coordinate systems.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum CoordinateSystem {
    Cartesian2d(Cartesian2d),
    Cartesian3d(Cartesian3d),
    Polar(Polar),
    Cylindrical(Cylindrical),
    Spherical(Spherical),
}

impl Default for CoordinateSystem {
    fn default() -> Self {
        Self::Cartesian3d(Cartesian3d::default())
    }
}

impl CoordinateSystem {
    pub fn coordinate_type(&self) -> CoordinateType {
        match self {
            CoordinateSystem::Cartesian2d(_) => CoordinateType::Cartesian2d,
            CoordinateSystem::Cartesian3d(_) => CoordinateType::Cartesian3d,
            CoordinateSystem::Polar(_) => CoordinateType::Polar,
            CoordinateSystem::Cylindrical(_) => CoordinateType::Cylindrical,
            CoordinateSystem::Spherical(_) => CoordinateType::Spherical,
        }
    }

    /// The point's components in their conventional order.
    pub fn components(&self) -> Vec<f64> {
        match self {
            CoordinateSystem::Cartesian2d(point) => point.to_array().to_vec(),
            CoordinateSystem::Cartesian3d(point) => point.to_array().to_vec(),
            CoordinateSystem::Polar(point) => point.to_array().to_vec(),
            CoordinateSystem::Cylindrical(point) => point.to_array().to_vec(),
            CoordinateSystem::Spherical(point) => point.to_array().to_vec(),
        }
    }
}

impl From<Cartesian2d> for CoordinateSystem {
    fn from(point: Cartesian2d) -> Self {
        Self::Cartesian2d(point)
    }
}

impl From<Cartesian3d> for CoordinateSystem {
    fn from(point: Cartesian3d) -> Self {
        Self::Cartesian3d(point)
    }
}

impl From<Polar> for CoordinateSystem {
    fn from(point: Polar) -> Self {
        Self::Polar(point)
    }
}

impl From<Cylindrical> for CoordinateSystem {
    fn from(point: Cylindrical) -> Self {
        Self::Cylindrical(point)
    }
}

impl From<Spherical> for CoordinateSystem {
    fn from(point: Spherical) -> Self {
        Self::Spherical(point)
    }
}

/// A cartesian representation, planar or spatial depending on the origin
/// system it was derived from.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Cartesian {
    TwoD(Cartesian2d),
    ThreeD(Cartesian3d),
}

impl Cartesian {
    pub fn components(&self) -> Vec<f64> {
        match self {
            Cartesian::TwoD(point) => point.to_array().to_vec(),
            Cartesian::ThreeD(point) => point.to_array().to_vec(),
        }
    }
}
