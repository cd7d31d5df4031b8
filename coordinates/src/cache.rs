use crate::CoordinateSystem;
use conversions::prelude::*;
use serde::{Deserialize, Serialize};

/// Lazily populated representations of a point, one slot per coordinate
/// system. A slot is filled the first time its system is requested and
/// read back on every later request.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub(crate) struct CoordinateCache {
    pub cartesian2d: Option<Cartesian2d>,
    pub cartesian3d: Option<Cartesian3d>,
    pub polar: Option<Polar>,
    pub cylindrical: Option<Cylindrical>,
    pub spherical: Option<Spherical>,
}

impl CoordinateCache {
    /// An empty cache holding only the origin representation.
    pub fn seeded(origin: CoordinateSystem) -> Self {
        let mut cache = Self::default();
        match origin {
            CoordinateSystem::Cartesian2d(point) => cache.cartesian2d = Some(point),
            CoordinateSystem::Cartesian3d(point) => cache.cartesian3d = Some(point),
            CoordinateSystem::Polar(point) => cache.polar = Some(point),
            CoordinateSystem::Cylindrical(point) => cache.cylindrical = Some(point),
            CoordinateSystem::Spherical(point) => cache.spherical = Some(point),
        }
        cache
    }
}
