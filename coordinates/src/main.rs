use coordinates::prelude::*;
use std::f64::consts::PI;

fn main() -> Result<(), CoordinateErrors> {
    let mut planar = Coordinate::from_cartesian(&[0.0.into(), 5.0.into()])?;
    dbg!(planar.to_polar()?);
    dbg!(planar.to_spherical()?);

    let mut spatial = Coordinate::from_cartesian(&[3.0.into(), 4.0.into(), 5.0.into()])?
        .with_unit(AngleUnit::Degree);
    dbg!(spatial.to_spherical()?);
    dbg!(spatial.to_cylindrical()?);

    let mut cylindrical = Coordinate::from_cylindrical(&[1.0.into(), (PI / 2.0).into(), 1.0.into()])?;
    dbg!(cylindrical.to_cartesian());
    dbg!(cylindrical.to_spherical()?);
    Ok(())
}
