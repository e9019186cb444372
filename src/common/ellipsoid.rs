use glam::{DVec3, Vec3};
use itertools::Itertools;
use thiserror::Error;

use super::sample_grid::SampleGrid;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EllipsoidError {
    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Triaxial ellipsoid `x²/a² + y²/b² + z²/c² = 1` centered at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    a: f64,
    b: f64,
    c: f64,
}

impl Ellipsoid {
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, EllipsoidError> {
        for (name, value) in [("a", a), ("b", b), ("c", c)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(EllipsoidError::InvalidParameter {
                    name,
                    reason: format!("semi-axis must be positive and finite, got {value}"),
                });
            }
        }
        Ok(Self { a, b, c })
    }

    pub fn semi_axes(&self) -> DVec3 {
        DVec3::new(self.a, self.b, self.c)
    }

    /// Surface point at the given longitude and latitude, both in degrees.
    ///
    /// Latitude is measured from the equatorial plane, longitude from the x axis.
    /// Angles outside the usual ranges wrap around.
    pub fn position(&self, longitude_deg: f64, latitude_deg: f64) -> DVec3 {
        let longitude = longitude_deg.to_radians();
        let latitude = latitude_deg.to_radians();
        let x = self.a * latitude.cos() * longitude.cos();
        let y = self.b * latitude.cos() * longitude.sin();
        let z = self.c * latitude.sin();
        DVec3::new(x, y, z)
    }

    /// Samples the surface on a longitude/latitude grid with `lon_steps`
    /// subdivisions per 90° of longitude and `lat_steps` per 90° of latitude.
    pub fn sample(&self, lon_steps: u32, lat_steps: u32) -> Result<SampleGrid, EllipsoidError> {
        let mut points = Vec::new();
        self.fill_positions_by_sampling(&mut points, lon_steps, lat_steps)?;
        Ok(SampleGrid::new(lon_steps, lat_steps, points))
    }

    pub fn positions_by_sampling(
        &self,
        lon_steps: u32,
        lat_steps: u32,
    ) -> Result<Vec<Vec3>, EllipsoidError> {
        self.sample(lon_steps, lat_steps).map(SampleGrid::into_points)
    }

    /// Replaces the contents of `positions` with the sampled grid, north pole
    /// band first and the full longitude sweep inside each band.
    ///
    /// `positions` is left untouched when the step counts are rejected, including
    /// grids too large to allocate.
    pub fn fill_positions_by_sampling(
        &self,
        positions: &mut Vec<Vec3>,
        lon_steps: u32,
        lat_steps: u32,
    ) -> Result<(), EllipsoidError> {
        let (columns, rows) = grid_shape(lon_steps, lat_steps)?;
        let oversized = |reason: String| EllipsoidError::InvalidParameter {
            name: if lon_steps >= lat_steps {
                "lon_steps"
            } else {
                "lat_steps"
            },
            reason,
        };
        let point_count = columns
            .checked_mul(rows)
            .ok_or_else(|| oversized(format!("grid of {columns}x{rows} points is too large")))?;

        // Reserve before clearing so a rejected grid leaves `positions` as it was.
        positions
            .try_reserve(point_count.saturating_sub(positions.len()))
            .map_err(|err| oversized(format!("grid of {point_count} points: {err}")))?;
        positions.clear();

        let deg_lon = 90.0 / lon_steps as f64;
        let deg_lat = 90.0 / lat_steps as f64;

        positions.extend((0..rows).cartesian_product(0..columns).map(|(j, i)| {
            let longitude = i as f64 * deg_lon;
            let latitude = 90.0 - j as f64 * deg_lat;
            self.position(longitude, latitude).as_vec3()
        }));

        log::debug!(
            "Sampled {point_count} points ({columns} x {rows}) on ellipsoid {}",
            self.semi_axes()
        );

        Ok(())
    }
}

/// Number of longitude columns and latitude rows of the sampling grid.
pub fn grid_shape(lon_steps: u32, lat_steps: u32) -> Result<(usize, usize), EllipsoidError> {
    let steps = |name: &'static str, count: u32, quadrants: usize| {
        if count == 0 {
            return Err(EllipsoidError::InvalidParameter {
                name,
                reason: "sample count must be at least 1".to_owned(),
            });
        }
        (count as usize)
            .checked_mul(quadrants)
            .and_then(|n| n.checked_add(1))
            .ok_or_else(|| EllipsoidError::InvalidParameter {
                name,
                reason: format!("sample count {count} is too large"),
            })
    };

    Ok((steps("lon_steps", lon_steps, 4)?, steps("lat_steps", lat_steps, 2)?))
}
