use glam::Vec3;

/// Points sampled on a longitude/latitude grid, stored row-major with one row per
/// latitude band (north pole first) and one column per longitude (0° to 360°).
///
/// Pole and seam points are repeated, so every band has the same number of points.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    lon_steps: u32,
    lat_steps: u32,
    points: Vec<Vec3>,
}

impl SampleGrid {
    pub(crate) fn new(lon_steps: u32, lat_steps: u32, points: Vec<Vec3>) -> Self {
        debug_assert_eq!(
            points.len(),
            (1 + 4 * lon_steps as usize) * (1 + 2 * lat_steps as usize)
        );
        Self {
            lon_steps,
            lat_steps,
            points,
        }
    }

    pub fn lon_steps(&self) -> u32 {
        self.lon_steps
    }

    pub fn lat_steps(&self) -> u32 {
        self.lat_steps
    }

    pub fn columns(&self) -> usize {
        1 + 4 * self.lon_steps as usize
    }

    pub fn rows(&self) -> usize {
        1 + 2 * self.lat_steps as usize
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at longitude index `i` and latitude index `j`.
    pub fn point(&self, i: usize, j: usize) -> Option<Vec3> {
        if i >= self.columns() || j >= self.rows() {
            return None;
        }
        self.points.get(j * self.columns() + i).copied()
    }

    /// Latitude bands from north to south, each a full longitude sweep.
    pub fn bands(&self) -> impl ExactSizeIterator<Item = &[Vec3]> {
        self.points.chunks_exact(self.columns())
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Vec3> {
        self.points
    }
}
