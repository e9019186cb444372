pub mod common;
pub mod render;

pub use common::ellipsoid::{Ellipsoid, EllipsoidError};
pub use common::sample_grid::SampleGrid;
pub use common::settings::{SamplerSettings, SettingsError};
pub use render::data::Vertex;
