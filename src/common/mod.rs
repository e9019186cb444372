pub mod ellipsoid;
pub mod sample_grid;
pub mod settings;
