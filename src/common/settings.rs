use config::{Config, ConfigBuilder, Environment, File, Source, builder::DefaultState};
use serde::Deserialize;
use thiserror::Error;

use super::ellipsoid::{Ellipsoid, EllipsoidError};

pub const ENV_PREFIX: &str = "ELLIPSOID";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Unable to load settings: {0}")]
    Settings(#[from] config::ConfigError),
    #[error("{0}")]
    Ellipsoid(#[from] EllipsoidError),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SamplerSettings {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub lon_steps: u32,
    pub lat_steps: u32,
}

impl SamplerSettings {
    /// Defaults, then an optional `Settings` file, then `ELLIPSOID_*` variables.
    pub fn load() -> Result<Self, SettingsError> {
        Self::layered(File::with_name("Settings").required(false))
    }

    /// Defaults, then `file`, then `ELLIPSOID_*` variables.
    pub fn layered<S>(file: S) -> Result<Self, SettingsError>
    where
        S: Source + Send + Sync + 'static,
    {
        let builder = Self::defaults()?
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));
        Self::build(builder)
    }

    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, SettingsError> {
        Ok(Config::builder()
            .set_default("a", 4.0)?
            .set_default("b", 3.0)?
            .set_default("c", 2.0)?
            .set_default("lon_steps", 5)?
            .set_default("lat_steps", 6)?)
    }

    pub fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, SettingsError> {
        Ok(builder.build()?.try_deserialize()?)
    }

    pub fn ellipsoid(&self) -> Result<Ellipsoid, SettingsError> {
        Ok(Ellipsoid::new(self.a, self.b, self.c)?)
    }
}
