use color_eyre::Result;
use ellipsoid_sampler::{
    SamplerSettings, Vertex,
    render::data::{LINE_STRIP_TOPOLOGY, vertex_bytes},
};

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let settings = SamplerSettings::load().inspect_err(|err| log::error!("{err}"))?;
    log::debug!("Settings: {settings:?}");

    let ellipsoid = settings.ellipsoid()?;
    let grid = ellipsoid.sample(settings.lon_steps, settings.lat_steps)?;

    for (j, band) in grid.bands().enumerate() {
        log::trace!("Band {j}: {} points starting at {}", band.len(), band[0]);
    }

    let vertices = Vertex::from_positions(grid.points());
    log::info!(
        "Ellipsoid {} sampled into {} vertices ({} x {}), {} bytes as {LINE_STRIP_TOPOLOGY:?}",
        ellipsoid.semi_axes(),
        vertices.len(),
        grid.columns(),
        grid.rows(),
        vertex_bytes(&vertices).len(),
    );

    Ok(())
}
