use crate::{timed, Histogram, TileField, World};
use log::{debug, info};

/// Extract one field from every tile in the world, bin the values into a
/// histogram, then hand that histogram off to `render`. Rendering is left up
/// to the caller so that this can run without any display attached. `render`
/// is called exactly once if extraction and binning succeed, even when the
/// world has no tiles.
pub fn plot(
    world: &World,
    field: TileField,
    bins: usize,
    render: impl FnOnce(&Histogram) -> anyhow::Result<()>,
) -> anyhow::Result<()> {
    let values = world.extract(field)?;
    let histogram =
        timed!(format!("Binning {} {} values", values.len(), field), {
            Histogram::new(&values, bins)?
        });
    info!(
        "Plotting {} {} values over {} in {} bins",
        histogram.total(),
        field,
        histogram.range(),
        histogram.len()
    );
    for bin in histogram.bins() {
        debug!("[{:.3}, {:.3}) => {}", bin.start, bin.end, bin.count);
    }

    render(&histogram)
}

/// Shorthand for [plot] on [TileField::Elevation]
pub fn plot_elevations(
    world: &World,
    bins: usize,
    render: impl FnOnce(&Histogram) -> anyhow::Result<()>,
) -> anyhow::Result<()> {
    plot(world, TileField::Elevation, bins, render)
}
