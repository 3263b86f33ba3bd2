use anyhow::anyhow;
use minifb::{Key, Window, WindowOptions};
use terra_plot::{Histogram, HistogramRenderer};

/// Show a histogram in a window, and block until the user closes the window
/// or hits Escape. Axis labels aren't drawn in the raster, so the window title
/// carries the field, sample count, and range instead.
pub fn show(
    histogram: &Histogram,
    renderer: &HistogramRenderer,
) -> anyhow::Result<()> {
    let raster = renderer.render_as_raster(histogram);
    let mut window = Window::new(
        &renderer.summary(histogram),
        raster.width(),
        raster.height(),
        WindowOptions {
            resize: false,
            scale: minifb::Scale::X1,
            ..WindowOptions::default()
        },
    )
    .map_err(|err| anyhow!("error opening window: {}", err))?;

    // Nothing changes frame to frame, so there's no need to spin fast
    window.set_target_fps(30);

    while window.is_open() && !window.is_key_down(Key::Escape) {
        window
            .update_with_buffer(raster.pixels(), raster.width(), raster.height())
            .map_err(|err| anyhow!("error drawing window: {}", err))?;
    }

    Ok(())
}
