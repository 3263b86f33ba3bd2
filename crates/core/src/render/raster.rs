use crate::{
    render::{unit::Color3, HistogramRenderer, Rect},
    Histogram, NumRange,
};

/// A fixed-size pixel buffer. Pixels are stored row-major starting at the
/// top-left corner, each packed as `0RGB` in a `u32`.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl Raster {
    /// Create a raster filled with a single color
    pub fn new(width: usize, height: usize, fill: Color3) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill.to_pixel(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// All pixels, row-major, as `0RGB`
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Get the pixel at the given coordinates, or `None` if out of bounds
    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Fill a rectangle. Coordinates are snapped to whole pixels, and anything
    /// outside the raster is cropped.
    pub fn fill_rect(&mut self, rect: Rect, color: Color3) {
        let x_range = NumRange::new(0.0, self.width as f64);
        let y_range = NumRange::new(0.0, self.height as f64);
        let x0 = x_range.clamp(rect.x.round()) as usize;
        let x1 = x_range.clamp(rect.right().round()) as usize;
        let y0 = y_range.clamp(rect.y.round()) as usize;
        let y1 = y_range.clamp(rect.bottom().round()) as usize;
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let pixel = color.to_pixel();
        for y in y0..y1 {
            let row = y * self.width;
            self.pixels[row + x0..row + x1].fill(pixel);
        }
    }

    /// Convert to tightly packed 8-bit RGB, the layout image encoders want
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|pixel| {
                let [_, r, g, b] = pixel.to_be_bytes();
                [r, g, b]
            })
            .collect()
    }
}

/// Draw a histogram into a new raster the size of the configured plot. There's
/// no text rendering here, so labels are left to whatever displays the raster.
pub fn histogram_to_raster(
    histogram: &Histogram,
    renderer: &HistogramRenderer,
) -> Raster {
    let config = renderer.config();
    let area = renderer.plot_area();
    let mut raster = Raster::new(
        config.width as usize,
        config.height as usize,
        config.background_color,
    );

    for rect in renderer.bar_rects(histogram) {
        // Leave a one pixel gap between neighboring bars when there's room
        let rect = if rect.width > 3.0 {
            Rect {
                width: rect.width - 1.0,
                ..rect
            }
        } else {
            rect
        };
        raster.fill_rect(rect, config.bar_color);
    }

    // Value axis along the bottom, count axis along the left side
    raster.fill_rect(
        Rect {
            x: area.x - 1.0,
            y: area.bottom(),
            width: area.width + 1.0,
            height: 1.0,
        },
        config.axis_color,
    );
    raster.fill_rect(
        Rect {
            x: area.x - 1.0,
            y: area.y,
            width: 1.0,
            height: area.height + 1.0,
        },
        config.axis_color,
    );

    // Count axis ticks
    let tick_range =
        NumRange::new(0.0, (HistogramRenderer::COUNT_TICKS - 1) as f64);
    let y_range = NumRange::new(area.bottom(), area.y);
    for i in 0..HistogramRenderer::COUNT_TICKS {
        let y = tick_range.map_to(&y_range, i as f64);
        raster.fill_rect(
            Rect {
                x: area.x - 5.0,
                y,
                width: 4.0,
                height: 1.0,
            },
            config.axis_color,
        );
    }

    raster
}
