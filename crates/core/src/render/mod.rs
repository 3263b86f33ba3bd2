pub mod raster;
#[cfg(feature = "svg")]
pub mod svg;
pub mod unit;

use crate::{
    render::raster::Raster, Histogram, NumRange, PlotConfig, TileField,
};
use validator::Validate;

/// A histogram renderer converts binned data into visual output formats. A
/// renderer is created with a particular [PlotConfig] and the field being
/// plotted, and from there can render any number of histograms.
///
/// ## Supported Formats
/// - SVG (vector, with labels)
/// - Raster (in-memory `0RGB` pixels, no text), for on-screen display and
///   image encoding
#[derive(Clone, Debug)]
pub struct HistogramRenderer {
    config: PlotConfig,
    field: TileField,
}

/// A rectangle in screen space. The origin is the top-left corner, with y
/// increasing downward.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

impl HistogramRenderer {
    /// Space reserved around the plot area for labels, in pixels. Order is
    /// top, right, bottom, left.
    const MARGIN: (f64, f64, f64, f64) = (40.0, 20.0, 50.0, 60.0);
    /// Number of evenly spaced ticks on the count axis, including zero
    pub const COUNT_TICKS: usize = 5;

    /// Initialize a new renderer. Returns an error if the config is invalid.
    pub fn new(config: PlotConfig, field: TileField) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self { config, field })
    }

    /// Get a reference to the config that this renderer uses
    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// The field whose values are being plotted
    pub fn field(&self) -> TileField {
        self.field
    }

    /// Text to show above the plot
    pub fn caption(&self) -> String {
        match &self.config.caption {
            Some(caption) => caption.clone(),
            None => format!("{} distribution", self.field),
        }
    }

    /// Label for the value (horizontal) axis
    pub fn value_axis_label(&self) -> String {
        format!("{} ({})", self.field, self.field.unit())
    }

    /// A one-line summary of a histogram, e.g. for a window title
    pub fn summary(&self, histogram: &Histogram) -> String {
        format!(
            "{} - {} tiles in {} bins over {}",
            self.caption(),
            histogram.total(),
            histogram.len(),
            histogram.range()
        )
    }

    /// The region inside the margins where bars are drawn
    pub fn plot_area(&self) -> Rect {
        let (top, right, bottom, left) = Self::MARGIN;
        Rect {
            x: left,
            y: top,
            width: f64::from(self.config.width) - left - right,
            height: f64::from(self.config.height) - top - bottom,
        }
    }

    /// The largest count that the count axis can show. Always at least one, so
    /// an empty histogram still gets a sensible axis.
    pub fn count_axis_max(&self, histogram: &Histogram) -> usize {
        histogram.max_count().max(1)
    }

    /// Compute the screen-space rectangle for every bin, in bin order. Empty
    /// bins get a zero-height rectangle sitting on the value axis.
    pub fn bar_rects<'a>(
        &self,
        histogram: &'a Histogram,
    ) -> impl Iterator<Item = Rect> + 'a {
        let area = self.plot_area();
        let bin_range = NumRange::new(0.0, histogram.len() as f64);
        let x_range = NumRange::new(area.x, area.right());
        let count_range =
            NumRange::new(0.0, self.count_axis_max(histogram) as f64);
        let height_range = NumRange::new(0.0, area.height);

        histogram.counts().iter().enumerate().map(move |(i, &count)| {
            let left = bin_range.map_to(&x_range, i as f64);
            let right = bin_range.map_to(&x_range, (i + 1) as f64);
            let height = count_range.map_to(&height_range, count as f64);
            Rect {
                x: left,
                y: area.bottom() - height,
                width: right - left,
                height,
            }
        })
    }

    /// Render a histogram as a 2D SVG. Returns the SVG in a string.
    #[cfg(feature = "svg")]
    pub fn render_as_svg(&self, histogram: &Histogram) -> String {
        svg::histogram_to_svg(histogram, self).to_string()
    }

    /// Render a histogram into a pixel buffer the size of the configured plot
    pub fn render_as_raster(&self, histogram: &Histogram) -> Raster {
        raster::histogram_to_raster(histogram, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn renderer() -> HistogramRenderer {
        HistogramRenderer::new(PlotConfig::default(), TileField::Elevation)
            .unwrap()
    }

    #[test]
    fn test_invalid_config() {
        let config = PlotConfig {
            bins: 0,
            ..Default::default()
        };
        assert!(HistogramRenderer::new(config, TileField::Elevation).is_err());
    }

    #[test]
    fn test_caption() {
        assert_eq!(renderer().caption(), "elevation distribution");
        let config = PlotConfig {
            caption: Some("My World".into()),
            ..Default::default()
        };
        let renderer = HistogramRenderer::new(config, TileField::Runoff).unwrap();
        assert_eq!(renderer.caption(), "My World");
        assert_eq!(renderer.value_axis_label(), "runoff (m³)");
    }

    #[test]
    fn test_bar_rects() {
        let renderer = renderer();
        let area = renderer.plot_area();
        let histogram = Histogram::new(&[10.0, 20.0, 10.0], 20).unwrap();
        let rects: Vec<Rect> = renderer.bar_rects(&histogram).collect();
        assert_eq!(rects.len(), 20);

        // Bars tile the plot area horizontally
        assert_approx_eq!(rects[0].x, area.x);
        assert_approx_eq!(rects[19].right(), area.right());
        for rect in &rects {
            assert_approx_eq!(rect.bottom(), area.bottom());
        }

        // Tallest bar fills the whole plot, the other is scaled to match
        assert_approx_eq!(rects[0].height, area.height);
        assert_approx_eq!(rects[19].height, area.height / 2.0);
        assert_approx_eq!(rects[5].height, 0.0);
    }

    #[test]
    fn test_bar_rects_empty() {
        let renderer = renderer();
        let histogram = Histogram::new(&[], 20).unwrap();
        assert_eq!(renderer.count_axis_max(&histogram), 1);
        assert!(renderer.bar_rects(&histogram).all(|rect| rect.height == 0.0));
    }
}
