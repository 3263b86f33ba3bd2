use crate::{render::unit::Color3, Histogram};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Configuration that controls how a histogram is binned and presented. None
/// of these options affect the loaded world, only the visual output.
///
/// Not all options apply to all outputs. The documentation for each field
/// lists which outputs it applies to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PlotConfig {
    /// Number of equal-width bins the observed value range is split into.
    #[validate(range(min = 1, max = 10000))]
    pub bins: usize,

    /// Width of the plot, in pixels. For SVG this is the view box width.
    #[validate(range(min = 100, max = 8192))]
    pub width: u32,

    /// Height of the plot, in pixels. For SVG this is the view box height.
    #[validate(range(min = 100, max = 8192))]
    pub height: u32,

    /// Text shown above the plot. Defaults to a description of the plotted
    /// field.
    ///
    /// ## Relevant Outputs
    /// - SVG
    /// - Window (as the window title)
    #[validate(length(max = 200))]
    pub caption: Option<String>,

    /// Fill color for histogram bars
    pub bar_color: Color3,

    /// Fill color behind the plot
    pub background_color: Color3,

    /// Color of axis lines and labels
    pub axis_color: Color3,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            bins: Histogram::DEFAULT_BINS,
            width: 800,
            height: 600,
            caption: None,
            bar_color: Color3::new_int(31, 119, 180),
            background_color: Color3::new_int(255, 255, 255),
            axis_color: Color3::new_int(0, 0, 0),
        }
    }
}
