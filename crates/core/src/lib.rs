//! Terra Plot loads serialized [Terra](https://terra.lucaspickering.me) worlds
//! and bins tile attributes into histograms for visual inspection. This crate
//! contains the loading, extraction, and binning logic, plus headless
//! renderers. Presentation (windows, files) is implemented elsewhere.
//!
//! ```
//! use terra_plot::{Tile, TileField, World};
//!
//! let world = World::new(vec![
//!     Tile::with_elevation(10.0),
//!     Tile::with_elevation(20.0),
//!     Tile::with_elevation(10.0),
//! ]);
//! terra_plot::plot(&world, TileField::Elevation, 20, |histogram| {
//!     assert_eq!(histogram.total(), 3);
//!     assert_eq!(histogram.counts()[0], 2);
//!     Ok(())
//! })
//! .unwrap();
//! ```
//!
//! ## Features
//!
//! - `bin` - Load worlds from binary format ([World::from_bin])
//! - `json` - Load worlds from JSON format ([World::from_json])
//! - `svg` - Render histograms as SVG ([HistogramRenderer::render_as_svg])

mod config;
mod histogram;
mod plot;
mod render;
mod util;
mod world;

pub use crate::{
    config::PlotConfig,
    histogram::{Bin, Histogram},
    plot::{plot, plot_elevations},
    render::{raster::Raster, unit::Color3, HistogramRenderer, Rect},
    util::{
        range::{NumRange, RangeValue, Rangeable},
        unit::{Meter, Meter3},
    },
    world::{
        tile::{Tile, TileField},
        World, WorldFormat,
    },
};
