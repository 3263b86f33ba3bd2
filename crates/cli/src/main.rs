mod window;

use anyhow::{anyhow, Context};
use config::{Config, File};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
    process,
    str::FromStr,
};
use structopt::StructOpt;
use strum::{Display, EnumString};
use terra_plot::{
    timed, Histogram, HistogramRenderer, PlotConfig, TileField, World,
    WorldFormat,
};

/// Plot characteristics of a Terra world. By default, a histogram of tile
/// elevations is shown in a window, and the program exits once that window is
/// closed.
#[derive(Debug, StructOpt)]
#[structopt(name = "terra-plot")]
struct Opt {
    /// Path to the world to plot, as written by the Terra generator
    #[structopt(parse(from_os_str))]
    world: PathBuf,

    /// The format the world file is stored in. Supported formats:
    ///
    /// bin - CBOR binary representation
    ///
    /// json - JSON representation
    #[structopt(short, long, default_value = "bin")]
    format: WorldFormat,

    /// The tile attribute to plot. Supported fields: elevation, rainfall,
    /// runoff
    #[structopt(long, default_value = "elevation")]
    field: TileField,

    /// Path to a config file that controls binning and appearance of the
    /// plot. Supported formats: JSON, TOML
    #[structopt(short, long, parse(from_os_str))]
    config: Option<PathBuf>,

    /// If given, the plot is written to this file instead of being shown in
    /// a window. The format is determined by the extension. Supported
    /// extensions: svg, png
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,
}

/// Different file output formats.
#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum OutputFormat {
    /// Vector rendering, including axis labels
    Svg,
    /// Raster rendering, the same image that's shown in the window
    Png,
}

impl OutputFormat {
    /// Figure out the output format from a file's extension
    fn from_path(path: &Path) -> anyhow::Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| anyhow!("output file {:?} has no extension", path))?;
        Self::from_str(&extension.to_lowercase()).with_context(|| {
            format!("unsupported output format {:?}", extension)
        })
    }
}

fn load_config(config_path: &Path) -> anyhow::Result<PlotConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

/// Write a rendered histogram to a file, in the format matching its extension.
fn gen_output(
    output_path: &Path,
    histogram: &Histogram,
    renderer: &HistogramRenderer,
) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_path(output_path)?;
    timed!(
        format!(
            "Generating {} output and writing to {:?}",
            output_format, output_path
        ),
        log::Level::Info,
        match output_format {
            OutputFormat::Svg => {
                let svg = renderer.render_as_svg(histogram);
                let mut file = OpenOptions::new()
                    .write(true)
                    .create(true)
                    .truncate(true)
                    .open(output_path)
                    .with_context(|| {
                        format!("error opening output file {:?}", output_path)
                    })?;
                file.write_all(svg.as_bytes()).with_context(|| {
                    format!("error writing to file {:?}", output_path)
                })?;
            }
            OutputFormat::Png => {
                let raster = renderer.render_as_raster(histogram);
                image::save_buffer(
                    output_path,
                    &raster.to_rgb8(),
                    raster.width() as u32,
                    raster.height() as u32,
                    image::ColorType::Rgb8,
                )
                .with_context(|| {
                    format!("error writing to file {:?}", output_path)
                })?;
            }
        }
    );

    Ok(())
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;
    plot_world(&opt)
}

/// Load the world named by the options, and plot it to either a window or the
/// output file
fn plot_world(opt: &Opt) -> anyhow::Result<()> {
    let config = match &opt.config {
        Some(config_path) => load_config(config_path)?,
        None => PlotConfig::default(),
    };
    let renderer = HistogramRenderer::new(config, opt.field)
        .context("invalid plot config")?;

    let world = World::load(&opt.world, opt.format)?;

    terra_plot::plot(
        &world,
        opt.field,
        renderer.config().bins,
        |histogram| match &opt.output {
            Some(output_path) => gen_output(output_path, histogram, &renderer),
            None => {
                info!("Showing plot, close the window or press Esc to exit");
                window::show(histogram, &renderer)
            }
        },
    )
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
