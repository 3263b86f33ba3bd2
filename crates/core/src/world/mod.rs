pub mod tile;

use crate::{
    timed,
    world::tile::{Tile, TileField},
};
use anyhow::{bail, Context};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::{fs::File, io::Read, path::Path};
use strum::{Display, EnumString};

/// A world loaded from a file. This is the subset of a generated Terra world
/// that's needed for plotting: the ordered list of tiles. Any other top-level
/// keys in the source document (e.g. the generation config) are ignored.
///
/// ## Serialization
/// Worlds can be loaded from two formats, binary and JSON. Both encode the
/// same document: a map with a `tiles` key, holding a list of tile maps.
///
/// ### Binary Format
/// The binary format is [CBOR](https://cbor.io/), which is what the Terra
/// generator writes for its `.bin` output. Load via [World::from_bin].
///
/// ### JSON Format
/// Same structure as the binary format, but human readable. Load via
/// [World::from_json].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct World {
    /// The tiles that make up this world, in the order they appear in the
    /// source document.
    tiles: Vec<Tile>,
}

impl World {
    /// Build a world from an existing list of tiles
    pub fn new(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Get a reference to the tiles that make up this world, in source order.
    pub fn tiles(&self) -> &[Tile] {
        self.tiles.as_slice()
    }

    /// Open the file at the given path and deserialize the whole thing as a
    /// world in the given format. The file handle is dropped before this
    /// returns, regardless of success.
    pub fn load(path: &Path, format: WorldFormat) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("error opening world file {:?}", path))?;
        let world = timed!(
            format!("Loading {} world from {:?}", format, path),
            log::Level::Info,
            match format {
                #[cfg(feature = "bin")]
                WorldFormat::Bin => Self::from_bin(file),
                #[cfg(feature = "json")]
                WorldFormat::Json => Self::from_json(file),
                #[allow(unreachable_patterns)]
                _ => bail!("support for {} worlds is not enabled", format),
            }
        )?;
        info!("Loaded world with {} tiles from {:?}", world.tiles.len(), path);
        Ok(world)
    }

    /// Deserialize a world from binary format. See the struct-level [World]
    /// documentation for a description of the binary format. Will fail if the
    /// input is malformed, truncated, or missing the `tiles` list.
    #[cfg(feature = "bin")]
    pub fn from_bin(read: impl Read) -> anyhow::Result<Self> {
        serde_cbor::from_reader(read).context("error deserializing world")
    }

    /// Serialize this world into the binary format, which can be loaded back
    /// with [World::from_bin].
    #[cfg(feature = "bin")]
    pub fn to_bin(&self) -> anyhow::Result<Vec<u8>> {
        serde_cbor::to_vec(self).context("error serializing world")
    }

    /// Deserialize a world from JSON. Will fail if the input is malformed.
    #[cfg(feature = "json")]
    pub fn from_json(read: impl Read) -> anyhow::Result<Self> {
        serde_json::from_reader(read).context("error deserializing world")
    }

    /// Serialize this world into JSON, which can be loaded back with
    /// [World::from_json].
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string(self).context("error serializing world")
    }

    /// Pull one numeric field out of every tile, preserving tile order. The
    /// output always has exactly one value per tile. Fails if any tile doesn't
    /// carry the field.
    pub fn extract(&self, field: TileField) -> anyhow::Result<Vec<f64>> {
        let values = self
            .tiles
            .iter()
            .enumerate()
            .map(|(i, tile)| match tile.value(field) {
                Some(value) => Ok(value),
                None => bail!("tile {} has no {} value", i, field),
            })
            .collect::<anyhow::Result<Vec<f64>>>()?;

        let nominal_range = field.nominal_range();
        let out_of_range = values
            .iter()
            .filter(|value| !nominal_range.contains(**value))
            .count();
        if out_of_range > 0 {
            warn!(
                "{} of {} {} values fall outside the expected range {}",
                out_of_range,
                values.len(),
                field,
                nominal_range
            );
        }

        Ok(values)
    }
}

/// Serialization formats that a world can be loaded from.
#[derive(Copy, Clone, Debug, Display, Eq, PartialEq, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum WorldFormat {
    /// CBOR, as written by the Terra generator's `bin` output
    Bin,
    /// JSON, as written by the Terra generator's `json` output
    Json,
}

impl Default for WorldFormat {
    fn default() -> Self {
        Self::Bin
    }
}
