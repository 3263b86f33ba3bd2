use crate::{Meter, Meter3, NumRange};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// A single cell of a world, as it appears in a serialized world file. Only
/// the numeric attributes that can be plotted are kept here. Everything else a
/// world generator may have written for the tile (position, biome, features,
/// etc.) is skipped during deserialization.
///
/// Every field is optional at the type level. A tile missing a field only
/// becomes an error when that field is extracted, see
/// [World::extract](crate::World::extract).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    /// The elevation of this tile, relative to sea level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation: Option<Meter>,

    /// Amount of rain that fell on this tile during rain simulation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rainfall: Option<Meter3>,

    /// Amount of runoff water that remained on the tile after runoff
    /// simulation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runoff: Option<Meter3>,
}

impl Tile {
    /// The range of elevation values the Terra generator produces. Loaded
    /// worlds aren't held to this, but anything outside of it is suspicious.
    pub const ELEVATION_RANGE: NumRange<Meter, f64> =
        NumRange::new(Meter(-100.0), Meter(100.0));

    /// Create a tile that only has an elevation
    pub fn with_elevation(elevation: impl Into<Meter>) -> Self {
        Self {
            elevation: Some(elevation.into()),
            ..Default::default()
        }
    }

    /// Get the raw numeric value of one field, or `None` if this tile doesn't
    /// carry that field.
    pub fn value(&self, field: TileField) -> Option<f64> {
        match field {
            TileField::Elevation => self.elevation.map(f64::from),
            TileField::Rainfall => self.rainfall.map(f64::from),
            TileField::Runoff => self.runoff.map(f64::from),
        }
    }
}

/// A numeric tile attribute that can be extracted and plotted.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    Eq,
    PartialEq,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TileField {
    Elevation,
    Rainfall,
    Runoff,
}

impl Default for TileField {
    fn default() -> Self {
        Self::Elevation
    }
}

impl TileField {
    /// The range of values this field is expected to fall in for a world
    /// produced by the Terra generator. Values outside this range are still
    /// plotted, but they're worth a warning.
    pub fn nominal_range(self) -> NumRange<f64> {
        match self {
            Self::Elevation => NumRange::new(
                Tile::ELEVATION_RANGE.min.into(),
                Tile::ELEVATION_RANGE.max.into(),
            ),
            // Water volumes have no upper bound, but can't be negative
            Self::Rainfall | Self::Runoff => NumRange::new(0.0, f64::INFINITY),
        }
    }

    /// Unit label to use on plot axes
    pub fn unit(self) -> &'static str {
        match self {
            Self::Elevation => "m",
            Self::Rainfall | Self::Runoff => "m³",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_tile_value() {
        let tile = Tile {
            elevation: Some(Meter(-3.5)),
            rainfall: None,
            runoff: Some(Meter3(0.25)),
        };
        assert_eq!(tile.value(TileField::Elevation), Some(-3.5));
        assert_eq!(tile.value(TileField::Rainfall), None);
        assert_eq!(tile.value(TileField::Runoff), Some(0.25));
    }

    #[test]
    fn test_field_names() {
        for field in TileField::iter() {
            let name = field.to_string();
            assert_eq!(TileField::from_str(&name).unwrap(), field);
        }
        assert_eq!(TileField::from_str("elevation").unwrap(), TileField::Elevation);
        assert!(TileField::from_str("biome").is_err());
    }

    #[test]
    fn test_nominal_range() {
        assert!(TileField::Elevation.nominal_range().contains(100.0));
        assert!(Tile::ELEVATION_RANGE.contains(Meter(-100.0)));
        assert!(!TileField::Elevation.nominal_range().contains(100.5));
        assert!(TileField::Runoff.nominal_range().contains(1e9));
        assert!(!TileField::Rainfall.nominal_range().contains(-0.1));
    }
}
