use crate::NumRange;
use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt, str::FromStr};

/// An RGB color. Values are stored as floats between 0 and 1 (inclusive).
/// This uses f32 because the extra precision from f64 is pointless.
///
/// Serialized as an HTML color code, e.g. `"#1f77b4"`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color3 {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl Color3 {
    /// The valid range of values for each component in RGB
    const COMPONENT_RANGE: NumRange<f32> = NumRange::new(0.0, 1.0);

    /// Create a new RGB color with components in the range [0.0, 1.0]. Panic
    /// if any of the components are out of range
    pub fn new(red: f32, green: f32, blue: f32) -> Self {
        fn check_component(component_name: &str, value: f32) -> f32 {
            if Color3::COMPONENT_RANGE.contains(value) {
                value
            } else {
                panic!(
                    "Color component {} must be in {}, but was {}",
                    component_name,
                    Color3::COMPONENT_RANGE,
                    value
                )
            }
        }

        Self {
            red: check_component("red", red),
            green: check_component("green", green),
            blue: check_component("blue", blue),
        }
    }

    /// Create a new RGB color from integer components in the [0,255] range.
    pub const fn new_int(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
        }
    }

    /// Convert this number to a set of 3 bytes: `(red, green, blue)`
    pub fn to_ints(self) -> (u8, u8, u8) {
        (
            (self.red * 255.0).round() as u8,
            (self.green * 255.0).round() as u8,
            (self.blue * 255.0).round() as u8,
        )
    }

    /// Pack this color into a single `0RGB` pixel, which is the layout
    /// windowing buffers expect
    pub fn to_pixel(self) -> u32 {
        let (r, g, b) = self.to_ints();
        (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
    }

    /// Convert this color to an HTML color code: `#rrggbb`
    pub fn to_html(self) -> String {
        let (r, g, b) = self.to_ints();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl fmt::Display for Color3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_html())
    }
}

/// Parse an HTML color code: `#rrggbb`
impl FromStr for Color3 {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .filter(|hex| hex.len() == 6 && hex.is_ascii())
            .ok_or_else(|| anyhow!("invalid color {:?}, expected #rrggbb", s))?;
        let component = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .with_context(|| format!("invalid color {:?}", s))
        };
        Ok(Self::new_int(component(0)?, component(2)?, component(4)?))
    }
}

impl TryFrom<String> for Color3 {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color3> for String {
    fn from(color: Color3) -> Self {
        color.to_html()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_round_trip() {
        let color = Color3::new_int(31, 119, 180);
        assert_eq!(color.to_html(), "#1f77b4");
        assert_eq!("#1f77b4".parse::<Color3>().unwrap(), color);
        assert_eq!("#FFFFFF".parse::<Color3>().unwrap().to_ints(), (255, 255, 255));
    }

    #[test]
    fn test_invalid_html() {
        assert!("1f77b4".parse::<Color3>().is_err());
        assert!("#1f77b".parse::<Color3>().is_err());
        assert!("#1f77bz".parse::<Color3>().is_err());
    }

    #[test]
    fn test_to_pixel() {
        assert_eq!(Color3::new_int(0x12, 0x34, 0x56).to_pixel(), 0x00123456);
        assert_eq!(Color3::new(1.0, 1.0, 1.0).to_pixel(), 0x00ffffff);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_component() {
        Color3::new(1.5, 0.0, 0.0);
    }
}
