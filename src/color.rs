use std::fmt;
use std::str::FromStr;

use image::Rgba;
use serde::{
    Deserialize,
    Deserializer,
    de::Error as DeserializerError,
};

use crate::digest::read_hex_byte;
use crate::errors::IdenticonError;

/// Number of hex characters reserved for color at the start of the digest
pub(crate) const COLOR_HEX_LENGTH: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub(crate) fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, 255])
    }
}

impl FromStr for Rgb {
    type Err = IdenticonError;

    /// Parses `#rrggbb` or `rrggbb`
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.strip_prefix('#').unwrap_or(value);
        if value.len() != COLOR_HEX_LENGTH {
            return Err(IdenticonError::InvalidInput("invalid color"));
        };
        let color = Self::new(
            read_hex_byte(value, 0)?,
            read_hex_byte(value, 2)?,
            read_hex_byte(value, 4)?,
        );
        Ok(color)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: Deserializer<'de>
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(DeserializerError::custom)
    }
}

/// Hue in degrees, saturation and value in percents
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

/// Maps the first three bytes of the digest to HSV.
/// Saturation and value are biased towards vivid colors.
pub fn extract_hsv(digest: &str) -> Result<Hsv, IdenticonError> {
    if digest.len() < COLOR_HEX_LENGTH {
        return Err(IdenticonError::InvalidInput("invalid input str"));
    };
    let hue = f64::from(read_hex_byte(digest, 0)?);
    let saturation = f64::from(read_hex_byte(digest, 2)?);
    let value = f64::from(read_hex_byte(digest, 4)?);
    // Hue can exceed 360 for bytes >= 253
    // and will be rejected by hsv_to_rgb
    let hsv = Hsv {
        hue: (hue / 256.0) * 365.0,
        saturation: ((saturation / 256.0) * 55.0) + 45.0,
        value: ((value / 256.0) * 35.0) + 45.0,
    };
    Ok(hsv)
}

/// https://www.rapidtables.com/convert/color/hsv-to-rgb.html
pub fn hsv_to_rgb(
    hue: f64,
    saturation: f64,
    value: f64,
) -> Result<Rgb, IdenticonError> {
    if !(0.0..=360.0).contains(&hue) ||
        !(0.0..=100.0).contains(&saturation) ||
        !(0.0..=100.0).contains(&value)
    {
        return Err(IdenticonError::RangeError);
    };
    let saturation = saturation / 100.0;
    let value = value / 100.0;

    let hi = hue / 60.0;
    let c = value * saturation;
    let x = c * (1.0 - ((hi % 2.0) - 1.0).abs());
    let m = value - c;

    // 360 degrees falls into the first sector
    let sector = hi.floor() as u8 % 6;
    let (r, g, b) = match sector {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let to_channel = |component: f64| ((component + m) * 255.0).round() as u8;
    Ok(Rgb::new(to_channel(r), to_channel(g), to_channel(b)))
}

pub fn extract_color(digest: &str) -> Result<Rgb, IdenticonError> {
    let hsv = extract_hsv(digest)?;
    hsv_to_rgb(hsv.hue, hsv.saturation, hsv.value)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorSource {
    Derived,
    Fixed(Rgb),
}

impl ColorSource {
    pub fn from_option(maybe_color: Option<Rgb>) -> Self {
        match maybe_color {
            Some(color) => Self::Fixed(color),
            None => Self::Derived,
        }
    }

    pub fn resolve(&self, digest: &str) -> Result<Rgb, IdenticonError> {
        match self {
            Self::Derived => extract_color(digest),
            Self::Fixed(color) => Ok(*color),
        }
    }
}
