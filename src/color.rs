use std::{fmt, str::FromStr};
use thiserror::Error;
use super::{names, SHADOW_FACTOR};

/// Describes an rgb color with 8 bits per channel, the canonical text form is #RRGGBB
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// The red component
    pub r: u8,
    /// The green component
    pub g: u8,
    /// The blue component
    pub b: u8,
}

impl Color {
    /// Creates a new rgb color
    ///
    /// # Parameters
    ///
    /// r: The red component
    ///
    /// g: The green component
    ///
    /// b: The blue component
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
        }
    }

    /// Creates a color from arbitrary channel values, each is rounded to the nearest integer
    /// (ties to even) and clamped to [0, 255]. NaN becomes 0.
    ///
    /// # Parameters
    ///
    /// r: The red component
    ///
    /// g: The green component
    ///
    /// b: The blue component
    pub fn from_rgb_clamped(r: f64, g: f64, b: f64) -> Self {
        Self::new(round_channel(r), round_channel(g), round_channel(b))
    }

    /// Resolves a standard CSS color name
    ///
    /// # Parameters
    ///
    /// name: The name to resolve, e.g. "red"
    ///
    /// # Errors
    ///
    /// ColorError::UnknownColorName if it is not a standard CSS color name
    pub fn from_name(name: &str) -> Result<Self, ColorError> {
        names::lookup(name).ok_or_else(|| ColorError::UnknownColorName(name.to_string()))
    }

    /// Parses a color of the form #RRGGBB, the digits may be in either case
    ///
    /// # Parameters
    ///
    /// hex: The string to parse
    ///
    /// # Errors
    ///
    /// ColorError::MalformedHex if the string is not exactly '#' followed by 6 hex digits
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex
            .strip_prefix('#')
            .filter(|digits| digits.len() == 6 && digits.bytes().all(|byte| byte.is_ascii_hexdigit()))
            .ok_or_else(|| ColorError::MalformedHex(hex.to_string()))?;

        // All digits are ascii so slicing on byte offsets is safe
        let channel = |start: usize| {
            u8::from_str_radix(&digits[start..start + 2], 16).map_err(|_| ColorError::MalformedHex(hex.to_string()))
        };

        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Retrieves the channels as a tuple
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Formats the color as #RRGGBB with uppercase digits
    pub fn to_hex(&self) -> String {
        self.to_string()
    }

    /// Linearly interpolates between this color and another.
    /// t = 0 gives this color and t = 1 gives the other, values outside [0, 1] extrapolate and are clamped.
    ///
    /// # Parameters
    ///
    /// other: The color at t = 1
    ///
    /// t: The interpolation parameter
    pub fn lerp(&self, other: &Color, t: f64) -> Self {
        let mix = |from: u8, to: u8| {
            let from = from as f64;
            from + (to as f64 - from) * t
        };

        Self::from_rgb_clamped(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// Scales every channel by a factor and truncates towards zero, the result is clamped to [0, 255]
    ///
    /// # Parameters
    ///
    /// factor: The factor to scale with, 0.7 gives the shadow accent
    pub fn darken(&self, factor: f64) -> Self {
        let scale = |channel: u8| (channel as f64 * factor).floor().clamp(0.0, 255.0) as u8;

        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }

    /// The shadow accent drawn along the edge of a hexagon of this color
    pub fn shadow(&self) -> Self {
        self.darken(SHADOW_FACTOR)
    }

    /// Converts the sRGB color to linear rgba for writing to an sRGB surface
    pub fn to_linear_rgba(&self) -> [f32; 4] {
        let linear = |channel: u8| {
            let c = channel as f32 / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        };

        [linear(self.r), linear(self.g), linear(self.b), 1.0]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Rounds half to even and clamps, the float to int cast saturates and maps NaN to 0
fn round_channel(value: f64) -> u8 {
    value.round_ties_even().clamp(0.0, 255.0) as u8
}

/// Resolves a standard color name to its canonical hex string
///
/// # Parameters
///
/// name: The color name
///
/// # Errors
///
/// ColorError::UnknownColorName if the name is not recognized
pub fn name_to_hex(name: &str) -> Result<String, ColorError> {
    Color::from_name(name).map(|color| color.to_hex())
}

/// Parses a #RRGGBB string into its three channels
///
/// # Parameters
///
/// hex: The string to parse
///
/// # Errors
///
/// ColorError::MalformedHex if the string is not '#' followed by 6 hex digits
pub fn hex_to_rgb(hex: &str) -> Result<(u8, u8, u8), ColorError> {
    Color::from_hex(hex).map(|color| color.to_rgb())
}

/// Formats three channel values as #RRGGBB after rounding and clamping them, never fails
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    Color::from_rgb_clamped(r, g, b).to_hex()
}

/// Interpolates between two hex colors channel by channel
///
/// # Parameters
///
/// from: The color at t = 0
///
/// to: The color at t = 1
///
/// t: The interpolation parameter, values outside [0, 1] are clamped through the channel clamp
///
/// # Errors
///
/// ColorError::MalformedHex if either color is not a valid hex string
pub fn interpolate(from: &str, to: &str, t: f64) -> Result<String, ColorError> {
    Ok(Color::from_hex(from)?.lerp(&Color::from_hex(to)?, t).to_hex())
}

/// Darkens a hex color, see Color::darken
///
/// # Errors
///
/// ColorError::MalformedHex if the color is not a valid hex string
pub fn darken(hex: &str, factor: f64) -> Result<String, ColorError> {
    Ok(Color::from_hex(hex)?.darken(factor).to_hex())
}

/// The errors of the color codec
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The name has no entry in the color table
    #[error("Unknown color name: {:?}", .0)]
    UnknownColorName(String),
    /// The string is not a 6 digit hex color
    #[error("Expected a color of the form #RRGGBB but received {:?}", .0)]
    MalformedHex(String),
}
