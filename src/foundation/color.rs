use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::foundation::error::{KbanimError, KbanimResult};

/// 8-bit RGB color. Channels are clamped to `[0, 255]` on every construction path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);
    pub const YELLOW: Self = Self::new(255, 255, 0);
    pub const CYAN: Self = Self::new(0, 255, 255);
    pub const MAGENTA: Self = Self::new(255, 0, 255);
    pub const ORANGE: Self = Self::new(255, 110, 0);
    pub const PURPLE: Self = Self::new(110, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(level: u8) -> Self {
        Self::new(level, level, level)
    }

    /// Round each channel to the nearest integer and clamp into `[0, 255]`.
    pub fn from_f64(r: f64, g: f64, b: f64) -> Self {
        Self::new(channel(r), channel(g), channel(b))
    }

    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Parse `#rrggbb`.
    pub fn parse_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self::new(r, g, b))
    }

    /// Decode a color from JSON.
    ///
    /// Accepts an array of up to three numbers (missing channels are 0, out-of-range values are
    /// clamped) or a `#rrggbb` string.
    pub fn from_json(v: &serde_json::Value) -> KbanimResult<Self> {
        match v {
            serde_json::Value::Array(items) => {
                if items.len() > 3 {
                    return Err(KbanimError::validation(format!(
                        "color has {} channels, expected at most 3",
                        items.len()
                    )));
                }
                let mut out = [0.0f64; 3];
                for (slot, item) in out.iter_mut().zip(items) {
                    *slot = item.as_f64().ok_or_else(|| {
                        KbanimError::validation(format!("color channel {item} is not a number"))
                    })?;
                }
                Ok(Self::from_f64(out[0], out[1], out[2]))
            }
            serde_json::Value::String(s) => Self::parse_hex(s)
                .ok_or_else(|| KbanimError::validation(format!("invalid hex color '{s}'"))),
            other => Err(KbanimError::validation(format!(
                "expected color array or hex string, got {other}"
            ))),
        }
    }
}

fn channel(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.channels().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let v = serde_json::Value::deserialize(deserializer)?;
        Self::from_json(&v).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
