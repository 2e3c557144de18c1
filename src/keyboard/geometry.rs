use std::{collections::BTreeMap, fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::{foundation::error::KbanimResult, keyboard::config::KeyboardConfig};

/// Position of one pixel id in the LED grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PixelPosition {
    #[serde(rename = "Row", default)]
    pub row: Option<i64>,
    #[serde(rename = "Col", default)]
    pub col: Option<i64>,
}

/// Geometry document: pixel id -> grid position.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct GeometryDoc {
    pub pixels: BTreeMap<String, PixelPosition>,
}

impl GeometryDoc {
    pub fn from_path(path: &Path) -> KbanimResult<Self> {
        let f = File::open(path).with_context(|| format!("open geometry '{}'", path.display()))?;
        let doc = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("parse geometry JSON '{}'", path.display()))?;
        Ok(doc)
    }

    /// Largest row and column index present (best effort; missing or negative values are ignored).
    pub fn extents(&self) -> (i32, i32) {
        let clamp = |v: i64| v.clamp(0, i64::from(i32::MAX)) as i32;
        self.pixels.values().fold((0, 0), |(r, c), p| {
            (
                p.row.map_or(r, |v| r.max(clamp(v))),
                p.col.map_or(c, |v| c.max(clamp(v))),
            )
        })
    }
}

/// Read-only keyboard facts shared by every generator in a run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyboardGeometry {
    pub max_row: i32,
    pub max_col: i32,
    /// LEDs under a physical key (have a scan code), ascending.
    pub keyed: Vec<u32>,
    /// Decorative/base LEDs, ascending.
    pub blank: Vec<u32>,
}

impl KeyboardGeometry {
    pub fn new(max_row: i32, max_col: i32, mut keyed: Vec<u32>, mut blank: Vec<u32>) -> Self {
        keyed.sort_unstable();
        keyed.dedup();
        blank.sort_unstable();
        blank.dedup();
        Self {
            max_row,
            max_col,
            keyed,
            blank,
        }
    }

    pub fn from_documents(config: &KeyboardConfig, geometry: &GeometryDoc) -> Self {
        let (max_row, max_col) = geometry.extents();
        let (keyed, blank): (Vec<_>, Vec<_>) =
            config.leds.iter().partition(|led| led.scan_code.is_some());
        Self::new(
            max_row,
            max_col,
            keyed.into_iter().map(|led| led.id).collect(),
            blank.into_iter().map(|led| led.id).collect(),
        )
    }

    /// Every LED id, ascending.
    pub fn all_ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.keyed.iter().chain(&self.blank).copied().collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    pub fn led_count(&self) -> usize {
        self.keyed.len() + self.blank.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/keyboard/geometry.rs"]
mod tests;
