use std::fmt;

use crate::foundation::color::Rgb;

/// One axis position: an LED row/column index, or a percentage along the board edge.
///
/// Percentages outside `0..=100` address off-board positions (ambient bleed past the edge).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Coord {
    Index(i32),
    Percent(i32),
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(v) => write!(f, "{v}"),
            Self::Percent(v) => write!(f, "{v}%"),
        }
    }
}

/// Addressing mode of a pixel command. Exactly one mode per command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelTarget {
    /// Row and column together (`r:<row>,c:<col>`).
    Grid { row: Coord, col: Coord },
    /// A whole row (`r:<row>`).
    Row(Coord),
    /// A whole column (`c:<col>`).
    Column(Coord),
    /// Absolute LED id.
    Id(u32),
}

impl PixelTarget {
    pub fn grid(row: i32, col: i32) -> Self {
        Self::Grid {
            row: Coord::Index(row),
            col: Coord::Index(col),
        }
    }

    pub fn column_percent(pct: i32) -> Self {
        Self::Column(Coord::Percent(pct))
    }
}

impl fmt::Display for PixelTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid { row, col } => write!(f, "r:{row},c:{col}"),
            Self::Row(row) => write!(f, "r:{row}"),
            Self::Column(col) => write!(f, "c:{col}"),
            Self::Id(id) => write!(f, "{id}"),
        }
    }
}

/// A target plus the color to set it to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelCommand {
    pub target: PixelTarget,
    pub color: Rgb,
}

impl PixelCommand {
    pub fn new(target: PixelTarget, color: Rgb) -> Self {
        Self { target, color }
    }
}

impl fmt::Display for PixelCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P[{}]{}", self.target, self.color)
    }
}

/// Render the wire form `P[<addr>](<r>,<g>,<b>)`.
pub fn format_pixel(target: &PixelTarget, color: Rgb) -> String {
    PixelCommand::new(*target, color).to_string()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/pixel.rs"]
mod tests;
