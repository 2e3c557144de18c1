use crate::{
    animation::{
        bleed::multi_bleed,
        frame::{Animation, AnimationSettings, Frame},
        interp::Interp,
        pixel::{Coord, PixelTarget},
    },
    foundation::{color::Rgb, error::KbanimResult},
    generators::{Generator, Params},
    keyboard::geometry::KeyboardGeometry,
};

pub const DEFAULT_FRAMES_PER_TRANSITION: usize = 30;
pub const DEFAULT_COLORS: [Rgb; 3] = [Rgb::RED, Rgb::GREEN, Rgb::BLUE];
pub const FRAME_DELAY: u32 = 2;
/// How far past each board edge the ambient pixels sit.
pub const EDGE_OVERFLOW_PERCENT: i32 = 2;

#[derive(Clone, Debug, PartialEq)]
pub struct PulseParams {
    pub frames_per_transition: usize,
    pub colors: Vec<Rgb>,
}

impl Default for PulseParams {
    fn default() -> Self {
        Self {
            frames_per_transition: DEFAULT_FRAMES_PER_TRANSITION,
            colors: DEFAULT_COLORS.to_vec(),
        }
    }
}

impl PulseParams {
    /// `[frames_per_transition, colors]`
    pub fn from_params(p: &Params<'_>) -> KbanimResult<Self> {
        p.expect_at_most(2)?;
        Ok(Self {
            frames_per_transition: p.usize_or(0, DEFAULT_FRAMES_PER_TRANSITION)?,
            colors: p.colors_or(1, &DEFAULT_COLORS)?,
        })
    }
}

/// Whole-board color cycle driven from two off-board pixels; the firmware interpolates between them.
pub fn pulse(geometry: &KeyboardGeometry, params: &PulseParams) -> KbanimResult<Animation> {
    let left = PixelTarget::Grid {
        row: Coord::Index(0),
        col: Coord::Percent(-EDGE_OVERFLOW_PERCENT),
    };
    let right = PixelTarget::Grid {
        row: Coord::Index(geometry.max_row),
        col: Coord::Percent(100 + EDGE_OVERFLOW_PERCENT),
    };

    let frames = multi_bleed(params.frames_per_transition, Interp::Linear, &params.colors)?
        .map(|color| {
            let mut frame = Frame::with_capacity(2);
            frame.push(left, color);
            frame.push(right, color);
            frame
        })
        .collect();

    Ok(Animation::new(
        AnimationSettings::looping(FRAME_DELAY).interpolated(),
        frames,
    ))
}

pub struct Pulse;

impl Generator for Pulse {
    fn name(&self) -> &'static str {
        "pulse"
    }

    fn summary(&self) -> &'static str {
        "cycle the whole board through a list of colors"
    }

    fn generate(&self, geometry: &KeyboardGeometry, params: &Params<'_>) -> KbanimResult<Animation> {
        pulse(geometry, &PulseParams::from_params(params)?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/generators/pulse.rs"]
mod tests;
