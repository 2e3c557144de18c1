use crate::{
    animation::{
        bleed::multi_bleed,
        frame::{Animation, AnimationSettings, Frame},
        interp::Interp,
        pixel::{Coord, PixelCommand, PixelTarget},
    },
    foundation::{color::Rgb, error::KbanimResult},
    generators::{Generator, Params},
    keyboard::geometry::KeyboardGeometry,
};

pub const DEFAULT_STEPS_PER_COLOR: usize = 8;
pub const DEFAULT_COLORS: [Rgb; 6] = [
    Rgb::RED,
    Rgb::YELLOW,
    Rgb::GREEN,
    Rgb::CYAN,
    Rgb::BLUE,
    Rgb::MAGENTA,
];
pub const FRAME_DELAY: u32 = 2;

#[derive(Clone, Debug, PartialEq)]
pub struct WaveParams {
    pub steps_per_color: usize,
    pub colors: Vec<Rgb>,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            steps_per_color: DEFAULT_STEPS_PER_COLOR,
            colors: DEFAULT_COLORS.to_vec(),
        }
    }
}

impl WaveParams {
    /// `[steps_per_color, colors]`
    pub fn from_params(p: &Params<'_>) -> KbanimResult<Self> {
        p.expect_at_most(2)?;
        Ok(Self {
            steps_per_color: p.usize_or(0, DEFAULT_STEPS_PER_COLOR)?,
            colors: p.colors_or(1, &DEFAULT_COLORS)?,
        })
    }
}

/// Color wave scrolling across the LED columns; one gradient sample per frame.
pub fn wave(geometry: &KeyboardGeometry, params: &WaveParams) -> KbanimResult<Animation> {
    let gradient: Vec<Rgb> =
        multi_bleed(params.steps_per_color, Interp::Linear, &params.colors)?.collect();
    let len = gradient.len();
    let columns = geometry.max_col.max(0) as usize + 1;

    let frames = (0..len)
        .map(|shift| {
            (0..columns)
                .map(|col| {
                    PixelCommand::new(
                        PixelTarget::Column(Coord::Index(col as i32)),
                        gradient[(col + shift) % len],
                    )
                })
                .collect::<Frame>()
        })
        .collect();

    Ok(Animation::new(AnimationSettings::looping(FRAME_DELAY), frames))
}

pub struct Wave;

impl Generator for Wave {
    fn name(&self) -> &'static str {
        "wave"
    }

    fn summary(&self) -> &'static str {
        "rainbow wave scrolling across the columns"
    }

    fn generate(&self, geometry: &KeyboardGeometry, params: &Params<'_>) -> KbanimResult<Animation> {
        wave(geometry, &WaveParams::from_params(params)?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/generators/wave.rs"]
mod tests;
