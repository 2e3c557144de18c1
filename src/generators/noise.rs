use crate::{
    animation::{
        frame::{Animation, AnimationSettings, Frame, MAX_FRAMES},
        interp::Interp,
        pixel::{PixelCommand, PixelTarget},
    },
    foundation::{
        color::Rgb,
        error::{KbanimError, KbanimResult},
    },
    generators::{Generator, Params},
    keyboard::geometry::KeyboardGeometry,
};

pub const DEFAULT_FRAMES: usize = 20;
/// Brightest gray level a pixel may reach.
pub const DEFAULT_CEILING: u8 = 191;
pub const FRAME_DELAY: u32 = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoiseParams {
    pub frames: usize,
    pub ceiling: u8,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            frames: DEFAULT_FRAMES,
            ceiling: DEFAULT_CEILING,
        }
    }
}

impl NoiseParams {
    /// `[frames, ceiling]`
    pub fn from_params(p: &Params<'_>) -> KbanimResult<Self> {
        p.expect_at_most(2)?;
        Ok(Self {
            frames: p.usize_or(0, DEFAULT_FRAMES)?,
            ceiling: p.u8_or(1, DEFAULT_CEILING)?,
        })
    }
}

/// Independent random gray level per LED per frame. Not reproducible.
pub fn noise(geometry: &KeyboardGeometry, params: &NoiseParams) -> KbanimResult<Animation> {
    if !(1..=MAX_FRAMES).contains(&params.frames) {
        return Err(KbanimError::validation(format!(
            "noise frames must be within 1..={MAX_FRAMES}, got {}",
            params.frames
        )));
    }
    let ids = geometry.all_ids();
    let ceiling = f64::from(params.ceiling);

    let frames = (0..params.frames)
        .map(|_| {
            ids.iter()
                .map(|id| {
                    let level = Interp::Random.sample(0, 1, 0.0, ceiling);
                    PixelCommand::new(PixelTarget::Id(*id), Rgb::from_f64(level, level, level))
                })
                .collect::<Frame>()
        })
        .collect();

    Ok(Animation::new(AnimationSettings::looping(FRAME_DELAY), frames))
}

pub struct Noise;

impl Generator for Noise {
    fn name(&self) -> &'static str {
        "noise"
    }

    fn summary(&self) -> &'static str {
        "random gray static on every LED"
    }

    fn generate(&self, geometry: &KeyboardGeometry, params: &Params<'_>) -> KbanimResult<Animation> {
        noise(geometry, &NoiseParams::from_params(params)?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/generators/noise.rs"]
mod tests;
