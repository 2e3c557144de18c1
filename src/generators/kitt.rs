use crate::{
    animation::{
        bleed::bleed,
        frame::{Animation, AnimationSettings, Frame},
        interp::Interp,
        pixel::PixelTarget,
    },
    foundation::{
        color::Rgb,
        error::{KbanimError, KbanimResult},
    },
    generators::{Generator, Params},
    keyboard::geometry::KeyboardGeometry,
};

pub const DEFAULT_COLOR: Rgb = Rgb::RED;
pub const DEFAULT_WIDTH: usize = 4;
pub const DEFAULT_STEP_PERCENT: i32 = 5;
pub const DEFAULT_BACKGROUND: Rgb = Rgb::BLACK;
pub const FRAME_DELAY: u32 = 1;
/// Longest tail, in position steps.
pub const MAX_WIDTH: usize = 100;

#[derive(Clone, Debug, PartialEq)]
pub struct KittParams {
    pub color: Rgb,
    /// Tail length in position steps (at least 2).
    pub width: usize,
    /// Column-percent distance travelled per frame.
    pub step_percent: i32,
    pub background: Rgb,
}

impl Default for KittParams {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR,
            width: DEFAULT_WIDTH,
            step_percent: DEFAULT_STEP_PERCENT,
            background: DEFAULT_BACKGROUND,
        }
    }
}

impl KittParams {
    /// `[color, width, step_percent, background]`
    pub fn from_params(p: &Params<'_>) -> KbanimResult<Self> {
        p.expect_at_most(4)?;
        Ok(Self {
            color: p.color_or(0, DEFAULT_COLOR)?,
            width: p.usize_or(1, DEFAULT_WIDTH)?,
            step_percent: p.i32_or(2, DEFAULT_STEP_PERCENT)?,
            background: p.color_or(3, DEFAULT_BACKGROUND)?,
        })
    }
}

/// Head positions of one sweep, from just before the left edge to just past the right edge.
pub fn sweep_positions(step_percent: i32) -> KbanimResult<Vec<i32>> {
    if !(1..=100).contains(&step_percent) {
        return Err(KbanimError::validation(format!(
            "scanner step must be within 1..=100 percent, got {step_percent}"
        )));
    }
    Ok((-step_percent..=100 + step_percent)
        .step_by(step_percent as usize)
        .collect())
}

/// Scanner: a lit segment with a fading tail sweeps across the columns and back.
///
/// The sweep ping-pongs; the turnaround positions are not repeated on the way back.
pub fn kitt(_geometry: &KeyboardGeometry, params: &KittParams) -> KbanimResult<Animation> {
    if params.width > MAX_WIDTH {
        return Err(KbanimError::validation(format!(
            "scanner width must be at most {MAX_WIDTH}, got {}",
            params.width
        )));
    }
    let positions = sweep_positions(params.step_percent)?;
    let tail = bleed(
        params.color,
        params.background,
        Some(params.width.max(2)),
        Interp::Linear,
    );
    let glow = bleed(params.color, params.background, None, Interp::Linear)[0];

    let n = positions.len();
    let back = positions[1..n - 1].iter().rev().map(|p| (*p, -1));
    let frames = positions
        .iter()
        .map(|p| (*p, 1))
        .chain(back)
        .map(|(pos, dir)| scanner_frame(pos, dir, params, &tail, glow))
        .collect();

    Ok(Animation::new(
        AnimationSettings::looping(FRAME_DELAY).interpolated(),
        frames,
    ))
}

fn scanner_frame(pos: i32, dir: i32, params: &KittParams, tail: &[Rgb], glow: Rgb) -> Frame {
    let step = params.step_percent;
    let mut frame = Frame::with_capacity(tail.len() + 3);
    frame.push(PixelTarget::column_percent(-step), params.background);
    frame.push(PixelTarget::column_percent(100 + step), params.background);
    frame.push(PixelTarget::column_percent(pos + dir * step), glow);
    // Farthest tail first so the head wins where positions overlap.
    for (k, color) in tail.iter().enumerate().rev() {
        let offset = dir * step * k as i32;
        frame.push(PixelTarget::column_percent(pos - offset), *color);
    }
    frame
}

pub struct Kitt;

impl Generator for Kitt {
    fn name(&self) -> &'static str {
        "kitt"
    }

    fn summary(&self) -> &'static str {
        "scanner bar with a fading tail sweeping back and forth"
    }

    fn generate(&self, geometry: &KeyboardGeometry, params: &Params<'_>) -> KbanimResult<Animation> {
        kitt(geometry, &KittParams::from_params(params)?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/generators/kitt.rs"]
mod tests;
