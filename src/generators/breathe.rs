use crate::{
    animation::{
        bleed::multi_bleed,
        frame::{Animation, AnimationSettings, Frame, MAX_FRAMES},
        interp::Interp,
    },
    foundation::{
        color::Rgb,
        error::{KbanimError, KbanimResult},
    },
    generators::{Generator, Params},
    keyboard::geometry::KeyboardGeometry,
};

pub const DEFAULT_BREATHS_PER_MINUTE: f64 = 10.0;
pub const DEFAULT_COLORS: [Rgb; 2] = [Rgb::CYAN, Rgb::MAGENTA];
pub const FRAME_DELAY: u32 = 3;

#[derive(Clone, Debug, PartialEq)]
pub struct BreatheParams {
    pub breaths_per_minute: f64,
    pub colors: Vec<Rgb>,
}

impl Default for BreatheParams {
    fn default() -> Self {
        Self {
            breaths_per_minute: DEFAULT_BREATHS_PER_MINUTE,
            colors: DEFAULT_COLORS.to_vec(),
        }
    }
}

impl BreatheParams {
    /// `[breaths_per_minute, colors]`
    pub fn from_params(p: &Params<'_>) -> KbanimResult<Self> {
        p.expect_at_most(2)?;
        Ok(Self {
            breaths_per_minute: p.f64_or(0, DEFAULT_BREATHS_PER_MINUTE)?,
            colors: p.colors_or(1, &DEFAULT_COLORS)?,
        })
    }
}

/// Frames spent on one inhale (one color transition) at `breaths_per_minute`.
pub fn steps_per_inhale(breaths_per_minute: f64, frame_delay: u32) -> KbanimResult<usize> {
    if !breaths_per_minute.is_finite() || breaths_per_minute <= 0.0 {
        return Err(KbanimError::validation(format!(
            "breaths per minute must be > 0, got {breaths_per_minute}"
        )));
    }
    let seconds_per_breath = 60.0 / breaths_per_minute;
    let steps = (seconds_per_breath * 100.0 / f64::from(frame_delay.max(1))) / 2.0;
    let steps = steps.round();
    if steps > MAX_FRAMES as f64 {
        return Err(KbanimError::validation(format!(
            "{breaths_per_minute} breaths per minute needs {steps} steps per inhale, max {MAX_FRAMES}"
        )));
    }
    Ok((steps as usize).max(1))
}

/// Keyed ("top") LEDs breathe through the colors while blank ("base") LEDs breathe through the
/// same colors in reverse, so the two regions stay in complementary phase.
pub fn breathe(geometry: &KeyboardGeometry, params: &BreatheParams) -> KbanimResult<Animation> {
    let steps = steps_per_inhale(params.breaths_per_minute, FRAME_DELAY)?;
    let base_colors: Vec<Rgb> = params.colors.iter().rev().copied().collect();

    let top = multi_bleed(steps, Interp::Breath, &params.colors)?;
    let base = multi_bleed(steps, Interp::Breath, &base_colors)?;

    let frames = top
        .zip(base)
        .map(|(top, base)| {
            let mut frame = Frame::with_capacity(geometry.led_count());
            frame.fill_ids(&geometry.keyed, top);
            frame.fill_ids(&geometry.blank, base);
            frame
        })
        .collect();

    Ok(Animation::new(AnimationSettings::looping(FRAME_DELAY), frames))
}

pub struct Breathe;

impl Generator for Breathe {
    fn name(&self) -> &'static str {
        "breathe"
    }

    fn summary(&self) -> &'static str {
        "slow ease-in/out color breathing, keys and base in opposite phase"
    }

    fn generate(&self, geometry: &KeyboardGeometry, params: &Params<'_>) -> KbanimResult<Animation> {
        breathe(geometry, &BreatheParams::from_params(params)?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/generators/breathe.rs"]
mod tests;
