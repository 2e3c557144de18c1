use crate::{
    animation::{
        bleed::gradient,
        frame::{Animation, AnimationSettings, Frame},
        interp::Interp,
        pixel::PixelTarget,
    },
    foundation::{color::Rgb, error::KbanimResult},
    generators::{Generator, Params},
    keyboard::geometry::KeyboardGeometry,
};

pub const DEFAULT_RING: Rgb = Rgb::ORANGE;
pub const DEFAULT_KEYS: Rgb = Rgb::WHITE;
pub const FRAME_DELAY: u32 = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RotateParams {
    pub ring: Rgb,
    pub keys: Rgb,
}

impl Default for RotateParams {
    fn default() -> Self {
        Self {
            ring: DEFAULT_RING,
            keys: DEFAULT_KEYS,
        }
    }
}

impl RotateParams {
    /// `[ring, keys]`
    pub fn from_params(p: &Params<'_>) -> KbanimResult<Self> {
        p.expect_at_most(2)?;
        Ok(Self {
            ring: p.color_or(0, DEFAULT_RING)?,
            keys: p.color_or(1, DEFAULT_KEYS)?,
        })
    }
}

/// `n` intensity slots fading from `color` (slot 0) down to black (slot `n - 1`).
pub fn falloff_slots(color: Rgb, n: usize) -> Vec<Rgb> {
    match n {
        0 => Vec::new(),
        1 => vec![color],
        _ => gradient(color, Rgb::BLACK, n - 1, Interp::Linear).collect(),
    }
}

/// Blank LEDs carry a fixed intensity falloff whose slots rotate one id per frame; keyed LEDs
/// hold a constant color. Colors are never recomputed per frame, only reassigned.
pub fn rotate(geometry: &KeyboardGeometry, params: &RotateParams) -> Animation {
    let ring = &geometry.blank;
    let n = ring.len();
    let slots = falloff_slots(params.ring, n);

    let frames = (0..n.max(1))
        .map(|shift| {
            let mut frame = Frame::with_capacity(geometry.led_count());
            frame.fill_ids(&geometry.keyed, params.keys);
            for (i, id) in ring.iter().enumerate() {
                frame.push(PixelTarget::Id(*id), slots[(i + n - shift) % n]);
            }
            frame
        })
        .collect();

    Animation::new(AnimationSettings::looping(FRAME_DELAY), frames)
}

pub struct Rotate;

impl Generator for Rotate {
    fn name(&self) -> &'static str {
        "rotate"
    }

    fn summary(&self) -> &'static str {
        "fading highlight circling the base LEDs under static keys"
    }

    fn generate(&self, geometry: &KeyboardGeometry, params: &Params<'_>) -> KbanimResult<Animation> {
        Ok(rotate(geometry, &RotateParams::from_params(params)?))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/generators/rotate.rs"]
mod tests;
