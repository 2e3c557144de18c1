use crate::{
    animation::frame::{Animation, AnimationSettings, Frame},
    foundation::{color::Rgb, error::KbanimResult},
    generators::{Generator, Params},
    keyboard::geometry::KeyboardGeometry,
};

pub const DEFAULT_KEYED: Rgb = Rgb::WHITE;
pub const DEFAULT_BLANK: Rgb = Rgb::BLUE;
pub const DEFAULT_TOP: Rgb = Rgb::ORANGE;
pub const DEFAULT_BASE: Rgb = Rgb::PURPLE;
pub const STATIC_FRAME_DELAY: u32 = 255;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FillParams {
    pub keyed: Rgb,
    pub blank: Rgb,
}

impl Default for FillParams {
    fn default() -> Self {
        Self {
            keyed: DEFAULT_KEYED,
            blank: DEFAULT_BLANK,
        }
    }
}

impl FillParams {
    /// `[keyed, blank]`
    pub fn from_params(p: &Params<'_>) -> KbanimResult<Self> {
        p.expect_at_most(2)?;
        Ok(Self {
            keyed: p.color_or(0, DEFAULT_KEYED)?,
            blank: p.color_or(1, DEFAULT_BLANK)?,
        })
    }
}

/// Single static frame: keyed LEDs in one color, blank LEDs in another.
pub fn fill(geometry: &KeyboardGeometry, params: &FillParams) -> Animation {
    let mut frame = Frame::with_capacity(geometry.led_count());
    frame.fill_ids(&geometry.keyed, params.keyed);
    frame.fill_ids(&geometry.blank, params.blank);
    Animation::new(AnimationSettings::looping(STATIC_FRAME_DELAY), vec![frame])
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionsParams {
    pub top: Rgb,
    pub base: Rgb,
    /// First id of the base region; `None` uses the lowest blank LED id.
    pub boundary: Option<u32>,
}

impl Default for RegionsParams {
    fn default() -> Self {
        Self {
            top: DEFAULT_TOP,
            base: DEFAULT_BASE,
            boundary: None,
        }
    }
}

impl RegionsParams {
    /// `[top, base, boundary_id]`
    pub fn from_params(p: &Params<'_>) -> KbanimResult<Self> {
        p.expect_at_most(3)?;
        Ok(Self {
            top: p.color_or(0, DEFAULT_TOP)?,
            base: p.color_or(1, DEFAULT_BASE)?,
            boundary: p.u32_opt(2)?,
        })
    }
}

/// Single static frame splitting LEDs by id: below the boundary is "top", the rest "base".
pub fn regions(geometry: &KeyboardGeometry, params: &RegionsParams) -> Animation {
    let ids = geometry.all_ids();
    let boundary = params
        .boundary
        .or_else(|| geometry.blank.first().copied())
        .unwrap_or(u32::MAX);
    let split = ids.partition_point(|id| *id < boundary);

    let mut frame = Frame::with_capacity(ids.len());
    frame.fill_ids(&ids[..split], params.top);
    frame.fill_ids(&ids[split..], params.base);
    Animation::new(AnimationSettings::looping(STATIC_FRAME_DELAY), vec![frame])
}

pub struct Fill;

impl Generator for Fill {
    fn name(&self) -> &'static str {
        "fill"
    }

    fn summary(&self) -> &'static str {
        "static colors for keyed and blank LEDs"
    }

    fn generate(&self, geometry: &KeyboardGeometry, params: &Params<'_>) -> KbanimResult<Animation> {
        Ok(fill(geometry, &FillParams::from_params(params)?))
    }
}

pub struct Regions;

impl Generator for Regions {
    fn name(&self) -> &'static str {
        "regions"
    }

    fn summary(&self) -> &'static str {
        "static top/base split by LED id range"
    }

    fn generate(&self, geometry: &KeyboardGeometry, params: &Params<'_>) -> KbanimResult<Animation> {
        Ok(regions(geometry, &RegionsParams::from_params(params)?))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/generators/fill.rs"]
mod tests;
