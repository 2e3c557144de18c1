use std::fmt;

use crate::{
    animation::pixel::{PixelCommand, PixelTarget},
    foundation::color::Rgb,
};

/// One lighting snapshot. Later commands for the same target override earlier ones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    pub commands: Vec<PixelCommand>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            commands: Vec::with_capacity(n),
        }
    }

    pub fn push(&mut self, target: PixelTarget, color: Rgb) {
        self.commands.push(PixelCommand::new(target, color));
    }

    /// Set every id in `ids` to `color`.
    pub fn fill_ids(&mut self, ids: &[u32], color: Rgb) {
        self.commands
            .extend(ids.iter().map(|id| PixelCommand::new(PixelTarget::Id(*id), color)));
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl FromIterator<PixelCommand> for Frame {
    fn from_iter<I: IntoIterator<Item = PixelCommand>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{cmd}")?;
        }
        Ok(())
    }
}

/// How a started animation treats others already running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplaceMode {
    Basic,
    All,
    Clear,
    Stack,
}

impl ReplaceMode {
    fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::All => "all",
            Self::Clear => "clear",
            Self::Stack => "stack",
        }
    }
}

/// Pixel function applied by the firmware between addressed pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFunc {
    Interp,
    Off,
}

/// Animation settings; rendered as the configurator's settings string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnimationSettings {
    pub frame_delay: Option<u32>,
    pub frame_stretch: bool,
    pub looping: bool,
    pub replace: Option<ReplaceMode>,
    pub pfunc: Option<PixelFunc>,
}

impl AnimationSettings {
    /// Looping, replace-all settings at the given frame delay.
    pub fn looping(frame_delay: u32) -> Self {
        Self {
            frame_delay: Some(frame_delay),
            looping: true,
            replace: Some(ReplaceMode::All),
            ..Self::default()
        }
    }

    /// Same settings with pixel interpolation enabled.
    pub fn interpolated(mut self) -> Self {
        self.pfunc = Some(PixelFunc::Interp);
        self
    }
}

impl fmt::Display for AnimationSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        if let Some(delay) = self.frame_delay {
            parts.push(format!("framedelay:{delay}"));
        }
        if self.frame_stretch {
            parts.push("framestretch".to_string());
        }
        if self.looping {
            parts.push("loop".to_string());
        }
        if let Some(mode) = self.replace {
            parts.push(format!("replace:{}", mode.as_str()));
        }
        match self.pfunc {
            Some(PixelFunc::Interp) => parts.push("pfunc:interp".to_string()),
            Some(PixelFunc::Off) => parts.push("pfunc:off".to_string()),
            None => {}
        }
        f.write_str(&parts.join(", "))
    }
}

/// Upper bound on frames in one animation; firmware animations are small and this keeps every
/// generator run bounded.
pub const MAX_FRAMES: usize = 4096;

/// Settings plus ordered frames, produced once by a generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Animation {
    pub settings: AnimationSettings,
    pub frames: Vec<Frame>,
}

impl Animation {
    pub fn new(settings: AnimationSettings, frames: Vec<Frame>) -> Self {
        Self { settings, frames }
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Wire form of every frame, in order.
    pub fn frame_strings(&self) -> Vec<String> {
        self.frames.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/frame.rs"]
mod tests;
