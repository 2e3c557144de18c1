//! kbanim synthesizes keyboard RGB lighting animations.
//!
//! Generators turn keyboard geometry plus a few parameters into frames of pixel commands, which
//! are written into a configurator keyboard document as named animations with trigger keys.
//!
//! # Pipeline overview
//!
//! 1. **Load**: keyboard document + geometry document -> [`KeyboardGeometry`]
//! 2. **Generate**: one generator, all of them, or a batch config -> named [`Animation`]s
//! 3. **Merge**: animations and trigger keys into the [`KeyboardConfig`]
//! 4. **Write**: a new, timestamped output document
//!
//! Every generator except `noise` is deterministic for the same geometry and parameters.
#![forbid(unsafe_code)]

pub mod animation;
pub mod batch;
pub mod foundation;
pub mod generators;
pub mod keyboard;
pub mod pipeline;

pub use animation::{
    bleed::{bleed, multi_bleed},
    frame::{Animation, AnimationSettings, Frame, PixelFunc, ReplaceMode},
    interp::Interp,
    pixel::{Coord, PixelCommand, PixelTarget, format_pixel},
};
pub use batch::config::{AnimationInstance, BatchConfig, sanitize_name};
pub use foundation::{
    color::Rgb,
    error::{KbanimError, KbanimResult},
};
pub use generators::{Generator, Params, Registry};
pub use keyboard::{
    config::{KeyboardConfig, TriggerAction, TriggerAssignment},
    geometry::{GeometryDoc, KeyboardGeometry},
};
pub use pipeline::{Selection, generate_animations, run, run_at};
