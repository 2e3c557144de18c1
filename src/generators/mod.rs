//! Generator catalog.
//!
//! Every generator is a pure function of keyboard geometry and its own typed parameters. The
//! [`Registry`] maps names to implementations so the CLI and batch configs can select them at
//! runtime.

pub mod breathe;
pub mod fill;
pub mod kitt;
pub mod noise;
pub mod pulse;
pub mod rotate;
pub mod wave;

use std::collections::BTreeMap;

use serde_json::Value;

use crate::{
    animation::frame::Animation,
    foundation::{
        color::Rgb,
        error::{KbanimError, KbanimResult},
    },
    keyboard::geometry::KeyboardGeometry,
};

/// Common contract of catalog entries.
pub trait Generator: Send + Sync {
    /// Registry key.
    fn name(&self) -> &'static str;

    /// One-line description for help output.
    fn summary(&self) -> &'static str;

    /// Build the animation. Missing parameters take the generator's documented defaults.
    fn generate(&self, geometry: &KeyboardGeometry, params: &Params<'_>) -> KbanimResult<Animation>;
}

/// Positional generator parameters as they appear in a batch config.
///
/// Absent or `null` entries fall back to defaults; present entries of the wrong type are errors.
#[derive(Clone, Copy, Debug)]
pub struct Params<'a> {
    generator: &'static str,
    values: &'a [Value],
}

impl<'a> Params<'a> {
    pub fn new(generator: &'static str, values: &'a [Value]) -> Self {
        Self { generator, values }
    }

    /// No parameters at all; every field takes its default.
    pub fn empty(generator: &'static str) -> Self {
        Self {
            generator,
            values: &[],
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn expect_at_most(&self, n: usize) -> KbanimResult<()> {
        if self.values.len() > n {
            return Err(KbanimError::params(format!(
                "{} takes at most {n} parameters, got {}",
                self.generator,
                self.values.len()
            )));
        }
        Ok(())
    }

    fn get(&self, idx: usize) -> Option<&'a Value> {
        self.values.get(idx).filter(|v| !v.is_null())
    }

    fn mismatch(&self, idx: usize, expected: &str, got: &Value) -> KbanimError {
        KbanimError::params(format!(
            "{} parameter {idx}: expected {expected}, got {got}",
            self.generator
        ))
    }

    pub fn usize_or(&self, idx: usize, default: usize) -> KbanimResult<usize> {
        let Some(v) = self.get(idx) else {
            return Ok(default);
        };
        v.as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| self.mismatch(idx, "a non-negative integer", v))
    }

    pub fn i32_or(&self, idx: usize, default: i32) -> KbanimResult<i32> {
        let Some(v) = self.get(idx) else {
            return Ok(default);
        };
        v.as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| self.mismatch(idx, "an integer", v))
    }

    pub fn u8_or(&self, idx: usize, default: u8) -> KbanimResult<u8> {
        let Some(v) = self.get(idx) else {
            return Ok(default);
        };
        v.as_u64()
            .and_then(|n| u8::try_from(n).ok())
            .ok_or_else(|| self.mismatch(idx, "an integer in 0..=255", v))
    }

    pub fn u32_opt(&self, idx: usize) -> KbanimResult<Option<u32>> {
        let Some(v) = self.get(idx) else {
            return Ok(None);
        };
        v.as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| self.mismatch(idx, "a non-negative integer", v))
    }

    pub fn f64_or(&self, idx: usize, default: f64) -> KbanimResult<f64> {
        let Some(v) = self.get(idx) else {
            return Ok(default);
        };
        v.as_f64()
            .ok_or_else(|| self.mismatch(idx, "a number", v))
    }

    pub fn color_or(&self, idx: usize, default: Rgb) -> KbanimResult<Rgb> {
        let Some(v) = self.get(idx) else {
            return Ok(default);
        };
        Rgb::from_json(v).map_err(|e| {
            KbanimError::params(format!("{} parameter {idx}: {e}", self.generator))
        })
    }

    pub fn colors_or(&self, idx: usize, default: &[Rgb]) -> KbanimResult<Vec<Rgb>> {
        let Some(v) = self.get(idx) else {
            return Ok(default.to_vec());
        };
        let Value::Array(items) = v else {
            return Err(self.mismatch(idx, "a list of colors", v));
        };
        items
            .iter()
            .map(|item| {
                Rgb::from_json(item).map_err(|e| {
                    KbanimError::params(format!("{} parameter {idx}: {e}", self.generator))
                })
            })
            .collect()
    }
}

/// Name -> generator table.
pub struct Registry {
    generators: BTreeMap<&'static str, Box<dyn Generator>>,
}

impl Registry {
    pub fn empty() -> Self {
        Self {
            generators: BTreeMap::new(),
        }
    }

    /// Every built-in generator.
    pub fn builtin() -> Self {
        let mut reg = Self::empty();
        let builtins: [Box<dyn Generator>; 8] = [
            Box::new(breathe::Breathe),
            Box::new(fill::Fill),
            Box::new(fill::Regions),
            Box::new(kitt::Kitt),
            Box::new(noise::Noise),
            Box::new(pulse::Pulse),
            Box::new(rotate::Rotate),
            Box::new(wave::Wave),
        ];
        for g in builtins {
            reg.generators.insert(g.name(), g);
        }
        reg
    }

    pub fn register(&mut self, generator: Box<dyn Generator>) -> KbanimResult<()> {
        let name = generator.name();
        if self.generators.contains_key(name) {
            return Err(KbanimError::validation(format!(
                "generator '{name}' is already registered"
            )));
        }
        self.generators.insert(name, generator);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&dyn Generator> {
        self.generators.get(name).map(|g| g.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.generators.contains_key(name)
    }

    /// Names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.generators.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Generator> + '_ {
        self.generators.values().map(|g| g.as_ref())
    }

    /// Look up `name` and run it with positional `params`.
    pub fn generate(
        &self,
        name: &str,
        geometry: &KeyboardGeometry,
        params: &[Value],
    ) -> KbanimResult<Animation> {
        let generator = self
            .get(name)
            .ok_or_else(|| KbanimError::config(format!("unknown generator '{name}'")))?;
        let anim = generator.generate(geometry, &Params::new(generator.name(), params))?;
        tracing::debug!(
            generator = name,
            frames = anim.frame_count(),
            "generated animation"
        );
        Ok(anim)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/generators/registry.rs"]
mod tests;
