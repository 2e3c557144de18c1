use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
    sync::LazyLock,
};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::{
    animation::frame::Animation,
    foundation::error::{KbanimError, KbanimResult},
    generators::Registry,
    keyboard::geometry::KeyboardGeometry,
};

static NON_WORD: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"\W+").expect("static pattern"));

/// Strip whitespace and every non-word character, e.g. `"Pulse (RGB)"` -> `"PulseRGB"`.
pub fn sanitize_name(name: &str) -> String {
    NON_WORD.replace_all(name, "").into_owned()
}

/// One named generator invocation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationInstance {
    pub generator: String,
    #[serde(default)]
    pub params: Vec<Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchConfig {
    #[serde(default)]
    pub animations: BTreeMap<String, AnimationInstance>,
    /// Names to run; empty runs every entry.
    #[serde(default)]
    pub active_animations: Vec<String>,
}

impl BatchConfig {
    /// Example config written when none exists yet.
    pub fn demo() -> Self {
        let entry = |generator: &str, params: Vec<Value>| AnimationInstance {
            generator: generator.to_string(),
            params,
        };
        let animations = BTreeMap::from([
            (
                "Pulse RGB".to_string(),
                entry(
                    "pulse",
                    vec![json!(20), json!([[255, 0, 0], [0, 255, 0], [0, 0, 255]])],
                ),
            ),
            (
                "KITT".to_string(),
                entry("kitt", vec![json!("#ff0000"), json!(4), json!(5)]),
            ),
            ("Breathe".to_string(), entry("breathe", vec![json!(12)])),
            (
                "Static".to_string(),
                entry("fill", vec![json!("#ffffff"), json!("#0000ff")]),
            ),
        ]);
        Self {
            animations,
            active_animations: vec!["Pulse RGB".to_string(), "KITT".to_string()],
        }
    }

    pub fn from_path(path: &Path) -> KbanimResult<Self> {
        let f =
            File::open(path).with_context(|| format!("open batch config '{}'", path.display()))?;
        let config = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("parse batch config JSON '{}'", path.display()))?;
        Ok(config)
    }

    pub fn write_to(&self, path: &Path) -> KbanimResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create batch config dir '{}'", parent.display()))?;
        }
        let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(f), self)
            .with_context(|| format!("write batch config '{}'", path.display()))?;
        Ok(())
    }

    /// Load `path`, writing [`BatchConfig::demo`] there first if it does not exist.
    pub fn load_or_init(path: &Path) -> KbanimResult<Self> {
        if !path.exists() {
            Self::demo().write_to(path)?;
            tracing::info!(path = %path.display(), "created default batch config");
        }
        Self::from_path(path)
    }

    /// Display names selected for a run, in run order.
    pub fn selected(&self) -> KbanimResult<Vec<&str>> {
        if self.active_animations.is_empty() {
            return Ok(self.animations.keys().map(String::as_str).collect());
        }
        self.active_animations
            .iter()
            .map(|name| {
                if self.animations.contains_key(name) {
                    Ok(name.as_str())
                } else {
                    Err(KbanimError::config(format!(
                        "active animation '{name}' is not defined"
                    )))
                }
            })
            .collect()
    }

    /// Run every selected animation, keyed by sanitized name.
    ///
    /// Names and generators are checked before anything runs.
    #[tracing::instrument(skip_all, fields(animations = self.animations.len()))]
    pub fn run(
        &self,
        registry: &Registry,
        geometry: &KeyboardGeometry,
    ) -> KbanimResult<BTreeMap<String, Animation>> {
        let selected = self.selected()?;

        let mut planned: BTreeMap<String, (&str, &AnimationInstance)> = BTreeMap::new();
        for name in selected {
            let instance = &self.animations[name];
            if !registry.contains(&instance.generator) {
                return Err(KbanimError::config(format!(
                    "animation '{name}' uses unknown generator '{}'",
                    instance.generator
                )));
            }
            let key = sanitize_name(name);
            if key.is_empty() {
                return Err(KbanimError::config(format!(
                    "animation name '{name}' has no word characters"
                )));
            }
            if let Some((prev, _)) = planned.get(&key) {
                return Err(KbanimError::config(format!(
                    "animation names '{prev}' and '{name}' both map to '{key}'"
                )));
            }
            planned.insert(key, (name, instance));
        }

        let mut out = BTreeMap::new();
        for (key, (name, instance)) in planned {
            tracing::info!(animation = name, generator = %instance.generator, "generating");
            let anim = registry.generate(&instance.generator, geometry, &instance.params)?;
            out.insert(key, anim);
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/batch/config.rs"]
mod tests;
