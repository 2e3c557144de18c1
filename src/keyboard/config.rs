//! Configurator keyboard document.
//!
//! Only the fields the generator touches are typed. Everything else is carried through
//! `extra` maps so a load/save round trip keeps the document intact.

use std::{
    collections::BTreeMap,
    fmt,
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{animation::frame::Animation, foundation::error::KbanimResult};

/// Layer whose bindings carry the physical key labels used to pick trigger keys.
pub const BASE_LAYER: &str = "0";

/// Layer that trigger keys are bound on.
pub const TRIGGER_LAYER: &str = "1";

/// Key labels eligible as animation triggers, in assignment order.
pub const TRIGGER_KEY_POOL: &[&str] = &[
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "Q", "W", "E", "R", "T", "Y", "U", "I", "O",
    "P",
];

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct KeyboardConfig {
    #[serde(default)]
    pub header: Header,
    #[serde(default)]
    pub matrix: Vec<MatrixKey>,
    #[serde(default)]
    pub leds: Vec<LedDesc>,
    #[serde(default)]
    pub animations: BTreeMap<String, AnimationEntry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Header {
    #[serde(rename = "Author", default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(rename = "Date", default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "Layout", default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(rename = "Variant", default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(rename = "Generator", default, skip_serializing_if = "Option::is_none")]
    pub generator: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MatrixKey {
    /// Layer number (as a string key) -> binding.
    #[serde(default)]
    pub layers: BTreeMap<String, KeyBinding>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub triggers: Vec<TriggerAction>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MatrixKey {
    /// Label of the base-layer binding, falling back to its key name.
    pub fn base_label(&self) -> Option<&str> {
        let binding = self.layers.get(BASE_LAYER)?;
        if binding.label.is_empty() {
            Some(binding.key.as_str())
        } else {
            Some(binding.label.as_str())
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub label: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LedDesc {
    pub id: u32,
    #[serde(rename = "scanCode", default, skip_serializing_if = "Option::is_none")]
    pub scan_code: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Serialized animation as the configurator stores it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationEntry {
    #[serde(default)]
    pub settings: String,
    #[serde(default)]
    pub frames: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<&Animation> for AnimationEntry {
    fn from(anim: &Animation) -> Self {
        Self {
            settings: anim.settings.to_string(),
            frames: anim.frame_strings(),
            extra: Map::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationState {
    Start,
    Stop,
}

/// One action fired by a trigger key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerAction {
    pub animation: String,
    pub state: AnimationState,
}

impl fmt::Display for TriggerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            AnimationState::Start => "start",
            AnimationState::Stop => "stop",
        };
        write!(f, "A[{}]({state})", self.animation)
    }
}

/// A key that was bound to start an animation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerAssignment {
    pub key_label: String,
    pub animation: String,
}

impl KeyboardConfig {
    pub fn from_path(path: &Path) -> KbanimResult<Self> {
        let f = File::open(path)
            .with_context(|| format!("open keyboard config '{}'", path.display()))?;
        let config = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("parse keyboard config JSON '{}'", path.display()))?;
        Ok(config)
    }

    pub fn write_to(&self, path: &Path) -> KbanimResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(f), self)
            .with_context(|| format!("write keyboard config '{}'", path.display()))?;
        Ok(())
    }

    /// Insert or replace animation entries by name.
    pub fn merge_animations(&mut self, animations: &BTreeMap<String, Animation>) {
        for (name, anim) in animations {
            self.animations.insert(name.clone(), AnimationEntry::from(anim));
        }
    }

    /// Bind each animation in `names` to one free trigger key.
    ///
    /// Candidates are the [`TRIGGER_KEY_POOL`] labels, in pool order, that exist on the base layer
    /// and have no binding yet on [`TRIGGER_LAYER`]. The bound key starts its animation and stops
    /// every other animation in the document. Animations left over once the pool is exhausted
    /// stay unbound.
    pub fn assign_triggers(&mut self, names: &[String]) -> Vec<TriggerAssignment> {
        let all: Vec<String> = self.animations.keys().cloned().collect();
        let mut pending = names.iter();
        let mut assigned = Vec::new();

        for label in TRIGGER_KEY_POOL {
            let Some(slot) = self.matrix.iter().position(|k| {
                k.base_label() == Some(*label) && !k.layers.contains_key(TRIGGER_LAYER)
            }) else {
                continue;
            };
            let Some(name) = pending.next() else {
                break;
            };

            let mut triggers = vec![TriggerAction {
                animation: name.clone(),
                state: AnimationState::Start,
            }];
            triggers.extend(all.iter().filter(|other| *other != name).map(|other| {
                TriggerAction {
                    animation: other.clone(),
                    state: AnimationState::Stop,
                }
            }));

            let key = &mut self.matrix[slot];
            key.layers.insert(
                TRIGGER_LAYER.to_string(),
                KeyBinding {
                    key: triggers[0].to_string(),
                    label: name.clone(),
                    extra: Map::new(),
                },
            );
            key.triggers = triggers;

            assigned.push(TriggerAssignment {
                key_label: (*label).to_string(),
                animation: name.clone(),
            });
        }

        for name in pending {
            tracing::warn!(animation = %name, "no free trigger key left");
        }
        assigned
    }

    /// Record when and with which generator this document was produced.
    pub fn stamp_header(&mut self, label: &str, date: chrono::NaiveDate) {
        self.header.date = Some(date.format("%Y-%m-%d").to_string());
        self.header.variant = Some(label.to_string());
        self.header.generator = Some(format!(
            "{} {}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        ));
    }

    /// Layout name used in output filenames.
    pub fn layout_name(&self) -> &str {
        self.header
            .layout
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or("keyboard")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/keyboard/config.rs"]
mod tests;
