use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use crate::{
    animation::frame::Animation,
    batch::config::BatchConfig,
    foundation::error::{KbanimError, KbanimResult},
    generators::Registry,
    keyboard::{
        config::KeyboardConfig,
        geometry::{GeometryDoc, KeyboardGeometry},
    },
};

pub const KEYBOARD_FILE: &str = "keyboard.json";
pub const GEOMETRY_FILE: &str = "geometry.json";
pub const BATCH_FILE: &str = "animations.json";
pub const OUTPUT_DIR: &str = "out";

pub const ALL: &str = "all";
pub const BATCH: &str = "conf";

/// What a run generates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// One registered generator with default parameters.
    Generator(String),
    /// Every registered generator with default parameters.
    All,
    /// The batch config in the source directory.
    Batch,
}

impl Selection {
    /// `None` when `arg` names nothing runnable.
    pub fn parse(arg: &str, registry: &Registry) -> Option<Self> {
        match arg {
            ALL => Some(Self::All),
            BATCH => Some(Self::Batch),
            name if registry.contains(name) => Some(Self::Generator(name.to_string())),
            _ => None,
        }
    }

    /// Tag used in the output filename and header.
    pub fn label(&self) -> &str {
        match self {
            Self::Generator(name) => name,
            Self::All => ALL,
            Self::Batch => BATCH,
        }
    }
}

/// Generate the animations a selection asks for, keyed by animation name.
///
/// `batch` is required for [`Selection::Batch`].
pub fn generate_animations(
    selection: &Selection,
    registry: &Registry,
    geometry: &KeyboardGeometry,
    batch: Option<&BatchConfig>,
) -> KbanimResult<BTreeMap<String, Animation>> {
    match selection {
        Selection::Generator(name) => {
            let anim = registry.generate(name, geometry, &[])?;
            Ok(BTreeMap::from([(name.clone(), anim)]))
        }
        Selection::All => registry
            .names()
            .map(|name| -> KbanimResult<(String, Animation)> {
                Ok((name.to_string(), registry.generate(name, geometry, &[])?))
            })
            .collect(),
        Selection::Batch => batch
            .ok_or_else(|| KbanimError::config("batch selection without a batch config"))?
            .run(registry, geometry),
    }
}

/// Output path for a run: `<source>/out/<layout>-<label>-<YYYYMMDD-HHMMSSmmm>.json`.
pub fn output_path(
    source_dir: &Path,
    layout: &str,
    label: &str,
    now: chrono::NaiveDateTime,
) -> PathBuf {
    source_dir.join(OUTPUT_DIR).join(format!(
        "{layout}-{label}-{}.json",
        now.format("%Y%m%d-%H%M%S%3f")
    ))
}

/// Load the documents in `source_dir`, generate, merge, bind triggers and write a new output
/// document. Returns the written path.
#[tracing::instrument(skip(registry, now), fields(selection = selection.label()))]
pub fn run_at(
    source_dir: &Path,
    selection: &Selection,
    registry: &Registry,
    now: chrono::NaiveDateTime,
) -> KbanimResult<PathBuf> {
    let mut config = KeyboardConfig::from_path(&source_dir.join(KEYBOARD_FILE))?;
    let geometry_doc = GeometryDoc::from_path(&source_dir.join(GEOMETRY_FILE))?;
    let geometry = KeyboardGeometry::from_documents(&config, &geometry_doc);
    tracing::info!(
        max_row = geometry.max_row,
        max_col = geometry.max_col,
        keyed = geometry.keyed.len(),
        blank = geometry.blank.len(),
        "loaded keyboard"
    );

    let batch = match selection {
        Selection::Batch => Some(BatchConfig::load_or_init(&source_dir.join(BATCH_FILE))?),
        _ => None,
    };
    let animations = generate_animations(selection, registry, &geometry, batch.as_ref())?;

    config.merge_animations(&animations);
    let names: Vec<String> = animations.keys().cloned().collect();
    for assignment in config.assign_triggers(&names) {
        tracing::info!(
            key = %assignment.key_label,
            animation = %assignment.animation,
            "bound trigger"
        );
    }
    config.stamp_header(selection.label(), now.date());

    let path = output_path(source_dir, config.layout_name(), selection.label(), now);
    config.write_to(&path)?;
    tracing::info!(path = %path.display(), animations = names.len(), "wrote configuration");
    Ok(path)
}

/// [`run_at`] with the local clock.
pub fn run(source_dir: &Path, selection: &Selection, registry: &Registry) -> KbanimResult<PathBuf> {
    run_at(
        source_dir,
        selection,
        registry,
        chrono::Local::now().naive_local(),
    )
}
