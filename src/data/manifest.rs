use std::{
    collections::{BTreeMap, HashMap},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use fs_err as fs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::icon::{Icon, IconName};

/// Describes where every icon lives within a sheet rendered at one scale.
///
/// Keys are sorted so that the same sheet always serializes to the same bytes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    pub entries: BTreeMap<IconName, ManifestEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    pub width: u32,
    pub height: u32,
    pub x: u32,
    pub y: u32,

    /// The scale this entry was computed for. Every other field has already
    /// been multiplied by it.
    pub pixel_ratio: u32,
}

impl ManifestEntry {
    /// Scales every field of `icon` by `scale`, on top of whatever scale the
    /// icon already carries. Returns `None` if any field no longer fits in a
    /// `u32`.
    pub fn for_icon(icon: &Icon, scale: u32) -> Option<Self> {
        Some(Self {
            width: icon.width.checked_mul(scale)?,
            height: icon.height.checked_mul(scale)?,
            x: icon.x.checked_mul(scale)?,
            y: icon.y.checked_mul(scale)?,
            pixel_ratio: icon.scale.checked_mul(scale)?,
        })
    }
}

/// What to do when two icons end up with the same manifest key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameConflictPolicy {
    /// Keep the icon that came last, logging a warning.
    Overwrite,

    /// Fail the build.
    Error,
}

impl Default for NameConflictPolicy {
    fn default() -> Self {
        NameConflictPolicy::Overwrite
    }
}

impl Manifest {
    /// Projects laid out icons into a manifest for `scale`. Positions and
    /// sizes are multiplied by the same factor.
    pub fn from_icons(
        icons: &[Icon],
        scale: u32,
        policy: NameConflictPolicy,
    ) -> Result<Self, ManifestError> {
        let mut entries = BTreeMap::new();
        let mut sources: HashMap<&IconName, &Path> = HashMap::new();

        for icon in icons {
            if let Some(previous) = sources.insert(&icon.name, &icon.path) {
                match policy {
                    NameConflictPolicy::Overwrite => {
                        log::warn!(
                            "Icons {} and {} are both named '{}', keeping {}",
                            previous.display(),
                            icon.path.display(),
                            icon.name,
                            icon.path.display()
                        );
                    }
                    NameConflictPolicy::Error => {
                        return Err(ManifestError::NameConflict {
                            name: icon.name.clone(),
                            first: previous.to_owned(),
                            second: icon.path.clone(),
                        });
                    }
                }
            }

            let entry =
                ManifestEntry::for_icon(icon, scale).ok_or_else(|| ManifestError::TooLarge {
                    name: icon.name.clone(),
                    scale,
                })?;

            entries.insert(icon.name.clone(), entry);
        }

        Ok(Self { entries })
    }

    pub fn get(&self, name: &str) -> Option<&ManifestEntry> {
        self.entries.get(name)
    }

    pub fn write_to_file(&self, path: &Path) -> Result<(), ManifestError> {
        let mut file = BufWriter::new(fs::File::create(path)?);
        serde_json::to_writer_pretty(&mut file, self)?;
        file.flush()?;

        log::trace!("Saved manifest to {}", path.display());

        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("icons {} and {} are both named '{name}'", .first.display(), .second.display())]
    NameConflict {
        name: IconName,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("icon '{name}' is too large to describe at {scale}x")]
    TooLarge { name: IconName, scale: u32 },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}
