use std::{
    io,
    path::{Path, PathBuf},
};

use fs_err as fs;
use thiserror::Error;

use crate::{
    artifact_name::{self, MANIFEST_EXTENSION, RASTER_EXTENSION},
    compose,
    data::{Manifest, ManifestError, NameConflictPolicy},
    layout::Sheet,
    raster_size,
    rasterizer::{self, Rasterizer, BASE_DPI},
};

#[derive(Debug, Clone)]
pub struct ExportSettings<'a> {
    /// The folder every artifact is written to.
    pub output_dir: &'a Path,

    /// The base name shared by every artifact, like `sprites`.
    pub name: &'a str,

    /// Density scales to export, in order.
    pub scales: &'a [u32],

    pub name_conflicts: NameConflictPolicy,
}

/// Writes the combined sheet once, then a manifest and a raster for each
/// scale in order.
///
/// Stops at the first failure. Artifacts written before the failure are left
/// on disk. Returns the paths of every artifact that was written.
pub fn export<R: Rasterizer + ?Sized>(
    sheet: &Sheet,
    settings: &ExportSettings<'_>,
    rasterizer: &mut R,
) -> Result<Vec<PathBuf>, Error> {
    let targets = settings
        .scales
        .iter()
        .map(|&scale| ScaleTarget::new(sheet, scale))
        .collect::<Result<Vec<_>, _>>()?;

    fs::create_dir_all(settings.output_dir)?;

    let sheet_path = artifact_name::sheet_path(settings.output_dir, settings.name);
    compose::write_sheet(sheet, &sheet_path).map_err(|source| Error::WriteSheet {
        path: sheet_path.clone(),
        source,
    })?;

    let mut written = vec![sheet_path.clone()];

    for target in targets {
        let scale = target.scale;
        log::info!("Exporting {}x", scale);

        let manifest_path = artifact_name::path_for_scale(
            settings.output_dir,
            settings.name,
            scale,
            MANIFEST_EXTENSION,
        );

        Manifest::from_icons(&sheet.icons, scale, settings.name_conflicts)
            .and_then(|manifest| manifest.write_to_file(&manifest_path))
            .map_err(|source| Error::Manifest { scale, source })?;

        written.push(manifest_path);

        if !rasterizer.produces_rasters() {
            continue;
        }

        let raster_path = artifact_name::path_for_scale(
            settings.output_dir,
            settings.name,
            scale,
            RASTER_EXTENSION,
        );

        rasterizer
            .rasterize(&sheet_path, &raster_path, target.dpi)
            .map_err(|source| Error::Rasterize { scale, source })?;

        raster_size::check_raster_size(&raster_path, target.raster_size);

        written.push(raster_path);
    }

    Ok(written)
}

/// The rasterizer inputs for one scale, checked before anything is written.
struct ScaleTarget {
    scale: u32,
    dpi: u32,
    raster_size: (u32, u32),
}

impl ScaleTarget {
    fn new(sheet: &Sheet, scale: u32) -> Result<Self, Error> {
        if scale == 0 {
            return Err(Error::InvalidScale { scale });
        }

        let (width, height) = sheet.dimensions();
        let too_large = || Error::ScaleTooLarge { scale };

        Ok(Self {
            scale,
            dpi: BASE_DPI.checked_mul(scale).ok_or_else(too_large)?,
            raster_size: (
                width.checked_mul(scale).ok_or_else(too_large)?,
                height.checked_mul(scale).ok_or_else(too_large)?,
            ),
        })
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("scale factors must be greater than zero, got {scale}")]
    InvalidScale { scale: u32 },

    #[error("the sheet is too large to export at {scale}x")]
    ScaleTooLarge { scale: u32 },

    #[error("couldn't write sheet {}", .path.display())]
    WriteSheet {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("couldn't write the {scale}x manifest")]
    Manifest {
        scale: u32,
        #[source]
        source: ManifestError,
    },

    #[error("couldn't rasterize the {scale}x sheet")]
    Rasterize {
        scale: u32,
        #[source]
        source: rasterizer::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}
