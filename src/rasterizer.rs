use std::{
    ffi::OsString,
    io,
    path::Path,
    process::{Command, ExitStatus},
};

use thiserror::Error;

/// Density that corresponds to one device pixel per sheet unit.
pub const BASE_DPI: u32 = 96;

/// Turns a vector document into a raster image.
pub trait Rasterizer {
    fn rasterize(&mut self, source: &Path, destination: &Path, dpi: u32)
        -> Result<(), Error>;

    /// Whether `rasterize` actually writes a file to `destination`.
    fn produces_rasters(&self) -> bool {
        true
    }
}

/// Shells out to Inkscape, blocking until it exits.
pub struct InkscapeRasterizer {
    program: OsString,
}

impl InkscapeRasterizer {
    pub fn new<P: Into<OsString>>(program: P) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Rasterizer for InkscapeRasterizer {
    fn rasterize(&mut self, source: &Path, destination: &Path, dpi: u32) -> Result<(), Error> {
        log::info!(
            "Rasterizing {} to {} at {} dpi",
            source.display(),
            destination.display(),
            dpi
        );

        let program = self.program.to_string_lossy().into_owned();

        let output = Command::new(&self.program)
            .arg(format!("--export-dpi={}", dpi))
            .arg(source)
            .arg("-o")
            .arg(destination)
            .output()
            .map_err(|source| Error::Spawn {
                program: program.clone(),
                source,
            })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        let combined = combined.trim().to_owned();

        if !output.status.success() {
            return Err(Error::Failed {
                program,
                status: output.status,
                output: combined,
            });
        }

        if !combined.is_empty() {
            log::debug!("{}: {}", program, combined);
        }

        Ok(())
    }
}

/// Skips rasterization, for builds that only need the sheet and manifests.
pub struct NoneRasterizer;

impl Rasterizer for NoneRasterizer {
    fn rasterize(&mut self, _source: &Path, destination: &Path, _dpi: u32) -> Result<(), Error> {
        log::info!("Not rasterizing {}", destination.display());
        Ok(())
    }

    fn produces_rasters(&self) -> bool {
        false
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("couldn't run '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("'{program}' failed ({status}): {output}")]
    Failed {
        program: String,
        status: ExitStatus,
        output: String,
    },
}
