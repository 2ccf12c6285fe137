//! Reads the pixel size of rasterized sheets so they can be checked against
//! their manifests.

use std::path::Path;

use fs_err as fs;

pub fn png_size(path: &Path) -> Result<(u32, u32), png::DecodingError> {
    let decoder = png::Decoder::new(fs::File::open(path)?);

    // Only the header is needed; the image data is never decoded.
    let (info, _reader) = decoder.read_info()?;

    Ok((info.width, info.height))
}

/// Logs a warning when the raster at `path` isn't `expected` pixels in size.
pub fn check_raster_size(path: &Path, expected: (u32, u32)) {
    match png_size(path) {
        Ok(actual) if actual == expected => {
            log::debug!("{} is {}x{}", path.display(), actual.0, actual.1);
        }
        Ok(actual) => {
            log::warn!(
                "{} is {}x{} but its manifest describes a {}x{} sheet",
                path.display(),
                actual.0,
                actual.1,
                expected.0,
                expected.1
            );
        }
        Err(err) => {
            log::warn!("Couldn't inspect raster {}: {}", path.display(), err);
        }
    }
}
