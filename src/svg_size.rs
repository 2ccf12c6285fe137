//! Reads the intrinsic size of an SVG icon from its root element.

use std::{collections::HashMap, io, path::Path};

use fs_err as fs;
use regex::Regex;
use thiserror::Error;

/// The raw markup of an icon along with its size in user units.
#[derive(Debug, Clone, PartialEq)]
pub struct IconSource {
    pub content: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

pub trait SizeReader {
    fn read(&self, path: &Path) -> Result<IconSource, ReadError>;
}

/// Reads sizes from the `viewBox`, `width`, and `height` attributes of an
/// SVG file's root element.
///
/// A `viewBox` with four numeric components wins over `width` and `height`.
/// Fractional sizes are rounded up so that nothing is clipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgSizeReader;

impl SizeReader for SvgSizeReader {
    fn read(&self, path: &Path) -> Result<IconSource, ReadError> {
        let content = fs::read(path)?;
        let (width, height) = svg_size(&String::from_utf8_lossy(&content))?;

        Ok(IconSource {
            content,
            width,
            height,
        })
    }
}

fn svg_size(markup: &str) -> Result<(u32, u32), ReadError> {
    lazy_static::lazy_static! {
        static ref SVG_TAG: Regex = Regex::new(r"<svg\b[^>]*>").unwrap();
        static ref ATTRIBUTE: Regex =
            Regex::new(r#"([A-Za-z_:][-A-Za-z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap();
        static ref VIEW_BOX_SEPARATOR: Regex = Regex::new(r"[\s,]+").unwrap();
    }

    let tag = SVG_TAG.find(markup).ok_or(ReadError::NoSvgElement)?.as_str();

    let attributes: HashMap<&str, &str> = ATTRIBUTE
        .captures_iter(tag)
        .filter_map(|captures| {
            let name = captures.get(1)?.as_str();
            let value = captures.get(2).or_else(|| captures.get(3))?.as_str();
            Some((name, value))
        })
        .collect();

    if let Some(view_box) = attributes.get("viewBox") {
        let components: Vec<f64> = VIEW_BOX_SEPARATOR
            .split(view_box.trim())
            .map(str::parse::<f64>)
            .collect::<Result<_, _>>()
            .unwrap_or_default();

        if components.len() == 4 {
            let width = to_units("viewBox width", components[2])?;
            let height = to_units("viewBox height", components[3])?;
            return Ok((width, height));
        }

        log::debug!(
            "Ignoring viewBox '{}', falling back to width and height",
            view_box
        );
    }

    match (attributes.get("width"), attributes.get("height")) {
        (Some(width), Some(height)) => Ok((
            parse_length("width", width)?,
            parse_length("height", height)?,
        )),
        _ => Err(ReadError::MissingSize),
    }
}

fn parse_length(attribute: &'static str, value: &str) -> Result<u32, ReadError> {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim_end();

    let parsed: f64 = number.parse().map_err(|_| ReadError::InvalidDimension {
        attribute,
        value: value.to_owned(),
    })?;

    to_units(attribute, parsed)
}

fn to_units(attribute: &'static str, value: f64) -> Result<u32, ReadError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ReadError::NonPositiveSize { attribute, value });
    }

    let rounded = value.ceil();
    if rounded > f64::from(u32::MAX) {
        return Err(ReadError::InvalidDimension {
            attribute,
            value: value.to_string(),
        });
    }

    Ok(rounded as u32)
}

#[derive(Debug, Error)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("no <svg> element was found")]
    NoSvgElement,

    #[error("the <svg> element declares neither a viewBox nor a width and height")]
    MissingSize,

    #[error("invalid {attribute} '{value}', expected a number in user units")]
    InvalidDimension {
        attribute: &'static str,
        value: String,
    },

    #[error("{attribute} must be greater than zero, got {value}")]
    NonPositiveSize { attribute: &'static str, value: f64 },
}
