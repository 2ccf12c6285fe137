use std::cmp::Reverse;

use thiserror::Error;

use crate::{
    geometry::Rect,
    types::{InputItem, OutputItem, PackOutput},
};

/// A placement policy: decides the order and position of every item on a
/// shared canvas and how large that canvas is.
///
/// Implementations must place every input exactly once and must never let two
/// items overlap.
pub trait Packer {
    fn pack(&self, items: Vec<InputItem>) -> Result<PackOutput, PackError>;
}

#[derive(Debug, Error)]
pub enum PackError {
    /// The canvas would be larger than a `u32` can describe.
    #[error("placing '{key}' would make the canvas taller than {} units", u32::MAX)]
    CanvasTooTall { key: String },
}

/// Stacks items in a single column, tallest first.
///
/// Items are ordered by height descending, then width descending, then key
/// ascending. Every item sits at `x = 0`; each item starts where the previous
/// one ends, with no gap. The canvas is as wide as the widest item and as tall
/// as all items together.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerticalStackPacker;

impl VerticalStackPacker {
    pub fn new() -> Self {
        Self
    }
}

impl Packer for VerticalStackPacker {
    fn pack(&self, mut items: Vec<InputItem>) -> Result<PackOutput, PackError> {
        log::trace!("Stacking {} items", items.len());

        items.sort_by(|a, b| {
            let a_key = (Reverse(a.size.1), Reverse(a.size.0), &a.key);
            let b_key = (Reverse(b.size.1), Reverse(b.size.0), &b.key);
            a_key.cmp(&b_key)
        });

        let mut width = 0;
        let mut offset_y = 0;
        let mut placed = Vec::with_capacity(items.len());

        for item in &items {
            let rect = Rect {
                pos: (0, offset_y),
                size: item.size,
            };

            log::trace!("Placed {:?} ({}) at {:?}", item.id, item.key, rect.pos);

            width = width.max(item.size.0);
            offset_y = offset_y
                .checked_add(item.size.1)
                .ok_or_else(|| PackError::CanvasTooTall {
                    key: item.key.clone(),
                })?;
            placed.push(OutputItem { id: item.id, rect });
        }

        log::trace!("Finished stacking into a {}x{} canvas", width, offset_y);

        Ok(PackOutput {
            size: (width, offset_y),
            items: placed,
        })
    }
}
