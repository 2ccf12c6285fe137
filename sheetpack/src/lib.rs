//! Sheetpack is a small library for deciding where rectangles go on a shared
//! canvas. It was built for iconsheet, a tool that combines vector icons into a
//! single sheet with a coordinate manifest.
//!
//! Sheetpack currently exposes a single placement policy,
//! [`VerticalStackPacker`][VerticalStackPacker]. Other policies can implement
//! the [`Packer`][Packer] trait and be swapped in without callers changing.
//!
//! ## Example
//! ```
//! use sheetpack::{InputItem, Packer, VerticalStackPacker};
//!
//! // First, describe the rectangles you want to place. The key is used to
//! // break ties between rectangles of the same size.
//! let items = vec![
//!     InputItem::new((10, 20), "a"),
//!     InputItem::new((30, 5), "b"),
//! ];
//!
//! // Compute a placement. This only fails if the canvas would be too large
//! // to describe.
//! let output = VerticalStackPacker::new().pack(items)?;
//!
//! assert_eq!(output.size(), (30, 25));
//! assert_eq!(output.items()[1].position(), (0, 20));
//! # Ok::<(), sheetpack::PackError>(())
//! ```
//!
//! [VerticalStackPacker]: struct.VerticalStackPacker.html
//! [Packer]: trait.Packer.html

mod geometry;
mod id;
mod packer;
mod types;

pub use geometry::*;
pub use id::*;
pub use packer::*;
pub use types::*;
