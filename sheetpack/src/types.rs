use crate::{geometry::Rect, id::Id};

/// An input to the placement routines.
///
/// `InputItem` is a 2D size, a key, and a Sheetpack-generated unique
/// identifier. Consumers are expected to remember which of their own objects
/// each ID belongs to and use it to map placement results back. The key breaks
/// ties between items of equal size so that placement is fully deterministic.
#[derive(Debug, Clone)]
pub struct InputItem {
    pub(crate) id: Id,
    pub(crate) size: (u32, u32),
    pub(crate) key: String,
}

impl InputItem {
    #[inline]
    pub fn new<K: Into<String>>(size: (u32, u32), key: K) -> Self {
        Self {
            id: Id::new(),
            size,
            key: key.into(),
        }
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    #[inline]
    pub fn id(&self) -> Id {
        self.id
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// An item that was placed by a packer.
///
/// `OutputItem` corresponds 1:1 to the `InputItem` values passed into the
/// packer. It exposes the ID from the input, as well as position and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputItem {
    pub(crate) id: Id,
    pub(crate) rect: Rect,
}

impl OutputItem {
    #[inline]
    pub fn id(&self) -> Id {
        self.id
    }

    #[inline]
    pub fn position(&self) -> (u32, u32) {
        self.rect.pos
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.rect.size
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[inline]
    pub fn min(&self) -> (u32, u32) {
        self.rect.pos
    }

    #[inline]
    pub fn max(&self) -> (u32, u32) {
        self.rect.max()
    }
}

/// The result of running a packer: the canvas size and every item, in the
/// order the packer placed them.
#[derive(Debug, Clone, Default)]
pub struct PackOutput {
    pub(crate) size: (u32, u32),
    pub(crate) items: Vec<OutputItem>,
}

impl PackOutput {
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    #[inline]
    pub fn items(&self) -> &[OutputItem] {
        &self.items
    }

    #[inline]
    pub fn into_items(self) -> Vec<OutputItem> {
        self.items
    }
}
