use std::{
    num::NonZeroUsize,
    sync::atomic::{AtomicUsize, Ordering},
};

static LAST_ID: AtomicUsize = AtomicUsize::new(1);

/// Identifies an item across a packing call. Unique within the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(NonZeroUsize);

impl Id {
    pub(crate) fn new() -> Self {
        let id = LAST_ID.fetch_add(1, Ordering::SeqCst);

        // LAST_ID starts at 1 and only grows, so it can only be zero after
        // wrapping around usize.
        match NonZeroUsize::new(id) {
            Some(id) => Id(id),
            None => panic!("sheetpack ran out of item IDs"),
        }
    }
}
