/// An axis-aligned rectangle with its top-left corner at `pos`.
///
/// Spans are half-open: a rectangle at `(0, 0)` with size `(4, 4)` covers
/// `[0, 4)` on both axes, so a rectangle starting at `(0, 4)` touches it
/// without overlapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub pos: (u32, u32),
    pub size: (u32, u32),
}

impl Rect {
    #[inline]
    pub fn max(&self) -> (u32, u32) {
        (self.pos.0 + self.size.0, self.pos.1 + self.size.1)
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        let (self_max, other_max) = (self.max(), other.max());

        let x_overlap = self.pos.0 < other_max.0 && other.pos.0 < self_max.0;
        let y_overlap = self.pos.1 < other_max.1 && other.pos.1 < self_max.1;

        x_overlap && y_overlap
    }
}
