//! Draggable regions of frameless windows.
//!
//! The embedded surface reports an ordered list of regions. They are folded
//! into a mask starting from "nothing draggable": a draggable region is
//! unioned in, a non-draggable one is cut out, so later entries override
//! earlier ones where they overlap.

use casement_core::logging::targets;
use casement_core::{Point, Rect};
use tracing::trace;

/// A rectangle reported by the embedded surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraggableRegion {
    /// Window-relative bounds.
    pub bounds: Rect,
    /// Whether the area drags the window or is excluded from dragging.
    pub draggable: bool,
}

impl DraggableRegion {
    pub fn new(bounds: Rect, draggable: bool) -> Self {
        Self { bounds, draggable }
    }

    pub fn draggable(bounds: Rect) -> Self {
        Self::new(bounds, true)
    }

    pub fn no_drag(bounds: Rect) -> Self {
        Self::new(bounds, false)
    }
}

/// A binary drag/no-drag mask stored as disjoint rectangles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraggableRegionMask {
    rects: Vec<Rect>,
}

impl DraggableRegionMask {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mask from `regions`.
    pub fn from_regions(regions: &[DraggableRegion]) -> Self {
        let mut mask = Self::new();
        mask.rebuild(regions);
        mask
    }

    /// Replace the mask with one folded from `regions` in order.
    pub fn rebuild(&mut self, regions: &[DraggableRegion]) {
        let mut rects: Vec<Rect> = Vec::new();

        for region in regions {
            if region.bounds.is_empty() {
                continue;
            }
            if region.draggable {
                // Keep the pieces disjoint: add only what is not yet covered.
                let mut pieces = vec![region.bounds];
                for existing in &rects {
                    pieces = pieces.iter().flat_map(|piece| piece.subtract(existing)).collect();
                    if pieces.is_empty() {
                        break;
                    }
                }
                rects.extend(pieces);
            } else {
                rects = rects.iter().flat_map(|rect| rect.subtract(&region.bounds)).collect();
            }
        }

        trace!(
            target: targets::HIT_TEST,
            regions = regions.len(),
            pieces = rects.len(),
            "draggable mask rebuilt"
        );
        self.rects = rects;
    }

    /// Whether `point` lies inside a draggable area.
    pub fn contains(&self, point: Point) -> bool {
        self.rects.iter().any(|rect| rect.contains(point))
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// The disjoint rectangles making up the mask.
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    pub fn clear(&mut self) {
        self.rects.clear();
    }
}
