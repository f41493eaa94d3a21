use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::layout::Layout;

/// Margin added around the pointer when a first insertion lands outside the
/// freshly computed shadow.
pub const FIRST_INSERT_MARGIN: f32 = 5.;

/// The range along the axis treated as occupied by the placeholder.
///
/// While the pointer stays inside `begin..=end` the insertion index is kept,
/// which is what stops the index from flapping between two neighbors.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShadowBounds {
    pub begin: f32,
    pub end: f32,
    /// Where the layout wants the placeholder element's top-left corner.
    pub anchor: Point,
}

impl ShadowBounds {
    pub fn contains(&self, pos: f32) -> bool {
        self.begin <= pos && pos <= self.end
    }

    /// Stretches the bounds so they include `pos` plus [`FIRST_INSERT_MARGIN`].
    pub fn widen_to(&mut self, pos: f32) {
        if pos < self.begin {
            self.begin = pos - FIRST_INSERT_MARGIN;
        }
        if pos > self.end {
            self.end = pos + FIRST_INSERT_MARGIN;
        }
    }
}

/// Computes the placeholder bounds for inserting at `added_index`.
///
/// The removed slot is skipped when looking for neighbors. A neighbor larger
/// than the dragged element gives away half of its slack, so the shadow starts
/// (or ends) inside it. Missing neighbors fall back to the container edges.
pub fn compute_shadow_bounds<L: Layout>(
    layout: &L,
    slots: &[L::Slot],
    added_index: Option<usize>,
    removed_index: Option<usize>,
    element_size: f32,
) -> Option<ShadowBounds> {
    let added_index = added_index?;
    let container = layout.container_begin_end();

    let before = added_index
        .checked_sub(1)
        .and_then(|ix| skip_removed_backward(ix, removed_index))
        .and_then(|ix| slots.get(ix));
    let (begin, before_edge) = match before {
        Some(slot) => {
            let size = layout.size(slot);
            let bounds = layout.begin_end(slot);
            let begin = if element_size < size {
                bounds.end - (size - element_size) / 2.
            } else {
                bounds.end
            };
            (begin, bounds.end)
        }
        None => (container.begin, container.begin),
    };

    let after = skip_removed_forward(added_index, removed_index).and_then(|ix| slots.get(ix));
    let (end, after_edge) = match after {
        Some(slot) => {
            let size = layout.size(slot);
            let bounds = layout.begin_end(slot);
            let end = if element_size < size {
                bounds.begin + (size - element_size) / 2.
            } else {
                bounds.begin
            };
            (end, bounds.begin)
        }
        None => (container.end, layout.container_rectangles().end),
    };

    Some(ShadowBounds {
        begin,
        end: end.max(begin),
        anchor: layout.top_left_of_element_begin(before_edge, after_edge),
    })
}

fn skip_removed_backward(ix: usize, removed_index: Option<usize>) -> Option<usize> {
    if Some(ix) == removed_index {
        ix.checked_sub(1)
    } else {
        Some(ix)
    }
}

fn skip_removed_forward(ix: usize, removed_index: Option<usize>) -> Option<usize> {
    if Some(ix) == removed_index {
        ix.checked_add(1)
    } else {
        Some(ix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryLayout;

    #[test]
    fn null_index_has_no_shadow() {
        let (layout, slots) = MemoryLayout::vertical(100., &[10., 10.]);
        assert_eq!(compute_shadow_bounds(&layout, &slots, None, None, 10.), None);
    }

    #[test]
    fn equal_sized_neighbors_bound_the_gap() {
        let (mut layout, slots) = MemoryLayout::vertical(100., &[10., 10., 10.]);
        layout.set_translation(&slots[2], 10.);
        let shadow = compute_shadow_bounds(&layout, &slots, Some(2), None, 10.).unwrap();
        assert_eq!((shadow.begin, shadow.end), (20., 30.));
        assert_eq!(shadow.anchor, Point::new(0., 20.));
    }

    #[test]
    fn larger_neighbors_split_their_slack() {
        let (layout, slots) = MemoryLayout::vertical(200., &[40., 40.]);
        let shadow = compute_shadow_bounds(&layout, &slots, Some(1), None, 10.).unwrap();
        // Each 40-unit neighbor gives away (40 - 10) / 2 = 15.
        assert_eq!((shadow.begin, shadow.end), (25., 55.));
    }

    #[test]
    fn missing_neighbors_fall_back_to_container_edges() {
        let (layout, slots) = MemoryLayout::vertical(100., &[10., 10.]);
        let first = compute_shadow_bounds(&layout, &slots, Some(0), None, 10.).unwrap();
        assert_eq!(first.begin, 0.);
        let last = compute_shadow_bounds(&layout, &slots, Some(2), None, 10.).unwrap();
        assert_eq!((last.begin, last.end), (20., 100.));
    }

    #[test]
    fn removed_slot_is_skipped_on_both_sides() {
        let (layout, slots) = MemoryLayout::vertical(100., &[10., 10., 10.]);
        // Inserting right after the removed slot 1: before neighbor becomes 0.
        let after_removed = compute_shadow_bounds(&layout, &slots, Some(2), Some(1), 10.).unwrap();
        assert_eq!(after_removed.begin, 10.);
        // Inserting at the removed slot: after neighbor becomes 2.
        let at_removed = compute_shadow_bounds(&layout, &slots, Some(1), Some(1), 10.).unwrap();
        assert_eq!((at_removed.begin, at_removed.end), (10., 20.));
        // Removed first slot and inserting at 1: no before neighbor remains.
        let head = compute_shadow_bounds(&layout, &slots, Some(1), Some(0), 10.).unwrap();
        assert_eq!(head.begin, 0.);
    }

    #[test]
    fn out_of_range_index_uses_container_edges() {
        let (layout, slots) = MemoryLayout::vertical(100., &[10.]);
        let shadow = compute_shadow_bounds(&layout, &slots, Some(7), None, 10.).unwrap();
        assert_eq!((shadow.begin, shadow.end), (0., 100.));
    }

    #[test]
    fn widen_to_adds_margin_on_the_violated_side() {
        let mut shadow = ShadowBounds {
            begin: 20.,
            end: 30.,
            anchor: Point::default(),
        };
        shadow.widen_to(33.);
        assert_eq!((shadow.begin, shadow.end), (20., 38.));
        shadow.widen_to(12.);
        assert_eq!((shadow.begin, shadow.end), (7., 38.));
        shadow.widen_to(25.);
        assert_eq!((shadow.begin, shadow.end), (7., 38.));
    }
}
