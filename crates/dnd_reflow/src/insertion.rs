use crate::layout::Layout;
use crate::position::resolve_index;
use crate::shadow::ShadowBounds;

/// Decides the next insertion index for a pointer at `pos`.
///
/// `None` means "keep the current index": the pointer is still inside the
/// shadow, or it sits in a gap the binary search could not resolve.
pub fn resolve_insertion_index<L: Layout>(
    layout: &L,
    slots: &[L::Slot],
    shadow: Option<&ShadowBounds>,
    pos: f32,
) -> Option<usize> {
    let count = slots.len();
    let Some(shadow) = shadow else {
        return Some(resolve_index(layout, slots, pos, true).unwrap_or(count));
    };

    if shadow.contains(pos) {
        None
    } else if pos < shadow.begin {
        resolve_index(layout, slots, pos, false)
    } else if pos > shadow.end {
        resolve_index(layout, slots, pos, false).map(|ix| (ix + 1).min(count))
    } else {
        Some(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::memory::MemoryLayout;

    fn shadow(begin: f32, end: f32) -> ShadowBounds {
        ShadowBounds {
            begin,
            end,
            anchor: Point::default(),
        }
    }

    #[test]
    fn without_shadow_uses_midpoints() {
        let (layout, slots) = MemoryLayout::vertical(100., &[10., 10., 10.]);
        assert_eq!(resolve_insertion_index(&layout, &slots, None, 22.), Some(2));
        assert_eq!(resolve_insertion_index(&layout, &slots, None, 27.), Some(3));
    }

    #[test]
    fn without_shadow_unresolved_appends() {
        let mut layout = MemoryLayout::new(
            crate::Orientation::Vertical,
            crate::BeginEnd::new(10., 100.),
        );
        let slots = vec![layout.push_slot(10.), layout.push_slot(10.)];
        assert_eq!(resolve_insertion_index(&layout, &slots, None, 2.), Some(2));
    }

    #[test]
    fn inside_shadow_keeps_the_index() {
        let (layout, slots) = MemoryLayout::vertical(100., &[10., 10., 10.]);
        let bounds = shadow(12., 28.);
        // A naive nearest-slot lookup would say 1 or 3 here.
        for pos in [12., 14., 20., 26., 28.] {
            assert_eq!(
                resolve_insertion_index(&layout, &slots, Some(&bounds), pos),
                None
            );
        }
    }

    #[test]
    fn before_shadow_takes_the_slot_index() {
        let (layout, slots) = MemoryLayout::vertical(100., &[10., 10., 10.]);
        let bounds = shadow(20., 30.);
        assert_eq!(
            resolve_insertion_index(&layout, &slots, Some(&bounds), 8.),
            Some(0)
        );
    }

    #[test]
    fn after_shadow_takes_the_next_index() {
        let (layout, slots) = MemoryLayout::vertical(100., &[10., 10., 10.]);
        let bounds = shadow(0., 10.);
        assert_eq!(
            resolve_insertion_index(&layout, &slots, Some(&bounds), 15.),
            Some(2)
        );
        assert_eq!(
            resolve_insertion_index(&layout, &slots, Some(&bounds), 70.),
            Some(3)
        );
    }
}
