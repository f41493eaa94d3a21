use crate::layout::Layout;

/// Finds the slot under `pos` by binary search over `slots`.
///
/// Slots must be ordered along the axis. A slot contains `pos` when
/// `begin <= pos <= end`; with `by_midpoint` the second half of a slot (its
/// midpoint included) resolves to the index after it.
///
/// Returns `Some(slots.len())` when `pos` lies past every slot, and `None` when
/// it lies before the first slot or in a gap between two slots.
pub fn resolve_index<L: Layout>(
    layout: &L,
    slots: &[L::Slot],
    pos: f32,
    by_midpoint: bool,
) -> Option<usize> {
    let mut lo = 0;
    let mut hi = slots.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let span = layout.begin_end(&slots[mid]);
        if pos < span.begin {
            hi = mid;
        } else if pos > span.end {
            lo = mid + 1;
        } else if by_midpoint && pos >= span.midpoint() {
            return Some(mid + 1);
        } else {
            return Some(mid);
        }
    }

    (lo == slots.len()).then_some(lo)
}
