use tracing::trace;

use crate::layout::Layout;

/// Writes per-slot translations so the list opens a gap at the insertion index
/// and closes the one left by the removed slot.
///
/// Remembers the last `(added, removed)` pair it applied and skips the write
/// pass when asked for the same pair again.
#[derive(Clone, Debug, Default)]
pub struct TranslationCalculator {
    applied: Option<(Option<usize>, Option<usize>)>,
}

impl TranslationCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when translations were written.
    pub fn apply<L: Layout>(
        &mut self,
        layout: &mut L,
        slots: &[L::Slot],
        added_index: Option<usize>,
        removed_index: Option<usize>,
        element_size: Option<f32>,
    ) -> bool {
        let key = (added_index, removed_index);
        let previous = self.applied.unwrap_or((None, None));
        if previous == key {
            return false;
        }

        for (ix, offset) in translations(&*layout, slots, added_index, removed_index, element_size)
            .into_iter()
            .enumerate()
        {
            layout.set_translation(&slots[ix], offset);
        }
        trace!(?added_index, ?removed_index, "applied slot translations");
        self.applied = Some(key);
        true
    }

    /// Forgets the last applied pair; the next call always writes.
    pub fn reset(&mut self) {
        self.applied = None;
    }
}

/// Offsets for every slot, without writing them anywhere.
pub fn translations<L: Layout>(
    layout: &L,
    slots: &[L::Slot],
    added_index: Option<usize>,
    removed_index: Option<usize>,
    element_size: Option<f32>,
) -> Vec<f32> {
    let removed_size = removed_index
        .and_then(|ix| slots.get(ix))
        .map(|slot| layout.size(slot));
    let element_size = element_size.unwrap_or(0.);

    (0..slots.len())
        .map(|ix| {
            let mut offset = 0.;
            if removed_index.is_some_and(|removed| removed < ix) {
                offset -= removed_size.unwrap_or(0.);
            }
            if added_index.is_some_and(|added| added <= ix) {
                offset += element_size;
            }
            offset
        })
        .collect()
}
