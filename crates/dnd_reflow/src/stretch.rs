use tracing::debug;

use crate::layout::Layout;

/// Grows the container while an item from another list is inserted into it.
///
/// Items dragged within their own list never need it: the removed slot
/// already frees the room the placeholder takes.
#[derive(Clone, Debug, Default)]
pub struct InsertionStretcher {
    measured: bool,
    shown: bool,
}

impl InsertionStretcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update<L: Layout>(
        &mut self,
        layout: &mut L,
        slots: &[L::Slot],
        added_index: Option<usize>,
        removed_index: Option<usize>,
        element_size: Option<f32>,
    ) {
        if removed_index.is_some() {
            return;
        }

        match (added_index, element_size) {
            (Some(_), Some(element_size)) => {
                layout.set_insertion_extra_size(element_size / 2.);
                if !self.measured {
                    self.measured = true;
                    if let Some(size) = overflow(&*layout, slots, element_size) {
                        debug!(size, "showing insertion stretcher");
                        layout.set_stretcher(Some(size));
                        self.shown = true;
                    }
                }
            }
            _ => {
                layout.set_insertion_extra_size(0.);
                self.hide(layout);
                self.measured = false;
            }
        }
    }

    pub fn reset<L: Layout>(&mut self, layout: &mut L) {
        layout.set_insertion_extra_size(0.);
        self.hide(layout);
        self.measured = false;
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    fn hide<L: Layout>(&mut self, layout: &mut L) {
        if self.shown {
            layout.set_stretcher(None);
            self.shown = false;
        }
    }
}

/// How far the last slot, pushed by an element of `element_size`, would
/// overflow the end of the container's content.
fn overflow<L: Layout>(layout: &L, slots: &[L::Slot], element_size: f32) -> Option<f32> {
    let container = layout.container_begin_end();
    let container_end = if layout.scroll_size() > layout.container_size() {
        container.begin + layout.scroll_size() - layout.scroll_value()
    } else {
        container.end
    };
    let last_end = slots
        .last()
        .map(|slot| layout.begin_end(slot).end - layout.translation(slot))
        .unwrap_or(container.begin);

    let overflow = last_end + element_size - container_end;
    (overflow > 0.).then_some(overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryLayout;

    #[test]
    fn full_container_gets_a_stretcher() {
        let (mut layout, slots) = MemoryLayout::vertical(30., &[10., 10., 8.]);
        let mut stretcher = InsertionStretcher::new();
        stretcher.update(&mut layout, &slots, Some(1), None, Some(10.));
        assert_eq!(layout.extra_insertion_size(), 5.);
        assert_eq!(layout.stretcher(), Some(8.));

        stretcher.update(&mut layout, &slots, None, None, None);
        assert_eq!(layout.extra_insertion_size(), 0.);
        assert_eq!(layout.stretcher(), None);
        assert!(!stretcher.is_shown());
    }

    #[test]
    fn roomy_container_only_reserves_extra_size() {
        let (mut layout, slots) = MemoryLayout::vertical(100., &[10., 10.]);
        let mut stretcher = InsertionStretcher::new();
        stretcher.update(&mut layout, &slots, Some(0), None, Some(10.));
        assert_eq!(layout.extra_insertion_size(), 5.);
        assert_eq!(layout.stretcher(), None);
    }

    #[test]
    fn scrolled_content_measures_against_scroll_extent() {
        let (mut layout, slots) = MemoryLayout::vertical(20., &[10., 10., 10., 10.]);
        layout.set_scroll(40., 10.);
        let mut stretcher = InsertionStretcher::new();
        stretcher.update(&mut layout, &slots, Some(4), None, Some(10.));
        // Content ends at 0 + 40 - 10 = 30; the last slot ends at 40.
        assert_eq!(layout.stretcher(), Some(20.));
    }

    #[test]
    fn own_list_moves_leave_the_container_alone() {
        let (mut layout, slots) = MemoryLayout::vertical(20., &[10., 10.]);
        let mut stretcher = InsertionStretcher::new();
        stretcher.update(&mut layout, &slots, Some(1), Some(0), Some(10.));
        assert_eq!(layout.extra_insertion_size(), 0.);
        assert_eq!(layout.stretcher(), None);
    }

    #[test]
    fn empty_list_measures_from_the_container_begin() {
        let (mut layout, slots) = MemoryLayout::vertical(5., &[]);
        let mut stretcher = InsertionStretcher::new();
        stretcher.update(&mut layout, &slots, Some(0), None, Some(10.));
        assert_eq!(layout.stretcher(), Some(5.));
        stretcher.reset(&mut layout);
        assert_eq!(layout.stretcher(), None);
    }
}
