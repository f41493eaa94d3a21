//! A headless [`Layout`] backed by plain vectors.
//!
//! Slots are laid out back to back from the container's leading edge, in the
//! order they were pushed. Hosts without a real rendering layer (and the tests of
//! this crate) use it to drive a [`Container`](crate::Container).

use crate::geometry::{BeginEnd, Orientation, Point, Size};
use crate::layout::Layout;
use crate::options::ContainerOptions;

/// Handle of a slot registered with a [`MemoryLayout`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub usize);

#[derive(Clone, Debug)]
struct SlotGeometry {
    base: BeginEnd,
    translation: f32,
    visible: bool,
    animated: bool,
}

#[derive(Clone, Debug)]
pub struct MemoryLayout {
    orientation: Orientation,
    container: BeginEnd,
    cross: BeginEnd,
    visible: BeginEnd,
    scroll_size: f32,
    scroll_value: f32,
    slots: Vec<SlotGeometry>,
    extra_insertion_size: f32,
    stretcher: Option<f32>,
    translation_writes: usize,
    invalidations: usize,
}

impl MemoryLayout {
    /// A container spanning `container` along `orientation`, fully visible,
    /// 100 units wide across the axis.
    pub fn new(orientation: Orientation, container: BeginEnd) -> Self {
        Self {
            orientation,
            container,
            cross: BeginEnd::new(0., 100.),
            visible: container,
            scroll_size: container.size(),
            scroll_value: 0.,
            slots: Vec::new(),
            extra_insertion_size: 0.,
            stretcher: None,
            translation_writes: 0,
            invalidations: 0,
        }
    }

    /// A container laid out along the orientation configured in `options`.
    pub fn for_options(options: &ContainerOptions, container: BeginEnd) -> Self {
        Self::new(options.orientation, container)
    }

    /// Vertical container with one slot per entry of `sizes`, stacked from 0.
    pub fn vertical(container_end: f32, sizes: &[f32]) -> (Self, Vec<SlotId>) {
        let mut layout = Self::new(Orientation::Vertical, BeginEnd::new(0., container_end));
        let slots = sizes.iter().map(|size| layout.push_slot(*size)).collect();
        (layout, slots)
    }

    pub fn cross(mut self, cross: BeginEnd) -> Self {
        self.cross = cross;
        self
    }

    pub fn visible(mut self, visible: BeginEnd) -> Self {
        self.visible = visible;
        self
    }

    /// Moves the visible window of the container, as scrolling or resizing
    /// the viewport would.
    pub fn set_visible(&mut self, visible: BeginEnd) {
        self.visible = visible;
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Appends a slot of `size` after the last registered slot.
    pub fn push_slot(&mut self, size: f32) -> SlotId {
        let begin = self
            .slots
            .last()
            .map(|slot| slot.base.end)
            .unwrap_or(self.container.begin);
        self.slots.push(SlotGeometry {
            base: BeginEnd::new(begin, begin + size),
            translation: 0.,
            visible: true,
            animated: true,
        });
        self.scroll_size = self.scroll_size.max(begin + size - self.container.begin);
        SlotId(self.slots.len() - 1)
    }

    /// Re-stacks the given slots back to back in the given order.
    ///
    /// Call after the owning list spliced its slot sequence, the same way a real
    /// layout pass would.
    pub fn relayout(&mut self, order: &[SlotId]) {
        let mut begin = self.container.begin;
        for id in order {
            if let Some(slot) = self.slots.get_mut(id.0) {
                let size = slot.base.size();
                slot.base = BeginEnd::new(begin, begin + size);
                begin += size;
            }
        }
        self.scroll_size = self.container.size().max(begin - self.container.begin);
    }

    pub fn set_scroll(&mut self, scroll_size: f32, scroll_value: f32) {
        self.scroll_size = scroll_size;
        self.scroll_value = scroll_value;
    }

    pub fn is_visible(&self, slot: SlotId) -> bool {
        self.slots.get(slot.0).is_some_and(|slot| slot.visible)
    }

    pub fn is_animated(&self, slot: SlotId) -> bool {
        self.slots.get(slot.0).is_some_and(|slot| slot.animated)
    }

    pub fn translations(&self, slots: &[SlotId]) -> Vec<f32> {
        slots.iter().map(|slot| self.translation(slot)).collect()
    }

    pub fn extra_insertion_size(&self) -> f32 {
        self.extra_insertion_size
    }

    pub fn stretcher(&self) -> Option<f32> {
        self.stretcher
    }

    /// Number of `set_translation` calls received so far.
    pub fn translation_writes(&self) -> usize {
        self.translation_writes
    }

    pub fn invalidations(&self) -> usize {
        self.invalidations
    }
}

impl Layout for MemoryLayout {
    type Slot = SlotId;

    fn begin_end(&self, slot: &SlotId) -> BeginEnd {
        self.slots
            .get(slot.0)
            .map(|slot| slot.base.translated(slot.translation))
            .unwrap_or_default()
    }

    fn size(&self, slot: &SlotId) -> f32 {
        self.slots
            .get(slot.0)
            .map(|slot| slot.base.size())
            .unwrap_or(0.)
    }

    fn container_begin_end(&self) -> BeginEnd {
        self.container
    }

    fn container_rectangles(&self) -> BeginEnd {
        self.visible
    }

    fn container_size(&self) -> f32 {
        self.container.size()
    }

    fn scroll_size(&self) -> f32 {
        self.scroll_size
    }

    fn scroll_value(&self) -> f32 {
        self.scroll_value
    }

    fn is_in_visible_rect(&self, pos: Point) -> bool {
        self.visible.contains(self.orientation.axis_value(pos))
            && self.cross.contains(self.orientation.cross_value(pos))
    }

    fn axis_value(&self, pos: Point) -> f32 {
        self.orientation.axis_value(pos)
    }

    fn axis_size(&self, size: Size) -> f32 {
        self.orientation.axis_size(size)
    }

    fn translation(&self, slot: &SlotId) -> f32 {
        self.slots.get(slot.0).map(|slot| slot.translation).unwrap_or(0.)
    }

    fn set_translation(&mut self, slot: &SlotId, offset: f32) {
        self.translation_writes += 1;
        if let Some(slot) = self.slots.get_mut(slot.0) {
            slot.translation = offset;
        }
    }

    fn set_visibility(&mut self, slot: &SlotId, visible: bool) {
        if let Some(slot) = self.slots.get_mut(slot.0) {
            slot.visible = visible;
        }
    }

    fn set_animated(&mut self, slot: &SlotId, animated: bool) {
        if let Some(slot) = self.slots.get_mut(slot.0) {
            slot.animated = animated;
        }
    }

    fn top_left_of_element_begin(&self, begin: f32, _end: f32) -> Point {
        self.orientation.point(begin, self.cross.begin)
    }

    fn set_insertion_extra_size(&mut self, size: f32) {
        self.extra_insertion_size = size;
    }

    fn set_stretcher(&mut self, size: Option<f32>) {
        self.stretcher = size;
    }

    fn invalidate(&mut self) {
        self.invalidations += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_stack_from_the_container_begin() {
        let (layout, slots) = MemoryLayout::vertical(100., &[10., 20., 5.]);
        let spans: Vec<_> = slots.iter().map(|s| layout.begin_end(s)).collect();
        assert_eq!(
            spans,
            vec![
                BeginEnd::new(0., 10.),
                BeginEnd::new(10., 30.),
                BeginEnd::new(30., 35.)
            ]
        );
    }

    #[test]
    fn begin_end_reports_translated_geometry() {
        let (mut layout, slots) = MemoryLayout::vertical(100., &[10., 10.]);
        layout.set_translation(&slots[1], 5.);
        assert_eq!(layout.begin_end(&slots[1]), BeginEnd::new(15., 25.));
        assert_eq!(layout.size(&slots[1]), 10.);
        assert_eq!(layout.translation_writes(), 1);
    }

    #[test]
    fn relayout_follows_the_new_order() {
        let (mut layout, slots) = MemoryLayout::vertical(100., &[10., 20.]);
        layout.relayout(&[slots[1], slots[0]]);
        assert_eq!(layout.begin_end(&slots[1]), BeginEnd::new(0., 20.));
        assert_eq!(layout.begin_end(&slots[0]), BeginEnd::new(20., 30.));
    }

    #[test]
    fn layout_axis_comes_from_the_options() {
        let options = ContainerOptions::new().orientation(Orientation::Horizontal);
        let layout = MemoryLayout::for_options(&options, BeginEnd::new(0., 300.));
        assert_eq!(layout.orientation(), Orientation::Horizontal);
        assert_eq!(layout.axis_value(Point::new(120., 40.)), 120.);
    }

    #[test]
    fn visible_window_can_move() {
        let mut layout = MemoryLayout::new(Orientation::Vertical, BeginEnd::new(0., 200.))
            .visible(BeginEnd::new(0., 100.));
        assert!(!layout.is_in_visible_rect(Point::new(10., 150.)));
        layout.set_visible(BeginEnd::new(100., 200.));
        assert!(layout.is_in_visible_rect(Point::new(10., 150.)));
        assert!(!layout.is_in_visible_rect(Point::new(10., 50.)));
        assert_eq!(layout.container_rectangles(), BeginEnd::new(100., 200.));
    }

    #[test]
    fn visibility_checks_both_axes() {
        let (layout, _) = MemoryLayout::vertical(100., &[10.]);
        assert!(layout.is_in_visible_rect(Point::new(50., 50.)));
        assert!(!layout.is_in_visible_rect(Point::new(150., 50.)));
        assert!(!layout.is_in_visible_rect(Point::new(50., 101.)));
    }
}
