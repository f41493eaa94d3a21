use std::rc::Rc;
use std::time::Duration;

use tracing::debug;

use crate::drag::{ContainerId, DragInfo, DragResult};
use crate::drop::{DropEvent, DropResult, resolve_drop, splice};
use crate::layout::Layout;
use crate::options::ContainerOptions;
use crate::session::{DragSession, Phase};
use crate::stretch::InsertionStretcher;
use crate::translation::TranslationCalculator;

/// How long after a reset the host should wait before calling
/// [`Container::restore_animations`], so the reset itself is not animated.
pub const ANIMATION_RESTORE_DELAY: Duration = Duration::from_millis(50);

type DropCallback<S, P> = Rc<dyn Fn(&DropEvent<'_, S, P>)>;

/// One list taking part in drag-and-drop reordering.
///
/// Owns the slot sequence, the layout it is measured with, and the state of the
/// gesture currently passing over it.
pub struct Container<L: Layout, P> {
    id: ContainerId,
    options: ContainerOptions,
    layout: L,
    slots: Vec<L::Slot>,
    session: DragSession,
    stretcher: InsertionStretcher,
    animations_pending: bool,
    on_drop: Option<DropCallback<L::Slot, P>>,
}

impl<L, P> Container<L, P>
where
    L: Layout,
    L::Slot: Clone,
    P: Clone,
{
    pub fn new(layout: L, slots: impl Into<Vec<L::Slot>>, options: ContainerOptions) -> Self {
        Self {
            id: ContainerId::next(),
            options,
            layout,
            slots: slots.into(),
            session: DragSession::new(),
            stretcher: InsertionStretcher::new(),
            animations_pending: false,
            on_drop: None,
        }
    }

    /// Provide a callback invoked when a drop commits a change to this container.
    ///
    /// It runs before the container splices its own slot sequence, so the
    /// indices it receives refer to the sequence as it was during the drag.
    pub fn on_drop(mut self, on_drop: impl Fn(&DropEvent<'_, L::Slot, P>) + 'static) -> Self {
        self.on_drop = Some(Rc::new(on_drop));
        self
    }

    pub fn id(&self) -> ContainerId {
        self.id
    }

    pub fn options(&self) -> &ContainerOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: ContainerOptions) {
        self.options = options;
    }

    pub fn layout(&self) -> &L {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut L {
        &mut self.layout
    }

    pub fn slots(&self) -> &[L::Slot] {
        &self.slots
    }

    /// Replaces the slot sequence. Any gesture in progress is cancelled first.
    pub fn set_slots(&mut self, slots: impl Into<Vec<L::Slot>>) {
        if self.session.phase() == Phase::Tracking {
            self.cancel();
        }
        self.slots = slots.into();
    }

    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    pub fn is_drag_relevant(&self, info: &DragInfo<L::Slot, P>) -> bool {
        self.options.is_drag_relevant(self.id, info)
    }

    /// Processes one pointer update and returns this container's verdict.
    pub fn handle_drag(&mut self, info: &mut DragInfo<L::Slot, P>) -> DragResult {
        self.run(info)
    }

    /// Re-runs the gesture's last update against fresh geometry after the
    /// container scrolled. `None` outside a gesture.
    ///
    /// `info` is the live gesture, still at the last pointer position. The
    /// re-run may claim or release the drop target on it, since scrolling can
    /// move the list under or away from a resting pointer.
    pub fn handle_scroll(&mut self, info: &mut DragInfo<L::Slot, P>) -> Option<DragResult> {
        if self.session.phase() == Phase::Idle {
            return None;
        }
        info.invalidate_shadow = true;
        let result = self.run(info);
        info.invalidate_shadow = false;
        Some(result)
    }

    /// Tells the layout its cached geometry is stale and re-runs the last update.
    pub fn invalidate_rect(&mut self, info: &mut DragInfo<L::Slot, P>) -> Option<DragResult> {
        self.layout.invalidate();
        self.handle_scroll(info)
    }

    /// The verdict of the last update, all `None` outside a gesture.
    pub fn drag_result(&self) -> DragResult {
        self.session.last_result()
    }

    /// Ends the gesture. Commits when the gesture landed on a target and this
    /// container has something to insert or remove.
    pub fn handle_drop(&mut self, info: &DragInfo<L::Slot, P>) -> Option<DropResult> {
        let result = self.session.last_result();
        self.finish();

        info.target?;
        let drop = DropResult {
            added_index: resolve_drop(result.added_index, result.removed_index),
            removed_index: result.removed_index,
        };
        if drop.added_index.is_none() && drop.removed_index.is_none() {
            return None;
        }

        debug!(
            container = self.id.as_u64(),
            added_index = ?drop.added_index,
            removed_index = ?drop.removed_index,
            "committing drop"
        );
        if let Some(on_drop) = self.on_drop.as_ref() {
            on_drop(&DropEvent {
                drag_info: info,
                added_index: drop.added_index,
                removed_index: drop.removed_index,
                payload: &info.payload,
                element: &info.element,
            });
        }
        splice(&mut self.slots, drop, &info.element);
        Some(drop)
    }

    /// Abandons the gesture without committing anything.
    pub fn cancel(&mut self) {
        debug!(container = self.id.as_u64(), "drag cancelled");
        self.finish();
    }

    /// Whether [`restore_animations`](Self::restore_animations) is still due.
    pub fn animations_pending(&self) -> bool {
        self.animations_pending
    }

    /// Re-enables slide transitions switched off by the last reset.
    pub fn restore_animations(&mut self) {
        if !self.animations_pending {
            return;
        }
        for slot in &self.slots {
            self.layout.set_animated(slot, true);
        }
        self.animations_pending = false;
    }

    /// A fresh calculator for layers that preview translations on their own.
    pub fn translation_calculator(&self) -> TranslationCalculator {
        TranslationCalculator::new()
    }

    fn run(&mut self, info: &mut DragInfo<L::Slot, P>) -> DragResult {
        let result = self.session.update(
            &mut self.layout,
            &self.slots,
            self.id,
            self.options.behaviour,
            info,
        );
        self.stretcher.update(
            &mut self.layout,
            &self.slots,
            result.added_index,
            result.removed_index,
            result.element_size,
        );
        result
    }

    /// Puts every slot back in place before the session state is discarded.
    fn finish(&mut self) {
        for slot in &self.slots {
            self.layout.set_animated(slot, false);
            self.layout.set_translation(slot, 0.);
            self.layout.set_visibility(slot, true);
        }
        self.animations_pending = !self.slots.is_empty();
        self.stretcher.reset(&mut self.layout);
        self.session.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Size};
    use crate::memory::{MemoryLayout, SlotId};

    fn container(sizes: &[f32]) -> Container<MemoryLayout, &'static str> {
        let (layout, slots) = MemoryLayout::vertical(100., sizes);
        Container::new(layout, slots, ContainerOptions::default())
    }

    fn foreign_drag(y: f32) -> DragInfo<SlotId, &'static str> {
        DragInfo::new(ContainerId::next(), SlotId(99), Size::new(50., 10.), "x")
            .at(Point::new(5., y))
    }

    #[test]
    fn scroll_outside_a_gesture_does_nothing() {
        let mut list = container(&[10., 10.]);
        let mut info = foreign_drag(5.);
        assert_eq!(list.handle_scroll(&mut info), None);
        assert_eq!(info.target, None);
        assert_eq!(list.layout().translation_writes(), 0);
    }

    #[test]
    fn scroll_recomputes_the_shadow_from_fresh_geometry() {
        let mut list = container(&[10., 10., 10.]);
        let mut info = foreign_drag(22.);
        let first = list.handle_drag(&mut info);
        let shadow = first.shadow_begin_end.unwrap();
        assert_eq!((shadow.begin, shadow.end), (20., 30.));

        // Slots 0 and 1 swap places under the pointer.
        list.layout_mut()
            .relayout(&[SlotId(1), SlotId(0), SlotId(2)]);

        // A plain update inside the band keeps the cached shadow.
        let cached = list.handle_drag(&mut info);
        assert_eq!(cached.shadow_begin_end, first.shadow_begin_end);

        let rerun = list.handle_scroll(&mut info).unwrap();
        assert_eq!(rerun.added_index, Some(2));
        let shadow = rerun.shadow_begin_end.unwrap();
        assert_eq!((shadow.begin, shadow.end), (10., 30.));
        assert!(!info.invalidate_shadow);
    }

    #[test]
    fn invalidate_rect_reaches_the_layout_and_reruns() {
        let mut list = container(&[10., 10., 10.]);
        let mut info = foreign_drag(22.);
        assert_eq!(list.invalidate_rect(&mut info), None);
        assert_eq!(list.layout().invalidations(), 1);

        list.handle_drag(&mut info);
        list.layout_mut()
            .relayout(&[SlotId(1), SlotId(0), SlotId(2)]);
        let rerun = list.invalidate_rect(&mut info).unwrap();
        assert_eq!(list.layout().invalidations(), 2);
        assert_eq!(rerun.shadow_begin_end.map(|s| s.begin), Some(10.));
    }

    #[test]
    fn translation_calculator_is_independent_of_the_gesture() {
        let mut list = container(&[10., 10., 10.]);
        let slots = list.slots().to_vec();
        let mut calc = list.translation_calculator();
        assert!(calc.apply(list.layout_mut(), &slots, Some(1), None, Some(10.)));
        assert!(!calc.apply(list.layout_mut(), &slots, Some(1), None, Some(10.)));
        assert_eq!(list.layout().translations(&slots), vec![0., 10., 10.]);
        assert_eq!(list.phase(), Phase::Idle);
        assert_eq!(list.drag_result(), DragResult::default());
    }

    #[test]
    fn cancel_resets_visuals_without_commit() {
        let mut list = container(&[10., 10., 10.]);
        let this = list.id();
        let mut info = DragInfo::new(this, SlotId(0), Size::new(50., 10.), "a")
            .element_index(0)
            .at(Point::new(5., 25.));
        list.handle_drag(&mut info);
        assert!(!list.layout().is_visible(SlotId(0)));

        list.cancel();
        assert_eq!(list.phase(), Phase::Idle);
        assert!(list.layout().is_visible(SlotId(0)));
        assert_eq!(list.layout().translations(list.slots()), vec![0., 0., 0.]);
        assert_eq!(list.drag_result(), DragResult::default());
        assert_eq!(list.slots(), &[SlotId(0), SlotId(1), SlotId(2)]);
    }

    #[test]
    fn animations_come_back_on_request() {
        let mut list = container(&[10., 10.]);
        list.cancel();
        assert!(list.animations_pending());
        assert!(!list.layout().is_animated(SlotId(1)));
        list.restore_animations();
        assert!(!list.animations_pending());
        assert!(list.layout().is_animated(SlotId(1)));
    }
}
