//! Per-gesture drag state and the update pipeline run on every pointer move.
//!
//! Every update runs the same ordered steps: capture the removed slot, read
//! the pointer position, resolve the dragged element's size, mark the drop
//! target, refresh an invalidated shadow, pick the insertion index, write
//! translations and recompute the shadow. A step whose input is missing (no
//! position, no index) yields `None` and every later step follows suit.

use tracing::{debug, trace};

use crate::drag::{ContainerId, DragInfo, DragResult};
use crate::geometry::Point;
use crate::insertion::resolve_insertion_index;
use crate::layout::Layout;
use crate::options::Behaviour;
use crate::shadow::{ShadowBounds, compute_shadow_bounds};
use crate::translation::TranslationCalculator;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Tracking,
}

/// What a session remembers between two updates of the same gesture.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub removed_index: Option<usize>,
    pub added_index: Option<usize>,
    /// Size of the dragged element, measured once per gesture.
    pub element_size: Option<f32>,
    pub shadow: Option<ShadowBounds>,
    shadow_key: Option<ShadowKey>,
}

type ShadowKey = (Option<usize>, Option<usize>, Option<f32>);

#[derive(Clone, Debug, Default)]
pub struct DragSession {
    phase: Phase,
    state: SessionState,
    translations: TranslationCalculator,
    last: DragResult,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn last_result(&self) -> DragResult {
        self.last
    }

    /// Runs the pipeline for one pointer update.
    pub fn update<L: Layout, P>(
        &mut self,
        layout: &mut L,
        slots: &[L::Slot],
        container: ContainerId,
        behaviour: Behaviour,
        info: &mut DragInfo<L::Slot, P>,
    ) -> DragResult {
        if self.phase == Phase::Idle {
            trace!(?container, "drag session started");
            self.phase = Phase::Tracking;
        }

        let mut result = DragResult {
            removed_index: removed_index(&self.state, info, container, behaviour, slots.len()),
            ..DragResult::default()
        };
        if result.removed_index != self.state.removed_index {
            if let Some(slot) = result.removed_index.and_then(|ix| slots.get(ix)) {
                debug!(?container, removed_index = ?result.removed_index, "captured removed slot");
                layout.set_visibility(slot, false);
            }
        }

        result.pos = position(&*layout, info.position);
        result.element_size = result
            .pos
            .map(|_| element_size(&self.state, &*layout, info));
        mark_target(info, container, result.pos.is_some());

        if info.invalidate_shadow && result.pos.is_some() {
            self.state.shadow = compute_shadow_bounds(
                &*layout,
                slots,
                self.state.added_index,
                result.removed_index,
                result.element_size.unwrap_or(0.),
            );
            self.state.shadow_key = self.state.shadow.map(|_| {
                (
                    self.state.added_index,
                    result.removed_index,
                    result.element_size,
                )
            });
        }

        result.added_index = result.pos.and_then(|pos| {
            resolve_insertion_index(&*layout, slots, self.state.shadow.as_ref(), pos)
                .or(self.state.added_index)
        });
        if result.added_index != self.state.added_index {
            debug!(
                ?container,
                from = ?self.state.added_index,
                to = ?result.added_index,
                "insertion index changed"
            );
        }

        self.translations.apply(
            layout,
            slots,
            result.added_index,
            result.removed_index,
            result.element_size,
        );

        let key = (
            result.added_index,
            result.removed_index,
            result.element_size,
        );
        result.shadow_begin_end = match result.added_index {
            None => None,
            Some(_) if self.state.shadow_key == Some(key) => self.state.shadow,
            Some(_) => {
                let mut shadow = compute_shadow_bounds(
                    &*layout,
                    slots,
                    result.added_index,
                    result.removed_index,
                    result.element_size.unwrap_or(0.),
                );
                if self.state.added_index.is_none() {
                    if let (Some(shadow), Some(pos)) = (shadow.as_mut(), result.pos) {
                        shadow.widen_to(pos);
                    }
                }
                shadow
            }
        };

        trace!(?container, ?result, "drag update");
        self.commit(result);
        result
    }

    /// Drops all gesture state. The next update starts a fresh gesture.
    pub fn reset(&mut self) {
        if self.phase == Phase::Tracking {
            trace!("drag session reset");
        }
        *self = Self::default();
    }

    fn commit(&mut self, result: DragResult) {
        self.state.removed_index = result.removed_index;
        self.state.added_index = result.added_index;
        self.state.element_size = result.element_size.or(self.state.element_size);
        self.state.shadow = result.shadow_begin_end;
        self.state.shadow_key = result.shadow_begin_end.map(|_| {
            (
                result.added_index,
                result.removed_index,
                result.element_size,
            )
        });
        self.last = result;
    }
}

/// The removed index is fixed the first time the gesture is seen to come
/// from this container, and kept for the rest of the gesture.
fn removed_index<S, P>(
    state: &SessionState,
    info: &DragInfo<S, P>,
    container: ContainerId,
    behaviour: Behaviour,
    slot_count: usize,
) -> Option<usize> {
    if state.removed_index.is_some() {
        return state.removed_index;
    }
    if info.container == container && behaviour == Behaviour::Move {
        info.element_index.filter(|ix| *ix < slot_count)
    } else {
        None
    }
}

fn position<L: Layout>(layout: &L, pointer: Point) -> Option<f32> {
    layout
        .is_in_visible_rect(pointer)
        .then(|| layout.axis_value(pointer))
}

fn element_size<L: Layout, P>(
    state: &SessionState,
    layout: &L,
    info: &DragInfo<L::Slot, P>,
) -> f32 {
    state
        .element_size
        .unwrap_or_else(|| layout.axis_size(info.element_size))
}

/// Claims the drop target while the pointer is inside; releases it on exit
/// only if no other container claimed it meanwhile.
fn mark_target<S, P>(info: &mut DragInfo<S, P>, container: ContainerId, inside: bool) {
    if inside {
        info.target = Some(container);
    } else if info.target == Some(container) {
        info.target = None;
    }
}
