use std::rc::Rc;

use dnd_reflow::{
    Container, ContainerOptions, DragInfo, DragResult, Layout, Size, resolve_drop,
};
use tracing::debug;

/// A single item in a [`DndListState`].
#[derive(Clone, Debug)]
pub struct DndListItem<T> {
    pub id: String,
    pub label: String,
    pub data: T,
    disabled: bool,
}

impl<T> DndListItem<T> {
    pub fn new(id: impl Into<String>, label: impl Into<String>, data: T) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            data,
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

/// The gesture a [`DndListState`] hands out when one of its items starts dragging.
///
/// Forward it to every list on each pointer move, then drop it on every list.
pub type DndListDrag<S, T> = DragInfo<S, DndListItem<T>>;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DndListRowState {
    pub selected: bool,
    pub dragging: bool,
    /// Offset along the list axis the row should be painted at.
    pub translation: f32,
    pub hidden: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DndListReorder {
    pub item_id: String,
    pub from: usize,
    pub to: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DndListChange {
    Reorder(DndListReorder),
    /// An item dragged from another list was inserted at `to`.
    Inserted { item_id: String, to: usize },
    /// The item at `from` was dropped into another list.
    Removed { item_id: String, from: usize },
}

type CanDrop<T> = Rc<dyn Fn(&DndListChange, &[DndListItem<T>]) -> bool>;
type OnChange<T> = Rc<dyn Fn(&DndListChange, &[DndListItem<T>])>;

struct DndListStateCallbacks<T> {
    can_drop: Option<CanDrop<T>>,
    on_change: Option<OnChange<T>>,
}

impl<T> Default for DndListStateCallbacks<T> {
    fn default() -> Self {
        Self {
            can_drop: None,
            on_change: None,
        }
    }
}

/// State for a draggable, reorderable list.
///
/// Items and the slots of the layout are kept index-aligned: item `i` is
/// painted by slot `i`.
pub struct DndListState<T, L: Layout> {
    items: Vec<DndListItem<T>>,
    container: Container<L, DndListItem<T>>,
    selected_ix: Option<usize>,
    dragged_id: Option<String>,
    callbacks: DndListStateCallbacks<T>,
}

impl<T, L> DndListState<T, L>
where
    T: Clone + 'static,
    L: Layout,
    L::Slot: Clone,
{
    pub fn new(layout: L, options: ContainerOptions) -> Self {
        Self {
            items: Vec::new(),
            container: Container::new(layout, Vec::new(), options),
            selected_ix: None,
            dragged_id: None,
            callbacks: DndListStateCallbacks::default(),
        }
    }

    pub fn item(mut self, item: DndListItem<T>, slot: L::Slot) -> Self {
        self.push_item(item, slot);
        self
    }

    pub fn push_item(&mut self, item: DndListItem<T>, slot: L::Slot) {
        let mut slots = self.container.slots().to_vec();
        slots.push(slot);
        self.container.set_slots(slots);
        self.items.push(item);
    }

    /// Re-associates items with slots, e.g. after the host re-measured the
    /// list following a drop. `slots` must follow the order of the items.
    pub fn set_slots(&mut self, slots: impl Into<Vec<L::Slot>>) {
        self.container.set_slots(slots);
    }

    pub fn items_ref(&self) -> &[DndListItem<T>] {
        &self.items
    }

    pub fn container(&self) -> &Container<L, DndListItem<T>> {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut Container<L, DndListItem<T>> {
        &mut self.container
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_ix
    }

    pub fn set_selected_index(&mut self, ix: Option<usize>) {
        self.selected_ix = ix;
    }

    /// Provide a predicate to control whether a drop is allowed.
    ///
    /// For a reorder, `from` is the dragged index in the pre-drop list and
    /// `to` the destination index in the post-drop list.
    pub fn can_drop(
        mut self,
        can_drop: impl Fn(&DndListChange, &[DndListItem<T>]) -> bool + 'static,
    ) -> Self {
        self.callbacks.can_drop = Some(Rc::new(can_drop));
        self
    }

    /// Provide a callback invoked after the items changed because of a drop.
    pub fn on_change(
        mut self,
        on_change: impl Fn(&DndListChange, &[DndListItem<T>]) + 'static,
    ) -> Self {
        self.callbacks.on_change = Some(Rc::new(on_change));
        self
    }

    pub fn row_state(&self, ix: usize) -> DndListRowState {
        let Some(item) = self.items.get(ix) else {
            return DndListRowState::default();
        };
        let translation = self
            .container
            .slots()
            .get(ix)
            .map(|slot| self.container.layout().translation(slot))
            .unwrap_or(0.);
        DndListRowState {
            selected: self.selected_ix == Some(ix),
            dragging: self.dragged_id.as_deref() == Some(item.id.as_str()),
            translation,
            hidden: self.container.drag_result().removed_index == Some(ix),
        }
    }

    /// Starts dragging the item at `ix`. Disabled items do not drag.
    pub fn start_drag(&mut self, ix: usize, element_size: Size) -> Option<DndListDrag<L::Slot, T>> {
        let item = self.items.get(ix)?;
        if item.is_disabled() {
            return None;
        }
        let item = item.clone();
        let slot = self.container.slots().get(ix)?.clone();

        debug!(item_id = %item.id, ix, "drag started");
        self.dragged_id = Some(item.id.clone());
        self.selected_ix = Some(ix);
        Some(
            DragInfo::new(self.container.id(), slot, element_size, item)
                .group_name(self.container.options().group_name.clone())
                .element_index(ix),
        )
    }

    pub fn drag_move(&mut self, drag: &mut DndListDrag<L::Slot, T>) -> DragResult {
        if !self.container.is_drag_relevant(drag) {
            return DragResult::default();
        }
        self.container.handle_drag(drag)
    }

    /// Ends the gesture on this list and applies whatever it means for the items.
    pub fn drop(&mut self, drag: &DndListDrag<L::Slot, T>) -> Option<DndListChange> {
        self.dragged_id = None;
        if !self.container.is_drag_relevant(drag) {
            return None;
        }

        let change = drag
            .target
            .and_then(|_| self.pending_change(drag.payload.id.as_str()));
        if let Some(change) = change.as_ref() {
            if !self.drop_is_allowed(change) {
                debug!(?change, "drop vetoed");
                self.container.cancel();
                return None;
            }
        }

        self.container.handle_drop(drag)?;
        let change = change?;
        match &change {
            DndListChange::Reorder(reorder) => {
                let item = self.items.remove(reorder.from);
                self.items.insert(reorder.to, item);
                self.selected_ix = Some(reorder.to);
            }
            DndListChange::Removed { from, .. } => {
                self.items.remove(*from);
                self.selected_ix = None;
            }
            DndListChange::Inserted { to, .. } => {
                let to = (*to).min(self.items.len());
                self.items.insert(to, drag.payload.clone());
                self.selected_ix = Some(to);
            }
        }

        if let Some(on_change) = self.callbacks.on_change.as_ref() {
            on_change(&change, &self.items);
        }
        Some(change)
    }

    /// What dropping now would do to the items, if anything.
    fn pending_change(&self, dragged_id: &str) -> Option<DndListChange> {
        let result = self.container.drag_result();
        let to = resolve_drop(result.added_index, result.removed_index);
        match (result.removed_index, to) {
            (Some(from), Some(to)) if from == to => None,
            (Some(from), Some(to)) => Some(DndListChange::Reorder(DndListReorder {
                item_id: self.items.get(from)?.id.clone(),
                from,
                to,
            })),
            (Some(from), None) => Some(DndListChange::Removed {
                item_id: self.items.get(from)?.id.clone(),
                from,
            }),
            (None, Some(to)) => Some(DndListChange::Inserted {
                item_id: dragged_id.to_string(),
                to,
            }),
            (None, None) => None,
        }
    }

    fn drop_is_allowed(&self, change: &DndListChange) -> bool {
        self.callbacks
            .can_drop
            .as_ref()
            .map(|f| f(change, &self.items))
            .unwrap_or(true)
    }
}
