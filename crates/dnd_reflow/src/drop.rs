use serde::{Deserialize, Serialize};

use crate::drag::DragInfo;

/// Index the dragged item takes in the list once the removal is applied.
///
/// `added_index` is expressed in the list as it looked during the drag, with
/// the removed slot still in place, so an insertion after the removed slot
/// shifts down by one.
pub fn resolve_drop(added_index: Option<usize>, removed_index: Option<usize>) -> Option<usize> {
    let added_index = added_index?;
    match removed_index {
        Some(removed) if removed < added_index => Some(added_index - 1),
        _ => Some(added_index),
    }
}

/// The mutation a container commits on drop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropResult {
    /// Final insertion index, after the removal shift.
    pub added_index: Option<usize>,
    pub removed_index: Option<usize>,
}

impl DropResult {
    pub fn is_reorder(&self) -> bool {
        self.added_index.is_some() && self.removed_index.is_some()
    }
}

/// Passed to the commit callback of a container.
#[derive(Debug)]
pub struct DropEvent<'a, S, P> {
    pub drag_info: &'a DragInfo<S, P>,
    pub added_index: Option<usize>,
    pub removed_index: Option<usize>,
    pub payload: &'a P,
    pub element: &'a S,
}

impl<S, P> DropEvent<'_, S, P> {
    pub fn result(&self) -> DropResult {
        DropResult {
            added_index: self.added_index,
            removed_index: self.removed_index,
        }
    }
}

/// Applies a committed drop to a slot sequence: remove first, then insert.
pub fn splice<S: Clone>(slots: &mut Vec<S>, result: DropResult, element: &S) {
    if let Some(removed) = result.removed_index.filter(|ix| *ix < slots.len()) {
        slots.remove(removed);
    }
    if let Some(added) = result.added_index {
        let added = added.min(slots.len());
        slots.insert(added, element.clone());
    }
}
