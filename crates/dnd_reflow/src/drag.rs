use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Size};
use crate::shadow::ShadowBounds;

/// Identity of one list container taking part in drags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContainerId(u64);

impl ContainerId {
    /// Allocates a process-unique id.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Snapshot of a drag gesture forwarded to a container on every pointer update.
///
/// `S` is the slot handle type of the layouts involved, `P` the payload.
#[derive(Clone, Debug)]
pub struct DragInfo<S, P> {
    pub position: Point,
    /// Container the dragged slot came from.
    pub container: ContainerId,
    /// Group name of the originating container.
    pub group_name: String,
    /// Index of the dragged slot in its originating container.
    pub element_index: Option<usize>,
    /// Handle of the dragged content; inserted into the target on drop.
    pub element: S,
    pub element_size: Size,
    /// Forces the shadow bounds to be recomputed from current geometry.
    pub invalidate_shadow: bool,
    pub payload: P,
    /// The container the pointer is currently over, if any.
    pub target: Option<ContainerId>,
}

impl<S, P> DragInfo<S, P> {
    pub fn new(container: ContainerId, element: S, element_size: Size, payload: P) -> Self {
        Self {
            position: Point::default(),
            container,
            group_name: crate::options::DEFAULT_GROUP_NAME.to_string(),
            element_index: None,
            element,
            element_size,
            invalidate_shadow: false,
            payload,
            target: None,
        }
    }

    pub fn group_name(mut self, group_name: impl Into<String>) -> Self {
        self.group_name = group_name.into();
        self
    }

    pub fn element_index(mut self, ix: usize) -> Self {
        self.element_index = Some(ix);
        self
    }

    pub fn at(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    pub fn move_to(&mut self, position: Point) {
        self.position = position;
    }
}

/// A container's verdict for one pointer update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragResult {
    pub added_index: Option<usize>,
    pub removed_index: Option<usize>,
    pub element_size: Option<f32>,
    pub pos: Option<f32>,
    pub shadow_begin_end: Option<ShadowBounds>,
}
