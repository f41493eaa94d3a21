//! Index and geometry reconciliation for drag-and-drop list reordering.
//!
//! On every pointer update a [`Container`] decides which of its slots the
//! dragged item displaces, where it would land if dropped now, the bounds of
//! the placeholder ("shadow") occupying that landing slot, and how far every
//! other slot has to slide to make room. Geometry is read from, and
//! translations written to, a host-provided [`Layout`].

mod container;
mod drag;
mod drop;
mod error;
mod geometry;
mod insertion;
mod layout;
mod memory;
mod options;
mod position;
mod session;
mod shadow;
mod stretch;
mod translation;

pub use container::{ANIMATION_RESTORE_DELAY, Container};
pub use drag::{ContainerId, DragInfo, DragResult};
pub use drop::{DropEvent, DropResult, resolve_drop, splice};
pub use error::{Error, Result};
pub use geometry::{BeginEnd, Orientation, Point, Size};
pub use insertion::resolve_insertion_index;
pub use layout::Layout;
pub use memory::{MemoryLayout, SlotId};
pub use options::{Behaviour, ContainerOptions, DEFAULT_GROUP_NAME};
pub use position::resolve_index;
pub use session::{DragSession, Phase, SessionState};
pub use shadow::{FIRST_INSERT_MARGIN, ShadowBounds, compute_shadow_bounds};
pub use stretch::InsertionStretcher;
pub use translation::{TranslationCalculator, translations};
