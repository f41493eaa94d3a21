use crate::geometry::{BeginEnd, Point, Size};

/// Geometry and presentation capability of one list container.
///
/// The reconciliation core only reads geometry through this trait and writes
/// translation, visibility and animation state back through it. Implementations
/// report live geometry: `begin_end` includes any translation applied earlier.
///
/// Scroll notifications are not part of this trait. A host that observes its
/// container scrolling calls [`Container::handle_scroll`](crate::Container::handle_scroll).
pub trait Layout {
    /// Stable handle identifying one slot of the element sequence.
    type Slot;

    /// Span of `slot` along the primary axis.
    fn begin_end(&self, slot: &Self::Slot) -> BeginEnd;

    /// Extent of `slot` along the primary axis.
    fn size(&self, slot: &Self::Slot) -> f32;

    /// Span of the container element itself.
    fn container_begin_end(&self) -> BeginEnd;

    /// Span of the visible part of the container.
    fn container_rectangles(&self) -> BeginEnd;

    /// Extent of the container along the primary axis.
    fn container_size(&self) -> f32;

    fn scroll_size(&self) -> f32;

    fn scroll_value(&self) -> f32;

    fn is_in_visible_rect(&self, pos: Point) -> bool;

    fn axis_value(&self, pos: Point) -> f32;

    /// Extent of a dragged element of `size` along the primary axis.
    fn axis_size(&self, size: Size) -> f32;

    /// Translation currently applied to `slot`.
    fn translation(&self, slot: &Self::Slot) -> f32;

    fn set_translation(&mut self, slot: &Self::Slot, offset: f32);

    fn set_visibility(&mut self, slot: &Self::Slot, visible: bool);

    /// Enables or disables the slide transition of `slot`.
    fn set_animated(&mut self, slot: &Self::Slot, animated: bool);

    /// Top-left anchor of a placeholder spanning `begin..end` along the axis.
    fn top_left_of_element_begin(&self, begin: f32, end: f32) -> Point;

    /// Extra room the container should reserve while an external item is inserted.
    fn set_insertion_extra_size(&mut self, size: f32);

    /// Shows a trailing stretcher of the given size, or removes it with `None`.
    fn set_stretcher(&mut self, size: Option<f32>);

    /// Drops any cached geometry; called after the host reports a layout change.
    fn invalidate(&mut self);
}
