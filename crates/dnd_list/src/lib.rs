mod list;

pub use list::{
    DndListChange, DndListDrag, DndListItem, DndListReorder, DndListRowState, DndListState,
};
