//! Drag Gesture
//!
//! What is being dragged, where the drag started, and the ephemeral hover
//! state that lives only for the duration of one gesture.

use crate::domain::{ColumnId, ItemId};

/// Kind of a draggable node, and of a drop candidate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragKind {
    Column,
    Item,
}

/// An in-flight drag
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Gesture {
    /// A whole column, grabbed by its header handle
    Column { column_id: ColumnId },
    /// A card, which may only land inside the column it came from
    Item { item_id: ItemId, source_column_id: ColumnId },
}

impl Gesture {
    pub fn column(column_id: impl Into<ColumnId>) -> Self {
        Gesture::Column { column_id: column_id.into() }
    }

    pub fn item(item_id: impl Into<ItemId>, source_column_id: impl Into<ColumnId>) -> Self {
        Gesture::Item {
            item_id: item_id.into(),
            source_column_id: source_column_id.into(),
        }
    }

    /// Id of the dragged node
    pub fn active_id(&self) -> &str {
        match self {
            Gesture::Column { column_id } => column_id,
            Gesture::Item { item_id, .. } => item_id,
        }
    }

    pub fn kind(&self) -> DragKind {
        match self {
            Gesture::Column { .. } => DragKind::Column,
            Gesture::Item { .. } => DragKind::Item,
        }
    }

    /// Column an item drag started in; `None` for column drags
    pub fn source_container_id(&self) -> Option<&str> {
        match self {
            Gesture::Column { .. } => None,
            Gesture::Item { source_column_id, .. } => Some(source_column_id),
        }
    }
}

/// Where on the draggable element the pointer went down
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerOrigin {
    /// Inside the designated grip sub-region
    pub on_handle: bool,
    /// Inside a button, input or text field
    pub on_interactive_control: bool,
}

impl PointerOrigin {
    pub fn handle() -> Self {
        Self { on_handle: true, on_interactive_control: false }
    }

    pub fn permits_drag(&self) -> bool {
        self.on_handle && !self.on_interactive_control
    }
}

/// Result of a drag-start attempt; `Suppressed` means the platform event
/// must be cancelled so no native drag happens
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragStart {
    Started,
    Suppressed(SuppressReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SuppressReason {
    /// Pointer went down outside the grip
    OutsideHandle,
    /// Pointer went down on a button/input/textarea
    InteractiveControl,
    /// Current page is read-only
    ReadOnly,
}

impl DragStart {
    pub fn is_started(&self) -> bool {
        matches!(self, DragStart::Started)
    }
}

/// Where an insertion lands relative to the hovered node
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndicatorPosition {
    Before,
    After,
    /// Appended into the hovered column's body
    Inside,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropIndicator {
    pub target_id: String,
    pub position: IndicatorPosition,
}

impl DropIndicator {
    pub fn new(target_id: impl Into<String>, position: IndicatorPosition) -> Self {
        Self { target_id: target_id.into(), position }
    }
}

/// Everything that exists only while a drag is in progress
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DndState {
    pub gesture: Option<Gesture>,
    /// Node currently highlighted as the drop target
    pub drag_over: Option<String>,
    /// Insertion hint for item drags
    pub indicator: Option<DropIndicator>,
}

impl DndState {
    pub fn is_idle(&self) -> bool {
        self.gesture.is_none() && self.drag_over.is_none() && self.indicator.is_none()
    }

    pub fn kind(&self) -> Option<DragKind> {
        self.gesture.as_ref().map(Gesture::kind)
    }

    pub fn active_id(&self) -> Option<&str> {
        self.gesture.as_ref().map(Gesture::active_id)
    }

    pub fn source_container_id(&self) -> Option<&str> {
        self.gesture.as_ref().and_then(Gesture::source_container_id)
    }

    pub fn clear(&mut self) {
        *self = DndState::default();
    }
}
