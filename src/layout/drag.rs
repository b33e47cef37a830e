use std::collections::BTreeMap;

use super::floating::clamp_drag_target;
use crate::document::{Document, WindowElement};
use crate::window::Point;

/// Per-window drag state, attached once for every window that has a title
/// bar.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragSession {
    dragging: bool,
    offset: Point,
}

impl DragSession {
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Pointer position relative to the window origin at drag start.
    pub fn offset(&self) -> Point {
        self.offset
    }
}

/// The one window whose position is eased each frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveDrag {
    id: String,
    pub(crate) current: Point,
    pub(crate) target: Point,
    released: bool,
}

impl ActiveDrag {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn current(&self) -> Point {
        self.current
    }

    pub fn target(&self) -> Point {
        self.target
    }

    /// The pointer went up; the target is frozen and the window is settling.
    pub fn is_released(&self) -> bool {
        self.released
    }
}

/// Routes pointer input to per-window drag sessions and owns the single
/// global active drag.
///
/// Starting a drag replaces the active slot, which ends easing for whatever
/// window held it. Releasing a window only marks the slot as settling when
/// that same window holds it, so a late release from an older drag can never
/// cut short a newer one.
#[derive(Debug, Clone, Default)]
pub struct DragCoordinator {
    sessions: BTreeMap<String, DragSession>,
    active: Option<ActiveDrag>,
}

impl DragCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a drag session to `window`. Windows without a title bar get
    /// none and stay where they are.
    pub fn attach(&mut self, window: &WindowElement) -> bool {
        if !window.has_drag_handle() {
            tracing::debug!(window_id = window.id(), "no drag handle; drag not attached");
            return false;
        }
        self.sessions.entry(window.id().to_string()).or_default();
        true
    }

    pub fn is_attached(&self, id: &str) -> bool {
        self.sessions.contains_key(id)
    }

    pub fn session(&self, id: &str) -> Option<&DragSession> {
        self.sessions.get(id)
    }

    pub fn is_dragging(&self, id: &str) -> bool {
        self.sessions.get(id).is_some_and(DragSession::is_dragging)
    }

    pub fn active(&self) -> Option<&ActiveDrag> {
        self.active.as_ref()
    }

    pub(crate) fn active_mut(&mut self) -> Option<&mut ActiveDrag> {
        self.active.as_mut()
    }

    pub(crate) fn clear_active(&mut self) {
        self.active = None;
    }

    /// Pointer went down on `window`'s title bar. Captures the pointer
    /// offset and seeds both eased and target position with the window's
    /// rendered origin.
    pub fn begin(&mut self, window: &WindowElement, pointer: Point) -> bool {
        let Some(session) = self.sessions.get_mut(window.id()) else {
            return false;
        };
        let origin = window.rect().origin();
        session.dragging = true;
        session.offset = pointer - origin;
        if let Some(previous) = self.active.as_ref()
            && previous.id != window.id()
        {
            tracing::debug!(
                window_id = window.id(),
                previous = previous.id.as_str(),
                "drag replaces active drag"
            );
        }
        self.active = Some(ActiveDrag {
            id: window.id().to_string(),
            current: origin,
            target: origin,
            released: false,
        });
        tracing::debug!(window_id = window.id(), x = origin.x, y = origin.y, "drag started");
        true
    }

    /// Update the target of the active drag from a pointer position.
    /// Sessions that are not dragging ignore the move.
    pub fn pointer_move(&mut self, doc: &Document, pointer: Point) -> Option<Point> {
        let viewport = doc.viewport();
        let active = self.active.as_mut()?;
        let session = self.sessions.get(&active.id)?;
        if !session.dragging {
            return None;
        }
        let window = doc.window(&active.id)?;
        active.target = clamp_drag_target(pointer, session.offset, window.rect().width, viewport);
        Some(active.target)
    }

    /// End the drag of one window. Its local flag is always cleared; the
    /// active slot is released only when it belongs to this window and the
    /// window was actually dragging.
    pub fn release(&mut self, id: &str) -> bool {
        let Some(session) = self.sessions.get_mut(id) else {
            return false;
        };
        if !session.dragging {
            return false;
        }
        session.dragging = false;
        if let Some(active) = self.active.as_mut()
            && active.id == id
        {
            active.released = true;
            tracing::debug!(window_id = id, "drag released");
        }
        true
    }

    /// Global pointer-up: every dragging session ends. Returns the ids that
    /// were dragging.
    pub fn pointer_up(&mut self) -> Vec<String> {
        let dragging: Vec<String> = self
            .sessions
            .iter()
            .filter(|(_, s)| s.dragging)
            .map(|(id, _)| id.clone())
            .collect();
        for id in &dragging {
            self.release(id);
        }
        dragging
    }
}
