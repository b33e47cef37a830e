use std::collections::BTreeMap;

use super::floating::{ResizeEdge, apply_resize_drag};
use crate::document::{Document, WindowElement};
use crate::window::{Point, Size};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResizeSession {
    active: bool,
    mode: Option<ResizeEdge>,
    start_pointer: Point,
    start_size: Size,
}

impl ResizeSession {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn mode(&self) -> Option<ResizeEdge> {
        self.mode
    }

    pub fn start_pointer(&self) -> Point {
        self.start_pointer
    }

    pub fn start_size(&self) -> Size {
        self.start_size
    }
}

/// Edge and corner resizing. Each window owns its own session; width and
/// height are written straight to the window without easing.
#[derive(Debug, Clone, Default)]
pub struct ResizeController {
    sessions: BTreeMap<String, ResizeSession>,
}

impl ResizeController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the right, bottom and corner handles on `window` and give it
    /// a session. A window that already carries handles is left alone.
    pub fn attach(&mut self, window: &mut WindowElement) -> bool {
        if window.has_resize_handles() {
            return false;
        }
        window.install_resize_handles();
        self.sessions
            .insert(window.id().to_string(), ResizeSession::default());
        true
    }

    pub fn session(&self, id: &str) -> Option<&ResizeSession> {
        self.sessions.get(id)
    }

    pub fn is_resizing(&self, id: &str) -> bool {
        self.sessions.get(id).is_some_and(ResizeSession::is_active)
    }

    pub fn any_active(&self) -> bool {
        self.sessions.values().any(ResizeSession::is_active)
    }

    pub fn begin(&mut self, window: &WindowElement, edge: ResizeEdge, pointer: Point) -> bool {
        let Some(session) = self.sessions.get_mut(window.id()) else {
            return false;
        };
        *session = ResizeSession {
            active: true,
            mode: Some(edge),
            start_pointer: pointer,
            start_size: window.rect().size(),
        };
        tracing::debug!(window_id = window.id(), ?edge, "resize started");
        true
    }

    /// Apply the pointer delta to every window with an active session.
    /// Returns whether any window changed size.
    pub fn pointer_move(&mut self, doc: &mut Document, pointer: Point) -> bool {
        let mut changed = false;
        for (id, session) in &self.sessions {
            let (true, Some(edge)) = (session.active, session.mode) else {
                continue;
            };
            let Some(window) = doc.window_mut(id) else {
                continue;
            };
            let size = apply_resize_drag(session.start_size, edge, pointer, session.start_pointer);
            window.set_rect(window.rect().with_size(size));
            changed = true;
        }
        changed
    }

    /// Global pointer-up: every session ends.
    pub fn pointer_up(&mut self) -> bool {
        let mut ended = false;
        for (id, session) in self.sessions.iter_mut() {
            if session.active {
                tracing::debug!(window_id = id.as_str(), "resize ended");
                ended = true;
            }
            session.active = false;
            session.mode = None;
        }
        ended
    }
}
