//! The page-level controller. `Desktop` owns the document and every
//! controller that mutates it, and routes pointer input and frame ticks to
//! them. Nothing here fails: missing windows and handles turn into no-ops.

use std::time::Instant;

use crate::document::Document;
use crate::layout::{DragCoordinator, GeometrySmoother, HitTarget, ResizeController, hit_test};
use crate::tabs::{self, TabButtonRef};
use crate::theme::{self, Theme};
use crate::window::{LifecycleManager, Point, Size};

#[derive(Debug)]
pub struct Desktop {
    document: Document,
    lifecycle: LifecycleManager,
    drag: DragCoordinator,
    resize: ResizeController,
    smoother: GeometrySmoother,
}

impl Desktop {
    /// Take ownership of `document` and attach drag and resize behavior to
    /// each of its windows.
    pub fn new(document: Document) -> Self {
        Self::with_lifecycle(document, LifecycleManager::new())
    }

    pub fn with_lifecycle(mut document: Document, lifecycle: LifecycleManager) -> Self {
        let mut drag = DragCoordinator::new();
        let mut resize = ResizeController::new();
        for window in document.windows_mut() {
            drag.attach(window);
            resize.attach(window);
        }
        tracing::debug!(windows = document.windows().len(), "desktop initialized");
        Self {
            document,
            lifecycle,
            drag,
            resize,
            smoother: GeometrySmoother::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn lifecycle(&self) -> &LifecycleManager {
        &self.lifecycle
    }

    pub fn drag(&self) -> &DragCoordinator {
        &self.drag
    }

    pub fn resize(&self) -> &ResizeController {
        &self.resize
    }

    pub fn open_window(&mut self, id: &str) -> bool {
        self.lifecycle.open(&mut self.document, id)
    }

    /// Same as [`open_window`](Self::open_window).
    pub fn open_modal(&mut self, id: &str) -> bool {
        self.open_window(id)
    }

    pub fn close_window(&mut self, id: &str) -> bool {
        self.close_window_at(id, Instant::now())
    }

    /// Close with an explicit clock reading; the hide lands on the first
    /// [`frame`](Self::frame) at or after `now` plus the close delay.
    pub fn close_window_at(&mut self, id: &str, now: Instant) -> bool {
        self.lifecycle.close(&mut self.document, id, now)
    }

    pub fn switch_tab(&mut self, window_id: &str, tab_name: &str, clicked: TabButtonRef) {
        tabs::switch_tab(&mut self.document, window_id, tab_name, clicked);
    }

    pub fn cycle_tab(&mut self, window_id: &str, forward: bool) -> Option<String> {
        tabs::cycle_tab(&mut self.document, window_id, forward)
    }

    pub fn toggle_theme(&mut self) -> Theme {
        theme::toggle_theme(&mut self.document)
    }

    pub fn theme(&self) -> Theme {
        Theme::from_classes(self.document.root_classes())
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.document.window(id).is_some_and(|w| w.is_displayed())
    }

    /// The displayed window with the highest stacking rank.
    pub fn topmost_open(&self) -> Option<&str> {
        self.document.stacking_order().last().map(|w| w.id())
    }

    /// Move a window's content by `delta`, clamped to `0..=max_scroll`.
    pub fn scroll_window(&mut self, id: &str, delta: f64, max_scroll: f64) -> Option<f64> {
        let window = self.document.window_mut(id)?;
        let scroll_top = (window.scroll_top() + delta).min(max_scroll).max(0.0);
        window.set_scroll_top(scroll_top);
        Some(scroll_top)
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.document.set_viewport(viewport);
    }

    /// Primary button pressed at `p`. Returns whether a window consumed it.
    pub fn pointer_down(&mut self, p: Point) -> bool {
        let Some(hit) = hit_test(&self.document, p) else {
            return false;
        };
        let id = hit.window_id.as_str();
        match hit.target {
            HitTarget::CloseBox => {
                self.close_window(id);
            }
            HitTarget::Tab(index) => {
                tabs::activate_button(&mut self.document, id, index);
            }
            HitTarget::Resize(edge) => {
                if let Some(window) = self.document.window(id)
                    && self.resize.begin(window, edge, p)
                {
                    self.lifecycle.promote(&mut self.document, id);
                    self.document.set_user_select_suppressed(true);
                }
            }
            HitTarget::TitleBar => {
                if let Some(window) = self.document.window(id)
                    && self.drag.begin(window, p)
                {
                    self.lifecycle.promote(&mut self.document, id);
                    self.document.set_user_select_suppressed(true);
                }
            }
            HitTarget::Body => {}
        }
        true
    }

    pub fn pointer_move(&mut self, p: Point) {
        self.drag.pointer_move(&self.document, p);
        self.resize.pointer_move(&mut self.document, p);
    }

    pub fn pointer_up(&mut self) {
        self.drag.pointer_up();
        self.resize.pointer_up();
        self.document.set_user_select_suppressed(false);
    }

    /// Animation frame: lifecycle timers first, then drag easing.
    pub fn frame(&mut self, now: Instant) {
        self.lifecycle.tick(&mut self.document, now);
        self.smoother.tick(&mut self.drag, &mut self.document);
    }

    /// Whether a frame would change anything visible: a drag is easing, a
    /// transition is showing or a hide is still pending.
    pub fn is_animating(&self) -> bool {
        self.drag.active().is_some()
            || self.lifecycle.has_pending_hides()
            || self
                .document
                .windows()
                .iter()
                .any(|w| w.transition().is_some())
    }
}
