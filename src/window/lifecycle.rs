use std::time::Instant;

use super::registry::WindowRegistry;
use super::{PanelRect, Point};
use crate::constants::{CLOSE_DELAY, Z_INDEX_BASELINE};
use crate::document::{Document, Transition, WindowElement};

/// Page-wide stacking counter. Every promotion takes the next value, so the
/// most recently promoted window always holds the single highest rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZOrder {
    highest: u32,
}

impl Default for ZOrder {
    fn default() -> Self {
        Self {
            highest: Z_INDEX_BASELINE,
        }
    }
}

impl ZOrder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn highest(&self) -> u32 {
        self.highest
    }

    pub fn promote(&mut self, window: &mut WindowElement) -> u32 {
        self.highest = self.highest.saturating_add(1);
        window.set_z_index(self.highest);
        self.highest
    }
}

#[derive(Debug, Clone)]
struct PendingHide {
    id: String,
    due: Instant,
}

/// Opens and closes windows: centering, restoring, stacking, transitions
/// and the delayed hide that follows a close.
#[derive(Debug, Clone)]
pub struct LifecycleManager {
    registry: WindowRegistry,
    z_order: ZOrder,
    pending_hides: Vec<PendingHide>,
}

impl Default for LifecycleManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LifecycleManager {
    pub fn new() -> Self {
        Self {
            registry: WindowRegistry::new(),
            z_order: ZOrder::new(),
            pending_hides: Vec::new(),
        }
    }

    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    pub fn z_order(&self) -> ZOrder {
        self.z_order
    }

    pub fn has_pending_hide(&self, id: &str) -> bool {
        self.pending_hides.iter().any(|p| p.id == id)
    }

    pub fn has_pending_hides(&self) -> bool {
        !self.pending_hides.is_empty()
    }

    /// Show a window. Returns `false` (and changes nothing) when `id` is not
    /// in the document.
    ///
    /// A window with no recorded state is centered in the viewport using its
    /// rendered size; otherwise its recorded origin is restored verbatim.
    /// Reopening before a pending hide fires cancels that hide.
    pub fn open(&mut self, doc: &mut Document, id: &str) -> bool {
        let viewport = doc.viewport();
        let recorded = self.registry.position(id);
        let scroll = self.registry.scroll(id);
        let Some(window) = doc.window_mut(id) else {
            tracing::debug!(window_id = id, "open ignored: no such window");
            return false;
        };

        window.set_displayed(true);
        let rect = window.rect();
        let origin = match recorded {
            Some(state) => state.origin(),
            None => centered_origin(rect, viewport.width, viewport.height),
        };
        window.set_rect(rect.with_origin(origin));
        if let Some(scroll_top) = scroll {
            window.set_scroll_top(scroll_top);
        }
        let z = self.z_order.promote(window);
        window.set_transition(Some(Transition::Opening));
        doc.set_overlay_active(true);

        let before = self.pending_hides.len();
        self.pending_hides.retain(|p| p.id != id);
        let cancelled = before != self.pending_hides.len();

        tracing::debug!(
            window_id = id,
            left = origin.x,
            top = origin.y,
            z,
            restored = recorded.is_some(),
            cancelled_hide = cancelled,
            "opened window"
        );
        true
    }

    /// Request a window to close. Geometry and scroll are captured right
    /// away; the window is hidden once [`CLOSE_DELAY`] has elapsed, on the
    /// first [`tick`](Self::tick) at or after the deadline.
    pub fn close(&mut self, doc: &mut Document, id: &str, now: Instant) -> bool {
        let Some(window) = doc.window_mut(id) else {
            tracing::debug!(window_id = id, "close ignored: no such window");
            return false;
        };

        let origin = window.rect().origin();
        self.registry.record_scroll(id, window.scroll_top());
        self.registry.record_position(id, origin);
        window.set_transition(Some(Transition::Closing));

        // A second close before the first hide lands keeps the earlier deadline.
        if !self.has_pending_hide(id) {
            self.pending_hides.push(PendingHide {
                id: id.to_string(),
                due: now + CLOSE_DELAY,
            });
        }
        tracing::debug!(window_id = id, left = origin.x, top = origin.y, "closing window");
        true
    }

    /// Raise a window above every other known rank.
    pub fn promote(&mut self, doc: &mut Document, id: &str) -> Option<u32> {
        let window = doc.window_mut(id)?;
        Some(self.z_order.promote(window))
    }

    /// Per-frame housekeeping: end opening transitions from the previous
    /// frame and apply every hide whose deadline has passed.
    pub fn tick(&mut self, doc: &mut Document, now: Instant) {
        for window in doc.windows_mut() {
            if window.transition() == Some(Transition::Opening) {
                window.set_transition(None);
            }
        }

        if self.pending_hides.iter().all(|p| p.due > now) {
            return;
        }
        let (due, waiting): (Vec<PendingHide>, Vec<PendingHide>) = self
            .pending_hides
            .drain(..)
            .partition(|p| p.due <= now);
        self.pending_hides = waiting;

        for hide in due {
            if let Some(window) = doc.window_mut(&hide.id) {
                window.set_displayed(false);
                if window.transition() == Some(Transition::Closing) {
                    window.set_transition(None);
                }
                tracing::debug!(window_id = hide.id.as_str(), "window hidden");
            }
        }
        let any_open = doc.any_displayed();
        doc.set_overlay_active(any_open);
    }
}

/// Origin that centers `rect` in a viewport of the given size.
pub fn centered_origin(rect: PanelRect, viewport_width: f64, viewport_height: f64) -> Point {
    Point::new(
        (viewport_width - rect.width) / 2.0,
        (viewport_height - rect.height) / 2.0,
    )
}
