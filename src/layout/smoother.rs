use super::drag::{ActiveDrag, DragCoordinator};
use crate::constants::{SMOOTHING_EPSILON, SMOOTHING_FACTOR};
use crate::document::Document;
use crate::window::Point;

/// Exponential easing step: moves `current` a fixed fraction of the way to
/// `target`.
pub fn ease(current: f64, target: f64, factor: f64) -> f64 {
    current + (target - current) * factor
}

/// Eases the actively dragged window toward its target, once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometrySmoother {
    factor: f64,
    epsilon: f64,
}

impl Default for GeometrySmoother {
    fn default() -> Self {
        Self {
            factor: SMOOTHING_FACTOR,
            epsilon: SMOOTHING_EPSILON,
        }
    }
}

impl GeometrySmoother {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Advance one frame. Returns `true` once both axes are within epsilon
    /// of the target.
    pub fn step(&self, drag: &mut ActiveDrag) -> bool {
        drag.current = Point::new(
            ease(drag.current.x, drag.target.x, self.factor),
            ease(drag.current.y, drag.target.y, self.factor),
        );
        (drag.target.x - drag.current.x).abs() < self.epsilon
            && (drag.target.y - drag.current.y).abs() < self.epsilon
    }

    /// Frame callback. With no active drag nothing happens. Otherwise the
    /// eased origin is written to the window; a released drag that has
    /// converged snaps onto its target and frees the active slot.
    pub fn tick(&self, coordinator: &mut DragCoordinator, doc: &mut Document) -> Option<Point> {
        let active = coordinator.active_mut()?;
        let Some(window) = doc.window_mut(active.id()) else {
            coordinator.clear_active();
            return None;
        };
        let converged = self.step(active);
        let settled = converged && active.is_released();
        if settled {
            active.current = active.target;
        }
        let position = active.current;
        window.set_rect(window.rect().with_origin(position));
        if settled {
            tracing::debug!(window_id = window.id(), x = position.x, y = position.y, "drag settled");
            coordinator.clear_active();
        }
        Some(position)
    }
}
