pub mod drag;
pub mod floating;
pub mod resize;
pub mod smoother;

pub use drag::{ActiveDrag, DragCoordinator, DragSession};
pub use floating::{ResizeEdge, ResizeHandle, WindowChrome};
pub use resize::{ResizeController, ResizeSession};
pub use smoother::GeometrySmoother;

use crate::document::{Document, WindowElement};
use crate::window::Point;

/// Which part of a window a pointer landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    CloseBox,
    Resize(ResizeEdge),
    TitleBar,
    /// Index into the window's tab buttons.
    Tab(usize),
    Body,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub window_id: String,
    pub target: HitTarget,
}

/// Find the topmost displayed window under `p` and the chrome part hit.
pub fn hit_test(doc: &Document, p: Point) -> Option<Hit> {
    doc.stacking_order()
        .into_iter()
        .rev()
        .find(|w| w.rect().contains(p))
        .and_then(|w| {
            hit_test_window(w, p).map(|target| Hit {
                window_id: w.id().to_string(),
                target,
            })
        })
}

/// Resolve `p` against one window's chrome. Close box beats resize handles,
/// resize handles beat the title bar and tabs.
pub fn hit_test_window(window: &WindowElement, p: Point) -> Option<HitTarget> {
    if !window.rect().contains(p) {
        return None;
    }
    let chrome = WindowChrome::for_window(window);
    if chrome.close_box.is_some_and(|r| r.contains(p)) {
        return Some(HitTarget::CloseBox);
    }
    if let Some(handle) = chrome
        .resize_handles
        .iter()
        .flatten()
        .find(|h| h.rect.contains(p))
    {
        return Some(HitTarget::Resize(handle.edge));
    }
    if chrome.title_bar.is_some_and(|r| r.contains(p)) {
        return Some(HitTarget::TitleBar);
    }
    if let Some(idx) = chrome.tab_buttons.iter().position(|r| r.contains(p)) {
        return Some(HitTarget::Tab(idx));
    }
    Some(HitTarget::Body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DocumentBuilder, WindowSpec};
    use crate::window::{PanelRect, Size};

    fn doc() -> Document {
        let mut doc = DocumentBuilder::new(Size::new(1200.0, 800.0))
            .window(WindowSpec::new("low", "Low").tab("a", "Alpha", "").tab("b", "Beta", ""))
            .window(WindowSpec::new("high", "High"))
            .build()
            .expect("document");
        let placements = [
            ("low", PanelRect::new(0.0, 0.0, 400.0, 300.0), 11),
            ("high", PanelRect::new(200.0, 100.0, 400.0, 300.0), 12),
        ];
        for (id, rect, z) in placements {
            let w = doc.window_mut(id).expect("window");
            w.set_rect(rect);
            w.set_displayed(true);
            w.set_z_index(z);
            w.install_resize_handles();
        }
        doc
    }

    #[test]
    fn topmost_window_wins_overlap() {
        let d = doc();
        let hit = hit_test(&d, Point::new(250.0, 200.0)).expect("hit");
        assert_eq!(hit.window_id, "high");
        let hit = hit_test(&d, Point::new(50.0, 200.0)).expect("hit");
        assert_eq!(hit.window_id, "low");
    }

    #[test]
    fn hidden_windows_are_not_hit() {
        let mut d = doc();
        d.window_mut("high").expect("window").set_displayed(false);
        let hit = hit_test(&d, Point::new(250.0, 200.0)).expect("hit");
        assert_eq!(hit.window_id, "low");
        assert!(hit_test(&d, Point::new(900.0, 700.0)).is_none());
    }

    #[test]
    fn chrome_parts_resolve() {
        let d = doc();
        let low = d.window("low").expect("window");
        assert_eq!(hit_test_window(low, Point::new(390.0, 4.0)), Some(HitTarget::CloseBox));
        assert_eq!(hit_test_window(low, Point::new(100.0, 4.0)), Some(HitTarget::TitleBar));
        assert_eq!(hit_test_window(low, Point::new(10.0, 20.0)), Some(HitTarget::Tab(0)));
        assert_eq!(hit_test_window(low, Point::new(60.0, 20.0)), Some(HitTarget::Tab(1)));
        assert_eq!(hit_test_window(low, Point::new(100.0, 100.0)), Some(HitTarget::Body));
        assert_eq!(
            hit_test_window(low, Point::new(398.0, 298.0)),
            Some(HitTarget::Resize(ResizeEdge::Corner))
        );
        assert_eq!(
            hit_test_window(low, Point::new(395.0, 100.0)),
            Some(HitTarget::Resize(ResizeEdge::Right))
        );
        assert_eq!(
            hit_test_window(low, Point::new(100.0, 295.0)),
            Some(HitTarget::Resize(ResizeEdge::Bottom))
        );
        assert_eq!(hit_test_window(low, Point::new(500.0, 100.0)), None);
    }
}
