use std::collections::BTreeMap;

use super::Point;

/// Last known origin of a window, captured when it closes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowState {
    pub left: f64,
    pub top: f64,
}

impl WindowState {
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }
}

/// In-memory records of where each window was and how far it was scrolled
/// when it last closed. Nothing here outlives the desktop.
#[derive(Debug, Clone, Default)]
pub struct WindowRegistry {
    positions: BTreeMap<String, WindowState>,
    scrolls: BTreeMap<String, f64>,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_position(&mut self, id: &str, origin: Point) {
        self.positions.insert(
            id.to_string(),
            WindowState {
                left: origin.x,
                top: origin.y,
            },
        );
    }

    pub fn position(&self, id: &str) -> Option<WindowState> {
        self.positions.get(id).copied()
    }

    pub fn record_scroll(&mut self, id: &str, scroll_top: f64) {
        self.scrolls.insert(id.to_string(), scroll_top);
    }

    pub fn scroll(&self, id: &str) -> Option<f64> {
        self.scrolls.get(id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_are_absent_until_written() {
        let mut r = WindowRegistry::new();
        assert_eq!(r.position("about"), None);
        assert_eq!(r.scroll("about"), None);
        r.record_position("about", Point::new(12.0, 34.0));
        r.record_scroll("about", 48.0);
        assert_eq!(r.position("about").map(|s| s.origin()), Some(Point::new(12.0, 34.0)));
        assert_eq!(r.scroll("about"), Some(48.0));
    }

    #[test]
    fn later_records_overwrite_earlier_ones() {
        let mut r = WindowRegistry::new();
        r.record_position("a", Point::new(1.0, 1.0));
        r.record_position("a", Point::new(2.0, 3.0));
        assert_eq!(r.position("a"), Some(WindowState { left: 2.0, top: 3.0 }));
    }
}
