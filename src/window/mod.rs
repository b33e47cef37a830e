pub mod decorator;
pub mod lifecycle;
pub mod registry;

pub use lifecycle::{LifecycleManager, ZOrder};
pub use registry::{WindowRegistry, WindowState};

/// A position in document pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A size in document pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Rendered geometry of a window: origin plus size, all in pixels.
///
/// Origins may be negative or extend past the viewport; only drag clamps
/// them, resize and restore never do.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanelRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PanelRect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x < self.right() && p.y >= self.top && p.y < self.bottom()
    }

    pub fn with_origin(mut self, origin: Point) -> Self {
        self.left = origin.x;
        self.top = origin.y;
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.width = size.width;
        self.height = size.height;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let r = PanelRect::new(10.0, 20.0, 100.0, 50.0);
        assert!(r.contains(Point::new(10.0, 20.0)));
        assert!(r.contains(Point::new(109.9, 69.9)));
        assert!(!r.contains(Point::new(110.0, 30.0)));
        assert!(!r.contains(Point::new(50.0, 70.0)));
        assert!(!r.contains(Point::new(9.9, 30.0)));
    }

    #[test]
    fn with_origin_keeps_size() {
        let r = PanelRect::new(0.0, 0.0, 40.0, 30.0).with_origin(Point::new(-5.0, 7.0));
        assert_eq!(r, PanelRect::new(-5.0, 7.0, 40.0, 30.0));
        assert_eq!(r.right(), 35.0);
        assert_eq!(r.bottom(), 37.0);
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(b), 5.0);
        assert_eq!(b - a, Point::new(3.0, 4.0));
    }
}
