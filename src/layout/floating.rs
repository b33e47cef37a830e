use crate::constants::{
    CLOSE_BOX_WIDTH, DRAG_BOTTOM_MARGIN, DRAG_EDGE_PADDING, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
    RESIZE_CORNER_SIZE, RESIZE_EDGE_THICKNESS, TAB_GLYPH_WIDTH, TAB_STRIP_HEIGHT,
    TITLE_BAR_HEIGHT,
};
use crate::document::WindowElement;
use crate::window::{PanelRect, Point, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    Right,
    Bottom,
    Corner,
}

impl ResizeEdge {
    pub fn affects_width(self) -> bool {
        matches!(self, ResizeEdge::Right | ResizeEdge::Corner)
    }

    pub fn affects_height(self) -> bool {
        matches!(self, ResizeEdge::Bottom | ResizeEdge::Corner)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeHandle {
    pub edge: ResizeEdge,
    pub rect: PanelRect,
}

/// The three resize affordances of a window, corner first so it wins where
/// the strips overlap it.
pub fn resize_handles_for_window(rect: PanelRect) -> [ResizeHandle; 3] {
    let corner = RESIZE_CORNER_SIZE.min(rect.width).min(rect.height);
    let edge_w = RESIZE_EDGE_THICKNESS.min(rect.width);
    let edge_h = RESIZE_EDGE_THICKNESS.min(rect.height);
    [
        ResizeHandle {
            edge: ResizeEdge::Corner,
            rect: PanelRect::new(
                rect.right() - corner,
                rect.bottom() - corner,
                corner,
                corner,
            ),
        },
        ResizeHandle {
            edge: ResizeEdge::Right,
            rect: PanelRect::new(rect.right() - edge_w, rect.top, edge_w, rect.height),
        },
        ResizeHandle {
            edge: ResizeEdge::Bottom,
            rect: PanelRect::new(rect.left, rect.bottom() - edge_h, rect.width, edge_h),
        },
    ]
}

/// Title bar region of a window; it doubles as the drag handle.
pub fn title_bar_rect(rect: PanelRect) -> PanelRect {
    PanelRect::new(
        rect.left,
        rect.top,
        rect.width,
        TITLE_BAR_HEIGHT.min(rect.height),
    )
}

/// Close box at the right end of the title bar.
pub fn close_box_rect(rect: PanelRect) -> PanelRect {
    let bar = title_bar_rect(rect);
    let width = CLOSE_BOX_WIDTH.min(bar.width);
    PanelRect::new(bar.right() - width, bar.top, width, bar.height)
}

/// Chrome regions of one window, derived from its geometry and markup.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowChrome {
    pub title_bar: Option<PanelRect>,
    pub close_box: Option<PanelRect>,
    pub tab_strip: Option<PanelRect>,
    pub tab_buttons: Vec<PanelRect>,
    pub content: PanelRect,
    pub resize_handles: Option<[ResizeHandle; 3]>,
}

impl WindowChrome {
    pub fn for_window(window: &WindowElement) -> Self {
        let rect = window.rect();
        let (title_bar, close_box) = if window.has_drag_handle() {
            (Some(title_bar_rect(rect)), Some(close_box_rect(rect)))
        } else {
            (None, None)
        };
        let mut top = rect.top + title_bar.map_or(0.0, |bar| bar.height);

        let buttons = window.tab_buttons();
        let tab_strip = (!buttons.is_empty()).then(|| {
            let height = TAB_STRIP_HEIGHT.min((rect.bottom() - top).max(0.0));
            PanelRect::new(rect.left, top, rect.width, height)
        });
        let mut tab_buttons = Vec::with_capacity(buttons.len());
        if let Some(strip) = tab_strip {
            top = strip.bottom();
            let mut x = strip.left;
            for button in buttons {
                let width = (button.label().chars().count() + 2) as f64 * TAB_GLYPH_WIDTH;
                // Buttons past the right edge are not reachable.
                if x + width > strip.right() {
                    break;
                }
                tab_buttons.push(PanelRect::new(x, strip.top, width, strip.height));
                x += width;
            }
        }

        Self {
            title_bar,
            close_box,
            tab_strip,
            tab_buttons,
            content: PanelRect::new(rect.left, top, rect.width, (rect.bottom() - top).max(0.0)),
            resize_handles: window
                .has_resize_handles()
                .then(|| resize_handles_for_window(rect)),
        }
    }
}

/// Where a dragged window should go for a pointer position, given the
/// pointer-to-origin offset captured at drag start.
///
/// Horizontally the whole window stays inside the viewport with
/// [`DRAG_EDGE_PADDING`] on both sides. Vertically only the top is padded;
/// the bottom bound keeps the title bar [`DRAG_BOTTOM_MARGIN`] above the
/// viewport's bottom edge while the body may hang below it. When the window
/// is wider than the viewport the left padding wins.
pub fn clamp_drag_target(pointer: Point, offset: Point, window_width: f64, viewport: Size) -> Point {
    let raw = pointer - offset;
    let max_left = viewport.width - window_width - DRAG_EDGE_PADDING;
    let max_top = viewport.height - DRAG_BOTTOM_MARGIN;
    Point::new(
        raw.x.min(max_left).max(DRAG_EDGE_PADDING),
        raw.y.min(max_top).max(DRAG_EDGE_PADDING),
    )
}

/// New size after dragging a resize handle from `start_pointer` to
/// `pointer`. Only the axes the edge controls change; both are floored at
/// the minimum window size and have no upper bound.
pub fn apply_resize_drag(
    start_size: Size,
    edge: ResizeEdge,
    pointer: Point,
    start_pointer: Point,
) -> Size {
    let delta = pointer - start_pointer;
    let mut size = start_size;
    if edge.affects_width() {
        size.width = (start_size.width + delta.x).max(MIN_WINDOW_WIDTH);
    }
    if edge.affects_height() {
        size.height = (start_size.height + delta.y).max(MIN_WINDOW_HEIGHT);
    }
    size
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size::new(1200.0, 800.0);

    #[test]
    fn drag_target_follows_pointer_inside_bounds() {
        let t = clamp_drag_target(
            Point::new(500.0, 270.0),
            Point::new(100.0, 20.0),
            400.0,
            VIEWPORT,
        );
        assert_eq!(t, Point::new(400.0, 250.0));
    }

    #[test]
    fn drag_target_is_clamped_on_every_side() {
        let offset = Point::new(10.0, 5.0);
        let top_left = clamp_drag_target(Point::new(-500.0, -500.0), offset, 400.0, VIEWPORT);
        assert_eq!(top_left, Point::new(8.0, 8.0));
        let bottom_right = clamp_drag_target(Point::new(5000.0, 5000.0), offset, 400.0, VIEWPORT);
        assert_eq!(bottom_right, Point::new(1200.0 - 400.0 - 8.0, 800.0 - 60.0));
    }

    #[test]
    fn drag_target_clamp_holds_over_a_grid_of_pointers() {
        let offset = Point::new(37.0, 9.0);
        let width = 420.0;
        for px in (-400..1800).step_by(73) {
            for py in (-400..1400).step_by(61) {
                let t = clamp_drag_target(Point::new(px as f64, py as f64), offset, width, VIEWPORT);
                assert!(t.x >= 8.0 && t.x <= VIEWPORT.width - width - 8.0, "x {t:?}");
                assert!(t.y >= 8.0 && t.y <= VIEWPORT.height - 60.0, "y {t:?}");
            }
        }
    }

    #[test]
    fn oversized_window_pins_to_left_padding() {
        let t = clamp_drag_target(Point::new(600.0, 100.0), Point::default(), 1500.0, VIEWPORT);
        assert_eq!(t.x, 8.0);
    }

    #[test]
    fn resize_right_only_changes_width() {
        let s = apply_resize_drag(
            Size::new(400.0, 300.0),
            ResizeEdge::Right,
            Point::new(150.0, 500.0),
            Point::new(100.0, 100.0),
        );
        assert_eq!(s, Size::new(450.0, 300.0));
    }

    #[test]
    fn resize_bottom_only_changes_height() {
        let s = apply_resize_drag(
            Size::new(400.0, 300.0),
            ResizeEdge::Bottom,
            Point::new(900.0, 140.0),
            Point::new(100.0, 100.0),
        );
        assert_eq!(s, Size::new(400.0, 340.0));
    }

    #[test]
    fn resize_never_goes_below_floor() {
        for edge in [ResizeEdge::Right, ResizeEdge::Bottom, ResizeEdge::Corner] {
            let s = apply_resize_drag(
                Size::new(400.0, 300.0),
                edge,
                Point::new(-10_000.0, -10_000.0),
                Point::new(100.0, 100.0),
            );
            assert!(s.width >= MIN_WINDOW_WIDTH);
            assert!(s.height >= MIN_WINDOW_HEIGHT);
        }
        let s = apply_resize_drag(
            Size::new(400.0, 300.0),
            ResizeEdge::Corner,
            Point::new(0.0, 0.0),
            Point::new(1000.0, 1000.0),
        );
        assert_eq!(s, Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));
    }

    #[test]
    fn resize_growth_is_unbounded() {
        let s = apply_resize_drag(
            Size::new(400.0, 300.0),
            ResizeEdge::Corner,
            Point::new(50_000.0, 40_000.0),
            Point::new(0.0, 0.0),
        );
        assert_eq!(s, Size::new(50_400.0, 40_300.0));
    }

    #[test]
    fn corner_handle_sits_bottom_right_and_comes_first() {
        let rect = PanelRect::new(100.0, 100.0, 400.0, 300.0);
        let handles = resize_handles_for_window(rect);
        assert_eq!(handles[0].edge, ResizeEdge::Corner);
        assert!(handles[0].rect.contains(Point::new(499.0, 399.0)));
        assert!(handles[1].rect.contains(Point::new(495.0, 150.0)));
        assert!(handles[2].rect.contains(Point::new(200.0, 395.0)));
        assert!(!handles[1].rect.contains(Point::new(300.0, 150.0)));
    }

    #[test]
    fn chrome_regions_stack_under_each_other() {
        use crate::document::{DocumentBuilder, WindowSpec};

        let doc = DocumentBuilder::new(VIEWPORT)
            .window(WindowSpec::new("tabs", "Tabs").tab("a", "Alpha", "").tab("b", "B", ""))
            .window(WindowSpec::new("bare", "Bare").without_drag_handle())
            .build()
            .expect("document");

        let tabs = WindowChrome::for_window(doc.window("tabs").expect("window"));
        let bar = tabs.title_bar.expect("title bar");
        assert_eq!(bar.height, TITLE_BAR_HEIGHT);
        assert!(bar.contains(tabs.close_box.expect("close box").origin()));
        assert_eq!(tabs.tab_strip.expect("strip").top, TITLE_BAR_HEIGHT);
        assert_eq!(tabs.tab_buttons.len(), 2);
        assert_eq!(tabs.tab_buttons[0].width, 7.0 * TAB_GLYPH_WIDTH);
        assert_eq!(tabs.tab_buttons[1].left, 7.0 * TAB_GLYPH_WIDTH);
        assert_eq!(tabs.content.top, TITLE_BAR_HEIGHT + TAB_STRIP_HEIGHT);
        assert!(tabs.resize_handles.is_none());

        let bare = WindowChrome::for_window(doc.window("bare").expect("window"));
        assert!(bare.title_bar.is_none());
        assert!(bare.close_box.is_none());
        assert!(bare.tab_strip.is_none());
        assert_eq!(bare.content, doc.window("bare").expect("window").rect());
    }
}
