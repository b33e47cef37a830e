//! UiFrame: a thin wrapper around `ratatui::Frame` that clamps drawing to the
//! visible area, plus the pixel/cell mapping used by the terminal host.
//!
//! Window geometry lives in document pixels and may sit partly (or fully)
//! off screen. Everything that turns it into cells goes through
//! [`CellMetrics`] and is written through [`Canvas`], which silently drops
//! cells outside the buffer.
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::document::Document;
use crate::theme::Palette;
use crate::window::decorator::WindowDecorator;
use crate::window::{PanelRect, Point, Size};

/// Wrapper around `ratatui::Frame` that clamps drawing to the visible area.
pub struct UiFrame<'a> {
    area: Rect,
    buffer: &'a mut Buffer,
}

impl<'a> UiFrame<'a> {
    pub fn new(frame: &'a mut Frame<'_>) -> Self {
        let area = frame.area();
        let buffer = frame.buffer_mut();
        Self { area, buffer }
    }

    /// Construct a `UiFrame` directly from an area and buffer, for drawing
    /// into a detached `Buffer`.
    pub fn from_parts(area: Rect, buffer: &'a mut Buffer) -> Self {
        Self { area, buffer }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn buffer_mut(&mut self) -> &mut Buffer {
        self.buffer
    }

    /// A canvas for `placement`, clipped to both `bounds` and the frame.
    pub fn canvas(&mut self, bounds: Rect, placement: CellRect) -> Canvas<'_> {
        let bounds = bounds.intersection(self.area);
        Canvas {
            buffer: self.buffer,
            bounds,
            placement,
        }
    }
}

/// A window's placement in cells. The origin is signed because windows can
/// be dragged or restored partly off screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellRect {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl CellRect {
    pub fn offset(self, dx: u16, dy: u16) -> Self {
        Self {
            x: self.x + i32::from(dx),
            y: self.y + i32::from(dy),
            ..self
        }
    }

    /// Whether the column/row lies inside, in absolute coordinates.
    pub fn contains(&self, col: u16, row: u16) -> bool {
        let (col, row) = (i32::from(col), i32::from(row));
        col >= self.x
            && row >= self.y
            && col < self.x + i32::from(self.width)
            && row < self.y + i32::from(self.height)
    }
}

/// Local drawing surface for one placed element. Coordinates passed to it
/// are relative to the placement origin; anything outside the bounds is
/// dropped.
pub struct Canvas<'a> {
    buffer: &'a mut Buffer,
    bounds: Rect,
    placement: CellRect,
}

impl Canvas<'_> {
    pub fn width(&self) -> u16 {
        self.placement.width
    }

    pub fn height(&self) -> u16 {
        self.placement.height
    }

    /// Local rows that land inside the bounds.
    pub fn visible_rows(&self) -> std::ops::Range<u16> {
        visible_span(
            self.placement.y,
            self.placement.height,
            self.bounds.y,
            self.bounds.height,
        )
    }

    /// Local columns that land inside the bounds.
    pub fn visible_cols(&self) -> std::ops::Range<u16> {
        visible_span(
            self.placement.x,
            self.placement.width,
            self.bounds.x,
            self.bounds.width,
        )
    }

    fn absolute(&self, x: u16, y: u16) -> Option<(u16, u16)> {
        if x >= self.placement.width || y >= self.placement.height {
            return None;
        }
        let ax = self.placement.x + i32::from(x);
        let ay = self.placement.y + i32::from(y);
        let inside = ax >= i32::from(self.bounds.x)
            && ay >= i32::from(self.bounds.y)
            && ax < i32::from(self.bounds.x) + i32::from(self.bounds.width)
            && ay < i32::from(self.bounds.y) + i32::from(self.bounds.height);
        if !inside {
            return None;
        }
        Some((u16::try_from(ax).ok()?, u16::try_from(ay).ok()?))
    }

    pub fn set(&mut self, x: u16, y: u16, symbol: &str, style: Style) {
        if let Some(pos) = self.absolute(x, y)
            && let Some(cell) = self.buffer.cell_mut(pos)
        {
            cell.set_symbol(symbol);
            cell.set_style(style);
        }
    }

    /// Write `text` starting at `(x, y)`, one char per cell, stopping at the
    /// placement's right edge or after `max_width` cells.
    pub fn set_str(&mut self, x: u16, y: u16, text: &str, max_width: u16, style: Style) {
        let mut buf = [0u8; 4];
        for (idx, ch) in text.chars().take(max_width as usize).enumerate() {
            let Some(cx) = x.checked_add(idx as u16) else {
                break;
            };
            self.set(cx, y, ch.encode_utf8(&mut buf), style);
        }
    }

    /// Add a modifier to every visible cell, keeping symbols and colors.
    pub fn add_modifier(&mut self, modifier: Modifier) {
        for y in self.visible_rows() {
            for x in self.visible_cols() {
                if let Some(pos) = self.absolute(x, y)
                    && let Some(cell) = self.buffer.cell_mut(pos)
                {
                    let style = cell.style().add_modifier(modifier);
                    cell.set_style(style);
                }
            }
        }
    }
}

fn visible_span(origin: i32, len: u16, bound_start: u16, bound_len: u16) -> std::ops::Range<u16> {
    let start = (i32::from(bound_start) - origin).clamp(0, i32::from(len));
    let end = (i32::from(bound_start) + i32::from(bound_len) - origin).clamp(start, i32::from(len));
    // Both ends are clamped into 0..=len, so they fit in u16.
    (start as u16)..(end as u16)
}

/// Pixel size of one terminal cell. Pointer cells map to their center pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    pub cell_width: f64,
    pub cell_height: f64,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            cell_width: 8.0,
            cell_height: 16.0,
        }
    }
}

impl CellMetrics {
    pub fn new(cell_width: f64, cell_height: f64) -> Self {
        Self {
            cell_width,
            cell_height,
        }
    }

    pub fn to_px(&self, col: u16, row: u16) -> Point {
        Point::new(
            (f64::from(col) + 0.5) * self.cell_width,
            (f64::from(row) + 0.5) * self.cell_height,
        )
    }

    pub fn viewport_for(&self, cols: u16, rows: u16) -> Size {
        Size::new(
            f64::from(cols) * self.cell_width,
            f64::from(rows) * self.cell_height,
        )
    }

    pub fn cols(&self, px: f64) -> i32 {
        to_cells(px, self.cell_width)
    }

    pub fn rows(&self, px: f64) -> i32 {
        to_cells(px, self.cell_height)
    }

    /// Cell placement of a pixel rect. Edges are rounded independently so
    /// adjacent rects never overlap or leave gaps.
    pub fn rect_to_cells(&self, rect: PanelRect) -> CellRect {
        let x = self.cols(rect.left);
        let y = self.rows(rect.top);
        let right = self.cols(rect.right());
        let bottom = self.rows(rect.bottom());
        CellRect {
            x,
            y,
            width: (right - x).clamp(0, i32::from(u16::MAX)) as u16,
            height: (bottom - y).clamp(0, i32::from(u16::MAX)) as u16,
        }
    }
}

fn to_cells(px: f64, cell: f64) -> i32 {
    let cells = (px / cell).round();
    if cells.is_nan() {
        0
    } else {
        cells.clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
    }
}

/// Paint the desktop: background (dimmed while the overlay is active), the
/// document title, then every displayed window bottom to top.
pub fn render_desktop(
    frame: &mut UiFrame<'_>,
    area: Rect,
    doc: &Document,
    metrics: CellMetrics,
    decorator: &dyn WindowDecorator,
) {
    let palette = Palette::for_classes(doc.root_classes());
    let overlay = doc.overlay().is_active();
    let (symbol, style) = if overlay {
        ("░", Style::default().fg(palette.overlay_fg).bg(palette.background))
    } else {
        (" ", Style::default().fg(palette.foreground).bg(palette.background))
    };
    let bounds = area.intersection(frame.area());
    {
        let buffer = frame.buffer_mut();
        for y in bounds.y..bounds.y.saturating_add(bounds.height) {
            for x in bounds.x..bounds.x.saturating_add(bounds.width) {
                if let Some(cell) = buffer.cell_mut((x, y)) {
                    cell.set_symbol(symbol);
                    cell.set_style(style);
                }
            }
        }
        let title_style = style.add_modifier(Modifier::BOLD);
        safe_set_string(buffer, bounds, bounds.x.saturating_add(1), bounds.y, doc.title(), title_style);
    }

    let order = doc.stacking_order();
    let topmost = order.last().map(|w| w.id());
    for window in &order {
        let placement = metrics.rect_to_cells(window.rect()).offset(area.x, area.y);
        if placement.width == 0 || placement.height == 0 {
            continue;
        }
        let focused = topmost == Some(window.id());
        let mut canvas = frame.canvas(area, placement);
        decorator.render_window(&mut canvas, window, metrics, &palette, focused);
    }
}

pub(crate) fn safe_set_string(
    buffer: &mut Buffer,
    bounds: Rect,
    x: u16,
    y: u16,
    text: &str,
    style: Style,
) {
    if bounds.width == 0 || bounds.height == 0 {
        return;
    }
    let max_x = bounds.x.saturating_add(bounds.width);
    let max_y = bounds.y.saturating_add(bounds.height);
    if x < bounds.x || x >= max_x || y < bounds.y || y >= max_y {
        return;
    }
    let available = max_x.saturating_sub(x);
    if available == 0 {
        return;
    }
    let text = truncate_to_width(text, available as usize);
    buffer.set_string(x, y, text, style);
}

pub(crate) fn truncate_to_width(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    value.chars().take(width).collect()
}

/// Hard-wrap `text` to `width` columns, keeping explicit line breaks.
pub fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    for raw in text.lines() {
        let chars: Vec<char> = raw.chars().collect();
        if chars.is_empty() {
            lines.push(String::new());
            continue;
        }
        for chunk in chars.chunks(width) {
            lines.push(chunk.iter().collect());
        }
    }
    lines
}
