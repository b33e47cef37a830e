use ratatui::style::{Modifier, Style};

use crate::document::{Transition, WindowElement};
use crate::layout::WindowChrome;
use crate::theme::Palette;
use crate::ui::{CellMetrics, Canvas, wrap_lines};

pub trait WindowDecorator: std::fmt::Debug {
    fn render_window(
        &self,
        canvas: &mut Canvas<'_>,
        window: &WindowElement,
        metrics: CellMetrics,
        palette: &Palette,
        focused: bool,
    );
}

/// Title bar on the first row, tab strip under it, bordered body below and
/// a grip glyph on the resize corner.
#[derive(Debug, Default)]
pub struct PanelDecorator;

impl WindowDecorator for PanelDecorator {
    fn render_window(
        &self,
        canvas: &mut Canvas<'_>,
        window: &WindowElement,
        metrics: CellMetrics,
        palette: &Palette,
        focused: bool,
    ) {
        let width = canvas.width();
        let height = canvas.height();
        let rect = window.rect();
        let chrome = WindowChrome::for_window(window);
        let local_row = |px: f64| (metrics.rows(px - rect.top).clamp(0, i32::from(height))) as u16;
        let local_col = |px: f64| (metrics.cols(px - rect.left).clamp(0, i32::from(width))) as u16;

        let body_style = Style::default().bg(palette.window_bg).fg(palette.window_fg);
        let border_style = match window.transition() {
            Some(Transition::Opening) => body_style.fg(palette.accent),
            _ => body_style.fg(palette.border),
        };

        for y in canvas.visible_rows() {
            for x in canvas.visible_cols() {
                canvas.set(x, y, " ", body_style);
            }
        }

        if let Some(bar) = chrome.title_bar {
            let header_style = Style::default()
                .bg(if focused {
                    palette.focused_header_bg
                } else {
                    palette.header_bg
                })
                .fg(palette.header_fg)
                .add_modifier(if focused {
                    Modifier::BOLD
                } else {
                    Modifier::empty()
                });
            let rows = local_row(bar.top)..local_row(bar.bottom()).max(1).min(height);
            for y in rows.clone() {
                for x in 0..width {
                    canvas.set(x, y, " ", header_style);
                }
            }
            let y = rows.start;
            let close_col = chrome
                .close_box
                .map_or(width, |close| local_col(close.left));
            let title_room = close_col.saturating_sub(2);
            let title_len = window.title().chars().count() as u16;
            let start = if title_len <= title_room {
                1 + (title_room - title_len) / 2
            } else {
                1
            };
            canvas.set_str(start, y, window.title(), title_room, header_style);
            if close_col < width {
                canvas.set_str(close_col, y, "[x]", width - close_col, header_style);
            }
        }

        if let Some(strip) = chrome.tab_strip {
            let y = local_row(strip.top);
            for (button, area) in window.tab_buttons().iter().zip(&chrome.tab_buttons) {
                let style = if button.is_active() {
                    Style::default()
                        .bg(palette.tab_active_bg)
                        .fg(palette.tab_active_fg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    body_style.fg(palette.tab_fg)
                };
                let x = local_col(area.left);
                let cells = local_col(area.right()).saturating_sub(x);
                let label = format!(" {} ", button.label());
                canvas.set_str(x, y, &label, cells, style);
            }
        }

        // Body frame: side borders down to a bottom rule.
        let content_top = local_row(chrome.content.top);
        let bottom = height.saturating_sub(1);
        if width >= 2 && content_top < bottom {
            let right = width - 1;
            for y in content_top..bottom {
                canvas.set(0, y, "│", border_style);
                canvas.set(right, y, "│", border_style);
            }
            canvas.set(0, bottom, "└", border_style);
            for x in 1..right {
                canvas.set(x, bottom, "─", border_style);
            }
            let corner = if window.has_resize_handles() { "◢" } else { "┘" };
            canvas.set(right, bottom, corner, border_style);

            let inner = usize::from(width - 2);
            let offset = metrics.rows(window.scroll_top()).max(0) as usize;
            let text = window.visible_content().unwrap_or_default();
            for (row, line) in wrap_lines(text, inner)
                .iter()
                .skip(offset)
                .take(usize::from(bottom - content_top))
                .enumerate()
            {
                canvas.set_str(1, content_top + row as u16, line, width - 2, body_style);
            }
        }

        if window.transition() == Some(Transition::Closing) {
            canvas.add_modifier(Modifier::DIM);
        }
    }
}

/// Scroll range, in pixels, for a window's visible content at its current
/// size.
pub fn max_scroll(window: &WindowElement, metrics: CellMetrics) -> f64 {
    let chrome = WindowChrome::for_window(window);
    let cols = metrics.cols(window.rect().width) - 2;
    let rows = metrics.rows(chrome.content.height) - 1;
    if cols <= 0 || rows <= 0 {
        return 0.0;
    }
    let lines = wrap_lines(window.visible_content().unwrap_or_default(), cols as usize).len();
    let overflow = (lines as i32 - rows).max(0);
    f64::from(overflow) * metrics.cell_height
}
