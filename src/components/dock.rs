use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::document::Document;
use crate::theme::Palette;
use crate::ui::{UiFrame, safe_set_string};

/// What a click on the dock asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DockAction {
    Open(String),
    ToggleTheme,
}

#[derive(Debug, Clone)]
struct DockSlot {
    label: String,
    action: DockAction,
    x: u16,
    width: u16,
    highlighted: bool,
}

/// Bottom bar: launcher entries on the left, the theme toggle label on the
/// right. Entries are numbered so `1`-`9` can open them from the keyboard.
#[derive(Debug, Clone, Default)]
pub struct Dock {
    area: Rect,
    slots: Vec<DockSlot>,
}

impl Dock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the slots from the document for a dock drawn in `area`.
    pub fn sync(&mut self, doc: &Document, area: Rect) {
        self.area = area;
        self.slots.clear();
        let right_edge = area.x.saturating_add(area.width);

        let mut theme_slot = None;
        if let Some(label) = doc.theme_label() {
            let label = format!("[{label}]");
            let width = label.chars().count() as u16;
            if width < area.width {
                theme_slot = Some(DockSlot {
                    label,
                    action: DockAction::ToggleTheme,
                    x: right_edge.saturating_sub(width + 1),
                    width,
                    highlighted: false,
                });
            }
        }
        let limit = theme_slot.as_ref().map_or(right_edge, |slot| slot.x);

        let mut x = area.x.saturating_add(1);
        for (idx, id) in doc.launcher().iter().enumerate() {
            let Some(window) = doc.window(id) else {
                continue;
            };
            let label = if idx < 9 {
                format!("[{} {}]", idx + 1, window.title())
            } else {
                format!("[{}]", window.title())
            };
            let width = label.chars().count() as u16;
            if x.saturating_add(width) > limit {
                break;
            }
            self.slots.push(DockSlot {
                label,
                action: DockAction::Open(id.clone()),
                x,
                width,
                highlighted: window.is_displayed(),
            });
            x = x.saturating_add(width + 1);
        }
        self.slots.extend(theme_slot);
    }

    /// Action under a cell, if any.
    pub fn hit(&self, col: u16, row: u16) -> Option<DockAction> {
        if row < self.area.y || row >= self.area.y.saturating_add(self.area.height) {
            return None;
        }
        self.slots
            .iter()
            .find(|slot| col >= slot.x && col < slot.x.saturating_add(slot.width))
            .map(|slot| slot.action.clone())
    }

    /// Window id behind the `n`-th (1-based) launcher entry.
    pub fn launcher_entry(doc: &Document, n: usize) -> Option<&str> {
        n.checked_sub(1)
            .and_then(|idx| doc.launcher().get(idx))
            .map(String::as_str)
    }
}

impl super::Component for Dock {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, palette: &Palette) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let base = Style::default().bg(palette.dock_bg).fg(palette.dock_fg);
        let buffer = frame.buffer_mut();
        let bounds = area.intersection(buffer.area);
        if bounds.width == 0 || bounds.height == 0 {
            return;
        }
        for x in bounds.x..bounds.x.saturating_add(bounds.width) {
            if let Some(cell) = buffer.cell_mut((x, bounds.y)) {
                cell.set_symbol(" ");
                cell.set_style(base);
            }
        }
        for slot in &self.slots {
            let style = match slot.action {
                DockAction::ToggleTheme => base.fg(palette.accent).add_modifier(Modifier::BOLD),
                DockAction::Open(_) if slot.highlighted => base.add_modifier(Modifier::BOLD),
                DockAction::Open(_) => base,
            };
            safe_set_string(buffer, bounds, slot.x, bounds.y, &slot.label, style);
        }
    }
}
