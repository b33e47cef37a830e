//! Tab switching inside a single window.

use crate::document::Document;

/// Position of the clicked button among its window's tab buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabButtonRef(pub usize);

/// Activate `clicked` and the panel keyed `tab_name`, deactivating every
/// other button and panel of the same window. Unknown windows are ignored.
/// When no panel matches, the button still lights up and every panel stays
/// hidden. A button index past the window's buttons changes nothing.
pub fn switch_tab(doc: &mut Document, window_id: &str, tab_name: &str, clicked: TabButtonRef) {
    let Some(window) = doc.window_mut(window_id) else {
        tracing::debug!(window_id, "tab switch ignored: no such window");
        return;
    };
    let (buttons, panels) = window.tabs_mut();
    if clicked.0 >= buttons.len() {
        tracing::debug!(window_id, button = clicked.0, "tab switch ignored: no such button");
        return;
    }
    for button in buttons.iter_mut() {
        button.set_active(false);
    }
    for panel in panels.iter_mut() {
        panel.set_active(false);
    }
    buttons[clicked.0].set_active(true);
    match panels.iter_mut().find(|p| p.tab() == tab_name) {
        Some(panel) => {
            panel.set_active(true);
            tracing::debug!(window_id, tab = tab_name, "tab switched");
        }
        None => {
            tracing::warn!(window_id, tab = tab_name, "no tab panel matches the clicked button");
        }
    }
}

/// Switch to the button at `index`, using the tab key it carries.
pub fn activate_button(doc: &mut Document, window_id: &str, index: usize) -> bool {
    let Some(tab) = doc
        .window(window_id)
        .and_then(|w| w.tab_buttons().get(index))
        .map(|b| b.tab().to_string())
    else {
        return false;
    };
    switch_tab(doc, window_id, &tab, TabButtonRef(index));
    true
}

/// Move to the next (or previous) tab of a window, wrapping around.
/// Returns the tab key now active.
pub fn cycle_tab(doc: &mut Document, window_id: &str, forward: bool) -> Option<String> {
    let window = doc.window(window_id)?;
    let count = window.tab_buttons().len();
    if count == 0 {
        return None;
    }
    let current = window
        .tab_buttons()
        .iter()
        .position(|b| b.is_active())
        .unwrap_or(0);
    let next = if forward {
        (current + 1) % count
    } else {
        (current + count - 1) % count
    };
    let tab = window.tab_buttons()[next].tab().to_string();
    switch_tab(doc, window_id, &tab, TabButtonRef(next));
    Some(tab)
}
