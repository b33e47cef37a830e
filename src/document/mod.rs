//! In-memory page model the window manager operates on.
//!
//! A [`Document`] plays the part of the page markup: it owns the windows,
//! the shared overlay, the root class list, the theme toggle label and the
//! launcher entries. Windows are declared once through [`DocumentBuilder`];
//! afterwards only their visibility, geometry, stacking rank, scroll offset
//! and transient transition change.

mod builder;

pub use builder::{DocumentBuilder, WindowSpec};

use std::collections::BTreeSet;

use crate::window::{PanelRect, Size};

/// Ordered set of class names, mirroring an element's class attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(BTreeSet<String>);

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, class: &str) -> bool {
        self.0.contains(class)
    }

    pub fn add(&mut self, class: &str) {
        self.0.insert(class.to_string());
    }

    pub fn remove(&mut self, class: &str) -> bool {
        self.0.remove(class)
    }

    /// Flip `class` and return whether it is present afterwards.
    pub fn toggle(&mut self, class: &str) -> bool {
        if self.0.remove(class) {
            false
        } else {
            self.0.insert(class.to_string());
            true
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Short-lived visual state played around open and close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Opening,
    Closing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabButton {
    tab: String,
    label: String,
    active: bool,
}

impl TabButton {
    pub fn tab(&self) -> &str {
        &self.tab
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabPanel {
    tab: String,
    body: String,
    active: bool,
}

impl TabPanel {
    pub fn tab(&self) -> &str {
        &self.tab
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

#[derive(Debug, Clone)]
pub struct WindowElement {
    id: String,
    title: String,
    rect: PanelRect,
    displayed: bool,
    z_index: Option<u32>,
    scroll_top: f64,
    transition: Option<Transition>,
    drag_handle: bool,
    resize_handles: bool,
    tab_buttons: Vec<TabButton>,
    tab_panels: Vec<TabPanel>,
    body: String,
}

impl WindowElement {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn rect(&self) -> PanelRect {
        self.rect
    }

    pub fn is_displayed(&self) -> bool {
        self.displayed
    }

    /// Stacking rank, `None` until the window is first promoted.
    pub fn z_index(&self) -> Option<u32> {
        self.z_index
    }

    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    pub fn transition(&self) -> Option<Transition> {
        self.transition
    }

    pub fn has_drag_handle(&self) -> bool {
        self.drag_handle
    }

    pub fn has_resize_handles(&self) -> bool {
        self.resize_handles
    }

    pub fn tab_buttons(&self) -> &[TabButton] {
        &self.tab_buttons
    }

    pub fn tab_panels(&self) -> &[TabPanel] {
        &self.tab_panels
    }

    /// Text shown when the window has no tabs.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Body of the active tab panel, or the plain body for untabbed windows.
    /// Returns `None` when tabs exist but none is active.
    pub fn visible_content(&self) -> Option<&str> {
        if self.tab_panels.is_empty() {
            return Some(&self.body);
        }
        self.tab_panels
            .iter()
            .find(|panel| panel.active)
            .map(TabPanel::body)
    }

    pub(crate) fn set_rect(&mut self, rect: PanelRect) {
        self.rect = rect;
    }

    pub(crate) fn set_displayed(&mut self, displayed: bool) {
        self.displayed = displayed;
    }

    pub(crate) fn set_z_index(&mut self, z: u32) {
        self.z_index = Some(z);
    }

    pub(crate) fn set_scroll_top(&mut self, scroll_top: f64) {
        self.scroll_top = scroll_top;
    }

    pub(crate) fn set_transition(&mut self, transition: Option<Transition>) {
        self.transition = transition;
    }

    pub(crate) fn install_resize_handles(&mut self) {
        self.resize_handles = true;
    }

    pub(crate) fn tabs_mut(&mut self) -> (&mut [TabButton], &mut [TabPanel]) {
        (self.tab_buttons.as_mut_slice(), self.tab_panels.as_mut_slice())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overlay {
    active: bool,
}

impl Overlay {
    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    title: String,
    viewport: Size,
    windows: Vec<WindowElement>,
    overlay: Overlay,
    root_classes: ClassList,
    theme_label: Option<String>,
    launcher: Vec<String>,
    user_select_suppressed: bool,
}

impl Document {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Windows in declaration order.
    pub fn windows(&self) -> &[WindowElement] {
        &self.windows
    }

    pub fn window(&self, id: &str) -> Option<&WindowElement> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub(crate) fn window_mut(&mut self, id: &str) -> Option<&mut WindowElement> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    pub(crate) fn windows_mut(&mut self) -> impl Iterator<Item = &mut WindowElement> {
        self.windows.iter_mut()
    }

    /// Displayed windows sorted bottom to top. Never-promoted windows sort
    /// first, ties keep declaration order.
    pub fn stacking_order(&self) -> Vec<&WindowElement> {
        let mut shown: Vec<&WindowElement> = self.windows.iter().filter(|w| w.displayed).collect();
        shown.sort_by_key(|w| w.z_index);
        shown
    }

    pub fn any_displayed(&self) -> bool {
        self.windows.iter().any(|w| w.displayed)
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    pub(crate) fn set_overlay_active(&mut self, active: bool) {
        self.overlay.active = active;
    }

    pub fn root_classes(&self) -> &ClassList {
        &self.root_classes
    }

    pub(crate) fn root_classes_mut(&mut self) -> &mut ClassList {
        &mut self.root_classes
    }

    pub fn theme_label(&self) -> Option<&str> {
        self.theme_label.as_deref()
    }

    pub(crate) fn theme_label_mut(&mut self) -> Option<&mut String> {
        self.theme_label.as_mut()
    }

    /// Window ids offered by the launcher dock, in dock order.
    pub fn launcher(&self) -> &[String] {
        &self.launcher
    }

    pub fn user_select_suppressed(&self) -> bool {
        self.user_select_suppressed
    }

    pub(crate) fn set_user_select_suppressed(&mut self, suppressed: bool) {
        self.user_select_suppressed = suppressed;
    }
}
