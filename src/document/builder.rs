use std::collections::BTreeSet;

use super::{ClassList, Document, Overlay, TabButton, TabPanel, WindowElement};
use crate::error::{Result, WmError};
use crate::theme::Theme;
use crate::window::{PanelRect, Size};

/// Declaration of one window, the equivalent of its markup.
#[derive(Debug, Clone)]
pub struct WindowSpec {
    id: String,
    title: String,
    size: Size,
    body: String,
    tabs: Vec<(String, String, String)>,
    drag_handle: bool,
}

impl WindowSpec {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            size: Size::new(400.0, 300.0),
            body: String::new(),
            tabs: Vec::new(),
            drag_handle: true,
        }
    }

    /// Natural size the window renders at until it is resized.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.size = Size::new(width, height);
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Add a tab button and its content panel, both keyed by `tab`.
    pub fn tab(
        mut self,
        tab: impl Into<String>,
        label: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        self.tabs.push((tab.into(), label.into(), body.into()));
        self
    }

    /// Declare the window without a title bar; it can then never be dragged.
    pub fn without_drag_handle(mut self) -> Self {
        self.drag_handle = false;
        self
    }
}

#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    title: String,
    viewport: Size,
    theme: Theme,
    theme_label: bool,
    windows: Vec<WindowSpec>,
    launcher: Option<Vec<String>>,
}

impl DocumentBuilder {
    pub fn new(viewport: Size) -> Self {
        Self {
            title: String::new(),
            viewport,
            theme: Theme::default(),
            theme_label: false,
            windows: Vec::new(),
            launcher: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Include the theme toggle label element.
    pub fn theme_label(mut self) -> Self {
        self.theme_label = true;
        self
    }

    pub fn window(mut self, spec: WindowSpec) -> Self {
        self.windows.push(spec);
        self
    }

    /// Explicit launcher entries. Defaults to every window in declaration
    /// order.
    pub fn launcher<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.launcher = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn build(self) -> Result<Document> {
        let mut seen = BTreeSet::new();
        let mut windows = Vec::with_capacity(self.windows.len());
        for spec in self.windows {
            if spec.id.is_empty() {
                return Err(WmError::EmptyWindowId);
            }
            if !seen.insert(spec.id.clone()) {
                return Err(WmError::DuplicateWindow(spec.id));
            }
            windows.push(build_window(spec)?);
        }

        let launcher = match self.launcher {
            Some(ids) => {
                if let Some(unknown) = ids.iter().find(|id| !seen.contains(*id)) {
                    return Err(WmError::UnknownLauncherEntry(unknown.clone()));
                }
                ids
            }
            None => windows.iter().map(|w| w.id.clone()).collect(),
        };

        let mut root_classes = ClassList::new();
        root_classes.add(self.theme.class());

        Ok(Document {
            title: self.title,
            viewport: self.viewport,
            windows,
            overlay: Overlay::default(),
            root_classes,
            theme_label: self
                .theme_label
                .then(|| self.theme.toggle_label().to_string()),
            launcher,
            user_select_suppressed: false,
        })
    }
}

fn build_window(spec: WindowSpec) -> Result<WindowElement> {
    let mut tab_keys = BTreeSet::new();
    let mut tab_buttons = Vec::with_capacity(spec.tabs.len());
    let mut tab_panels = Vec::with_capacity(spec.tabs.len());
    for (idx, (tab, label, body)) in spec.tabs.into_iter().enumerate() {
        if !tab_keys.insert(tab.clone()) {
            return Err(WmError::DuplicateTab {
                window: spec.id,
                tab,
            });
        }
        // First tab starts active, as markup usually ships it.
        let active = idx == 0;
        tab_buttons.push(TabButton {
            tab: tab.clone(),
            label,
            active,
        });
        tab_panels.push(TabPanel { tab, body, active });
    }

    Ok(WindowElement {
        id: spec.id,
        title: spec.title,
        rect: PanelRect::new(0.0, 0.0, spec.size.width, spec.size.height),
        displayed: false,
        z_index: None,
        scroll_top: 0.0,
        transition: None,
        drag_handle: spec.drag_handle,
        resize_handles: false,
        tab_buttons,
        tab_panels,
        body: spec.body,
    })
}
