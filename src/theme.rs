use ratatui::style::Color;

use crate::document::{ClassList, Document};

pub const DARK_CLASS: &str = "dark";
pub const LIGHT_CLASS: &str = "light";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn class(self) -> &'static str {
        match self {
            Theme::Light => LIGHT_CLASS,
            Theme::Dark => DARK_CLASS,
        }
    }

    /// Theme implied by a root class list. `dark` wins when both are present.
    pub fn from_classes(classes: &ClassList) -> Self {
        if classes.contains(DARK_CLASS) {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Text the toggle label shows while this theme is active: it names the
    /// theme a click would switch to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "Light",
            Theme::Light => "Dark",
        }
    }
}

/// Flip both theme classes on the document root, then rewrite the toggle
/// label to match.
///
/// The classes are toggled independently, so applying this twice always
/// restores the original class list.
pub fn toggle_theme(doc: &mut Document) -> Theme {
    let root = doc.root_classes_mut();
    root.toggle(DARK_CLASS);
    root.toggle(LIGHT_CLASS);
    let theme = Theme::from_classes(doc.root_classes());
    match doc.theme_label_mut() {
        Some(label) => {
            *label = theme.toggle_label().to_string();
        }
        None => {
            tracing::warn!(?theme, "theme toggled but the document has no toggle label");
        }
    }
    tracing::debug!(?theme, "theme toggled");
    theme
}

/// Terminal colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub overlay_fg: Color,
    pub window_bg: Color,
    pub window_fg: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub focused_header_bg: Color,
    pub border: Color,
    pub accent: Color,
    pub tab_active_bg: Color,
    pub tab_active_fg: Color,
    pub tab_fg: Color,
    pub dock_bg: Color,
    pub dock_fg: Color,
}

// Accent shared by both themes.
pub const ACCENT_RGB: (u8, u8, u8) = (200, 100, 0);

fn rgb(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

impl Palette {
    pub fn light() -> Self {
        Self {
            background: Color::Rgb(236, 236, 232),
            foreground: Color::Rgb(40, 40, 40),
            overlay_fg: Color::Rgb(150, 150, 146),
            window_bg: Color::White,
            window_fg: Color::Black,
            header_bg: Color::Gray,
            header_fg: Color::Black,
            focused_header_bg: Color::Blue,
            border: Color::DarkGray,
            accent: rgb(ACCENT_RGB),
            tab_active_bg: rgb(ACCENT_RGB),
            tab_active_fg: Color::White,
            tab_fg: Color::DarkGray,
            dock_bg: Color::Gray,
            dock_fg: Color::Black,
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(24, 24, 28),
            foreground: Color::Rgb(210, 210, 210),
            overlay_fg: Color::Rgb(90, 90, 96),
            window_bg: Color::Black,
            window_fg: Color::White,
            header_bg: Color::DarkGray,
            header_fg: Color::White,
            focused_header_bg: Color::Blue,
            border: Color::Gray,
            accent: rgb(ACCENT_RGB),
            tab_active_bg: rgb(ACCENT_RGB),
            tab_active_fg: Color::Black,
            tab_fg: Color::Gray,
            dock_bg: Color::DarkGray,
            dock_fg: Color::White,
        }
    }

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::light(),
            Theme::Dark => Self::dark(),
        }
    }

    pub fn for_classes(classes: &ClassList) -> Self {
        Self::for_theme(Theme::from_classes(classes))
    }
}
