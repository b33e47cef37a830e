use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::components::{Component, Dock, DockAction};
use crate::desktop::Desktop;
use crate::drivers::InputDriver;
use crate::drivers::console::TerminalSession;
use crate::error::Result;
use crate::event_loop::{ControlFlow, EventLoop};
use crate::layout::{WindowChrome, hit_test};
use crate::theme::Palette;
use crate::ui::{CellMetrics, UiFrame, render_desktop};
use crate::window::decorator::{PanelDecorator, max_scroll};

const WHEEL_LINES: f64 = 3.0;

/// Terminal front end for a [`Desktop`]: maps crossterm input onto desktop
/// operations and paints the desktop plus the dock row below it.
#[derive(Debug)]
pub struct DesktopApp {
    desktop: Desktop,
    metrics: CellMetrics,
    decorator: PanelDecorator,
    dock: Dock,
    area: Rect,
}

impl DesktopApp {
    pub fn new(desktop: Desktop, metrics: CellMetrics) -> Self {
        Self {
            desktop,
            metrics,
            decorator: PanelDecorator,
            dock: Dock::new(),
            area: Rect::default(),
        }
    }

    pub fn desktop(&self) -> &Desktop {
        &self.desktop
    }

    pub fn desktop_mut(&mut self) -> &mut Desktop {
        &mut self.desktop
    }

    pub fn metrics(&self) -> CellMetrics {
        self.metrics
    }

    /// The terminal is `area`; every row but the last belongs to the desktop.
    pub fn resize(&mut self, area: Rect) {
        self.area = area;
        let desktop = self.desktop_area();
        self.desktop
            .set_viewport(self.metrics.viewport_for(desktop.width, desktop.height));
        self.dock.sync(self.desktop.document(), self.dock_area());
        tracing::debug!(cols = area.width, rows = area.height, "terminal resized");
    }

    pub fn desktop_area(&self) -> Rect {
        Rect {
            height: self.area.height.saturating_sub(1),
            ..self.area
        }
    }

    pub fn dock_area(&self) -> Rect {
        Rect {
            y: self.area.y.saturating_add(self.area.height.saturating_sub(1)),
            height: self.area.height.min(1),
            ..self.area
        }
    }

    pub fn frame(&mut self, now: Instant) {
        self.desktop.frame(now);
    }

    pub fn handle_event(&mut self, event: &Event) -> ControlFlow {
        match event {
            Event::Key(key) => return self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(cols, rows) => self.resize(Rect::new(0, 0, *cols, *rows)),
            _ => {}
        }
        ControlFlow::Continue
    }

    fn handle_key(&mut self, key: &KeyEvent) -> ControlFlow {
        let topmost = self.desktop.topmost_open().map(str::to_string);
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return ControlFlow::Quit;
            }
            KeyCode::Char('q') => return ControlFlow::Quit,
            KeyCode::Char(c @ '1'..='9') => {
                let n = c as usize - '0' as usize;
                if let Some(id) = Dock::launcher_entry(self.desktop.document(), n) {
                    let id = id.to_string();
                    self.desktop.open_window(&id);
                }
            }
            KeyCode::Esc | KeyCode::Char('x') => {
                if let Some(id) = topmost {
                    self.desktop.close_window(&id);
                }
            }
            KeyCode::Char('t') => {
                self.desktop.toggle_theme();
            }
            KeyCode::Tab | KeyCode::BackTab => {
                if let Some(id) = topmost {
                    self.desktop.cycle_tab(&id, key.code == KeyCode::Tab);
                }
            }
            KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown => {
                if let Some(id) = topmost {
                    let lines = match key.code {
                        KeyCode::Up => -1.0,
                        KeyCode::Down => 1.0,
                        KeyCode::PageUp => -self.page_lines(&id),
                        _ => self.page_lines(&id),
                    };
                    self.scroll_lines(&id, lines);
                }
            }
            _ => {}
        }
        self.dock.sync(self.desktop.document(), self.dock_area());
        ControlFlow::Continue
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) {
        let p = self.metrics.to_px(
            mouse.column.saturating_sub(self.area.x),
            mouse.row.saturating_sub(self.area.y),
        );
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(action) = self.dock.hit(mouse.column, mouse.row) {
                    match action {
                        DockAction::Open(id) => {
                            self.desktop.open_window(&id);
                        }
                        DockAction::ToggleTheme => {
                            self.desktop.toggle_theme();
                        }
                    }
                } else {
                    self.desktop.pointer_down(p);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => self.desktop.pointer_move(p),
            MouseEventKind::Up(MouseButton::Left) => self.desktop.pointer_up(),
            MouseEventKind::ScrollDown | MouseEventKind::ScrollUp => {
                if let Some(hit) = hit_test(self.desktop.document(), p) {
                    let lines = if mouse.kind == MouseEventKind::ScrollDown {
                        WHEEL_LINES
                    } else {
                        -WHEEL_LINES
                    };
                    self.scroll_lines(&hit.window_id, lines);
                }
            }
            _ => {}
        }
        self.dock.sync(self.desktop.document(), self.dock_area());
    }

    fn page_lines(&self, id: &str) -> f64 {
        self.desktop
            .document()
            .window(id)
            .map(|w| {
                let content = WindowChrome::for_window(w).content;
                f64::from((self.metrics.rows(content.height) - 1).max(1))
            })
            .unwrap_or(1.0)
    }

    fn scroll_lines(&mut self, id: &str, lines: f64) {
        let Some(window) = self.desktop.document().window(id) else {
            return;
        };
        let max = max_scroll(window, self.metrics);
        self.desktop
            .scroll_window(id, lines * self.metrics.cell_height, max);
    }

    pub fn draw(&mut self, frame: &mut UiFrame<'_>) {
        let palette = Palette::for_classes(self.desktop.document().root_classes());
        render_desktop(
            frame,
            self.desktop_area(),
            self.desktop.document(),
            self.metrics,
            &self.decorator,
        );
        let dock_area = self.dock_area();
        self.dock.sync(self.desktop.document(), dock_area);
        self.dock.render(frame, dock_area, &palette);
    }
}

/// Drive `app` until the user quits: one desktop frame per frame interval,
/// input in between. The screen is redrawn only after input or while the
/// desktop is animating.
pub fn run_desktop<D: InputDriver>(
    session: &mut TerminalSession,
    driver: &mut D,
    app: &mut DesktopApp,
    frame_interval: Duration,
) -> Result<()> {
    app.resize(session.area()?);
    let mut event_loop = EventLoop::new(driver, frame_interval);
    event_loop.driver().set_mouse_capture(true)?;
    let mut dirty = true;
    event_loop.run(|_, event| match event {
        None => {
            let animating = app.desktop().is_animating();
            app.frame(Instant::now());
            if dirty || animating {
                session.draw(|mut frame| app.draw(&mut frame))?;
                dirty = false;
            }
            Ok(ControlFlow::Continue)
        }
        Some(evt) => {
            dirty = true;
            Ok(app.handle_event(&evt))
        }
    })?;
    Ok(())
}
