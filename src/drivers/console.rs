use std::collections::VecDeque;
use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;

use super::InputDriver;
use super::normalizer::EventNormalizer;
use crate::ui::UiFrame;

/// Reads crossterm events, dropping the ones [`EventNormalizer`] filters.
///
/// Filtering happens while polling, so readiness is only reported for
/// events that survive it and [`read`](InputDriver::read) never blocks on a
/// pending event that is then thrown away.
#[derive(Debug, Default)]
pub struct ConsoleDriver {
    normalizer: EventNormalizer,
    event_queue: VecDeque<Event>,
}

impl ConsoleDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move every pending raw event through the normalizer into the queue.
    /// Waits up to `timeout` for the first event only. Returns whether the
    /// queue holds anything.
    fn pump<P, R>(&mut self, timeout: Duration, mut poll: P, mut read: R) -> io::Result<bool>
    where
        P: FnMut(Duration) -> io::Result<bool>,
        R: FnMut() -> io::Result<Event>,
    {
        let mut wait = timeout;
        while poll(wait)? {
            if let Some(normalized) = self.normalizer.normalize(read()?) {
                self.event_queue.push_back(normalized);
            }
            wait = Duration::ZERO;
        }
        Ok(!self.event_queue.is_empty())
    }
}

impl InputDriver for ConsoleDriver {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        if !self.event_queue.is_empty() {
            return Ok(true);
        }
        self.pump(timeout, crossterm::event::poll, crossterm::event::read)
    }

    fn read(&mut self) -> io::Result<Event> {
        loop {
            if let Some(evt) = self.event_queue.pop_front() {
                return Ok(evt);
            }
            let evt = crossterm::event::read()?;
            if let Some(normalized) = self.normalizer.normalize(evt) {
                self.event_queue.push_back(normalized);
            }
        }
    }

    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
        if enabled {
            execute!(io::stdout(), EnableMouseCapture)
        } else {
            execute!(io::stdout(), DisableMouseCapture)
        }
    }
}

/// Owns the terminal while the desktop runs: raw mode, alternate screen and
/// a hidden cursor. Restores everything on [`exit`](Self::exit) or drop.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    entered: bool,
}

impl TerminalSession {
    pub fn new() -> io::Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            entered: false,
        })
    }

    pub fn enter(&mut self) -> io::Result<()> {
        if self.entered {
            return Ok(());
        }
        execute!(self.terminal.backend_mut(), EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        self.terminal.hide_cursor()?;
        self.entered = true;
        Ok(())
    }

    pub fn exit(&mut self) -> io::Result<()> {
        if !self.entered {
            return Ok(());
        }
        terminal::disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        )?;
        self.terminal.show_cursor()?;
        self.entered = false;
        Ok(())
    }

    pub fn area(&self) -> io::Result<Rect> {
        let size = self.terminal.size()?;
        Ok(Rect::new(0, 0, size.width, size.height))
    }

    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(UiFrame<'_>),
    {
        self.terminal
            .draw(move |frame| {
                let wrapper = UiFrame::new(frame);
                f(wrapper);
            })
            .map(|_| ())
            .map_err(|err| io::Error::other(err.to_string()))
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
    use std::cell::RefCell;

    fn key(c: char, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent::new_with_kind(
            KeyCode::Char(c),
            KeyModifiers::NONE,
            kind,
        ))
    }

    fn pump_script(d: &mut ConsoleDriver, script: Vec<Event>) -> bool {
        let pending = RefCell::new(VecDeque::from(script));
        let mut waits = Vec::new();
        let ready = d
            .pump(
                Duration::from_millis(16),
                |timeout| {
                    waits.push(timeout);
                    Ok(!pending.borrow().is_empty())
                },
                || {
                    pending
                        .borrow_mut()
                        .pop_front()
                        .ok_or_else(|| io::Error::other("script exhausted"))
                },
            )
            .expect("pump");
        assert!(waits.iter().skip(1).all(|w| w.is_zero()), "{waits:?}");
        ready
    }

    #[test]
    fn filtered_event_alone_is_not_ready() {
        let mut d = ConsoleDriver::new();
        assert!(!pump_script(&mut d, vec![key('a', KeyEventKind::Release)]));
        assert!(d.event_queue.is_empty());
    }

    #[test]
    fn burst_is_normalized_into_queue() {
        let mut d = ConsoleDriver::new();
        let ready = pump_script(
            &mut d,
            vec![
                key('a', KeyEventKind::Press),
                key('a', KeyEventKind::Release),
                key('b', KeyEventKind::Repeat),
                key('q', KeyEventKind::Press),
            ],
        );
        assert!(ready);
        assert!(d.poll(Duration::ZERO).expect("poll"));
        let first = d.read().expect("read");
        assert!(matches!(first, Event::Key(k) if k.code == KeyCode::Char('a')));
        let second = d.read().expect("read");
        assert!(matches!(second, Event::Key(k) if k.code == KeyCode::Char('q')));
        assert!(d.event_queue.is_empty());
    }
}
