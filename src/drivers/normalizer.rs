//! Input cleanup applied before events reach the runner.
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};

#[derive(Debug, Default)]
pub struct EventNormalizer {
    last_drag: Option<(u16, u16)>,
}

impl EventNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `None` for events the runner never needs: key releases and
    /// repeats, and drag reports that repeat the previous cell.
    pub fn normalize(&mut self, evt: Event) -> Option<Event> {
        match evt {
            Event::Key(mut key) => {
                if key.kind != KeyEventKind::Press {
                    return None;
                }
                if key.code == KeyCode::Tab && key.modifiers.contains(KeyModifiers::SHIFT) {
                    key.code = KeyCode::BackTab;
                    key.modifiers.remove(KeyModifiers::SHIFT);
                }
                Some(Event::Key(key))
            }
            Event::Mouse(mouse) => {
                if let MouseEventKind::Drag(_) = mouse.kind {
                    let cell = (mouse.column, mouse.row);
                    if self.last_drag == Some(cell) {
                        return None;
                    }
                    self.last_drag = Some(cell);
                } else {
                    self.last_drag = None;
                }
                Some(Event::Mouse(mouse))
            }
            other => Some(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, MouseButton, MouseEvent};

    fn drag(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Drag(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn tab_with_shift_becomes_backtab() {
        let mut norm = EventNormalizer::new();
        let out = norm
            .normalize(Event::Key(KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT)))
            .expect("should return event");
        let Event::Key(k) = out else {
            panic!("expected key event");
        };
        assert_eq!(k.code, KeyCode::BackTab);
        assert!(!k.modifiers.contains(KeyModifiers::SHIFT));
    }

    #[test]
    fn release_and_repeat_are_dropped() {
        let mut norm = EventNormalizer::new();
        for kind in [KeyEventKind::Release, KeyEventKind::Repeat] {
            let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
            key.kind = kind;
            assert!(norm.normalize(Event::Key(key)).is_none());
        }
    }

    #[test]
    fn repeated_drag_cells_collapse() {
        let mut norm = EventNormalizer::new();
        assert!(norm.normalize(drag(3, 4)).is_some());
        assert!(norm.normalize(drag(3, 4)).is_none());
        assert!(norm.normalize(drag(4, 4)).is_some());
    }

    #[test]
    fn non_key_events_pass_through() {
        let mut norm = EventNormalizer::new();
        assert!(norm.normalize(Event::Resize(10, 20)).is_some());
    }
}
