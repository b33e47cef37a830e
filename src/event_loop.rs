use std::io;
use std::time::{Duration, Instant};

use crossterm::event::Event;

use crate::drivers::InputDriver;

/// Interval for a target frame rate; zero is treated as one frame per
/// second.
pub fn frame_interval(fps: u32) -> Duration {
    Duration::from_secs(1) / fps.max(1)
}

pub enum ControlFlow {
    Continue,
    Quit,
}

/// A centralized event loop that drives the main UI thread.
///
/// It owns the input driver and alternates between two kinds of work:
/// frames, delivered to the handler as `None` once per frame interval, and
/// input events, delivered as `Some(event)`. While waiting for the next
/// frame it blocks on the driver, so an idle desktop costs nothing beyond
/// the frame ticks themselves.
pub struct EventLoop<D> {
    driver: D,
    frame_interval: Duration,
}

impl<D: InputDriver> EventLoop<D> {
    pub fn new(driver: D, frame_interval: Duration) -> Self {
        Self {
            driver,
            frame_interval,
        }
    }

    pub fn driver(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Runs the loop on the current thread until the handler quits.
    ///
    /// A frame is delivered first, then again each time the interval
    /// elapses. Between frames every queued event is drained before the
    /// loop waits again, so bursts of mouse drags never fall behind the
    /// frame clock.
    pub fn run<F>(&mut self, mut handler: F) -> io::Result<()>
    where
        F: FnMut(&mut D, Option<Event>) -> io::Result<ControlFlow>,
    {
        let mut next_frame = Instant::now();
        loop {
            let now = Instant::now();
            if now >= next_frame {
                if let ControlFlow::Quit = handler(&mut self.driver, None)? {
                    break;
                }
                next_frame = now + self.frame_interval;
            }

            let timeout = next_frame.saturating_duration_since(Instant::now());
            if self.driver.poll(timeout)? {
                loop {
                    let event = self.driver.read()?;
                    if let ControlFlow::Quit = handler(&mut self.driver, Some(event))? {
                        return Ok(());
                    }
                    if !self.driver.poll(Duration::from_millis(0))? {
                        break;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::collections::VecDeque;

    struct Scripted {
        events: VecDeque<Event>,
    }

    impl InputDriver for Scripted {
        fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
            Ok(!self.events.is_empty())
        }

        fn read(&mut self) -> io::Result<Event> {
            self.events
                .pop_front()
                .ok_or_else(|| io::Error::other("no scripted event"))
        }
    }

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[test]
    fn frame_comes_first_then_events_drain() {
        let driver = Scripted {
            events: VecDeque::from([key('a'), key('b'), key('q')]),
        };
        let mut lp = EventLoop::new(driver, Duration::from_secs(60));
        let mut seen = Vec::new();
        lp.run(|_, event| {
            let label = match &event {
                None => "frame".to_string(),
                Some(Event::Key(k)) => format!("{:?}", k.code),
                Some(_) => "other".to_string(),
            };
            seen.push(label);
            Ok(match event {
                Some(Event::Key(k)) if k.code == KeyCode::Char('q') => ControlFlow::Quit,
                _ => ControlFlow::Continue,
            })
        })
        .expect("run");
        assert_eq!(seen, vec!["frame", "Char('a')", "Char('b')", "Char('q')"]);
    }

    #[test]
    fn frames_repeat_without_input() {
        let driver = Scripted {
            events: VecDeque::new(),
        };
        let mut lp = EventLoop::new(driver, Duration::from_millis(1));
        let mut frames = 0;
        lp.run(|_, event| {
            assert!(event.is_none());
            frames += 1;
            Ok(if frames == 3 {
                ControlFlow::Quit
            } else {
                ControlFlow::Continue
            })
        })
        .expect("run");
        assert_eq!(frames, 3);
    }

    #[test]
    fn fps_maps_to_interval() {
        assert_eq!(frame_interval(50), Duration::from_millis(20));
        assert_eq!(frame_interval(0), Duration::from_secs(1));
    }
}
