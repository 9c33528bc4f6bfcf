//! Per-frame input drain.
//!
//! Each frame the driver empties the terminal's event queue without blocking.
//! Mapped events keep their arrival order. The buffer is stack-only; if a
//! frame receives more than [`MAX_EVENTS_PER_FRAME`] key presses the rest stay
//! queued for the next frame.

use std::time::Duration;

use anyhow::Result;
use arrayvec::ArrayVec;
use crossterm::event::{self, Event};

use crate::map::map_key_event;
use crate::types::InputEvent;

pub const MAX_EVENTS_PER_FRAME: usize = 32;

/// One frame's worth of mapped input.
pub type FrameInput = ArrayVec<InputEvent, MAX_EVENTS_PER_FRAME>;

/// Non-blocking source of terminal events.
pub trait EventSource {
    /// True if `read` would return without blocking.
    fn poll_ready(&mut self) -> Result<bool>;

    fn read(&mut self) -> Result<Event>;
}

/// The real terminal event queue.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn poll_ready(&mut self) -> Result<bool> {
        Ok(event::poll(Duration::ZERO)?)
    }

    fn read(&mut self) -> Result<Event> {
        Ok(event::read()?)
    }
}

/// Side information gathered while draining.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DrainReport {
    /// The terminal was resized since the last frame.
    pub resized: bool,
    /// Raw events read from the source (mapped or not).
    pub read: usize,
}

/// Append every pending event to `out`, in arrival order.
///
/// Stops early once a quit is seen or `out` is full.
pub fn drain_events<S: EventSource>(source: &mut S, out: &mut FrameInput) -> Result<DrainReport> {
    let mut report = DrainReport::default();

    while !out.is_full() && source.poll_ready()? {
        let ev = source.read()?;
        report.read += 1;
        match ev {
            Event::Key(key) => {
                if let Some(mapped) = map_key_event(key) {
                    out.push(mapped);
                    if mapped == InputEvent::Quit {
                        break;
                    }
                }
            }
            Event::Resize(_, _) => report.resized = true,
            _ => {}
        }
    }

    Ok(report)
}
