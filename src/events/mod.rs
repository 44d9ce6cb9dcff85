//! Event handling for the application.
//!
//! This module converts terminal input into application events. Everything
//! is synchronous: events are polled on the main thread and each one runs
//! to completion before the next is read.

mod handler;

pub use handler::EventHandler;

use crossterm::event::KeyEvent;

/// An application-level event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// The terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for timers and toast expiry.
    Tick,
    /// The application should quit.
    Quit,
}
