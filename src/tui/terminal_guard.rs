//! Switches the terminal into window mode and makes sure it is switched back exactly once,
//! whether the run loop returns, unwinds, or is interrupted by a signal.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[cfg(unix)]
use crate::core::event::{EventSender, NativeEvent};

/// How long a signalled window gets to close itself before the process is killed.
pub const SIGNAL_GRACE: std::time::Duration = std::time::Duration::from_secs(2);

pub trait ScreenMode: Send + Sync + 'static {
    fn enter(&self, title: &str) -> io::Result<()>;
    fn leave(&self) -> io::Result<()>;
}

/// Raw mode, alternate screen, mouse capture, hidden cursor.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermScreen;

impl ScreenMode for CrosstermScreen {
    fn enter(&self, title: &str) -> io::Result<()> {
        use crossterm::{cursor, event::EnableMouseCapture, execute, terminal};

        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide,
            terminal::SetTitle(title)
        )
    }

    fn leave(&self) -> io::Result<()> {
        use crossterm::{cursor, event::DisableMouseCapture, execute, terminal};

        // Every step runs; the first failure is reported.
        let raw = terminal::disable_raw_mode();
        let screen = execute!(
            io::stdout(),
            terminal::LeaveAlternateScreen,
            DisableMouseCapture,
            cursor::Show
        );
        raw.and(screen)
    }
}

struct Restore {
    done: AtomicBool,
    mode: Arc<dyn ScreenMode>,
}

/// Cloneable handle that leaves window mode; only the first call does anything.
#[derive(Clone)]
pub struct RestoreHandle(Arc<Restore>);

impl RestoreHandle {
    pub fn restore(&self) -> io::Result<()> {
        if self.0.done.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        tracing::debug!("leaving window mode");
        self.0.mode.leave()
    }

    pub fn is_restored(&self) -> bool {
        self.0.done.load(Ordering::SeqCst)
    }
}

/// Holds the terminal in window mode until dropped.
pub struct TerminalGuard {
    handle: RestoreHandle,
}

impl TerminalGuard {
    pub fn enter(title: &str) -> io::Result<Self> {
        Self::enter_with(Arc::new(CrosstermScreen), title)
    }

    /// Nothing is restored when `enter` itself fails.
    pub fn enter_with(mode: Arc<dyn ScreenMode>, title: &str) -> io::Result<Self> {
        mode.enter(title)?;
        Ok(Self {
            handle: RestoreHandle(Arc::new(Restore {
                done: AtomicBool::new(false),
                mode,
            })),
        })
    }

    pub fn handle(&self) -> RestoreHandle {
        self.handle.clone()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = self.handle.restore() {
            tracing::warn!(error = %e, "terminal restore failed");
        }
    }
}

/// Shell convention for a process killed by `signal`.
pub fn signal_exit_code(signal: i32) -> i32 {
    128 + signal
}

/// SIGINT/SIGTERM post `CloseRequested` to the window, then after [`SIGNAL_GRACE`] the terminal
/// is restored and the process exits.
#[cfg(unix)]
pub fn close_on_termination(
    handle: RestoreHandle,
    events: EventSender,
) -> io::Result<std::thread::JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    std::thread::Builder::new()
        .name("gridwin-signals".to_string())
        .spawn(move || {
            for signal in signals.forever() {
                tracing::info!(signal, "termination signal");
                if events.post(NativeEvent::CloseRequested) {
                    std::thread::sleep(SIGNAL_GRACE);
                }
                let _ = handle.restore();
                std::process::exit(signal_exit_code(signal));
            }
        })
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
