//! Periodic timer bridge.
//!
//! The timer runs on its own thread and never touches the window: each tick is posted as
//! `NativeEvent::Tick` and the listener runs when the dispatch thread pumps the channel.

use std::fmt;
use std::io;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crate::core::event::{EventSender, NativeEvent};

/// Time source measured from the owning window's construction.
pub trait Clock: Send + Sync + fmt::Debug {
    fn now(&self) -> Duration;

    /// Blocks until `now() >= deadline`. Returns `false` if cancelled first.
    fn wait_until(&self, deadline: Duration, cancel: &Cancellation) -> bool;
}

#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }

    fn wait_until(&self, deadline: Duration, cancel: &Cancellation) -> bool {
        loop {
            let now = self.now();
            if now >= deadline {
                return !cancel.is_cancelled();
            }
            if cancel.wait(deadline - now) {
                return false;
            }
        }
    }
}

#[derive(Debug, Default)]
struct ManualState {
    now: Mutex<Duration>,
    moved: Condvar,
}

/// Clock that only moves when told to.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    inner: Arc<ManualState>,
}

impl ManualClock {
    const POLL: Duration = Duration::from_millis(5);

    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self
            .inner
            .now
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *now += by;
        self.inner.moved.notify_all();
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        *self
            .inner
            .now
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn wait_until(&self, deadline: Duration, cancel: &Cancellation) -> bool {
        let mut now = self
            .inner
            .now
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        loop {
            if cancel.is_cancelled() {
                return false;
            }
            if *now >= deadline {
                return true;
            }
            // Cancellation arrives on a channel, not the condvar: wake up periodically.
            now = self
                .inner
                .moved
                .wait_timeout(now, Self::POLL)
                .unwrap_or_else(PoisonError::into_inner)
                .0;
        }
    }
}

/// Receiving half of a cancellation signal; cancelled once the sender is dropped.
#[derive(Debug)]
pub struct Cancellation(Receiver<()>);

impl Cancellation {
    pub fn pair() -> (Sender<()>, Self) {
        let (tx, rx) = mpsc::channel();
        (tx, Self(rx))
    }

    pub fn is_cancelled(&self) -> bool {
        !matches!(self.0.try_recv(), Err(TryRecvError::Empty))
    }

    /// Sleeps up to `timeout`; `true` when woken by cancellation.
    pub fn wait(&self, timeout: Duration) -> bool {
        !matches!(self.0.recv_timeout(timeout), Err(RecvTimeoutError::Timeout))
    }
}

/// Fixed-rate deadlines: `start, start + interval, ...`. A late tick does not shift the ones
/// after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSchedule {
    interval: Duration,
    next: Duration,
}

impl TimerSchedule {
    pub fn new(start: Duration, interval: Duration) -> Self {
        Self {
            interval,
            next: start,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn deadline(&self) -> Duration {
        self.next
    }

    pub fn advance(&mut self) {
        self.next += self.interval;
    }
}

pub(crate) fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

/// Background ticking thread. Dropping the timer cancels and joins it.
#[derive(Debug)]
pub struct PeriodicTimer {
    interval: Duration,
    cancel: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl PeriodicTimer {
    /// First tick fires immediately, then every `interval`.
    pub fn spawn(
        clock: Arc<dyn Clock>,
        interval: Duration,
        events: EventSender,
    ) -> io::Result<Self> {
        let (cancel_tx, cancel) = Cancellation::pair();
        let schedule = TimerSchedule::new(clock.now(), interval);
        let handle = std::thread::Builder::new()
            .name("gridwin-timer".to_string())
            .spawn(move || tick_loop(clock, schedule, cancel, events))?;

        tracing::info!(interval_ms = millis(interval), "periodic timer started");
        Ok(Self {
            interval,
            cancel: Some(cancel_tx),
            handle: Some(handle),
        })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Signals the thread and waits for it to exit. Idempotent.
    pub fn cancel(&mut self) {
        drop(self.cancel.take());
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::error!("timer thread panicked");
            } else {
                tracing::info!("periodic timer stopped");
            }
        }
    }
}

impl Drop for PeriodicTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn tick_loop(
    clock: Arc<dyn Clock>,
    mut schedule: TimerSchedule,
    cancel: Cancellation,
    events: EventSender,
) {
    loop {
        if !clock.wait_until(schedule.deadline(), &cancel) || cancel.is_cancelled() {
            return;
        }
        let elapsed_ms = millis(clock.now());
        if !events.post(NativeEvent::Tick { elapsed_ms }) {
            tracing::debug!("window channel closed; timer exiting");
            return;
        }
        schedule.advance();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/timer.rs"]
mod tests;
