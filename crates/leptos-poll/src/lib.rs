//! Leptos Polling Utilities
//!
//! Fixed-period polling for Leptos CSR apps. Each tick runs as its own
//! task; a tick that fires while the previous one is still in flight is
//! skipped, so at most one request per resource is ever outstanding.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

/// What happened to a single tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The tick may run; the gate is now busy
    Run,
    /// The previous tick's work is still in flight
    SkippedInFlight,
    /// The poll is paused
    SkippedPaused,
}

/// In-flight and pause bookkeeping for one polled resource.
///
/// Kept as a plain state machine (no timers, no signals) so the gating
/// rules stay testable off-wasm.
#[derive(Debug, Default)]
pub struct TickGate {
    in_flight: bool,
    paused: bool,
    skipped: u32,
}

impl TickGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide whether the tick that just fired may run. A `Run` outcome
    /// marks the gate busy until [`TickGate::finish`] is called.
    pub fn begin(&mut self) -> TickOutcome {
        if self.paused {
            self.skipped += 1;
            return TickOutcome::SkippedPaused;
        }
        if self.in_flight {
            self.skipped += 1;
            return TickOutcome::SkippedInFlight;
        }
        self.in_flight = true;
        TickOutcome::Run
    }

    /// Mark the in-flight work done, allowing the next tick to run.
    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Ticks dropped so far (in-flight or paused)
    pub fn skipped(&self) -> u32 {
        self.skipped
    }
}

/// Control handle for a running poll. Cloneable; all clones drive the
/// same loop.
#[derive(Clone)]
pub struct PollHandle {
    gate: Rc<RefCell<TickGate>>,
    stopped: Rc<Cell<bool>>,
}

impl PollHandle {
    fn new() -> Self {
        Self {
            gate: Rc::new(RefCell::new(TickGate::new())),
            stopped: Rc::new(Cell::new(false)),
        }
    }

    /// Skip ticks until [`PollHandle::resume`]; the loop keeps running.
    pub fn pause(&self) {
        self.gate.borrow_mut().pause();
    }

    pub fn resume(&self) {
        self.gate.borrow_mut().resume();
    }

    pub fn is_paused(&self) -> bool {
        self.gate.borrow().is_paused()
    }

    /// Tear the loop down for good; the current tick (if any) finishes
    /// but no further one fires.
    pub fn stop(&self) {
        self.stopped.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }

    pub fn skipped_ticks(&self) -> u32 {
        self.gate.borrow().skipped()
    }
}

/// Start a repeating poll with a fixed period. The first tick fires one
/// full period after the call, like `setInterval`.
pub fn start_polling<F, Fut>(period_ms: u32, tick: F) -> PollHandle
where
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let handle = PollHandle::new();
    let loop_handle = handle.clone();

    spawn_local(async move {
        loop {
            TimeoutFuture::new(period_ms).await;
            if loop_handle.stopped.get() {
                break;
            }
            if loop_handle.gate.borrow_mut().begin() != TickOutcome::Run {
                continue;
            }
            // Run the tick as its own task so the timer cadence stays
            // fixed; the gate stays busy until the task completes.
            let gate = loop_handle.gate.clone();
            let fut = tick();
            spawn_local(async move {
                fut.await;
                gate.borrow_mut().finish();
            });
        }
    });

    handle
}

/// Pause a poll while the page is hidden and resume it when the page
/// becomes visible again.
pub fn bind_visibility_pause(handle: PollHandle) {
    use wasm_bindgen::closure::Closure;

    let on_visibility = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        let hidden = web_sys::window()
            .and_then(|win| win.document())
            .map(|doc| doc.hidden())
            .unwrap_or(false);
        if hidden {
            handle.pause();
        } else {
            handle.resume();
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback(
                "visibilitychange",
                on_visibility.as_ref().unchecked_ref(),
            );
        }
    }
    on_visibility.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_tick_is_skipped() {
        let mut gate = TickGate::new();

        assert_eq!(gate.begin(), TickOutcome::Run);
        // Next tick fires while the first is still in flight
        assert_eq!(gate.begin(), TickOutcome::SkippedInFlight);
        assert_eq!(gate.skipped(), 1);

        gate.finish();
        assert_eq!(gate.begin(), TickOutcome::Run);
        assert_eq!(gate.skipped(), 1);
    }

    #[test]
    fn test_paused_gate_skips_without_running() {
        let mut gate = TickGate::new();

        gate.pause();
        assert_eq!(gate.begin(), TickOutcome::SkippedPaused);
        assert_eq!(gate.begin(), TickOutcome::SkippedPaused);
        assert_eq!(gate.skipped(), 2);

        gate.resume();
        assert_eq!(gate.begin(), TickOutcome::Run);
    }

    #[test]
    fn test_pause_does_not_clear_in_flight() {
        let mut gate = TickGate::new();

        assert_eq!(gate.begin(), TickOutcome::Run);
        gate.pause();
        gate.resume();
        // The first tick never finished, so the gate is still busy
        assert_eq!(gate.begin(), TickOutcome::SkippedInFlight);

        gate.finish();
        assert_eq!(gate.begin(), TickOutcome::Run);
    }

    #[test]
    fn test_handle_pause_resume_stop() {
        let handle = PollHandle::new();

        assert!(!handle.is_paused());
        assert!(!handle.is_stopped());

        handle.pause();
        assert!(handle.is_paused());
        handle.resume();
        assert!(!handle.is_paused());

        // Clones drive the same loop state
        let clone = handle.clone();
        clone.stop();
        assert!(handle.is_stopped());
    }
}
