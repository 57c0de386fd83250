//! Timers owned by a component.
//!
//! Both handles keep their `gloo-timers` callback in a local stored value
//! and cancel it when the owning component is cleaned up, so a callback
//! never fires into a disposed view.

use gloo_timers::callback::{Interval, Timeout};
use leptos::prelude::*;

/// Trailing-edge debounce: each `schedule` replaces the pending call
#[derive(Clone, Copy)]
pub struct Debounce {
    pending: StoredValue<Option<Timeout>, LocalStorage>,
    delay_ms: u32,
}

impl Debounce {
    pub fn new(delay_ms: u32) -> Self {
        let pending = StoredValue::new_local(None::<Timeout>);
        on_cleanup(move || {
            pending.try_update_value(|slot| {
                if let Some(timeout) = slot.take() {
                    timeout.cancel();
                }
            });
        });
        Self { pending, delay_ms }
    }

    pub fn schedule(&self, callback: impl FnOnce() + 'static) {
        let timeout = Timeout::new(self.delay_ms, callback);
        self.pending.try_update_value(|slot| {
            // dropping the previous handle cancels it
            *slot = Some(timeout);
        });
    }

    pub fn cancel(&self) {
        self.pending.try_update_value(|slot| {
            if let Some(timeout) = slot.take() {
                timeout.cancel();
            }
        });
    }
}

/// Repeating timer. `stop` must not be called from inside the tick
/// callback itself; react to the state the tick produced instead.
#[derive(Clone, Copy)]
pub struct Ticker {
    running: StoredValue<Option<Interval>, LocalStorage>,
}

impl Ticker {
    pub fn new() -> Self {
        let running = StoredValue::new_local(None::<Interval>);
        on_cleanup(move || {
            running.try_update_value(|slot| {
                if let Some(interval) = slot.take() {
                    interval.cancel();
                }
            });
        });
        Self { running }
    }

    pub fn start(&self, period_ms: u32, tick: impl FnMut() + 'static) {
        let interval = Interval::new(period_ms, tick);
        self.running.try_update_value(|slot| *slot = Some(interval));
    }

    pub fn stop(&self) {
        self.running.try_update_value(|slot| {
            if let Some(interval) = slot.take() {
                interval.cancel();
            }
        });
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_handles_stop_and_clean_up() {
        let owner = Owner::new();
        owner.with(|| {
            let ticker = Ticker::default();
            ticker.stop();
            let debounce = Debounce::new(300);
            debounce.cancel();
        });
        owner.cleanup();
    }
}
