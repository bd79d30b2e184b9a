//! Browser timers tied to the owning component's lifetime.

use std::time::Duration;

use leptos::prelude::*;

/// A one-shot timer that can be restarted; restarting or unmounting cancels
/// the pending callback.
#[derive(Debug, Clone, Copy)]
pub struct Restartable {
    #[cfg(target_arch = "wasm32")]
    handle: StoredValue<Option<TimeoutHandle>>,
}

impl Restartable {
    /// Create a timer owned by the current reactive scope.
    pub fn new() -> Self {
        let timer = Self {
            #[cfg(target_arch = "wasm32")]
            handle: StoredValue::new(None),
        };

        on_cleanup(move || timer.cancel());

        timer
    }

    /// Run `callback` after `delay`, replacing any pending run.
    #[cfg(target_arch = "wasm32")]
    pub fn start(self, delay: Duration, callback: impl FnOnce() + 'static) {
        self.cancel();

        match set_timeout_with_handle(callback, delay) {
            Ok(handle) => self.handle.set_value(Some(handle)),
            Err(_) => leptos::logging::warn!("failed to schedule timeout"),
        }
    }

    /// Timers never fire outside the browser.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn start(self, delay: Duration, callback: impl FnOnce() + 'static) {
        let _ = (self, delay, callback);
    }

    /// Drop the pending run, if any.
    pub fn cancel(self) {
        #[cfg(target_arch = "wasm32")]
        if let Some(handle) = self.handle.try_get_value().flatten() {
            handle.clear();
            self.handle.set_value(None);
        }
    }
}

impl Default for Restartable {
    fn default() -> Self {
        Self::new()
    }
}

/// Fire and forget a one-shot callback.
#[cfg(target_arch = "wasm32")]
pub fn after(delay: Duration, callback: impl FnOnce() + 'static) {
    if set_timeout_with_handle(callback, delay).is_err() {
        leptos::logging::warn!("failed to schedule timeout");
    }
}

/// Timers never fire outside the browser.
#[cfg(not(target_arch = "wasm32"))]
pub fn after(delay: Duration, callback: impl FnOnce() + 'static) {
    let _ = (delay, callback);
}

/// Call `tick` every `period` until it returns `false` or the owning
/// component is unmounted.
#[cfg(target_arch = "wasm32")]
pub fn every(period: Duration, tick: impl Fn() -> bool + 'static) {
    let handle = StoredValue::new(None::<IntervalHandle>);

    let result = set_interval_with_handle(
        move || {
            if !tick()
                && let Some(interval) = handle.try_get_value().flatten()
            {
                interval.clear();
            }
        },
        period,
    );

    match result {
        Ok(interval) => {
            handle.set_value(Some(interval));
            on_cleanup(move || interval.clear());
        }
        Err(_) => leptos::logging::warn!("failed to schedule interval"),
    }
}

/// Intervals never fire outside the browser.
#[cfg(not(target_arch = "wasm32"))]
pub fn every(period: Duration, tick: impl Fn() -> bool + 'static) {
    let _ = (period, tick);
}
