//! OffsetWatcher implementation
//!
//! The watcher owns its state in an `Rc` shared with the hook it installs on
//! the host. The hook only holds a `Weak` to that state, and the watcher only
//! holds a `Weak` to the host, so neither side keeps the other alive.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::config::WatcherConfig;
use crate::error::WatchError;
use crate::scroll::{Axis, OffsetWatchable, ScrollHook, ScrollMetrics};

/// Distance left before the watched zone is entered
///
/// `(content - visible) - position - threshold`; negative once the zone has
/// been entered.
pub fn remaining_distance(metrics: &dyn ScrollMetrics, axis: Axis, threshold: f64) -> f64 {
    metrics.max_position(axis) - metrics.position(axis) - threshold
}

/// State shared between the watcher handle and the installed scroll hook
struct WatchState {
    axis: Axis,
    threshold: f64,
    armed: Cell<bool>,
    on_hit: RefCell<Box<dyn FnMut()>>,
}

impl WatchState {
    /// Returns true when the callback fired
    fn evaluate(&self, metrics: &dyn ScrollMetrics) -> bool {
        if !self.armed.get() {
            return false;
        }

        let remaining = remaining_distance(metrics, self.axis, self.threshold);
        if remaining.is_nan() || remaining >= 0.0 {
            return false;
        }

        // A nested evaluation from inside the callback stays armed
        let Ok(mut on_hit) = self.on_hit.try_borrow_mut() else {
            log::debug!("Offset hit while callback is running; deferring");
            return false;
        };

        self.armed.set(false);
        log::debug!(
            "Offset hit on {:?} axis (remaining {:.1}, threshold {:.1})",
            self.axis,
            remaining,
            self.threshold
        );
        on_hit();
        true
    }
}

/// Calls back once when the host scrolls within `threshold` of its end
///
/// Creating a watcher claims the host's scroll hook slot. After firing, the
/// watcher disarms itself until [`OffsetWatcher::rearm`] is called.
///
/// The callback runs while the host is borrowed (either dispatching a scroll
/// or being read by `rearm`), so it must not borrow the host mutably. Record
/// the hit and act on it after the scroll call returns.
pub struct OffsetWatcher<H: OffsetWatchable + 'static> {
    host: Weak<RefCell<H>>,
    state: Rc<WatchState>,
}

impl<H: OffsetWatchable + 'static> OffsetWatcher<H> {
    /// Watch the vertical axis of `host`
    pub fn new(
        host: &Rc<RefCell<H>>,
        threshold: f64,
        on_hit: impl FnMut() + 'static,
    ) -> Result<Self, WatchError> {
        Self::with_axis(host, Axis::Vertical, threshold, on_hit)
    }

    pub fn from_config(
        host: &Rc<RefCell<H>>,
        config: &WatcherConfig,
        on_hit: impl FnMut() + 'static,
    ) -> Result<Self, WatchError> {
        Self::with_axis(host, config.axis, config.threshold, on_hit)
    }

    pub fn with_axis(
        host: &Rc<RefCell<H>>,
        axis: Axis,
        threshold: f64,
        on_hit: impl FnMut() + 'static,
    ) -> Result<Self, WatchError> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(WatchError::InvalidThreshold(threshold));
        }

        let state = Rc::new(WatchState {
            axis,
            threshold,
            armed: Cell::new(true),
            on_hit: RefCell::new(Box::new(on_hit)),
        });

        let hook_state = Rc::downgrade(&state);
        let hook: ScrollHook = Box::new(move |metrics: &dyn ScrollMetrics| {
            if let Some(state) = hook_state.upgrade() {
                state.evaluate(metrics);
            }
        });

        let previous = host
            .try_borrow_mut()
            .map_err(|_| WatchError::HostBusy)?
            .set_scroll_hook(Some(hook));
        if previous.is_some() {
            log::warn!("Replacing an existing scroll hook; the previous subscriber is detached");
        }

        Ok(Self {
            host: Rc::downgrade(host),
            state,
        })
    }

    /// Start watching again and evaluate the current position immediately
    ///
    /// Fires synchronously if the host is already past the threshold. The
    /// immediate check is skipped when the host has been dropped or is in the
    /// middle of dispatching a scroll notification.
    pub fn rearm(&self) {
        self.state.armed.set(true);

        let Some(host) = self.host.upgrade() else {
            log::debug!("Rearmed watcher whose host is gone");
            return;
        };

        match host.try_borrow() {
            Ok(host) => {
                self.state.evaluate(&*host);
            }
            Err(_) => log::debug!("Host busy; offset will be checked on the next scroll"),
        }
    }

    /// Stop reacting to scroll notifications
    pub fn disarm(&self) {
        self.state.armed.set(false);
    }

    pub fn is_armed(&self) -> bool {
        self.state.armed.get()
    }

    pub fn threshold(&self) -> f64 {
        self.state.threshold
    }

    pub fn axis(&self) -> Axis {
        self.state.axis
    }
}

impl<H: OffsetWatchable + 'static> std::fmt::Debug for OffsetWatcher<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OffsetWatcher")
            .field("axis", &self.state.axis)
            .field("threshold", &self.state.threshold)
            .field("armed", &self.state.armed.get())
            .field("host_alive", &(self.host.strong_count() > 0))
            .finish()
    }
}

#[cfg(test)]
#[path = "offset_watcher_tests.rs"]
mod offset_watcher_tests;
