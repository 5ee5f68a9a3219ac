//! Divider state listeners
//!
//! Fan-out notification of visibility, existence and minimize changes to any
//! number of registered listeners. A listener may sit on the far side of a
//! process or thread boundary and disappear at any time, so each delivery is
//! isolated: one failure is logged and the broadcast moves on.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

/// Receives divider state change notifications
///
/// Calls arrive on the window-management thread. Implementations that
/// forward across an execution boundary report transport failures through
/// the `Result`; failures never propagate past the registry.
pub trait DividerListener {
    fn on_divider_visibility_changed(&self, visible: bool) -> Result<()>;
    fn on_dock_exists_changed(&self, exists: bool) -> Result<()>;
    fn on_minimize_changed(&self, minimized: bool, animation: Duration) -> Result<()>;
}

/// A single notification, as delivered to every registered listener
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DividerEvent {
    VisibilityChanged(bool),
    ExistenceChanged(bool),
    MinimizeChanged {
        minimized: bool,
        animation: Duration,
    },
}

/// Ordered collection of listener handles
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: Vec<Arc<dyn DividerListener>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a listener handle. The caller replays the current state snapshot
    /// to the new listener via `deliver_to`.
    pub fn register(&mut self, listener: Arc<dyn DividerListener>) {
        self.listeners.push(listener);
    }

    /// Remove a listener by handle identity. No further deliveries are
    /// attempted; a delivery already in flight is unaffected.
    pub fn unregister(&mut self, listener: &Arc<dyn DividerListener>) {
        self.listeners.retain(|entry| !Arc::ptr_eq(entry, listener));
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Deliver `event` to every registered listener.
    ///
    /// Iterates over a snapshot of the handle list, so registration changes
    /// made while the broadcast is in progress don't disturb it.
    pub fn broadcast(&self, event: DividerEvent) {
        let snapshot = self.listeners.clone();
        for listener in &snapshot {
            Self::deliver(listener, event);
        }
    }

    /// Deliver `event` to a single listener (late-join replay)
    pub fn deliver_to(&self, listener: &Arc<dyn DividerListener>, event: DividerEvent) {
        Self::deliver(listener, event);
    }

    fn deliver(listener: &Arc<dyn DividerListener>, event: DividerEvent) {
        let result = match event {
            DividerEvent::VisibilityChanged(visible) => {
                listener.on_divider_visibility_changed(visible)
            }
            DividerEvent::ExistenceChanged(exists) => listener.on_dock_exists_changed(exists),
            DividerEvent::MinimizeChanged {
                minimized,
                animation,
            } => listener.on_minimize_changed(minimized, animation),
        };
        if let Err(error) = result {
            tracing::error!("Failed to deliver {:?}: {:#}", event, error);
        }
    }
}
