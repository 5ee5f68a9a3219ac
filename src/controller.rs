//! Divider controller, the composition root
//!
//! Owns the divider geometry, visibility tracking, minimize animation,
//! resize overlay and listener registry for one display, and applies their
//! results against the host: overlay transactions and relayout requests.
//!
//! All mutation happens on the window-management thread; the host render
//! loop calls `tick` from that same thread once per frame while
//! `is_animating`.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::animation::{MinimizeAnimation, MINIMIZE_ANIMATION_DURATION};
use crate::config::DividerConfig;
use crate::display::{DisplayHost, ResizeOverlay, TaskInfo, WindowId};
use crate::geometry::{DividerGeometry, Rect};
use crate::listener::{DividerEvent, DividerListener, ListenerRegistry};
use crate::visibility::VisibilityTracker;

pub struct DividerController {
    config: DividerConfig,
    geometry: DividerGeometry,
    visibility: VisibilityTracker,
    animation: MinimizeAnimation,
    listeners: ListenerRegistry,
    overlay: Box<dyn ResizeOverlay>,
    window: Option<WindowId>,
    resizing: bool,
    minimized: bool,
}

impl DividerController {
    /// Create a controller for one display. `config` is read once here and
    /// never re-read; the overlay surface is owned for the controller's
    /// lifetime.
    pub fn new(config: DividerConfig, overlay: Box<dyn ResizeOverlay>) -> Self {
        Self {
            config,
            geometry: DividerGeometry::new(config.insets),
            visibility: VisibilityTracker::new(),
            animation: MinimizeAnimation::new(),
            listeners: ListenerRegistry::new(),
            overlay,
            window: None,
            resizing: false,
            minimized: false,
        }
    }

    pub fn is_resizing(&self) -> bool {
        self.resizing
    }

    /// Toggle the resize-in-progress flag. On change, the per-window resize
    /// reporting markers on this display are cleared so the next resize pass
    /// reports fresh.
    pub fn set_resizing(&mut self, resizing: bool, host: &mut dyn DisplayHost) {
        if self.resizing != resizing {
            self.resizing = resizing;
            host.clear_resize_change_reported();
        }
    }

    /// Width of the visible divider bar between the touch insets
    pub fn content_width(&self) -> i32 {
        self.config.content_width()
    }

    pub fn content_insets(&self) -> i32 {
        self.config.insets
    }

    /// Record the divider's own window and re-evaluate visibility against it
    pub fn set_divider_window(&mut self, window: Option<WindowId>, host: &mut dyn DisplayHost) {
        self.window = window;
        self.reevaluate_visibility(false, host);
    }

    /// Recompute divider visibility from docked-region existence.
    ///
    /// Notifications are edge-triggered unless `force` is set. No-op while
    /// no divider window has been attached. Going invisible cancels the
    /// resize overlay.
    pub fn reevaluate_visibility(&mut self, force: bool, host: &mut dyn DisplayHost) {
        if self.window.is_none() {
            return;
        }

        let exists = host.docked_region().is_some();
        let delta = self.visibility.reevaluate(exists, force);

        if let Some(exists) = delta.exists_changed {
            self.listeners
                .broadcast(DividerEvent::ExistenceChanged(exists));
        }
        if let Some(visible) = delta.visibility_changed {
            tracing::debug!("Divider visibility changed to {}", visible);
            self.listeners
                .broadcast(DividerEvent::VisibilityChanged(visible));
            if !visible {
                self.set_resize_overlay(false, 0.0, host);
            }
        }
    }

    /// Last computed divider visibility
    pub fn was_visible(&self) -> bool {
        self.visibility.was_visible()
    }

    /// Place the divider window against the docked region.
    ///
    /// `requested` is the window's proposed frame; its extent perpendicular
    /// to the dock edge is the divider thickness. When the region is already
    /// gone (torn down in another execution context before this layout
    /// pass), the last computed frame is returned so the divider holds its
    /// position until it gets hidden.
    pub fn compute_frame(&mut self, requested: Rect, host: &mut dyn DisplayHost) -> Rect {
        match host.docked_region() {
            Some(region) => {
                let side = region.dock_side();
                let bounds = region.bounds();
                self.geometry.compute_frame(side, bounds, requested)
            }
            None => self.geometry.last_frame(),
        }
    }

    /// Show or hide the resize indicator overlay over the docked region.
    ///
    /// The overlay is suppressed rather than shown with degenerate geometry
    /// when the region is missing or its bounds are empty.
    pub fn set_resize_overlay(&mut self, visible: bool, alpha: f32, host: &mut dyn DisplayHost) {
        self.overlay.begin_transaction();
        let bounds = host.docked_region().map(|region| region.bounds());
        let shown = match bounds {
            Some(bounds) if visible && !bounds.is_empty() => {
                self.overlay.show(bounds, alpha, Duration::ZERO);
                true
            }
            _ => false,
        };
        if !shown {
            self.overlay.hide();
        }
        self.overlay.commit_transaction();
    }

    /// Sync the minimized state for a home-task visibility change that
    /// happens without a transition animation.
    pub fn notify_app_visibility_changed(
        &mut self,
        task: &TaskInfo,
        visible: bool,
        host: &mut dyn DisplayHost,
    ) {
        if !task.is_home || !task.visible_to_user {
            return;
        }

        // A task fully offscreen can be an intermediate state while docking
        // and launching overview at the same time; home may never actually
        // become visible once things settle.
        if task.region_bounds.intersects(host.display_bounds())
            && host.docked_region_visible().is_some()
        {
            self.set_minimized_docked(visible, false, host);
        }
    }

    /// App transition kickoff: home opening minimizes the docked region,
    /// home closing restores it. Opening wins when both could apply.
    pub fn notify_app_transition_starting(
        &mut self,
        opening: &[TaskInfo],
        closing: &[TaskInfo],
        host: &mut dyn DisplayHost,
    ) {
        let display = host.display_bounds();
        if home_task_within_display(opening, display) {
            self.set_minimized_docked(true, true, host);
        } else if home_task_within_display(closing, display) {
            self.set_minimized_docked(false, true, host);
        }
    }

    /// Register a listener and immediately replay the current visibility and
    /// existence snapshot to it alone, so late joiners converge on current
    /// state no matter when they attach.
    pub fn register_listener(&mut self, listener: Arc<dyn DividerListener>) {
        self.listeners.register(listener.clone());
        self.listeners.deliver_to(
            &listener,
            DividerEvent::VisibilityChanged(self.visibility.was_visible()),
        );
        self.listeners.deliver_to(
            &listener,
            DividerEvent::ExistenceChanged(self.visibility.dock_exists()),
        );
    }

    pub fn unregister_listener(&mut self, listener: &Arc<dyn DividerListener>) {
        self.listeners.unregister(listener);
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_running()
    }

    /// Advance the minimize animation to `now` and apply the interpolated
    /// fraction to the docked region. Returns whether more frames are
    /// needed; the non-animating call is a cheap early-exit.
    pub fn tick(&mut self, now: Instant, host: &mut dyn DisplayHost) -> bool {
        let Some(frame) = self.animation.tick(now) else {
            return false;
        };

        if frame.started {
            self.listeners.broadcast(DividerEvent::MinimizeChanged {
                minimized: self.minimized,
                animation: MINIMIZE_ANIMATION_DURATION,
            });
        }

        self.apply_minimize_fraction(frame.fraction, host);
        !frame.finished
    }

    /// Enter or leave the minimized docked state.
    ///
    /// A request that matches the current state is a no-op, even mid-flight.
    /// Requests are dropped entirely while no docked region is visible to
    /// the user; minimization only means something while a dock is showing.
    fn set_minimized_docked(&mut self, minimized: bool, animate: bool, host: &mut dyn DisplayHost) {
        if self.minimized == minimized || host.docked_region_visible().is_none() {
            return;
        }

        self.minimized = minimized;
        tracing::debug!("Docked region minimized: {} (animate: {})", minimized, animate);

        if animate {
            let (from, to) = if minimized { (0.0, 1.0) } else { (1.0, 0.0) };
            self.animation.start(from, to);
        } else {
            self.apply_minimize_fraction(if minimized { 1.0 } else { 0.0 }, host);
            self.listeners.broadcast(DividerEvent::MinimizeChanged {
                minimized,
                animation: Duration::ZERO,
            });
        }
    }

    fn apply_minimize_fraction(&mut self, fraction: f32, host: &mut dyn DisplayHost) {
        let changed = match host.docked_region_visible() {
            Some(region) => region.set_minimize_fraction(fraction),
            None => false,
        };
        if changed {
            host.request_relayout();
        }
    }
}

/// First home task in the set decides; it counts only while its region
/// still intersects the display area.
fn home_task_within_display(tasks: &[TaskInfo], display: Rect) -> bool {
    tasks
        .iter()
        .find(|task| task.is_home)
        .is_some_and(|task| task.region_bounds.intersects(display))
}
