//! Host collaborator interfaces
//!
//! The controller is scoped to one display but does not own the window
//! manager's state. Operations that need host state take a `DisplayHost`
//! explicitly; there is no ambient or global lookup. Everything the host
//! hands over may already be stale by the time we read it, which is why the
//! controller treats a missing region as a valid state, not an error.

use std::time::Duration;

use crate::geometry::{DockSide, Rect};

/// Opaque handle for the divider's own window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub u64);

/// The docked split-screen region, as exposed by the host's region directory
pub trait DockedRegion {
    /// Which display edge the region occupies
    fn dock_side(&self) -> DockSide;

    /// Current region bounds in display coordinates
    fn bounds(&self) -> Rect;

    /// Apply an adjustment fraction in [0, 1] describing how far the region
    /// is collapsed toward its minimized peek state. Returns true when the
    /// applied value actually changed.
    fn set_minimize_fraction(&mut self, fraction: f32) -> bool;
}

/// Display-scoped window-manager services consumed by the controller
pub trait DisplayHost {
    /// Docked region lookup, regardless of user visibility
    fn docked_region(&mut self) -> Option<&mut dyn DockedRegion>;

    /// Docked region lookup, filtered to regions the user can currently see
    fn docked_region_visible(&mut self) -> Option<&mut dyn DockedRegion>;

    /// Logical bounds of the display
    fn display_bounds(&self) -> Rect;

    /// Schedule a layout pass. Called whenever an applied adjustment
    /// fraction changed.
    fn request_relayout(&mut self);

    /// Drop the per-window "resize change reported" markers on this display
    fn clear_resize_change_reported(&mut self);
}

/// Dimming indicator surface shown while the user drags the divider
///
/// Show/hide calls are always bracketed by begin/commit so the host can
/// batch the surface operations into a single transaction.
pub trait ResizeOverlay {
    fn begin_transaction(&mut self);
    fn show(&mut self, bounds: Rect, alpha: f32, duration: Duration);
    fn hide(&mut self);
    fn commit_transaction(&mut self);
}

/// Snapshot of a task handed over during app transition callbacks
#[derive(Debug, Clone, Copy)]
pub struct TaskInfo {
    /// Whether this is the designated home task
    pub is_home: bool,
    /// Whether the task is currently visible to the user
    pub visible_to_user: bool,
    /// Bounds of the region hosting the task
    pub region_bounds: Rect,
}
