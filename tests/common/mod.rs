//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use anyhow::{bail, Result};
use splitdock::{
    DisplayHost, DividerConfig, DividerController, DividerEvent, DividerListener, DockSide,
    DockedRegion, Rect, ResizeOverlay, TaskInfo, WindowId,
};

/// Install an env-filtered subscriber once per test binary
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Docked region stub recording every applied adjustment fraction
pub struct TestRegion {
    pub side: DockSide,
    pub bounds: Rect,
    pub visible_to_user: bool,
    pub fraction: f32,
    pub applied: Vec<f32>,
}

impl TestRegion {
    pub fn new(side: DockSide, bounds: Rect) -> Self {
        Self {
            side,
            bounds,
            visible_to_user: true,
            fraction: 0.0,
            applied: Vec::new(),
        }
    }
}

impl DockedRegion for TestRegion {
    fn dock_side(&self) -> DockSide {
        self.side
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_minimize_fraction(&mut self, fraction: f32) -> bool {
        self.applied.push(fraction);
        if self.fraction == fraction {
            false
        } else {
            self.fraction = fraction;
            true
        }
    }
}

/// Window-manager host stub for one display
pub struct TestHost {
    pub region: Option<TestRegion>,
    pub display: Rect,
    pub relayout_requests: usize,
    pub resize_markers_cleared: usize,
}

impl TestHost {
    pub fn new() -> Self {
        Self {
            region: None,
            display: Rect::new(0, 0, 1000, 1000),
            relayout_requests: 0,
            resize_markers_cleared: 0,
        }
    }

    pub fn with_left_dock() -> Self {
        let mut host = Self::new();
        host.region = Some(TestRegion::new(DockSide::Left, Rect::new(0, 0, 600, 1000)));
        host
    }
}

impl DisplayHost for TestHost {
    fn docked_region(&mut self) -> Option<&mut dyn DockedRegion> {
        self.region
            .as_mut()
            .map(|region| region as &mut dyn DockedRegion)
    }

    fn docked_region_visible(&mut self) -> Option<&mut dyn DockedRegion> {
        self.region
            .as_mut()
            .filter(|region| region.visible_to_user)
            .map(|region| region as &mut dyn DockedRegion)
    }

    fn display_bounds(&self) -> Rect {
        self.display
    }

    fn request_relayout(&mut self) {
        self.relayout_requests += 1;
    }

    fn clear_resize_change_reported(&mut self) {
        self.resize_markers_cleared += 1;
    }
}

/// Overlay call log, shared with the test through an `Rc`
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayCall {
    Begin,
    Show { bounds: Rect, alpha: f32 },
    Hide,
    Commit,
}

#[derive(Clone, Default)]
pub struct RecordingOverlay {
    calls: Rc<RefCell<Vec<OverlayCall>>>,
}

impl RecordingOverlay {
    pub fn new() -> (Self, Rc<RefCell<Vec<OverlayCall>>>) {
        let overlay = Self::default();
        let calls = overlay.calls.clone();
        (overlay, calls)
    }
}

impl ResizeOverlay for RecordingOverlay {
    fn begin_transaction(&mut self) {
        self.calls.borrow_mut().push(OverlayCall::Begin);
    }

    fn show(&mut self, bounds: Rect, alpha: f32, _duration: Duration) {
        self.calls.borrow_mut().push(OverlayCall::Show { bounds, alpha });
    }

    fn hide(&mut self) {
        self.calls.borrow_mut().push(OverlayCall::Hide);
    }

    fn commit_transaction(&mut self) {
        self.calls.borrow_mut().push(OverlayCall::Commit);
    }
}

/// Listener recording everything it receives; optionally failing every
/// delivery to exercise broadcast isolation
#[derive(Default)]
pub struct RecordingListener {
    pub events: RefCell<Vec<DividerEvent>>,
    pub failing: bool,
}

impl RecordingListener {
    pub fn failing() -> Self {
        Self {
            events: RefCell::new(Vec::new()),
            failing: true,
        }
    }

    pub fn take(&self) -> Vec<DividerEvent> {
        self.events.borrow_mut().drain(..).collect()
    }

    fn record(&self, event: DividerEvent) -> Result<()> {
        if self.failing {
            bail!("listener disconnected");
        }
        self.events.borrow_mut().push(event);
        Ok(())
    }
}

impl DividerListener for RecordingListener {
    fn on_divider_visibility_changed(&self, visible: bool) -> Result<()> {
        self.record(DividerEvent::VisibilityChanged(visible))
    }

    fn on_dock_exists_changed(&self, exists: bool) -> Result<()> {
        self.record(DividerEvent::ExistenceChanged(exists))
    }

    fn on_minimize_changed(&self, minimized: bool, animation: Duration) -> Result<()> {
        self.record(DividerEvent::MinimizeChanged {
            minimized,
            animation,
        })
    }
}

/// Fresh controller wired to a recording overlay
pub fn test_controller() -> (DividerController, Rc<RefCell<Vec<OverlayCall>>>) {
    let (overlay, calls) = RecordingOverlay::new();
    let controller = DividerController::new(DividerConfig::default(), Box::new(overlay));
    (controller, calls)
}

/// Controller with its divider window attached and visibility settled
/// against the given host
pub fn attached_controller(host: &mut TestHost) -> (DividerController, Rc<RefCell<Vec<OverlayCall>>>) {
    let (mut controller, calls) = test_controller();
    controller.set_divider_window(Some(WindowId(1)), host);
    calls.borrow_mut().clear();
    (controller, calls)
}

pub fn home_task(region_bounds: Rect) -> TaskInfo {
    TaskInfo {
        is_home: true,
        visible_to_user: true,
        region_bounds,
    }
}

pub fn app_task(region_bounds: Rect) -> TaskInfo {
    TaskInfo {
        is_home: false,
        visible_to_user: true,
        region_bounds,
    }
}
