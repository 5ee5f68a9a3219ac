//! Layout primitives and divider frame computation
//!
//! The divider frame is derived from the docked region's bounds each layout
//! pass. The last successfully computed frame is retained so that the divider
//! holds its position when the region is torn down asynchronously.

/// Rectangle in physical display pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge X coordinate
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Bottom edge Y coordinate
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Whether the two rectangles overlap in a non-empty area
    pub fn intersects(&self, other: Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Side of the display the docked region occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DockSide {
    Left,
    Top,
    Right,
    Bottom,
    /// No dock side assigned (no split is active)
    None,
}

/// Divider placement state
///
/// `compute_frame` is pure apart from updating the retained last frame. The
/// retained frame is the fallback when the docked region disappears between
/// the teardown being scheduled and the next layout pass: the divider keeps
/// its old position instead of jumping, and gets hidden shortly after.
#[derive(Debug, Clone)]
pub struct DividerGeometry {
    insets: i32,
    last_frame: Rect,
}

impl DividerGeometry {
    pub fn new(insets: i32) -> Self {
        Self {
            insets,
            last_frame: Rect::default(),
        }
    }

    /// The most recently computed divider frame
    pub fn last_frame(&self) -> Rect {
        self.last_frame
    }

    /// Compute the divider frame for the given dock side.
    ///
    /// The frame sits flush against the docked region's inner edge, pulled
    /// inward by the configured insets, with the thickness taken from
    /// `requested` on the axis perpendicular to the dock edge. On the other
    /// axis the divider spans the region's full extent.
    ///
    /// `DockSide::None` returns the retained last frame unchanged.
    pub fn compute_frame(&mut self, side: DockSide, sibling: Rect, requested: Rect) -> Rect {
        let frame = match side {
            DockSide::Left => Rect::new(
                sibling.right() - self.insets,
                sibling.y,
                requested.width,
                sibling.height,
            ),
            DockSide::Top => Rect::new(
                sibling.x,
                sibling.bottom() - self.insets,
                sibling.width,
                requested.height,
            ),
            DockSide::Right => Rect::new(
                sibling.x - requested.width + self.insets,
                sibling.y,
                requested.width,
                sibling.height,
            ),
            DockSide::Bottom => Rect::new(
                sibling.x,
                sibling.y - requested.height + self.insets,
                sibling.width,
                requested.height,
            ),
            DockSide::None => return self.last_frame,
        };
        self.last_frame = frame;
        frame
    }
}
