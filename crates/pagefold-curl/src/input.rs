//! Pointer event types fed to the controller by the host page.
//!
//! Hosts translate their native mouse/touch events into these; for touch,
//! only the first touch point is read.

use pagefold_geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Point,
}

impl PointerEvent {
    pub const fn new(kind: PointerEventKind, position: Point) -> Self {
        Self { kind, position }
    }

    pub const fn down(position: Point) -> Self {
        Self::new(PointerEventKind::Down, position)
    }

    pub const fn moved(position: Point) -> Self {
        Self::new(PointerEventKind::Move, position)
    }

    pub const fn up(position: Point) -> Self {
        Self::new(PointerEventKind::Up, position)
    }

    pub const fn cancel(position: Point) -> Self {
        Self::new(PointerEventKind::Cancel, position)
    }
}
