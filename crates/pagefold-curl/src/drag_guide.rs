//! First-visit drag guide for the orbit scene.
//!
//! The guide overlay stays visible until the visitor has actually dragged
//! the scene around a bit, then dismisses for the rest of the session.

use pagefold_geometry::Point;

use crate::gesture_constants::DRAG_GUIDE_DISMISS_DISTANCE;

#[derive(Debug, Default)]
pub struct DragGuide {
    pointer_down: bool,
    last: Option<Point>,
    travelled: f32,
    dismissed: bool,
}

impl DragGuide {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    pub fn pointer_down(&mut self, point: Point) {
        if self.dismissed {
            return;
        }
        self.pointer_down = true;
        self.last = Some(point);
        self.travelled = 0.0;
    }

    /// Accumulate pointer travel. Returns true the moment the accumulated
    /// distance crosses the dismissal threshold.
    pub fn pointer_move(&mut self, point: Point) -> bool {
        if self.dismissed || !self.pointer_down {
            return false;
        }
        let Some(last) = self.last else {
            return false;
        };
        self.travelled += last.distance_to(point);
        self.last = Some(point);

        if self.travelled >= DRAG_GUIDE_DISMISS_DISTANCE {
            self.dismissed = true;
            return true;
        }
        false
    }

    pub fn pointer_up(&mut self) {
        self.pointer_down = false;
        self.last = None;
    }
}

#[cfg(test)]
#[path = "tests/drag_guide_tests.rs"]
mod tests;
