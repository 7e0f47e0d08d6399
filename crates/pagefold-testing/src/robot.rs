//! Robot-style harness for driving a [`CurlController`] in tests.
//!
//! The robot owns a controller wired to a recording host and a manual
//! nanosecond clock, so gesture sequences and their settle animations run
//! deterministically:
//!
//! ```
//! use pagefold_testing::robot::CurlRobot;
//! use pagefold_geometry::CornerId;
//!
//! let mut robot = CurlRobot::new(1600.0, 900.0);
//! robot.press(CornerId::TopLeft);
//! robot.drag_by(40.0, 40.0);
//! robot.release();
//! robot.advance_millis(200);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use pagefold_curl::{CurlController, CurlFrame, CurlHost, PointerEvent, SoundCue};
use pagefold_geometry::{Category, CornerId, CurlConfig, CurlSize, CurlSizes, Point, Viewport};

/// Simulated frame interval: ~60 FPS, matching a browser's pointer/raf rate.
pub const FRAME_MILLIS: u64 = 16;

/// One host-visible side effect, in emission order.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedEffect {
    Frame(CurlFrame),
    Sound(SoundCue),
    Selection(bool),
    Category(Category),
}

/// Host implementation that records every effect for later assertions.
#[derive(Clone, Default)]
pub struct RecordingHost {
    effects: Rc<RefCell<Vec<RecordedEffect>>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> Rc<RefCell<Vec<RecordedEffect>>> {
        Rc::clone(&self.effects)
    }
}

impl CurlHost for RecordingHost {
    fn apply_frame(&mut self, frame: &CurlFrame) {
        self.effects
            .borrow_mut()
            .push(RecordedEffect::Frame(frame.clone()));
    }

    fn play_sound(&mut self, cue: SoundCue) {
        self.effects.borrow_mut().push(RecordedEffect::Sound(cue));
    }

    fn set_selection_enabled(&mut self, enabled: bool) {
        self.effects
            .borrow_mut()
            .push(RecordedEffect::Selection(enabled));
    }

    fn category_selected(&mut self, category: Category) {
        self.effects
            .borrow_mut()
            .push(RecordedEffect::Category(category));
    }
}

/// Programmatic gesture driver over a real controller.
pub struct CurlRobot {
    controller: CurlController<RecordingHost>,
    effects: Rc<RefCell<Vec<RecordedEffect>>>,
    now_nanos: u64,
    pointer: Point,
}

impl CurlRobot {
    pub fn new(width: f32, height: f32) -> Self {
        let host = RecordingHost::new();
        let effects = host.log();
        let viewport = Viewport::new(width, height);
        let mut controller = CurlController::new(host, viewport);
        controller.tick(0);
        Self {
            controller,
            effects,
            now_nanos: 0,
            pointer: Point::ZERO,
        }
    }

    pub fn controller(&mut self) -> &mut CurlController<RecordingHost> {
        &mut self.controller
    }

    pub fn now_nanos(&self) -> u64 {
        self.now_nanos
    }

    pub fn config(&self) -> CurlConfig {
        *self.controller.config()
    }

    pub fn sizes(&self) -> CurlSizes {
        *self.controller.sizes()
    }

    pub fn size_of(&self, corner: CornerId) -> CurlSize {
        self.controller.sizes().get(corner)
    }

    /// A pointer position just inside `corner`'s resting fold.
    pub fn corner_point(&self, corner: CornerId) -> Point {
        let viewport = self.controller.viewport();
        match corner {
            CornerId::TopLeft => Point::new(2.0, 2.0),
            CornerId::TopRight => Point::new(viewport.width - 2.0, 2.0),
            CornerId::BottomLeft => Point::new(2.0, viewport.height - 2.0),
            CornerId::BottomRight => Point::new(viewport.width - 2.0, viewport.height - 2.0),
        }
    }

    /// Press inside the given corner's fold.
    pub fn press(&mut self, corner: CornerId) {
        let point = self.corner_point(corner);
        self.press_at(point);
    }

    /// Press at an arbitrary position; whether a corner is hit follows the
    /// controller's own hit test.
    pub fn press_at(&mut self, point: Point) {
        self.pointer = point;
        self.controller.handle_pointer(PointerEvent::down(point));
    }

    /// Move the pointer by a delta from its current position.
    pub fn drag_by(&mut self, dx: f32, dy: f32) {
        self.pointer = self.pointer.offset(dx, dy);
        let event = PointerEvent::moved(self.pointer);
        self.controller.handle_pointer(event);
    }

    pub fn release(&mut self) {
        let event = PointerEvent::up(self.pointer);
        self.controller.handle_pointer(event);
    }

    pub fn cancel_pointer(&mut self) {
        let event = PointerEvent::cancel(self.pointer);
        self.controller.handle_pointer(event);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.controller.resize(Viewport::new(width, height));
    }

    pub fn gallery_closed(&mut self) {
        self.controller.gallery_closed();
    }

    /// Advance the clock by `millis`, ticking the controller at the frame
    /// rate along the way. The final tick lands exactly `millis` later.
    pub fn advance_millis(&mut self, millis: u64) {
        let mut remaining = millis;
        while remaining > 0 {
            let step = remaining.min(FRAME_MILLIS);
            self.now_nanos += step * 1_000_000;
            self.controller.tick(self.now_nanos);
            remaining -= step;
        }
    }

    pub fn advance_frame(&mut self) {
        self.advance_millis(FRAME_MILLIS);
    }

    /// Drain and return every effect recorded so far.
    pub fn take_effects(&mut self) -> Vec<RecordedEffect> {
        self.effects.borrow_mut().drain(..).collect()
    }

    /// Categories committed so far, in order, without draining.
    pub fn committed_categories(&self) -> Vec<Category> {
        self.effects
            .borrow()
            .iter()
            .filter_map(|effect| match effect {
                RecordedEffect::Category(category) => Some(*category),
                _ => None,
            })
            .collect()
    }

    pub fn sounds(&self) -> Vec<SoundCue> {
        self.effects
            .borrow()
            .iter()
            .filter_map(|effect| match effect {
                RecordedEffect::Sound(cue) => Some(*cue),
                _ => None,
            })
            .collect()
    }

    /// Selection-enabled toggles, in order.
    pub fn selection_changes(&self) -> Vec<bool> {
        self.effects
            .borrow()
            .iter()
            .filter_map(|effect| match effect {
                RecordedEffect::Selection(enabled) => Some(*enabled),
                _ => None,
            })
            .collect()
    }

    pub fn frame_count(&self) -> usize {
        self.effects
            .borrow()
            .iter()
            .filter(|effect| matches!(effect, RecordedEffect::Frame(_)))
            .count()
    }

    pub fn last_frame(&self) -> Option<CurlFrame> {
        self.effects
            .borrow()
            .iter()
            .rev()
            .find_map(|effect| match effect {
                RecordedEffect::Frame(frame) => Some(frame.clone()),
                _ => None,
            })
    }
}
