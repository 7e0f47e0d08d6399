//! The curl controller: owns the corner sizes, the drag state machine, and
//! the settle animations.

use pagefold_animation::{TimerHandle, TimerQueue, Tween, TweenSpec};
use pagefold_geometry::{
    border_widths, clamp, compose, hit_corner, BorderWidths, CornerId, CurlConfig, CurlSize,
    CurlSizes, Point, Viewport,
};

use crate::gesture_constants::DRAG_SLOP;
use crate::host::{CurlFrame, CurlHost, SoundCue};
use crate::input::{PointerEvent, PointerEventKind};
use crate::session::{CommitOutcome, DragPhase, DragSession};

/// Snap-back settle after a tap or an under-threshold release.
const SNAP_BACK_SECS: f32 = 0.15;
/// Uniform reset used for resize and for gallery-close without an active corner.
const UNIFORM_RESET_SECS: f32 = 0.3;
/// Commit expansion length.
const EXPAND_SECS: f32 = 0.6;
/// The expanded fold must cover the page from any corner; 1.5 diagonals
/// leaves margin for the fold's diagonal edge.
const EXPAND_DIAGONAL_FACTOR: f32 = 1.5;
/// Staggered reset: the active corner un-folds first over this duration.
const STAGGER_SECS: f32 = 0.35;
/// Gap between the active corner's settle and its siblings reappearing.
const STAGGER_EXTRA_MILLIS: u64 = 80;

/// Delayed work owned by the controller's timer queue.
#[derive(Clone, Copy, Debug, PartialEq)]
enum DeferredAction {
    /// Second half of a staggered reset: zero the three non-active corners,
    /// then tween them back to resting size.
    RestoreSiblings {
        active: CornerId,
        duration_secs: f32,
    },
}

/// One instance per gallery page. Owns the authoritative [`CurlSizes`] and
/// the current [`CurlConfig`]; all host-visible effects route through the
/// [`CurlHost`] it was built with.
///
/// The controller is single-threaded and clock-driven: the host forwards
/// pointer events as they arrive and calls [`CurlController::tick`] once per
/// frame with a monotonic nanosecond timestamp.
pub struct CurlController<H: CurlHost> {
    host: H,
    viewport: Viewport,
    config: CurlConfig,
    sizes: CurlSizes,
    phase: DragPhase,
    session: Option<DragSession>,
    tweens: [Option<Tween<CurlSize>>; 4],
    timers: TimerQueue<DeferredAction>,
    stagger_handle: Option<TimerHandle>,
    committing_corner: Option<CornerId>,
    active_corner: Option<CornerId>,
    now_nanos: u64,
}

impl<H: CurlHost> CurlController<H> {
    pub fn new(host: H, viewport: Viewport) -> Self {
        let config = CurlConfig::for_viewport(viewport);
        let mut controller = Self {
            host,
            viewport,
            config,
            sizes: CurlSizes::resting(&config),
            phase: DragPhase::Idle,
            session: None,
            tweens: [None; 4],
            timers: TimerQueue::new(),
            stagger_handle: None,
            committing_corner: None,
            active_corner: None,
            now_nanos: 0,
        };
        controller.emit_frame();
        controller
    }

    pub fn sizes(&self) -> &CurlSizes {
        &self.sizes
    }

    pub fn config(&self) -> &CurlConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Which corner is currently in the expanded, gallery-open state.
    pub fn active_corner(&self) -> Option<CornerId> {
        self.active_corner
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Route a raw pointer event. Downs are hit-tested against the current
    /// fold extents; moves and ups go to whatever session is active.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event.kind {
            PointerEventKind::Down => {
                if let Some(corner) = hit_corner(&self.sizes, self.viewport, event.position) {
                    self.pointer_down(corner, event.position);
                }
            }
            PointerEventKind::Move => self.pointer_move(event.position),
            PointerEventKind::Up => self.pointer_up(),
            PointerEventKind::Cancel => self.pointer_cancel(),
        }
    }

    /// Begin a drag session on `corner`.
    ///
    /// Ignored while a session is already active or while a commit expansion
    /// is in flight. A pending reset does not block: its remaining work is
    /// settled instantly and the new session continues from wherever the
    /// pressed corner currently is.
    pub fn pointer_down(&mut self, corner: CornerId, point: Point) {
        if self.session.is_some() {
            log::debug!("pointer down on {} ignored: session active", corner.as_str());
            return;
        }
        if self.phase == DragPhase::Committing {
            log::debug!(
                "pointer down on {} ignored: commit expansion in flight",
                corner.as_str()
            );
            return;
        }
        if self.phase == DragPhase::Resetting {
            self.settle_pending_resets(corner);
        }

        self.session = Some(DragSession::new(corner, point, self.sizes.get(corner)));
        self.phase = DragPhase::Dragging;
        self.host.play_sound(SoundCue::PageCurlStart);
        self.host.set_selection_enabled(false);
    }

    /// Grow or shrink the dragged corner. No-op outside a drag.
    pub fn pointer_move(&mut self, point: Point) {
        if self.phase != DragPhase::Dragging {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let dx = point.x - session.start.x;
        let dy = point.y - session.start.y;
        if dx.abs() > DRAG_SLOP || dy.abs() > DRAG_SLOP {
            session.has_moved = true;
        }

        let (sign_x, sign_y) = session.corner.delta_signs();
        let min = self.config.min_size as f32;
        let max = self.config.max_size as f32;
        let size = CurlSize::new(
            clamp(session.base.x + sign_x * dx, min, max),
            clamp(session.base.y + sign_y * dy, min, max),
        );
        self.sizes.set(session.corner, size);
        self.emit_frame();
    }

    /// End the drag session: tap and under-threshold releases snap back,
    /// past-threshold releases commit.
    pub fn pointer_up(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        self.host.set_selection_enabled(true);

        let corner = session.corner;
        let average = self.sizes.get(corner).average();
        let threshold = self.config.threshold as f32;
        match CommitOutcome::decide(session.has_moved, average, threshold) {
            CommitOutcome::Tap | CommitOutcome::Cancel => {
                self.begin_corner_reset(corner, SNAP_BACK_SECS);
            }
            CommitOutcome::Commit => self.begin_commit(corner),
        }
    }

    /// Abort the drag session (e.g. touch cancelled by the browser) and
    /// snap the corner back.
    pub fn pointer_cancel(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        self.host.set_selection_enabled(true);
        self.begin_corner_reset(session.corner, SNAP_BACK_SECS);
    }

    /// Viewport changed: recompute the responsive config and settle every
    /// corner at the new resting size. An in-flight drag is aborted.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if self.session.take().is_some() {
            self.host.set_selection_enabled(true);
        }
        self.reset_all(UNIFORM_RESET_SECS);
    }

    /// The gallery opened by the last commit was closed. Resets staggered
    /// from the corner that opened it, or uniformly if none is recorded,
    /// and clears the marker either way.
    pub fn gallery_closed(&mut self) {
        match self.active_corner.take() {
            Some(active) => self.reset_staggered(active, STAGGER_SECS),
            None => self.reset_all(UNIFORM_RESET_SECS),
        }
    }

    /// Animate every corner to the resting size simultaneously. A
    /// non-positive duration snaps instead of animating.
    pub fn reset_all(&mut self, duration_secs: f32) {
        self.cancel_pending_animations();
        self.config = CurlConfig::for_viewport(self.viewport);
        let resting = CurlSize::splat(self.config.initial_size as f32);

        if duration_secs <= 0.0 {
            self.sizes.set_all(resting);
            self.phase = DragPhase::Idle;
            self.emit_frame();
            return;
        }

        for corner in CornerId::ALL {
            self.start_tween(corner, resting, TweenSpec::for_duration_secs(duration_secs));
        }
        self.phase = DragPhase::Resetting;
    }

    /// Animate the previously expanded corner back first; once it has
    /// settled (plus a small gap), snap its siblings to zero and animate
    /// them back over the same duration. This keeps the just-closed
    /// gallery's originating corner visually leading the reset.
    pub fn reset_staggered(&mut self, active: CornerId, duration_secs: f32) {
        self.cancel_pending_animations();
        self.config = CurlConfig::for_viewport(self.viewport);
        let resting = CurlSize::splat(self.config.initial_size as f32);

        self.start_tween(active, resting, TweenSpec::for_duration_secs(duration_secs));
        let delay = (duration_secs * 1000.0).round() as u64 + STAGGER_EXTRA_MILLIS;
        let handle = self.timers.schedule_millis(
            delay,
            self.now_nanos,
            DeferredAction::RestoreSiblings {
                active,
                duration_secs,
            },
        );
        self.stagger_handle = Some(handle);
        self.phase = DragPhase::Resetting;
    }

    /// Advance animations and timers to `now_nanos`. The host calls this
    /// once per frame; pointer events between ticks use the last tick's
    /// timestamp as their animation start time.
    pub fn tick(&mut self, now_nanos: u64) {
        self.now_nanos = now_nanos;

        for action in self.timers.fire_due(now_nanos) {
            self.apply_deferred(action);
        }

        let mut sampled = false;
        for corner in CornerId::ALL {
            let slot = &mut self.tweens[corner.index()];
            if let Some(tween) = slot {
                self.sizes.set(corner, tween.sample(now_nanos));
                if tween.is_finished(now_nanos) {
                    *slot = None;
                }
                sampled = true;
            }
        }
        if sampled {
            self.emit_frame();
        }

        match self.phase {
            DragPhase::Committing => {
                if let Some(corner) = self.committing_corner {
                    if self.tweens[corner.index()].is_none() {
                        self.committing_corner = None;
                        self.active_corner = Some(corner);
                        self.phase = DragPhase::Idle;
                        self.host.category_selected(corner.category());
                    }
                }
            }
            DragPhase::Resetting => {
                let settled =
                    self.tweens.iter().all(Option::is_none) && !self.timers.has_pending();
                if settled {
                    self.phase = DragPhase::Idle;
                }
            }
            DragPhase::Idle | DragPhase::Dragging => {}
        }
    }

    /// Snap one corner back to the resting size.
    fn begin_corner_reset(&mut self, corner: CornerId, duration_secs: f32) {
        let resting = CurlSize::splat(self.config.initial_size as f32);
        self.start_tween(corner, resting, TweenSpec::for_duration_secs(duration_secs));
        self.phase = DragPhase::Resetting;
    }

    /// Commit: the losing corners vanish instantly so the winner's region
    /// can own the whole page, then the winner expands past the viewport
    /// diagonal. The category event fires when the expansion completes.
    fn begin_commit(&mut self, corner: CornerId) {
        for other in CornerId::ALL {
            if other != corner {
                self.tweens[other.index()] = None;
                self.sizes.set(other, CurlSize::ZERO);
            }
        }

        let full = (self.viewport.diagonal() * EXPAND_DIAGONAL_FACTOR).ceil();
        self.start_tween(
            corner,
            CurlSize::splat(full),
            TweenSpec::for_duration_secs(EXPAND_SECS),
        );
        self.committing_corner = Some(corner);
        self.phase = DragPhase::Committing;
        self.emit_frame();
    }

    /// A new gesture is claiming the corners while a reset is pending:
    /// finish the reset's remaining work instantly. The pressed corner
    /// freezes at its current sampled value so the drag continues from
    /// there; every other corner jumps to its settle target.
    fn settle_pending_resets(&mut self, pressed: CornerId) {
        let stagger_was_pending = match self.stagger_handle.take() {
            Some(handle) => {
                let pending = !handle.is_cancelled();
                handle.cancel();
                pending
            }
            None => false,
        };

        let resting = CurlSize::splat(self.config.initial_size as f32);
        for corner in CornerId::ALL {
            let slot = &mut self.tweens[corner.index()];
            if corner == pressed {
                if let Some(tween) = slot.take() {
                    self.sizes.set(corner, tween.sample(self.now_nanos));
                }
            } else if let Some(tween) = slot.take() {
                self.sizes.set(corner, tween.target());
            } else if stagger_was_pending {
                // Still waiting on the sibling-restore timer; their settle
                // target is the resting size.
                self.sizes.set(corner, resting);
            }
        }
        self.emit_frame();
    }

    fn apply_deferred(&mut self, action: DeferredAction) {
        match action {
            DeferredAction::RestoreSiblings {
                active,
                duration_secs,
            } => {
                self.stagger_handle = None;
                let resting = CurlSize::splat(self.config.initial_size as f32);
                for corner in CornerId::ALL {
                    if corner != active {
                        self.sizes.set(corner, CurlSize::ZERO);
                        self.start_tween(
                            corner,
                            resting,
                            TweenSpec::for_duration_secs(duration_secs),
                        );
                    }
                }
                self.emit_frame();
            }
        }
    }

    fn cancel_pending_animations(&mut self) {
        if let Some(handle) = self.stagger_handle.take() {
            handle.cancel();
        }
        self.tweens = [None; 4];
    }

    fn start_tween(&mut self, corner: CornerId, to: CurlSize, spec: TweenSpec) {
        let from = self.sizes.get(corner);
        self.tweens[corner.index()] = Some(Tween::new(from, to, spec, self.now_nanos));
    }

    fn emit_frame(&mut self) {
        let clip = compose(&self.sizes, self.viewport);
        let mut borders = [BorderWidths::default(); 4];
        for corner in CornerId::ALL {
            borders[corner.index()] = border_widths(corner, self.sizes.get(corner));
        }
        self.host.apply_frame(&CurlFrame {
            sizes: self.sizes,
            clip,
            borders,
        });
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
