//! Corner-curl drag interaction for the pagefold works page.
//!
//! Four screen corners carry a folded-corner affordance; dragging one toward
//! the page center grows the fold, and releasing past a threshold commits to
//! a full-screen expansion that navigates to the corner's category. This
//! crate owns the gesture state machine and the settle animations; rendering
//! and navigation are delegated to the host page through [`CurlHost`].

mod controller;
mod drag_guide;
mod gesture_constants;
mod host;
mod input;
mod session;

pub use controller::*;
pub use drag_guide::*;
pub use gesture_constants::*;
pub use host::*;
pub use input::*;
pub use session::*;

pub mod prelude {
    pub use crate::controller::CurlController;
    pub use crate::host::{CurlFrame, CurlHost, SoundCue};
    pub use crate::input::{PointerEvent, PointerEventKind};
    pub use crate::session::{CommitOutcome, DragPhase, DragSession};
    pub use pagefold_geometry::prelude::*;
}
