//! The seam between the interaction core and the page that renders it.

use pagefold_geometry::{BorderWidths, Category, ClipGeometry, CornerId, CurlSizes};

/// Sound effects the host's audio service knows by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    PageCurlStart,
}

impl SoundCue {
    /// Key understood by the host audio manager.
    pub const fn as_str(self) -> &'static str {
        match self {
            SoundCue::PageCurlStart => "pageCurlStart",
        }
    }
}

/// One visual update: everything the host needs to style the page
/// background clip, the four fold elements, and their shadows.
#[derive(Clone, Debug, PartialEq)]
pub struct CurlFrame {
    pub sizes: CurlSizes,
    pub clip: ClipGeometry,
    /// Fold-element border widths, indexed by [`CornerId::index`].
    pub borders: [BorderWidths; 4],
}

impl CurlFrame {
    pub fn border_for(&self, corner: CornerId) -> BorderWidths {
        self.borders[corner.index()]
    }
}

/// Side effects the controller invokes on its host page.
///
/// Every call must tolerate missing page elements by doing nothing; the
/// interaction degrades silently rather than interrupting the page.
pub trait CurlHost {
    /// Apply a visual update. Called on every pointer move and animation
    /// tick, so implementations should be cheap.
    fn apply_frame(&mut self, frame: &CurlFrame);

    /// Play a named sound effect through the external audio service.
    fn play_sound(&mut self, cue: SoundCue);

    /// Enable or disable text selection page-wide. Disabled for the length
    /// of a drag and restored on every exit path.
    fn set_selection_enabled(&mut self, enabled: bool);

    /// A commit finished expanding; show the gallery for this category.
    fn category_selected(&mut self, category: Category);
}
