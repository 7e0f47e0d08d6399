//! The works catalog behind the corner galleries.
//!
//! Content arrives as hand-edited JSON, so every field is treated as
//! untrusted: [`Catalog::from_json`] normalizes whatever shape it finds into
//! the typed model, and a built-in fallback catalog keeps the galleries
//! populated when the content file is missing or unusable.

pub mod catalog;
pub mod model;

pub use catalog::Catalog;
pub use model::{WorkItem, WorkLink};

pub mod prelude {
    pub use crate::catalog::Catalog;
    pub use crate::model::{WorkItem, WorkLink};
}
