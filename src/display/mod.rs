//! Art loading, color placeholders and the two-column layout

pub mod art;
pub mod compositor;
pub mod placeholder;

pub use art::{ArtDocument, ArtSource};
pub use compositor::Compositor;
pub use placeholder::PlaceholderRegistry;
