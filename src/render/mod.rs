//! Board rendering.

pub mod textual;

pub use textual::TextualView;
