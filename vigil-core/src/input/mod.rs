//! Event intake: debounced edges and cross-context event flags

pub mod debounce;
pub mod flags;

pub use debounce::{DebounceWindow, DebouncedEdge, EdgePolarity};
pub use flags::EventFlags;
