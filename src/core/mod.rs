//! Pure behavior logic, free of wasm and DOM types so the host-side tests in
//! `tests/` can include these files directly.

pub mod band;
pub mod gaze;
pub mod notes;
pub mod reveal;
pub mod toc;

pub use band::*;
pub use gaze::*;
pub use notes::*;
pub use reveal::*;
pub use toc::*;
