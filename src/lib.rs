// slider_core: positioning engine for a stepwise DOM slider.
// All "magic" lives in the core (geometry, limits, movement state); the DOM
// layer is plumbing that measures once and applies inline styles.

mod controller;
mod error;
mod geometry;
mod types;

#[cfg(target_arch = "wasm32")]
mod dom;

pub use controller::{Slider, TrackSurface};
pub use error::SliderError;
pub use geometry::{justification_gap, next_offset, travel_limit, within_limits};
pub use types::*;

#[cfg(target_arch = "wasm32")]
pub use dom::WasmSlider;
