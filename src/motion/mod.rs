//! Scroll-scene engine: piecewise-linear curves, scene definitions with
//! activation windows, a sequencer that turns one progress value into a
//! frame of per-scene property values, and a viewport binder that feeds it
//! from real scroll position.

pub mod binder;
pub mod curve;
pub mod scene;
pub mod sequencer;

pub use binder::ViewportBinder;
pub use scene::Scene;
pub use sequencer::{Sequencer, SequencerFrame};
