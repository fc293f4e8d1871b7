//! Synthesized street/block layout drawn behind the marker

pub mod synth;

pub use synth::{CellKind, Cells, GridCell, GridSynthesizer, RoadOrientation, RoadSegment, Roads};
