// SPDX-License-Identifier: MPL-2.0
//! Core slider domain: layers, divider constraints, and clip spans.

pub mod clip;
pub mod constraints;
mod layer;
mod newtypes;

pub use clip::{clip_spans, visible_spans, ClipSpan};
pub use constraints::{apply_move, initial_positions, Constraints};
pub use layer::{Layer, LayerStack};
pub use newtypes::{
    compare_height_bounds, edge_buffer_bounds, separation_bounds, CompareHeight, EdgeBuffer,
    MinSeparation,
};
