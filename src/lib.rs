//! Curve Kernel Library.
//! Kurven-Evaluatoren, Eckenrundung und Graph-Zerlegung für Zeichen- und Editor-Frontends.

pub mod core;
pub mod curves;
pub mod decompose;
pub mod render;
pub mod shared;

pub use core::{Graph, Path, Point, VertexId};
pub use curves::{evaluate_curve, CurveStyle, RadiusMode};
pub use decompose::{
    decompose_graph, decompose_graph_with, Decomposition, Face, Termination, TracedPath,
};
pub use render::{render_graph, render_traced_path, RenderedGraph, RenderedPath};
pub use shared::KernelOptions;
