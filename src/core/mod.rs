//! Core-Domänentypen: Punkte, Pfade und Graphen.

pub mod graph;
pub mod path;
/// Vektor-Primitive, die von allen Evaluatoren und der Graph-Zerlegung genutzt werden
pub mod point;

pub use graph::{Graph, VertexId};
pub use path::Path;
pub use point::Point;
