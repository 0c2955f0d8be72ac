//! Auswertung zerlegter Graphen zu darstellbaren Polylines.
//!
//! Interpolierende Kurven (linear, Catmull-Rom, B-Spline Grad 1) werden an
//! Kreuzungsenden zum Nachbarpunkt hin gekürzt und über ein gerades Stück
//! wieder an den Kreuzungs-Vertex angebunden. So entsteht am Kreuzungspunkt
//! kein Knick durch die Randtangente. Approximierende Kurven bleiben unverändert.

use crate::core::{Graph, Path, Point};
use crate::curves::{evaluate_curve, CurveStyle};
use crate::decompose::{decompose_graph_with, TracedPath};
use crate::shared::KernelOptions;

/// Ausgewerteter Pfad eines Graphs.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPath {
    pub points: Vec<Point>,
    pub closed: bool,
    /// Außenkontur des Graphs
    pub boundary: bool,
}

/// Alle ausgewerteten Pfade plus Füllflächen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedGraph {
    pub paths: Vec<RenderedPath>,
    /// Innere Flächen als Punktringe (ohne doppelten Schlusspunkt)
    pub interior_faces: Vec<Vec<Point>>,
    /// Außenkontur als Punktring
    pub boundary: Option<Vec<Point>>,
}

/// Wertet einen zerlegten Pfad aus und kürzt dabei Kreuzungsenden.
///
/// `trim_fraction` (0..1) ist der Anteil der Randkante, um den der
/// Kreuzungs-Vertex vor der Auswertung Richtung Nachbar verschoben wird.
pub fn render_traced_path(traced: &TracedPath, style: &CurveStyle, trim_fraction: f64) -> Vec<Point> {
    let path = &traced.path;
    let trim = if trim_fraction.is_finite() {
        trim_fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (trim_start, trim_end) = (traced.trims_start(), traced.trims_end());

    if !style.is_interpolating() || path.len() < 3 || trim <= 0.0 || !(trim_start || trim_end) {
        return evaluate_curve(path, style);
    }

    let n = path.len();
    let mut trimmed = path.points.clone();
    if trim_start {
        trimmed[0] = path.points[0].lerp(path.points[1], trim);
    }
    if trim_end {
        trimmed[n - 1] = path.points[n - 1].lerp(path.points[n - 2], trim);
    }

    let curve = evaluate_curve(&Path::open(trimmed), style);
    let mut result = Vec::with_capacity(curve.len() + 2);
    if trim_start {
        result.push(path.points[0]);
    }
    result.extend(curve);
    if trim_end {
        result.push(path.points[n - 1]);
    }
    result
}

/// Zerlegt den Graph und wertet jeden Pfad mit `style` aus.
pub fn render_graph(graph: &Graph, style: &CurveStyle, options: &KernelOptions) -> RenderedGraph {
    let decomposition = decompose_graph_with(graph, options);
    let trim = options.trim_fraction();

    let paths = decomposition
        .paths
        .iter()
        .map(|traced| RenderedPath {
            points: render_traced_path(traced, style, trim),
            closed: traced.path.closed,
            boundary: traced.boundary,
        })
        .collect();

    RenderedGraph {
        paths,
        interior_faces: decomposition
            .interior_faces
            .iter()
            .map(|face| face.points(graph))
            .collect(),
        boundary: decomposition.boundary.map(|face| face.points(graph)),
    }
}
