//! Zerlegung eines Vertex/Kanten-Graphs in darstellbare Pfade.
//!
//! Ablauf pro Aufruf:
//! 1. Flächen-Tracing über den ungerichteten Graph, Außenkontur bestimmen
//! 2. Fortsetzungs-Paarung an inneren 2/2-Kreuzungen
//! 3. Iteratives Ablaufen aller Kanten (Außenkontur zuerst)
//!
//! Alle Arbeitsstrukturen leben nur für die Dauer eines Aufrufs.

pub mod faces;
pub mod junction;
pub mod topology;
mod walk;

use crate::core::{Graph, Path, VertexId};
use crate::shared::KernelOptions;
use std::collections::HashSet;

pub use faces::{select_boundary, trace_faces, Face};
pub use junction::{choose_pairing, pair_junctions, JunctionPairing, PairingChoice};
pub use topology::{EdgeIdx, Topology};

/// Grund, aus dem ein Pfad endet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Außenkontur, als geschlossener Umlauf ausgegeben
    Boundary,
    /// Zyklus, der an seinen Start-Vertex (Grad 2) zurückkehrt
    Closed,
    /// Vertex ohne weiterführende Kante
    Leaf,
    /// Nächste Kante wurde bereits von einem anderen Pfad belegt
    Revisited,
    /// Vertex mit 2 eingehenden und mehr als 2 ausgehenden Kanten
    AmbiguousJunction,
    /// Verzweigung: jede freie ausgehende Kante startet einen eigenen Pfad
    Branched,
}

/// Ein ausgegebener Pfad mit Endpunkt-Metadaten.
#[derive(Debug, Clone, PartialEq)]
pub struct TracedPath {
    /// Vertex-IDs in Laufrichtung (bei geschlossenen Pfaden ohne Wiederholung)
    pub vertices: Vec<VertexId>,
    /// Positionen der Vertices
    pub path: Path,
    /// Start-Vertex ist ein echtes Blatt (ungerichteter Grad 1)
    pub start_leaf: bool,
    /// End-Vertex ist ein echtes Blatt (ungerichteter Grad 1)
    pub end_leaf: bool,
    /// Pfad ist die Außenkontur
    pub boundary: bool,
    pub termination: Termination,
}

impl TracedPath {
    /// Start ist ein Kreuzungs-/Trimmpunkt
    pub fn trims_start(&self) -> bool {
        !self.path.closed && !self.start_leaf
    }

    /// Ende ist ein Kreuzungs-/Trimmpunkt
    pub fn trims_end(&self) -> bool {
        !self.path.closed && !self.end_leaf
    }
}

/// Ergebnis der Zerlegung.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decomposition {
    /// Außenkontur zuerst, danach alle übrigen Pfade in Ablaufreihenfolge
    pub paths: Vec<TracedPath>,
    /// Gewählte Außenkontur (gegen den Uhrzeigersinn)
    pub boundary: Option<Face>,
    /// Positiv orientierte Flächen außer der Außenkontur
    pub interior_faces: Vec<Face>,
}

/// Zerlegt einen Graph mit Standard-Optionen.
pub fn decompose_graph(graph: &Graph) -> Decomposition {
    decompose_graph_with(graph, &KernelOptions::default())
}

/// Zerlegt einen Graph in Pfade.
///
/// Ungültige Kanten werden übersprungen. Das Ergebnis hängt nur vom Graph ab;
/// wiederholte Aufrufe liefern identische Pfade.
pub fn decompose_graph_with(graph: &Graph, options: &KernelOptions) -> Decomposition {
    let topo = Topology::build(graph);

    let budget = options.face_step_budget(topo.valid_edges().count());
    let faces = trace_faces(graph, &topo, budget);
    let boundary_idx = select_boundary(&faces);

    let boundary = boundary_idx.map(|idx| faces[idx].counter_clockwise());
    let interior_faces: Vec<Face> = faces
        .iter()
        .enumerate()
        .filter(|(idx, face)| Some(*idx) != boundary_idx && face.signed_area > 0.0)
        .map(|(_, face)| face.clone())
        .collect();

    let boundary_vertices: HashSet<VertexId> = boundary
        .as_ref()
        .map(|face| face.vertices.iter().copied().collect())
        .unwrap_or_default();
    let pairing = pair_junctions(graph, &topo, &boundary_vertices, options.pairing_tie_epsilon);

    let mut walker = walk::Walker::new(graph, &topo, &pairing);
    if let Some(face) = &boundary {
        walker.emit_boundary(face);
    }
    let paths = walker.run();

    log::debug!(
        "Graph zerlegt: {} Vertices, {} Kanten → {} Pfade, {} Flächen (Außenkontur: {}), {} Kreuzungs-Paarungen",
        graph.vertex_count(),
        graph.edge_count(),
        paths.len(),
        faces.len(),
        boundary.is_some(),
        pairing.len()
    );

    Decomposition {
        paths,
        boundary,
        interior_faces,
    }
}

#[cfg(test)]
mod tests;
