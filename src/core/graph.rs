//! Vertex/Kanten-Graph für verzweigte Topologien.

use super::Point;
use serde::{Deserialize, Serialize};

/// Stabile Vertex-ID (Index in `Graph::vertices`).
pub type VertexId = usize;

/// Graph aus Vertices und gerichteten Kanten.
///
/// Eine logische ungerichtete Kante darf in beiden Richtungen oder nur in einer
/// enthalten sein. Alle abgeleiteten Strukturen werden über `VertexId` adressiert.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Graph {
    /// Alle Vertex-Positionen, indexiert nach ihrer ID
    pub vertices: Vec<Point>,
    /// Gerichtete Kanten `(from, to)` in Einfügereihenfolge
    pub edges: Vec<(VertexId, VertexId)>,
}

impl Graph {
    /// Erstellt einen leeren Graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen Graph aus Vertices und Kanten
    pub fn from_parts(vertices: Vec<Point>, edges: Vec<(VertexId, VertexId)>) -> Self {
        Self { vertices, edges }
    }

    /// Fügt einen Vertex hinzu und gibt seine ID zurück
    pub fn add_vertex(&mut self, position: Point) -> VertexId {
        self.vertices.push(position);
        self.vertices.len() - 1
    }

    /// Fügt eine gerichtete Kante hinzu
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) {
        self.edges.push((from, to));
    }

    /// Fügt beide Richtungen einer logischen Kante hinzu
    pub fn add_undirected_edge(&mut self, a: VertexId, b: VertexId) {
        self.edges.push((a, b));
        self.edges.push((b, a));
    }

    /// Position eines Vertex
    pub fn vertex(&self, id: VertexId) -> Option<Point> {
        self.vertices.get(id).copied()
    }

    /// Gibt die Anzahl der Vertices zurück
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Gibt die Anzahl der Kanten zurück
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Prüft ob eine Kante traversierbar ist (beide IDs gültig, keine Schleife).
    pub fn is_valid_edge(&self, from: VertexId, to: VertexId) -> bool {
        from != to && from < self.vertices.len() && to < self.vertices.len()
    }

    /// Strikte Prüfung für Aufrufer, die fehlerhafte Graphen ablehnen wollen.
    ///
    /// Die Zerlegung selbst toleriert ungültige Kanten und überspringt sie.
    pub fn validate(&self) -> anyhow::Result<()> {
        let invalid: Vec<String> = self
            .edges
            .iter()
            .filter(|&&(from, to)| !self.is_valid_edge(from, to))
            .map(|(from, to)| format!("{}→{}", from, to))
            .collect();
        if !invalid.is_empty() {
            anyhow::bail!(
                "{} ungültige Kante(n) bei {} Vertices: {}",
                invalid.len(),
                self.vertices.len(),
                invalid.join(", ")
            );
        }
        if let Some(id) = self.vertices.iter().position(|p| !p.is_finite()) {
            anyhow::bail!("Vertex {} hat keine endliche Position", id);
        }
        Ok(())
    }
}
