//! Gerichtete und ungerichtete Adjazenz eines Graphs.

use crate::core::point::polar_angle;
use crate::core::{Graph, VertexId};
use std::collections::HashMap;

/// Index einer Kante in `Graph::edges`.
pub type EdgeIdx = usize;

/// Aus einem Graph abgeleitete Nachbarschaften, nur über gültige Kanten.
///
/// Ungültige Kanten (unbekannte Vertex-ID oder Schleife) tauchen in keiner
/// Liste auf. Alle Listen sind deterministisch sortiert.
#[derive(Debug, Clone)]
pub struct Topology {
    edges: Vec<(VertexId, VertexId)>,
    valid: Vec<bool>,
    /// Ausgehende Kanten pro Vertex (aufsteigender Kantenindex)
    outgoing: Vec<Vec<EdgeIdx>>,
    /// Eingehende Kanten pro Vertex (aufsteigender Kantenindex)
    incoming: Vec<Vec<EdgeIdx>>,
    /// Ungerichtete Nachbarn pro Vertex, nach Polarwinkel aufsteigend sortiert
    neighbors: Vec<Vec<VertexId>>,
    /// Alle Kantenindizes pro gerichtetem Vertex-Paar
    by_pair: HashMap<(VertexId, VertexId), Vec<EdgeIdx>>,
}

impl Topology {
    /// Baut die Adjazenz auf. Ungültige Kanten werden mit `warn!` übersprungen.
    pub fn build(graph: &Graph) -> Self {
        let vertex_count = graph.vertex_count();
        let mut outgoing = vec![Vec::new(); vertex_count];
        let mut incoming = vec![Vec::new(); vertex_count];
        let mut neighbors: Vec<Vec<VertexId>> = vec![Vec::new(); vertex_count];
        let mut by_pair: HashMap<(VertexId, VertexId), Vec<EdgeIdx>> = HashMap::new();
        let mut valid = Vec::with_capacity(graph.edge_count());

        for (idx, &(from, to)) in graph.edges.iter().enumerate() {
            if !graph.is_valid_edge(from, to) {
                log::warn!(
                    "Kante {} ({} → {}) ignoriert: ungültige Vertex-ID oder Schleife ({} Vertices)",
                    idx,
                    from,
                    to,
                    vertex_count
                );
                valid.push(false);
                continue;
            }
            valid.push(true);
            outgoing[from].push(idx);
            incoming[to].push(idx);
            by_pair.entry((from, to)).or_default().push(idx);
            if !neighbors[from].contains(&to) {
                neighbors[from].push(to);
            }
            if !neighbors[to].contains(&from) {
                neighbors[to].push(from);
            }
        }

        for (v, list) in neighbors.iter_mut().enumerate() {
            let origin = graph.vertices[v];
            list.sort_by(|&a, &b| {
                let angle_a = polar_angle(graph.vertices[a] - origin);
                let angle_b = polar_angle(graph.vertices[b] - origin);
                angle_a.total_cmp(&angle_b).then(a.cmp(&b))
            });
        }

        Self {
            edges: graph.edges.clone(),
            valid,
            outgoing,
            incoming,
            neighbors,
            by_pair,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Alle Kantenindizes inklusive ungültiger Kanten
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Prüft ob die Kante am Aufbau beteiligt ist
    pub fn is_valid(&self, edge: EdgeIdx) -> bool {
        self.valid.get(edge).copied().unwrap_or(false)
    }

    /// Start- und End-Vertex einer Kante
    pub fn endpoints(&self, edge: EdgeIdx) -> (VertexId, VertexId) {
        self.edges[edge]
    }

    pub fn source(&self, edge: EdgeIdx) -> VertexId {
        self.edges[edge].0
    }

    pub fn target(&self, edge: EdgeIdx) -> VertexId {
        self.edges[edge].1
    }

    /// Gültige Kantenindizes in Einfügereihenfolge
    pub fn valid_edges(&self) -> impl Iterator<Item = EdgeIdx> + '_ {
        (0..self.edges.len()).filter(|&e| self.valid[e])
    }

    pub fn outgoing(&self, v: VertexId) -> &[EdgeIdx] {
        &self.outgoing[v]
    }

    pub fn incoming(&self, v: VertexId) -> &[EdgeIdx] {
        &self.incoming[v]
    }

    pub fn out_degree(&self, v: VertexId) -> usize {
        self.outgoing[v].len()
    }

    pub fn in_degree(&self, v: VertexId) -> usize {
        self.incoming[v].len()
    }

    /// Nachbarn im ungerichteten Graph, gegen den Uhrzeigersinn sortiert
    pub fn neighbors(&self, v: VertexId) -> &[VertexId] {
        &self.neighbors[v]
    }

    /// Anzahl verschiedener Nachbarn (1 = Blatt, 2 = Durchgang, > 2 = Kreuzung)
    pub fn degree(&self, v: VertexId) -> usize {
        self.neighbors[v].len()
    }

    pub fn is_leaf(&self, v: VertexId) -> bool {
        self.degree(v) == 1
    }

    /// Alle Kanten `from → to`
    pub fn edges_between(&self, from: VertexId, to: VertexId) -> &[EdgeIdx] {
        self.by_pair
            .get(&(from, to))
            .map(|edges| edges.as_slice())
            .unwrap_or(&[])
    }

    /// Kanten in Gegenrichtung zu `edge`
    pub fn reverse_edges(&self, edge: EdgeIdx) -> &[EdgeIdx] {
        let (from, to) = self.edges[edge];
        self.edges_between(to, from)
    }

    /// Nächster Nachbar im Uhrzeigersinn, ausgehend von der Richtung zurück zu `prev`.
    ///
    /// Liefert bei Grad 1 wieder `prev` (Umkehr an einem Blatt).
    pub fn next_clockwise(&self, current: VertexId, prev: VertexId) -> Option<VertexId> {
        let list = &self.neighbors[current];
        let idx = list.iter().position(|&n| n == prev)?;
        Some(list[(idx + list.len() - 1) % list.len()])
    }
}
