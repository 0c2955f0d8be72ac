//! Flächen-Tracing über den ungerichteten Graph und Auswahl der Außenkontur.

use super::topology::Topology;
use crate::core::point::signed_area;
use crate::core::{Graph, Point, VertexId};
use crate::shared::options::AREA_EPSILON;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Geschlossener Umlauf aus dem Flächen-Tracing.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    /// Vertex-Folge ohne doppelten Schlusspunkt
    pub vertices: Vec<VertexId>,
    /// Vorzeichenbehaftete Fläche (> 0 = gegen den Uhrzeigersinn)
    pub signed_area: f64,
}

impl Face {
    /// Kein Vertex kommt mehrfach vor.
    pub fn is_simple(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.vertices.len());
        self.vertices.iter().all(|v| seen.insert(*v))
    }

    /// Kanten des Umlaufs als Vertex-Paare, inklusive Schlusskante
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Positionen der Vertices
    pub fn points(&self, graph: &Graph) -> Vec<Point> {
        self.vertices
            .iter()
            .filter_map(|&id| graph.vertex(id))
            .collect()
    }

    /// Gleiche Fläche gegen den Uhrzeigersinn
    pub fn counter_clockwise(&self) -> Face {
        if self.signed_area >= 0.0 {
            return self.clone();
        }
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Face {
            vertices,
            signed_area: -self.signed_area,
        }
    }

    /// Sortierte, eindeutige Vertex-IDs (Schlüssel für die Deduplizierung)
    fn key(&self) -> Vec<VertexId> {
        let mut key = self.vertices.clone();
        key.sort_unstable();
        key.dedup();
        key
    }
}

/// Folgt einem Halbkanten-Orbit bis zurück zur Start-Halbkante.
///
/// `None`, wenn das Schrittbudget erschöpft ist oder eine bereits besuchte
/// Halbkante erreicht wird.
fn trace_orbit(
    topo: &Topology,
    start: (VertexId, VertexId),
    visited: &mut HashSet<(VertexId, VertexId)>,
    budget: usize,
) -> Option<Vec<VertexId>> {
    let mut walk = vec![start.0];
    let (mut prev, mut current) = start;
    for _ in 0..budget {
        let next = topo.next_clockwise(current, prev)?;
        if (current, next) == start {
            return Some(walk);
        }
        if !visited.insert((current, next)) {
            return None;
        }
        walk.push(current);
        prev = current;
        current = next;
    }
    log::debug!(
        "Flächen-Tracing ab {} → {}: Schrittbudget {} erschöpft",
        start.0,
        start.1,
        budget
    );
    None
}

/// Verfolgt alle Flächen des ungerichteten Graphs.
///
/// Jede unbesuchte Halbkante startet einen Umlauf, der an jedem Vertex zum
/// nächsten Nachbarn im Uhrzeigersinn (relativ zur Ankunftsrichtung) abbiegt.
/// Beschränkte Flächen erhalten so positive, die Außenfläche negative
/// Orientierung. Umläufe mit weniger als 3 verschiedenen Vertices oder ohne
/// Fläche werden verworfen; Duplikate (gleiche Vertex-Menge) zusammengeführt,
/// wobei die positiv orientierte Variante gewinnt.
pub fn trace_faces(graph: &Graph, topo: &Topology, budget: usize) -> Vec<Face> {
    let mut visited: HashSet<(VertexId, VertexId)> = HashSet::new();
    let mut faces: IndexMap<Vec<VertexId>, Face> = IndexMap::new();

    for v in 0..topo.vertex_count() {
        for &n in topo.neighbors(v) {
            let start = (v, n);
            if !visited.insert(start) {
                continue;
            }
            let Some(walk) = trace_orbit(topo, start, &mut visited, budget) else {
                continue;
            };

            let points: Vec<Point> = walk.iter().map(|&id| graph.vertices[id]).collect();
            let face = Face {
                signed_area: signed_area(&points),
                vertices: walk,
            };
            let key = face.key();
            if key.len() < 3 || !(face.signed_area.abs() > AREA_EPSILON) {
                continue;
            }

            match faces.get(&key) {
                Some(existing) if existing.signed_area > 0.0 || face.signed_area < 0.0 => {}
                _ => {
                    faces.insert(key, face);
                }
            }
        }
    }

    faces.into_values().collect()
}

/// Index der Außenkontur: einfache Fläche mit maximalem Betrag der Fläche.
///
/// Bei Gleichstand gewinnt die zuerst gefundene Fläche.
pub fn select_boundary(faces: &[Face]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, face) in faces.iter().enumerate() {
        if !face.is_simple() {
            continue;
        }
        let area = face.signed_area.abs();
        if best.map_or(true, |(_, best_area)| area > best_area) {
            best = Some((idx, area));
        }
    }
    best.map(|(idx, _)| idx)
}
