//! Iterativer Pfad-Walker über die gerichteten Kanten.

use super::faces::Face;
use super::junction::JunctionPairing;
use super::topology::{EdgeIdx, Topology};
use super::{Termination, TracedPath};
use crate::core::{Graph, Path, VertexId};
use std::collections::{HashSet, VecDeque};

/// Zustand eines Durchlaufs: besuchte Kanten und Arbeitsliste.
pub(super) struct Walker<'a> {
    graph: &'a Graph,
    topo: &'a Topology,
    pairing: &'a JunctionPairing,
    boundary_edges: HashSet<EdgeIdx>,
    visited: Vec<bool>,
    queue: VecDeque<EdgeIdx>,
    paths: Vec<TracedPath>,
}

impl<'a> Walker<'a> {
    pub(super) fn new(graph: &'a Graph, topo: &'a Topology, pairing: &'a JunctionPairing) -> Self {
        Self {
            graph,
            topo,
            pairing,
            boundary_edges: HashSet::new(),
            visited: vec![false; topo.edge_count()],
            queue: VecDeque::new(),
            paths: Vec::new(),
        }
    }

    /// Markiert eine Kante und alle Kanten in Gegenrichtung als besucht.
    fn consume(&mut self, edge: EdgeIdx) {
        self.visited[edge] = true;
        for &rev in self.topo.reverse_edges(edge) {
            self.visited[rev] = true;
        }
    }

    /// Gibt die Außenkontur als geschlossenen Pfad aus und sperrt ihre Kanten
    /// (beide Richtungen) für alle weiteren Pfade.
    pub(super) fn emit_boundary(&mut self, face: &Face) {
        let topo = self.topo;
        let face = face.counter_clockwise();
        for (a, b) in face.edges() {
            for &e in topo.edges_between(a, b).iter().chain(topo.edges_between(b, a)) {
                self.boundary_edges.insert(e);
                self.visited[e] = true;
            }
        }
        let points = face.points(self.graph);
        self.paths.push(TracedPath {
            vertices: face.vertices,
            path: Path {
                points,
                closed: true,
            },
            start_leaf: false,
            end_leaf: false,
            boundary: true,
            termination: Termination::Boundary,
        });
    }

    /// Reihenfolge der Startkanten: Quellen (Eingangsgrad 0), Blätter, danach
    /// alle übrigen Kanten in Einfügereihenfolge.
    fn roots(&self) -> Vec<EdgeIdx> {
        let topo = self.topo;
        let sources = (0..topo.vertex_count())
            .filter(|&v| topo.in_degree(v) == 0)
            .flat_map(|v| topo.outgoing(v).iter().copied());
        let leaves = (0..topo.vertex_count())
            .filter(|&v| topo.is_leaf(v))
            .flat_map(|v| topo.outgoing(v).iter().copied());
        sources.chain(leaves).chain(topo.valid_edges()).collect()
    }

    /// Läuft alle Wurzeln ab; Verzweigungen werden direkt nach ihrer Wurzel abgearbeitet.
    pub(super) fn run(mut self) -> Vec<TracedPath> {
        for root in self.roots() {
            if self.visited[root] {
                continue;
            }
            self.queue.push_back(root);
            while let Some(edge) = self.queue.pop_front() {
                if self.visited[edge] {
                    continue;
                }
                let traced = self.walk(edge);
                self.paths.push(traced);
            }
        }
        self.paths
    }

    /// Folgt einem Pfad ab `first` bis zu einem Abbruchgrund.
    fn walk(&mut self, first: EdgeIdx) -> TracedPath {
        let topo = self.topo;
        let (start, second) = topo.endpoints(first);
        let mut vertices = vec![start, second];
        self.consume(first);
        let mut current = first;

        let termination = loop {
            let v = topo.target(current);

            if let Some(&next) = self.pairing.get(&current) {
                if self.visited[next] {
                    break Termination::Revisited;
                }
                self.consume(next);
                vertices.push(topo.target(next));
                current = next;
                continue;
            }

            let outgoing = topo.outgoing(v);
            if outgoing.is_empty() {
                break Termination::Leaf;
            }
            if topo.in_degree(v) == 2 && outgoing.len() > 2 {
                break Termination::AmbiguousJunction;
            }

            let candidates: Vec<EdgeIdx> = outgoing
                .iter()
                .copied()
                .filter(|e| !self.visited[*e] && !self.boundary_edges.contains(e))
                .collect();
            match candidates.as_slice() {
                [] if topo.is_leaf(v) => break Termination::Leaf,
                [] => break Termination::Revisited,
                [next] => {
                    self.consume(*next);
                    vertices.push(topo.target(*next));
                    current = *next;
                }
                _ => {
                    self.queue.extend(candidates.iter().copied());
                    break Termination::Branched;
                }
            }
        };

        self.finish(vertices, termination)
    }

    fn finish(&self, mut vertices: Vec<VertexId>, termination: Termination) -> TracedPath {
        let topo = self.topo;
        let first = vertices[0];
        let returns_home = vertices.len() > 3 && vertices.last() == Some(&first);
        if returns_home && topo.degree(first) == 2 {
            vertices.pop();
            let points = vertices.iter().map(|&id| self.graph.vertices[id]).collect();
            return TracedPath {
                vertices,
                path: Path {
                    points,
                    closed: true,
                },
                start_leaf: false,
                end_leaf: false,
                boundary: false,
                termination: Termination::Closed,
            };
        }

        let last = vertices[vertices.len() - 1];
        let points = vertices.iter().map(|&id| self.graph.vertices[id]).collect();
        TracedPath {
            start_leaf: topo.is_leaf(first),
            end_leaf: topo.is_leaf(last),
            vertices,
            path: Path {
                points,
                closed: false,
            },
            boundary: false,
            termination,
        }
    }
}
