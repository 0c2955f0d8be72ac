//! Fortsetzungs-Paarung an Kreuzungen mit genau 2 ein- und 2 ausgehenden Kanten.

use super::topology::{EdgeIdx, Topology};
use crate::core::point::{cross, normalize, polar_angle};
use crate::core::{Graph, Point, VertexId};
use std::collections::{HashMap, HashSet};

/// Eingehende Kante → fortsetzende ausgehende Kante.
pub type JunctionPairing = HashMap<EdgeIdx, EdgeIdx>;

/// Welche der beiden möglichen Zuordnungen gewählt wurde.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairingChoice {
    /// in[0] → out[0], in[1] → out[1]
    Identity,
    /// in[0] → out[1], in[1] → out[0]
    Swapped,
}

/// Richtungen an einem Kreuzungs-Vertex.
#[derive(Debug, Clone, Copy)]
struct JunctionRays {
    /// Fahrtrichtung beim Ankommen (zum Vertex hin)
    heading: [Point; 2],
    /// Richtung der ausgehenden Kanten (vom Vertex weg)
    departure: [Point; 2],
}

impl JunctionRays {
    fn score(&self, choice: PairingChoice) -> f64 {
        let [h0, h1] = self.heading;
        let [d0, d1] = self.departure;
        match choice {
            PairingChoice::Identity => h0.dot(d0) + h1.dot(d1),
            PairingChoice::Swapped => h0.dot(d1) + h1.dot(d0),
        }
    }

    /// Anzahl Rechtskurven der Zuordnung
    fn right_turns(&self, choice: PairingChoice) -> usize {
        let [h0, h1] = self.heading;
        let [d0, d1] = self.departure;
        let pairs = match choice {
            PairingChoice::Identity => [(h0, d0), (h1, d1)],
            PairingChoice::Swapped => [(h0, d1), (h1, d0)],
        };
        pairs.iter().filter(|(h, d)| cross(*h, *d) < 0.0).count()
    }

    /// Kreuzungsfreie Zuordnung, falls die beiden Ankünfte im Winkel benachbart liegen.
    ///
    /// Reihenfolge gegen den Uhrzeigersinn `in_a, in_b, out_c, out_d`:
    /// `in_b → out_c` und `in_a → out_d` schneiden sich nicht.
    fn non_crossing(&self) -> Option<PairingChoice> {
        // (Winkel, eingehend?, Index); eingehende Richtungen zeigen vom Vertex weg
        let mut rays = [
            (polar_angle(-self.heading[0]), true, 0usize),
            (polar_angle(-self.heading[1]), true, 1),
            (polar_angle(self.departure[0]), false, 0),
            (polar_angle(self.departure[1]), false, 1),
        ];
        rays.sort_by(|a, b| a.0.total_cmp(&b.0).then(b.1.cmp(&a.1)).then(a.2.cmp(&b.2)));

        let p = (0..4).find(|&p| rays[p].1 && rays[(p + 1) % 4].1)?;
        let in_b = rays[(p + 1) % 4].2;
        let out_c = rays[(p + 2) % 4].2;
        Some(if in_b == out_c {
            PairingChoice::Identity
        } else {
            PairingChoice::Swapped
        })
    }

    fn choose(&self, tie_epsilon: f64) -> PairingChoice {
        let identity = self.score(PairingChoice::Identity);
        let swapped = self.score(PairingChoice::Swapped);
        if (identity - swapped).abs() > tie_epsilon {
            return if identity > swapped {
                PairingChoice::Identity
            } else {
                PairingChoice::Swapped
            };
        }
        if let Some(choice) = self.non_crossing() {
            return choice;
        }
        let rt_identity = self.right_turns(PairingChoice::Identity);
        let rt_swapped = self.right_turns(PairingChoice::Swapped);
        if rt_swapped > rt_identity {
            PairingChoice::Swapped
        } else {
            PairingChoice::Identity
        }
    }
}

/// Wählt die Fortsetzung an einem Vertex mit genau 2 ein- und 2 ausgehenden Kanten.
///
/// Bewertet wird die Summe der Skalarprodukte aus Ankunfts- und Abfahrtsrichtung
/// (möglichst gerade Durchfahrt). Bei Beinahe-Gleichstand (`tie_epsilon`) gilt:
/// liegen die beiden Ankünfte im Winkel nebeneinander, gewinnt die kreuzungsfreie
/// Zuordnung, sonst die mit mehr Rechtskurven, sonst die Identität.
pub fn choose_pairing(
    graph: &Graph,
    topo: &Topology,
    vertex: VertexId,
    tie_epsilon: f64,
) -> Option<PairingChoice> {
    let (incoming, outgoing) = (topo.incoming(vertex), topo.outgoing(vertex));
    if incoming.len() != 2 || outgoing.len() != 2 {
        return None;
    }
    let origin = graph.vertices[vertex];
    let heading = |e: EdgeIdx| normalize(origin - graph.vertices[topo.source(e)]);
    let departure = |e: EdgeIdx| normalize(graph.vertices[topo.target(e)] - origin);
    let rays = JunctionRays {
        heading: [heading(incoming[0]), heading(incoming[1])],
        departure: [departure(outgoing[0]), departure(outgoing[1])],
    };
    let choice = rays.choose(tie_epsilon);
    log::trace!(
        "Kreuzung {}: Identität {:.6}, getauscht {:.6} → {:?}",
        vertex,
        rays.score(PairingChoice::Identity),
        rays.score(PairingChoice::Swapped),
        choice
    );
    Some(choice)
}

/// Berechnet die Paarung aller inneren 2/2-Kreuzungen.
///
/// Vertices der Außenkontur werden nie gepaart.
pub fn pair_junctions(
    graph: &Graph,
    topo: &Topology,
    boundary_vertices: &HashSet<VertexId>,
    tie_epsilon: f64,
) -> JunctionPairing {
    let mut pairing = JunctionPairing::new();
    for v in 0..topo.vertex_count() {
        if boundary_vertices.contains(&v) {
            continue;
        }
        let Some(choice) = choose_pairing(graph, topo, v, tie_epsilon) else {
            continue;
        };
        let (ins, outs) = (topo.incoming(v), topo.outgoing(v));
        match choice {
            PairingChoice::Identity => {
                pairing.insert(ins[0], outs[0]);
                pairing.insert(ins[1], outs[1]);
            }
            PairingChoice::Swapped => {
                pairing.insert(ins[0], outs[1]);
                pairing.insert(ins[1], outs[0]);
            }
        }
    }
    pairing
}
