#![no_main]

use curve_kernel::{decompose_graph, Graph, Point};
use libfuzzer_sys::fuzz_target;

// Bytes → Graph: erstes Byte = Vertex-Anzahl, dann Koordinaten-Paare, Rest = Kanten.
// Kanten dürfen ungültige IDs enthalten; die Zerlegung darf nie panicken.
fuzz_target!(|data: &[u8]| {
    let Some((&count, rest)) = data.split_first() else {
        return;
    };
    let count = (count % 32) as usize;
    if rest.len() < count * 2 {
        return;
    }
    let (coords, edge_bytes) = rest.split_at(count * 2);

    let vertices = coords
        .chunks_exact(2)
        .map(|c| Point::new(c[0] as f64 - 128.0, c[1] as f64 - 128.0))
        .collect();
    let edges = edge_bytes
        .chunks_exact(2)
        .map(|e| ((e[0] % 40) as usize, (e[1] % 40) as usize))
        .collect();

    let graph = Graph::from_parts(vertices, edges);
    let first = decompose_graph(&graph);
    let second = decompose_graph(&graph);
    assert_eq!(first, second);
});
