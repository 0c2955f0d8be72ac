use super::*;
use crate::core::Point;

fn graph(vertices: &[(f64, f64)], edges: &[(VertexId, VertexId)]) -> Graph {
    Graph::from_parts(
        vertices.iter().map(|&(x, y)| Point::new(x, y)).collect(),
        edges.to_vec(),
    )
}

/// `a` ist eine Rotation von `b` oder seiner Umkehrung.
fn same_cycle(a: &[VertexId], b: &[VertexId]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut reversed = b.to_vec();
    reversed.reverse();
    (0..b.len()).any(|shift| {
        let rotated: Vec<_> = b.iter().cycle().skip(shift).take(b.len()).copied().collect();
        let rotated_rev: Vec<_> = reversed
            .iter()
            .cycle()
            .skip(shift)
            .take(b.len())
            .copied()
            .collect();
        a == rotated.as_slice() || a == rotated_rev.as_slice()
    })
}

fn hexagon(bidirected: bool) -> Graph {
    let vertices: Vec<(f64, f64)> = (0..6)
        .map(|i| {
            let a = i as f64 * std::f64::consts::PI / 3.0;
            (a.cos() * 3.0, a.sin() * 3.0)
        })
        .collect();
    let mut edges: Vec<(VertexId, VertexId)> = (0..6).map(|i| (i, (i + 1) % 6)).collect();
    if bidirected {
        edges.extend((0..6).map(|i| ((i + 1) % 6, i)));
    }
    graph(&vertices, &edges)
}

#[test]
fn test_straight_crossing_continues_collinear_edges() {
    // W=0, E=1, S=2, N=3, C=4
    let g = graph(
        &[(-2.0, 0.0), (2.0, 0.0), (0.0, -2.0), (0.0, 2.0), (0.0, 0.0)],
        &[(0, 4), (4, 1), (2, 4), (4, 3)],
    );
    let result = decompose_graph(&g);
    assert!(result.boundary.is_none());
    assert_eq!(result.paths.len(), 2);
    assert_eq!(result.paths[0].vertices, vec![0, 4, 1]);
    assert_eq!(result.paths[1].vertices, vec![2, 4, 3]);
    for path in &result.paths {
        assert!(path.start_leaf && path.end_leaf);
        assert_eq!(path.termination, Termination::Leaf);
        assert!(!path.path.closed);
    }
}

#[test]
fn test_single_cycle_yields_one_closed_path() {
    for bidirected in [false, true] {
        let g = hexagon(bidirected);
        let result = decompose_graph(&g);
        assert_eq!(result.paths.len(), 1, "bidirected={}", bidirected);
        let path = &result.paths[0];
        assert!(path.path.closed);
        assert!(path.boundary);
        assert_eq!(path.termination, Termination::Boundary);
        assert!(same_cycle(&path.vertices, &[0, 1, 2, 3, 4, 5]));
        assert_eq!(path.path.len(), 6);
        assert!(result.interior_faces.is_empty());
    }
}

#[test]
fn test_zero_area_cycle_is_closed_by_walker() {
    let g = graph(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)], &[(0, 1), (1, 2), (2, 0)]);
    let result = decompose_graph(&g);
    assert!(result.boundary.is_none());
    assert_eq!(result.paths.len(), 1);
    assert_eq!(result.paths[0].vertices, vec![0, 1, 2]);
    assert_eq!(result.paths[0].termination, Termination::Closed);
    assert!(result.paths[0].path.closed);
}

#[test]
fn test_bidirected_line_is_one_path() {
    let mut g = graph(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.5)], &[]);
    g.add_undirected_edge(0, 1);
    g.add_undirected_edge(1, 2);
    let result = decompose_graph(&g);
    assert_eq!(result.paths.len(), 1);
    let path = &result.paths[0];
    assert_eq!(path.vertices, vec![0, 1, 2]);
    assert!(path.start_leaf && path.end_leaf);
    assert_eq!(path.termination, Termination::Leaf);
}

#[test]
fn test_t_junction_branches() {
    let g = graph(
        &[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (1.0, 1.0)],
        &[(0, 1), (1, 2), (1, 3)],
    );
    let result = decompose_graph(&g);
    let vertices: Vec<_> = result.paths.iter().map(|p| p.vertices.clone()).collect();
    assert_eq!(vertices, vec![vec![0, 1], vec![1, 2], vec![1, 3]]);

    let trunk = &result.paths[0];
    assert_eq!(trunk.termination, Termination::Branched);
    assert!(trunk.start_leaf);
    assert!(!trunk.end_leaf);
    assert!(trunk.trims_end());
    assert!(!trunk.trims_start());

    for branch in &result.paths[1..] {
        assert!(!branch.start_leaf);
        assert!(branch.end_leaf);
    }
}

#[test]
fn test_two_in_three_out_stops_walk() {
    let g = graph(
        &[
            (0.0, 0.0),
            (-1.0, 0.5),
            (-1.0, -0.5),
            (1.0, 1.0),
            (1.0, 0.0),
            (1.0, -1.0),
        ],
        &[(1, 0), (2, 0), (0, 3), (0, 4), (0, 5)],
    );
    let result = decompose_graph(&g);
    assert_eq!(result.paths.len(), 5);
    assert_eq!(result.paths[0].vertices, vec![1, 0]);
    assert_eq!(result.paths[0].termination, Termination::AmbiguousJunction);
    assert_eq!(result.paths[1].vertices, vec![2, 0]);
    assert_eq!(result.paths[1].termination, Termination::AmbiguousJunction);
    let rest: Vec<_> = result.paths[2..].iter().map(|p| p.vertices.clone()).collect();
    assert_eq!(rest, vec![vec![0, 3], vec![0, 4], vec![0, 5]]);
}

#[test]
fn test_theta_graph_boundary_and_interior_faces() {
    let mut g = graph(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)], &[]);
    g.add_edge(0, 1);
    g.add_edge(1, 2);
    g.add_edge(2, 3);
    g.add_edge(3, 0);
    g.add_undirected_edge(0, 2);

    let result = decompose_graph(&g);
    let boundary = result.boundary.as_ref().unwrap();
    assert!((boundary.signed_area - 4.0).abs() < 1e-9);
    assert!(same_cycle(&boundary.vertices, &[0, 1, 2, 3]));
    assert_eq!(result.interior_faces.len(), 2);
    assert!(result
        .interior_faces
        .iter()
        .all(|f| (f.signed_area - 2.0).abs() < 1e-9));

    assert_eq!(result.paths.len(), 2);
    assert!(result.paths[0].boundary);
    let diagonal = &result.paths[1];
    assert_eq!(diagonal.vertices, vec![0, 2]);
    assert_eq!(diagonal.termination, Termination::Revisited);
    assert!(!diagonal.start_leaf && !diagonal.end_leaf);
}

#[test]
fn test_decomposition_is_idempotent() {
    let mut g = hexagon(false);
    let hub = g.add_vertex(Point::new(0.0, 0.0));
    let tip = g.add_vertex(Point::new(0.0, 1.0));
    g.add_undirected_edge(0, hub);
    g.add_undirected_edge(3, hub);
    g.add_edge(hub, tip);

    let first = decompose_graph(&g);
    let second = decompose_graph(&g);
    assert_eq!(first, second);
    assert!(!first.paths.is_empty());
}

#[test]
fn test_malformed_edges_are_ignored() {
    let g = graph(&[(0.0, 0.0), (1.0, 0.0)], &[(0, 1), (1, 1), (0, 42), (42, 0)]);
    let result = decompose_graph(&g);
    assert_eq!(result.paths.len(), 1);
    assert_eq!(result.paths[0].vertices, vec![0, 1]);
    assert!(g.validate().is_err());
}

#[test]
fn test_empty_graph() {
    let result = decompose_graph(&Graph::new());
    assert_eq!(result, Decomposition::default());
}

#[test]
fn test_coincident_closing_vertex_keeps_all_points() {
    // Vertex 4 liegt auf derselben Position wie Vertex 0
    let g = graph(
        &[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (0.0, 0.0)],
        &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)],
    );
    let result = decompose_graph(&g);
    let boundary = &result.paths[0];
    assert!(boundary.boundary && boundary.path.closed);
    assert_eq!(boundary.vertices.len(), 5);
    for path in &result.paths {
        assert_eq!(path.vertices.len(), path.path.points.len());
        for (id, point) in path.vertices.iter().zip(&path.path.points) {
            assert_eq!(g.vertices[*id], *point);
        }
    }
}
