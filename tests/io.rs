// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use pslg::error::MalformedInput;
use pslg::graph::{Domain, GenConfig, Graph};
use pslg::io::GraphData;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn edge_set(data: &GraphData) -> Vec<[usize; 2]> {
    let mut edges: Vec<[usize; 2]> = data
        .edges
        .iter()
        .map(|&[a, b]| if a <= b { [a, b] } else { [b, a] })
        .collect();
    edges.sort_unstable();
    edges
}

#[test]
fn json_text_round_trip_is_exact() {
    let g = Graph::generate(&GenConfig::default(), &mut rng(5));
    let data = g.to_data();
    let text = data.to_json_string().unwrap();
    let reparsed = GraphData::from_json(&text).unwrap();
    assert_eq!(data, reparsed);
}

#[test]
fn import_export_is_stable_once_canonical() {
    let g = Graph::generate(&GenConfig::default(), &mut rng(11));
    let first = g.to_data();

    // One import canonicalizes coordinates; after that, import/export
    // reproduces them (up to float rounding in the remap) and the edge
    // index-pair set exactly.
    let canonical = Graph::from_data(&first, Domain::default(), &mut rng(0)).to_data();
    let again = Graph::from_data(&canonical, Domain::default(), &mut rng(1)).to_data();

    assert_eq!(edge_set(&first), edge_set(&canonical));
    assert_eq!(edge_set(&canonical), edge_set(&again));
    assert_eq!(canonical.vertices.len(), again.vertices.len());
    for (a, b) in canonical.vertices.iter().zip(&again.vertices) {
        assert!((a[0] - b[0]).abs() < 1e-9 && (a[1] - b[1]).abs() < 1e-9);
    }
}

#[test]
fn out_of_range_edges_are_silently_dropped() {
    let data = GraphData::from_json(r#"{"vertices":[[0,0]],"edges":[[0,5]]}"#).unwrap();
    assert_eq!(data.vertices.len(), 1);

    let g = Graph::from_data(&data, Domain::default(), &mut rng(2));
    assert_eq!(g.live_vertex_count(), 1);
    assert_eq!(g.live_edge_count(), 0);
}

#[test]
fn negative_and_fractional_indices_are_dropped_not_errors() {
    let data =
        GraphData::from_json(r#"{"vertices":[[0,0],[1,1]],"edges":[[-1,0],[0.5,1],[0,1]]}"#)
            .unwrap();
    assert_eq!(data.edges, vec![[0, 1]]);
}

#[test]
fn non_object_input_is_rejected() {
    let err = GraphData::from_json("[1,2,3]").unwrap_err();
    assert!(matches!(err, MalformedInput::NotAnObject));
}

#[test]
fn non_array_vertices_names_the_field() {
    let err = GraphData::from_json(r#"{"vertices":5,"edges":[]}"#).unwrap_err();
    assert!(matches!(err, MalformedInput::NotAnArray("vertices")));
    assert!(err.to_string().contains("vertices"));
}

#[test]
fn missing_edges_names_the_field() {
    let err = GraphData::from_json(r#"{"vertices":[]}"#).unwrap_err();
    assert!(matches!(err, MalformedInput::NotAnArray("edges")));
}

#[test]
fn malformed_entries_name_their_index() {
    let err = GraphData::from_json(r#"{"vertices":[[0,0],[1]],"edges":[]}"#).unwrap_err();
    assert!(matches!(err, MalformedInput::BadVertex(1)));
    assert!(err.to_string().contains("vertices[1]"));

    let err = GraphData::from_json(r#"{"vertices":[[0,0]],"edges":[["a","b"]]}"#).unwrap_err();
    assert!(matches!(err, MalformedInput::BadEdge(0)));
}

#[test]
fn invalid_json_surfaces_as_json_error() {
    let err = GraphData::from_json("{not json").unwrap_err();
    assert!(matches!(err, MalformedInput::Json(_)));
}

#[test]
fn zero_extent_bbox_collapses_to_origin() {
    let data = GraphData {
        vertices: vec![[5.0, 5.0], [5.0, 5.0]],
        edges: vec![[0, 1]],
    };
    let g = Graph::from_data(&data, Domain::default(), &mut rng(3));
    for v in g.live_vertices() {
        assert_eq!(g.vertices[v].position.x, 0.0);
        assert_eq!(g.vertices[v].position.y, 0.0);
    }
}

#[test]
fn single_axis_extent_scales_from_the_other_axis() {
    let data = GraphData {
        vertices: vec![[0.0, -3.0], [0.0, 7.0]],
        edges: vec![[0, 1]],
    };
    let domain = Domain::default();
    let g = Graph::from_data(&data, domain, &mut rng(4));
    let (_, avail_h) = domain.available_extent();
    let ys: Vec<f64> = g.live_vertices().map(|v| g.vertices[v].position.y).collect();
    assert_eq!(ys.len(), 2);
    assert!((ys[0] + avail_h / 2.0).abs() < 1e-9);
    assert!((ys[1] - avail_h / 2.0).abs() < 1e-9);
    for v in g.live_vertices() {
        assert_eq!(g.vertices[v].position.x, 0.0);
    }
}

#[test]
fn import_recenters_into_the_domain() {
    let data = GraphData {
        vertices: vec![[100.0, 100.0], [104.0, 100.0], [102.0, 103.0]],
        edges: vec![[0, 1], [1, 2], [2, 0]],
    };
    let domain = Domain::default();
    let g = Graph::from_data(&data, domain, &mut rng(6));
    let (hx, hy) = domain.inset_half_extent();
    for v in g.live_vertices() {
        let p = g.vertices[v].position;
        assert!(p.x.abs() <= hx + 1e-9 && p.y.abs() <= hy + 1e-9);
    }
    // The wide axis fills the available extent after the remap.
    let xs: Vec<f64> = g.live_vertices().map(|v| g.vertices[v].position.x).collect();
    let spread = xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
        - xs.iter().cloned().fold(f64::INFINITY, f64::min);
    assert!((spread - 2.0 * hx).abs() < 1e-9);
    assert_eq!(g.faces.len(), 1);
}
