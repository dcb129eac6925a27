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

//! Face-level queries over a finished subdivision: point location by ray
//! parity, twin-derived adjacency, and BFS shell layering.
//!
//! Known limitation: the parity ray is cast along +x without special-casing
//! a ray that passes exactly through a vertex shared by two boundary edges,
//! which can double-count that alignment.

use ahash::AHashSet;

use crate::geometry::{Point2, Vector2, ray_segment_intersection};
use crate::graph::Graph;

impl Graph {
    /// Ray-parity containment test against the face's boundary edges.
    pub fn point_in_face(&self, face: usize, p: Point2<f64>) -> bool {
        let dir = Vector2::new(1.0, 0.0);
        let mut hits = 0usize;
        for &h in &self.faces[face].half_edges {
            let (a, b) = self.edge_endpoints(self.half_edges[h].edge);
            if ray_segment_intersection(p, dir, a, b).is_some() {
                hits += 1;
            }
        }
        hits % 2 == 1
    }

    /// First face containing `p`, in arena order. Faces are disjoint, so at
    /// most one can match.
    pub fn face_containing_point(&self, p: Point2<f64>) -> Option<usize> {
        (0..self.faces.len()).find(|&f| self.point_in_face(f, p))
    }

    /// Distinct faces sharing an edge with `face`, discovered through the
    /// twins of its boundary half-edges. Faces store no adjacency of their
    /// own; this is the only mechanism by which it is known.
    pub fn face_neighbors(&self, face: usize) -> Vec<usize> {
        let mut seen = AHashSet::new();
        let mut neighbors = Vec::new();
        for &h in &self.faces[face].half_edges {
            let twin = self.half_edges[h].twin;
            if let Some(f) = self.half_edges[twin].face {
                if f != face && seen.insert(f) {
                    neighbors.push(f);
                }
            }
        }
        neighbors
    }

    /// Breadth-first distance classes of faces from `start`: layer 0 is
    /// `{start}`, each next layer the unvisited neighbors of the previous
    /// one. Every reachable face appears in exactly one layer.
    pub fn shell_layers(&self, start: usize) -> Vec<Vec<usize>> {
        let mut visited = AHashSet::new();
        visited.insert(start);
        let mut layers = Vec::new();
        let mut frontier = vec![start];
        while !frontier.is_empty() {
            let mut next = Vec::new();
            for &f in &frontier {
                for n in self.face_neighbors(f) {
                    if visited.insert(n) {
                        next.push(n);
                    }
                }
            }
            layers.push(frontier);
            frontier = next;
        }
        layers
    }
}
