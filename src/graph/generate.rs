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

use rand::Rng;
use rand::seq::SliceRandom;

use crate::geometry::{Point2, segments_intersect};
use crate::graph::{Domain, Graph};

/// Generation parameters. All randomness flows through the caller's `Rng`,
/// so a seeded `StdRng` reproduces the graph exactly.
#[derive(Debug, Clone, Copy)]
pub struct GenConfig {
    pub vertex_count: usize,
    pub domain: Domain,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            vertex_count: 48,
            domain: Domain::default(),
        }
    }
}

impl Graph {
    /// Generate a random planar straight-line graph, pruned and with its
    /// face subdivision extracted.
    ///
    /// Edges are admitted greedily off a shuffled list of all vertex pairs:
    /// a candidate survives iff it crosses no already-admitted edge. The
    /// shuffle order is the only source of structure in which edges make it
    /// in, so the result is not maximal in any canonical sense.
    pub fn generate<R: Rng + ?Sized>(cfg: &GenConfig, rng: &mut R) -> Graph {
        let mut graph = Graph::new(cfg.domain);

        // 1) Scatter vertices uniformly inside the inset square.
        let (hx, hy) = cfg.domain.inset_half_extent();
        for _ in 0..cfg.vertex_count {
            let x = rng.random_range(-hx..=hx);
            let y = rng.random_range(-hy..=hy);
            graph.add_vertex(Point2::new(x, y));
        }

        // 2) Every vertex pair is a candidate; shuffle for a uniform
        //    random permutation.
        let n = cfg.vertex_count;
        let mut candidates: Vec<(usize, usize)> = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                candidates.push((i, j));
            }
        }
        candidates.shuffle(rng);

        // 3) Greedy crossing-free admission. No backtracking.
        for (i, j) in candidates {
            if graph.admissible(i, j) {
                graph.add_edge(i, j);
            }
        }

        // 4) Drop sliver angles, then dangling stubs, then build topology.
        graph.prune_narrow_angles();
        graph.prune_sparse_vertices();
        graph.finalize(rng);
        graph
    }

    /// Whether the candidate edge `(i, j)` crosses no admitted edge. Edges
    /// sharing an endpoint with the candidate are exempt: meeting at a
    /// common vertex is not a crossing.
    fn admissible(&self, i: usize, j: usize) -> bool {
        let a0 = self.vertices[i].position;
        let a1 = self.vertices[j].position;
        for e in self.live_edges() {
            let edge = &self.edges[e];
            if edge.has_vertex(i) || edge.has_vertex(j) {
                continue;
            }
            let (b0, b1) = self.edge_endpoints(e);
            if segments_intersect(a0, a1, b0, b1) {
                return false;
            }
        }
        true
    }
}
