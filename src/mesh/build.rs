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

use ahash::AHashSet;
use rand::Rng;

use crate::graph::{Color, Graph};
use crate::mesh::{Face, HalfEdge};

impl Graph {
    /// Derive the half-edge subdivision from the current live edge set:
    /// CCW incident sort, twin pairing, rotation linking, face extraction.
    pub(crate) fn finalize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.sort_incident_ccw();
        self.build_half_edges();
        self.extract_faces(rng);
    }

    /// Sort every vertex's incident-edge list by CCW direction angle.
    /// Precondition for rotation linking.
    pub(crate) fn sort_incident_ccw(&mut self) {
        for v in 0..self.vertices.len() {
            if self.vertices[v].removed {
                continue;
            }
            let mut spokes: Vec<(f64, usize)> = self.vertices[v]
                .incident
                .iter()
                .map(|&e| (self.edge_angle_at(e, v), e))
                .collect();
            spokes.sort_by(|a, b| a.0.total_cmp(&b.0));
            self.vertices[v].incident = spokes.into_iter().map(|(_, e)| e).collect();
        }
    }

    /// Instantiate the twin pair for every live edge, then link `next`
    /// pointers by rotating around each vertex.
    pub(crate) fn build_half_edges(&mut self) {
        self.half_edges.clear();
        self.faces.clear();

        // 1) Two mutual twins per live edge, origin order matching the
        //    edge's endpoint order.
        for e in 0..self.edges.len() {
            if self.edges[e].removed {
                self.edges[e].half_edges = [usize::MAX; 2];
                continue;
            }
            let [v0, v1] = self.edges[e].vertices;
            let h0 = self.half_edges.len();
            let h1 = h0 + 1;
            self.half_edges.push(HalfEdge::new(v0, e));
            self.half_edges.push(HalfEdge::new(v1, e));
            self.half_edges[h0].twin = h1;
            self.half_edges[h1].twin = h0;
            self.edges[e].half_edges = [h0, h1];
        }

        // 2) Rotation linking. With outgoing spokes h[0..k] in CCW order,
        //    the half-edge arriving along h[i] continues onto the next
        //    spoke in clockwise order: twin(h[i]).next = h[i-1]. That keeps
        //    every walk on the boundary of the face CCW-left of it.
        //    Degree < 2 contributes no rotation; those `next`s stay unset.
        for v in 0..self.vertices.len() {
            if self.vertices[v].removed {
                continue;
            }
            let spokes: Vec<usize> = self.vertices[v]
                .incident
                .iter()
                .map(|&e| self.half_edge_from(e, v))
                .collect();
            let k = spokes.len();
            if k < 2 {
                continue;
            }
            for i in 0..k {
                let prev = spokes[(i + k - 1) % k];
                let twin = self.half_edges[spokes[i]].twin;
                self.half_edges[twin].next = prev;
            }
        }
    }

    /// The half-edge of edge `e` originating at vertex `v`.
    pub fn half_edge_from(&self, e: usize, v: usize) -> usize {
        let edge = &self.edges[e];
        if edge.vertices[0] == v {
            edge.half_edges[0]
        } else {
            edge.half_edges[1]
        }
    }

    /// Walk `next` chains from every unassigned half-edge; closed cycles
    /// with strictly positive signed area become faces. The unbounded outer
    /// cycle winds clockwise (non-positive area) and is discarded, leaving
    /// its half-edges permanently unassigned.
    pub(crate) fn extract_faces<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for start in 0..self.half_edges.len() {
            if self.half_edges[start].face.is_some() {
                continue;
            }
            let Some(cycle) = self.trace_cycle(start) else {
                continue;
            };
            if self.cycle_area(&cycle) <= 0.0 {
                continue;
            }
            let face = self.faces.len();
            for &h in &cycle {
                self.half_edges[h].face = Some(face);
            }
            self.faces.push(Face::new(cycle, Color::random(rng)));
        }
    }

    /// Follow `next` from `start` until the walk closes. Walks that run
    /// into an unset link, re-enter themselves elsewhere, or reach a
    /// half-edge already claimed by a face do not form a cycle.
    fn trace_cycle(&self, start: usize) -> Option<Vec<usize>> {
        let mut cycle = vec![start];
        let mut seen = AHashSet::new();
        seen.insert(start);
        let mut current = start;
        loop {
            let next = self.half_edges[current].next;
            if next == usize::MAX {
                return None;
            }
            if next == start {
                return Some(cycle);
            }
            if self.half_edges[next].face.is_some() || !seen.insert(next) {
                return None;
            }
            cycle.push(next);
            current = next;
        }
    }

    /// Shoelace sum over the cycle's origin vertices: half the sum of cross
    /// products of consecutive positions. Positive winding is CCW.
    pub(crate) fn cycle_area(&self, cycle: &[usize]) -> f64 {
        let mut sum = 0.0;
        for i in 0..cycle.len() {
            let p = self.vertices[self.half_edges[cycle[i]].origin].position;
            let q = self.vertices[self.half_edges[cycle[(i + 1) % cycle.len()]].origin].position;
            sum += p.x * q.y - p.y * q.x;
        }
        sum / 2.0
    }
}
