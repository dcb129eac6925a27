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

use crate::geometry::{Point2, Segment2, Vector2};
use crate::mesh::{Face, HalfEdge};

/// Centered square region the graph lives in. Vertices are confined to the
/// rectangle inset by `padding` on every side, with (0, 0) at the center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Domain {
    pub fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    /// Half-extents of the inset rectangle vertices may occupy.
    pub fn inset_half_extent(&self) -> (f64, f64) {
        (
            (self.width / 2.0 - self.padding).max(0.0),
            (self.height / 2.0 - self.padding).max(0.0),
        )
    }

    /// Width and height available after the padding margin.
    pub fn available_extent(&self) -> (f64, f64) {
        let (hx, hy) = self.inset_half_extent();
        (2.0 * hx, 2.0 * hy)
    }

    /// Map a domain point onto a target surface of extent `sw` x `sh`,
    /// uniformly scaled and centered (letterboxed on the narrow axis).
    pub fn project(&self, p: Point2<f64>, sw: f64, sh: f64) -> (f64, f64) {
        let scale = (sw / self.width).min(sh / self.height);
        (sw / 2.0 + p.x * scale, sh / 2.0 + p.y * scale)
    }

    /// Inverse of [`project`](Self::project).
    pub fn unproject(&self, sx: f64, sy: f64, sw: f64, sh: f64) -> Point2<f64> {
        let scale = (sw / self.width).min(sh / self.height);
        Point2::new((sx - sw / 2.0) / scale, (sy - sh / 2.0) / scale)
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 1000.0,
            padding: 40.0,
        }
    }
}

/// Vertex record: position plus the incident-edge list. After
/// [`Graph::finalize`] the incident list is sorted by CCW direction angle.
#[derive(Debug, Clone)]
pub struct Vertex {
    pub position: Point2<f64>,
    pub incident: Vec<usize>,
    pub removed: bool,
}

impl Vertex {
    pub fn new(position: Point2<f64>) -> Self {
        Self {
            position,
            incident: Vec::new(),
            removed: false,
        }
    }

    pub fn degree(&self) -> usize {
        self.incident.len()
    }
}

/// Undirected edge between two vertices. Owns the twin pair of half-edges
/// once they are built; `half_edges` stays at the sentinel until then.
/// `half_edges[i]` originates at `vertices[i]`.
#[derive(Debug, Clone)]
pub struct Edge {
    pub vertices: [usize; 2],
    pub half_edges: [usize; 2],
    pub removed: bool,
}

impl Edge {
    pub fn new(v0: usize, v1: usize) -> Self {
        Self {
            vertices: [v0, v1],
            half_edges: [usize::MAX; 2],
            removed: false,
        }
    }

    pub fn other_vertex(&self, v: usize) -> usize {
        if self.vertices[0] == v {
            self.vertices[1]
        } else {
            self.vertices[0]
        }
    }

    pub fn has_vertex(&self, v: usize) -> bool {
        self.vertices[0] == v || self.vertices[1] == v
    }
}

/// Planar straight-line graph with its derived half-edge subdivision.
///
/// Arena storage: vertices, edges, half-edges and faces live in parallel
/// `Vec`s and reference each other by index. Pruning marks vertices and
/// edges `removed` instead of compacting, so indices stay stable; faces and
/// half-edges are only ever built from the live set and are replaced
/// wholesale when the graph is rebuilt.
#[derive(Debug, Clone)]
pub struct Graph {
    pub domain: Domain,
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
    pub half_edges: Vec<HalfEdge>,
    pub faces: Vec<Face>,
}

impl Graph {
    pub fn new(domain: Domain) -> Self {
        Self {
            domain,
            vertices: Vec::new(),
            edges: Vec::new(),
            half_edges: Vec::new(),
            faces: Vec::new(),
        }
    }

    pub fn add_vertex(&mut self, position: Point2<f64>) -> usize {
        let idx = self.vertices.len();
        self.vertices.push(Vertex::new(position));
        idx
    }

    /// Add an edge and attach it to both endpoints' incident lists.
    pub fn add_edge(&mut self, v0: usize, v1: usize) -> usize {
        let idx = self.edges.len();
        self.edges.push(Edge::new(v0, v1));
        self.vertices[v0].incident.push(idx);
        self.vertices[v1].incident.push(idx);
        idx
    }

    /// Mark an edge removed and detach it from both endpoints.
    pub(crate) fn remove_edge(&mut self, e: usize) {
        let [v0, v1] = self.edges[e].vertices;
        self.edges[e].removed = true;
        self.vertices[v0].incident.retain(|&i| i != e);
        self.vertices[v1].incident.retain(|&i| i != e);
    }

    pub fn live_vertex_count(&self) -> usize {
        self.vertices.iter().filter(|v| !v.removed).count()
    }

    pub fn live_edge_count(&self) -> usize {
        self.edges.iter().filter(|e| !e.removed).count()
    }

    /// Indices of edges that survived pruning.
    pub fn live_edges(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.edges.len()).filter(|&e| !self.edges[e].removed)
    }

    pub fn live_vertices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.vertices.len()).filter(|&v| !self.vertices[v].removed)
    }

    pub fn edge_endpoints(&self, e: usize) -> (Point2<f64>, Point2<f64>) {
        let [v0, v1] = self.edges[e].vertices;
        (self.vertices[v0].position, self.vertices[v1].position)
    }

    pub fn edge_segment(&self, e: usize) -> Segment2<f64> {
        let (a, b) = self.edge_endpoints(e);
        Segment2::new(a, b)
    }

    pub fn edge_length(&self, e: usize) -> f64 {
        self.edge_segment(e).length()
    }

    /// Direction of edge `e` as seen from its endpoint `v`.
    pub fn edge_direction_from(&self, e: usize, v: usize) -> Vector2<f64> {
        let other = self.edges[e].other_vertex(v);
        self.vertices[other].position - self.vertices[v].position
    }

    /// CCW direction angle of edge `e` as seen from its endpoint `v`.
    pub fn edge_angle_at(&self, e: usize, v: usize) -> f64 {
        self.edge_direction_from(e, v).angle()
    }
}
