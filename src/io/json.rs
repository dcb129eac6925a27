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

//! Exchange format: vertex position list (list order defines vertex index)
//! plus edge index-pair list. A pure value-level snapshot; faces and colors
//! are always freshly derived on import.

use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{IngestResult, MalformedInput};
use crate::geometry::Point2;
use crate::graph::{Domain, Graph};

/// Serialized graph. Validation is tolerant about references: an edge entry
/// must be a 2-element numeric pair, but entries whose numbers are not
/// usable vertex indices are silently dropped rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    pub vertices: Vec<[f64; 2]>,
    pub edges: Vec<[usize; 2]>,
}

impl GraphData {
    /// Parse and validate exchange-format JSON text.
    pub fn from_json(text: &str) -> IngestResult<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }

    /// Validate an already-parsed JSON value. Errors name the offending
    /// field or entry index so callers can surface them directly.
    pub fn from_value(value: &Value) -> IngestResult<Self> {
        let object = value.as_object().ok_or(MalformedInput::NotAnObject)?;
        let vertices = match object.get("vertices") {
            Some(Value::Array(entries)) => entries,
            _ => return Err(MalformedInput::NotAnArray("vertices")),
        };
        let edges = match object.get("edges") {
            Some(Value::Array(entries)) => entries,
            _ => return Err(MalformedInput::NotAnArray("edges")),
        };

        let mut data = GraphData::default();
        for (i, entry) in vertices.iter().enumerate() {
            let [x, y] = numeric_pair(entry).ok_or(MalformedInput::BadVertex(i))?;
            data.vertices.push([x, y]);
        }
        for (i, entry) in edges.iter().enumerate() {
            let [a, b] = numeric_pair(entry).ok_or(MalformedInput::BadEdge(i))?;
            // Negative or fractional numbers cannot reference a vertex;
            // dropped like any other unusable index.
            if let (Some(a), Some(b)) = (as_index(a), as_index(b)) {
                data.edges.push([a, b]);
            }
        }
        Ok(data)
    }

    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn numeric_pair(value: &Value) -> Option<[f64; 2]> {
    let entries = value.as_array()?;
    if entries.len() != 2 {
        return None;
    }
    Some([entries[0].as_f64()?, entries[1].as_f64()?])
}

fn as_index(x: f64) -> Option<usize> {
    (x >= 0.0 && x.fract() == 0.0 && x <= usize::MAX as f64).then_some(x as usize)
}

impl Graph {
    /// Build a graph from exchange data: tolerant edge ingestion, bounding
    /// box remap into the centered domain, then topology extraction. Never
    /// fails; unusable references are dropped.
    pub fn from_data<R: Rng + ?Sized>(data: &GraphData, domain: Domain, rng: &mut R) -> Graph {
        let mut graph = Graph::assemble(&data.vertices, &data.edges, domain);
        graph.normalize();
        graph.finalize(rng);
        graph
    }

    /// Same as [`from_data`](Self::from_data) but without the bounding-box
    /// remap, for coordinates that are already canonical.
    pub fn from_parts<R: Rng + ?Sized>(
        vertices: &[[f64; 2]],
        edges: &[[usize; 2]],
        domain: Domain,
        rng: &mut R,
    ) -> Graph {
        let mut graph = Graph::assemble(vertices, edges, domain);
        graph.finalize(rng);
        graph
    }

    fn assemble(vertices: &[[f64; 2]], edges: &[[usize; 2]], domain: Domain) -> Graph {
        let mut graph = Graph::new(domain);
        for &[x, y] in vertices {
            graph.add_vertex(Point2::new(x, y));
        }
        let n = graph.vertices.len();
        for &[a, b] in edges {
            // Out-of-range references are dropped, not errors.
            if a < n && b < n {
                graph.add_edge(a, b);
            }
        }
        graph
    }

    /// Remap all vertices into the centered inset rectangle with a single
    /// uniform scale. An axis with zero source extent imposes no constraint
    /// (infinite scale on that axis); if both extents are zero, or the
    /// resulting scale is non-positive or non-finite, every vertex
    /// collapses to the origin instead.
    pub(crate) fn normalize(&mut self) {
        let mut min = Point2::new(f64::INFINITY, f64::INFINITY);
        let mut max = Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        let mut any = false;
        for v in self.live_vertices() {
            let p = self.vertices[v].position;
            min = Point2::new(min.x.min(p.x), min.y.min(p.y));
            max = Point2::new(max.x.max(p.x), max.y.max(p.y));
            any = true;
        }
        if !any {
            return;
        }

        let (avail_w, avail_h) = self.domain.available_extent();
        let src_w = max.x - min.x;
        let src_h = max.y - min.y;
        let scale_x = if src_w == 0.0 { f64::INFINITY } else { avail_w / src_w };
        let scale_y = if src_h == 0.0 { f64::INFINITY } else { avail_h / src_h };
        let scale = scale_x.min(scale_y);

        if !scale.is_finite() || scale <= 0.0 {
            for v in 0..self.vertices.len() {
                if !self.vertices[v].removed {
                    self.vertices[v].position = Point2::origin();
                }
            }
            return;
        }

        let cx = (min.x + max.x) / 2.0;
        let cy = (min.y + max.y) / 2.0;
        for v in 0..self.vertices.len() {
            if !self.vertices[v].removed {
                let p = self.vertices[v].position;
                self.vertices[v].position = Point2::new((p.x - cx) * scale, (p.y - cy) * scale);
            }
        }
    }

    /// Snapshot the live vertex and edge sets. Live vertices are emitted in
    /// arena order, which defines the exported indices.
    pub fn to_data(&self) -> GraphData {
        let mut data = GraphData::default();
        let mut index = vec![usize::MAX; self.vertices.len()];
        for v in self.live_vertices() {
            index[v] = data.vertices.len();
            let p = self.vertices[v].position;
            data.vertices.push([p.x, p.y]);
        }
        for e in self.live_edges() {
            let [v0, v1] = self.edges[e].vertices;
            data.edges.push([index[v0], index[v1]]);
        }
        data
    }
}
