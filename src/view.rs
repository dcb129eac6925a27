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

//! Hover and rendering collaborator surface: surface-coordinate projection,
//! hover tracking with change reporting, and per-face highlight overlays.
//! Rendering itself lives with the caller; this module only answers the
//! queries a renderer needs.

use ahash::AHashMap;

use crate::geometry::Segment2;
use crate::graph::{Color, Graph};
use crate::mesh::Face;

/// Externally-supplied highlight for one face, drawn over its base color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlay {
    pub color: Color,
    pub opacity: f64,
}

/// A graph plus its interactive display state. The graph is only ever
/// replaced wholesale; queries in between are pure reads, so a renderer can
/// interleave them freely.
#[derive(Debug, Clone)]
pub struct Scene {
    graph: Graph,
    hovered: Option<usize>,
    overlays: AHashMap<usize, Overlay>,
}

impl Scene {
    pub fn new(graph: Graph) -> Self {
        Self {
            graph,
            hovered: None,
            overlays: AHashMap::new(),
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Swap in a new graph (regenerate, reload). Hover state and overlays
    /// reference faces of the old graph and are invalidated with it.
    pub fn replace_graph(&mut self, graph: Graph) {
        self.graph = graph;
        self.hovered = None;
        self.overlays.clear();
    }

    pub fn hovered_face(&self) -> Option<usize> {
        self.hovered
    }

    /// Resolve a surface-space point to the face under it and make that the
    /// hover target. Returns whether the hover state actually changed, so
    /// callers can skip redundant redraws.
    pub fn set_hovered_face_from_point(&mut self, sx: f64, sy: f64, sw: f64, sh: f64) -> bool {
        let p = self.graph.domain.unproject(sx, sy, sw, sh);
        let hit = self.graph.face_containing_point(p);
        let changed = hit != self.hovered;
        self.hovered = hit;
        changed
    }

    /// Drop the hover target. Returns whether anything was hovered.
    pub fn clear_hovered_face(&mut self) -> bool {
        let changed = self.hovered.is_some();
        self.hovered = None;
        changed
    }

    pub fn overlay(&self, face: usize) -> Option<&Overlay> {
        self.overlays.get(&face)
    }

    pub fn set_overlay(&mut self, face: usize, overlay: Overlay) {
        self.overlays.insert(face, overlay);
    }

    pub fn take_overlay(&mut self, face: usize) -> Option<Overlay> {
        self.overlays.remove(&face)
    }

    pub fn clear_overlays(&mut self) {
        self.overlays.clear();
    }

    /// Rebuild the overlay set from the hovered face's shell layers:
    /// `opacity = base_opacity * decay^layer`, fading with topological
    /// distance. No hover target leaves the overlays empty.
    pub fn apply_shell_highlight(&mut self, color: Color, base_opacity: f64, decay: f64) {
        self.overlays.clear();
        let Some(start) = self.hovered else {
            return;
        };
        for (depth, layer) in self.graph.shell_layers(start).iter().enumerate() {
            let opacity = base_opacity * decay.powi(depth as i32);
            for &face in layer {
                self.overlays.insert(face, Overlay { color, opacity });
            }
        }
    }

    pub fn faces(&self) -> &[Face] {
        &self.graph.faces
    }

    /// Live edges as segments, for stroking.
    pub fn edge_segments(&self) -> Vec<Segment2<f64>> {
        self.graph
            .live_edges()
            .map(|e| self.graph.edge_segment(e))
            .collect()
    }
}
