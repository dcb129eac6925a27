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

use std::f64::consts::{FRAC_PI_6, TAU};

use crate::graph::Graph;

/// Minimum angular gap between circularly-adjacent incident edges.
pub const MIN_ANGLE: f64 = FRAC_PI_6;

impl Graph {
    /// Remove the longer edge of every circularly-adjacent incident pair
    /// subtending less than [`MIN_ANGLE`]. Removing an edge widens the gap
    /// it sat in, so full passes repeat until one removes nothing.
    pub(crate) fn prune_narrow_angles(&mut self) {
        loop {
            let mut removed = 0usize;
            for v in 0..self.vertices.len() {
                if self.vertices[v].removed {
                    continue;
                }
                let mut spokes: Vec<(f64, usize)> = self.vertices[v]
                    .incident
                    .iter()
                    .map(|&e| (self.edge_angle_at(e, v), e))
                    .collect();
                if spokes.len() < 2 {
                    continue;
                }
                spokes.sort_by(|a, b| a.0.total_cmp(&b.0));

                let k = spokes.len();
                for i in 0..k {
                    let (a0, e0) = spokes[i];
                    let (a1, e1) = spokes[(i + 1) % k];
                    // Either edge may have been dropped earlier in this pass.
                    if self.edges[e0].removed || self.edges[e1].removed {
                        continue;
                    }
                    let gap = if i + 1 == k { a1 + TAU - a0 } else { a1 - a0 };
                    if gap < MIN_ANGLE {
                        let longer = if self.edge_length(e0) > self.edge_length(e1) {
                            e0
                        } else {
                            e1
                        };
                        self.remove_edge(longer);
                        removed += 1;
                    }
                }
            }
            if removed == 0 {
                break;
            }
        }
    }

    /// Remove degree-0 vertices and degree-1 vertices (dropping their last
    /// edge first). Each removal may push a neighbor down to degree 1, so
    /// passes repeat until stable.
    pub(crate) fn prune_sparse_vertices(&mut self) {
        loop {
            let mut removed = 0usize;
            for v in 0..self.vertices.len() {
                if self.vertices[v].removed {
                    continue;
                }
                match self.vertices[v].incident.len() {
                    0 => {
                        self.vertices[v].removed = true;
                        removed += 1;
                    }
                    1 => {
                        let e = self.vertices[v].incident[0];
                        self.remove_edge(e);
                        self.vertices[v].removed = true;
                        removed += 1;
                    }
                    _ => {}
                }
            }
            if removed == 0 {
                break;
            }
        }
    }
}
