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

/// Directed view of an edge from one endpoint.
///
/// `twin` is set at creation and permanent for the edge's lifetime. `next`
/// continues the boundary of the face lying counterclockwise-left of this
/// half-edge; it stays at the sentinel for spokes of degree-1 vertices.
#[derive(Debug, Clone)]
pub struct HalfEdge {
    pub origin: usize,       // vertex this half-edge leaves from
    pub edge: usize,         // owning undirected edge
    pub twin: usize,
    pub next: usize,         // usize::MAX until rotation linking
    pub face: Option<usize>, // None until face extraction, or forever for outer cycles
}

impl HalfEdge {
    pub fn new(origin: usize, edge: usize) -> Self {
        Self {
            origin,
            edge,
            twin: usize::MAX,
            next: usize::MAX,
            face: None,
        }
    }
}
