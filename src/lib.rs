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

//! Random planar straight-line graphs with half-edge face topology.
//!
//! The pipeline: scatter vertices in a centered square domain, greedily admit
//! crossing-free edges off a shuffled candidate list, prune sliver angles and
//! dangling stubs, then link half-edges and extract the positive-area face
//! cycles. Finished graphs answer point-location and face-adjacency queries
//! and round-trip through a JSON index-pair exchange format.

pub mod error;
pub mod geometry;
pub mod graph;
pub mod io;
pub mod mesh;
pub mod view;

pub use error::MalformedInput;
pub use graph::{Domain, GenConfig, Graph};
pub use io::GraphData;
pub use view::{Overlay, Scene};
