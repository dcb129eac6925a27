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

use thiserror::Error;

/// Result of validating untrusted exchange-format input.
pub type IngestResult<T> = Result<T, MalformedInput>;

/// Shape or type failures in exchange-format input.
///
/// Only ingestion raises errors. Degenerate geometry (zero-length edges,
/// parallel intersections) and non-closing half-edge walks are absorbed
/// internally and never surface to the caller.
#[derive(Debug, Error)]
pub enum MalformedInput {
    #[error("expected an object with `vertices` and `edges` arrays")]
    NotAnObject,

    #[error("`{0}` must be an array")]
    NotAnArray(&'static str),

    #[error("vertices[{0}] must be a 2-element numeric pair")]
    BadVertex(usize),

    #[error("edges[{0}] must be a 2-element numeric pair")]
    BadEdge(usize),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
