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

use num_traits::Float;

use crate::geometry::{Point2, Vector2};

/// Parametric coordinates (t, u) of the crossing of two lines
/// `p + t*r` and `q + u*s`, solved via cross products.
///
/// A zero denominator (parallel or collinear lines) divides through and
/// yields non-finite parameters; callers filter those with `is_finite`.
fn line_parameters<T: Float>(p: Point2<T>, r: Vector2<T>, q: Point2<T>, s: Vector2<T>) -> (T, T) {
    let denom = r.cross(&s);
    let pq = q - p;
    let t = pq.cross(&s) / denom;
    let u = pq.cross(&r) / denom;
    (t, u)
}

/// Whether segments `a0a1` and `b0b1` intersect.
///
/// Both parametric coordinates must be finite and lie in [0, 1], so touching
/// endpoints count as an intersection. Parallel and collinear-overlapping
/// segments are classified as non-intersecting: the zero denominator makes
/// both parameters non-finite.
pub fn segments_intersect<T: Float>(
    a0: Point2<T>,
    a1: Point2<T>,
    b0: Point2<T>,
    b1: Point2<T>,
) -> bool {
    let (ta, tb) = line_parameters(a0, a1 - a0, b0, b1 - b0);
    ta.is_finite()
        && tb.is_finite()
        && ta >= T::zero()
        && ta <= T::one()
        && tb >= T::zero()
        && tb <= T::one()
}

/// Where the ray `origin + t*dir` (t >= 0) crosses segment `v0v1`, if at all.
pub fn ray_segment_intersection<T: Float>(
    origin: Point2<T>,
    dir: Vector2<T>,
    v0: Point2<T>,
    v1: Point2<T>,
) -> Option<Point2<T>> {
    let (t, u) = line_parameters(origin, dir, v0, v1 - v0);
    if t.is_finite() && u.is_finite() && t >= T::zero() && u >= T::zero() && u <= T::one() {
        Some(origin + dir.scale(t))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proper_crossing() {
        let a0 = Point2::new(0.0, 0.0);
        let a1 = Point2::new(2.0, 2.0);
        let b0 = Point2::new(0.0, 2.0);
        let b1 = Point2::new(2.0, 0.0);
        assert!(segments_intersect(a0, a1, b0, b1));
    }

    #[test]
    fn parallel_is_no_intersection() {
        let a0 = Point2::new(0.0, 0.0);
        let a1 = Point2::new(1.0, 0.0);
        let b0 = Point2::new(0.0, 1.0);
        let b1 = Point2::new(1.0, 1.0);
        assert!(!segments_intersect(a0, a1, b0, b1));
    }

    #[test]
    fn collinear_overlap_is_no_intersection() {
        // Zero denominator, non-finite parameters: classified as disjoint.
        let a0 = Point2::new(0.0, 0.0);
        let a1 = Point2::new(2.0, 0.0);
        let b0 = Point2::new(1.0, 0.0);
        let b1 = Point2::new(3.0, 0.0);
        assert!(!segments_intersect(a0, a1, b0, b1));
    }

    #[test]
    fn ray_behind_origin_misses() {
        let origin = Point2::new(0.0, 0.0);
        let dir = Vector2::new(1.0, 0.0);
        let hit = ray_segment_intersection(origin, dir, Point2::new(-1.0, -1.0), Point2::new(-1.0, 1.0));
        assert!(hit.is_none());
    }

    #[test]
    fn ray_hits_segment_at_point() {
        let origin = Point2::new(0.0, 0.0);
        let dir = Vector2::new(1.0, 0.0);
        let hit = ray_segment_intersection(origin, dir, Point2::new(2.0, -1.0), Point2::new(2.0, 1.0));
        assert_eq!(hit, Some(Point2::new(2.0, 0.0)));
    }
}
