//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
//! Polygon helpers used by the draw list to fill arbitrary outlines.

use crate::*;

fn cross(o: Vec2f, a: Vec2f, b: Vec2f) -> f32 { (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x) }

fn same_point(a: Vec2f, b: Vec2f) -> bool { a.x == b.x && a.y == b.y }

/// Twice the signed area of the polygon; positive for counter-clockwise winding in a y-up frame.
pub fn polygon_area(points: &[Vec2f]) -> f32 {
    let n = points.len();
    (0..n).map(|i| {
        let a = points[i];
        let b = points[(i + 1) % n];
        a.x * b.y - b.x * a.y
    })
    .sum()
}

/// Returns `true` if every corner of the polygon turns the same way. Collinear corners are ignored.
pub fn is_convex(points: &[Vec2f]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut sign = 0.0f32;
    for i in 0..n {
        let c = cross(points[i], points[(i + 1) % n], points[(i + 2) % n]);
        if c == 0.0 {
            continue;
        }
        if sign == 0.0 {
            sign = c.signum();
        } else if c.signum() != sign {
            return false;
        }
    }
    sign != 0.0
}

/// Inside test that counts points on an edge as inside.
fn in_triangle(p: Vec2f, a: Vec2f, b: Vec2f, c: Vec2f) -> bool {
    let d0 = cross(a, b, p);
    let d1 = cross(b, c, p);
    let d2 = cross(c, a, p);
    let has_neg = d0 < 0.0 || d1 < 0.0 || d2 < 0.0;
    let has_pos = d0 > 0.0 || d1 > 0.0 || d2 > 0.0;
    !(has_neg && has_pos)
}

/// Ear-clips a simple polygon into a triangle list, appending vertex indices to `out`.
///
/// Works for either winding. Vertices that coincide with an ear's corners do not block the ear.
/// Self-intersecting input cannot always be clipped; the remainder is then emitted as a fan.
pub fn triangulate(points: &[Vec2f], out: &mut Vec<u32>) -> UiResult<()> {
    let n = points.len();
    if n < 3 {
        return Err(UiError::DegeneratePolygon(n).logged());
    }
    let winding = polygon_area(points).signum();
    let mut remaining: Vec<u32> = (0..n as u32).collect();

    while remaining.len() > 3 {
        let m = remaining.len();
        let mut clipped = false;
        for i in 0..m {
            let ia = remaining[(i + m - 1) % m];
            let ib = remaining[i];
            let ic = remaining[(i + 1) % m];
            let (a, b, c) = (points[ia as usize], points[ib as usize], points[ic as usize]);
            let turn = cross(a, b, c);
            if turn == 0.0 {
                // collinear corner adds no area
                remaining.remove(i);
                clipped = true;
                break;
            }
            if turn.signum() != winding {
                continue;
            }
            let blocked = remaining.iter().any(|&j| {
                if j == ia || j == ib || j == ic {
                    return false;
                }
                let p = points[j as usize];
                if same_point(p, a) || same_point(p, b) || same_point(p, c) {
                    return false;
                }
                in_triangle(p, a, b, c)
            });
            if blocked {
                continue;
            }
            out.extend_from_slice(&[ia, ib, ic]);
            remaining.remove(i);
            clipped = true;
            break;
        }
        if !clipped {
            tracing::warn!("polygon with {} vertices could not be ear clipped, filling the rest as a fan", n);
            for k in 1..remaining.len() - 1 {
                out.extend_from_slice(&[remaining[0], remaining[k], remaining[k + 1]]);
            }
            return Ok(());
        }
    }
    if remaining.len() == 3 {
        out.extend_from_slice(&remaining);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(v: &[(f32, f32)]) -> Vec<Vec2f> { v.iter().map(|&(x, y)| vec2f(x, y)).collect() }

    fn covered_area(points: &[Vec2f], indices: &[u32]) -> f32 {
        indices
            .chunks(3)
            .map(|t| cross(points[t[0] as usize], points[t[1] as usize], points[t[2] as usize]).abs() / 2.0)
            .sum()
    }

    #[test]
    fn convexity() {
        assert!(is_convex(&pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)])));
        assert!(!is_convex(&pts(&[(0.0, 0.0), (10.0, 0.0), (5.0, 2.0), (10.0, 10.0), (0.0, 10.0)])));
        assert!(!is_convex(&pts(&[(0.0, 0.0), (1.0, 1.0)])));
    }

    #[test]
    fn concave_polygon_is_fully_covered() {
        // an L shape, clockwise in screen space
        let shape = pts(&[(0.0, 0.0), (20.0, 0.0), (20.0, 10.0), (10.0, 10.0), (10.0, 20.0), (0.0, 20.0)]);
        let mut out = Vec::new();
        triangulate(&shape, &mut out).unwrap();
        assert_eq!(out.len(), (shape.len() - 2) * 3);
        assert_eq!(covered_area(&shape, &out), 300.0);
    }

    #[test]
    fn both_windings_work() {
        let mut shape = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (2.0, 1.0), (0.0, 4.0)]);
        let mut out = Vec::new();
        triangulate(&shape, &mut out).unwrap();
        let forward = covered_area(&shape, &out);
        shape.reverse();
        out.clear();
        triangulate(&shape, &mut out).unwrap();
        assert_eq!(covered_area(&shape, &out), forward);
        assert_eq!(forward, polygon_area(&shape).abs() / 2.0);
    }

    #[test]
    fn duplicate_vertices_do_not_block_ears() {
        let shape = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        let mut out = Vec::new();
        triangulate(&shape, &mut out).unwrap();
        assert_eq!(covered_area(&shape, &out), 100.0);
    }

    #[test]
    fn too_few_points_is_an_error() {
        let mut out = Vec::new();
        assert_eq!(triangulate(&pts(&[(0.0, 0.0), (1.0, 0.0)]), &mut out), Err(UiError::DegeneratePolygon(2)));
    }
}
