use geo_types::Coord;

use super::{convex_hull, cross, norm};

/// Relative tolerance for parallelism and side-of-line tests.
const EPS: f64 = 1e-12;

/// Supporting line through a hull edge; the hull lies on its left.
#[derive(Debug, Clone, Copy)]
struct Line {
    origin: Coord<f64>,
    dir: Coord<f64>,
}

impl Line {
    fn through(a: Coord<f64>, b: Coord<f64>) -> Self {
        Self { origin: a, dir: b - a }
    }

    fn intersect(&self, other: &Line) -> Option<Coord<f64>> {
        let denom = cross(self.dir, other.dir);
        if denom.abs() <= EPS * norm(self.dir) * norm(other.dir) {
            return None;
        }
        let t = cross(other.origin - self.origin, other.dir) / denom;
        Some(self.origin + self.dir * t)
    }

    /// Signed distance-like offset of `p`, positive on the hull side.
    fn side(&self, p: Coord<f64>) -> f64 {
        cross(self.dir, p - self.origin)
    }
}

fn turns_left(a: Coord<f64>, b: Coord<f64>) -> bool {
    cross(a, b) > EPS * norm(a) * norm(b)
}

fn triangle_area(t: &[Coord<f64>; 3]) -> f64 {
    cross(t[1] - t[0], t[2] - t[0]).abs() / 2.0
}

/// First index in `0..len` where `pred` fails, for a predicate holding on a prefix.
fn partition_point(len: usize, pred: impl Fn(usize) -> bool) -> usize {
    let (mut lo, mut hi) = (0, len);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if pred(mid) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Triangle with two sides on `li` and `lj` and the third side touching
/// `v` at its midpoint, provided that side supports the hull at `v`.
fn balanced_at(
    li: &Line,
    lj: &Line,
    apex: Coord<f64>,
    prev: Coord<f64>,
    v: Coord<f64>,
    next: Coord<f64>,
) -> Option<[Coord<f64>; 3]> {
    let det = cross(li.dir, lj.dir);
    let r = v * 2.0 - li.origin - lj.origin;
    let x = li.origin + li.dir * (cross(r, lj.dir) / det);
    let y = lj.origin + lj.dir * (cross(li.dir, r) / det);

    let reach = norm(y - x);
    if reach == 0.0 {
        return None;
    }
    let slack = EPS * reach * reach.max(1.0);
    if li.side(y) <= slack || lj.side(x) <= slack {
        return None;
    }

    let third = Line::through(x, y);
    let apex_side = third.side(apex);
    if apex_side.abs() <= slack {
        return None;
    }
    let sign = apex_side.signum();
    if third.side(prev) * sign < -slack || third.side(next) * sign < -slack {
        return None;
    }
    Some([apex, x, y])
}

/// Smallest-area triangle containing every point.
///
/// Every candidate has two sides on lines through consecutive-turning hull
/// edges `i` and `j`. The third side is either flush with a later hull edge
/// or balanced on a hull vertex at the side's midpoint. For a fixed pair the
/// area is unimodal along the remaining hull chain, so the flush side is
/// found by ternary search and only the vertices next to it are tried as
/// balance points. Returns `None` when the hull has fewer than three
/// vertices.
pub fn min_enclosing_triangle(points: &[Coord<f64>]) -> Option<[Coord<f64>; 3]> {
    let hull = convex_hull(points);
    let n = hull.len();
    if n < 3 {
        return None;
    }

    let lines: Vec<Line> = (0..n)
        .map(|i| Line::through(hull[i], hull[(i + 1) % n]))
        .collect();

    let mut best: Option<([Coord<f64>; 3], f64)> = None;
    let mut consider = |candidate: [Coord<f64>; 3]| {
        let area = triangle_area(&candidate);
        if area > 0.0 && best.map_or(true, |(_, best_area)| area < best_area) {
            best = Some((candidate, area));
        }
    };

    for i in 0..n {
        for j in 0..n {
            if i == j || !turns_left(lines[i].dir, lines[j].dir) {
                continue;
            }
            let (li, lj) = (lines[i], lines[j]);
            let Some(apex) = li.intersect(&lj) else {
                continue;
            };

            // Edges strictly after j and before i, in hull order.
            let gap = (i + n - j - 1) % n;
            let edge = |u: usize| (j + 1 + u) % n;
            let flush = |u: usize| -> Option<[Coord<f64>; 3]> {
                let lk = lines[edge(u)];
                Some([apex, lj.intersect(&lk)?, lk.intersect(&li)?])
            };
            let area_at = |u: usize| flush(u).map_or(f64::INFINITY, |t| triangle_area(&t));

            // Edges closing a triangle turn left from j and left into i.
            let start = partition_point(gap, |u| !turns_left(lines[edge(u)].dir, li.dir));
            let end = partition_point(gap, |u| turns_left(lj.dir, lines[edge(u)].dir));

            let (from, to) = if start < end {
                let (mut lo, mut hi) = (start, end - 1);
                while hi - lo > 2 {
                    let m1 = lo + (hi - lo) / 3;
                    let m2 = hi - (hi - lo) / 3;
                    if area_at(m1) <= area_at(m2) {
                        hi = m2;
                    } else {
                        lo = m1;
                    }
                }
                let mut best_u = lo;
                for u in lo..=hi {
                    if let Some(candidate) = flush(u) {
                        consider(candidate);
                    }
                    if area_at(u) < area_at(best_u) {
                        best_u = u;
                    }
                }
                (best_u.saturating_sub(1), best_u + 2)
            } else {
                (end.saturating_sub(1), start + 1)
            };

            // Vertex at offset w starts edge `edge(w)`; offset `gap` is hull[i].
            for w in from..=to.min(gap) {
                let m = (j + 1 + w) % n;
                let prev = hull[(m + n - 1) % n];
                let next = hull[(m + 1) % n];
                if let Some(candidate) = balanced_at(&li, &lj, apex, prev, hull[m], next) {
                    consider(candidate);
                }
            }
        }
    }

    best.map(|(triangle, _)| triangle)
}

/// Area of [`min_enclosing_triangle`], zero for degenerate input.
pub fn min_enclosing_triangle_area(points: &[Coord<f64>]) -> f64 {
    min_enclosing_triangle(points)
        .map(|t| triangle_area(&t))
        .unwrap_or(0.0)
}
