//! Ramer-Douglas-Peucker line simplification over raw coordinates.

use crate::coord::Coordinate;

/// Simplify a track, keeping every point further than `epsilon` degrees
/// from the chord of its enclosing segment.
///
/// Endpoints are always preserved and the output is an order-preserving
/// subsequence of the input. Returns an empty vector for fewer than two
/// input points.
pub(crate) fn douglas_peucker(points: &[Coordinate], epsilon: f64) -> Vec<Coordinate> {
    if points.len() < 2 {
        return Vec::new();
    }

    let end = points.len() - 1;
    let mut dmax = 0.0;
    let mut index = 0;
    for (i, point) in points.iter().enumerate().take(end).skip(1) {
        let d = perpendicular_distance(*point, points[0], points[end]);
        if d > dmax {
            index = i;
            dmax = d;
        }
    }

    if dmax > epsilon {
        // Split at the farthest point; the shared midpoint appears in both
        // halves, drop its first occurrence when stitching.
        let mut out = douglas_peucker(&points[..=index], epsilon);
        let tail = douglas_peucker(&points[index..], epsilon);
        out.pop();
        out.extend(tail);
        out
    } else {
        vec![points[0], points[end]]
    }
}

/// Distance of `point` from the infinite line through `line_start` and
/// `line_end`, via projection onto the normalized chord direction.
///
/// A zero-length chord degenerates to the distance from the shared endpoint.
pub(crate) fn perpendicular_distance(
    point: Coordinate,
    line_start: Coordinate,
    line_end: Coordinate,
) -> f64 {
    let mut d_lat = line_end.lat - line_start.lat;
    let mut d_lon = line_end.lon - line_start.lon;

    let mag = (d_lat * d_lat + d_lon * d_lon).sqrt();
    if mag > 0.0 {
        d_lat /= mag;
        d_lon /= mag;
    }

    let pv_lat = point.lat - line_start.lat;
    let pv_lon = point.lon - line_start.lon;

    // Projection length onto the chord, then the residual is perpendicular
    let dot = d_lat * pv_lat + d_lon * pv_lon;
    let res_lat = pv_lat - dot * d_lat;
    let res_lon = pv_lon - dot * d_lon;

    (res_lat * res_lat + res_lon * res_lon).sqrt()
}
