//! SVG path data (`d` attribute) generation.

use crate::projection::Projection;
use geo::{LineString, MultiPolygon};
use std::fmt::Write;

/// Format a screen coordinate with at most two decimals and no trailing zeros.
pub fn fmt_coord(v: f64) -> String {
    // adding 0.0 turns -0.0 into 0.0
    let rounded = (v * 100.0).round() / 100.0 + 0.0;
    format!("{}", rounded)
}

/// Path data through already-projected points: `M x,y L x,y ...`.
pub fn polyline(points: &[(f64, f64)], closed: bool) -> String {
    let mut d = String::new();
    for (i, (x, y)) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{}{},{}", cmd, fmt_coord(*x), fmt_coord(*y));
    }
    if closed && !points.is_empty() {
        d.push('Z');
    }
    d
}

/// Project a line of (lon, lat) pairs and return its path data.
pub fn line_path<P: Projection>(projection: &P, coords: &[(f64, f64)], closed: bool) -> String {
    let projected: Vec<(f64, f64)> = coords
        .iter()
        .map(|(lon, lat)| projection.project(*lon, *lat))
        .collect();
    polyline(&projected, closed)
}

fn ring_path<P: Projection>(projection: &P, ring: &LineString<f64>, out: &mut String) {
    let coords: Vec<(f64, f64)> = ring.coords().map(|c| (c.x, c.y)).collect();
    // the closing coordinate duplicates the first one; `Z` closes the ring
    let open = match coords.split_last() {
        Some((last, rest)) if rest.first() == Some(last) => rest,
        _ => &coords[..],
    };
    out.push_str(&line_path(projection, open, true));
}

/// Path data for every ring (exterior and holes) of a multipolygon.
pub fn multipolygon_path<P: Projection>(projection: &P, geometry: &MultiPolygon<f64>) -> String {
    let mut d = String::new();
    for polygon in geometry.iter() {
        ring_path(projection, polygon.exterior(), &mut d);
        for interior in polygon.interiors() {
            ring_path(projection, interior, &mut d);
        }
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::WinkelTripel;
    use geo::{polygon, MultiPolygon};

    struct Identity;

    impl Projection for Identity {
        fn project(&self, lon: f64, lat: f64) -> (f64, f64) {
            (lon, lat)
        }
    }

    #[test]
    fn test_fmt_coord() {
        assert_eq!(fmt_coord(0.0), "0");
        assert_eq!(fmt_coord(-0.0001), "0");
        assert_eq!(fmt_coord(215.0), "215");
        assert_eq!(fmt_coord(107.5), "107.5");
        assert_eq!(fmt_coord(1.23456), "1.23");
    }

    #[test]
    fn test_polyline() {
        assert_eq!(polyline(&[(0.0, 1.0), (2.0, 3.0)], false), "M0,1L2,3");
        assert_eq!(polyline(&[(0.0, 1.0), (2.0, 3.0)], true), "M0,1L2,3Z");
        assert_eq!(polyline(&[], true), "");
    }

    #[test]
    fn test_multipolygon_path_drops_closing_coordinate() {
        let square = polygon![(x: 0.0, y: 0.0), (x: 2.0, y: 0.0), (x: 2.0, y: 2.0), (x: 0.0, y: 2.0)];
        let mp = MultiPolygon::new(vec![square]);
        assert_eq!(multipolygon_path(&Identity, &mp), "M0,0L2,0L2,2L0,2Z");
    }

    #[test]
    fn test_multipolygon_path_with_hole() {
        let with_hole = polygon!(
            exterior: [(x: 0.0, y: 0.0), (x: 4.0, y: 0.0), (x: 4.0, y: 4.0), (x: 0.0, y: 4.0)],
            interiors: [[(x: 1.0, y: 1.0), (x: 2.0, y: 1.0), (x: 2.0, y: 2.0)]],
        );
        let d = multipolygon_path(&Identity, &MultiPolygon::new(vec![with_hole]));
        assert_eq!(d.matches('M').count(), 2);
        assert_eq!(d.matches('Z').count(), 2);
    }

    #[test]
    fn test_line_path_projects() {
        let projection = WinkelTripel::new(100.0, (0.0, 0.0));
        assert_eq!(line_path(&projection, &[(0.0, 0.0)], false), "M0,0");
    }
}
