//! Graticule lines and the sphere outline drawn behind the countries.

/// Spacing between meridians and parallels, in degrees.
pub const STEP: f64 = 10.0;
/// Minor lines stop short of the poles.
pub const MINOR_LAT_LIMIT: f64 = 80.0;
/// Sampling interval along each line so curved projections stay smooth.
pub const PRECISION: f64 = 2.5;

/// Inclusive samples from `start` to `end` spaced at most `precision` apart.
fn samples(start: f64, end: f64, precision: f64) -> Vec<f64> {
    let span = end - start;
    let n = (span.abs() / precision).ceil().max(1.0) as usize;
    (0..=n).map(|i| start + span * i as f64 / n as f64).collect()
}

fn meridian(lon: f64, lat_limit: f64) -> Vec<(f64, f64)> {
    samples(-lat_limit, lat_limit, PRECISION)
        .into_iter()
        .map(|lat| (lon, lat))
        .collect()
}

fn parallel(lat: f64) -> Vec<(f64, f64)> {
    samples(-180.0, 180.0, PRECISION)
        .into_iter()
        .map(|lon| (lon, lat))
        .collect()
}

/// All graticule lines as (lon, lat) polylines.
///
/// Minor meridians every 10 degrees span latitudes -80..80; the major
/// meridians at multiples of 90 degrees run pole to pole. Parallels every
/// 10 degrees span -80..80.
pub fn lines() -> Vec<Vec<(f64, f64)>> {
    let mut out = Vec::new();
    let mut lon = -180.0;
    while lon < 180.0 {
        let limit = if lon % 90.0 == 0.0 { 90.0 } else { MINOR_LAT_LIMIT };
        out.push(meridian(lon, limit));
        lon += STEP;
    }
    let mut lat = -MINOR_LAT_LIMIT;
    while lat <= MINOR_LAT_LIMIT {
        out.push(parallel(lat));
        lat += STEP;
    }
    out
}

/// Closed ring around the whole sphere: up the western antimeridian and down
/// the eastern one.
pub fn outline() -> Vec<(f64, f64)> {
    let mut ring = meridian(-180.0, 90.0);
    ring.extend(meridian(180.0, 90.0).into_iter().rev());
    ring
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_inclusive() {
        let s = samples(-10.0, 10.0, 2.5);
        assert_eq!(s.len(), 9);
        assert_eq!(s[0], -10.0);
        assert_eq!(s[8], 10.0);
    }

    #[test]
    fn test_line_counts() {
        let all = lines();
        // 36 meridians and 17 parallels
        assert_eq!(all.len(), 36 + 17);
        let major = all.iter().filter(|l| l[0].1 == -90.0).count();
        assert_eq!(major, 4);
    }

    #[test]
    fn test_outline_wraps_sphere() {
        let ring = outline();
        assert_eq!(ring.first(), Some(&(-180.0, -90.0)));
        assert_eq!(ring.last(), Some(&(180.0, -90.0)));
    }
}
