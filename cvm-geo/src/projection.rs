//! Map projections from (longitude, latitude) degrees to screen coordinates.

use std::f64::consts::FRAC_PI_2;

/// Projects geographic coordinates in degrees to screen space (y grows down).
pub trait Projection {
    fn project(&self, lon: f64, lat: f64) -> (f64, f64);
}

/// Winkel tripel projection: the arithmetic mean of the equirectangular
/// projection (standard parallel `acos(2/pi)`) and the Aitoff projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WinkelTripel {
    pub scale: f64,
    pub translate: (f64, f64),
}

/// World map scale.
pub const DEFAULT_SCALE: f64 = 150.0;
/// World map center in screen coordinates.
pub const DEFAULT_TRANSLATE: (f64, f64) = (400.0, 250.0);

impl Default for WinkelTripel {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            translate: DEFAULT_TRANSLATE,
        }
    }
}

impl WinkelTripel {
    pub fn new(scale: f64, translate: (f64, f64)) -> Self {
        Self { scale, translate }
    }

    /// Unscaled projection of (lambda, phi) in radians, y pointing north.
    pub fn raw(lambda: f64, phi: f64) -> (f64, f64) {
        let (ax, ay) = aitoff_raw(lambda, phi);
        ((ax + lambda / FRAC_PI_2) / 2.0, (ay + phi) / 2.0)
    }
}

impl Projection for WinkelTripel {
    fn project(&self, lon: f64, lat: f64) -> (f64, f64) {
        let (x, y) = Self::raw(lon.to_radians(), lat.to_radians());
        (
            self.translate.0 + self.scale * x,
            self.translate.1 - self.scale * y,
        )
    }
}

fn aitoff_raw(lambda: f64, phi: f64) -> (f64, f64) {
    let cos_phi = phi.cos();
    let half_lambda = lambda / 2.0;
    let sincia = sinci((cos_phi * half_lambda.cos()).clamp(-1.0, 1.0).acos());
    (
        2.0 * cos_phi * half_lambda.sin() * sincia,
        phi.sin() * sincia,
    )
}

/// `x / sin(x)`, continuous at zero.
fn sinci(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        x / x.sin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_origin_maps_to_translate() {
        let p = WinkelTripel::default();
        let (x, y) = p.project(0.0, 0.0);
        assert!(close(x, 400.0));
        assert!(close(y, 250.0));
    }

    #[test]
    fn test_symmetry() {
        let p = WinkelTripel::default();
        let (x1, y1) = p.project(45.0, 30.0);
        let (x2, y2) = p.project(-45.0, -30.0);
        assert!(close(x1 - 400.0, 400.0 - x2));
        assert!(close(y1 - 250.0, 250.0 - y2));
        // north is up
        assert!(y1 < 250.0);
    }

    #[test]
    fn test_equator_extent() {
        // At phi = 0 Aitoff gives lambda and the equirectangular term gives
        // lambda / (pi / 2), so x = (pi + 2) / 2 at lambda = pi.
        let (x, y) = WinkelTripel::raw(PI, 0.0);
        assert!(close(x, (PI + 2.0) / 2.0));
        assert!(close(y, 0.0));
    }

    #[test]
    fn test_pole() {
        let (x, y) = WinkelTripel::raw(0.0, FRAC_PI_2);
        assert!(close(x, 0.0));
        assert!(close(y, FRAC_PI_2));
    }
}
