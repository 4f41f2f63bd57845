//! Continuous scales mapping data values to screen positions and colors.

use crate::ticks;
use chrono::NaiveDate;
use std::fmt;

/// Normalize `v` into `[0, 1]` over `(d0, d1)`. A degenerate domain maps
/// everything to the middle.
fn normalize(v: f64, d0: f64, d1: f64) -> f64 {
    let span = d1 - d0;
    if span == 0.0 || !span.is_finite() {
        0.5
    } else {
        (v - d0) / span
    }
}

fn lerp(t: f64, r0: f64, r1: f64) -> f64 {
    r0 + t * (r1 - r0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn scale(&self, v: f64) -> f64 {
        let t = normalize(v, self.domain.0, self.domain.1);
        lerp(t, self.range.0, self.range.1)
    }

    /// Tick values and their labels.
    pub fn ticks(&self, count: usize) -> Vec<(f64, String)> {
        let (d0, d1) = self.domain;
        let step = ticks::tick_step(d0, d1, count).unwrap_or(1.0);
        ticks::linear_ticks(d0, d1, count)
            .into_iter()
            .map(|v| (v, ticks::format_tick(v, step)))
            .collect()
    }
}

/// Linear scale over calendar days.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    pub domain: (NaiveDate, NaiveDate),
    pub range: (f64, f64),
}

impl TimeScale {
    pub fn new(domain: (NaiveDate, NaiveDate), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn scale(&self, date: NaiveDate) -> f64 {
        let span = (self.domain.1 - self.domain.0).num_days() as f64;
        let offset = (date - self.domain.0).num_days() as f64;
        lerp(normalize(offset, 0.0, span), self.range.0, self.range.1)
    }

    /// Month-aligned tick dates with "%b %Y" labels.
    pub fn ticks(&self, count: usize) -> Vec<(NaiveDate, String)> {
        ticks::month_ticks(self.domain.0, self.domain.1, count)
            .into_iter()
            .map(|d| (d, ticks::format_month_tick(d)))
            .collect()
    }
}

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse "#RRGGBB" (case-insensitive).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Linear interpolation between two colors in RGB space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    pub domain: (f64, f64),
    pub low: Rgb,
    pub high: Rgb,
}

impl ColorScale {
    pub fn new(domain: (f64, f64), low: Rgb, high: Rgb) -> Self {
        Self { domain, low, high }
    }

    pub fn color(&self, v: f64) -> Rgb {
        let t = normalize(v, self.domain.0, self.domain.1);
        let channel = |a: u8, b: u8| lerp(t, a as f64, b as f64).round().clamp(0.0, 255.0) as u8;
        Rgb::new(
            channel(self.low.r, self.high.r),
            channel(self.low.g, self.high.g),
            channel(self.low.b, self.high.b),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_linear_scale() {
        let y = LinearScale::new((0.0, 10.0), (380.0, 0.0));
        assert_eq!(y.scale(0.0), 380.0);
        assert_eq!(y.scale(5.0), 190.0);
        assert_eq!(y.scale(10.0), 0.0);
    }

    #[test]
    fn test_linear_scale_degenerate_domain() {
        let y = LinearScale::new((0.0, 0.0), (100.0, 0.0));
        assert_eq!(y.scale(0.0), 50.0);
        assert_eq!(y.scale(42.0), 50.0);
    }

    #[test]
    fn test_linear_scale_tick_labels() {
        let y = LinearScale::new((0.0, 41321.7), (380.0, 0.0));
        let ticks = y.ticks(10);
        assert_eq!(ticks[1], (5000.0, "5,000".to_string()));
    }

    #[test]
    fn test_time_scale() {
        let x = TimeScale::new((ymd(2021, 1, 1), ymd(2021, 1, 11)), (0.0, 100.0));
        assert_eq!(x.scale(ymd(2021, 1, 1)), 0.0);
        assert_eq!(x.scale(ymd(2021, 1, 6)), 50.0);
        assert_eq!(x.scale(ymd(2021, 1, 11)), 100.0);
    }

    #[test]
    fn test_time_scale_single_day() {
        let day = ymd(2021, 1, 1);
        let x = TimeScale::new((day, day), (0.0, 100.0));
        assert_eq!(x.scale(day), 50.0);
    }

    #[test]
    fn test_rgb_hex_and_display() {
        assert_eq!(Rgb::from_hex("#E0F7E0"), Some(Rgb::new(224, 247, 224)));
        assert_eq!(Rgb::from_hex("#006400"), Some(Rgb::new(0, 100, 0)));
        assert_eq!(Rgb::from_hex("006400"), None);
        assert_eq!(Rgb::from_hex("#0064"), None);
        assert_eq!(Rgb::new(0, 100, 0).to_string(), "rgb(0, 100, 0)");
    }

    #[test]
    fn test_color_scale_endpoints_and_midpoint() {
        let scale = ColorScale::new((0.0, 100.0), Rgb::new(224, 247, 224), Rgb::new(0, 100, 0));
        assert_eq!(scale.color(0.0), Rgb::new(224, 247, 224));
        assert_eq!(scale.color(100.0), Rgb::new(0, 100, 0));
        assert_eq!(scale.color(50.0), Rgb::new(112, 174, 112));
    }
}
