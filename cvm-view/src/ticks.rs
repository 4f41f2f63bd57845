//! Axis tick generation and labels.
//!
//! Linear ticks use the usual 1-2-5 rule: the step is a power of ten times
//! 1, 2, 5 or 10, chosen so that roughly `count` ticks cover the domain.
//! Time ticks are month aligned and labelled "%b %Y".

use chrono::{Datelike, Months, NaiveDate};

/// Default number of ticks asked of a scale.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Label format for time axis ticks ("Jan 2021").
pub const TIME_TICK_FORMAT: &str = "%b %Y";

/// Month steps tried for time ticks, smallest first.
const MONTH_STEPS: [u32; 8] = [1, 2, 3, 6, 12, 24, 60, 120];

/// Upper bound on ticks per requested tick, past which the domain is
/// treated as not tickable.
const MAX_TICKS_PER_COUNT: f64 = 10.0;

/// Tick positions as `i * step` (or `i / inv` for steps below one) for `i`
/// in `first..=last`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct TickRange {
    first: i64,
    last: i64,
    /// Positive: multiplier. Negative: inverse divisor.
    inc: f64,
}

fn tick_range(start: f64, stop: f64, count: f64) -> Option<TickRange> {
    let step = (stop - start) / count.max(0.0);
    if !step.is_finite() || step <= 0.0 {
        return None;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    let (mut first, mut last, inc);
    if power < 0.0 {
        let inv = 10f64.powf(-power) / factor;
        if !inv.is_finite() {
            return None;
        }
        first = (start * inv).round() as i64;
        last = (stop * inv).round() as i64;
        if (first as f64) / inv < start {
            first += 1;
        }
        if (last as f64) / inv > stop {
            last -= 1;
        }
        inc = -inv;
    } else {
        let mul = 10f64.powf(power) * factor;
        if !mul.is_finite() {
            return None;
        }
        first = (start / mul).round() as i64;
        last = (stop / mul).round() as i64;
        if (first as f64) * mul < start {
            first += 1;
        }
        if (last as f64) * mul > stop {
            last -= 1;
        }
        inc = mul;
    }
    if last.saturating_sub(first) as f64 > count * MAX_TICKS_PER_COUNT {
        return None;
    }
    if last < first && (0.5..2.0).contains(&count) {
        return tick_range(start, stop, count * 2.0);
    }
    Some(TickRange { first, last, inc })
}

/// The step between linear ticks, always positive.
pub fn tick_step(start: f64, stop: f64, count: usize) -> Option<f64> {
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    let range = tick_range(lo, hi, count as f64)?;
    Some(if range.inc < 0.0 { 1.0 / -range.inc } else { range.inc })
}

/// Nicely rounded tick values covering `[start, stop]`.
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let Some(range) = tick_range(lo, hi, count as f64) else {
        return Vec::new();
    };
    if range.last < range.first {
        return Vec::new();
    }
    let mut ticks: Vec<f64> = (range.first..=range.last)
        .map(|i| {
            if range.inc < 0.0 {
                i as f64 / -range.inc
            } else {
                i as f64 * range.inc
            }
        })
        .collect();
    if reverse {
        ticks.reverse();
    }
    ticks
}

/// Label a linear tick with thousands separators and as many decimals as
/// the step needs.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step.is_finite() {
        (-step.log10().floor()).max(0.0) as usize
    } else {
        0
    };
    let text = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };
    let mut grouped = String::with_capacity(text.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    let is_zero = grouped.chars().all(|c| matches!(c, '0' | ',' | '.'));
    if value < 0.0 && !is_zero {
        grouped.insert(0, '-');
    }
    grouped
}

fn month_index(date: NaiveDate) -> i64 {
    date.year() as i64 * 12 + date.month0() as i64
}

/// First day of each aligned month inside `[start, end]`.
///
/// The step is the smallest of 1, 2, 3, 6, 12, 24, 60 or 120 months giving
/// at most `count` ticks. Sub-year steps align to months divisible by the
/// step, year steps to January of years divisible by the number of years.
/// A domain containing no month start yields a single tick at `start`.
pub fn month_ticks(start: NaiveDate, end: NaiveDate, count: usize) -> Vec<NaiveDate> {
    let (start, end) = if end < start { (end, start) } else { (start, end) };
    let span = (month_index(end) - month_index(start)).max(1);
    let count = count.max(1) as i64;
    let step = MONTH_STEPS
        .iter()
        .copied()
        .find(|s| span / *s as i64 <= count)
        .unwrap_or(MONTH_STEPS[MONTH_STEPS.len() - 1]);

    let mut ticks = Vec::new();
    let mut cursor = start.with_day(1).unwrap_or(start);
    if cursor < start {
        cursor = cursor + Months::new(1);
    }
    while cursor <= end {
        let aligned = if step < 12 {
            cursor.month0() % step == 0
        } else {
            cursor.month0() == 0 && cursor.year().rem_euclid((step / 12) as i32) == 0
        };
        if aligned {
            ticks.push(cursor);
        }
        cursor = cursor + Months::new(1);
    }
    if ticks.is_empty() {
        ticks.push(start);
    }
    ticks
}

pub fn format_month_tick(date: NaiveDate) -> String {
    date.format(TIME_TICK_FORMAT).to_string()
}
