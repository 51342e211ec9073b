//! "Nice" tick values: steps of 1, 2 or 5 times a power of ten.
//!
//! Used both for histogram thresholds and for the temperature axis, so the
//! bin edges and the axis labels land on the same round numbers.

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Integer tick span `[i1, i2]` and increment.
///
/// A negative increment `-k` means ticks are `i / k` (sub-unit steps are
/// divided rather than multiplied to keep values like 0.1 exact).
fn tick_spec(start: f64, stop: f64, count: f64) -> (i64, i64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let k = 10f64.powf(-power) / factor;
        i1 = (start * k).round() as i64;
        i2 = (stop * k).round() as i64;
        if (i1 as f64) / k < start {
            i1 += 1;
        }
        if (i2 as f64) / k > stop {
            i2 -= 1;
        }
        inc = -k;
    } else {
        let k = 10f64.powf(power) * factor;
        i1 = (start / k).round() as i64;
        i2 = (stop / k).round() as i64;
        if (i1 as f64) * k < start {
            i1 += 1;
        }
        if (i2 as f64) * k > stop {
            i2 -= 1;
        }
        inc = k;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Roughly `count` nice values within `[start, stop]`, ascending.
///
/// A zero-width span yields the single value; a non-positive count or a
/// non-finite bound yields nothing.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_spec(lo, hi, count as f64);
    if i2 < i1 {
        return Vec::new();
    }
    (i1..=i2)
        .map(|i| {
            if inc < 0.0 {
                i as f64 / -inc
            } else {
                i as f64 * inc
            }
        })
        .collect()
}

/// Distance between consecutive values returned by [`ticks`].
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    if count == 0 || start == stop || !start.is_finite() || !stop.is_finite() {
        return 0.0;
    }
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    let (_, _, inc) = tick_spec(lo, hi, count as f64);
    if inc < 0.0 {
        1.0 / -inc
    } else {
        inc
    }
}

/// Decimal places needed to print ticks spaced `step` apart.
pub fn precision_for_step(step: f64) -> usize {
    if step <= 0.0 || !step.is_finite() {
        return 0;
    }
    let exponent = step.abs().log10().floor() as i64;
    (-exponent).max(0) as usize
}

/// Format a tick value with fixed precision and a typographic minus.
pub fn format_tick(value: f64, precision: usize) -> String {
    let text = format!("{:.*}", precision, value);
    match text.strip_prefix('-') {
        // "-0" rounds to zero; drop the sign entirely
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        Some(rest) => format!("\u{2212}{}", rest),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_integer_domain() {
        // 75 / 20 = 3.75 rounds up to a step of 5
        let t = ticks(20.0, 95.0, 20);
        assert_eq!(t.first(), Some(&20.0));
        assert_eq!(t.last(), Some(&95.0));
        assert_eq!(t.len(), 16);
        assert!(t.windows(2).all(|w| w[1] - w[0] == 5.0));
    }

    #[test]
    fn test_ticks_inside_unaligned_domain() {
        let t = ticks(-7.3, 103.6, 10);
        assert_eq!(t, vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0]);
    }

    #[test]
    fn test_ticks_fractional_step() {
        let t = ticks(0.0, 1.0, 10);
        assert_eq!(t.len(), 11);
        assert_eq!(t[1], 0.1);
        assert_eq!(t[3], 0.3);
        assert_eq!(tick_step(0.0, 1.0, 10), 0.1);
        assert_eq!(precision_for_step(0.1), 1);
    }

    #[test]
    fn test_ticks_degenerate() {
        assert_eq!(ticks(5.0, 5.0, 20), vec![5.0]);
        assert!(ticks(0.0, 10.0, 0).is_empty());
        assert!(ticks(f64::NAN, 10.0, 5).is_empty());
    }

    #[test]
    fn test_ticks_reversed_bounds_ascending() {
        assert_eq!(ticks(10.0, 0.0, 2), vec![0.0, 5.0, 10.0]);
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(40.0, 0), "40");
        assert_eq!(format_tick(-10.0, 0), "\u{2212}10");
        assert_eq!(format_tick(-0.0, 0), "0");
        assert_eq!(format_tick(2.5, 1), "2.5");
    }
}
