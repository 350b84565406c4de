/// Returns "nice" tick values covering `[start, stop]`, roughly `count` of them.
///
/// Follows the d3-array tick algorithm: the step is a power of ten times 1, 2
/// or 5, and every returned tick lies inside the requested interval.
#[must_use]
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() || count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (low, high) = if reverse { (stop, start) } else { (start, stop) };
    let Some((i1, i2, inc)) = tick_spec(low, high, count as f64) else {
        return Vec::new();
    };
    if i2 < i1 {
        return Vec::new();
    }

    let n = (i2 - i1 + 1) as usize;
    let value_at = |i: i64| {
        if inc < 0.0 {
            i as f64 / -inc
        } else {
            i as f64 * inc
        }
    };
    let mut out: Vec<f64> = (0..n).map(|k| value_at(i1 + k as i64)).collect();
    if reverse {
        out.reverse();
    }
    out
}

/// Step between ticks produced by `ticks` for the same arguments.
#[must_use]
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    if !start.is_finite() || !stop.is_finite() || count == 0 || start == stop {
        return 0.0;
    }
    let (low, high) = if stop < start { (stop, start) } else { (start, stop) };
    match tick_spec(low, high, count as f64) {
        Some((_, _, inc)) if inc < 0.0 => 1.0 / -inc,
        Some((_, _, inc)) => inc,
        None => 0.0,
    }
}

// Negative `inc` encodes a fractional step as its reciprocal to avoid
// accumulating float error for steps below one.
fn tick_spec(start: f64, stop: f64, count: f64) -> Option<(i64, i64, f64)> {
    let step = (stop - start) / count.max(0.0);
    if !step.is_finite() || step == 0.0 {
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

    let (i1, i2, inc) = if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        let mut i1 = (start * inc).round() as i64;
        let mut i2 = (stop * inc).round() as i64;
        if (i1 as f64) / inc < start {
            i1 += 1;
        }
        if (i2 as f64) / inc > stop {
            i2 -= 1;
        }
        (i1, i2, -inc)
    } else {
        let inc = 10f64.powf(power) * factor;
        let mut i1 = (start / inc).round() as i64;
        let mut i2 = (stop / inc).round() as i64;
        if (i1 as f64) * inc < start {
            i1 += 1;
        }
        if (i2 as f64) * inc > stop {
            i2 -= 1;
        }
        (i1, i2, inc)
    };

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    Some((i1, i2, inc))
}
