// File: crates/chart-core/src/grid.rs
// Summary: Grid/tick layout helpers.

/// "Nice" linear ticks (steps of 1, 2, 2.5 or 5 times a power of ten) inside [min, max].
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min || target == 0 {
        return vec![min];
    }
    let raw = (max - min) / target as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let step = mag * if norm <= 1.0 { 1.0 } else if norm <= 2.0 { 2.0 } else if norm <= 2.5 { 2.5 } else if norm <= 5.0 { 5.0 } else { 10.0 };

    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

/// Log-axis ticks inside [min, max]; both bounds must be positive.
/// Powers of ten when at least two fit, otherwise 1-2-5 multiples of them,
/// otherwise every integer multiple (1..9) of them, otherwise the bounds.
pub fn log_ticks(min: f64, max: f64) -> Vec<f64> {
    if min <= 0.0 || max <= min {
        return vec![min.max(f64::MIN_POSITIVE)];
    }
    let lo = min.log10().floor() as i32;
    let hi = max.log10().ceil() as i32;
    let inside = |v: f64| v >= min * (1.0 - 1e-12) && v <= max * (1.0 + 1e-12);

    const MANTISSAS: [&[f64]; 3] = [&[1.0], &[1.0, 2.0, 5.0], &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]];
    for mantissas in MANTISSAS {
        let ticks: Vec<f64> = (lo..=hi)
            .flat_map(|e| mantissas.iter().map(move |m| m * 10f64.powi(e)))
            .filter(|&v| inside(v))
            .collect();
        if ticks.len() >= 2 {
            return ticks;
        }
    }
    vec![min, max]
}

/// Compact tick label: integers print plainly, large or tiny magnitudes use exponent form.
pub fn format_tick(v: f64) -> String {
    let a = v.abs();
    if a == 0.0 {
        return "0".to_string();
    }
    if a >= 1e7 || a < 1e-3 {
        let s = format!("{:.2e}", v);
        // 1.50e7 -> 1.5e7, 1.00e7 -> 1e7
        match s.split_once('e') {
            Some((m, e)) => {
                let m = m.trim_end_matches('0').trim_end_matches('.');
                format!("{m}e{e}")
            }
            None => s,
        }
    } else if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        let s = format!("{:.3}", v);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
