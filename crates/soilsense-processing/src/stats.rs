//! Statistical helpers for column cleaning.

/// Quantile of pre-sorted values via linear interpolation between the two
/// nearest ranks (the same convention the quartile bounds are defined in).
///
/// Callers must pass a non-empty, ascending slice.
pub(crate) fn quantile_linear(sorted: &[f64], q: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    debug_assert!((0.0..=1.0).contains(&q));

    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let pos = q * (n - 1) as f64;
    let lower_idx = pos.floor() as usize;
    let upper_idx = pos.ceil() as usize;

    if lower_idx == upper_idx {
        sorted[lower_idx]
    } else {
        let fraction = pos - lower_idx as f64;
        sorted[lower_idx] + fraction * (sorted[upper_idx] - sorted[lower_idx])
    }
}

/// Outlier fences derived from the interquartile range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct IqrBounds {
    pub lower: f64,
    pub upper: f64,
}

/// Compute `[Q1 - 1.5*IQR, Q3 + 1.5*IQR]` over already-sorted values.
pub(crate) fn iqr_bounds(sorted: &[f64]) -> IqrBounds {
    let q1 = quantile_linear(sorted, 0.25);
    let q3 = quantile_linear(sorted, 0.75);
    let iqr = q3 - q1;

    IqrBounds {
        lower: q1 - 1.5 * iqr,
        upper: q3 + 1.5 * iqr,
    }
}
