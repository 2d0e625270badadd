/// Position `i` inside a cyclic sequence of `len` entries.
///
/// `len` must be non-zero; callers validate sequence lengths up front.
#[inline]
pub(crate) fn cyclic_index(i: u64, len: usize) -> usize {
    debug_assert!(len > 0, "cyclic_index on empty sequence");
    (i % len as u64) as usize
}

/// `n` evenly spaced samples over `[start, end]`, both ends included.
pub(crate) fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Floating-point modulo that always lands in `[0, m)`.
#[inline]
pub(crate) fn rem_euclid_f64(x: f64, m: f64) -> f64 {
    let r = x.rem_euclid(m);
    // rem_euclid can round up to exactly `m` for tiny negative inputs.
    if r >= m { 0.0 } else { r }
}

/// Convert a normalized channel value to u8 with round-to-nearest.
#[inline]
pub(crate) fn unorm_to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
