/// Map `r` in `[0, 1)` onto an index in `0..len`.
///
/// Computes `floor(r * len)` and clamps to `len - 1`, so a value that rounds up
/// to exactly `1.0` still lands on the last item. NaN and negative values map
/// to `0`. `len` must be at least 1; catalogs guarantee this at construction.
pub fn select_index(r: f64, len: usize) -> usize {
    debug_assert!(len > 0, "select_index needs a non-empty catalog");
    let last = len.saturating_sub(1);
    if r.is_nan() || r <= 0.0 {
        return 0;
    }
    let scaled = (r * len as f64).floor();
    if scaled >= len as f64 {
        last
    } else {
        scaled as usize
    }
}
