//! Best-resolution selection by viewport width.

/// Pick the resolution band for `viewport_width`.
///
/// Returns the number of thresholds strictly exceeded by the width: a width
/// equal to a threshold stays in the lower band. The whole slice is scanned,
/// so for ascending thresholds the result is in `[0, thresholds.len()]` and
/// indexes directly into an image's resolution URLs.
///
/// Thresholds must be ascending. Unsorted input still yields an in-range
/// index, but not one that follows the resolution ladder.
///
/// # Examples
///
/// ```
/// use storefront_widgets::image::select_best_index;
///
/// assert_eq!(select_best_index(&[100, 200], 150), 1);
/// assert_eq!(select_best_index(&[100, 200], 100), 0);
/// ```
pub fn select_best_index(thresholds: &[u32], viewport_width: u32) -> usize {
    let mut best = 0;
    for (i, &threshold) in thresholds.iter().enumerate() {
        if viewport_width > threshold {
            best = i + 1;
        }
    }
    best
}

// ===========================================================================
// Tests
// ===========================================================================
