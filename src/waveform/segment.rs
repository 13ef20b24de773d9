use std::ops::Range;

/// Split a buffer of `len` samples into exactly `count` contiguous,
/// non-overlapping ranges of floor(len / count) samples each.
///
/// Remainder policy: trailing samples beyond `count * floor(len / count)`
/// are dropped, so every segment has the same length. When `len < count`
/// the segment length is zero and every range is empty.
pub fn segments(len: usize, count: usize) -> impl Iterator<Item = Range<usize>> {
    debug_assert!(count > 0, "segment count must be positive");
    let seg_len = len / count;
    (0..count).map(move |i| i * seg_len..(i + 1) * seg_len)
}
