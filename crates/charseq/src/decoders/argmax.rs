//! # Argmax Token Selection

/// The index of the largest score.
///
/// Ties go to the lowest index: the scan is left-to-right and only a
/// strictly larger value replaces the current best. `NaN` never wins.
///
/// ## Returns
/// `None` if `scores` is empty, or holds only `NaN`.
pub fn argmax(scores: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (idx, &v) in scores.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        match best {
            Some((_, bv)) if v <= bv => {}
            _ => best = Some((idx, v)),
        }
    }
    best.map(|(idx, _)| idx)
}
