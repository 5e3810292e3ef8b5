use crate::summarize::Sentence;

/// Number of sentences kept for `total` inputs: `max(1, floor(total * ratio))`,
/// never more than `total`.
pub fn target_count(total: usize, compression_ratio: f64) -> usize {
    if total == 0 {
        return 0;
    }
    let wanted = (total as f64 * compression_ratio).floor();
    // saturating float-to-int cast; NaN becomes 0
    (wanted as usize).clamp(1, total)
}

/// Keep the highest-scoring sentences and return them in reading order.
///
/// Ties keep their input order because the sort is stable.
pub fn select_sentences(mut scored: Vec<Sentence>, compression_ratio: f64) -> Vec<Sentence> {
    let keep = target_count(scored.len(), compression_ratio);
    scored.sort_by(|a, b| b.importance_score.total_cmp(&a.importance_score));
    scored.truncate(keep);
    for sentence in &mut scored {
        sentence.is_important = true;
    }
    scored.sort_by_key(|s| s.position);
    scored
}

/// Join selected sentences with single spaces.
pub fn assemble(selected: &[Sentence]) -> String {
    selected
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
