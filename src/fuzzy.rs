//! Team-name suggestions scored with difflib's gestalt ratio.

use std::cmp::Ordering;

use difflib::sequencematcher::SequenceMatcher;

/// Similarity in `[0, 1]`: twice the matched characters over the combined length.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.chars().collect::<Vec<_>>();
    let b = b.chars().collect::<Vec<_>>();
    let mut matcher: SequenceMatcher<'_, char> =
        SequenceMatcher::new(a.as_slice(), b.as_slice());
    f64::from(matcher.ratio())
}

/// Up to `n` candidates scoring at least `cutoff`, best first. Equal scores are
/// ordered by candidate name, descending. Scoring ignores case; the returned names
/// keep the candidates' spelling.
pub fn close_matches<'a>(
    word: &str,
    candidates: &'a [String],
    n: usize,
    cutoff: f64,
) -> Vec<&'a str> {
    if n == 0 {
        return Vec::new();
    }
    let needle = word.to_lowercase();
    let mut scored = candidates
        .iter()
        .map(|candidate| (similarity(&candidate.to_lowercase(), &needle), candidate.as_str()))
        .filter(|(score, _)| *score >= cutoff)
        .collect::<Vec<_>>();
    scored.sort_by(|(sa, na), (sb, nb)| {
        sb.partial_cmp(sa)
            .unwrap_or(Ordering::Equal)
            .then_with(|| nb.cmp(na))
    });
    scored.into_iter().take(n).map(|(_, name)| name).collect()
}
