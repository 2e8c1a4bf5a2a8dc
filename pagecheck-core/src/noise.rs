// UX noise heuristic over raw markup

/// Crude signal counting over the raw HTML text, not a parsed DOM. Higher
/// means noisier. Counts are case-sensitive and the thresholds are part of
/// the contract.
pub fn noise_score(html: &str) -> u32 {
    let mut score = html.matches("<iframe").count() as u32;
    if html.matches("subscribe").count() > 5 {
        score += 1;
    }
    if html.matches("popup").count() > 2 {
        score += 1;
    }
    score
}
