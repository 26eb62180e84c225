use crate::types::scoring::ScoreResult;

/// Order results by composite score, highest first. Equal scores keep their
/// catalog order.
pub fn rank(mut results: Vec<ScoreResult<'_>>) -> Vec<ScoreResult<'_>> {
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results
}

pub fn top_recommendations(results: Vec<ScoreResult<'_>>, count: usize) -> Vec<ScoreResult<'_>> {
    let mut ranked = rank(results);
    ranked.truncate(count);
    ranked
}
