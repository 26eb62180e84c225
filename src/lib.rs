pub mod answers;
pub mod catalog;
pub mod config;
pub mod error;
pub mod rank;
pub mod report;
pub mod requirements;
pub mod scoring;
pub mod telemetry;
pub mod types;

use types::answers::AnswerSet;
use types::config::EngineSettings;
use types::item::Item;
use types::scoring::ScoreResult;

/// Score the whole catalog against one answer set and keep the best `count`.
pub fn recommend<'a>(
    catalog: &'a [Item],
    answers: &AnswerSet,
    settings: &EngineSettings,
    count: usize,
) -> Vec<ScoreResult<'a>> {
    let scored = scoring::score_catalog(catalog, answers, settings);
    rank::top_recommendations(scored, count)
}
