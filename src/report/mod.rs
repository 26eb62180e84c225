pub mod json;
pub mod md;

use crate::error::RideMatchError;
use crate::types::report::RecommendationReport;
use crate::types::scoring::ScoreResult;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(
    report: &RecommendationReport<'_>,
    format: OutputFormat,
) -> Result<String, RideMatchError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(RideMatchError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

pub fn render_result(
    result: &ScoreResult<'_>,
    format: OutputFormat,
) -> Result<String, RideMatchError> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(result).map_err(RideMatchError::Json),
        OutputFormat::Md => Ok(md::result_to_markdown(result)),
    }
}
