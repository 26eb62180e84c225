use crate::types::report::RecommendationReport;

pub fn to_json(report: &RecommendationReport<'_>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
