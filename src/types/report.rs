use super::scoring::ScoreResult;
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationReport<'a> {
    pub tool_version: String,
    pub generated_at: String,
    pub catalog_digest: String,
    pub catalog_size: usize,
    pub required_range_km: u32,
    pub required_motor_w: u32,
    pub recommendations: Vec<ScoreResult<'a>>,
}

impl<'a> RecommendationReport<'a> {
    pub fn new(
        catalog_digest: String,
        catalog_size: usize,
        required_range_km: u32,
        required_motor_w: u32,
        recommendations: Vec<ScoreResult<'a>>,
    ) -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now().to_rfc3339(),
            catalog_digest,
            catalog_size,
            required_range_km,
            required_motor_w,
            recommendations,
        }
    }
}
