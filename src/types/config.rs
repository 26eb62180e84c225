use crate::error::RideMatchError;
use crate::types::scoring::ScoreWeights;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

pub const DEFAULT_TOP_N: usize = 3;
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RideMatchConfig {
    pub weights: Option<HashMap<String, f64>>,
    pub ranking: Option<RankingConfig>,
    pub usage: Option<UsageConfig>,
    pub catalog: Option<CatalogConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RankingConfig {
    pub top_n: Option<usize>,
    pub parallel_threshold: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UsageConfig {
    #[serde(default = "default_long_haul_tokens")]
    pub long_haul_tokens: Vec<String>,
}

fn default_long_haul_tokens() -> Vec<String> {
    vec!["production".to_string()]
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    pub path: Option<PathBuf>,
}

/// Knobs the scoring engine reads. Defaults reproduce the stock policy.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    pub weights: ScoreWeights,
    pub long_haul_tokens: Vec<String>,
    pub parallel_threshold: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            long_haul_tokens: default_long_haul_tokens(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl RideMatchConfig {
    pub fn weights(&self) -> ScoreWeights {
        let defaults = ScoreWeights::default();
        match &self.weights {
            Some(weights) => ScoreWeights {
                battery: *weights.get("battery").unwrap_or(&defaults.battery),
                motor: *weights.get("motor").unwrap_or(&defaults.motor),
                features: *weights.get("features").unwrap_or(&defaults.features),
                size: *weights.get("size").unwrap_or(&defaults.size),
                usage: *weights.get("usage").unwrap_or(&defaults.usage),
            },
            None => defaults,
        }
    }

    pub fn top_n(&self) -> usize {
        self.ranking
            .as_ref()
            .and_then(|ranking| ranking.top_n)
            .unwrap_or(DEFAULT_TOP_N)
    }

    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog
            .as_ref()
            .and_then(|catalog| catalog.path.clone())
    }

    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            weights: self.weights(),
            long_haul_tokens: self
                .usage
                .as_ref()
                .map(|usage| {
                    usage
                        .long_haul_tokens
                        .iter()
                        .map(|token| token.trim().to_string())
                        .collect()
                })
                .unwrap_or_else(default_long_haul_tokens),
            parallel_threshold: self
                .ranking
                .as_ref()
                .and_then(|ranking| ranking.parallel_threshold)
                .unwrap_or(DEFAULT_PARALLEL_THRESHOLD),
        }
    }

    pub fn validate(&self) -> Result<(), RideMatchError> {
        if let Some(weights) = &self.weights {
            let unknown = weights
                .keys()
                .filter(|key| !ScoreWeights::KEYS.contains(&key.as_str()))
                .cloned()
                .collect::<Vec<_>>();
            if !unknown.is_empty() {
                return Err(RideMatchError::ConfigParse(format!(
                    "weights contains unknown key(s): {}",
                    unknown.join(", ")
                )));
            }
        }

        let weights = self.weights().as_array();
        if weights.iter().any(|weight| !(0.0..=1.0).contains(weight)) {
            return Err(RideMatchError::ConfigParse(
                "weights values must be between 0.0 and 1.0".to_string(),
            ));
        }
        let weight_sum: f64 = weights.iter().sum();
        if (weight_sum - 1.0).abs() > 0.001 {
            return Err(RideMatchError::ConfigParse(format!(
                "weights must sum to 1.0 (found {:.3})",
                weight_sum
            )));
        }

        if self.top_n() == 0 {
            return Err(RideMatchError::ConfigParse(
                "ranking.top_n must be greater than 0".to_string(),
            ));
        }

        if let Some(usage) = &self.usage {
            let mut seen = HashSet::new();
            for token in &usage.long_haul_tokens {
                let normalized = token.trim();
                if normalized.is_empty() {
                    return Err(RideMatchError::ConfigParse(
                        "usage.long_haul_tokens entries must be non-empty".to_string(),
                    ));
                }
                if !seen.insert(normalized) {
                    return Err(RideMatchError::ConfigParse(format!(
                        "usage.long_haul_tokens contains duplicate token: {normalized}"
                    )));
                }
            }
        }

        Ok(())
    }
}
