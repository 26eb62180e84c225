use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// One raw answer: a single chosen option or a set of chosen options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Single(String),
    Multiple(Vec<String>),
}

/// Quiz answers keyed by question id, one field per question the engine reads.
///
/// Every field is optional; an unanswered question is `None` and the engine
/// falls back to its neutral defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnswerSet {
    pub daily_distance: Option<String>,
    pub rider_weight: Option<String>,
    pub max_speed: Option<String>,
    pub road_terrain: Option<String>,
    pub usage_type: Option<String>,
    pub tire_preference: Option<String>,
    pub brake_preference: Option<String>,
    pub suspension_preference: Option<String>,
    pub water_resistance: Option<String>,
    pub size_preference: Option<String>,
    pub tire_size_preference: Option<String>,
    pub portability: Option<String>,
    /// Accepted but inert: the official-service rule is disabled.
    pub warranty_service: Option<String>,
}

impl AnswerSet {
    pub fn from_raw(raw: BTreeMap<String, AnswerValue>) -> Self {
        let mut answers = Self::default();
        for (question, value) in raw {
            let token = match value {
                AnswerValue::Single(token) => token,
                AnswerValue::Multiple(tokens) => {
                    debug!(question = %question, ?tokens, "ignoring multi-valued answer");
                    continue;
                }
            };
            let slot = match question.as_str() {
                "daily_distance" => &mut answers.daily_distance,
                "rider_weight" => &mut answers.rider_weight,
                "max_speed" => &mut answers.max_speed,
                "road_terrain" => &mut answers.road_terrain,
                "usage_type" => &mut answers.usage_type,
                "tire_preference" => &mut answers.tire_preference,
                "brake_preference" => &mut answers.brake_preference,
                "suspension_preference" => &mut answers.suspension_preference,
                "water_resistance" => &mut answers.water_resistance,
                "size_preference" => &mut answers.size_preference,
                "tire_size_preference" => &mut answers.tire_size_preference,
                "portability" => &mut answers.portability,
                "warranty_service" => &mut answers.warranty_service,
                _ => {
                    debug!(question = %question, "ignoring unknown question id");
                    continue;
                }
            };
            *slot = Some(token);
        }
        answers
    }

    pub fn daily_distance(&self) -> &str {
        self.daily_distance.as_deref().unwrap_or_default()
    }

    pub fn rider_weight(&self) -> &str {
        self.rider_weight.as_deref().unwrap_or_default()
    }

    pub fn road_terrain(&self) -> &str {
        self.road_terrain.as_deref().unwrap_or_default()
    }

    /// Requested top speed: the leading digits of the answer ("30+" reads as 30).
    /// `None` when unanswered or when the answer does not start with a digit.
    pub fn requested_speed_kmh(&self) -> Option<f64> {
        let token = self.max_speed.as_deref()?.trim_start();
        let digits: String = token.chars().take_while(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return None;
        }
        digits.parse().ok()
    }

    /// A preference counts only when answered with something other than `no_preference`.
    pub fn preference(value: &Option<String>) -> Option<&str> {
        value
            .as_deref()
            .filter(|token| !token.is_empty() && *token != "no_preference")
    }
}
