use super::item::Item;
use serde::Serialize;

pub type Score = f64;

/// Per-criterion sub-scores. All lie in `[0, 100]` except `features`, which
/// is an uncapped sum of per-feature points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub battery: Score,
    pub motor: Score,
    /// Held at 100 and left out of the composite until price data is trusted.
    pub budget: Score,
    pub features: Score,
    pub size: Score,
    pub usage: Score,
}

impl ScoreBreakdown {
    pub fn composite(&self, weights: &ScoreWeights) -> Score {
        self.battery * weights.battery
            + self.motor * weights.motor
            + self.features * weights.features
            + self.size * weights.size
            + self.usage * weights.usage
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreWeights {
    pub battery: Score,
    pub motor: Score,
    pub features: Score,
    pub size: Score,
    pub usage: Score,
}

impl ScoreWeights {
    pub const KEYS: [&'static str; 5] = ["battery", "motor", "features", "size", "usage"];

    pub fn as_array(&self) -> [Score; 5] {
        [
            self.battery,
            self.motor,
            self.features,
            self.size,
            self.usage,
        ]
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            battery: 0.30,
            motor: 0.30,
            features: 0.20,
            size: 0.10,
            usage: 0.10,
        }
    }
}

/// Outcome of scoring one item against one answer set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult<'a> {
    pub item: &'a Item,
    pub score: Score,
    pub reasons: Vec<String>,
    pub warnings: Vec<String>,
    pub breakdown: ScoreBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_ignores_budget() {
        let breakdown = ScoreBreakdown {
            battery: 100.0,
            motor: 100.0,
            budget: 100.0,
            features: 50.0,
            size: 100.0,
            usage: 60.0,
        };
        let with_budget = breakdown.composite(&ScoreWeights::default());
        let without_budget = ScoreBreakdown {
            budget: 0.0,
            ..breakdown
        }
        .composite(&ScoreWeights::default());

        assert!((with_budget - 86.0).abs() < 1e-9);
        assert_eq!(with_budget, without_budget);
    }

    #[test]
    fn default_weights_sum_to_one() {
        let sum: Score = ScoreWeights::default().as_array().iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }
}
