pub mod battery;
pub mod features;
pub mod motor;
pub mod size;
pub mod usage;

use crate::types::answers::AnswerSet;
use crate::types::config::EngineSettings;
use crate::types::item::Item;
use crate::types::scoring::{Score, ScoreBreakdown, ScoreResult};
use rayon::prelude::*;
use tracing::{debug, trace};

pub const BUDGET_PLACEHOLDER: Score = 100.0;

/// Reasons and warnings in the order criteria produce them.
#[derive(Debug, Default)]
pub struct Notes {
    pub reasons: Vec<String>,
    pub warnings: Vec<String>,
}

impl Notes {
    pub fn reason(&mut self, text: impl Into<String>) {
        self.reasons.push(text.into());
    }

    pub fn warning(&mut self, text: impl Into<String>) {
        self.warnings.push(text.into());
    }
}

/// Score one item. Every criterion runs; none short-circuits another.
pub fn score_item<'a>(
    item: &'a Item,
    answers: &AnswerSet,
    settings: &EngineSettings,
) -> ScoreResult<'a> {
    let mut notes = Notes::default();

    let battery = battery::battery_score(item, answers, &mut notes);
    let motor = motor::motor_score(item, answers, &mut notes);
    let category = size::size_category(item.unit_weight_kg);
    let size = size::size_score(category, answers, &mut notes);
    let usage = usage::usage_score(
        item,
        category,
        answers,
        &settings.long_haul_tokens,
        &mut notes,
    );
    let features = features::features_score(item, answers, &mut notes);

    if let Some(authored) = &item.warnings {
        notes.warnings.extend(authored.iter().cloned());
    }

    let breakdown = ScoreBreakdown {
        battery,
        motor,
        budget: BUDGET_PLACEHOLDER,
        features,
        size,
        usage,
    };
    let score = breakdown.composite(&settings.weights);
    trace!(item = %item.id, ?breakdown, "sub-scores computed");
    debug!(item = %item.id, score, "item scored");

    ScoreResult {
        item,
        score,
        reasons: notes.reasons,
        warnings: notes.warnings,
        breakdown,
    }
}

/// Score every item, keeping catalog order. Large catalogs fan out over rayon.
pub fn score_catalog<'a>(
    catalog: &'a [Item],
    answers: &AnswerSet,
    settings: &EngineSettings,
) -> Vec<ScoreResult<'a>> {
    if catalog.len() > settings.parallel_threshold {
        debug!(items = catalog.len(), "scoring catalog in parallel");
        catalog
            .par_iter()
            .map(|item| score_item(item, answers, settings))
            .collect()
    } else {
        debug!(items = catalog.len(), "scoring catalog sequentially");
        catalog
            .iter()
            .map(|item| score_item(item, answers, settings))
            .collect()
    }
}

/// Render a catalog figure the way riders read it: `25` rather than `25.0`.
pub(crate) fn figure(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
