use super::size::SizeCategory;
use super::Notes;
use crate::types::answers::AnswerSet;
use crate::types::item::Item;
use crate::types::scoring::Score;

const DEFAULT_USAGE_SCORE: Score = 60.0;

/// First matching usage profile wins; no match earns the default without comment.
pub fn usage_score(
    item: &Item,
    category: Option<SizeCategory>,
    answers: &AnswerSet,
    long_haul_tokens: &[String],
    notes: &mut Notes,
) -> Score {
    let usage = answers.usage_type.as_deref().unwrap_or_default();
    let weight = item.unit_weight_kg;

    if usage == "commute"
        && category == Some(SizeCategory::Compact)
        && weight.map(|kg| kg < 16.0).unwrap_or(false)
    {
        notes.reason("Suits daily commuting (light and compact)");
        return 100.0;
    }

    if long_haul_tokens.iter().any(|token| token == usage)
        && item.max_range_km.map(|km| km >= 40.0).unwrap_or(false)
    {
        notes.reason("Suits delivery and long-distance work (long range)");
        return 100.0;
    }

    if usage == "weekend" && item.motor_power_w().map(|w| w >= 350.0).unwrap_or(false) {
        notes.reason("Suits weekend riding (strong motor)");
        return 100.0;
    }

    DEFAULT_USAGE_SCORE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::fixtures;
    use crate::scoring::size::size_category;

    fn stock_tokens() -> Vec<String> {
        vec!["production".to_string()]
    }

    fn score(item: &Item, usage: &str, tokens: &[String]) -> (Score, Notes) {
        let answers = AnswerSet {
            usage_type: Some(usage.to_string()),
            ..fixtures::answers()
        };
        let mut notes = Notes::default();
        let category = size_category(item.unit_weight_kg);
        let score = usage_score(item, category, &answers, tokens, &mut notes);
        (score, notes)
    }

    #[test]
    fn light_compact_item_suits_commuting() {
        let (value, notes) = score(&fixtures::item(), "commute", &stock_tokens());
        assert_eq!(value, 100.0);
        assert_eq!(notes.reasons.len(), 1);
    }

    #[test]
    fn long_range_matches_production_token_only_by_default() {
        let mut record = fixtures::record();
        record.max_range_km = Some(45.0);
        let item = Item::from(record);

        assert_eq!(score(&item, "production", &stock_tokens()).0, 100.0);
        assert_eq!(score(&item, "ojol", &stock_tokens()).0, 60.0);

        let widened = vec!["production".to_string(), "ojol".to_string()];
        assert_eq!(score(&item, "ojol", &widened).0, 100.0);
    }

    #[test]
    fn weekend_needs_a_strong_motor() {
        let mut record = fixtures::record();
        record.motor_power_nominal_w = Some(350.0);
        let item = Item::from(record);
        assert_eq!(score(&item, "weekend", &stock_tokens()).0, 100.0);

        let (value, notes) = score(&fixtures::item(), "weekend", &stock_tokens());
        assert_eq!(value, 60.0);
        assert!(notes.reasons.is_empty());
        assert!(notes.warnings.is_empty());
    }

    #[test]
    fn heavy_item_is_not_a_commuter() {
        let mut record = fixtures::record();
        record.unit_weight_kg = Some(17.0);
        let item = Item::from(record);
        assert_eq!(score(&item, "commute", &stock_tokens()).0, 60.0);
    }
}
