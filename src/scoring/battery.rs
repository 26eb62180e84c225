use super::{figure, Notes};
use crate::requirements::{distance_label, required_range_km};
use crate::types::answers::AnswerSet;
use crate::types::item::Item;
use crate::types::scoring::Score;

pub fn battery_score(item: &Item, answers: &AnswerSet, notes: &mut Notes) -> Score {
    let distance = answers.daily_distance();
    let required = f64::from(required_range_km(distance));

    match item.max_range_km {
        None => {
            notes.warning("Range is not published; check the official specification");
            50.0
        }
        Some(range) if range >= required => {
            notes.reason(format!(
                "Range {}km covers a daily trip of {}",
                figure(range),
                distance_label(distance)
            ));
            100.0
        }
        Some(range) => {
            notes.warning(format!(
                "Range {}km may fall short for a daily trip of {}",
                figure(range),
                distance_label(distance)
            ));
            (range / required * 100.0).max(0.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::fixtures;

    fn score_with_range(range: Option<f64>, distance: &str) -> (Score, Notes) {
        let mut record = fixtures::record();
        record.max_range_km = range;
        let item = Item::from(record);
        let answers = AnswerSet {
            daily_distance: Some(distance.to_string()),
            ..fixtures::answers()
        };
        let mut notes = Notes::default();
        let score = battery_score(&item, &answers, &mut notes);
        (score, notes)
    }

    #[test]
    fn shortfall_gets_proportional_credit_and_a_warning() {
        let (score, notes) = score_with_range(Some(25.0), "10_25");
        assert!((score - 83.333_333_333).abs() < 1e-6);
        assert!(notes.reasons.is_empty());
        assert_eq!(notes.warnings.len(), 1);
        assert!(notes.warnings[0].contains("25"));
        assert!(notes.warnings[0].contains("10-25 km"));
    }

    #[test]
    fn meeting_the_requirement_scores_full_marks() {
        let (score, notes) = score_with_range(Some(30.0), "10_25");
        assert_eq!(score, 100.0);
        assert!(notes.warnings.is_empty());
        assert!(notes.reasons[0].contains("30km"));
        assert!(notes.reasons[0].contains("10-25 km"));
    }

    #[test]
    fn unknown_range_is_neutral() {
        for distance in ["lt_10", "10_25", "25_40", "gt_40", "unknown"] {
            let (score, notes) = score_with_range(None, distance);
            assert_eq!(score, 50.0);
            assert!(notes.warnings[0].contains("not published"));
        }
    }

    #[test]
    fn zero_range_is_not_treated_as_missing() {
        let (score, notes) = score_with_range(Some(0.0), "gt_40");
        assert_eq!(score, 0.0);
        assert!(notes.warnings[0].contains("0km"));
    }
}
