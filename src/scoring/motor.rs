use super::{figure, Notes};
use crate::requirements::{required_motor_power_w, terrain_label, weight_label};
use crate::types::answers::AnswerSet;
use crate::types::item::Item;
use crate::types::scoring::Score;

pub fn motor_score(item: &Item, answers: &AnswerSet, notes: &mut Notes) -> Score {
    let weight = answers.rider_weight();
    let terrain = answers.road_terrain();
    let required = f64::from(required_motor_power_w(weight, terrain));

    match item.motor_power_w() {
        None => {
            notes.warning("Motor power is not published; check the official specification");
            50.0
        }
        Some(power) if power >= required => {
            notes.reason(format!(
                "Motor {}W is enough for a {} rider on {}",
                figure(power),
                weight_label(weight),
                terrain_label(terrain)
            ));
            100.0
        }
        Some(power) => {
            notes.warning(format!(
                "Motor {}W may be underpowered for a {} rider on {}",
                figure(power),
                weight_label(weight),
                terrain_label(terrain)
            ));
            (power / required * 100.0).max(0.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::fixtures;

    fn heavy_rider_on_hills() -> AnswerSet {
        AnswerSet {
            rider_weight: Some("gt_90".to_string()),
            road_terrain: Some("steep".to_string()),
            ..fixtures::answers()
        }
    }

    #[test]
    fn underpowered_motor_gets_proportional_credit() {
        let mut record = fixtures::record();
        record.motor_power_nominal_w = Some(400.0);
        let item = Item::from(record);
        let mut notes = Notes::default();

        let score = motor_score(&item, &heavy_rider_on_hills(), &mut notes);
        assert!((score - 88.888_888_889).abs() < 1e-6);
        assert_eq!(notes.warnings.len(), 1);
        assert!(notes.warnings[0].contains("400W"));
        assert!(notes.warnings[0].contains(">90 kg"));
        assert!(notes.warnings[0].contains("steep hills"));
    }

    #[test]
    fn peak_power_stands_in_for_missing_nominal() {
        let mut record = fixtures::record();
        record.motor_power_nominal_w = None;
        record.motor_power_max_w = Some(500.0);
        let item = Item::from(record);
        let mut notes = Notes::default();

        let score = motor_score(&item, &heavy_rider_on_hills(), &mut notes);
        assert_eq!(score, 100.0);
        assert!(notes.reasons[0].contains("500W"));
    }

    #[test]
    fn no_power_figure_is_neutral() {
        let mut record = fixtures::record();
        record.motor_power_nominal_w = None;
        record.motor_power_max_w = None;
        let item = Item::from(record);
        let mut notes = Notes::default();

        assert_eq!(motor_score(&item, &heavy_rider_on_hills(), &mut notes), 50.0);
        assert!(notes.warnings[0].contains("not published"));
    }
}
