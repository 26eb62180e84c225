//! Feature matching. Each criterion adds its own points; the total is not capped.

use super::{figure, Notes};
use crate::types::answers::AnswerSet;
use crate::types::item::{BrakeType, Item};
use crate::types::scoring::Score;
use tracing::debug;

const MATCH: Score = 20.0;
const NEUTRAL: Score = 10.0;
const PARTIAL_SUSPENSION: Score = 15.0;
const TIRE_SIZE_MATCH: Score = 10.0;
const TIRE_SIZE_UNKNOWN: Score = 5.0;
const PORTABLE_MAX_KG: f64 = 16.0;

pub fn features_score(item: &Item, answers: &AnswerSet, notes: &mut Notes) -> Score {
    let mut points = 0.0;
    points += top_speed(item, answers, notes);
    points += tire_type(item, answers, notes);
    points += brakes(item, answers, notes);
    points += suspension(item, answers, notes);
    points += water_resistance(item, answers, notes);
    points += tire_size(item, answers, notes);
    portability(item, answers, notes);

    if answers.warranty_service.as_deref() == Some("yes") {
        debug!(item = %item.id, "official service preference is not scored");
    }

    points
}

fn top_speed(item: &Item, answers: &AnswerSet, notes: &mut Notes) -> Score {
    let Some(speed) = item.max_speed_kmh else {
        return NEUTRAL;
    };
    let Some(requested) = answers.requested_speed_kmh() else {
        return NEUTRAL;
    };

    if speed >= requested {
        notes.reason(format!("Top speed {} km/h meets your needs", figure(speed)));
        MATCH
    } else {
        notes.warning(format!(
            "Top speed {} km/h is below the requested {} km/h",
            figure(speed),
            figure(requested)
        ));
        0.0
    }
}

fn tire_type(item: &Item, answers: &AnswerSet, notes: &mut Notes) -> Score {
    let Some(preferred) = AnswerSet::preference(&answers.tire_preference) else {
        return NEUTRAL;
    };

    let actual = item.tire_type.as_str();
    if actual == preferred {
        notes.reason(format!("Tire type {actual} matches your preference"));
        MATCH
    } else {
        notes.warning(format!(
            "Tire type {actual} does not match your preference ({preferred})"
        ));
        0.0
    }
}

fn brakes(item: &Item, answers: &AnswerSet, notes: &mut Notes) -> Score {
    let Some(preferred) = AnswerSet::preference(&answers.brake_preference) else {
        return NEUTRAL;
    };

    let either_side = |brake: BrakeType| item.front_brake == brake || item.rear_brake == brake;
    let matched = match preferred {
        "electronic" => either_side(BrakeType::Electronic),
        "mechanical_disc" => either_side(BrakeType::MechanicalDisc),
        "hydraulic_disc" => item.brakes.has_hydraulic,
        "combined" => item.brakes.has_disc && item.brakes.has_electronic,
        _ => false,
    };

    if matched {
        notes.reason("Brake system matches your preference");
        MATCH
    } else {
        notes.warning("Brake system does not match your preference");
        0.0
    }
}

fn suspension(item: &Item, answers: &AnswerSet, notes: &mut Notes) -> Score {
    let preferred = match answers.suspension_preference.as_deref() {
        Some(token) if !token.is_empty() => token,
        _ => return 0.0,
    };
    let actual = item.suspension;

    if preferred == actual.as_str() {
        notes.reason(match preferred {
            "none" => "No suspension, as preferred",
            "front" => "Front suspension matches your preference",
            "rear" => "Rear suspension matches your preference",
            _ => "Front and rear suspension matches your preference",
        });
        return MATCH;
    }

    if preferred == "none" {
        return 0.0;
    }

    if actual.is_present() {
        notes.reason(format!("Suspension available ({})", actual.as_str()));
        PARTIAL_SUSPENSION
    } else {
        notes.warning("Suspension requested but not available");
        0.0
    }
}

fn water_resistance(item: &Item, answers: &AnswerSet, notes: &mut Notes) -> Score {
    let rated = item.has_ip_rating();
    let rating = item.ip_body.as_deref().unwrap_or_default();

    match (answers.water_resistance.as_deref(), rated) {
        (Some("high"), true) if item.ip_body_level() >= 5 => {
            notes.reason(format!("IP rating {rating} suits frequent rain"));
            MATCH
        }
        (Some("high"), true) => {
            notes.warning(format!(
                "IP rating {rating} may not be enough for frequent rain"
            ));
            NEUTRAL
        }
        (Some("medium"), true) => {
            notes.reason(format!("IP rating {rating} handles occasional rain"));
            MATCH
        }
        (Some("high"), false) => {
            notes.warning("High water resistance requested but no IP rating is published");
            0.0
        }
        (Some("low"), _) => NEUTRAL,
        _ => 0.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TireSizeBucket {
    Small,
    Medium,
    Large,
}

impl TireSizeBucket {
    fn of(inches: f64) -> Self {
        if inches < 10.0 {
            Self::Small
        } else if inches < 11.0 {
            Self::Medium
        } else {
            Self::Large
        }
    }

    fn matches(self, token: &str) -> bool {
        matches!(
            (self, token),
            (Self::Small, "small") | (Self::Medium, "medium") | (Self::Large, "large")
        )
    }
}

fn tire_size(item: &Item, answers: &AnswerSet, notes: &mut Notes) -> Score {
    let Some(preferred) = AnswerSet::preference(&answers.tire_size_preference) else {
        return 0.0;
    };
    let Some(inches) = item.tire_size_inch() else {
        return TIRE_SIZE_UNKNOWN;
    };

    if TireSizeBucket::of(inches).matches(preferred) {
        notes.reason(format!("Tire size {inches:.1}\" matches your preference"));
        TIRE_SIZE_MATCH
    } else {
        0.0
    }
}

fn portability(item: &Item, answers: &AnswerSet, notes: &mut Notes) {
    if answers.portability.as_deref() != Some("yes") {
        return;
    }

    match item.unit_weight_kg {
        None => notes.warning("Portability needed but the unit weight is not published"),
        Some(kg) if kg > PORTABLE_MAX_KG => notes.warning(format!(
            "Portability needed but {}kg is hard to carry up stairs",
            figure(kg)
        )),
        Some(kg) => notes.reason(format!("Light ({}kg) and easy to carry", figure(kg))),
    }

    if item.foldable {
        notes.reason("Folds down for carrying");
    } else {
        notes.warning("Portability needed but the frame does not fold");
    }
}
