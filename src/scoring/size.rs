use super::Notes;
use crate::types::answers::AnswerSet;
use crate::types::scoring::Score;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCategory {
    Compact,
    Standard,
    Large,
}

impl SizeCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Standard => "standard",
            Self::Large => "large",
        }
    }

    fn matched_reason(self) -> &'static str {
        match self {
            Self::Compact => "Compact size suits your needs",
            Self::Standard => "Standard size strikes a balance",
            Self::Large => "Large frame suits performance riding",
        }
    }
}

/// Compact under 15 kg, standard up to 18 kg, large beyond.
pub fn size_category(unit_weight_kg: Option<f64>) -> Option<SizeCategory> {
    let weight = unit_weight_kg?;
    Some(if weight < 15.0 {
        SizeCategory::Compact
    } else if weight <= 18.0 {
        SizeCategory::Standard
    } else {
        SizeCategory::Large
    })
}

pub fn size_score(
    category: Option<SizeCategory>,
    answers: &AnswerSet,
    notes: &mut Notes,
) -> Score {
    match category {
        Some(category) if answers.size_preference.as_deref() == Some(category.as_str()) => {
            notes.reason(category.matched_reason());
            100.0
        }
        _ => 50.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefer(size: &str) -> AnswerSet {
        AnswerSet {
            size_preference: Some(size.to_string()),
            ..AnswerSet::default()
        }
    }

    #[test]
    fn weight_boundaries_classify_as_expected() {
        assert_eq!(size_category(Some(14.9)), Some(SizeCategory::Compact));
        assert_eq!(size_category(Some(15.0)), Some(SizeCategory::Standard));
        assert_eq!(size_category(Some(18.0)), Some(SizeCategory::Standard));
        assert_eq!(size_category(Some(18.1)), Some(SizeCategory::Large));
        assert_eq!(size_category(None), None);
    }

    #[test]
    fn matching_category_scores_full_marks() {
        let mut notes = Notes::default();
        let score = size_score(Some(SizeCategory::Large), &prefer("large"), &mut notes);
        assert_eq!(score, 100.0);
        assert_eq!(notes.reasons, vec!["Large frame suits performance riding"]);
    }

    #[test]
    fn mismatch_and_unknown_weight_are_silent_half_credit() {
        let mut notes = Notes::default();
        assert_eq!(
            size_score(Some(SizeCategory::Standard), &prefer("compact"), &mut notes),
            50.0
        );
        assert_eq!(size_score(None, &prefer("compact"), &mut notes), 50.0);
        assert!(notes.reasons.is_empty());
        assert!(notes.warnings.is_empty());
    }
}
