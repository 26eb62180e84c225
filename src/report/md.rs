use crate::types::report::RecommendationReport;
use crate::types::scoring::ScoreResult;

pub fn to_markdown(report: &RecommendationReport<'_>) -> String {
    let mut output = String::new();
    output.push_str("# Ride Match Report\n\n");
    output.push_str(&format!(
        "Catalog: {} item(s), digest {}\n\n",
        report.catalog_size,
        short_digest(&report.catalog_digest)
    ));
    output.push_str(&format!(
        "- required range: {} km\n- required motor power: {} W\n\n",
        report.required_range_km, report.required_motor_w
    ));

    output.push_str("## Recommendations\n\n");
    if report.recommendations.is_empty() {
        output.push_str("- none\n");
        return output;
    }

    for (index, result) in report.recommendations.iter().enumerate() {
        output.push_str(&format!(
            "### {}. {} (score {:.1})\n\n",
            index + 1,
            result.item.display_name(),
            result.score
        ));
        push_details(&mut output, result);
    }

    output
}

pub fn result_to_markdown(result: &ScoreResult<'_>) -> String {
    let mut output = format!(
        "# {} (score {:.1})\n\n",
        result.item.display_name(),
        result.score
    );
    push_details(&mut output, result);
    output
}

fn push_details(output: &mut String, result: &ScoreResult<'_>) {
    let breakdown = &result.breakdown;
    output.push_str(&format!(
        "- battery: {:.1}\n- motor: {:.1}\n- features: {:.1}\n- size: {:.1}\n- usage: {:.1}\n- budget: {:.1}\n\n",
        breakdown.battery,
        breakdown.motor,
        breakdown.features,
        breakdown.size,
        breakdown.usage,
        breakdown.budget
    ));
    push_list(output, "Reasons", &result.reasons);
    push_list(output, "Warnings", &result.warnings);
}

fn push_list(output: &mut String, title: &str, entries: &[String]) {
    output.push_str(&format!("{title}:\n"));
    if entries.is_empty() {
        output.push_str("- none\n");
    }
    for entry in entries {
        output.push_str(&format!("- {entry}\n"));
    }
    output.push('\n');
}

fn short_digest(digest: &str) -> &str {
    digest.get(..12).unwrap_or(digest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::item::{CatalogRecord, Item};
    use crate::types::scoring::ScoreBreakdown;

    #[test]
    fn markdown_report_lists_ranked_items() {
        let first = Item::from(CatalogRecord::new("f2", "Segway", "F2 Pro"));
        let second = Item::from(CatalogRecord::new("e2", "Segway", "E2"));
        fn result(item: &Item) -> ScoreResult<'_> {
            ScoreResult {
                item,
                score: 81.3,
                reasons: vec!["Compact size suits your needs".to_string()],
                warnings: vec![],
                breakdown: ScoreBreakdown::default(),
            }
        }
        let report = RecommendationReport::new(
            "0123456789abcdef".to_string(),
            2,
            50,
            350,
            vec![result(&first), result(&second)],
        );

        let rendered = to_markdown(&report);
        assert!(rendered.contains("# Ride Match Report"));
        assert!(rendered.contains("digest 0123456789ab\n"));
        assert!(rendered.contains("### 1. Segway F2 Pro (score 81.3)"));
        assert!(rendered.contains("### 2. Segway E2"));
        assert!(rendered.contains("- Compact size suits your needs"));
        assert!(rendered.contains("Warnings:\n- none"));
    }

    #[test]
    fn empty_report_says_so() {
        let report = RecommendationReport::new(String::new(), 0, 30, 250, vec![]);
        assert!(to_markdown(&report).ends_with("## Recommendations\n\n- none\n"));
    }
}
