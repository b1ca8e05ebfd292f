//! Password-strength reporting. Scoring and linguistic feedback are
//! delegated entirely to the zxcvbn estimator; this module only maps its
//! 0-4 score onto the fixed label/color table the meter renders.

use serde::Serialize;
use zxcvbn::{zxcvbn, Score};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthReport {
    pub score: u8,
    pub label: String,
    pub color_class: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub suggestions: Vec<String>,
    pub crack_time_display: String,
}

const PLACEHOLDER_LABEL: &str = "Enter a password";
const PLACEHOLDER_COLOR: &str = "bg-gray-300";

fn strength_level(score: Score) -> (u8, &'static str, &'static str) {
    match score {
        Score::Zero => (0, "Very Weak", "bg-red-500"),
        Score::One => (1, "Weak", "bg-orange-500"),
        Score::Two => (2, "Fair", "bg-yellow-500"),
        Score::Three => (3, "Strong", "bg-green-500"),
        _ => (4, "Very Strong", "bg-green-600"),
    }
}

/// Evaluate a candidate password. The empty string short-circuits to the
/// placeholder report without ever invoking the estimator; any other input
/// is accepted as-is, however long.
pub fn evaluate(password: &str) -> StrengthReport {
    if password.is_empty() {
        return StrengthReport {
            score: 0,
            label: PLACEHOLDER_LABEL.to_string(),
            color_class: PLACEHOLDER_COLOR.to_string(),
            warning: None,
            suggestions: Vec::new(),
            crack_time_display: String::new(),
        };
    }

    let entropy = zxcvbn(password, &[]);
    let (score, label, color_class) = strength_level(entropy.score());

    let feedback = entropy.feedback();
    let warning = feedback.and_then(|f| f.warning()).map(|w| w.to_string());
    let suggestions = feedback
        .map(|f| f.suggestions().iter().map(|s| s.to_string()).collect())
        .unwrap_or_default();

    // The meter shows the offline slow-hashing estimate, the middle-of-the-
    // road attack assumption.
    let crack_time_display = entropy
        .crack_times()
        .offline_slow_hashing_1e4_per_second()
        .to_string();

    StrengthReport {
        score,
        label: label.to_string(),
        color_class: color_class.to_string(),
        warning,
        suggestions,
        crack_time_display,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_returns_placeholder_without_estimating() {
        let report = evaluate("");

        assert_eq!(report.label, PLACEHOLDER_LABEL);
        assert_eq!(report.color_class, PLACEHOLDER_COLOR);
        assert_eq!(report.score, 0);
        assert!(report.warning.is_none());
        assert!(report.suggestions.is_empty());
        assert!(report.crack_time_display.is_empty());
    }

    #[test]
    fn weak_password_lands_at_the_bottom_of_the_table() {
        let report = evaluate("password");

        assert!(report.score <= 1);
        assert!(matches!(report.label.as_str(), "Very Weak" | "Weak"));
        assert!(!report.crack_time_display.is_empty());
    }

    #[test]
    fn long_random_passphrase_lands_at_the_top_of_the_table() {
        let report = evaluate("correct-horse-battery-staple-9-quartz");

        assert_eq!(report.score, 4);
        assert_eq!(report.label, "Very Strong");
        assert_eq!(report.color_class, "bg-green-600");
    }

    #[test]
    fn scores_map_to_monotonically_stronger_labels() {
        let labels: Vec<&str> = [Score::Zero, Score::One, Score::Two, Score::Three, Score::Four]
            .into_iter()
            .map(|s| strength_level(s).1)
            .collect();

        assert_eq!(
            labels,
            vec!["Very Weak", "Weak", "Fair", "Strong", "Very Strong"]
        );
    }

    #[test]
    fn very_long_input_is_accepted() {
        let long = "a1!".repeat(300);
        let report = evaluate(&long);
        assert!(report.score <= 4);
    }

    #[test]
    fn report_serializes_with_camel_case_wire_names() {
        let json = serde_json::to_value(evaluate("tr0ub4dor")).unwrap();
        assert!(json.get("colorClass").is_some());
        assert!(json.get("crackTimeDisplay").is_some());
    }
}
