//! Side-by-side comparison of the two processing tiers.

use leptos::*;

use crate::types::ProcessingTier;

/// One line of the comparison table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureRow {
    pub feature: &'static str,
    pub fast: &'static str,
    pub high_quality: &'static str,
}

pub const FEATURE_ROWS: [FeatureRow; 5] = [
    FeatureRow { feature: "Table extraction", fast: "✓", high_quality: "✓" },
    FeatureRow { feature: "Image processing", fast: "Basic", high_quality: "Advanced" },
    FeatureRow { feature: "Formula OCR", fast: "–", high_quality: "✓" },
    FeatureRow { feature: "Processing speed", fast: "Very fast", high_quality: "Moderate" },
    FeatureRow { feature: "Accuracy", fast: "Good", high_quality: "Excellent" },
];

#[component]
pub fn FeatureMatrix() -> impl IntoView {
    view! {
        <table class="feature-matrix">
            <thead>
                <tr>
                    <th>"Feature"</th>
                    <th>{ProcessingTier::Fast.label()}</th>
                    <th>{ProcessingTier::HighQuality.label()}</th>
                </tr>
            </thead>
            <tbody>
                {FEATURE_ROWS
                    .iter()
                    .map(|row| view! {
                        <tr>
                            <td class="feature-name">{row.feature}</td>
                            <td>{row.fast}</td>
                            <td>{row.high_quality}</td>
                        </tr>
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_are_fixed() {
        let names: Vec<_> = FEATURE_ROWS.iter().map(|r| r.feature).collect();
        assert_eq!(
            names,
            ["Table extraction", "Image processing", "Formula OCR", "Processing speed", "Accuracy"]
        );
    }

    #[test]
    fn test_tier_values() {
        let formula = FEATURE_ROWS.iter().find(|r| r.feature == "Formula OCR").unwrap();
        assert_eq!((formula.fast, formula.high_quality), ("–", "✓"));

        let speed = FEATURE_ROWS.iter().find(|r| r.feature == "Processing speed").unwrap();
        assert_eq!((speed.fast, speed.high_quality), ("Very fast", "Moderate"));

        let accuracy = FEATURE_ROWS.iter().find(|r| r.feature == "Accuracy").unwrap();
        assert_eq!((accuracy.fast, accuracy.high_quality), ("Good", "Excellent"));
    }
}
