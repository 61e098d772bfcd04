//! Illustrative study data
//!
//! The dataset is fixed sample data for teaching how a forest plot is read.
//! Nothing here is computed: the pooled record is a literal constant, not a
//! weighted combination of the studies.

/// One row of the forest plot: a study's effect estimate on a risk-ratio
/// scale, its 95% confidence interval, and its meta-analytic weight.
///
/// Invariant (holds by construction): `ci_low <= effect <= ci_high`.
#[derive(Debug, Clone, PartialEq)]
pub struct StudyRecord {
    pub name: &'static str,
    pub effect: f64,
    pub ci_low: f64,
    pub ci_high: f64,
    pub weight_percent: f64,
}

impl StudyRecord {
    /// Middle-column text: `"0.75 [0.55, 0.95]"`
    pub fn effect_label(&self) -> String {
        format!(
            "{:.2} [{:.2}, {:.2}]",
            self.effect, self.ci_low, self.ci_high
        )
    }

    /// Right-column text: `"15%"`
    pub fn weight_label(&self) -> String {
        format!("{:.0}%", self.weight_percent)
    }
}

/// The five illustrative studies, in display order (top to bottom).
pub fn sample_studies() -> Vec<StudyRecord> {
    vec![
        StudyRecord {
            name: "Silva et al., 2018",
            effect: 0.75,
            ci_low: 0.55,
            ci_high: 0.95,
            weight_percent: 15.0,
        },
        StudyRecord {
            name: "Santos et al., 2019",
            effect: 0.82,
            ci_low: 0.65,
            ci_high: 0.99,
            weight_percent: 25.0,
        },
        StudyRecord {
            name: "Oliveira et al., 2020",
            effect: 0.68,
            ci_low: 0.52,
            ci_high: 0.84,
            weight_percent: 20.0,
        },
        StudyRecord {
            name: "Costa et al., 2021",
            effect: 0.71,
            ci_low: 0.58,
            ci_high: 0.84,
            weight_percent: 18.0,
        },
        StudyRecord {
            name: "Pereira et al., 2022",
            effect: 0.85,
            ci_low: 0.70,
            ci_high: 1.00,
            weight_percent: 22.0,
        },
    ]
}

/// The combined (pooled) effect shown below the separator line.
///
/// Conceptually the weighted combination of all studies; here a fixed
/// illustrative constant with weight 100%.
pub fn pooled_record() -> StudyRecord {
    StudyRecord {
        name: "Combined effect",
        effect: 0.76,
        ci_low: 0.68,
        ci_high: 0.84,
        weight_percent: 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_study_count() {
        assert_eq!(sample_studies().len(), 5);
    }

    #[test]
    fn test_ci_contains_effect() {
        for study in sample_studies() {
            assert!(
                study.ci_low <= study.effect && study.effect <= study.ci_high,
                "CI of '{}' does not contain its point estimate",
                study.name
            );
        }
    }

    #[test]
    fn test_pooled_record() {
        let pooled = pooled_record();
        assert_eq!(pooled.effect, 0.76);
        assert_eq!(pooled.ci_low, 0.68);
        assert_eq!(pooled.ci_high, 0.84);
        assert_eq!(pooled.weight_percent, 100.0);
        assert!(pooled.ci_low <= pooled.effect && pooled.effect <= pooled.ci_high);
    }

    #[test]
    fn test_effect_label_format() {
        let pooled = pooled_record();
        assert_eq!(pooled.effect_label(), "0.76 [0.68, 0.84]");
        assert_eq!(pooled.weight_label(), "100%");
    }

    #[test]
    fn test_weights_are_percentages() {
        let total: f64 = sample_studies().iter().map(|s| s.weight_percent).sum();
        assert_eq!(total, 100.0);
    }
}
