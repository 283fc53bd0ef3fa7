//! Hair/scalp analysis result record

use serde::{Deserialize, Serialize};

/// Upper bound of every score
pub const SCORE_MAX: f64 = 100.0;

/// Structured metrics returned by the analysis service.
///
/// Field names follow the service's JSON schema (camelCase). Values are kept
/// exactly as returned; scores are presumed to lie in 0–100 but are not
/// validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HairAnalysis {
    pub density_score: f64,
    pub thickness_score: f64,
    pub hydration_score: f64,
    pub scalp_health_score: f64,
    pub overall_health_score: f64,
    pub condition: String,
    pub detected_issues: Vec<String>,
    pub recommendations: Vec<String>,
    pub technical_summary: String,
}

/// One labelled biometric score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metric {
    pub label: &'static str,
    pub value: f64,
}

impl Metric {
    /// Score clamped to 0..=100, for bar/gauge rendering
    pub fn clamped(&self) -> f64 {
        clamp_score(self.value)
    }

    /// Ratio in 0.0..=1.0
    pub fn ratio(&self) -> f64 {
        self.clamped() / SCORE_MAX
    }
}

impl HairAnalysis {
    /// The four biometric metrics in display order
    pub fn metrics(&self) -> [Metric; 4] {
        [
            Metric {
                label: "DENSITY",
                value: self.density_score,
            },
            Metric {
                label: "THICKNESS",
                value: self.thickness_score,
            },
            Metric {
                label: "HYDRATION",
                value: self.hydration_score,
            },
            Metric {
                label: "SCALP",
                value: self.scalp_health_score,
            },
        ]
    }

    /// Headline score cards: overall health followed by density, thickness, hydration
    pub fn score_cards(&self) -> [Metric; 4] {
        [
            Metric {
                label: "OVERALL HEALTH",
                value: self.overall_health_score,
            },
            Metric {
                label: "DENSITY",
                value: self.density_score,
            },
            Metric {
                label: "THICKNESS",
                value: self.thickness_score,
            },
            Metric {
                label: "HYDRATION",
                value: self.hydration_score,
            },
        ]
    }
}

/// Clamp a score to 0..=100. NaN maps to 0.
pub fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, SCORE_MAX)
    }
}

/// Whole scores at or above this magnitude keep the decimal form
const INTEGER_FORMAT_LIMIT: f64 = 1e15;

/// Format a score the way the dashboard shows it: integers without decimals
pub fn format_score(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < INTEGER_FORMAT_LIMIT {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}
