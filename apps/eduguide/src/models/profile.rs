use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Total-fee budget tier. Tiers are ordered by increasing spend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BudgetCategory {
    #[default]
    A,
    B,
    C,
    D,
    E,
}

impl BudgetCategory {
    pub const ALL: [BudgetCategory; 5] = [
        BudgetCategory::A,
        BudgetCategory::B,
        BudgetCategory::C,
        BudgetCategory::D,
        BudgetCategory::E,
    ];

    pub fn code(self) -> &'static str {
        match self {
            BudgetCategory::A => "A",
            BudgetCategory::B => "B",
            BudgetCategory::C => "C",
            BudgetCategory::D => "D",
            BudgetCategory::E => "E",
        }
    }

    /// Human-readable label shown next to the tier letter.
    pub fn label(self) -> &'static str {
        match self {
            BudgetCategory::A => "A (Less than ₹4 Lakhs)",
            BudgetCategory::B => "B (₹4–8 Lakhs)",
            BudgetCategory::C => "C (₹8–12 Lakhs)",
            BudgetCategory::D => "D (₹12–20 Lakhs)",
            BudgetCategory::E => "E (Above ₹20 Lakhs)",
        }
    }

    /// Total-fee bounds in lakhs as `(lower, upper)`. `None` means open-ended.
    pub fn fee_bounds_lakhs(self) -> (Option<u32>, Option<u32>) {
        match self {
            BudgetCategory::A => (None, Some(4)),
            BudgetCategory::B => (Some(4), Some(8)),
            BudgetCategory::C => (Some(8), Some(12)),
            BudgetCategory::D => (Some(12), Some(20)),
            BudgetCategory::E => (Some(20), None),
        }
    }

    /// Compact bound description used inside prompts, e.g. `4-8L`.
    pub fn short_range(self) -> String {
        match self.fee_bounds_lakhs() {
            (None, Some(upper)) => format!("<{upper}L"),
            (Some(lower), Some(upper)) => format!("{lower}-{upper}L"),
            (Some(lower), None) => format!(">{lower}L"),
            (None, None) => "any".to_string(),
        }
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for BudgetCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(BudgetCategory::A),
            "B" => Ok(BudgetCategory::B),
            "C" => Ok(BudgetCategory::C),
            "D" => Ok(BudgetCategory::D),
            "E" => Ok(BudgetCategory::E),
            other => Err(format!("unknown budget category '{other}' (expected A-E)")),
        }
    }
}

/// The four-field input that drives a recommendation request.
///
/// `academic_metric` is deliberately left as free text: it may be a board
/// percentage, a competitive rank or an exam score, and the engine decides
/// which.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub academic_metric: String,
    pub preferred_course: String,
    pub budget_category: BudgetCategory,
    pub preferred_location: String,
}

impl StudentProfile {
    /// Names of required text fields that are empty or whitespace-only.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("academicMetric", &self.academic_metric),
            ("preferredCourse", &self.preferred_course),
            ("preferredLocation", &self.preferred_location),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}
