//! Request builder. Turns a `StudentProfile` into the prompt and response
//! schema for one engine call. Pure and deterministic.

use crate::llm_client::EngineRequest;
use crate::models::guidance::GuidanceData;
use crate::models::profile::{BudgetCategory, StudentProfile};
use crate::recommendation::prompts::RECOMMENDATION_PROMPT_TEMPLATE;
use crate::recommendation::schema::guidance_schema;

/// Inline tier legend, e.g. `A: <4L, B: 4-8L, ...`.
fn budget_table() -> String {
    BudgetCategory::ALL
        .iter()
        .map(|tier| format!("{}: {}", tier.code(), tier.short_range()))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn build_prompt(profile: &StudentProfile) -> String {
    RECOMMENDATION_PROMPT_TEMPLATE
        .replace(
            "{expected_count}",
            &GuidanceData::EXPECTED_RECOMMENDATIONS.to_string(),
        )
        .replace("{budget_table}", &budget_table())
        .replace("{budget_category}", profile.budget_category.code())
        .replace("{academic_metric}", profile.academic_metric.trim())
        .replace("{preferred_course}", profile.preferred_course.trim())
        .replace("{preferred_location}", profile.preferred_location.trim())
}

/// Builds the full engine request for a profile.
pub fn build_request(profile: &StudentProfile) -> EngineRequest {
    EngineRequest {
        prompt: build_prompt(profile),
        schema: guidance_schema(),
    }
}
