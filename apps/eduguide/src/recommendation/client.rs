//! Recommendation client: one request/response cycle against the engine.
//!
//! Flow: build_request → engine.generate → strip fences → parse → validate.
//! Single attempt, all-or-nothing, no caching. Retrying is the caller's call.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{strip_json_fences, GenerativeEngine};
use crate::models::guidance::GuidanceData;
use crate::models::profile::StudentProfile;
use crate::recommendation::request::build_request;

#[derive(Clone)]
pub struct RecommendationClient {
    engine: Arc<dyn GenerativeEngine>,
}

impl RecommendationClient {
    pub fn new(engine: Arc<dyn GenerativeEngine>) -> Self {
        Self { engine }
    }

    /// Fetches and validates guidance for a profile.
    ///
    /// The profile is trusted to be complete; the controller checks that
    /// before calling.
    pub async fn fetch_recommendations(
        &self,
        profile: &StudentProfile,
    ) -> Result<GuidanceData, AppError> {
        let request = build_request(profile);

        info!(
            "Requesting recommendations: course={:?}, budget={}, location={:?}",
            profile.preferred_course,
            profile.budget_category.label(),
            profile.preferred_location
        );

        let raw = self
            .engine
            .generate(&request, JSON_ONLY_SYSTEM)
            .await
            .map_err(|e| {
                error!("Engine call failed: {e}");
                AppError::Service(e)
            })?;

        let guidance = parse_guidance(&raw)?;

        info!(
            "Received {} recommendations (study plan: {})",
            guidance.recommendations.len(),
            guidance.study_plan.exam_name
        );

        Ok(guidance)
    }
}

/// Parses raw engine text into `GuidanceData` and enforces the invariants the
/// schema cannot express.
pub fn parse_guidance(raw: &str) -> Result<GuidanceData, AppError> {
    let text = strip_json_fences(raw);

    let guidance: GuidanceData = serde_json::from_str(text).map_err(|e| {
        error!(
            "Engine response did not match the guidance schema: {e} (first 120 chars: {:?})",
            text.chars().take(120).collect::<String>()
        );
        AppError::invalid_response(e.to_string())
    })?;

    let duplicates = guidance.duplicate_ids();
    if !duplicates.is_empty() {
        error!("Engine response repeated college ids: {duplicates:?}");
        return Err(AppError::invalid_response(format!(
            "duplicate college ids: {}",
            duplicates.join(", ")
        )));
    }

    if guidance.recommendations.len() != GuidanceData::EXPECTED_RECOMMENDATIONS {
        warn!(
            "Engine returned {} recommendations (expected {})",
            guidance.recommendations.len(),
            GuidanceData::EXPECTED_RECOMMENDATIONS
        );
    }

    Ok(guidance)
}
