use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Sentinel the engine uses for "no value" in free-text fields.
pub const NOT_AVAILABLE: &str = "N/A";

/// Reservation category codes used in Indian admissions cut-offs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryCode {
    General,
    Obc,
    Sc,
    St,
}

impl CategoryCode {
    pub const ALL: [CategoryCode; 4] = [
        CategoryCode::General,
        CategoryCode::Obc,
        CategoryCode::Sc,
        CategoryCode::St,
    ];

    pub fn code(self) -> &'static str {
        match self {
            CategoryCode::General => "GEN",
            CategoryCode::Obc => "OBC",
            CategoryCode::Sc => "SC",
            CategoryCode::St => "ST",
        }
    }
}

/// Opening or closing ranks per category. Values stay strings because the
/// engine may answer with a number, a range or "N/A".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranks {
    #[serde(rename = "GEN")]
    pub general: String,
    #[serde(rename = "OBC")]
    pub obc: String,
    #[serde(rename = "SC")]
    pub sc: String,
    #[serde(rename = "ST")]
    pub st: String,
}

impl Ranks {
    pub fn get(&self, category: CategoryCode) -> &str {
        match category {
            CategoryCode::General => &self.general,
            CategoryCode::Obc => &self.obc,
            CategoryCode::Sc => &self.sc,
            CategoryCode::St => &self.st,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fees {
    pub total: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admissions {
    pub entrance_exam: String,
    pub tentative_exam_date: String,
    pub admission_window: String,
    pub opening_ranks: Ranks,
    pub closing_ranks: Ranks,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placements {
    pub average_package: String,
    pub top_recruiters: Vec<String>,
}

/// A single recommended college. Received from the engine and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct College {
    pub id: String,
    pub college_name: String,
    pub course: String,
    pub fees: Fees,
    pub admissions: Admissions,
    pub scholarships: Vec<String>,
    pub placements: Placements,
    pub notable_alumni: Vec<String>,
    pub career_outcomes: Vec<String>,
    pub foreign_tie_ups: String,
    pub summary: String,
}

impl College {
    /// Foreign partnership text, or `None` when the engine reported none.
    pub fn foreign_tie_ups(&self) -> Option<&str> {
        let value = self.foreign_tie_ups.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(NOT_AVAILABLE) {
            None
        } else {
            Some(value)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceType {
    Book,
    Website,
    Video,
    #[serde(rename = "Mock Test", alias = "MockTest")]
    MockTest,
}

impl ResourceType {
    pub const ALL: [ResourceType; 4] = [
        ResourceType::Book,
        ResourceType::Website,
        ResourceType::Video,
        ResourceType::MockTest,
    ];

    /// Wire literal, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceType::Book => "Book",
            ResourceType::Website => "Website",
            ResourceType::Video => "Video",
            ResourceType::MockTest => "Mock Test",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyPlan {
    pub exam_name: String,
    pub roadmap: Vec<String>,
    pub tips: Vec<String>,
    pub recommended_resources: Vec<Resource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Counsellor {
    pub name: String,
    pub specialization: String,
    pub phone: String,
    pub email: String,
    pub booking_link: String,
    pub note: String,
}

/// One complete engine response. Held in session memory only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceData {
    pub recommendations: Vec<College>,
    pub study_plan: StudyPlan,
    pub career_counsellor: Counsellor,
    pub student_next_steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_note: Option<String>,
}

impl GuidanceData {
    /// Number of colleges the engine is asked for.
    pub const EXPECTED_RECOMMENDATIONS: usize = 5;

    /// Ids that occur more than once, each reported once in first-seen order.
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for college in &self.recommendations {
            let id = college.id.as_str();
            if !seen.insert(id) && reported.insert(id) {
                duplicates.push(id);
            }
        }
        duplicates
    }

    pub fn college(&self, id: &str) -> Option<&College> {
        self.recommendations.iter().find(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::{guidance_fixture, sample_college};

    #[test]
    fn test_fixture_payload_deserializes() {
        let guidance = guidance_fixture();
        assert_eq!(guidance.recommendations.len(), 5);
        assert_eq!(guidance.study_plan.exam_name, "KCET");
        assert!(guidance.location_note.is_none());
        assert!(guidance.duplicate_ids().is_empty());
    }

    #[test]
    fn test_ranks_use_category_codes_on_the_wire() {
        let college = sample_college("c1", "RV College of Engineering");
        let json = serde_json::to_value(&college).unwrap();
        assert_eq!(json["admissions"]["openingRanks"]["GEN"], "1200");
        assert_eq!(json["admissions"]["closingRanks"]["ST"], "N/A");
        assert_eq!(
            college.admissions.closing_ranks.get(CategoryCode::Obc),
            "6400"
        );
    }

    #[test]
    fn test_foreign_tie_ups_sentinel_means_none() {
        let mut college = sample_college("c1", "RVCE");
        college.foreign_tie_ups = "N/A".to_string();
        assert_eq!(college.foreign_tie_ups(), None);
        college.foreign_tie_ups = "  ".to_string();
        assert_eq!(college.foreign_tie_ups(), None);
        college.foreign_tie_ups = "TU Munich exchange".to_string();
        assert_eq!(college.foreign_tie_ups(), Some("TU Munich exchange"));
    }

    #[test]
    fn test_mock_test_resource_type_accepts_both_spellings() {
        let spaced: ResourceType = serde_json::from_str(r#""Mock Test""#).unwrap();
        let joined: ResourceType = serde_json::from_str(r#""MockTest""#).unwrap();
        assert_eq!(spaced, ResourceType::MockTest);
        assert_eq!(joined, ResourceType::MockTest);
        assert_eq!(
            serde_json::to_string(&ResourceType::MockTest).unwrap(),
            r#""Mock Test""#
        );
    }

    #[test]
    fn test_unknown_resource_type_is_rejected() {
        let result: Result<ResourceType, _> = serde_json::from_str(r#""Podcast""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_ids_reported_once() {
        let mut guidance = guidance_fixture();
        let first = guidance.recommendations[0].clone();
        guidance.recommendations.push(first.clone());
        guidance.recommendations.push(first);
        assert_eq!(guidance.duplicate_ids(), vec!["rvce-cse"]);
    }

    #[test]
    fn test_location_note_is_optional_on_input_and_omitted_on_output() {
        let guidance = guidance_fixture();
        let json = serde_json::to_value(&guidance).unwrap();
        assert!(json.get("locationNote").is_none());

        let mut with_note = guidance;
        with_note.location_note = Some("Added Mysore options".to_string());
        let json = serde_json::to_value(&with_note).unwrap();
        assert_eq!(json["locationNote"], "Added Mysore options");
    }

    #[test]
    fn test_college_missing_summary_fails_deserialization() {
        let mut json = serde_json::to_value(sample_college("c1", "RVCE")).unwrap();
        json.as_object_mut().unwrap().remove("summary");
        let result: Result<College, _> = serde_json::from_value(json);
        assert!(result.is_err());
    }
}
